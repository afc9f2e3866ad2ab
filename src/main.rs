use std::process::ExitCode;

fn main() -> ExitCode {
    match portfolio_shell::cli::run() {
        Ok(code) => code,
        Err(e) => {
            eprintln!("Error: {:#}", e);
            ExitCode::FAILURE
        }
    }
}
