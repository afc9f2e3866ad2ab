pub mod environment;
pub mod terminal;

pub use environment::{default_config_path, default_log_path};
pub use terminal::strip_ansi_codes;
