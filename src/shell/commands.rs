//! Shell command grammar and the built-in command table.
//!
//! # Syntax
//!
//! ```text
//! line    := command (whitespace argument)*
//! command := help | find | clear | exit | ls | exp | about | skills   (case-insensitive)
//! ```
//!
//! Arguments are re-joined with single spaces, so `find   react   native` searches for
//! `react native`. Only `find` takes an argument; the other built-ins ignore any they get.

/// One of the fixed commands the shell understands
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BuiltIn {
    Help,
    Find,
    Clear,
    Exit,
    Ls,
    Exp,
    About,
    Skills,
}

impl BuiltIn {
    /// Help listing order
    pub const ALL: [BuiltIn; 8] = [
        Self::Help,
        Self::Find,
        Self::Clear,
        Self::Exit,
        Self::Ls,
        Self::Exp,
        Self::About,
        Self::Skills,
    ];

    pub fn name(self) -> &'static str {
        match self {
            Self::Help => "help",
            Self::Find => "find",
            Self::Clear => "clear",
            Self::Exit => "exit",
            Self::Ls => "ls",
            Self::Exp => "exp",
            Self::About => "about",
            Self::Skills => "skills",
        }
    }

    pub fn usage(self) -> &'static str {
        match self {
            Self::Find => "find <keyword>",
            other => other.name(),
        }
    }

    pub fn description(self) -> &'static str {
        match self {
            Self::Help => "Show this help message",
            Self::Find => "Search for projects and experience containing the keyword",
            Self::Clear => "Clear terminal",
            Self::Exit => "Close terminal",
            Self::Ls => "List all projects",
            Self::Exp => "List all experience",
            Self::About => "Show information about me",
            Self::Skills => "Show technical skills",
        }
    }

    /// Case-insensitive lookup of a command token
    pub fn lookup(token: &str) -> Option<Self> {
        let token = token.to_lowercase();
        Self::ALL.into_iter().find(|b| b.name() == token)
    }
}

/// A non-blank input line split into command token and argument string
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ParsedLine<'a> {
    /// As typed, case preserved
    pub token: &'a str,
    /// Remaining words joined by single spaces; empty when there are none
    pub args: String,
}

/// Split a line into command and arguments. `None` for blank input.
pub fn parse_line(line: &str) -> Option<ParsedLine<'_>> {
    let mut words = line.split_whitespace();
    let token = words.next()?;
    let args = words.collect::<Vec<_>>().join(" ");
    Some(ParsedLine { token, args })
}

/// The `help` block, one bullet per built-in
pub fn help_text() -> String {
    let mut text = String::from("Available commands:");
    for builtin in BuiltIn::ALL {
        text.push_str(&format!("\n• {} - {}", builtin.usage(), builtin.description()));
    }
    text
}

pub fn find_usage() -> &'static str {
    "Usage: find <keyword>\nExample: find React"
}

pub fn unknown_command(token: &str) -> String {
    format!("Command not found: {}\nType \"help\" for available commands.", token)
}

pub const DEFAULT_ABOUT: &str = "Vatsal Labh:
  EDUCATION: B.Sc. Computer Science - University at Buffalo (Summa Cum Laude)
  POSITIONS: Software Engineer, Data Scientist, and AI Practitioner
  ABOUT ME: Passionate about turning complex ideas into working, reliable systems
  PORTFOLIO: https://vatsal.online
  EMAIL: vatsal.12505@gmail.com
  LINKEDIN: https://www.linkedin.com/in/vatsal-labh/
  GITHUB: https://github.com/Jimbob12505";

pub const DEFAULT_SKILLS: &str = "Technical Skills:
  Programming Languages: JavaScript/TypeScript, Python, Java, C++
  Web Technologies: React, Next.js, Node.js, Express, MongoDB
  AI/ML: TensorFlow, PyTorch, Scikit-learn, Pandas, NumPy
  Data Science: SQL, PostgreSQL, Data Analysis, Visualization
  Cloud & DevOps: Docker, AWS, Git, CI/CD
  Mobile: React Native, Swift, Kotlin
  Frontend: HTML, CSS, Tailwind CSS, Framer Motion";
