pub mod command;
pub mod config;
pub mod environment;
pub mod error;
pub mod executor;
pub mod io;
pub mod lexer;
pub mod parser;
pub mod prompt;
pub mod repl;

pub use command::{Command, RedirectKind};
pub use config::{Args, Config, Mode};
pub use error::ShellError;
pub use repl::Repl;
