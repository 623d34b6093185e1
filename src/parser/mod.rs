pub mod builder;

use thiserror::Error;

use crate::command::{Command, RedirectKind};

pub use builder::CommandBuilder;

pub trait Parser {
    /// Builds a command from the token stream. `Ok(None)` means there was
    /// nothing to build (a blank line).
    fn parse(&mut self) -> Result<Option<Command>, ParseError>;
}

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ParseError {
    #[error("missing command name")]
    MissingCommandName,
    #[error("multiple redirection of standard input")]
    MultipleStdinRedirect,
    #[error("multiple redirection of standard output")]
    MultipleStdoutRedirect,
    #[error("{0} redirection without file name")]
    MissingRedirectTarget(RedirectKind),
}

impl ParseError {
    fn multiple(kind: RedirectKind) -> Self {
        match kind {
            RedirectKind::In => ParseError::MultipleStdinRedirect,
            RedirectKind::Out => ParseError::MultipleStdoutRedirect,
        }
    }
}
