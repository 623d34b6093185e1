use std::io;

use thiserror::Error;

use crate::executor::ExecError;
use crate::lexer::LexError;
use crate::parser::ParseError;

/// Anything that can go wrong while handling one input line.
#[derive(Debug, Error)]
pub enum ShellError {
    #[error(transparent)]
    Lex(#[from] LexError),
    #[error(transparent)]
    Parse(#[from] ParseError),
    #[error(transparent)]
    Exec(#[from] ExecError),
    #[error("{0}")]
    Io(#[from] io::Error),
}

impl ShellError {
    /// Fatal errors end the main loop; the rest are reported and the next
    /// line is read.
    pub fn is_fatal(&self) -> bool {
        match self {
            ShellError::Lex(_) | ShellError::Parse(_) => false,
            ShellError::Exec(e) => e.is_fatal(),
            ShellError::Io(_) => true,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::executor::BuiltinError;

    #[test]
    fn test_messages_are_passed_through() {
        assert_eq!(ShellError::from(LexError::UnmatchedQuote).to_string(), "unmatched quote");
        assert_eq!(
            ShellError::from(ParseError::MissingCommandName).to_string(),
            "missing command name"
        );
        let exec = ExecError::from(BuiltinError::HomeNotSet);
        assert_eq!(ShellError::from(exec).to_string(), "HOME environment variable not set");
    }

    #[test]
    fn test_fatality() {
        assert!(!ShellError::from(LexError::UnmatchedQuote).is_fatal());
        assert!(!ShellError::from(ExecError::from(BuiltinError::MissingVariable)).is_fatal());
        assert!(ShellError::from(ExecError::Fork(nix::errno::Errno::EAGAIN)).is_fatal());
        assert!(ShellError::from(io::Error::other("broken pipe")).is_fatal());
    }
}
