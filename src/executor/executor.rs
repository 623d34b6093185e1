use std::ffi::NulError;
use std::io;

use nix::errno::Errno;
use thiserror::Error;

use super::builtins::BuiltinError;
use crate::command::Command;

pub type ExecStatus = Result<ExecOutcome, ExecError>;

/// What the main loop should do after a command has run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecOutcome {
    /// Keep reading lines; carries the command's exit status.
    Code(i32),
    /// Stop the interpreter with this status.
    Exit(i32),
}

#[derive(Debug, Error)]
pub enum ExecError {
    #[error(transparent)]
    Builtin(#[from] BuiltinError),
    #[error("argument contains an interior NUL byte")]
    InteriorNul(#[from] NulError),
    #[error("{0}")]
    Flush(#[source] io::Error),
    #[error("{}", .0.desc())]
    Fork(Errno),
    #[error("{}", .0.desc())]
    Wait(Errno),
}

impl ExecError {
    /// Failures of the interpreter itself, as opposed to a bad command line.
    pub fn is_fatal(&self) -> bool {
        matches!(
            self,
            ExecError::Flush(_) | ExecError::Fork(_) | ExecError::Wait(_)
        )
    }
}

pub trait Executor {
    /// Runs `command` to completion. The executor owns the command and drops
    /// it once its effect is done.
    fn exec(&mut self, command: Command) -> ExecStatus;
}
