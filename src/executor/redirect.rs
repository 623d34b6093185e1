use std::io::{self, Write};
use std::os::unix::io::RawFd;

use nix::errno::Errno;
use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;
use nix::unistd::{close, dup2};
use thiserror::Error;

use crate::command::Command;

#[derive(Debug, Error)]
pub enum RedirectError {
    #[error("{}", .0.desc())]
    Sys(#[from] Errno),
    #[error("{0}")]
    Flush(#[from] io::Error),
}

/// Rebinds the standard descriptors of a freshly forked child. Never call
/// this in the interpreter process itself.
pub struct RedirectHandler;

impl RedirectHandler {
    pub fn apply(command: &Command) -> Result<(), RedirectError> {
        if let Some(path) = command.stdin() {
            let fd = open(path, OFlag::O_RDONLY, Mode::empty())?;
            Self::install(fd, libc::STDIN_FILENO)?;
        }

        io::stdout().flush()?;
        if let Some(path) = command.stdout() {
            let fd = open(
                path,
                OFlag::O_WRONLY | OFlag::O_CREAT | OFlag::O_TRUNC,
                Mode::S_IRUSR | Mode::S_IWUSR,
            )?;
            Self::install(fd, libc::STDOUT_FILENO)?;
        }
        Ok(())
    }

    /// Moves `fd` onto `slot`, replacing whatever was there, and closes the
    /// now redundant original.
    pub fn install(fd: RawFd, slot: RawFd) -> Result<(), Errno> {
        if fd == slot {
            // slot was closed and open() reused it
            return Ok(());
        }
        dup2(fd, slot)?;
        close(fd)
    }
}
