use std::io::{self, Write};
use std::process;

use log::{debug, info};
use nix::errno::Errno;
use nix::sys::signal::{signal, SigHandler, Signal};
use nix::sys::wait::{waitpid, WaitStatus};
use nix::unistd::{fork, ForkResult, Pid};

use super::builtins::BuiltinManager;
use super::executor::{ExecError, ExecOutcome, ExecStatus, Executor};
use super::redirect::RedirectHandler;
use crate::command::{Argv, Command};
use crate::environment::Environment;

/// Runs builtins in-process and everything else in a forked child, waiting
/// for it before returning.
pub struct DefaultExecutor<E: Environment> {
    program: String,
    env: E,
    builtins: BuiltinManager,
}

impl<E: Environment> DefaultExecutor<E> {
    pub fn new(program: impl Into<String>, env: E) -> Self {
        DefaultExecutor {
            program: program.into(),
            env,
            builtins: BuiltinManager::new(),
        }
    }

    pub fn env(&self) -> &E {
        &self.env
    }

    fn exec_external(&mut self, command: &Command) -> ExecStatus {
        let argv = command.argv()?;

        // Anything still buffered would otherwise be written twice, once by
        // each process.
        io::stdout().flush().map_err(ExecError::Flush)?;
        io::stderr().flush().map_err(ExecError::Flush)?;

        // SAFETY: the interpreter is single-threaded, so the child may run
        // arbitrary code until it execs.
        match unsafe { fork() }.map_err(ExecError::Fork)? {
            ForkResult::Child => self.run_child(command, &argv),
            ForkResult::Parent { child } => {
                debug!("spawned {} as pid {}", command.name(), child);
                let code = wait_for(child)?;
                info!("{} (pid {}) exited with status {}", command.name(), child, code);
                Ok(ExecOutcome::Code(code))
            }
        }
    }

    fn run_child(&self, command: &Command, argv: &Argv) -> ! {
        // The Rust runtime ignores SIGPIPE and exec keeps ignored signals
        // ignored, so put the default back for the new program.
        // SAFETY: installs the default disposition, no handler code runs.
        if let Err(e) = unsafe { signal(Signal::SIGPIPE, SigHandler::SigDfl) } {
            eprintln!("{}: {}", self.program, e.desc());
            process::exit(1);
        }
        if let Err(e) = RedirectHandler::apply(command) {
            eprintln!("{}: {}", self.program, e);
            process::exit(1);
        }

        // SAFETY: argv keeps every string and the null-terminated pointer
        // table alive across the call.
        unsafe { libc::execvp(argv.program().as_ptr(), argv.as_ptr()) };

        eprintln!("{}: No such file or directory", self.program);
        process::exit(1);
    }
}

fn wait_for(child: Pid) -> Result<i32, ExecError> {
    loop {
        match waitpid(child, None) {
            Ok(WaitStatus::Exited(_, code)) => return Ok(code),
            Ok(WaitStatus::Signaled(_, sig, _)) => return Ok(128 + sig as i32),
            Ok(_) => continue,
            Err(Errno::EINTR) => continue,
            Err(e) => return Err(ExecError::Wait(e)),
        }
    }
}

impl<E: Environment> Executor for DefaultExecutor<E> {
    fn exec(&mut self, command: Command) -> ExecStatus {
        if let Some(status) = self.builtins.execute(command.name(), command.args(), &mut self.env) {
            if command.stdin().is_some() || command.stdout().is_some() {
                debug!("ignored redirection on builtin {}", command.name());
            }
            return status;
        }
        self.exec_external(&command)
    }
}
