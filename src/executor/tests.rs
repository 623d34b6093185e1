use crate::command::Command;
use crate::executor::{ExecOutcome, ExecStatus, Executor, BuiltinError};

/// Records every command instead of running it. `exit` still stops the loop
/// and `fail` reports a builtin error, so callers can exercise both paths.
pub struct MockExecutor {
    pub commands: Vec<Command>,
}

impl MockExecutor {
    pub fn new() -> Self {
        Self { commands: Vec::new() }
    }
}

impl Executor for MockExecutor {
    fn exec(&mut self, command: Command) -> ExecStatus {
        let outcome = match command.name() {
            "exit" => Ok(ExecOutcome::Exit(0)),
            "fail" => Err(BuiltinError::TooManyArguments.into()),
            _ => Ok(ExecOutcome::Code(0)),
        };
        self.commands.push(command);
        outcome
    }
}
