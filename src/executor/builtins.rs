use std::collections::HashMap;
use std::path::Path;

use log::debug;
use nix::errno::Errno;
use thiserror::Error;

use super::executor::{ExecOutcome, ExecStatus};
use crate::environment::Environment;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuiltinError {
    #[error("missing variable")]
    MissingVariable,
    #[error("too many arguments")]
    TooManyArguments,
    #[error("HOME environment variable not set")]
    HomeNotSet,
    #[error("{path}: {}", .errno.desc())]
    ChangeDirectory { path: String, errno: Errno },
    #[error("{name}: {}", .errno.desc())]
    InvalidVariable { name: String, errno: Errno },
}

pub trait BuiltinCommand {
    fn name(&self) -> &'static str;
    fn run(&self, args: &[String], env: &mut dyn Environment) -> Result<ExecOutcome, BuiltinError>;
}

pub struct BuiltinManager {
    commands: HashMap<&'static str, Box<dyn BuiltinCommand>>,
}

impl Default for BuiltinManager {
    fn default() -> Self {
        Self::new()
    }
}

impl BuiltinManager {
    pub fn new() -> Self {
        let mut mgr = BuiltinManager {
            commands: HashMap::new(),
        };
        mgr.register(Box::new(ExitCommand));
        mgr.register(Box::new(SetEnvCommand));
        mgr.register(Box::new(UnsetEnvCommand));
        mgr.register(Box::new(CdCommand));
        mgr
    }

    pub fn register(&mut self, cmd: Box<dyn BuiltinCommand>) {
        self.commands.insert(cmd.name(), cmd);
    }

    /// Runs `name` if it is a builtin. `None` means it is not one and the
    /// caller should look for an external program.
    pub fn execute(
        &self,
        name: &str,
        args: &[String],
        env: &mut dyn Environment,
    ) -> Option<ExecStatus> {
        let cmd = self.commands.get(name)?;
        debug!("running builtin {} with {} argument(s)", name, args.len());
        Some(cmd.run(args, env).map_err(Into::into))
    }
}

pub struct ExitCommand;

impl BuiltinCommand for ExitCommand {
    fn name(&self) -> &'static str {
        "exit"
    }
    fn run(&self, _args: &[String], _env: &mut dyn Environment) -> Result<ExecOutcome, BuiltinError> {
        Ok(ExecOutcome::Exit(0))
    }
}

pub struct SetEnvCommand;

impl BuiltinCommand for SetEnvCommand {
    fn name(&self) -> &'static str {
        "setenv"
    }
    fn run(&self, args: &[String], env: &mut dyn Environment) -> Result<ExecOutcome, BuiltinError> {
        let (name, value) = match args {
            [] => return Err(BuiltinError::MissingVariable),
            [name] => (name, ""),
            [name, value] => (name, value.as_str()),
            _ => return Err(BuiltinError::TooManyArguments),
        };
        env.set_var(name, value)
            .map_err(|errno| BuiltinError::InvalidVariable { name: name.clone(), errno })?;
        Ok(ExecOutcome::Code(0))
    }
}

pub struct UnsetEnvCommand;

impl BuiltinCommand for UnsetEnvCommand {
    fn name(&self) -> &'static str {
        "unsetenv"
    }
    fn run(&self, args: &[String], env: &mut dyn Environment) -> Result<ExecOutcome, BuiltinError> {
        let name = match args {
            [] => return Err(BuiltinError::MissingVariable),
            [name] => name,
            _ => return Err(BuiltinError::TooManyArguments),
        };
        env.remove_var(name)
            .map_err(|errno| BuiltinError::InvalidVariable { name: name.clone(), errno })?;
        Ok(ExecOutcome::Code(0))
    }
}

pub struct CdCommand;

impl BuiltinCommand for CdCommand {
    fn name(&self) -> &'static str {
        "cd"
    }
    fn run(&self, args: &[String], env: &mut dyn Environment) -> Result<ExecOutcome, BuiltinError> {
        let target = match args {
            [] => env.var("HOME").ok_or(BuiltinError::HomeNotSet)?,
            [dir] => dir.clone(),
            _ => return Err(BuiltinError::TooManyArguments),
        };
        env.set_current_dir(Path::new(&target))
            .map_err(|errno| BuiltinError::ChangeDirectory { path: target.clone(), errno })?;
        Ok(ExecOutcome::Code(0))
    }
}

#[cfg(test)]
mod tests {
    use std::path::PathBuf;

    use super::*;
    use crate::environment::MemoryEnvironment;

    use crate::executor::ExecError;

    fn run(name: &str, args: &[&str], env: &mut MemoryEnvironment) -> ExecStatus {
        let args: Vec<String> = args.iter().map(|s| s.to_string()).collect();
        BuiltinManager::new()
            .execute(name, &args, env)
            .unwrap_or_else(|| panic!("{name} is not a builtin"))
    }

    fn builtin_err(status: ExecStatus) -> BuiltinError {
        match status {
            Err(ExecError::Builtin(e)) => e,
            other => panic!("expected builtin error, got {:?}", other),
        }
    }

    #[test]
    fn test_builtin_names_are_exact() {
        let mgr = BuiltinManager::new();
        let mut env = MemoryEnvironment::new();
        for name in ["exit", "setenv", "unsetenv", "cd"] {
            assert!(mgr.execute(name, &[], &mut env).is_some(), "{name}");
        }
        assert!(mgr.execute("Exit", &[], &mut env).is_none());
        assert!(mgr.execute("echo", &[], &mut env).is_none());
    }

    #[test]
    fn test_exit_ignores_arguments() {
        let mut env = MemoryEnvironment::new();
        assert!(matches!(run("exit", &[], &mut env), Ok(ExecOutcome::Exit(0))));
        assert!(matches!(run("exit", &["3", "x"], &mut env), Ok(ExecOutcome::Exit(0))));
    }

    #[test]
    fn test_setenv() {
        let mut env = MemoryEnvironment::new();
        assert!(matches!(run("setenv", &["FOO", "bar"], &mut env), Ok(ExecOutcome::Code(0))));
        assert_eq!(env.vars.get("FOO").map(String::as_str), Some("bar"));

        run("setenv", &["EMPTY"], &mut env).unwrap();
        assert_eq!(env.vars.get("EMPTY").map(String::as_str), Some(""));
    }

    #[test]
    fn test_setenv_argument_errors_leave_env_unchanged() {
        let mut env = MemoryEnvironment::new();
        let before = env.clone();
        assert_eq!(builtin_err(run("setenv", &[], &mut env)), BuiltinError::MissingVariable);
        assert_eq!(
            builtin_err(run("setenv", &["A", "B", "C"], &mut env)),
            BuiltinError::TooManyArguments
        );
        assert_eq!(env, before);
    }

    #[test]
    fn test_setenv_invalid_name() {
        let mut env = MemoryEnvironment::new();
        let err = builtin_err(run("setenv", &["A=B", "x"], &mut env));
        assert_eq!(err.to_string(), "A=B: Invalid argument");
    }

    #[test]
    fn test_unsetenv() {
        let mut env = MemoryEnvironment::new();
        env.vars.insert("FOO".into(), "bar".into());
        run("unsetenv", &["FOO"], &mut env).unwrap();
        assert!(!env.vars.contains_key("FOO"));
        // unsetting an absent variable is fine
        run("unsetenv", &["FOO"], &mut env).unwrap();
    }

    #[test]
    fn test_unsetenv_argument_errors() {
        let mut env = MemoryEnvironment::new();
        assert_eq!(builtin_err(run("unsetenv", &[], &mut env)), BuiltinError::MissingVariable);
        assert_eq!(
            builtin_err(run("unsetenv", &["A", "B"], &mut env)),
            BuiltinError::TooManyArguments
        );
    }

    #[test]
    fn test_cd_to_argument() {
        let mut env = MemoryEnvironment::new().with_dir("/work");
        run("cd", &["/work"], &mut env).unwrap();
        assert_eq!(env.cwd, PathBuf::from("/work"));
    }

    #[test]
    fn test_cd_home() {
        let mut env = MemoryEnvironment::new().with_dir("/home/me");
        env.vars.insert("HOME".into(), "/home/me".into());
        run("cd", &[], &mut env).unwrap();
        assert_eq!(env.cwd, PathBuf::from("/home/me"));
    }

    #[test]
    fn test_cd_home_unset_keeps_cwd() {
        let mut env = MemoryEnvironment::new();
        let err = builtin_err(run("cd", &[], &mut env));
        assert_eq!(err, BuiltinError::HomeNotSet);
        assert_eq!(err.to_string(), "HOME environment variable not set");
        assert_eq!(env.cwd, PathBuf::from("/"));
    }

    #[test]
    fn test_cd_errors() {
        let mut env = MemoryEnvironment::new();
        assert_eq!(builtin_err(run("cd", &["a", "b"], &mut env)), BuiltinError::TooManyArguments);

        let err = builtin_err(run("cd", &["/missing"], &mut env));
        assert_eq!(err.to_string(), "/missing: No such file or directory");
        assert_eq!(env.cwd, PathBuf::from("/"));
    }
}
