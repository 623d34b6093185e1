use std::path::Path;

use nix::errno::Errno;
use nix::unistd;

/// Process-wide state the builtins are allowed to change: environment
/// variables and the working directory.
pub trait Environment {
    fn var(&self, key: &str) -> Option<String>;
    fn set_var(&mut self, key: &str, value: &str) -> Result<(), Errno>;
    fn remove_var(&mut self, key: &str) -> Result<(), Errno>;
    fn set_current_dir(&mut self, path: &Path) -> Result<(), Errno>;
}

/// The real environment of this process, inherited by every spawned child.
#[derive(Debug, Default, Clone, Copy)]
pub struct ProcessEnvironment;

// setenv(3) rejects these with EINVAL; std panics on them instead.
fn check_name(key: &str) -> Result<(), Errno> {
    if key.is_empty() || key.contains('=') || key.contains('\0') {
        return Err(Errno::EINVAL);
    }
    Ok(())
}

impl Environment for ProcessEnvironment {
    fn var(&self, key: &str) -> Option<String> {
        std::env::var_os(key).map(|v| v.to_string_lossy().into_owned())
    }

    fn set_var(&mut self, key: &str, value: &str) -> Result<(), Errno> {
        check_name(key)?;
        if value.contains('\0') {
            return Err(Errno::EINVAL);
        }
        // SAFETY: the interpreter runs on a single thread, so nothing reads
        // the environment concurrently.
        unsafe { std::env::set_var(key, value) };
        Ok(())
    }

    fn remove_var(&mut self, key: &str) -> Result<(), Errno> {
        check_name(key)?;
        // SAFETY: see set_var.
        unsafe { std::env::remove_var(key) };
        Ok(())
    }

    fn set_current_dir(&mut self, path: &Path) -> Result<(), Errno> {
        unistd::chdir(path)
    }
}

#[cfg(test)]
pub use memory::MemoryEnvironment;
