use std::ffi::{CStr, CString, NulError};
use std::fmt;
use std::os::raw::c_char;
use std::ptr;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RedirectKind {
    In,
    Out,
}

impl fmt::Display for RedirectKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            RedirectKind::In => write!(f, "standard input"),
            RedirectKind::Out => write!(f, "standard output"),
        }
    }
}

/// A validated command line: program name, arguments and optional
/// redirection targets. Every field is owned, so the command does not borrow
/// from the tokens it was built from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Command {
    name: String,
    args: Vec<String>,
    stdin: Option<String>,
    stdout: Option<String>,
}

impl Command {
    /// Only the builder creates commands, after checking the name.
    pub(crate) fn new(
        name: impl Into<String>,
        args: Vec<String>,
        stdin: Option<String>,
        stdout: Option<String>,
    ) -> Self {
        let name = name.into();
        debug_assert!(!name.is_empty(), "command name must not be empty");
        Command {
            name,
            args,
            stdin,
            stdout,
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn args(&self) -> &[String] {
        &self.args
    }

    pub fn stdin(&self) -> Option<&str> {
        self.stdin.as_deref()
    }

    pub fn stdout(&self) -> Option<&str> {
        self.stdout.as_deref()
    }

    pub fn redirect(&self, kind: RedirectKind) -> Option<&str> {
        match kind {
            RedirectKind::In => self.stdin(),
            RedirectKind::Out => self.stdout(),
        }
    }

    /// Builds the null-terminated argument vector handed to `execvp`.
    pub fn argv(&self) -> Result<Argv, NulError> {
        let mut strings = Vec::with_capacity(self.args.len() + 1);
        strings.push(CString::new(self.name.as_str())?);
        for arg in &self.args {
            strings.push(CString::new(arg.as_str())?);
        }
        Ok(Argv::new(strings))
    }
}

/// Prints the command the way the `parse` dump mode shows it, one field per line.
impl fmt::Display for Command {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Command name: {}", self.name)?;
        for arg in &self.args {
            writeln!(f, "Command arg: {}", arg)?;
        }
        if let Some(path) = &self.stdin {
            writeln!(f, "Command stdin: {}", path)?;
        }
        if let Some(path) = &self.stdout {
            writeln!(f, "Command stdout: {}", path)?;
        }
        Ok(())
    }
}

/// Owned C argument vector: the program name, each argument, then a null
/// pointer. The pointer table points into `strings`, whose heap buffers do
/// not move when the `Argv` itself is moved.
#[derive(Debug)]
pub struct Argv {
    strings: Vec<CString>,
    ptrs: Vec<*const c_char>,
}

impl Argv {
    fn new(strings: Vec<CString>) -> Self {
        let ptrs = strings
            .iter()
            .map(|s| s.as_ptr())
            .chain(std::iter::once(ptr::null()))
            .collect();
        Argv { strings, ptrs }
    }

    /// Number of slots, counting the terminating null.
    pub fn len(&self) -> usize {
        self.ptrs.len()
    }

    pub fn is_empty(&self) -> bool {
        self.ptrs.is_empty()
    }

    pub fn program(&self) -> &CStr {
        &self.strings[0]
    }

    /// Slot `index` as a C string, or `None` for the terminator and beyond.
    pub fn get(&self, index: usize) -> Option<&CStr> {
        self.strings.get(index).map(|s| s.as_c_str())
    }

    pub fn as_ptr(&self) -> *const *const c_char {
        self.ptrs.as_ptr()
    }
}
