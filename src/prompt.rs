use std::io::{self, Write};

pub const PROMPT: &str = "% ";

/// Output side of the interactive loop: prompt, echo of each input line,
/// and whatever the dump modes print.
pub struct ShellPrompt<W: Write> {
    out: W,
}

impl<W: Write> ShellPrompt<W> {
    pub fn new(out: W) -> Self {
        ShellPrompt { out }
    }

    pub fn show_prompt(&mut self) -> io::Result<()> {
        write!(self.out, "{}", PROMPT)?;
        self.out.flush()
    }

    /// Echoes `line` and flushes, so the echo lands before any output of the
    /// command itself.
    pub fn echo(&mut self, line: &str) -> io::Result<()> {
        writeln!(self.out, "{}", line)?;
        self.out.flush()
    }

    pub fn finish(&mut self) -> io::Result<()> {
        writeln!(self.out)?;
        self.out.flush()
    }

    pub fn out(&mut self) -> &mut W {
        &mut self.out
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}
