use std::fmt;
use std::str::FromStr;

use argh::FromArgs;

/// What the interpreter does with each line once it has been echoed.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Mode {
    /// Run the command.
    #[default]
    Execute,
    /// Print the tokens of the line.
    Lex,
    /// Print the command built from the line.
    Parse,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "exec" => Ok(Mode::Execute),
            "lex" => Ok(Mode::Lex),
            "parse" => Ok(Mode::Parse),
            other => Err(format!("unknown mode `{}`, expected exec, lex or parse", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Mode::Execute => "exec",
            Mode::Lex => "lex",
            Mode::Parse => "parse",
        };
        write!(f, "{}", name)
    }
}

#[derive(FromArgs, Debug)]
/// A small line-oriented command interpreter reading from standard input.
pub struct Args {
    /// what to do with each line: exec (default), lex or parse
    #[argh(option, default = "Mode::Execute")]
    pub mode: Mode,
}

#[derive(Debug, Clone)]
pub struct Config {
    /// Prefix for every diagnostic, normally argv[0].
    pub program: String,
    pub mode: Mode,
}

impl Config {
    pub fn new(program: impl Into<String>, args: Args) -> Self {
        Config {
            program: program.into(),
            mode: args.mode,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Config {
            program: "ish".to_string(),
            mode: Mode::Execute,
        }
    }
}
