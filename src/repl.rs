use std::io::{BufRead, Write};

use log::{debug, info};

use crate::config::{Config, Mode};
use crate::error::ShellError;
use crate::executor::{ExecOutcome, Executor};
use crate::io::LineReader;
use crate::lexer::Lexer;
use crate::parser::{CommandBuilder, Parser};
use crate::prompt::ShellPrompt;

/// The read, echo, process loop. Each line is lexed, built and handed to the
/// executor; the configured [`Mode`] can stop it after an earlier stage and
/// dump that stage's result instead.
pub struct Repl<R, W: Write, E> {
    config: Config,
    input: LineReader<R>,
    prompt: ShellPrompt<W>,
    executor: E,
}

impl<R: BufRead, W: Write, E: Executor> Repl<R, W, E> {
    pub fn new(config: Config, input: R, output: W, executor: E) -> Self {
        Repl {
            config,
            input: LineReader::new(input),
            prompt: ShellPrompt::new(output),
            executor,
        }
    }

    /// Runs until end of input or `exit` and returns the status the process
    /// should exit with. Only fatal errors are returned; every other error is
    /// reported and the loop moves on to the next line.
    pub fn run(&mut self) -> Result<i32, ShellError> {
        self.prompt.show_prompt()?;
        while let Some(line) = self.input.read_line()? {
            self.prompt.echo(&line)?;
            match self.process_line(&line) {
                Ok(Some(code)) => {
                    info!("exit requested with status {}", code);
                    return Ok(code);
                }
                Ok(None) => {}
                Err(e) if e.is_fatal() => return Err(e),
                Err(e) => eprintln!("{}: {}", self.config.program, e),
            }
            self.prompt.show_prompt()?;
        }
        self.prompt.finish()?;
        debug!("end of input");
        Ok(0)
    }

    /// Returns `Some(status)` when the interpreter should stop.
    fn process_line(&mut self, line: &str) -> Result<Option<i32>, ShellError> {
        let tokens = Lexer::new(line).tokenize()?;
        if self.config.mode == Mode::Lex {
            for token in &tokens {
                writeln!(self.prompt.out(), "{}", token)?;
            }
            return Ok(None);
        }

        let command = CommandBuilder::new(&tokens).parse()?;
        drop(tokens);
        let Some(command) = command else {
            return Ok(None);
        };

        if self.config.mode == Mode::Parse {
            write!(self.prompt.out(), "{}", command)?;
            return Ok(None);
        }

        match self.executor.exec(command)? {
            ExecOutcome::Exit(code) => Ok(Some(code)),
            ExecOutcome::Code(code) => {
                debug!("command finished with status {}", code);
                Ok(None)
            }
        }
    }
}
