use std::io;
use std::process::ExitCode;

use ish::config::{Args, Config};
use ish::environment::ProcessEnvironment;
use ish::executor::DefaultExecutor;
use ish::repl::Repl;

fn main() -> ExitCode {
    let program = std::env::args().next().unwrap_or_else(|| "ish".to_string());
    let args: Args = argh::from_env();

    env_logger::Builder::from_env(env_logger::Env::new().filter("ISH_LOG")).init();

    let config = Config::new(program.clone(), args);
    let executor = DefaultExecutor::new(program.clone(), ProcessEnvironment);
    let mut repl = Repl::new(config, io::stdin().lock(), io::stdout(), executor);

    match repl.run() {
        Ok(code) => ExitCode::from(code as u8),
        Err(e) => {
            eprintln!("{}: {}", program, e);
            ExitCode::FAILURE
        }
    }
}
