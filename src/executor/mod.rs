mod builtins;
mod default_executor;
mod executor;
mod redirect;
#[cfg(test)]
pub(crate) mod tests;

pub use builtins::{BuiltinCommand, BuiltinError, BuiltinManager};
pub use default_executor::DefaultExecutor;
pub use executor::{ExecError, ExecOutcome, ExecStatus, Executor};
pub use redirect::{RedirectError, RedirectHandler};
