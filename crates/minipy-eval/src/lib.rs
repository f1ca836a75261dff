//! minipy interpreter: executes classified snippets line by line.
//!
//! The entry point is [`run_snippet`]: one source string in, one rendered
//! output string out. The interpreter never raises — malformed constructs
//! are silently skipped or emitted verbatim, and an empty run returns a
//! fixed placeholder instead of an empty string.

mod env;
mod error;
mod interpreter;
mod report;
mod value;

pub use env::VarStore;
pub use error::{EvalError, EvalResult};
pub use interpreter::{run_snippet, Interpreter, NO_OUTPUT};
pub use report::RunReport;
pub use value::Value;
