//! Interpreter module
//!
//! Tokenizing and dispatching shell lines against a backend.

pub mod interpreter;

pub use interpreter::{tokenize, Interpreter, Outcome};
