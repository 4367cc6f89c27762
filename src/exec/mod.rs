//! Subprocess execution with captured output.
//!
//! Includes:
//! - `request`: the program, arguments and options of one execution.
//! - `runner`: spawning, output capture, timeout/cancellation and the error policy.

mod request;
mod runner;

pub use request::*;
pub use runner::*;
