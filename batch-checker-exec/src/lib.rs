//! Execution of the external checker.
//!
//! The checker is never spawned directly by the orchestration code: every call goes through a
//! [`CommandRunner`], so that the real subprocess ([`ProcessRunner`]) can be swapped with one of
//! the fake runners in the tests.

#![deny(missing_docs)]

#[macro_use]
extern crate log;

mod command_runner;
mod invocation;

pub use command_runner::*;
pub use invocation::*;
