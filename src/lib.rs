#![forbid(unsafe_code)]
//! Showcase: a console tour of a few everyday language features.
//!
//! The pure pieces (sequence extensions, [`NamedRecord`], byte summation) live in `showcase_core`. This crate
//! adds the driver that strings them together and the CLI that prints the result.
//!
//! ## Panic Policy
//!
//! - **Production code**: Use `Result` with `?`. The `cli` and `driver` modules enforce
//!   `#![deny(clippy::unwrap_used)]`.
//! - **Test code**: `.unwrap()` and `.expect()` are acceptable in tests.

pub mod cli;
pub mod driver;
pub mod version;

pub use driver::{DemoError, Step, run_demo};
pub use showcase_core::{CoreError, NamedRecord};
