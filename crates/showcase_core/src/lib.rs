//! Provide the pure helpers behind the showcase demo.
//!
//! This crate is intentionally small and dependency-light. It holds the pieces the driver exercises:
//! - sequence extensions (`is_empty`, `get_at`) over any single-pass iterator,
//! - [`NamedRecord`], a record with a validated name and a lazily created list of numbers,
//! - byte summation over a read-only slice,
//! - a `nameof`-style short name for generic types.
//!
//! ## Notes
//!
//! - **No IO** and no global state. Printing belongs to the driver in the `showcase` crate.
//! - Every fallible operation returns [`CoreError`]; nothing here panics on bad input.

#![deny(clippy::unwrap_used)]

pub mod bytes;
pub mod errors;
pub mod names;
pub mod record;
pub mod seq;

pub use bytes::sum_bytes;
pub use errors::{CoreError, ErrorKind};
pub use names::unbound_type_name;
pub use record::NamedRecord;
pub use seq::{SequenceExt, get_at, is_empty};
