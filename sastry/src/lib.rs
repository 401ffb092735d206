//! Classify three natural numbers as Sastry and Apocalyptic numbers.
//!
//! The crate keeps a strict separation:
//!
//! - **[`core`]**: Pure, deterministic logic (digit counting, validation,
//!   ordering, the two classifiers). No I/O, fully testable in isolation.
//! - **[`io`]**: Reading the input stream.
//!
//! [`classify`] wires core logic to input and produces an [`classify::Outcome`];
//! [`report`] renders it.

pub mod classify;
pub mod core;
pub mod exit_codes;
pub mod io;
pub mod logging;
pub mod report;
#[cfg(any(test, feature = "test-support"))]
pub mod test_support;
