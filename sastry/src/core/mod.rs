//! Deterministic, pure classification logic.
//!
//! Core modules must be free of I/O side effects. They operate on plain
//! integers and return deterministic outputs suitable for tests.

pub mod apocalyptic;
pub mod digits;
pub mod sastry;
pub mod sorter;
pub mod types;
pub mod validator;
