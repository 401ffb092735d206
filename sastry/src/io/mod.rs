//! I/O helpers for the classify pipeline.

pub mod input;
