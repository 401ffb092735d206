//! Stable exit codes for the sastry CLI.

/// Command succeeded. Rejected input still counts: the diagnostic is the
/// product output.
pub const OK: i32 = 0;
/// Input could not be read or parsed, or arguments were out of range.
pub const ERROR: i32 = 1;
