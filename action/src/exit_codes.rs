//! Stable exit codes for the action binary.

/// Adapter configured successfully.
pub const OK: i32 = 0;
/// Input lookup or diagnostic emission failed; an `::error::` command was
/// issued with the failure message.
pub const FAILED: i32 = 1;
