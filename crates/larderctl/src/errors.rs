//! Exit codes for larderctl
//!
//! No-results and empty-dataset outcomes are normal and exit with success.

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors (bad config, unreadable input)
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when `check` finds the dataset missing or malformed
pub const EXIT_INVALID_DATASET: i32 = 65;
