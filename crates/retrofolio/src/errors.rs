//! Exit codes for the retrofolio binary.

/// Exit code for success
pub const EXIT_SUCCESS: i32 = 0;

/// Exit code for general errors
pub const EXIT_GENERAL_ERROR: i32 = 1;

/// Exit code when the content catalog fails validation
pub const EXIT_INVALID_CATALOG: i32 = 65;
