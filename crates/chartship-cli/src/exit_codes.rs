//! Standard exit codes for CLI operations

#![allow(dead_code)]

/// Success - chart packaged and published
pub const SUCCESS: i32 = 0;

/// General error - unspecified failure
pub const ERROR: i32 = 1;

/// Usage error - invalid arguments or options (following sysexits.h convention)
pub const USAGE_ERROR: i32 = 64;
