//! Exit code constants for the pren CLI.
//!
//! - 0: Success
//! - 1: User error (bad args, unknown prompt, invalid template on add)
//! - 2: Render failure (missing argument, missing reference, cycle, depth)
//! - 3: Storage failure (unreadable or malformed prompt files, write errors)

/// Successful execution.
pub const SUCCESS: i32 = 0;

/// User error: bad arguments or a request that cannot be satisfied.
pub const USER_ERROR: i32 = 1;

/// Render failure: the template engine rejected the render.
pub const RENDER_FAILURE: i32 = 2;

/// Storage failure: the prompt directory could not be read or written.
pub const STORAGE_FAILURE: i32 = 3;
