//! Background Tasks Module
//!
//! Contains background tasks that run periodically while the host process lives.
//!
//! # Tasks
//! - Expiry sweep: Removes expired cache entries at a configured interval

mod cleanup;

pub use cleanup::{spawn_cleanup_task, CleanupTask};
