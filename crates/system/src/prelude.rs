//! Prelude module for convenient imports
//!
//! Re-exports the types needed to take a snapshot and render the report.
//!
//! # Example
//!
//! ```no_run
//! use memoria_system::prelude::*;
//!
//! fn main() -> SystemResult<()> {
//!     let snapshot = HostMemoryProvider.snapshot()?;
//!     println!("{}", render(&snapshot));
//!     Ok(())
//! }
//! ```

pub use crate::error::{SystemError, SystemResult};
pub use crate::memory::{HostMemoryProvider, MemoryInfoProvider, MemorySnapshot};
pub use crate::report::render;
