#![cfg_attr(docsrs, feature(doc_cfg))]
#![warn(missing_docs)]
//! # memoria-system
//!
//! Host memory snapshotting and report rendering for the memoria toolkit.
//!
//! This crate provides a unified interface for:
//! - One-shot snapshots of host memory state (total, available, usage percent)
//! - A narrow provider boundary so the snapshot source can be swapped in tests
//! - Rendering the snapshot as the three-line text report
//!
//! ## Features
//!
//! - `serde`: Serialization support for the snapshot type
//!
//! ## Example
//!
//! ```no_run
//! use memoria_system::memory::{HostMemoryProvider, MemoryInfoProvider};
//!
//! fn main() -> memoria_system::SystemResult<()> {
//!     let snapshot = HostMemoryProvider.snapshot()?;
//!     println!("{}", memoria_system::report::render(&snapshot));
//!     Ok(())
//! }
//! ```

pub mod error;
pub mod memory;
pub mod prelude;
pub mod report;

// Re-exports
pub use error::{SystemError, SystemResult};
pub use memory::{HostMemoryProvider, MemoryInfoProvider, MemorySnapshot};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
