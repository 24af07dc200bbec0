//! # memoria-mm
//!
//! Classic memory-management models for the memoria toolkit.
//!
//! Three small, self-contained models of how an operating system manages
//! process memory:
//! - [`paging`] — a fixed page table whose entries own physical frames
//! - [`segmentation`] — a segment table of variable-size base/limit regions
//! - [`swapping`] — a process image moving between main memory and a swap area
//!
//! The models are backed by real heap allocations, so page, segment and
//! process addresses behave like the machine's. State transitions that an
//! OS would fault on (accessing a non-resident page, re-loading a live
//! segment) are explicit errors here, never undefined behavior.
//!
//! ## Quick Start
//!
//! ```
//! use memoria_mm::prelude::*;
//!
//! fn main() -> MmResult<()> {
//!     let mut table = PageTable::with_defaults();
//!     let page = table.load_page(0)?;
//!     assert_eq!(table.access(0)?, page);
//!     table.free_page(0)?;
//!     Ok(())
//! }
//! ```

// Error types
pub mod error;

// Core modules
pub mod paging;
pub mod segmentation;
pub mod swapping;

// Re-export core types for convenience
pub use crate::error::{MmError, MmResult};

// Public API exports
pub mod prelude {
    //! Convenient re-exports of commonly used types.

    pub use crate::error::{MmError, MmResult};
    pub use crate::paging::{PageRef, PageTable, PagingConfig};
    pub use crate::segmentation::{SegmentRef, SegmentTable};
    pub use crate::swapping::{SwapConfig, SwappedProcess};
}
