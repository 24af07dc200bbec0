//! Standalone error types for the memory-management models
//!
//! Uses thiserror for clean, idiomatic Rust error definitions.

use thiserror::Error;

/// Errors raised by the paging, segmentation and swapping models
#[must_use = "errors should be handled"]
#[non_exhaustive]
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum MmError {
    // --- Paging ---
    #[error("Page {page} is outside the page table (capacity: {capacity})")]
    PageOutOfRange { page: usize, capacity: usize },

    #[error("Page {page} is already resident")]
    PageAlreadyResident { page: usize },

    #[error("Page fault: page {page} is not resident")]
    PageFault { page: usize },

    // --- Segmentation ---
    #[error("Segment {segment} is outside the segment table (capacity: {capacity})")]
    SegmentOutOfRange { segment: usize, capacity: usize },

    #[error("Segment {segment} is already loaded")]
    SegmentAlreadyLoaded { segment: usize },

    #[error("Segment {segment} is not loaded")]
    SegmentNotLoaded { segment: usize },

    // --- Swapping ---
    #[error("Process {pid} is already resident in memory")]
    AlreadyResident { pid: u32 },

    #[error("Process {pid} is not resident in memory")]
    NotResident { pid: u32 },

    // --- Configuration ---
    #[error("Invalid size for {what}: {size} bytes")]
    InvalidSize { what: &'static str, size: usize },
}

impl MmError {
    /// Get error code for categorization
    #[must_use]
    pub fn code(&self) -> &'static str {
        match self {
            Self::PageOutOfRange { .. } => "MM:PAGE:RANGE",
            Self::PageAlreadyResident { .. } => "MM:PAGE:RESIDENT",
            Self::PageFault { .. } => "MM:PAGE:FAULT",
            Self::SegmentOutOfRange { .. } => "MM:SEGMENT:RANGE",
            Self::SegmentAlreadyLoaded { .. } => "MM:SEGMENT:LOADED",
            Self::SegmentNotLoaded { .. } => "MM:SEGMENT:UNLOADED",
            Self::AlreadyResident { .. } => "MM:SWAP:RESIDENT",
            Self::NotResident { .. } => "MM:SWAP:SWAPPED",
            Self::InvalidSize { .. } => "MM:CONFIG:SIZE",
        }
    }

    // ------------------------------------------------------------------
    // Convenience constructors
    // ------------------------------------------------------------------

    /// Create a page out-of-range error
    pub fn page_out_of_range(page: usize, capacity: usize) -> Self {
        Self::PageOutOfRange { page, capacity }
    }

    /// Create a page fault error
    pub fn page_fault(page: usize) -> Self {
        Self::PageFault { page }
    }

    /// Create a segment out-of-range error
    pub fn segment_out_of_range(segment: usize, capacity: usize) -> Self {
        Self::SegmentOutOfRange { segment, capacity }
    }

    /// Create an invalid size error
    pub fn invalid_size(what: &'static str, size: usize) -> Self {
        Self::InvalidSize { what, size }
    }
}

/// Result type for memory-management model operations
pub type MmResult<T> = core::result::Result<T, MmError>;
