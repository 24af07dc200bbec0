//! Segmented memory model
//!
//! A segment table of variable-size regions, one slot per segment number.
//! Each loaded segment owns a zeroed heap region; its base address and
//! size mirror the base/limit pair a segmented MMU would carry.

use tracing::debug;

use crate::error::{MmError, MmResult};

/// Resolved view of a loaded segment
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SegmentRef {
    /// Segment number within the table
    pub segment: usize,
    /// Segment size in bytes
    pub size: usize,
    /// Base address of the backing region
    pub base: usize,
}

#[derive(Debug, Default)]
struct SegmentTableEntry {
    region: Option<Box<[u8]>>,
}

/// Fixed-capacity segment table owning its regions
#[derive(Debug)]
pub struct SegmentTable {
    entries: Vec<SegmentTableEntry>,
}

impl SegmentTable {
    /// Create a segment table with `capacity` empty slots
    #[must_use]
    pub fn new(capacity: usize) -> Self {
        let mut entries = Vec::with_capacity(capacity);
        entries.resize_with(capacity, SegmentTableEntry::default);
        Self { entries }
    }

    /// Allocate a zeroed region of `size` bytes for a segment
    pub fn load_segment(&mut self, segment: usize, size: usize) -> MmResult<SegmentRef> {
        if size == 0 {
            return Err(MmError::invalid_size("segment", 0));
        }
        let entry = self.entry_mut(segment)?;
        if entry.region.is_some() {
            return Err(MmError::SegmentAlreadyLoaded { segment });
        }
        let region = vec![0u8; size].into_boxed_slice();
        let base = region.as_ptr() as usize;
        entry.region = Some(region);

        debug!(segment, size, base, "segment loaded");
        Ok(SegmentRef {
            segment,
            size,
            base,
        })
    }

    /// Resolve a loaded segment to its base/size pair
    pub fn access(&self, segment: usize) -> MmResult<SegmentRef> {
        let entry = self.entry(segment)?;
        entry
            .region
            .as_ref()
            .map(|region| SegmentRef {
                segment,
                size: region.len(),
                base: region.as_ptr() as usize,
            })
            .ok_or(MmError::SegmentNotLoaded { segment })
    }

    /// Release a segment's region, returning the slot to empty
    pub fn free_segment(&mut self, segment: usize) -> MmResult<()> {
        let entry = self.entry_mut(segment)?;
        if entry.region.take().is_none() {
            return Err(MmError::SegmentNotLoaded { segment });
        }
        debug!(segment, "segment freed");
        Ok(())
    }

    /// Number of segments currently loaded
    #[must_use]
    pub fn loaded_segments(&self) -> usize {
        self.entries.iter().filter(|e| e.region.is_some()).count()
    }

    /// Number of slots in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, segment: usize) -> MmResult<&SegmentTableEntry> {
        let capacity = self.entries.len();
        self.entries
            .get(segment)
            .ok_or_else(|| MmError::segment_out_of_range(segment, capacity))
    }

    fn entry_mut(&mut self, segment: usize) -> MmResult<&mut SegmentTableEntry> {
        let capacity = self.entries.len();
        self.entries
            .get_mut(segment)
            .ok_or_else(|| MmError::segment_out_of_range(segment, capacity))
    }
}
