//! Paged memory model
//!
//! A fixed-capacity page table where every entry is either unmapped or
//! owns a physical frame. Frames are zeroed heap allocations, so the
//! address a [`PageRef`] reports is a real machine address that stays
//! stable for as long as the page is resident.

use tracing::debug;

use crate::error::{MmError, MmResult};

/// Paging model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PagingConfig {
    /// Page size in bytes
    pub page_size: usize,
    /// Number of entries in the page table
    pub num_pages: usize,
}

impl Default for PagingConfig {
    fn default() -> Self {
        Self {
            page_size: 1024,
            num_pages: 4,
        }
    }
}

/// Resolved view of a resident page
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageRef {
    /// Page number within the table
    pub page: usize,
    /// Base address of the backing frame
    pub frame: usize,
}

#[derive(Debug, Default)]
struct PageTableEntry {
    frame: Option<Box<[u8]>>,
}

/// Fixed-capacity page table owning its frames
#[derive(Debug)]
pub struct PageTable {
    entries: Vec<PageTableEntry>,
    page_size: usize,
}

impl PageTable {
    /// Create a page table with every entry unmapped
    pub fn new(config: PagingConfig) -> MmResult<Self> {
        if config.page_size == 0 {
            return Err(MmError::invalid_size("page", 0));
        }
        Ok(Self::build(config))
    }

    /// Create a page table with the default configuration (4 pages × 1024 B)
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::build(PagingConfig::default())
    }

    fn build(config: PagingConfig) -> Self {
        let mut entries = Vec::with_capacity(config.num_pages);
        entries.resize_with(config.num_pages, PageTableEntry::default);
        Self {
            entries,
            page_size: config.page_size,
        }
    }

    /// Back a page with a freshly allocated zeroed frame
    pub fn load_page(&mut self, page: usize) -> MmResult<PageRef> {
        let page_size = self.page_size;
        let entry = self.entry_mut(page)?;
        if entry.frame.is_some() {
            return Err(MmError::PageAlreadyResident { page });
        }
        let frame = vec![0u8; page_size].into_boxed_slice();
        let base = frame.as_ptr() as usize;
        entry.frame = Some(frame);

        debug!(page, frame = base, "page loaded");
        Ok(PageRef { page, frame: base })
    }

    /// Resolve a resident page to its frame address
    ///
    /// Accessing a non-resident page is a fault, reported as
    /// [`MmError::PageFault`].
    pub fn access(&self, page: usize) -> MmResult<PageRef> {
        let entry = self.entry(page)?;
        entry
            .frame
            .as_ref()
            .map(|frame| PageRef {
                page,
                frame: frame.as_ptr() as usize,
            })
            .ok_or_else(|| MmError::page_fault(page))
    }

    /// Release a page's frame, returning the entry to unmapped
    pub fn free_page(&mut self, page: usize) -> MmResult<()> {
        let entry = self.entry_mut(page)?;
        if entry.frame.take().is_none() {
            return Err(MmError::page_fault(page));
        }
        debug!(page, "page freed");
        Ok(())
    }

    /// Number of pages currently backed by a frame
    #[must_use]
    pub fn resident_pages(&self) -> usize {
        self.entries.iter().filter(|e| e.frame.is_some()).count()
    }

    /// Page size in bytes
    #[must_use]
    pub fn page_size(&self) -> usize {
        self.page_size
    }

    /// Number of entries in the table
    #[must_use]
    pub fn capacity(&self) -> usize {
        self.entries.len()
    }

    fn entry(&self, page: usize) -> MmResult<&PageTableEntry> {
        let capacity = self.entries.len();
        self.entries
            .get(page)
            .ok_or_else(|| MmError::page_out_of_range(page, capacity))
    }

    fn entry_mut(&mut self, page: usize) -> MmResult<&mut PageTableEntry> {
        let capacity = self.entries.len();
        self.entries
            .get_mut(page)
            .ok_or_else(|| MmError::page_out_of_range(page, capacity))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn defaults_match_the_model() {
        let table = PageTable::with_defaults();
        assert_eq!(table.capacity(), 4);
        assert_eq!(table.page_size(), 1024);
        assert_eq!(table.resident_pages(), 0);
    }

    #[test]
    fn load_access_free_round_trip() {
        let mut table = PageTable::with_defaults();
        let loaded = table.load_page(0).unwrap();
        assert_ne!(loaded.frame, 0);

        let accessed = table.access(0).unwrap();
        assert_eq!(accessed, loaded);
        assert_eq!(table.resident_pages(), 1);

        table.free_page(0).unwrap();
        assert_eq!(table.resident_pages(), 0);
    }

    #[test]
    fn distinct_pages_get_distinct_frames() {
        let mut table = PageTable::with_defaults();
        let first = table.load_page(0).unwrap();
        let second = table.load_page(1).unwrap();
        assert_ne!(first.frame, second.frame);
    }

    #[test]
    fn double_load_is_rejected() {
        let mut table = PageTable::with_defaults();
        table.load_page(2).unwrap();
        assert_eq!(
            table.load_page(2),
            Err(MmError::PageAlreadyResident { page: 2 })
        );
    }

    #[test]
    fn non_resident_access_faults() {
        let table = PageTable::with_defaults();
        assert_eq!(table.access(1), Err(MmError::page_fault(1)));
    }

    #[test]
    fn free_of_unmapped_page_faults() {
        let mut table = PageTable::with_defaults();
        assert_eq!(table.free_page(3), Err(MmError::page_fault(3)));
    }

    #[test]
    fn out_of_range_page_is_reported_with_capacity() {
        let mut table = PageTable::with_defaults();
        assert_eq!(table.load_page(4), Err(MmError::page_out_of_range(4, 4)));
        assert_eq!(table.access(9), Err(MmError::page_out_of_range(9, 4)));
    }

    #[test]
    fn zero_page_size_is_invalid() {
        let config = PagingConfig {
            page_size: 0,
            num_pages: 4,
        };
        assert_eq!(
            PageTable::new(config).unwrap_err(),
            MmError::invalid_size("page", 0)
        );
    }
}
