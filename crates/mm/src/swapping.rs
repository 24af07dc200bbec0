//! Swapping model
//!
//! One process image moving between main memory and a simulated swap
//! area. The image starts swapped out (a zeroed swap slot), swap-in
//! copies it into a fresh memory region and releases the slot, swap-out
//! copies it back and releases the region. Contents survive the round
//! trip byte for byte.

use tracing::debug;

use crate::error::{MmError, MmResult};

/// Swapping model configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SwapConfig {
    /// Size of a slot in the swap area, in bytes
    pub slot_size: usize,
}

impl Default for SwapConfig {
    fn default() -> Self {
        Self { slot_size: 1024 }
    }
}

/// A process image that moves between main memory and the swap area
#[derive(Debug)]
pub struct SwappedProcess {
    pid: u32,
    size: usize,
    memory: Option<Box<[u8]>>,
    swap: Option<Box<[u8]>>,
}

impl SwappedProcess {
    /// Create a process of `size` bytes, swapped out with a zeroed image
    pub fn new(pid: u32, size: usize) -> MmResult<Self> {
        Self::with_config(pid, size, SwapConfig::default())
    }

    /// Create a process with an explicit swap configuration
    ///
    /// The image must fit a swap slot; a zero-size image is invalid.
    pub fn with_config(pid: u32, size: usize, config: SwapConfig) -> MmResult<Self> {
        if size == 0 || size > config.slot_size {
            return Err(MmError::invalid_size("process image", size));
        }
        Ok(Self {
            pid,
            size,
            memory: None,
            swap: Some(vec![0u8; size].into_boxed_slice()),
        })
    }

    /// Copy the image from the swap area into a fresh memory region
    ///
    /// Returns the base address of the region. The swap slot is released.
    pub fn swap_in(&mut self) -> MmResult<usize> {
        if self.memory.is_some() {
            return Err(MmError::AlreadyResident { pid: self.pid });
        }
        let image = self
            .swap
            .take()
            .ok_or(MmError::NotResident { pid: self.pid })?;

        let mut memory = vec![0u8; self.size].into_boxed_slice();
        memory.copy_from_slice(&image);
        let base = memory.as_ptr() as usize;
        self.memory = Some(memory);

        debug!(pid = self.pid, base, "process swapped in");
        Ok(base)
    }

    /// Copy the image from memory back to a swap slot
    ///
    /// The memory region is released.
    pub fn swap_out(&mut self) -> MmResult<()> {
        let memory = self
            .memory
            .take()
            .ok_or(MmError::NotResident { pid: self.pid })?;

        let mut image = vec![0u8; self.size].into_boxed_slice();
        image.copy_from_slice(&memory);
        self.swap = Some(image);

        debug!(pid = self.pid, "process swapped out");
        Ok(())
    }

    /// Whether the image currently lives in main memory
    #[must_use]
    pub fn is_resident(&self) -> bool {
        self.memory.is_some()
    }

    /// Base address of the memory region, if resident
    #[must_use]
    pub fn memory_address(&self) -> Option<usize> {
        self.memory.as_ref().map(|m| m.as_ptr() as usize)
    }

    /// View of the resident image
    pub fn image(&self) -> MmResult<&[u8]> {
        self.memory
            .as_deref()
            .ok_or(MmError::NotResident { pid: self.pid })
    }

    /// Mutable view of the resident image
    pub fn image_mut(&mut self) -> MmResult<&mut [u8]> {
        self.memory
            .as_deref_mut()
            .ok_or(MmError::NotResident { pid: self.pid })
    }

    /// Process identifier
    #[must_use]
    pub fn pid(&self) -> u32 {
        self.pid
    }

    /// Image size in bytes
    #[must_use]
    pub fn size(&self) -> usize {
        self.size
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn starts_swapped_out() {
        let process = SwappedProcess::new(1, 1024).unwrap();
        assert!(!process.is_resident());
        assert_eq!(process.memory_address(), None);
    }

    #[test]
    fn swap_in_makes_the_image_addressable() {
        let mut process = SwappedProcess::new(1, 1024).unwrap();
        let base = process.swap_in().unwrap();
        assert!(process.is_resident());
        assert_eq!(process.memory_address(), Some(base));
        assert_eq!(process.image().unwrap().len(), 1024);
    }

    #[test]
    fn image_survives_a_round_trip() {
        let mut process = SwappedProcess::new(7, 64).unwrap();
        process.swap_in().unwrap();
        for (i, byte) in process.image_mut().unwrap().iter_mut().enumerate() {
            *byte = i as u8;
        }
        process.swap_out().unwrap();
        process.swap_in().unwrap();

        let expected: Vec<u8> = (0..64).map(|i| i as u8).collect();
        assert_eq!(process.image().unwrap(), expected.as_slice());
    }

    #[test]
    fn double_swap_in_is_rejected() {
        let mut process = SwappedProcess::new(1, 32).unwrap();
        process.swap_in().unwrap();
        assert_eq!(process.swap_in(), Err(MmError::AlreadyResident { pid: 1 }));
    }

    #[test]
    fn swap_out_of_swapped_process_is_rejected() {
        let mut process = SwappedProcess::new(2, 32).unwrap();
        assert_eq!(process.swap_out(), Err(MmError::NotResident { pid: 2 }));
        assert_eq!(process.image().unwrap_err(), MmError::NotResident { pid: 2 });
    }

    #[test]
    fn image_must_fit_the_swap_slot() {
        let config = SwapConfig { slot_size: 16 };
        assert_eq!(
            SwappedProcess::with_config(1, 32, config).unwrap_err(),
            MmError::invalid_size("process image", 32)
        );
        assert_eq!(
            SwappedProcess::new(1, 0).unwrap_err(),
            MmError::invalid_size("process image", 0)
        );
    }
}
