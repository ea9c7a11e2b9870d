// Wed Jan 21 2026 - Alex

use crate::memory::{MemoryError, SegmentReader};
use memmap2::Mmap;
use std::fs::File;
use std::path::Path;

/// Read-only file mapping, for scanning dump files without loading them.
pub struct MmapMemory {
    mmap: Mmap,
}

impl MmapMemory {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self, MemoryError> {
        let file = File::open(path)?;
        let mmap = unsafe { Mmap::map(&file) }?;
        Ok(Self { mmap })
    }

    pub fn len(&self) -> usize {
        self.mmap.len()
    }

    pub fn is_empty(&self) -> bool {
        self.mmap.len() == 0
    }

    pub fn as_slice(&self) -> &[u8] {
        self.mmap.as_ref()
    }
}

impl SegmentReader for MmapMemory {
    fn read(&self, offset: u64, len: usize) -> Result<Vec<u8>, MemoryError> {
        let offset = offset as usize;
        let end = offset.checked_add(len).ok_or(MemoryError::OutOfBounds(u64::MAX))?;
        if end > self.mmap.len() {
            return Err(MemoryError::OutOfBounds(offset as u64));
        }
        Ok(self.mmap[offset..end].to_vec())
    }
}
