// Tue Jan 20 2026 - Alex

use crate::memory::MemoryError;

/// Byte-range access to one segment's backing store. Offsets are relative
/// to the segment start; implementations return the requested bytes in full
/// or an error, never a short read.
pub trait SegmentReader: Send + Sync {
    fn read(&self, offset: u64, len: usize) -> Result<Vec<u8>, MemoryError>;
}
