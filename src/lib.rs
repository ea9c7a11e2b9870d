// Tue Jan 20 2026 - Alex

pub mod memory;
pub mod pattern;
pub mod search;
pub mod utils;

pub use memory::{Address, AddressSpace, BufferMemory, MemoryError, MmapMemory, Segment, SegmentReader};
pub use pattern::{Pattern, PatternError, PatternMatcher};
pub use search::{Match, SearchDriver, SearchReport, SegmentFailure};
