// Wed Jan 21 2026 - Alex

pub mod driver;
pub mod report;

pub use driver::SearchDriver;
pub use report::{Match, SearchReport, SegmentFailure};

use crate::memory::AddressSpace;
use crate::pattern::{Pattern, PatternError};

pub fn search(space: &AddressSpace, pattern: &Pattern) -> Result<SearchReport, PatternError> {
    let driver = SearchDriver::new();
    driver.search(space, pattern)
}
