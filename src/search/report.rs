// Wed Jan 21 2026 - Alex

use crate::memory::{Address, MemoryError};
use serde::Serialize;
use std::fmt;

/// One located occurrence: absolute address plus the owning segment's name.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Match {
    address: Address,
    segment_name: String,
}

impl Match {
    pub fn new(address: Address, segment_name: &str) -> Self {
        Self {
            address,
            segment_name: segment_name.to_string(),
        }
    }

    pub fn address(&self) -> Address {
        self.address
    }

    pub fn segment_name(&self) -> &str {
        &self.segment_name
    }
}

impl fmt::Display for Match {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} in {}", self.address, self.segment_name)
    }
}

/// A segment that could not be read. Recorded, never fatal to the search.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SegmentFailure {
    segment_name: String,
    reason: String,
}

impl SegmentFailure {
    pub fn new(segment_name: &str, error: &MemoryError) -> Self {
        Self {
            segment_name: segment_name.to_string(),
            reason: error.to_string(),
        }
    }

    pub fn segment_name(&self) -> &str {
        &self.segment_name
    }

    pub fn reason(&self) -> &str {
        &self.reason
    }
}

impl fmt::Display for SegmentFailure {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.segment_name, self.reason)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Default)]
pub struct SearchReport {
    matches: Vec<Match>,
    failures: Vec<SegmentFailure>,
}

impl SearchReport {
    pub fn new(matches: Vec<Match>, failures: Vec<SegmentFailure>) -> Self {
        Self { matches, failures }
    }

    pub fn matches(&self) -> &[Match] {
        &self.matches
    }

    pub fn failures(&self) -> &[SegmentFailure] {
        &self.failures
    }

    pub fn match_count(&self) -> usize {
        self.matches.len()
    }

    pub fn failure_count(&self) -> usize {
        self.failures.len()
    }

    pub fn is_empty(&self) -> bool {
        self.matches.is_empty() && self.failures.is_empty()
    }

    pub fn addresses(&self) -> Vec<Address> {
        self.matches.iter().map(|m| m.address()).collect()
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self)
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}
