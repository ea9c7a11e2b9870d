// Wed Jan 21 2026 - Alex

use crate::memory::{AddressSpace, Segment};
use crate::pattern::{Pattern, PatternError, PatternMatcher};
use crate::search::{Match, SearchReport, SegmentFailure};
use crate::utils::logging::scoped_timer;
use rayon::prelude::*;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

/// Sweeps every segment of an address space with one compiled matcher.
/// Unreadable segments are recorded and skipped; only an invalid pattern
/// fails the whole call.
pub struct SearchDriver {
    parallel: bool,
    cancel: Option<Arc<AtomicBool>>,
}

impl SearchDriver {
    pub fn new() -> Self {
        Self {
            parallel: false,
            cancel: None,
        }
    }

    pub fn use_parallel(mut self, parallel: bool) -> Self {
        self.parallel = parallel;
        self
    }

    pub fn with_cancel_flag(mut self, flag: Arc<AtomicBool>) -> Self {
        self.cancel = Some(flag);
        self
    }

    pub fn search(&self, space: &AddressSpace, pattern: &Pattern) -> Result<SearchReport, PatternError> {
        let matcher = PatternMatcher::new(pattern)?;
        let _timer = scoped_timer("search");
        log::debug!(
            "searching {} segments ({} bytes) for {}",
            space.len(),
            space.total_bytes(),
            pattern
        );

        let outcomes = if self.parallel {
            self.scan_parallel(&matcher, space)
        } else {
            self.scan_sequential(&matcher, space)
        };

        let mut matches = Vec::new();
        let mut failures = Vec::new();
        for outcome in outcomes {
            match outcome {
                Ok(mut segment_matches) => matches.append(&mut segment_matches),
                Err(failure) => failures.push(failure),
            }
        }

        log::debug!(
            "search finished: {} matches, {} unreadable segments",
            matches.len(),
            failures.len()
        );
        Ok(SearchReport::new(matches, failures))
    }

    fn scan_sequential(
        &self,
        matcher: &PatternMatcher,
        space: &AddressSpace,
    ) -> Vec<Result<Vec<Match>, SegmentFailure>> {
        let mut outcomes = Vec::with_capacity(space.len());
        for segment in space.iter() {
            if self.is_cancelled() {
                log::debug!("search cancelled after {} segments", outcomes.len());
                break;
            }
            outcomes.push(scan_segment(matcher, segment));
        }
        outcomes
    }

    fn scan_parallel(
        &self,
        matcher: &PatternMatcher,
        space: &AddressSpace,
    ) -> Vec<Result<Vec<Match>, SegmentFailure>> {
        // Collect preserves the par_iter's input order, so segment position
        // stays the primary sort key and offsets the secondary.
        space
            .segments()
            .par_iter()
            .filter_map(|segment| {
                if self.is_cancelled() {
                    return None;
                }
                Some(scan_segment(matcher, segment))
            })
            .collect()
    }

    fn is_cancelled(&self) -> bool {
        self.cancel
            .as_ref()
            .map_or(false, |flag| flag.load(Ordering::Relaxed))
    }
}

impl Default for SearchDriver {
    fn default() -> Self {
        Self::new()
    }
}

fn scan_segment(matcher: &PatternMatcher, segment: &Segment) -> Result<Vec<Match>, SegmentFailure> {
    match segment.read_all() {
        Ok(data) => {
            let matches: Vec<Match> = matcher
                .find_iter(&data)
                .map(|offset| Match::new(segment.base() + offset as u64, segment.name()))
                .collect();
            if !matches.is_empty() {
                log::debug!("{} matches in segment {}", matches.len(), segment.name());
            }
            Ok(matches)
        }
        Err(err) => {
            log::warn!("Could not read segment {}: {}", segment.name(), err);
            Err(SegmentFailure::new(segment.name(), &err))
        }
    }
}
