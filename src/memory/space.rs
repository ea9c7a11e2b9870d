// Tue Jan 20 2026 - Alex

use crate::memory::{Address, Segment};

/// Ordered collection of disjoint segments. Iteration order is exactly the
/// order segments were added; disjointness is the caller's responsibility.
#[derive(Debug, Clone, Default)]
pub struct AddressSpace {
    segments: Vec<Segment>,
}

impl AddressSpace {
    pub fn new() -> Self {
        Self { segments: Vec::new() }
    }

    pub fn from_segments(segments: Vec<Segment>) -> Self {
        Self { segments }
    }

    pub fn add(&mut self, segment: Segment) {
        self.segments.push(segment);
    }

    pub fn segments(&self) -> &[Segment] {
        &self.segments
    }

    pub fn iter(&self) -> impl Iterator<Item = &Segment> {
        self.segments.iter()
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn total_bytes(&self) -> u64 {
        self.segments.iter().map(|s| s.size()).sum()
    }

    pub fn find_segment(&self, addr: Address) -> Option<&Segment> {
        self.segments.iter().find(|s| s.contains(addr))
    }

    pub fn find_segment_by_name(&self, name: &str) -> Option<&Segment> {
        self.segments.iter().find(|s| s.name() == name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn two_segment_space() -> AddressSpace {
        let mut space = AddressSpace::new();
        space.add(Segment::from_bytes(Address::new(0x2000), ".data", vec![0; 8]));
        space.add(Segment::from_bytes(Address::new(0x1000), ".text", vec![0; 16]));
        space
    }

    #[test]
    fn test_space_preserves_insertion_order() {
        let space = two_segment_space();
        let names: Vec<_> = space.iter().map(|s| s.name().to_string()).collect();
        assert_eq!(names, vec![".data", ".text"]);
        assert_eq!(space.len(), 2);
        assert_eq!(space.total_bytes(), 24);
        assert!(!space.is_empty());
        assert!(AddressSpace::new().is_empty());
    }

    #[test]
    fn test_space_lookup() {
        let space = two_segment_space();
        assert_eq!(space.find_segment(Address::new(0x1004)).unwrap().name(), ".text");
        assert!(space.find_segment(Address::new(0x3000)).is_none());
        assert_eq!(space.find_segment_by_name(".data").unwrap().base(), Address::new(0x2000));
    }
}
