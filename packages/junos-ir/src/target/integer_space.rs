//! Normalized sets of integers (VLAN ids and similar)

use crate::shared::models::SubRange;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Union of disjoint, non-adjacent, ascending ranges
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct IntegerSpace {
    ranges: Vec<SubRange>,
}

impl IntegerSpace {
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn of(range: SubRange) -> Self {
        Self {
            ranges: vec![range],
        }
    }

    pub fn single(value: u32) -> Self {
        Self::of(SubRange::single(value))
    }

    pub fn from_ranges(ranges: impl IntoIterator<Item = SubRange>) -> Self {
        let mut space = Self::empty();
        for range in ranges {
            space.add(range);
        }
        space
    }

    /// Union `range` into the space, merging overlaps and neighbours
    pub fn add(&mut self, range: SubRange) {
        self.ranges.push(range);
        self.ranges.sort();
        let mut merged: Vec<SubRange> = Vec::with_capacity(self.ranges.len());
        for next in self.ranges.drain(..) {
            match merged.last_mut() {
                Some(last) if next.start <= last.end.saturating_add(1) => {
                    last.end = last.end.max(next.end);
                }
                _ => merged.push(next),
            }
        }
        self.ranges = merged;
    }

    pub fn union(mut self, other: &IntegerSpace) -> IntegerSpace {
        for range in &other.ranges {
            self.add(*range);
        }
        self
    }

    pub fn contains(&self, value: u32) -> bool {
        self.ranges.iter().any(|r| r.contains(value))
    }

    pub fn is_empty(&self) -> bool {
        self.ranges.is_empty()
    }

    pub fn ranges(&self) -> &[SubRange] {
        &self.ranges
    }
}

impl fmt::Display for IntegerSpace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let parts: Vec<String> = self.ranges.iter().map(|r| r.to_string()).collect();
        write!(f, "{}", parts.join(","))
    }
}
