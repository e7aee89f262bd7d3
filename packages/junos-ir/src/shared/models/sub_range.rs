//! Inclusive integer ranges (ports, lengths, ICMP types, VLAN ids)

use super::error::{ModelError, ModelResult};
use serde::{Deserialize, Serialize};
use std::fmt;

/// Inclusive range `start..=end`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct SubRange {
    pub start: u32,
    pub end: u32,
}

impl SubRange {
    pub fn new(start: u32, end: u32) -> ModelResult<Self> {
        if start > end {
            return Err(ModelError::InvertedRange { start, end });
        }
        Ok(Self { start, end })
    }

    pub const fn single(value: u32) -> Self {
        Self {
            start: value,
            end: value,
        }
    }

    pub fn contains(&self, value: u32) -> bool {
        self.start <= value && value <= self.end
    }

    pub fn is_single(&self) -> bool {
        self.start == self.end
    }
}

impl fmt::Display for SubRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_single() {
            write!(f, "{}", self.start)
        } else {
            write!(f, "{}-{}", self.start, self.end)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_inverted_range_rejected() {
        assert_eq!(
            SubRange::new(10, 5),
            Err(ModelError::InvertedRange { start: 10, end: 5 })
        );
    }

    #[test]
    fn test_display() {
        assert_eq!(SubRange::single(80).to_string(), "80");
        assert_eq!(SubRange::new(5190, 5193).unwrap().to_string(), "5190-5193");
    }
}
