//! Route-filter lists (prefix matchers with length ranges)

use super::acl::LineAction;
use crate::shared::models::{IpWildcard, Prefix, SubRange};
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct RouteFilterListLine {
    pub action: LineAction,
    pub ip_wildcard: IpWildcard,
    pub length_range: SubRange,
}

impl RouteFilterListLine {
    pub fn permit(ip_wildcard: IpWildcard, length_range: SubRange) -> Self {
        Self {
            action: LineAction::Permit,
            ip_wildcard,
            length_range,
        }
    }

    /// Does a route for `prefix` match this line
    pub fn matches(&self, prefix: &Prefix) -> bool {
        self.ip_wildcard.matches(prefix.network())
            && self.length_range.contains(u32::from(prefix.length()))
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteFilterList {
    pub name: String,
    pub lines: Vec<RouteFilterListLine>,
}

impl RouteFilterList {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
        }
    }

    /// Append a line unless an identical one is already present
    pub fn add_line(&mut self, line: RouteFilterListLine) {
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    /// First-match verdict for `prefix`; `None` when no line matches
    pub fn evaluate(&self, prefix: &Prefix) -> Option<LineAction> {
        self.lines
            .iter()
            .find(|line| line.matches(prefix))
            .map(|line| line.action)
    }
}
