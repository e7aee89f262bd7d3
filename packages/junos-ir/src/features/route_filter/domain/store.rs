//! Route-filter dedup store
//!
//! Lines live in an insertion-ordered arena; a hash index maps structural
//! identity to the arena slot. Inserting a structurally equal line hands
//! back the existing slot, so then-actions from several configuration
//! statements accumulate on one canonical line.

use super::line::{RouteFilterLine, RouteFilterLineKey};
use rustc_hash::FxHashMap;
use serde::{Deserialize, Serialize};

/// Handle to a canonical line inside one `RouteFilter`
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineId(usize);

impl LineId {
    pub fn index(&self) -> usize {
        self.0
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(from = "RouteFilterSnapshot", into = "RouteFilterSnapshot")]
pub struct RouteFilter {
    pub name: String,
    lines: Vec<RouteFilterLine>,
    index: FxHashMap<RouteFilterLineKey, LineId>,
}

impl RouteFilter {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            lines: Vec::new(),
            index: FxHashMap::default(),
        }
    }

    /// Insert `key` unless an equal line exists; either way return the
    /// canonical line's handle
    pub fn insert_line(&mut self, key: RouteFilterLineKey) -> LineId {
        if let Some(id) = self.index.get(&key) {
            return *id;
        }
        let id = LineId(self.lines.len());
        self.lines.push(RouteFilterLine::new(key.clone()));
        self.index.insert(key, id);
        id
    }

    /// Insert and borrow the canonical line mutably
    pub fn canonical_line(&mut self, key: RouteFilterLineKey) -> &mut RouteFilterLine {
        let id = self.insert_line(key);
        &mut self.lines[id.0]
    }

    pub fn line(&self, id: LineId) -> Option<&RouteFilterLine> {
        self.lines.get(id.0)
    }

    pub fn line_mut(&mut self, id: LineId) -> Option<&mut RouteFilterLine> {
        self.lines.get_mut(id.0)
    }

    pub fn find(&self, key: &RouteFilterLineKey) -> Option<LineId> {
        self.index.get(key).copied()
    }

    /// Lines in insertion order
    pub fn lines(&self) -> impl Iterator<Item = &RouteFilterLine> {
        self.lines.iter()
    }

    pub fn into_lines(self) -> Vec<RouteFilterLine> {
        self.lines
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }
}

impl PartialEq for RouteFilter {
    fn eq(&self, other: &Self) -> bool {
        self.name == other.name && self.lines == other.lines
    }
}

impl Eq for RouteFilter {}

#[derive(Serialize, Deserialize)]
struct RouteFilterSnapshot {
    name: String,
    #[serde(default)]
    lines: Vec<RouteFilterLine>,
}

impl From<RouteFilterSnapshot> for RouteFilter {
    fn from(snapshot: RouteFilterSnapshot) -> Self {
        let mut filter = RouteFilter::new(snapshot.name);
        for line in snapshot.lines {
            filter.canonical_line(line.key).thens.extend(line.thens);
        }
        filter
    }
}

impl From<RouteFilter> for RouteFilterSnapshot {
    fn from(filter: RouteFilter) -> Self {
        RouteFilterSnapshot {
            name: filter.name,
            lines: filter.lines,
        }
    }
}
