// 🏷️ Category relation + registry
//
// A category name is emitted once for the whole run, in first-seen order.
// Later sightings (same listing or any other) are dropped silently.

use super::Relation;
use crate::escape::{quote, NullStyle};
use serde::Serialize;
use std::collections::HashSet;

// ============================================================================
// CATEGORY ROW
// ============================================================================

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct CategoryRow {
    pub name: String,
}

impl Relation for CategoryRow {
    const FILE_NAME: &'static str = "Category.dat";

    fn fields(&self, _style: NullStyle) -> Vec<String> {
        vec![quote(&self.name)]
    }
}

// ============================================================================
// CATEGORY REGISTRY
// ============================================================================

/// Global, append-only set of category names
#[derive(Debug, Default)]
pub struct CategoryRegistry {
    seen: HashSet<String>,
    rows: Vec<CategoryRow>,
}

impl CategoryRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a category; returns true only the first time `name` is seen
    pub fn register(&mut self, name: &str) -> bool {
        if self.seen.contains(name) {
            return false;
        }
        self.seen.insert(name.to_string());
        self.rows.push(CategoryRow {
            name: name.to_string(),
        });
        true
    }

    pub fn contains(&self, name: &str) -> bool {
        self.seen.contains(name)
    }

    /// Rows in first-seen order
    pub fn rows(&self) -> &[CategoryRow] {
        &self.rows
    }

    pub fn count(&self) -> usize {
        self.rows.len()
    }
}
