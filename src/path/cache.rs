use std::collections::BTreeMap;
use std::sync::Arc;

use crate::foundation::core::Complexity;
use crate::path::artifact::PathArtifact;

/// Per-session memo of synthesized paths keyed by complexity.
///
/// Bounded by the ten possible complexity levels; the only eviction is [`PathCache::clear`] on
/// image change. Entries are immutable: a second `put` for a populated level keeps the first.
#[derive(Debug, Default, Clone)]
pub struct PathCache {
    entries: BTreeMap<Complexity, Arc<PathArtifact>>,
}

impl PathCache {
    /// Create an empty cache.
    pub fn new() -> Self {
        Self::default()
    }

    /// Artifact cached for `complexity`, shared with the cache entry.
    pub fn get(&self, complexity: Complexity) -> Option<Arc<PathArtifact>> {
        self.entries.get(&complexity).cloned()
    }

    /// Store an artifact and return the entry now held for `complexity`.
    pub fn put(&mut self, complexity: Complexity, artifact: Arc<PathArtifact>) -> Arc<PathArtifact> {
        self.entries.entry(complexity).or_insert(artifact).clone()
    }

    /// Drop every entry.
    pub fn clear(&mut self) {
        self.entries.clear();
    }

    /// Return `true` when `complexity` has an entry.
    pub fn contains(&self, complexity: Complexity) -> bool {
        self.entries.contains_key(&complexity)
    }

    /// Number of cached levels.
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Return `true` when nothing is cached.
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cached levels in ascending order.
    pub fn complexities(&self) -> impl Iterator<Item = Complexity> + '_ {
        self.entries.keys().copied()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/path/cache.rs"]
mod tests;
