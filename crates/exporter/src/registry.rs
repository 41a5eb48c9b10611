//! Tracks which object names have been admitted into the current export run.

use std::collections::HashSet;

/// Set of admitted object names. Two objects with the same name would write
/// the same mesh file, so only the first one gets through.
#[derive(Debug, Default)]
pub struct IdentifierRegistry {
    names: HashSet<String>,
}

impl IdentifierRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record `name` and return true the first time it is seen; false on repeats.
    pub fn admit(&mut self, name: &str) -> bool {
        if self.names.contains(name) {
            return false;
        }
        self.names.insert(name.to_string())
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(name)
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
