use std::collections::{HashMap, HashSet};
use tracing::debug;

use crate::catalog::MasterCatalog;
use crate::pantry::PantryItem;

/// Lowercase ingredient names considered in stock for matching.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct AvailabilityIndex {
    names: HashSet<String>,
}

impl AvailabilityIndex {
    /// Builds the index from the user's pantry and the master catalog.
    ///
    /// A pantry item counts when its status is `have`. A catalog ingredient counts
    /// unless the pantry holds an entry of the same name (case-insensitive), in
    /// which case that entry's decision wins. When the pantry repeats a name, the
    /// last entry decides.
    pub fn build(pantry: &[PantryItem], catalog: &MasterCatalog) -> Self {
        let decisions: HashMap<String, bool> = pantry
            .iter()
            .map(|item| (item.name.to_lowercase(), item.status.is_available()))
            .collect();

        let mut names: HashSet<String> = decisions
            .iter()
            .filter(|(_, available)| **available)
            .map(|(name, _)| name.clone())
            .collect();

        for name in catalog.iter_names() {
            let lower = name.to_lowercase();
            if !decisions.contains_key(&lower) {
                names.insert(lower);
            }
        }

        debug!(
            decisions = decisions.len(),
            available = names.len(),
            "built availability index"
        );
        Self { names }
    }

    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            names: names.into_iter().map(|n| n.as_ref().to_lowercase()).collect(),
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.names.contains(&name.to_lowercase())
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(String::as_str)
    }

    /// Names in alphabetical order, for display.
    pub fn sorted(&self) -> Vec<&str> {
        let mut names: Vec<&str> = self.iter().collect();
        names.sort_unstable();
        names
    }

    pub fn len(&self) -> usize {
        self.names.len()
    }

    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }
}
