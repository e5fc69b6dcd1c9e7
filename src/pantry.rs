use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use thiserror::Error;
use tracing::{debug, warn};

use crate::catalog::{MasterCatalog, DEFAULT_CATEGORY};

#[derive(Debug, Serialize, Deserialize, Clone, Copy, PartialEq, Eq, Hash)]
#[serde(rename_all = "snake_case")]
pub enum PantryStatus {
    Have,
    DontHave,
    Seldom,
}

impl PantryStatus {
    pub const ALL: [PantryStatus; 3] =
        [PantryStatus::Have, PantryStatus::DontHave, PantryStatus::Seldom];

    /// Click-to-cycle order: have -> dont_have -> seldom -> have.
    pub fn next(self) -> Self {
        match self {
            PantryStatus::Have => PantryStatus::DontHave,
            PantryStatus::DontHave => PantryStatus::Seldom,
            PantryStatus::Seldom => PantryStatus::Have,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            PantryStatus::Have => "have",
            PantryStatus::DontHave => "dont_have",
            PantryStatus::Seldom => "seldom",
        }
    }

    /// Only the literal `have` grants availability; anything else fails closed.
    pub fn from_wire(value: &str) -> Self {
        match value {
            "have" => PantryStatus::Have,
            "seldom" => PantryStatus::Seldom,
            _ => PantryStatus::DontHave,
        }
    }

    pub fn is_available(self) -> bool {
        self == PantryStatus::Have
    }
}

impl std::fmt::Display for PantryStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for PantryStatus {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().replace('-', "_").as_str() {
            "have" => Ok(PantryStatus::Have),
            "dont_have" => Ok(PantryStatus::DontHave),
            "seldom" => Ok(PantryStatus::Seldom),
            other => Err(format!("unknown pantry status '{}'", other)),
        }
    }
}

/// A pantry record as stored by a pantry source. Older records carry a boolean
/// `available` flag instead of `status`.
#[derive(Debug, Serialize, Deserialize, Clone, Default)]
pub struct PantryRecord {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub category: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub available: Option<bool>,
}

impl PantryRecord {
    /// Resolves the legacy `available` flag and returns the canonical item.
    /// Records without a usable name are dropped.
    pub fn normalize(self) -> Option<PantryItem> {
        let name = match self.name.as_deref().map(str::trim) {
            Some(n) if !n.is_empty() => n.to_string(),
            _ => {
                warn!(id = ?self.id, "dropping pantry record without a name");
                return None;
            }
        };
        let status = match (self.status.as_deref(), self.available) {
            (Some(s), _) => PantryStatus::from_wire(s),
            (None, Some(true)) => PantryStatus::Have,
            // No status and no legacy flag: treat as not stocked.
            (None, _) => PantryStatus::DontHave,
        };
        let category = match self.category.as_deref().map(str::trim) {
            Some(c) if !c.is_empty() => c.to_string(),
            _ => DEFAULT_CATEGORY.to_string(),
        };
        Some(PantryItem {
            id: self.id,
            name,
            category,
            status,
        })
    }
}

impl From<&PantryItem> for PantryRecord {
    fn from(item: &PantryItem) -> Self {
        PantryRecord {
            id: item.id.clone(),
            name: Some(item.name.clone()),
            category: Some(item.category.clone()),
            status: Some(item.status.as_str().to_string()),
            available: Some(item.status.is_available()),
        }
    }
}

#[derive(Debug, Serialize, Deserialize, Clone, PartialEq)]
pub struct PantryItem {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    pub name: String,
    pub category: String,
    pub status: PantryStatus,
}

impl PantryItem {
    pub fn new(name: impl Into<String>, category: impl Into<String>, status: PantryStatus) -> Self {
        Self {
            id: None,
            name: name.into(),
            category: category.into(),
            status,
        }
    }

    fn is_named(&self, lower_name: &str) -> bool {
        self.name.to_lowercase() == lower_name
    }
}

#[derive(Debug, Error, PartialEq)]
pub enum PantryError {
    #[error("ingredient name is empty")]
    EmptyName,
    #[error("\"{name}\" is already a standard ingredient in the \"{category}\" category")]
    AlreadyInCatalog { name: String, category: String },
    #[error("\"{0}\" is already in your pantry")]
    AlreadyInPantry(String),
    #[error("\"{0}\" is not in your pantry")]
    NotFound(String),
    #[error("\"{0}\" is a standard ingredient and cannot be deleted")]
    NotCustom(String),
}

/// One entry in a status column of the pantry board.
#[derive(Debug, Clone, PartialEq)]
pub struct ColumnEntry {
    pub name: String,
    pub is_custom: bool,
}

/// The user's classified ingredients. Names are unique case-insensitively.
#[derive(Debug, Serialize, Deserialize, Clone, Default, PartialEq)]
pub struct Pantry {
    items: Vec<PantryItem>,
}

impl Pantry {
    pub fn new(items: Vec<PantryItem>) -> Self {
        Self { items }
    }

    pub fn from_records(records: Vec<PantryRecord>) -> Self {
        Self {
            items: records.into_iter().filter_map(PantryRecord::normalize).collect(),
        }
    }

    pub fn items(&self) -> &[PantryItem] {
        &self.items
    }

    pub fn get(&self, name: &str) -> Option<&PantryItem> {
        let lower = name.to_lowercase();
        self.items.iter().find(|i| i.is_named(&lower))
    }

    fn get_mut(&mut self, name: &str) -> Option<&mut PantryItem> {
        let lower = name.to_lowercase();
        self.items.iter_mut().find(|i| i.is_named(&lower))
    }

    /// Adds a user-defined ingredient, stocked.
    pub fn add_custom(
        &mut self,
        name: &str,
        category: &str,
        catalog: &MasterCatalog,
    ) -> Result<&PantryItem, PantryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::EmptyName);
        }
        if let Some(existing) = catalog.category_of(name) {
            return Err(PantryError::AlreadyInCatalog {
                name: name.to_string(),
                category: existing.to_string(),
            });
        }
        if self.get(name).is_some() {
            return Err(PantryError::AlreadyInPantry(name.to_string()));
        }

        let category = if category.trim().is_empty() { DEFAULT_CATEGORY } else { category.trim() };
        self.items.push(PantryItem::new(to_title_case(name), category, PantryStatus::Have));
        debug!(name, category, "added custom pantry item");
        Ok(&self.items[self.items.len() - 1])
    }

    /// Moves an ingredient into `status`. Unknown names are created in `category`.
    pub fn set_status(
        &mut self,
        name: &str,
        status: PantryStatus,
        category: &str,
    ) -> Result<&PantryItem, PantryError> {
        let name = name.trim();
        if name.is_empty() {
            return Err(PantryError::EmptyName);
        }
        let lower = name.to_lowercase();
        let idx = match self.items.iter().position(|i| i.is_named(&lower)) {
            Some(idx) => {
                self.items[idx].status = status;
                idx
            }
            None => {
                self.items.push(PantryItem::new(name, category, status));
                self.items.len() - 1
            }
        };
        debug!(name, %status, "pantry status updated");
        Ok(&self.items[idx])
    }

    pub fn cycle_status(
        &mut self,
        name: &str,
        current: PantryStatus,
        category: &str,
    ) -> Result<&PantryItem, PantryError> {
        self.set_status(name, current.next(), category)
    }

    pub fn recategorize(&mut self, name: &str, category: &str) -> Result<&PantryItem, PantryError> {
        let item = self
            .get_mut(name)
            .ok_or_else(|| PantryError::NotFound(name.to_string()))?;
        item.category = category.to_string();
        Ok(&*item)
    }

    /// Deletes a custom ingredient. Catalog ingredients can only change status.
    pub fn remove(
        &mut self,
        name: &str,
        catalog: &MasterCatalog,
    ) -> Result<PantryItem, PantryError> {
        if catalog.contains(name) {
            return Err(PantryError::NotCustom(name.to_string()));
        }
        let lower = name.to_lowercase();
        let idx = self
            .items
            .iter()
            .position(|i| i.is_named(&lower))
            .ok_or_else(|| PantryError::NotFound(name.to_string()))?;
        Ok(self.items.remove(idx))
    }

    /// Ingredients of `category` shown in the `status` column of the board.
    /// Unclassified catalog ingredients sit in the `have` column.
    pub fn column(
        &self,
        category: &str,
        status: PantryStatus,
        catalog: &MasterCatalog,
    ) -> Vec<ColumnEntry> {
        let catalog_names = catalog.ingredients(category);

        let mut entries: Vec<ColumnEntry> = catalog_names
            .iter()
            .filter(|name| match self.get(name) {
                Some(item) => item.status == status,
                None => status == PantryStatus::Have,
            })
            .map(|name| ColumnEntry {
                name: name.clone(),
                is_custom: false,
            })
            .collect();

        entries.extend(
            self.items
                .iter()
                .filter(|item| item.category == category)
                .filter(|item| !catalog_names.iter().any(|m| item.is_named(&m.to_lowercase())))
                .filter(|item| item.status == status)
                .map(|item| ColumnEntry {
                    name: item.name.clone(),
                    is_custom: true,
                }),
        );

        entries.sort_by(|a, b| compare_names(&a.name, &b.name));
        entries
    }
}

fn compare_names(a: &str, b: &str) -> Ordering {
    a.to_lowercase().cmp(&b.to_lowercase()).then_with(|| a.cmp(b))
}

/// Lowercases the input, then capitalizes the first letter of each space-separated word.
pub fn to_title_case(s: &str) -> String {
    s.to_lowercase()
        .split(' ')
        .map(|word| {
            let mut chars = word.chars();
            match chars.next() {
                Some(first) => first.to_uppercase().chain(chars).collect(),
                None => String::new(),
            }
        })
        .collect::<Vec<String>>()
        .join(" ")
}
