//! Priority types — severity levels and the category → level table.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::vocabulary::FALLBACK_CATEGORY;
use crate::CoreError;

// ---------------------------------------------------------------------------
// Priority level
// ---------------------------------------------------------------------------

/// Severity tier, ordered from most to least urgent.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
pub enum PriorityLevel {
    #[serde(rename = "Alta")]
    High,
    #[default]
    #[serde(rename = "Media")]
    Medium,
    #[serde(rename = "Baja")]
    Low,
}

impl PriorityLevel {
    pub const ALL: [PriorityLevel; 3] = [Self::High, Self::Medium, Self::Low];

    /// Label as persisted and displayed.
    pub fn label(&self) -> &'static str {
        match self {
            PriorityLevel::High => "Alta",
            PriorityLevel::Medium => "Media",
            PriorityLevel::Low => "Baja",
        }
    }
}

impl fmt::Display for PriorityLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for PriorityLevel {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Self::ALL
            .into_iter()
            .find(|p| p.label().eq_ignore_ascii_case(s))
            .ok_or_else(|| CoreError::UnknownPriority(s.to_string()))
    }
}

// ---------------------------------------------------------------------------
// Priority table
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PriorityTable {
    #[serde(default)]
    entries: BTreeMap<String, PriorityLevel>,

    /// Used for the fallback category and for anything not in `entries`.
    #[serde(default)]
    default: PriorityLevel,
}

impl PriorityTable {
    pub fn new(default: PriorityLevel) -> Self {
        Self {
            entries: BTreeMap::new(),
            default,
        }
    }

    /// Priorities for the built-in residential vocabulary.
    pub fn residential() -> Self {
        Self::new(PriorityLevel::Medium)
            .with("seguridad", PriorityLevel::High)
            .with("electricidad", PriorityLevel::High)
            .with("fuego", PriorityLevel::High)
            .with("conflictos", PriorityLevel::High)
            .with("agua", PriorityLevel::Medium)
            .with("animales", PriorityLevel::Medium)
            .with("ruido", PriorityLevel::Low)
            .with("limpieza", PriorityLevel::Low)
            .with(FALLBACK_CATEGORY, PriorityLevel::Medium)
    }

    pub fn with(mut self, category: impl Into<String>, level: PriorityLevel) -> Self {
        self.entries.insert(category.into(), level);
        self
    }

    pub fn get(&self, category: &str) -> Option<PriorityLevel> {
        self.entries.get(category).copied()
    }

    /// Level for `category`, or the default when the category is unknown.
    pub fn priority_of(&self, category: &str) -> PriorityLevel {
        self.get(category).unwrap_or(self.default)
    }

    pub fn contains(&self, category: &str) -> bool {
        self.entries.contains_key(category)
    }

    pub fn default_priority(&self) -> PriorityLevel {
        self.default
    }
}

impl Default for PriorityTable {
    fn default() -> Self {
        Self::residential()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residential_lookup() {
        let table = PriorityTable::residential();
        assert_eq!(table.priority_of("seguridad"), PriorityLevel::High);
        assert_eq!(table.priority_of("agua"), PriorityLevel::Medium);
        assert_eq!(table.priority_of("ruido"), PriorityLevel::Low);
        assert_eq!(table.priority_of(FALLBACK_CATEGORY), PriorityLevel::Medium);
    }

    #[test]
    fn unknown_category_uses_default() {
        let table = PriorityTable::new(PriorityLevel::Low);
        assert_eq!(table.get("inexistente"), None);
        assert_eq!(table.priority_of("inexistente"), PriorityLevel::Low);
    }

    #[test]
    fn labels_parse_back() {
        for level in PriorityLevel::ALL {
            assert_eq!(level.label().parse::<PriorityLevel>().unwrap(), level);
        }
        assert_eq!("alta".parse::<PriorityLevel>().unwrap(), PriorityLevel::High);
        assert!("urgente".parse::<PriorityLevel>().is_err());
    }

    #[test]
    fn serializes_with_spanish_labels() {
        let json = serde_json::to_string(&PriorityLevel::Low).unwrap();
        assert_eq!(json, "\"Baja\"");
    }
}
