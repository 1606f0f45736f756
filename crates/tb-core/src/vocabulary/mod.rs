//! Vocabulary — ordered category → keyword-set table.
//!
//! Category order is significant: it is the rule order of the keyword
//! matcher and the row order of the synthetic corpus. Keywords are stored
//! lowercased so that matching is case-insensitive.

use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};

use crate::CoreError;

/// Category assigned when no rule matches.
pub const FALLBACK_CATEGORY: &str = "otro";

const RESIDENTIAL: &[(&str, &[&str])] = &[
    (
        "agua",
        &["fuga", "inundación", "desborde", "filtración", "derrame", "humedad"],
    ),
    (
        "electricidad",
        &["apagón", "corte", "cable", "sobrecarga", "falla eléctrica", "cortocircuito"],
    ),
    (
        "seguridad",
        &["robo", "asalto", "vandalismo", "intrusión", "allanamiento", "violación"],
    ),
    (
        "ruido",
        &["ruido", "fiesta", "música", "estruendo", "bulla", "clamor"],
    ),
    (
        "limpieza",
        &["basura", "desorden", "limpieza", "residuos", "suciedad", "desecho"],
    ),
    (
        "fuego",
        &["incendio", "chispa", "humo", "llamas", "combustión", "alarma incendio"],
    ),
    (
        "animales",
        &["perro", "gato", "roedor", "avispas", "abejas", "mapache", "jabalí", "serpiente"],
    ),
    (
        "conflictos",
        &["discusión", "pelea", "riña", "agresión", "confrontación", "enfrentamiento"],
    ),
];

// ---------------------------------------------------------------------------
// Category entry
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CategoryKeywords {
    /// Category label, unique within a vocabulary.
    pub name: String,

    /// Lowercased keyword phrases; may contain spaces.
    #[serde(default)]
    pub keywords: BTreeSet<String>,
}

// ---------------------------------------------------------------------------
// Vocabulary
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<CategoryKeywords>", into = "Vec<CategoryKeywords>")]
pub struct Vocabulary {
    categories: Vec<CategoryKeywords>,
}

impl Vocabulary {
    pub fn builder() -> VocabularyBuilder {
        VocabularyBuilder::default()
    }

    /// The built-in vocabulary for residential incidents.
    pub fn residential() -> Self {
        let categories = RESIDENTIAL
            .iter()
            .map(|(name, keywords)| CategoryKeywords {
                name: (*name).to_string(),
                keywords: keywords.iter().map(|kw| kw.to_string()).collect(),
            })
            .collect();
        Self { categories }
    }

    /// Categories in enumeration order.
    pub fn categories(&self) -> impl Iterator<Item = &CategoryKeywords> {
        self.categories.iter()
    }

    pub fn category_names(&self) -> impl Iterator<Item = &str> {
        self.categories.iter().map(|c| c.name.as_str())
    }

    pub fn contains(&self, category: &str) -> bool {
        self.categories.iter().any(|c| c.name == category)
    }

    pub fn keywords_of(&self, category: &str) -> Option<&BTreeSet<String>> {
        self.categories
            .iter()
            .find(|c| c.name == category)
            .map(|c| &c.keywords)
    }

    /// Every distinct keyword, sorted. This is the canonical feature index.
    pub fn all_keywords(&self) -> Vec<String> {
        self.categories
            .iter()
            .flat_map(|c| c.keywords.iter().cloned())
            .collect::<BTreeSet<_>>()
            .into_iter()
            .collect()
    }

    pub fn len(&self) -> usize {
        self.categories.len()
    }

    pub fn is_empty(&self) -> bool {
        self.categories.is_empty()
    }
}

impl Default for Vocabulary {
    fn default() -> Self {
        Self::residential()
    }
}

impl TryFrom<Vec<CategoryKeywords>> for Vocabulary {
    type Error = CoreError;

    fn try_from(entries: Vec<CategoryKeywords>) -> Result<Self, Self::Error> {
        entries
            .into_iter()
            .fold(Vocabulary::builder(), |b, entry| {
                b.category(entry.name, entry.keywords)
            })
            .build()
    }
}

impl From<Vocabulary> for Vec<CategoryKeywords> {
    fn from(vocabulary: Vocabulary) -> Self {
        vocabulary.categories
    }
}

// ---------------------------------------------------------------------------
// Builder
// ---------------------------------------------------------------------------

/// Collects categories in insertion order and normalizes them on `build`.
#[derive(Debug, Default)]
pub struct VocabularyBuilder {
    entries: Vec<(String, Vec<String>)>,
}

impl VocabularyBuilder {
    pub fn category<I, S>(mut self, name: impl Into<String>, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.entries
            .push((name.into(), keywords.into_iter().map(Into::into).collect()));
        self
    }

    pub fn build(self) -> Result<Vocabulary, CoreError> {
        let mut seen = HashSet::new();
        let mut categories = Vec::with_capacity(self.entries.len());

        for (name, keywords) in self.entries {
            let name = name.trim().to_string();
            if name.is_empty() {
                return Err(CoreError::InvalidVocabulary("empty category name".into()));
            }
            if !seen.insert(name.clone()) {
                return Err(CoreError::InvalidVocabulary(format!(
                    "duplicate category '{name}'"
                )));
            }

            let mut normalized = BTreeSet::new();
            for kw in keywords {
                let kw = kw.trim().to_lowercase();
                if kw.is_empty() {
                    return Err(CoreError::InvalidVocabulary(format!(
                        "empty keyword in category '{name}'"
                    )));
                }
                normalized.insert(kw);
            }

            categories.push(CategoryKeywords {
                name,
                keywords: normalized,
            });
        }

        Ok(Vocabulary { categories })
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn residential_order_is_preserved() {
        let vocab = Vocabulary::residential();
        let names: Vec<&str> = vocab.category_names().collect();
        assert_eq!(
            names,
            vec![
                "agua",
                "electricidad",
                "seguridad",
                "ruido",
                "limpieza",
                "fuego",
                "animales",
                "conflictos"
            ]
        );
    }

    #[test]
    fn all_keywords_sorted_and_distinct() {
        let vocab = Vocabulary::builder()
            .category("a", ["zeta", "beta"])
            .category("b", ["beta", "alfa"])
            .build()
            .unwrap();
        assert_eq!(vocab.all_keywords(), vec!["alfa", "beta", "zeta"]);
    }

    #[test]
    fn residential_keyword_count() {
        // 7 categories of 6 keywords plus animales with 8.
        assert_eq!(Vocabulary::residential().all_keywords().len(), 50);
    }

    #[test]
    fn builder_normalizes_keywords() {
        let vocab = Vocabulary::builder()
            .category(" agua ", ["  FUGA ", "Humedad"])
            .build()
            .unwrap();
        let kws = vocab.keywords_of("agua").unwrap();
        assert!(kws.contains("fuga"));
        assert!(kws.contains("humedad"));
    }

    #[test]
    fn builder_rejects_duplicates_and_blanks() {
        let dup = Vocabulary::builder()
            .category("agua", ["fuga"])
            .category("agua", ["derrame"])
            .build();
        assert!(matches!(dup, Err(CoreError::InvalidVocabulary(_))));

        let blank_kw = Vocabulary::builder().category("agua", ["  "]).build();
        assert!(blank_kw.is_err());

        let blank_name = Vocabulary::builder().category("", ["fuga"]).build();
        assert!(blank_name.is_err());
    }

    #[test]
    fn category_without_keywords_is_allowed() {
        let vocab = Vocabulary::builder()
            .category("vacía", Vec::<String>::new())
            .build()
            .unwrap();
        assert!(vocab.keywords_of("vacía").unwrap().is_empty());
        assert!(vocab.all_keywords().is_empty());
    }

    #[test]
    fn json_round_trip_keeps_order() {
        let vocab = Vocabulary::residential();
        let json = serde_json::to_string(&vocab).unwrap();
        let back: Vocabulary = serde_json::from_str(&json).unwrap();
        assert_eq!(back, vocab);
    }

    #[test]
    fn json_is_validated() {
        let json = r#"[{"name": "agua", "keywords": ["fuga"]}, {"name": "agua"}]"#;
        assert!(serde_json::from_str::<Vocabulary>(json).is_err());
    }
}
