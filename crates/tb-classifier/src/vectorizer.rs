//! Feature Vectorizer — binary bag-of-keywords encoding.
//!
//! Slot `i` is set iff keyword `i` (in sorted vocabulary order) occurs as a
//! contiguous substring of the lowercased text. Substring semantics are
//! kept as-is: "humo" also fires inside "humos", and multi-word keywords
//! need the exact phrase.

use tb_core::vocabulary::Vocabulary;

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct FeatureVector(Vec<bool>);

impl FeatureVector {
    pub fn zeros(len: usize) -> Self {
        Self(vec![false; len])
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Out-of-range indices read as unset.
    pub fn is_set(&self, index: usize) -> bool {
        self.0.get(index).copied().unwrap_or(false)
    }

    pub fn active_count(&self) -> usize {
        self.0.iter().filter(|&&bit| bit).count()
    }

    pub fn active_indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.0
            .iter()
            .enumerate()
            .filter_map(|(i, &bit)| bit.then_some(i))
    }

    pub fn as_slice(&self) -> &[bool] {
        &self.0
    }
}

impl From<Vec<bool>> for FeatureVector {
    fn from(bits: Vec<bool>) -> Self {
        Self(bits)
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Vectorizer {
    keywords: Vec<String>,
}

impl Vectorizer {
    pub fn new(vocabulary: &Vocabulary) -> Self {
        Self {
            keywords: vocabulary.all_keywords(),
        }
    }

    /// Canonical feature index: sorted, distinct, lowercased.
    pub fn keywords(&self) -> &[String] {
        &self.keywords
    }

    pub fn dimension(&self) -> usize {
        self.keywords.len()
    }

    pub fn index_of(&self, keyword: &str) -> Option<usize> {
        self.keywords
            .binary_search_by(|kw| kw.as_str().cmp(keyword))
            .ok()
    }

    pub fn vectorize(&self, text: &str) -> FeatureVector {
        let lower = text.to_lowercase();
        FeatureVector(
            self.keywords
                .iter()
                .map(|kw| lower.contains(kw.as_str()))
                .collect(),
        )
    }

    /// Keywords whose slot `vectorize` would set, in index order.
    pub fn active_keywords(&self, text: &str) -> Vec<&str> {
        self.vectorize(text)
            .active_indices()
            .map(|i| self.keywords[i].as_str())
            .collect()
    }
}
