//! Keyword Matcher — rule-based classification of ticket descriptions.
//!
//! Rules are evaluated in vocabulary order against the lowercased text; the
//! first rule with a contained keyword wins, otherwise the fallback category
//! applies. Priority is a pure table lookup on the category.

use crate::{ClassifierError, TicketClassifier};
use tb_core::config::ClassifierConfig;
use tb_core::priority::{PriorityLevel, PriorityTable};
use tb_core::vocabulary::FALLBACK_CATEGORY;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeywordRule {
    pub category: String,
    pub keywords: Vec<String>,
}

impl KeywordRule {
    /// `text` must already be lowercased.
    pub fn matches(&self, text: &str) -> bool {
        contains_any(text, &self.keywords)
    }
}

#[derive(Debug, Clone)]
pub struct KeywordMatcher {
    rules: Vec<KeywordRule>,
    fallback: String,
    priorities: PriorityTable,
}

impl KeywordMatcher {
    pub fn new(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        config.validate()?;
        Ok(Self::from_config(config))
    }

    pub fn residential() -> Self {
        Self::from_config(&ClassifierConfig::residential())
    }

    fn from_config(config: &ClassifierConfig) -> Self {
        let rules = config
            .vocabulary
            .categories()
            .filter(|c| !c.keywords.is_empty())
            .map(|c| KeywordRule {
                category: c.name.clone(),
                keywords: c.keywords.iter().cloned().collect(),
            })
            .collect();

        Self {
            rules,
            fallback: FALLBACK_CATEGORY.to_string(),
            priorities: config.priorities.clone(),
        }
    }

    /// Rules in evaluation order.
    pub fn rules(&self) -> &[KeywordRule] {
        &self.rules
    }

    pub fn fallback(&self) -> &str {
        &self.fallback
    }

    /// The first rule matching `description`, if any.
    pub fn match_rule(&self, description: &str) -> Option<&KeywordRule> {
        let lower = description.to_lowercase();
        self.rules.iter().find(|rule| rule.matches(&lower))
    }
}

impl TicketClassifier for KeywordMatcher {
    fn classify(&self, description: &str) -> String {
        match self.match_rule(description) {
            Some(rule) => rule.category.clone(),
            None => self.fallback.clone(),
        }
    }

    fn prioritize(&self, category: &str, _description: &str) -> PriorityLevel {
        self.priorities.priority_of(category)
    }
}

fn contains_any(text: &str, keywords: &[String]) -> bool {
    keywords.iter().any(|kw| text.contains(kw.as_str()))
}
