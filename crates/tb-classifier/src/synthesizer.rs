//! Dataset Synthesizer — labeled training corpus from the vocabulary.
//!
//! corpus = categories (vocabulary order) × keywords (sorted) × templates (list order)

use crate::ClassifierError;
use serde::{Deserialize, Serialize};
use tb_core::config::{ClassifierConfig, KEYWORD_SLOT};
use tb_core::priority::{PriorityLevel, PriorityTable};
use tb_core::vocabulary::Vocabulary;

/// A sentence with exactly one `{kw}` slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentenceTemplate {
    prefix: String,
    suffix: String,
}

impl SentenceTemplate {
    pub fn parse(template: &str) -> Result<Self, ClassifierError> {
        match template.matches(KEYWORD_SLOT).count() {
            1 => {
                let (prefix, suffix) = template
                    .split_once(KEYWORD_SLOT)
                    .ok_or_else(|| ClassifierError::InvalidTemplate(template.to_string()))?;
                Ok(Self {
                    prefix: prefix.to_string(),
                    suffix: suffix.to_string(),
                })
            }
            n => Err(ClassifierError::InvalidTemplate(format!(
                "'{template}' has {n} '{KEYWORD_SLOT}' slots, expected 1"
            ))),
        }
    }

    pub fn render(&self, keyword: &str) -> String {
        format!("{}{keyword}{}", self.prefix, self.suffix)
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SyntheticExample {
    pub text: String,
    pub category: String,
    pub priority: PriorityLevel,
}

pub struct DatasetSynthesizer<'a> {
    vocabulary: &'a Vocabulary,
    priorities: &'a PriorityTable,
    templates: Vec<SentenceTemplate>,
}

impl<'a> DatasetSynthesizer<'a> {
    pub fn new<S: AsRef<str>>(
        vocabulary: &'a Vocabulary,
        priorities: &'a PriorityTable,
        templates: &[S],
    ) -> Result<Self, ClassifierError> {
        let templates = templates
            .iter()
            .map(|t| SentenceTemplate::parse(t.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self {
            vocabulary,
            priorities,
            templates,
        })
    }

    pub fn from_config(config: &'a ClassifierConfig) -> Result<Self, ClassifierError> {
        Self::new(&config.vocabulary, &config.priorities, &config.templates)
    }

    /// Number of rows `synthesize` will produce.
    pub fn expected_len(&self) -> usize {
        self.vocabulary
            .categories()
            .map(|c| c.keywords.len() * self.templates.len())
            .sum()
    }

    pub fn synthesize(&self) -> Vec<SyntheticExample> {
        let mut corpus = Vec::with_capacity(self.expected_len());
        for entry in self.vocabulary.categories() {
            let priority = self.priorities.priority_of(&entry.name);
            for keyword in &entry.keywords {
                for template in &self.templates {
                    corpus.push(SyntheticExample {
                        text: template.render(keyword),
                        category: entry.name.clone(),
                        priority,
                    });
                }
            }
        }
        corpus
    }
}
