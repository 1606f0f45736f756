//! Classifier configuration — vocabulary, priorities and sentence templates
//! bundled so a deployment can ship its own as a JSON file.

use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::priority::PriorityTable;
use crate::vocabulary::Vocabulary;
use crate::CoreError;

/// Placeholder replaced by a keyword in a sentence template.
pub const KEYWORD_SLOT: &str = "{kw}";

/// Built-in templates used to synthesize the training corpus.
pub const DEFAULT_TEMPLATES: [&str; 4] = [
    "Se detecta {kw} en la instalación.",
    "Hay un reporte de {kw} hace minutos.",
    "Se percibe {kw} cerca del área común.",
    "Alerta: posible {kw} en el sector.",
];

fn default_templates() -> Vec<String> {
    DEFAULT_TEMPLATES.iter().map(|t| t.to_string()).collect()
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClassifierConfig {
    pub vocabulary: Vocabulary,

    #[serde(default)]
    pub priorities: PriorityTable,

    #[serde(default = "default_templates")]
    pub templates: Vec<String>,
}

impl ClassifierConfig {
    pub fn new(vocabulary: Vocabulary, priorities: PriorityTable) -> Self {
        Self {
            vocabulary,
            priorities,
            templates: default_templates(),
        }
    }

    pub fn residential() -> Self {
        Self::new(Vocabulary::residential(), PriorityTable::residential())
    }

    pub fn with_templates<I, S>(mut self, templates: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.templates = templates.into_iter().map(Into::into).collect();
        self
    }

    pub fn from_json_str(json: &str) -> Result<Self, CoreError> {
        let config: Self =
            serde_json::from_str(json).map_err(|e| CoreError::Config(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn from_json_file(path: &Path) -> Result<Self, CoreError> {
        let json = std::fs::read_to_string(path)
            .map_err(|e| CoreError::Config(format!("{}: {e}", path.display())))?;
        Self::from_json_str(&json)
    }

    /// Every vocabulary category must have an explicit priority entry.
    pub fn validate(&self) -> Result<(), CoreError> {
        for name in self.vocabulary.category_names() {
            if !self.priorities.contains(name) {
                return Err(CoreError::MissingPriority(name.to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ClassifierConfig {
    fn default() -> Self {
        Self::residential()
    }
}
