//! tb-classifier: ticket description → category and priority
//!
//! Two engines implement [`TicketClassifier`]:
//! - [`KeywordMatcher`]: ordered keyword rules, first match wins, priority
//!   looked up from the category.
//! - [`TrainedClassifier`]: Synthesizer → Vectorizer → {CategoryModel,
//!   PriorityModel}. Both models are trained once from a synthetic corpus
//!   and predict independently from the description's feature vector.

pub mod encoder;
pub mod keyword_matcher;
pub mod model;
pub mod synthesizer;
pub mod trained;
pub mod tree;
pub mod vectorizer;

pub use keyword_matcher::KeywordMatcher;
pub use trained::TrainedClassifier;

use tb_core::priority::PriorityLevel;
use tb_core::CoreError;
use thiserror::Error;

#[derive(Debug, Error)]
pub enum ClassifierError {
    #[error("synthetic corpus is empty")]
    EmptyCorpus,
    #[error("invalid sentence template: {0}")]
    InvalidTemplate(String),
    #[error("training failed: {0}")]
    Training(String),
    #[error(transparent)]
    Core(#[from] CoreError),
}

/// The contract consumed by the intake shell.
///
/// Both methods are total: any text, including the empty string, yields a
/// label. Neither touches persisted state.
pub trait TicketClassifier {
    fn classify(&self, description: &str) -> String;

    /// `category` is the label returned by [`classify`](Self::classify).
    /// Engines may ignore it; see [`TrainedClassifier`].
    fn prioritize(&self, category: &str, description: &str) -> PriorityLevel;
}
