//! Trained Classifier — decision trees over synthetic keyword sentences.
//!
//! Category and priority are predicted independently from the same feature
//! vector. The category passed to `prioritize` is not consulted, so the
//! predicted priority may differ from the table entry for the predicted
//! category.

use crate::model::{CategoryModel, PriorityModel};
use crate::synthesizer::DatasetSynthesizer;
use crate::tree::{DecisionTree, DecisionTreeLearner, Learner, Predictor};
use crate::vectorizer::{FeatureVector, Vectorizer};
use crate::{ClassifierError, TicketClassifier};
use tb_core::config::ClassifierConfig;
use tb_core::priority::PriorityLevel;
use tb_core::vocabulary::FALLBACK_CATEGORY;

/// Only constructible through training, so every instance is ready to
/// classify.
#[derive(Debug, Clone)]
pub struct TrainedClassifier<P = DecisionTree> {
    vectorizer: Vectorizer,
    category_model: CategoryModel<P>,
    priority_model: PriorityModel<P>,
    default_priority: PriorityLevel,
}

impl TrainedClassifier<DecisionTree> {
    /// Train both trees with the default learner.
    pub fn train(config: &ClassifierConfig) -> Result<Self, ClassifierError> {
        Self::train_with(config, &DecisionTreeLearner::default())
    }
}

impl<P: Predictor> TrainedClassifier<P> {
    pub fn train_with<T>(config: &ClassifierConfig, learner: &T) -> Result<Self, ClassifierError>
    where
        T: Learner<Model = P>,
    {
        config.validate()?;

        let corpus = DatasetSynthesizer::from_config(config)?.synthesize();
        if corpus.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }

        let vectorizer = Vectorizer::new(&config.vocabulary);
        let samples: Vec<FeatureVector> = corpus
            .iter()
            .map(|ex| vectorizer.vectorize(&ex.text))
            .collect();

        let category_model = CategoryModel::train(learner, &samples, &corpus)?;
        let priority_model = PriorityModel::train(learner, &samples, &corpus)?;

        tracing::info!(
            "Trained classifier: {} examples, {} features, {} categories",
            corpus.len(),
            vectorizer.dimension(),
            category_model.categories().len()
        );

        Ok(Self {
            vectorizer,
            category_model,
            priority_model,
            default_priority: config.priorities.default_priority(),
        })
    }

    pub fn vectorizer(&self) -> &Vectorizer {
        &self.vectorizer
    }

    pub fn category_model(&self) -> &CategoryModel<P> {
        &self.category_model
    }

    pub fn priority_model(&self) -> &PriorityModel<P> {
        &self.priority_model
    }
}

impl<P: Predictor> TicketClassifier for TrainedClassifier<P> {
    fn classify(&self, description: &str) -> String {
        let features = self.vectorizer.vectorize(description);
        self.category_model
            .predict(&features)
            .unwrap_or(FALLBACK_CATEGORY)
            .to_string()
    }

    fn prioritize(&self, _category: &str, description: &str) -> PriorityLevel {
        let features = self.vectorizer.vectorize(description);
        self.priority_model
            .predict(&features)
            .unwrap_or(self.default_priority)
    }
}
