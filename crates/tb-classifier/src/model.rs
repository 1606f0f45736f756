//! Models — a predictor bundled with the label encoder it was trained with.

use crate::encoder::LabelEncoder;
use crate::synthesizer::SyntheticExample;
use crate::tree::{DecisionTree, Learner, Predictor};
use crate::vectorizer::FeatureVector;
use crate::ClassifierError;
use std::fmt::Debug;
use tb_core::priority::PriorityLevel;

/// Maps feature vectors to labels of type `L`.
///
/// The encoder is built from the training labels inside [`train`](Self::train)
/// and never exposed mutably, so training and inference share one mapping.
#[derive(Debug, Clone)]
pub struct LabelModel<L, P> {
    encoder: LabelEncoder<L>,
    predictor: P,
}

impl<L, P> LabelModel<L, P>
where
    L: Ord + Clone + Debug,
    P: Predictor,
{
    pub fn train<T>(
        learner: &T,
        samples: &[FeatureVector],
        labels: &[L],
    ) -> Result<Self, ClassifierError>
    where
        T: Learner<Model = P>,
    {
        if samples.is_empty() {
            return Err(ClassifierError::EmptyCorpus);
        }
        if samples.len() != labels.len() {
            return Err(ClassifierError::Training(format!(
                "{} samples but {} labels",
                samples.len(),
                labels.len()
            )));
        }

        let encoder = LabelEncoder::fit(labels);
        let targets = encoder.transform(labels)?;
        let predictor = learner.fit(samples, &targets, encoder.len())?;
        Ok(Self { encoder, predictor })
    }

    /// `None` only if the predictor returns an index outside the encoder.
    pub fn predict(&self, features: &FeatureVector) -> Option<&L> {
        self.encoder.decode(self.predictor.predict(features))
    }

    /// The label space, sorted.
    pub fn labels(&self) -> &[L] {
        self.encoder.classes()
    }

    pub fn predictor(&self) -> &P {
        &self.predictor
    }
}

// ---------------------------------------------------------------------------
// Category model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct CategoryModel<P = DecisionTree> {
    inner: LabelModel<String, P>,
}

impl<P: Predictor> CategoryModel<P> {
    /// `samples[i]` must be the vectorized text of `corpus[i]`.
    pub fn train<T>(
        learner: &T,
        samples: &[FeatureVector],
        corpus: &[SyntheticExample],
    ) -> Result<Self, ClassifierError>
    where
        T: Learner<Model = P>,
    {
        let labels: Vec<String> = corpus.iter().map(|ex| ex.category.clone()).collect();
        let inner = LabelModel::train(learner, samples, &labels)?;
        tracing::debug!("category model trained over {} labels", inner.labels().len());
        Ok(Self { inner })
    }

    pub fn predict(&self, features: &FeatureVector) -> Option<&str> {
        self.inner.predict(features).map(String::as_str)
    }

    /// Every category the model can return.
    pub fn categories(&self) -> &[String] {
        self.inner.labels()
    }

    pub fn predictor(&self) -> &P {
        self.inner.predictor()
    }
}

// ---------------------------------------------------------------------------
// Priority model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone)]
pub struct PriorityModel<P = DecisionTree> {
    inner: LabelModel<PriorityLevel, P>,
}

impl<P: Predictor> PriorityModel<P> {
    /// `samples[i]` must be the vectorized text of `corpus[i]`.
    pub fn train<T>(
        learner: &T,
        samples: &[FeatureVector],
        corpus: &[SyntheticExample],
    ) -> Result<Self, ClassifierError>
    where
        T: Learner<Model = P>,
    {
        let labels: Vec<PriorityLevel> = corpus.iter().map(|ex| ex.priority).collect();
        let inner = LabelModel::train(learner, samples, &labels)?;
        tracing::debug!("priority model trained over {} levels", inner.labels().len());
        Ok(Self { inner })
    }

    pub fn predict(&self, features: &FeatureVector) -> Option<PriorityLevel> {
        self.inner.predict(features).copied()
    }

    pub fn levels(&self) -> &[PriorityLevel] {
        self.inner.labels()
    }

    pub fn predictor(&self) -> &P {
        self.inner.predictor()
    }
}
