//! Application state shared by every command.

use anyhow::{Context, Result};
use clap::ValueEnum;
use std::path::Path;
use tb_classifier::{KeywordMatcher, TicketClassifier, TrainedClassifier};
use tb_core::config::ClassifierConfig;
use tb_store::{CsvTicketStore, TicketBook};

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Engine {
    /// Decision trees trained on synthetic sentences
    Trained,
    /// Ordered keyword rules
    Keyword,
}

pub struct AppState {
    /// Ready to use; the trained engine has finished training.
    pub classifier: Box<dyn TicketClassifier>,

    pub book: TicketBook,
}

impl AppState {
    pub fn new(classifier: Box<dyn TicketClassifier>, book: TicketBook) -> Self {
        Self { classifier, book }
    }

    /// Build the classifier, then open the store.
    pub fn init(store: &Path, engine: Engine, config: Option<&Path>) -> Result<Self> {
        let config = match config {
            Some(path) => ClassifierConfig::from_json_file(path)
                .with_context(|| format!("Failed to load classifier config {}", path.display()))?,
            None => ClassifierConfig::residential(),
        };
        let classifier = build_classifier(engine, &config)?;
        let book = TicketBook::open(CsvTicketStore::new(store))
            .with_context(|| format!("Failed to open ticket store {}", store.display()))?;
        Ok(Self::new(classifier, book))
    }
}

pub fn build_classifier(
    engine: Engine,
    config: &ClassifierConfig,
) -> Result<Box<dyn TicketClassifier>> {
    let classifier: Box<dyn TicketClassifier> = match engine {
        Engine::Trained => {
            Box::new(TrainedClassifier::train(config).context("Failed to train classifier")?)
        }
        Engine::Keyword => {
            Box::new(KeywordMatcher::new(config).context("Invalid keyword configuration")?)
        }
    };
    tracing::info!("Using {engine:?} classifier");
    Ok(classifier)
}
