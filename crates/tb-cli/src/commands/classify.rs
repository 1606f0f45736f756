//! Dry-run classification.

use crate::state::AppState;
use anyhow::Result;
use std::io::Write;

pub fn run(state: &AppState, text: &str, out: &mut impl Write) -> Result<()> {
    let category = state.classifier.classify(text);
    let priority = state.classifier.prioritize(&category, text);
    writeln!(out, "Categoría: {category}")?;
    writeln!(out, "Prioridad: {priority}")?;
    Ok(())
}
