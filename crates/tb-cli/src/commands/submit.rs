//! Ticket submission.

use crate::state::AppState;
use anyhow::{bail, Context, Result};
use std::io::Write;
use tb_core::ticket::Ticket;

/// Classify, stamp and persist a new ticket. Blank input never reaches the
/// classifier.
pub fn run(
    state: &mut AppState,
    name: &str,
    description: &str,
    out: &mut impl Write,
) -> Result<Ticket> {
    let name = name.trim();
    let description = description.trim();
    if name.is_empty() || description.is_empty() {
        bail!("Nombre y descripción son obligatorios.");
    }

    let category = state.classifier.classify(description);
    let priority = state.classifier.prioritize(&category, description);
    let ticket = Ticket::new(name, description, category, priority);

    state.book.submit(&ticket).context("Failed to save ticket")?;
    tracing::info!(
        "Ticket from '{}' filed as {}/{}",
        ticket.submitter,
        ticket.category,
        ticket.priority
    );

    writeln!(
        out,
        "Ticket generado. Categoría: {}, Prioridad: {}.",
        ticket.category, ticket.priority
    )?;
    Ok(ticket)
}
