//! Ticket history listing.

use crate::state::AppState;
use anyhow::Result;
use std::io::Write;
use tb_core::ticket::columns;

pub fn run(state: &AppState, out: &mut impl Write) -> Result<()> {
    if state.book.is_empty() {
        writeln!(out, "No hay tickets registrados.")?;
        return Ok(());
    }

    writeln!(out, "{}", columns::ALL.join(" | "))?;
    for record in state.book.records() {
        let row: Vec<&str> = columns::ALL
            .iter()
            .map(|c| record.get(*c).map(String::as_str).unwrap_or(""))
            .collect();
        writeln!(out, "{}", row.join(" | "))?;
    }
    Ok(())
}
