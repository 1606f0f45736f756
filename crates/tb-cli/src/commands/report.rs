//! Summary report.

use crate::state::AppState;
use anyhow::Result;
use std::io::Write;

pub fn run(state: &AppState, out: &mut impl Write) -> Result<()> {
    match state.book.report() {
        Some(report) => write!(out, "{report}")?,
        None => {
            tracing::warn!("report requested on an empty store");
            writeln!(out, "No hay tickets para reporte.")?;
        }
    }
    Ok(())
}
