//! `sociograma survey` — open the interactive survey form.

use std::path::Path;

use anyhow::{Context, Result};

use crate::dataset::Dataset;
use crate::tui::canvas;

pub fn run(roster: Option<&Path>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let mut dataset = Dataset::new();
    if let Some(path) = roster {
        let text = std::fs::read_to_string(path)
            .with_context(|| format!("could not read roster file {}", path.display()))?;
        let added = dataset.add_participants(&text);
        anyhow::ensure!(added > 0, "roster file {} contains no names", path.display());
    }
    canvas::run_survey(&dir, dataset)
}
