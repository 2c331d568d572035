//! `sociograma status` — summary of the saved dataset.

use anyhow::Result;
use crossterm::style::Stylize;

use crate::sociogram::Sociogram;
use crate::store::{self, StoreError};

pub fn run() -> Result<()> {
    let dir = std::env::current_dir()?;
    let dataset = match store::load(&dir) {
        Ok(dataset) => dataset,
        Err(StoreError::NotFound(path)) => {
            println!(
                "  {} {}",
                "Missing".yellow().bold(),
                format!("{} — run `sociograma survey` first", path.display()).dark_grey()
            );
            return Ok(());
        }
        Err(err) => return Err(err.into()),
    };

    println!(
        "  {} {} participants, {} questions",
        "Saved".green().bold(),
        dataset.participants.len().to_string().green(),
        dataset.questions.len().to_string().green()
    );

    for graph in Sociogram::all(&dataset) {
        let answered = graph.names.len() - graph.unanswered().len();
        let isolated = graph.isolated().len();
        let mut note = format!("{answered}/{} answered", graph.names.len());
        if isolated > 0 {
            note.push_str(&format!(
                ", {isolated} isolated participant{}",
                if isolated == 1 { "" } else { "s" }
            ));
        }
        println!("    {} — {}", graph.question, note.dark_grey());
    }
    Ok(())
}
