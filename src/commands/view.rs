//! `sociograma view` — open the sociogram viewer on the saved dataset.

use anyhow::Result;

use crate::store;
use crate::tui::canvas;

pub fn run(demo: bool) -> Result<()> {
    let dir = std::env::current_dir()?;
    let dataset = if demo {
        canvas::demo_dataset()
    } else {
        store::load(&dir)?
    };
    canvas::run_view(&dir, dataset, demo)
}
