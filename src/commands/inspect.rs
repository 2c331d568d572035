//! `sociograma inspect` — query the derived choice graphs.

use anyhow::{Result, bail};

use crate::dataset::Dataset;
use crate::sociogram::Sociogram;
use crate::store;

// ---------------------------------------------------------------------------
// Public entry points
// ---------------------------------------------------------------------------

/// Participants nobody chose and who chose nobody.
pub fn run_isolated(question: Option<&str>) -> Result<()> {
    for graph in load_graphs(question)? {
        let isolated = graph.isolated();
        println!("  {}", graph.question);
        if isolated.is_empty() {
            println!("    No isolated participants.");
        } else {
            for name in isolated {
                println!("    {name}");
            }
        }
    }
    Ok(())
}

/// In-degree ranking, most chosen first.
pub fn run_popular(question: Option<&str>) -> Result<()> {
    for graph in load_graphs(question)? {
        println!("  {}", graph.question);
        for (name, in_degree) in graph.popularity() {
            println!("    {in_degree:>3}  {name}");
        }
    }
    Ok(())
}

/// Participants who made no choice for a question.
pub fn run_unanswered(question: Option<&str>) -> Result<()> {
    for graph in load_graphs(question)? {
        let unanswered = graph.unanswered();
        println!("  {}", graph.question);
        if unanswered.is_empty() {
            println!("    Everyone has answered.");
        } else {
            for name in unanswered {
                println!("    {name}");
            }
        }
    }
    Ok(())
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

fn load_graphs(question: Option<&str>) -> Result<Vec<Sociogram>> {
    let dir = std::env::current_dir()?;
    let dataset = store::load(&dir)?;
    graphs_matching(&dataset, question)
}

fn graphs_matching(dataset: &Dataset, question: Option<&str>) -> Result<Vec<Sociogram>> {
    match question {
        Some(wanted) => {
            if !dataset.questions.iter().any(|q| q == wanted) {
                bail!("question not found in saved data: {wanted}");
            }
            Ok(vec![Sociogram::for_question(dataset, wanted)])
        }
        None => Ok(Sociogram::all(dataset)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut d = Dataset::new();
        d.add_participants("A\nB");
        d.add_question("Q").unwrap();
        d.add_question("R").unwrap();
        d
    }

    #[test]
    fn graphs_matching_filters_to_one_question() {
        let graphs = graphs_matching(&sample(), Some("R")).unwrap();
        assert_eq!(graphs.len(), 1);
        assert_eq!(graphs[0].question, "R");
    }

    #[test]
    fn graphs_matching_rejects_unknown_question() {
        assert!(graphs_matching(&sample(), Some("missing")).is_err());
    }

    #[test]
    fn graphs_matching_defaults_to_all_questions() {
        assert_eq!(graphs_matching(&sample(), None).unwrap().len(), 2);
    }
}
