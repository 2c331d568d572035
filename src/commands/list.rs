//! `sociograma list` — print every recorded choice, grouped by question.

use anyhow::{Result, bail};

use crate::dataset::Dataset;
use crate::sociogram::Sociogram;
use crate::store;

pub fn run(question: Option<&str>) -> Result<()> {
    let dir = std::env::current_dir()?;
    let dataset = store::load(&dir)?;

    let questions: Vec<&String> = match question {
        Some(wanted) => {
            let Some(found) = dataset.questions.iter().find(|q| *q == wanted) else {
                bail!("question not found in saved data: {wanted}");
            };
            vec![found]
        }
        None => dataset.questions.iter().collect(),
    };

    for (idx, q) in questions.iter().enumerate() {
        if idx > 0 {
            println!();
        }
        println!("  {q}");
        let lines = list_choices(&Sociogram::for_question(&dataset, q));
        if lines.is_empty() {
            println!("    No choices recorded.");
        } else {
            for line in lines {
                println!("    {line}");
            }
        }
    }
    Ok(())
}

fn list_choices(graph: &Sociogram) -> Vec<String> {
    graph
        .choices
        .iter()
        .map(|c| format!("{} -> {}", c.origin, c.target))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;

    #[test]
    fn list_choices_follows_roster_order() {
        let mut d = Dataset::new();
        d.add_participants("A\nB\nC");
        d.add_question("Q").unwrap();
        d.select("Q", "A", "B").unwrap();
        d.select("Q", "C", "A").unwrap();
        d.select("Q", "C", "B").unwrap();

        let lines = list_choices(&Sociogram::for_question(&d, "Q"));
        assert_eq!(
            lines,
            vec![
                "A -> B".to_string(),
                "C -> A".to_string(),
                "C -> B".to_string(),
            ]
        );
    }

    #[test]
    fn list_choices_empty_without_responses() {
        let mut d = Dataset::new();
        d.add_participants("A\nB");
        d.add_question("Q").unwrap();
        assert!(list_choices(&Sociogram::for_question(&d, "Q")).is_empty());
    }
}
