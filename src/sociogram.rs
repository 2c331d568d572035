use crate::dataset::Dataset;

/// A recorded choice: `origin` picked `target` for one question.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Choice {
    pub origin: String,
    pub target: String,
}

/// The directed choice graph for a single question.
///
/// Ephemeral: rebuilt from the response matrix on every render, never
/// persisted. The node set is the full roster, including participants with
/// no edges at all.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct Sociogram {
    pub question: String,
    pub names: Vec<String>,
    pub choices: Vec<Choice>,
}

impl Sociogram {
    /// Build the graph for `question` from the dataset.
    ///
    /// Edges are emitted in roster order; choices naming someone who is no
    /// longer on the roster are dropped rather than invented as nodes.
    pub fn for_question(dataset: &Dataset, question: &str) -> Self {
        let names = dataset.participants.clone();
        let mut choices = Vec::new();
        if let Some(by_participant) = dataset.responses.get(question) {
            for origin in &names {
                let Some(targets) = by_participant.get(origin) else {
                    continue;
                };
                for target in targets {
                    if names.iter().any(|n| n == target) {
                        choices.push(Choice {
                            origin: origin.clone(),
                            target: target.clone(),
                        });
                    }
                }
            }
        }
        Self {
            question: question.to_string(),
            names,
            choices,
        }
    }

    /// One graph per question, in question order.
    pub fn all(dataset: &Dataset) -> Vec<Self> {
        dataset
            .questions
            .iter()
            .map(|q| Self::for_question(dataset, q))
            .collect()
    }

    /// How many times `name` was chosen.
    pub fn in_degree(&self, name: &str) -> usize {
        self.choices.iter().filter(|c| c.target == name).count()
    }

    /// How many peers `name` chose.
    pub fn out_degree(&self, name: &str) -> usize {
        self.choices.iter().filter(|c| c.origin == name).count()
    }

    /// True when `name` neither chose anyone nor was chosen.
    pub fn is_isolated(&self, name: &str) -> bool {
        self.in_degree(name) == 0 && self.out_degree(name) == 0
    }

    /// All isolated participants, in roster order.
    pub fn isolated(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .filter(|n| self.is_isolated(n))
            .collect()
    }

    /// Participants who made no choice for this question, in roster order.
    pub fn unanswered(&self) -> Vec<&str> {
        self.names
            .iter()
            .map(|n| n.as_str())
            .filter(|n| self.out_degree(n) == 0)
            .collect()
    }

    /// `(name, in_degree)` sorted by popularity, ties in roster order.
    pub fn popularity(&self) -> Vec<(&str, usize)> {
        let mut ranked: Vec<(&str, usize)> = self
            .names
            .iter()
            .map(|n| (n.as_str(), self.in_degree(n)))
            .collect();
        ranked.sort_by(|a, b| b.1.cmp(&a.1));
        ranked
    }

    /// Edges as `(origin index, target index)` into `names`.
    pub fn edge_indices(&self) -> Vec<(usize, usize)> {
        self.choices
            .iter()
            .filter_map(|c| {
                let origin = self.names.iter().position(|n| *n == c.origin)?;
                let target = self.names.iter().position(|n| *n == c.target)?;
                Some((origin, target))
            })
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Dataset {
        let mut d = Dataset::new();
        d.add_participants("A\nB\nC");
        d.add_question("Q").unwrap();
        d.select("Q", "A", "B").unwrap();
        d.select("Q", "C", "A").unwrap();
        d.select("Q", "C", "B").unwrap();
        d
    }

    #[test]
    fn builds_expected_edges_and_degrees() {
        let g = Sociogram::for_question(&sample(), "Q");
        let edges: Vec<(&str, &str)> = g
            .choices
            .iter()
            .map(|c| (c.origin.as_str(), c.target.as_str()))
            .collect();
        assert_eq!(edges, vec![("A", "B"), ("C", "A"), ("C", "B")]);
        assert_eq!(g.in_degree("A"), 1);
        assert_eq!(g.in_degree("B"), 2);
        assert_eq!(g.in_degree("C"), 0);
    }

    #[test]
    fn chooser_with_no_incoming_edges_is_not_isolated() {
        let g = Sociogram::for_question(&sample(), "Q");
        assert!(!g.is_isolated("C"));
    }

    #[test]
    fn unconnected_participant_is_isolated() {
        let mut d = sample();
        d.add_participants("D");
        let g = Sociogram::for_question(&d, "Q");
        assert!(g.is_isolated("D"));
        assert_eq!(g.isolated(), vec!["D"]);
    }

    #[test]
    fn node_set_is_the_full_roster_even_without_responses() {
        let mut d = Dataset::new();
        d.add_participants("A\nB");
        d.add_question("Q").unwrap();
        let g = Sociogram::for_question(&d, "Q");
        assert_eq!(g.names, vec!["A", "B"]);
        assert!(g.choices.is_empty());
    }

    #[test]
    fn unanswered_lists_participants_without_choices() {
        let g = Sociogram::for_question(&sample(), "Q");
        assert_eq!(g.unanswered(), vec!["B"]);
    }

    #[test]
    fn popularity_ranks_by_in_degree() {
        let g = Sociogram::for_question(&sample(), "Q");
        assert_eq!(g.popularity(), vec![("B", 2), ("A", 1), ("C", 0)]);
    }

    #[test]
    fn one_graph_per_question_in_order() {
        let mut d = sample();
        d.add_question("R").unwrap();
        let graphs = Sociogram::all(&d);
        assert_eq!(graphs.len(), 2);
        assert_eq!(graphs[0].question, "Q");
        assert_eq!(graphs[1].question, "R");
        assert!(graphs[1].choices.is_empty());
    }

    #[test]
    fn edge_indices_map_into_roster_order() {
        let g = Sociogram::for_question(&sample(), "Q");
        assert_eq!(g.edge_indices(), vec![(0, 1), (2, 0), (2, 1)]);
    }
}
