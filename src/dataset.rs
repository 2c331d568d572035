use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Hard cap on the number of peers a participant may choose per question.
pub const MAX_SELECTIONS: usize = 3;

/// question -> participant -> chosen peers (ordered, at most [`MAX_SELECTIONS`]).
pub type ResponseMatrix = BTreeMap<String, BTreeMap<String, Vec<String>>>;

/// Why a selection was rejected.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum SelectionError {
    #[error("a participant cannot choose themselves")]
    SelfSelection,
    #[error("at most {MAX_SELECTIONS} peers may be chosen per question")]
    LimitReached,
    #[error("unknown participant: {0}")]
    UnknownParticipant(String),
    #[error("unknown question: {0}")]
    UnknownQuestion(String),
    #[error("question already exists: {0}")]
    DuplicateQuestion(String),
}

/// The full persisted state: roster, questions and the response matrix.
///
/// Wire keys match the original survey file format.
#[derive(Debug, Default, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Dataset {
    #[serde(rename = "alumnos")]
    pub participants: Vec<String>,
    #[serde(rename = "preguntas")]
    pub questions: Vec<String>,
    #[serde(rename = "respuestas", default)]
    pub responses: ResponseMatrix,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// True when no choice has been recorded for any question.
    pub fn has_responses(&self) -> bool {
        self.responses
            .values()
            .flat_map(|by_participant| by_participant.values())
            .any(|chosen| !chosen.is_empty())
    }

    pub fn contains_participant(&self, name: &str) -> bool {
        self.participants.iter().any(|p| p == name)
    }

    /// Append roster names parsed from `text`, skipping ones already present.
    /// Returns how many were added.
    pub fn add_participants(&mut self, text: &str) -> usize {
        let mut added = 0;
        for name in parse_names(text) {
            if !self.contains_participant(&name) {
                self.participants.push(name);
                added += 1;
            }
        }
        added
    }

    /// Append a question. Empty/whitespace text is a no-op; duplicate text is
    /// rejected because it would merge two questions' answers under one key.
    pub fn add_question(&mut self, text: &str) -> Result<bool, SelectionError> {
        let question = text.trim();
        if question.is_empty() {
            return Ok(false);
        }
        if self.questions.iter().any(|q| q == question) {
            return Err(SelectionError::DuplicateQuestion(question.to_string()));
        }
        self.questions.push(question.to_string());
        Ok(true)
    }

    /// The peers `participant` may choose for any question: everyone but them.
    pub fn candidates_for(&self, participant: &str) -> Vec<&str> {
        self.participants
            .iter()
            .filter(|p| p.as_str() != participant)
            .map(|p| p.as_str())
            .collect()
    }

    /// The choices recorded for `(question, participant)`, if any.
    pub fn selections(&self, question: &str, participant: &str) -> &[String] {
        self.responses
            .get(question)
            .and_then(|by_participant| by_participant.get(participant))
            .map(|chosen| chosen.as_slice())
            .unwrap_or(&[])
    }

    /// Record that `participant` chose `peer` for `question`.
    ///
    /// The control itself enforces the invariants: no self-selection, no
    /// duplicates, at most [`MAX_SELECTIONS`] peers. Choosing an already
    /// chosen peer is a no-op.
    pub fn select(
        &mut self,
        question: &str,
        participant: &str,
        peer: &str,
    ) -> Result<(), SelectionError> {
        if participant == peer {
            return Err(SelectionError::SelfSelection);
        }
        if !self.questions.iter().any(|q| q == question) {
            return Err(SelectionError::UnknownQuestion(question.to_string()));
        }
        if !self.contains_participant(participant) {
            return Err(SelectionError::UnknownParticipant(participant.to_string()));
        }
        if !self.contains_participant(peer) {
            return Err(SelectionError::UnknownParticipant(peer.to_string()));
        }

        let chosen = self
            .responses
            .entry(question.to_string())
            .or_default()
            .entry(participant.to_string())
            .or_default();
        if chosen.iter().any(|c| c == peer) {
            return Ok(());
        }
        if chosen.len() >= MAX_SELECTIONS {
            return Err(SelectionError::LimitReached);
        }
        chosen.push(peer.to_string());
        Ok(())
    }

    /// Remove `peer` from `(question, participant)`. Returns whether anything
    /// was removed.
    pub fn deselect(&mut self, question: &str, participant: &str, peer: &str) -> bool {
        let Some(chosen) = self
            .responses
            .get_mut(question)
            .and_then(|by_participant| by_participant.get_mut(participant))
        else {
            return false;
        };
        let before = chosen.len();
        chosen.retain(|c| c != peer);
        before != chosen.len()
    }
}

/// Parse raw multi-line roster text into an ordered list of trimmed,
/// non-empty names. Repeats of the same name keep the first occurrence.
pub fn parse_names(text: &str) -> Vec<String> {
    let mut names: Vec<String> = Vec::new();
    for line in text.lines() {
        let name = line.trim();
        if name.is_empty() || names.iter().any(|n| n == name) {
            continue;
        }
        names.push(name.to_string());
    }
    names
}

#[cfg(test)]
mod tests {
    use super::*;

    fn roster() -> Dataset {
        let mut d = Dataset::new();
        d.add_participants("Ana\nBea\nCarlos");
        d.add_question("¿Con quién trabajarías?").unwrap();
        d
    }

    #[test]
    fn parse_names_trims_and_drops_blank_lines() {
        let names = parse_names("  Ana  \n\n   \nBea\nCarlos\n");
        assert_eq!(names, vec!["Ana", "Bea", "Carlos"]);
    }

    #[test]
    fn parse_names_dedupes_by_value_keeping_first() {
        let names = parse_names("Ana\nBea\nAna\nBea");
        assert_eq!(names, vec!["Ana", "Bea"]);
    }

    #[test]
    fn add_question_ignores_empty_and_rejects_duplicates() {
        let mut d = roster();
        assert!(!d.add_question("   ").unwrap());
        assert!(d.add_question("¿A quién invitarías?").unwrap());
        assert!(d.add_question("¿A quién invitarías?").is_err());
        assert_eq!(d.questions.len(), 2);
    }

    #[test]
    fn candidates_exclude_self() {
        let d = roster();
        assert_eq!(d.candidates_for("Bea"), vec!["Ana", "Carlos"]);
    }

    #[test]
    fn select_rejects_self() {
        let mut d = roster();
        let err = d
            .select("¿Con quién trabajarías?", "Ana", "Ana")
            .unwrap_err();
        assert_eq!(err, SelectionError::SelfSelection);
    }

    #[test]
    fn select_caps_at_three() {
        let mut d = Dataset::new();
        d.add_participants("A\nB\nC\nD\nE");
        d.add_question("Q").unwrap();
        d.select("Q", "A", "B").unwrap();
        d.select("Q", "A", "C").unwrap();
        d.select("Q", "A", "D").unwrap();
        assert_eq!(d.select("Q", "A", "E"), Err(SelectionError::LimitReached));
        assert_eq!(d.selections("Q", "A"), ["B", "C", "D"]);
    }

    #[test]
    fn select_same_peer_twice_is_noop() {
        let mut d = roster();
        d.select("¿Con quién trabajarías?", "Ana", "Bea").unwrap();
        d.select("¿Con quién trabajarías?", "Ana", "Bea").unwrap();
        assert_eq!(d.selections("¿Con quién trabajarías?", "Ana"), ["Bea"]);
    }

    #[test]
    fn deselect_removes_only_the_peer() {
        let mut d = roster();
        d.select("¿Con quién trabajarías?", "Ana", "Bea").unwrap();
        d.select("¿Con quién trabajarías?", "Ana", "Carlos").unwrap();
        assert!(d.deselect("¿Con quién trabajarías?", "Ana", "Bea"));
        assert!(!d.deselect("¿Con quién trabajarías?", "Ana", "Bea"));
        assert_eq!(d.selections("¿Con quién trabajarías?", "Ana"), ["Carlos"]);
    }

    #[test]
    fn has_responses_ignores_empty_entries() {
        let mut d = roster();
        d.responses
            .entry("¿Con quién trabajarías?".to_string())
            .or_default()
            .insert("Ana".to_string(), Vec::new());
        assert!(!d.has_responses());
        d.select("¿Con quién trabajarías?", "Ana", "Bea").unwrap();
        assert!(d.has_responses());
    }
}
