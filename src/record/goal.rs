//! Goal data model and identifier resolution
//!
//! Goals have no stable ids. They are addressed either by their 1-based
//! position in the record or by a case-insensitive name match, first
//! match winning when names collide.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// The whole persisted document: an ordered list of goals
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub data: Vec<Goal>,
}

/// A tracked goal with its attached resource strings
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Goal {
    pub name: String,
    pub description: String,
    pub resources: Vec<String>,
}

/// Lookup failures surfaced to the user
#[derive(Debug, Error)]
pub enum RecordError {
    #[error("no goal matches '{0}'")]
    GoalNotFound(String),

    #[error("goal '{goal}' has no resource {id}")]
    ResourceNotFound { goal: String, id: usize },
}

impl Goal {
    /// Create a goal with an empty resource list
    pub fn new(name: impl Into<String>, description: impl Into<String>) -> Self {
        Goal {
            name: name.into(),
            description: description.into(),
            resources: Vec::new(),
        }
    }
}

impl Record {
    /// Resolve a goal identifier to its position in the record
    ///
    /// An identifier that parses as an integer is a 1-based index; `0` and
    /// out-of-range values resolve to `None`. Anything else is matched
    /// against goal names, ignoring case, and the first match wins.
    pub fn find_index(&self, id: &str) -> Option<usize> {
        if let Ok(n) = id.parse::<usize>() {
            return if (1..=self.data.len()).contains(&n) {
                Some(n - 1)
            } else {
                None
            };
        }

        let wanted = id.to_lowercase();
        self.data
            .iter()
            .position(|goal| goal.name.to_lowercase() == wanted)
    }

    /// Resolve a goal identifier to the goal itself
    pub fn find(&self, id: &str) -> Option<&Goal> {
        let index = self.find_index(id)?;
        self.data.get(index)
    }

    /// Resolve a goal identifier to a mutable goal
    pub fn find_mut(&mut self, id: &str) -> Option<&mut Goal> {
        let index = self.find_index(id)?;
        self.data.get_mut(index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Record {
        Record {
            data: vec![
                Goal::new("Learn Go", "become fluent"),
                Goal::new("Run a marathon", "sub four hours"),
                Goal::new("learn go", "the board game"),
            ],
        }
    }

    #[test]
    fn test_find_by_number() {
        let record = sample();
        assert_eq!(record.find_index("1"), Some(0));
        assert_eq!(record.find_index("3"), Some(2));
    }

    #[test]
    fn test_find_by_number_out_of_range() {
        let record = sample();
        assert_eq!(record.find_index("0"), None);
        assert_eq!(record.find_index("4"), None);
    }

    #[test]
    fn test_find_by_name_ignores_case() {
        let record = sample();
        assert_eq!(record.find_index("LEARN GO"), Some(0));
        assert_eq!(record.find_index("run a Marathon"), Some(1));
    }

    #[test]
    fn test_find_by_name_first_match_wins() {
        // "Learn Go" and "learn go" collide; position 0 wins
        let record = sample();
        assert_eq!(record.find_index("learn go"), Some(0));
    }

    #[test]
    fn test_find_unknown_name() {
        let record = sample();
        assert_eq!(record.find_index("Learn Rust"), None);
    }

    #[test]
    fn test_number_and_name_agree() {
        let record = sample();
        let by_number = record.find("2").unwrap();
        let by_name = record.find("RUN A MARATHON").unwrap();
        assert_eq!(by_number, by_name);
    }

    #[test]
    fn test_numeric_prefix_is_not_a_number() {
        // "3abc" falls through to name matching instead of indexing
        let mut record = sample();
        record.data.push(Goal::new("3abc", "oddly named"));
        assert_eq!(record.find_index("3abc"), Some(3));
    }

    #[test]
    fn test_find_on_empty_record() {
        let record = Record::default();
        assert_eq!(record.find_index("1"), None);
        assert_eq!(record.find_index("anything"), None);
    }

    #[test]
    fn test_find_mut_allows_edits() {
        let mut record = sample();
        record
            .find_mut("Run a marathon")
            .unwrap()
            .resources
            .push("https://example.com/plan".to_string());
        assert_eq!(record.data[1].resources.len(), 1);
    }
}
