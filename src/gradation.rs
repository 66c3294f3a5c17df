//! Score gradation: converts a numeric score into a grade label.
//!
//! A [`Gradation`] is an ordered list of `(ceiling, label)` rules. A score
//! belongs to the first rule whose ceiling it does not exceed, so with the
//! default table:
//!
//! | Score        | Grade |
//! |--------------|-------|
//! | <= 60        | C     |
//! | 61 ..= 80    | B     |
//! | 81 ..= 100   | A     |
//! | > 100        | (none)|

use anyhow::{Context, Result, bail};
use serde::Deserialize;
use std::collections::BTreeMap;
use std::path::Path;

/// Ceiling-to-label rules, kept sorted ascending by ceiling.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(try_from = "BTreeMap<String, String>")]
pub struct Gradation {
    rules: Vec<(i64, String)>,
}

impl Gradation {
    /// Builds a table from `(ceiling, label)` pairs in any order.
    ///
    /// The sort is stable: when two rules share a ceiling, the one supplied
    /// first wins.
    pub fn new<I, S>(rules: I) -> Self
    where
        I: IntoIterator<Item = (i64, S)>,
        S: Into<String>,
    {
        let mut rules: Vec<(i64, String)> = rules
            .into_iter()
            .map(|(ceiling, label)| (ceiling, label.into()))
            .collect();
        rules.sort_by_key(|(ceiling, _)| *ceiling);
        Self { rules }
    }

    /// Parses a JSON object such as `{"60": "C", "80": "B", "100": "A"}`.
    pub fn from_json(json: &str) -> Result<Self> {
        Ok(serde_json::from_str(json)?)
    }

    /// Loads a gradation table from a JSON file at `path`.
    pub fn load(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = std::fs::read_to_string(path)
            .with_context(|| format!("reading gradation table {}", path.display()))?;
        Self::from_json(&content)
            .with_context(|| format!("parsing gradation table {}", path.display()))
    }

    /// Returns the label of the lowest ceiling that is `>= mark`.
    ///
    /// `None` when the mark is above every ceiling or is NaN.
    pub fn grade(&self, mark: f64) -> Option<&str> {
        self.rules
            .iter()
            .find(|(ceiling, _)| mark <= *ceiling as f64)
            .map(|(_, label)| label.as_str())
    }

    /// Label used in markup: the grade for `mark`, or `""` when the score is
    /// absent or ungraded.
    pub fn score_class(&self, mark: Option<f64>) -> &str {
        mark.and_then(|m| self.grade(m)).unwrap_or("")
    }

    /// Iterates over `(ceiling, label)` in ascending ceiling order.
    pub fn rules(&self) -> impl Iterator<Item = (i64, &str)> {
        self.rules.iter().map(|(c, l)| (*c, l.as_str()))
    }

    pub fn len(&self) -> usize {
        self.rules.len()
    }

    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }
}

impl Default for Gradation {
    fn default() -> Self {
        Self::new([(60, "C"), (80, "B"), (100, "A")])
    }
}

impl TryFrom<BTreeMap<String, String>> for Gradation {
    type Error = anyhow::Error;

    fn try_from(raw: BTreeMap<String, String>) -> Result<Self> {
        let mut rules = Vec::with_capacity(raw.len());
        for (key, label) in raw {
            let ceiling = match key.trim().parse::<i64>() {
                Ok(c) => c,
                Err(_) => bail!("gradation ceiling {key:?} is not an integer"),
            };
            rules.push((ceiling, label));
        }
        Ok(Self::new(rules))
    }
}
