//! User and course records as supplied by the data source.

use anyhow::{Context, Result};
use serde::{Deserialize, Deserializer};
use serde_json::Value;
use std::path::Path;

/// A single user record.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
pub struct User {
    pub name: String,
    pub age: u32,
    pub img: String,
    pub role: String,
    #[serde(default, deserialize_with = "null_as_empty")]
    pub courses: Vec<Course>,
}

/// A course entry. Which score fields are meaningful depends on the owner's
/// role: `mark` for students, `score` and `lector` for admins, `score` and
/// `students_score` for lecturers.
#[derive(Debug, Clone, Default, PartialEq, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Course {
    pub title: String,
    #[serde(default, deserialize_with = "lenient_score")]
    pub mark: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub score: Option<f64>,
    #[serde(default, deserialize_with = "lenient_score")]
    pub students_score: Option<f64>,
    #[serde(default)]
    pub lector: Option<String>,
}

impl User {
    /// Convenience constructor used by callers building records in code.
    pub fn new(name: &str, age: u32, img: &str, role: &str) -> Self {
        Self {
            name: name.to_string(),
            age,
            img: img.to_string(),
            role: role.to_string(),
            courses: Vec::new(),
        }
    }

    pub fn with_courses(mut self, courses: Vec<Course>) -> Self {
        self.courses = courses;
        self
    }
}

impl Course {
    pub fn new(title: &str) -> Self {
        Self {
            title: title.to_string(),
            ..Default::default()
        }
    }

    pub fn with_mark(mut self, mark: f64) -> Self {
        self.mark = Some(mark);
        self
    }

    pub fn with_score(mut self, score: f64) -> Self {
        self.score = Some(score);
        self
    }

    pub fn with_students_score(mut self, students_score: f64) -> Self {
        self.students_score = Some(students_score);
        self
    }

    pub fn with_lector(mut self, lector: &str) -> Self {
        self.lector = Some(lector.to_string());
        self
    }
}

/// Parses a JSON array of user records.
pub fn parse_users(json: &str) -> Result<Vec<User>> {
    Ok(serde_json::from_str(json)?)
}

/// Loads user records from a JSON file at `path`.
pub fn load_users(path: impl AsRef<Path>) -> Result<Vec<User>> {
    let path = path.as_ref();
    let content = std::fs::read_to_string(path)
        .with_context(|| format!("reading users from {}", path.display()))?;
    parse_users(&content).with_context(|| format!("parsing users from {}", path.display()))
}

fn null_as_empty<'de, D>(deserializer: D) -> Result<Vec<Course>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(Option::<Vec<Course>>::deserialize(deserializer)?.unwrap_or_default())
}

// Numbers and numeric strings are scores; anything else is treated as absent.
fn lenient_score<'de, D>(deserializer: D) -> Result<Option<f64>, D::Error>
where
    D: Deserializer<'de>,
{
    let value = Value::deserialize(deserializer)?;
    Ok(match value {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => s.trim().parse::<f64>().ok().filter(|v| v.is_finite()),
        _ => None,
    })
}
