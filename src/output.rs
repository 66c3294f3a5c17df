//! Grade report: one row per score shown on a card.
//!
//! Supports pretty-printing, JSON serialization, and CSV append.

use anyhow::Result;
use chrono::{DateTime, Utc};
use csv::WriterBuilder;
use serde::Serialize;
use std::fs::OpenOptions;
use std::path::Path;
use tracing::{debug, info};

use crate::gradation::Gradation;
use crate::render::Role;
use crate::user::User;

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct GradeRecord {
    pub generated_at: DateTime<Utc>,
    pub user: String,
    pub role: String,
    pub course: String,
    /// Input field the score came from (`mark`, `score` or `studentsScore`).
    pub field: String,
    pub score: Option<f64>,
    /// Empty when the score is absent or above every ceiling.
    pub grade: String,
}

/// Builds report rows for `users`, following card order.
pub fn grade_records(users: &[User], gradation: &Gradation) -> Vec<GradeRecord> {
    let generated_at = Utc::now();
    let mut records = Vec::new();

    for user in users {
        let role = Role::from_name(&user.role);
        for course in &user.courses {
            for (field, score) in role.displayed_scores(course) {
                records.push(GradeRecord {
                    generated_at,
                    user: user.name.clone(),
                    role: user.role.clone(),
                    course: course.title.clone(),
                    field: field.to_string(),
                    score,
                    grade: gradation.score_class(score).to_string(),
                });
            }
        }
    }

    records
}

/// Logs report rows using Rust's debug pretty-print format.
pub fn print_pretty(records: &[GradeRecord]) {
    debug!("{:#?}", records);
}

/// Logs report rows as pretty-printed JSON.
pub fn print_json(records: &[GradeRecord]) -> Result<()> {
    info!("{}", serde_json::to_string_pretty(records)?);
    Ok(())
}

/// Appends report rows to a CSV file.
///
/// Creates the file with headers if it does not already exist.
pub fn append_records(path: &str, records: &[GradeRecord]) -> Result<()> {
    let file_exists = Path::new(path).exists();
    debug!(path, file_exists, rows = records.len(), "Appending CSV records");

    let file = OpenOptions::new().append(true).create(true).open(path)?;

    let mut writer = WriterBuilder::new()
        .has_headers(!file_exists)
        .from_writer(file);

    for record in records {
        writer.serialize(record)?;
    }
    writer.flush()?;

    Ok(())
}
