//! Job Record Normalizer.
//!
//! Turns a raw backend `JobRecord` into a display-ready record: the
//! comma-delimited keyword string becomes an ordered skill list, the gender
//! code becomes display text, and experience/salary become formatted strings
//! with placeholder defaults for absent values. Total and pure; a batch is
//! normalized once per fetch and never mutated afterwards.

use crate::models::job::JobRecord;

/// A job record plus its derived display fields.
#[derive(Debug, Clone)]
pub struct NormalizedJob {
    pub record: JobRecord,
    /// Trimmed, non-empty keyword tokens in order of appearance.
    /// Duplicates are preserved; the gap deriver dedups later.
    pub skills_array: Vec<String>,
    pub gender_text: String,
    pub experience_text: String,
    pub salary_text: String,
}

/// Normalizes one record. Applied once per fetched batch.
pub fn normalize_job(record: JobRecord) -> NormalizedJob {
    let skills_array = split_keywords(&record.keywords);
    let gender_text = gender_text(record.gendercode.as_deref());
    let experience_text = experience_text(record.aveexp);
    let salary_text = salary_text(record.avewage);

    NormalizedJob {
        record,
        skills_array,
        gender_text,
        experience_text,
        salary_text,
    }
}

pub fn normalize_batch(records: Vec<JobRecord>) -> Vec<NormalizedJob> {
    records.into_iter().map(normalize_job).collect()
}

fn split_keywords(keywords: &str) -> Vec<String> {
    keywords
        .split(',')
        .map(str::trim)
        .filter(|token| !token.is_empty())
        .map(str::to_string)
        .collect()
}

fn gender_text(code: Option<&str>) -> String {
    match code {
        Some("A") => "Any",
        Some("M") => "Male",
        Some("F") => "Female",
        _ => "Any",
    }
    .to_string()
}

fn experience_text(years: f64) -> String {
    if years != 0.0 {
        format!("{years} years")
    } else {
        "Any".to_string()
    }
}

fn salary_text(wage: f64) -> String {
    if wage != 0.0 {
        format!("₹{}K per month", (wage / 1000.0).round() as i64)
    } else {
        "Not specified".to_string()
    }
}
