//! Row-level parsing: one raw catalog row into a `JobRecord`.
//!
//! Pure per-row transformation, no side effects. The loader decides what
//! happens to rows this module rejects.

use std::collections::{BTreeMap, BTreeSet};

use thiserror::Error;

use crate::matching::normalize::SkillNormalizer;
use crate::models::job::{ExperienceLevel, JobRecord};

/// Column names of the normalized schema. Everything else passes through.
pub const ID_COLUMN: &str = "_id";
pub const SKILLS_COLUMN: &str = "skills";
pub const LOCATION_COLUMN: &str = "location";
pub const EXPERIENCE_COLUMN: &str = "experience";

/// Why a single catalog row was rejected. Row errors never escape the
/// loader: the bad row is skipped and counted, the load continues.
#[derive(Debug, Error)]
pub enum RowError {
    #[error("row has no '{ID_COLUMN}' value")]
    MissingId,

    #[error("duplicate identifier '{0}'")]
    DuplicateId(String),

    #[error("malformed row: {0}")]
    Malformed(#[from] csv::Error),
}

/// Parses one raw row into a `JobRecord`.
///
/// The skills column arrives as a bracketed, quoted, comma-separated list
/// (`["python","sql"]`); brackets and quotes are stripped before the
/// remainder runs through the active normalizer. An empty skills column
/// yields an empty set, not an error. Only the first comma-separated
/// location value is kept as the record's primary location.
pub fn parse_row(
    row: &BTreeMap<String, String>,
    normalizer: &dyn SkillNormalizer,
) -> Result<JobRecord, RowError> {
    let id = row
        .get(ID_COLUMN)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .ok_or(RowError::MissingId)?
        .to_string();

    let skills = row
        .get(SKILLS_COLUMN)
        .map(|raw| parse_skills(raw, normalizer))
        .unwrap_or_default();

    let location = row.get(LOCATION_COLUMN).and_then(|raw| primary_location(raw));

    let experience = row
        .get(EXPERIENCE_COLUMN)
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(ExperienceLevel::parse);

    let extra = row
        .iter()
        .filter(|(key, _)| {
            !matches!(
                key.as_str(),
                ID_COLUMN | SKILLS_COLUMN | LOCATION_COLUMN | EXPERIENCE_COLUMN
            )
        })
        .map(|(key, value)| (key.clone(), value.clone()))
        .collect();

    Ok(JobRecord {
        id,
        skills,
        location,
        experience,
        extra,
    })
}

/// Strips the bracket and quote characters from the raw skills column,
/// then hands the comma-separated remainder to the normalizer.
fn parse_skills(raw: &str, normalizer: &dyn SkillNormalizer) -> BTreeSet<String> {
    let cleaned = raw
        .trim()
        .trim_start_matches('[')
        .trim_end_matches(']')
        .replace('"', "");
    normalizer.normalize(&cleaned)
}

/// First comma-separated value, trimmed. A record carries one primary
/// location even when the source lists several.
fn primary_location(raw: &str) -> Option<String> {
    raw.split(',')
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}
