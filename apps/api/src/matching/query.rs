//! Query construction and validation.

use std::collections::BTreeSet;

use serde::Deserialize;

use crate::errors::AppError;
use crate::matching::normalize::SkillNormalizer;
use crate::models::job::ExperienceLevel;

/// Raw search input as it arrives from the client.
#[derive(Debug, Deserialize)]
pub struct SearchRequest {
    pub skills: String,
    #[serde(default)]
    pub location: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
}

/// The normalized query a single request matches against.
/// Immutable once built.
#[derive(Debug, Clone)]
pub struct Query {
    pub skills: BTreeSet<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
}

/// Builds a `Query` from raw input.
///
/// The skill set must be non-empty after normalization. Empty or
/// whitespace-only location and experience inputs count as absent.
pub fn build_query(
    req: &SearchRequest,
    normalizer: &dyn SkillNormalizer,
) -> Result<Query, AppError> {
    let skills = normalizer.normalize(&req.skills);
    if skills.is_empty() {
        return Err(AppError::Validation(
            "Please enter at least one skill".to_string(),
        ));
    }

    let location = req
        .location
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(str::to_string);

    let experience = req
        .experience
        .as_deref()
        .map(str::trim)
        .filter(|value| !value.is_empty())
        .map(ExperienceLevel::parse);

    Ok(Query {
        skills,
        location,
        experience,
    })
}
