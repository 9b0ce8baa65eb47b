use std::collections::{BTreeMap, BTreeSet};

use serde::{Deserialize, Serialize};

/// Experience level attached to a job posting or requested in a query.
///
/// `Unspecified` covers values present in the source that are neither of
/// the two canonical levels. It never equals a canonical level, so a
/// record carrying it cannot satisfy a `fresher`/`experienced` filter,
/// and a query carrying it does not constrain the filter at all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ExperienceLevel {
    Fresher,
    Experienced,
    Unspecified,
}

impl ExperienceLevel {
    /// Maps a raw field value. Comparison is case-insensitive; anything
    /// outside the two canonical values stays `Unspecified` rather than
    /// being coerced to one of them.
    pub fn parse(raw: &str) -> Self {
        match raw.trim().to_lowercase().as_str() {
            "fresher" => Self::Fresher,
            "experienced" => Self::Experienced,
            _ => Self::Unspecified,
        }
    }

    /// True for the two values a filter can actually constrain on.
    pub fn is_canonical(self) -> bool {
        matches!(self, Self::Fresher | Self::Experienced)
    }
}

/// One job posting with its normalized attributes.
///
/// Columns outside the normalized schema ride along in `extra` untouched;
/// they are display payload only and never participate in matching.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct JobRecord {
    pub id: String,
    pub skills: BTreeSet<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
    pub extra: BTreeMap<String, String>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_canonical_levels_case_insensitive() {
        assert_eq!(ExperienceLevel::parse("fresher"), ExperienceLevel::Fresher);
        assert_eq!(ExperienceLevel::parse("FRESHER"), ExperienceLevel::Fresher);
        assert_eq!(
            ExperienceLevel::parse("Experienced"),
            ExperienceLevel::Experienced
        );
    }

    #[test]
    fn test_parse_unknown_value_stays_unspecified() {
        assert_eq!(
            ExperienceLevel::parse("senior"),
            ExperienceLevel::Unspecified
        );
        assert_eq!(
            ExperienceLevel::parse("5 years"),
            ExperienceLevel::Unspecified
        );
    }

    #[test]
    fn test_unspecified_is_not_canonical() {
        assert!(ExperienceLevel::Fresher.is_canonical());
        assert!(ExperienceLevel::Experienced.is_canonical());
        assert!(!ExperienceLevel::Unspecified.is_canonical());
    }

    #[test]
    fn test_serde_lowercase() {
        let json = serde_json::to_string(&ExperienceLevel::Fresher).unwrap();
        assert_eq!(json, r#""fresher""#);
    }
}
