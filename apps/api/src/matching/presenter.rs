//! Response shaping. No matching logic lives here.

use std::collections::BTreeMap;

use serde::Serialize;

use crate::matching::query::Query;
use crate::matching::ranker::MatchOutcome;
use crate::models::job::ExperienceLevel;

/// One matched job as the rendering client sees it.
#[derive(Debug, Serialize)]
pub struct MatchedJob {
    pub id: String,
    pub rank: f64,
    pub skills: Vec<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub experience: Option<ExperienceLevel>,
    /// Passthrough columns from the catalog source, untouched.
    #[serde(skip_serializing_if = "BTreeMap::is_empty")]
    pub extra: BTreeMap<String, String>,
}

/// The query as it was understood, echoed back for display.
#[derive(Debug, Serialize)]
pub struct EchoedQuery {
    pub skills: Vec<String>,
    pub location: Option<String>,
    pub experience: Option<ExperienceLevel>,
}

/// Full search payload handed to the rendering client.
#[derive(Debug, Serialize)]
pub struct SearchResponse {
    pub jobs: Vec<MatchedJob>,
    pub query: EchoedQuery,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub no_match_message: Option<String>,
    /// Catalog rows dropped during this request's load.
    pub skipped_rows: usize,
}

/// Packages the ordered match list, the echoed query, and the no-match
/// message into the response payload.
pub fn present(query: &Query, outcome: MatchOutcome, skipped_rows: usize) -> SearchResponse {
    let jobs = outcome
        .jobs
        .into_iter()
        .map(|ranked| MatchedJob {
            id: ranked.record.id,
            rank: ranked.rank,
            skills: ranked.record.skills.into_iter().collect(),
            location: ranked.record.location,
            experience: ranked.record.experience,
            extra: ranked.record.extra,
        })
        .collect();

    SearchResponse {
        jobs,
        query: EchoedQuery {
            skills: query.skills.iter().cloned().collect(),
            location: query.location.clone(),
            experience: query.experience,
        },
        no_match_message: outcome.no_match_message,
        skipped_rows,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::matching::ranker::{RankedJob, NO_MATCH_MESSAGE};
    use crate::models::job::JobRecord;
    use std::collections::BTreeSet;

    fn sample_query() -> Query {
        Query {
            skills: BTreeSet::from(["python".to_string()]),
            location: Some("NY".to_string()),
            experience: None,
        }
    }

    fn ranked(id: &str, rank: f64) -> RankedJob {
        RankedJob {
            record: JobRecord {
                id: id.to_string(),
                skills: BTreeSet::from(["python".to_string()]),
                location: None,
                experience: None,
                extra: Default::default(),
            },
            rank,
            complete: true,
        }
    }

    #[test]
    fn test_preserves_order_and_echoes_query() {
        let outcome = MatchOutcome {
            jobs: vec![ranked("1", 0.5), ranked("2", 0.25)],
            no_match_message: None,
        };
        let response = present(&sample_query(), outcome, 0);

        assert_eq!(response.jobs[0].id, "1");
        assert_eq!(response.jobs[1].id, "2");
        assert_eq!(response.query.skills, ["python"]);
        assert_eq!(response.query.location.as_deref(), Some("NY"));
        assert!(response.no_match_message.is_none());
    }

    #[test]
    fn test_carries_message_for_empty_outcome() {
        let outcome = MatchOutcome {
            jobs: vec![],
            no_match_message: Some(NO_MATCH_MESSAGE.to_string()),
        };
        let response = present(&sample_query(), outcome, 3);
        assert!(response.jobs.is_empty());
        assert_eq!(response.no_match_message.as_deref(), Some(NO_MATCH_MESSAGE));
        assert_eq!(response.skipped_rows, 3);
    }
}
