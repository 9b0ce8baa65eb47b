//! The matching and ranking core.
//!
//! A record qualifies only if it shares at least one skill with the
//! query and passes the location and experience filters. Qualifying
//! records score `match_count / (|query skills| + |record skills|)` and
//! come back ordered by tier, then rank descending, then identifier
//! ascending so equal ranks stay deterministic across runs.

use crate::matching::query::Query;
use crate::models::job::JobRecord;

/// How qualifying candidates are ordered.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankingMode {
    /// One tier, rank descending.
    Flat,
    /// Complete-coverage candidates ahead of partial ones.
    Tiered,
}

/// A qualifying record annotated with its computed rank.
#[derive(Debug, Clone)]
pub struct RankedJob {
    pub record: JobRecord,
    /// Normalized overlap score in (0, 1].
    pub rank: f64,
    /// Every query skill is present in the record.
    pub complete: bool,
}

/// Ordered match results plus the fallback message for empty outcomes.
#[derive(Debug)]
pub struct MatchOutcome {
    pub jobs: Vec<RankedJob>,
    /// Present iff `jobs` is empty.
    pub no_match_message: Option<String>,
}

pub const NO_MATCH_MESSAGE: &str =
    "No jobs found matching your criteria. Try adjusting your skills, location, or experience.";

/// Matches `query` against every record and returns the ordered result.
pub fn rank_jobs(query: &Query, records: &[JobRecord], mode: RankingMode) -> MatchOutcome {
    let mut complete_tier: Vec<RankedJob> = Vec::new();
    let mut partial_tier: Vec<RankedJob> = Vec::new();

    for record in records {
        if !location_matches(query, record) || !experience_matches(query, record) {
            continue;
        }

        // Distinct query skills present in the record; a record with no
        // overlap at all is out regardless of the other criteria.
        let match_count = query
            .skills
            .iter()
            .filter(|skill| record.skills.contains(skill.as_str()))
            .count();
        if match_count == 0 {
            continue;
        }

        let rank = match_count as f64 / (query.skills.len() + record.skills.len()) as f64;
        let ranked = RankedJob {
            record: record.clone(),
            rank,
            complete: match_count == query.skills.len(),
        };

        if ranked.complete && mode == RankingMode::Tiered {
            complete_tier.push(ranked);
        } else {
            partial_tier.push(ranked);
        }
    }

    sort_tier(&mut complete_tier);
    sort_tier(&mut partial_tier);

    let mut jobs = complete_tier;
    jobs.append(&mut partial_tier);

    let no_match_message = jobs
        .is_empty()
        .then(|| NO_MATCH_MESSAGE.to_string());

    MatchOutcome {
        jobs,
        no_match_message,
    }
}

/// Rank descending, identifier ascending on equal ranks.
fn sort_tier(tier: &mut [RankedJob]) {
    tier.sort_by(|a, b| {
        b.rank
            .partial_cmp(&a.rank)
            .unwrap_or(std::cmp::Ordering::Equal)
            .then_with(|| a.record.id.cmp(&b.record.id))
    });
}

/// Passes when the query has no location, the record has none, or the
/// two are exactly equal. Comparison is case-sensitive.
fn location_matches(query: &Query, record: &JobRecord) -> bool {
    match (&query.location, &record.location) {
        (None, _) | (_, None) => true,
        (Some(wanted), Some(actual)) => wanted == actual,
    }
}

/// Passes when the query carries no experience constraint or a
/// non-canonical one; a canonical constraint requires the record to
/// carry the same value.
fn experience_matches(query: &Query, record: &JobRecord) -> bool {
    match query.experience {
        None => true,
        Some(level) if !level.is_canonical() => true,
        Some(level) => record.experience == Some(level),
    }
}
