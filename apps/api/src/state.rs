use std::sync::Arc;

use crate::config::Config;
use crate::matching::normalize::SkillNormalizer;

/// Shared application state injected into all route handlers via Axum extractors.
#[derive(Clone)]
pub struct AppState {
    pub config: Config,
    /// Pluggable skill normalizer, applied to catalog rows and query
    /// input alike. Default: SimpleSplitNormalizer. Swap via SKILL_NORMALIZER env.
    pub normalizer: Arc<dyn SkillNormalizer>,
}
