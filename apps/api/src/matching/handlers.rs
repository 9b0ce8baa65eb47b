use axum::{
    extract::{Path, State},
    Json,
};

use crate::catalog::loader::load_catalog;
use crate::errors::AppError;
use crate::matching::presenter::{present, SearchResponse};
use crate::matching::query::{build_query, SearchRequest};
use crate::matching::ranker::rank_jobs;
use crate::models::job::JobRecord;
use crate::state::AppState;

/// POST /api/v1/jobs/search
pub async fn handle_search(
    State(state): State<AppState>,
    Json(req): Json<SearchRequest>,
) -> Result<Json<SearchResponse>, AppError> {
    let query = build_query(&req, state.normalizer.as_ref())?;
    let catalog = load_catalog(
        &state.config.catalog_path,
        state.normalizer.as_ref(),
        state.config.max_catalog_bytes,
    )?;
    let outcome = rank_jobs(&query, catalog.records(), state.config.ranking_mode);
    Ok(Json(present(&query, outcome, catalog.skipped_rows())))
}

/// GET /api/v1/jobs/:id
pub async fn handle_get_job(
    State(state): State<AppState>,
    Path(id): Path<String>,
) -> Result<Json<JobRecord>, AppError> {
    let catalog = load_catalog(
        &state.config.catalog_path,
        state.normalizer.as_ref(),
        state.config.max_catalog_bytes,
    )?;
    let record = catalog
        .get(&id)
        .cloned()
        .ok_or_else(|| AppError::NotFound(format!("Job {id} not found")))?;
    Ok(Json(record))
}
