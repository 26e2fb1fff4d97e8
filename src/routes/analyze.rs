use axum::{extract::Query, Json};
use serde::Deserialize;

use crate::{models::PreferenceProfile, services::analyzer};

#[derive(Debug, Deserialize)]
pub struct AnalyzeQuery {
    #[serde(default)]
    q: String,
}

/// Handler for the analyze endpoint: returns the preference profile for `q`
pub async fn analyze(Query(params): Query<AnalyzeQuery>) -> Json<PreferenceProfile> {
    Json(analyzer::analyze(&params.q))
}
