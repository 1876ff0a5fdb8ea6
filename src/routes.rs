use std::io::Cursor;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;

use axum::extract::State;
use axum::http::{header, StatusCode};
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::{Local, NaiveDate};
use metrics_exporter_prometheus::PrometheusHandle;
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::engine::sample::sample_grants;
use crate::engine::{
    run_query, DashboardStats, DashboardStatsView, FilterState, Grant, GrantCsvImporter,
    GrantDetailView, GrantSummaryView, ScoringWeights, SortStrategy,
};
use crate::error::AppError;

#[derive(Clone)]
pub struct AppState {
    pub readiness: Arc<AtomicBool>,
    pub metrics: PrometheusHandle,
    pub weights: ScoringWeights,
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/health", get(healthcheck))
        .route("/ready", get(readiness_endpoint))
        .route("/metrics", get(metrics_endpoint))
        .route("/api/v1/grants/query", post(grant_query_endpoint))
        .with_state(state)
}

/// Where the queried grant collection came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum CatalogSource {
    Json,
    Csv,
    Sample,
}

#[derive(Debug, Deserialize)]
pub(crate) struct GrantQueryRequest {
    /// Grant records supplied inline. Composite scores are recomputed on
    /// ingest so stale values cannot leak into the ranking.
    #[serde(default)]
    pub(crate) grants: Option<Vec<Grant>>,
    /// Alternative CSV catalog export, used when `grants` is absent.
    #[serde(default)]
    pub(crate) grants_csv: Option<String>,
    #[serde(default)]
    pub(crate) filters: FilterState,
    #[serde(default)]
    pub(crate) sort: Option<String>,
    /// Reference date override; defaults to the current local date.
    #[serde(default)]
    pub(crate) today: Option<NaiveDate>,
    #[serde(default)]
    pub(crate) include_details: bool,
}

#[derive(Debug, Serialize)]
pub(crate) struct GrantQueryResponse {
    pub(crate) today: NaiveDate,
    pub(crate) catalog_source: CatalogSource,
    pub(crate) sort: SortStrategy,
    pub(crate) active_filters: usize,
    pub(crate) stats: DashboardStatsView,
    pub(crate) matched: usize,
    pub(crate) results: Vec<GrantSummaryView>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub(crate) details: Option<Vec<GrantDetailView>>,
}

pub(crate) async fn healthcheck() -> Json<serde_json::Value> {
    Json(json!({ "status": "ok" }))
}

pub(crate) async fn readiness_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    let ready = state.readiness.load(Ordering::Relaxed);
    let status = if ready {
        StatusCode::OK
    } else {
        StatusCode::SERVICE_UNAVAILABLE
    };

    let payload = if ready {
        json!({ "status": "ready" })
    } else {
        json!({ "status": "initializing" })
    };

    (status, Json(payload))
}

pub(crate) async fn metrics_endpoint(State(state): State<AppState>) -> impl IntoResponse {
    (
        StatusCode::OK,
        [(header::CONTENT_TYPE, "text/plain; version=0.0.4")],
        state.metrics.render(),
    )
}

pub(crate) async fn grant_query_endpoint(
    State(state): State<AppState>,
    Json(payload): Json<GrantQueryRequest>,
) -> Result<Json<GrantQueryResponse>, AppError> {
    let sort = match payload.sort.as_deref() {
        Some(raw) => raw.parse::<SortStrategy>()?,
        None => SortStrategy::default(),
    };
    let today = payload.today.unwrap_or_else(|| Local::now().date_naive());

    let (grants, catalog_source) = if let Some(csv) = payload.grants_csv {
        let reader = Cursor::new(csv.into_bytes());
        let imported = GrantCsvImporter::from_reader(reader, &state.weights)?;
        (imported, CatalogSource::Csv)
    } else if let Some(mut grants) = payload.grants {
        for grant in &mut grants {
            grant.scores.rescore(&state.weights);
        }
        (grants, CatalogSource::Json)
    } else {
        (sample_grants(today, &state.weights), CatalogSource::Sample)
    };

    let stats = DashboardStats::from_grants(&grants, today);
    let results = run_query(&grants, &payload.filters, sort, today);

    let details = payload.include_details.then(|| {
        results
            .iter()
            .map(|grant| GrantDetailView::for_grant(grant, &state.weights, today))
            .collect()
    });
    let summaries: Vec<GrantSummaryView> = results
        .iter()
        .map(|grant| GrantSummaryView::for_grant(grant, today))
        .collect();

    Ok(Json(GrantQueryResponse {
        today,
        catalog_source,
        sort,
        active_filters: payload.filters.active_dimensions(),
        stats: DashboardStatsView::for_stats(stats),
        matched: summaries.len(),
        results: summaries,
        details,
    }))
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum_prometheus::PrometheusMetricLayer;

    fn test_state() -> AppState {
        // The prometheus recorder is a process-wide global, so install it
        // once and share the handle across tests.
        static HANDLE: std::sync::OnceLock<PrometheusHandle> = std::sync::OnceLock::new();
        let handle = HANDLE
            .get_or_init(|| {
                let (_layer, handle) = PrometheusMetricLayer::pair();
                handle
            })
            .clone();
        AppState {
            readiness: Arc::new(AtomicBool::new(true)),
            metrics: handle,
            weights: ScoringWeights::default(),
        }
    }

    fn sample_date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 3, 2).expect("valid reference date")
    }

    #[tokio::test]
    async fn query_endpoint_falls_back_to_sample_catalog() {
        let request = GrantQueryRequest {
            grants: None,
            grants_csv: None,
            filters: FilterState::default(),
            sort: None,
            today: Some(sample_date()),
            include_details: false,
        };

        let Json(body) = grant_query_endpoint(State(test_state()), Json(request))
            .await
            .expect("query runs");

        assert_eq!(body.catalog_source, CatalogSource::Sample);
        assert_eq!(body.sort, SortStrategy::Score);
        assert!(body.matched > 0);
        assert!(body.details.is_none());
        // score sort is descending
        let scores: Vec<u8> = body
            .results
            .iter()
            .map(|view| view.overall_score)
            .collect();
        let mut sorted = scores.clone();
        sorted.sort_unstable_by(|a, b| b.cmp(a));
        assert_eq!(scores, sorted);
    }

    #[tokio::test]
    async fn query_endpoint_rejects_unknown_sort() {
        let request = GrantQueryRequest {
            grants: None,
            grants_csv: None,
            filters: FilterState::default(),
            sort: Some("relevance".to_string()),
            today: Some(sample_date()),
            include_details: false,
        };

        let err = grant_query_endpoint(State(test_state()), Json(request))
            .await
            .expect_err("unknown sort rejected");
        assert!(matches!(err, AppError::Query(_)));
    }

    #[tokio::test]
    async fn query_endpoint_includes_details_on_request() {
        let request = GrantQueryRequest {
            grants: None,
            grants_csv: None,
            filters: FilterState::urgent(),
            sort: Some("deadline".to_string()),
            today: Some(sample_date()),
            include_details: true,
        };

        let Json(body) = grant_query_endpoint(State(test_state()), Json(request))
            .await
            .expect("query runs");

        let details = body.details.expect("details returned");
        assert_eq!(details.len(), body.matched);
        assert!(details
            .iter()
            .all(|detail| detail.score_breakdown.len() == 5));
    }
}
