//! HTTP scoring service.
//!
//! `GET /` health, `POST /predict` raw score, `POST /scan` score plus verdict,
//! `GET /admin/stats` and `GET /admin/recent` over the scans seen so far.
//! The model is loaded before the listener is bound; a service without a
//! model never accepts traffic.

use anyhow::{Context, Result};
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::{Deserialize, Serialize};
use std::path::PathBuf;
use std::sync::{Arc, Mutex, MutexGuard, PoisonError};
use tokio::net::TcpListener;

use crate::features::trim_url;
use crate::model::{load_artifact, LoadedModel, ModelError};
use crate::scan_log::{ScanLog, ScanRecord, ScanStats, DEFAULT_CAPACITY, RECENT_LIMIT};
use crate::scoring::{Assessment, Scorer};
use crate::verdict::VerdictPolicy;

/// State behind every handler. Only the scan log is mutable.
#[derive(Clone)]
pub struct AppState {
    scorer: Scorer,
    policy: Arc<VerdictPolicy>,
    model_fingerprint: Arc<str>,
    scan_log: Arc<Mutex<ScanLog>>,
}

impl AppState {
    pub fn new(scorer: Scorer, policy: VerdictPolicy, model_fingerprint: &str) -> Self {
        Self {
            scorer,
            policy: Arc::new(policy),
            model_fingerprint: Arc::from(model_fingerprint),
            scan_log: Arc::new(Mutex::new(ScanLog::new(DEFAULT_CAPACITY))),
        }
    }

    /// Replaces the scan log with an empty one retaining `capacity` records.
    pub fn with_scan_log_capacity(mut self, capacity: usize) -> Self {
        self.scan_log = Arc::new(Mutex::new(ScanLog::new(capacity)));
        self
    }

    fn scan_log(&self) -> MutexGuard<'_, ScanLog> {
        // A panic while holding the lock leaves counters that are still usable.
        self.scan_log.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Builds the state from a loaded artifact, re-checking its input schema.
    pub fn from_loaded(loaded: LoadedModel, policy: VerdictPolicy) -> Result<Self, ModelError> {
        let fingerprint = loaded.short_fingerprint().to_string();
        let scorer = Scorer::new(Arc::new(loaded.model))?;
        Ok(Self::new(scorer, policy, &fingerprint))
    }
}

/// Body of `POST /predict` and `POST /scan`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UrlRequest {
    pub url: String,
}

/// Body returned by `POST /predict`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PredictResponse {
    #[serde(rename = "mlScore")]
    pub ml_score: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HealthResponse {
    pub status: String,
    pub model: String,
}

#[derive(Debug)]
enum ApiError {
    BadRequest(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match self {
            ApiError::BadRequest(msg) => (StatusCode::BAD_REQUEST, msg),
        };
        let body = Json(serde_json::json!({ "error": message }));
        (status, body).into_response()
    }
}

pub fn router(state: AppState) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/predict", post(predict))
        .route("/scan", post(scan))
        .route("/admin/stats", get(admin_stats))
        .route("/admin/recent", get(admin_recent))
        .with_state(state)
}

async fn health(State(state): State<AppState>) -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok".to_string(),
        model: state.model_fingerprint.to_string(),
    })
}

async fn predict(State(state): State<AppState>, Json(req): Json<UrlRequest>) -> Json<PredictResponse> {
    let ml_score = state.scorer.score(&req.url);
    tracing::debug!(url = %req.url, ml_score, "predict");
    Json(PredictResponse { ml_score })
}

async fn scan(
    State(state): State<AppState>,
    Json(req): Json<UrlRequest>,
) -> Result<Json<Assessment>, ApiError> {
    if trim_url(&req.url).is_empty() {
        return Err(ApiError::BadRequest("url is required".to_string()));
    }
    let assessment = state.scorer.assess(&req.url, &state.policy);
    tracing::debug!(
        url = %assessment.url,
        ml_score = assessment.ml_score,
        verdict = %assessment.verdict,
        allowlisted = assessment.allowlisted,
        "scan"
    );
    state
        .scan_log()
        .record(ScanRecord::from_assessment(&assessment, chrono::Utc::now()));
    Ok(Json(assessment))
}

async fn admin_stats(State(state): State<AppState>) -> Json<ScanStats> {
    Json(state.scan_log().stats())
}

async fn admin_recent(State(state): State<AppState>) -> Json<Vec<ScanRecord>> {
    Json(state.scan_log().recent(RECENT_LIMIT))
}

/// Everything `run` needs to start the service.
#[derive(Debug, Clone)]
pub struct ServeOptions {
    pub bind_addr: String,
    /// Already resolved artifact path.
    pub model_path: PathBuf,
    pub policy: VerdictPolicy,
    pub scan_log_capacity: usize,
}

/// Loads the model, binds and serves until Ctrl-C.
pub async fn run(opts: ServeOptions) -> Result<()> {
    let loaded = load_artifact(&opts.model_path)
        .context("scoring service cannot start without a valid model artifact")?;
    let state = AppState::from_loaded(loaded, opts.policy)?
        .with_scan_log_capacity(opts.scan_log_capacity);

    let listener = TcpListener::bind(&opts.bind_addr)
        .await
        .with_context(|| format!("bind {}", opts.bind_addr))?;
    let local = listener.local_addr().context("listener address")?;
    tracing::info!(addr = %local, "scoring service listening");

    serve(listener, state).await
}

/// Serves `state` on an already bound listener until Ctrl-C.
pub async fn serve(listener: TcpListener, state: AppState) -> Result<()> {
    axum::serve(listener, router(state))
        .with_graceful_shutdown(shutdown_signal())
        .await
        .context("scoring service")?;
    tracing::info!("scoring service stopped");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(err) = tokio::signal::ctrl_c().await {
        tracing::warn!("ctrl-c handler unavailable: {err}");
        std::future::pending::<()>().await;
    }
}
