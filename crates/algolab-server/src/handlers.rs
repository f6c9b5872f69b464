//! Route handlers.

use std::sync::Arc;

use axum::extract::rejection::{JsonRejection, PathRejection, QueryRejection};
use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use serde_json::Value;
use tokio::task::JoinError;

use algolab_core::{
    Algorithm, AlgoError, AlgorithmInput, Execution, ExecutionRecord, Language, NewExecution,
    DEFAULT_HISTORY_LIMIT,
};

use crate::error::ApiError;
use crate::state::AppState;
use crate::types::{
    AlgorithmResponse, CatalogDetail, CatalogEntry, HistoryQuery, ServerStatus,
};

type JsonBody = Result<Json<Value>, JsonRejection>;
type AlgorithmResult = Result<Json<AlgorithmResponse>, ApiError>;

// === Algorithm endpoints ===

pub async fn prime(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::Prime, body).await
}

pub async fn summation(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::Summation, body).await
}

pub async fn fibonacci(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::Fibonacci, body).await
}

pub async fn gcd(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::Gcd, body).await
}

pub async fn quicksort(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::QuickSort, body).await
}

pub async fn count(State(state): State<Arc<AppState>>, body: JsonBody) -> AlgorithmResult {
    run_algorithm(&state, Algorithm::Count, body).await
}

/// Validate, compute on the blocking pool, log, respond.
async fn run_algorithm(state: &AppState, algorithm: Algorithm, body: JsonBody) -> AlgorithmResult {
    let Json(body) = body.map_err(json_rejection)?;
    let language = requested_language(&body)?;
    let input = AlgorithmInput::from_json(algorithm, &body).inspect_err(|err| {
        tracing::warn!(%algorithm, error = %err, "rejected input");
    })?;

    let (input, execution) = tokio::task::spawn_blocking(move || {
        let execution = Execution::run(&input);
        (input, execution)
    })
    .await
    .map_err(join_error)?;

    let execution_id = state
        .history
        .append(NewExecution::from_run(&input, &execution, language));
    tracing::info!(
        %algorithm,
        %language,
        execution_id,
        duration = ?execution.duration,
        "algorithm executed"
    );

    Ok(Json(AlgorithmResponse {
        execution_time: execution.execution_time_ms(),
        result: execution.outcome,
        implementation: language,
        execution_id,
    }))
}

/// Reads the optional `implementation` field; absent or `null` means the default.
fn requested_language(body: &Value) -> Result<Language, AlgoError> {
    match body.get("implementation") {
        None | Some(Value::Null) => Ok(Language::default()),
        Some(Value::String(name)) => name.parse(),
        Some(other) => Err(AlgoError::UnknownLanguage(other.to_string())),
    }
}

fn json_rejection(rejection: JsonRejection) -> ApiError {
    let message = format!("Invalid input: {}", rejection.body_text());
    if rejection.status() == StatusCode::PAYLOAD_TOO_LARGE {
        ApiError::PayloadTooLarge(message)
    } else {
        ApiError::BadRequest(message)
    }
}

fn join_error(err: JoinError) -> ApiError {
    if !err.is_panic() {
        return ApiError::Internal(err.to_string());
    }
    let payload = err.into_panic();
    let message = payload
        .downcast_ref::<&str>()
        .map(|s| (*s).to_string())
        .or_else(|| payload.downcast_ref::<String>().cloned())
        .unwrap_or_else(|| "Unknown error".to_string());
    ApiError::Internal(message)
}

// === Catalog ===

pub async fn list_catalog() -> Json<Vec<CatalogEntry>> {
    Json(Algorithm::ALL.into_iter().map(CatalogEntry::from).collect())
}

pub async fn catalog_entry(
    path: Result<Path<String>, PathRejection>,
) -> Result<Json<CatalogDetail>, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let algorithm: Algorithm = id.parse()?;
    Ok(Json(CatalogDetail::from(algorithm)))
}

// === Execution log ===

pub async fn list_executions(
    State(state): State<Arc<AppState>>,
    query: Result<Query<HistoryQuery>, QueryRejection>,
) -> Result<Json<Vec<ExecutionRecord>>, ApiError> {
    let Query(query) = query.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    let limit = query.limit.unwrap_or(DEFAULT_HISTORY_LIMIT);
    Ok(Json(state.history.recent(limit)))
}

pub async fn get_execution(
    State(state): State<Arc<AppState>>,
    path: Result<Path<u64>, PathRejection>,
) -> Result<Json<ExecutionRecord>, ApiError> {
    let Path(id) = path.map_err(|e| ApiError::BadRequest(e.body_text()))?;
    state
        .history
        .get(id)
        .map(Json)
        .ok_or_else(|| ApiError::NotFound(format!("execution {id} not found")))
}

// === Health ===

pub async fn health() -> &'static str {
    "OK"
}

pub async fn status(State(state): State<Arc<AppState>>) -> Json<ServerStatus> {
    Json(ServerStatus {
        version: env!("CARGO_PKG_VERSION"),
        uptime_seconds: state.start_time.elapsed().as_secs(),
        algorithms: Algorithm::ALL.len(),
        executions_retained: state.history.len(),
        history_capacity: state.history.capacity(),
    })
}
