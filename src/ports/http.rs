// src/ports/http.rs
use crate::application::{OutputDeleter, OutputLister, OutputRepository, OutputSaver, OutputViewer};
use crate::constants::LIST_LIMIT;
use crate::domain::{DomainError, Output};
use anyhow::{Context, Result};
use axum::extract::{Path, State};
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Json, Router};
use html_escape::{encode_double_quoted_attribute, encode_text};
use serde::Deserialize;
use serde_json::json;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};

/// Shared handler state: one repository behind a mutex.
///
/// Every operation is a single atomic row access, so handlers lock, run one
/// repository call, and unlock; the lock is never held across an await point.
pub struct AppState<R> {
    repo: Arc<Mutex<R>>,
}

impl<R> AppState<R> {
    pub fn new(repo: R) -> Self {
        Self {
            repo: Arc::new(Mutex::new(repo)),
        }
    }

    fn with_repo<T>(
        &self,
        f: impl FnOnce(&mut R) -> Result<T, DomainError>,
    ) -> Result<T, ApiError> {
        // A poisoned lock only means another handler panicked mid-request;
        // single-row operations leave no partial state behind.
        let mut guard = self.repo.lock().unwrap_or_else(|e| e.into_inner());
        f(&mut guard).map_err(ApiError::from)
    }
}

impl<R> Clone for AppState<R> {
    fn clone(&self) -> Self {
        Self {
            repo: Arc::clone(&self.repo),
        }
    }
}

/// Domain error adapter for HTTP responses.
pub struct ApiError(DomainError);

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let (status, message) = match &self.0 {
            DomainError::OutputNotFound(_) => (StatusCode::NOT_FOUND, "Not found".to_string()),
            DomainError::FieldRequired(_) => (StatusCode::BAD_REQUEST, self.0.to_string()),
            DomainError::StorageError(_) => {
                (StatusCode::INTERNAL_SERVER_ERROR, self.0.to_string())
            }
        };
        (status, Json(json!({ "error": message }))).into_response()
    }
}

impl From<DomainError> for ApiError {
    fn from(err: DomainError) -> Self {
        Self(err)
    }
}

#[derive(Debug, Deserialize)]
struct CreateOutputRequest {
    // Option so a missing field surfaces as "<field> required" instead of a
    // deserialization error.
    title: Option<String>,
    html: Option<String>,
}

pub fn router<R>(state: AppState<R>) -> Router
where
    R: OutputRepository + Send + 'static,
{
    Router::new()
        .route("/outputs", get(list_outputs::<R>).post(create_output::<R>))
        .route(
            "/outputs/{id}",
            get(get_output::<R>).delete(delete_output::<R>),
        )
        .route("/share/{id}", get(share_output::<R>))
        .with_state(state)
}

async fn list_outputs<R>(State(state): State<AppState<R>>) -> Result<Json<Vec<Output>>, ApiError>
where
    R: OutputRepository + Send + 'static,
{
    let outputs = state.with_repo(|repo| OutputLister::new(repo).list_recent(LIST_LIMIT))?;
    debug!(count = outputs.len(), "Listed outputs");
    Ok(Json(outputs))
}

async fn create_output<R>(
    State(state): State<AppState<R>>,
    Json(payload): Json<CreateOutputRequest>,
) -> Result<(StatusCode, Json<Output>), ApiError>
where
    R: OutputRepository + Send + 'static,
{
    let output = state.with_repo(|repo| {
        OutputSaver::new(repo).save(payload.title.as_deref(), payload.html.as_deref())
    })?;
    info!(id = %output.id, "Created output");
    Ok((StatusCode::CREATED, Json(output)))
}

async fn get_output<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<Output>, ApiError>
where
    R: OutputRepository + Send + 'static,
{
    let output = state.with_repo(|repo| OutputViewer::new(repo).view_output(&id))?;
    Ok(Json(output))
}

async fn delete_output<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Json<serde_json::Value>, ApiError>
where
    R: OutputRepository + Send + 'static,
{
    // Idempotent: unknown ids delete zero rows and still return ok.
    state.with_repo(|repo| OutputDeleter::new(repo).delete_output(&id))?;
    Ok(Json(json!({ "ok": true })))
}

/// Share/view page: renders a stored document inside an iframe `srcdoc` so
/// its styles and scripts stay isolated from the host page.
async fn share_output<R>(
    State(state): State<AppState<R>>,
    Path(id): Path<String>,
) -> Result<Html<String>, ApiError>
where
    R: OutputRepository + Send + 'static,
{
    let output = state.with_repo(|repo| OutputViewer::new(repo).view_output(&id))?;

    let title = encode_text(&output.title);
    let srcdoc = encode_double_quoted_attribute(&output.html);
    let page = format!(
        r#"<!doctype html>
<html lang="en">
<head>
<meta charset="utf-8">
<title>Shared Output: {title}</title>
</head>
<body style="font-family: system-ui, sans-serif; padding:16px;">
  <h1>Shared Output: {title}</h1>
  <p><small>ID: {id} &bull; {created_at}</small></p>
  <iframe title="{iframe_title}" sandbox="allow-scripts"
    style="width:100%;height:70vh;border:1px solid #ddd;border-radius:12px;"
    srcdoc="{srcdoc}"></iframe>
</body>
</html>"#,
        id = encode_text(&output.id),
        created_at = output.created_at.to_rfc3339(),
        iframe_title = encode_double_quoted_attribute(&output.title),
    );

    Ok(Html(page))
}

/// Bind and serve the resource layer until the process is stopped.
pub async fn serve<R>(state: AppState<R>, bind_addr: &str) -> Result<()>
where
    R: OutputRepository + Send + 'static,
{
    let listener = tokio::net::TcpListener::bind(bind_addr)
        .await
        .with_context(|| format!("Failed to bind {bind_addr}"))?;

    info!("Listening on http://{}", listener.local_addr()?);
    axum::serve(listener, router(state))
        .await
        .context("HTTP server failed")?;

    Ok(())
}
