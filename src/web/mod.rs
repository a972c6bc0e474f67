use axum::extract::Query;
use axum::http::StatusCode;
use axum::response::{Html, IntoResponse, Response};
use axum::routing::get;
use axum::{Form, Json, Router};
use serde::Serialize;
use std::net::SocketAddr;
use thiserror::Error;
use tracing::info;

use crate::{AbbrevError, TermRequest, TermResponse, respond};

pub mod page;

pub use page::render_page;

pub const DEFAULT_LISTEN: &str = "127.0.0.1:8501";

pub fn build_router() -> Router {
    Router::new()
        .route("/", get(show_form).post(submit_form))
        .route("/api/variations", get(api_variations))
        .route("/health", get(health))
}

/// Bind `addr` and serve the form until the server stops.
pub async fn serve(addr: SocketAddr) -> crate::Result<()> {
    let listener = tokio::net::TcpListener::bind(addr)
        .await
        .map_err(|source| AbbrevError::Bind { addr, source })?;
    info!("term-abbrev-web listening on {}", listener.local_addr()?);

    axum::serve(listener, build_router()).await?;
    Ok(())
}

#[derive(Debug, Error)]
pub enum ApiError {
    #[error("term must not be empty")]
    EmptyTerm,
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        let status = match self {
            ApiError::EmptyTerm => StatusCode::BAD_REQUEST,
        };
        (
            status,
            Json(serde_json::json!({ "error": self.to_string() })),
        )
            .into_response()
    }
}

fn answer_page(request: &TermRequest) -> Html<String> {
    let response = respond(request);
    if let Some(ref response) = response {
        info!(term = %response.original, count = response.variations.len(), "answered form");
    }
    Html(render_page(&request.term, response.as_ref()))
}

async fn show_form(Query(request): Query<TermRequest>) -> Html<String> {
    answer_page(&request)
}

async fn submit_form(Form(request): Form<TermRequest>) -> Html<String> {
    answer_page(&request)
}

async fn api_variations(
    Query(request): Query<TermRequest>,
) -> Result<Json<TermResponse>, ApiError> {
    respond(&request).map(Json).ok_or(ApiError::EmptyTerm)
}

#[derive(Debug, Clone, Serialize)]
struct HealthResponse {
    status: &'static str,
    service: &'static str,
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse {
        status: "ok",
        service: "term-abbrev-web",
    })
}
