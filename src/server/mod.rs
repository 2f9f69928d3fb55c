//! HTTP daemon/server mode for `rowsift`.
//!
//! This module exposes a small HTTP+JSON API over a shared, read-only
//! engine:
//!
//! - `GET /api/fields` – ordered field definitions for the filter
//!   builder.
//! - `POST /api/search` – accepts a JSON-encoded `Query` and returns
//!   a `SearchPage`.
//! - `POST /api/search/export` – same query, returns every match as a
//!   CSV download.
//! - `GET /v1/health` – simple health check endpoint.
//!
//! The server is intentionally thin: it performs JSON
//! (de)serialization, delegates to the engine, and converts errors
//! into JSON HTTP responses.

use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::{
    extract::State,
    http::{header, StatusCode},
    response::{IntoResponse, Response},
    routing::{get, post},
    Json, Router,
};
use serde::Serialize;
use tokio::net::TcpListener;

use crate::models::{FieldDefinition, Query, SearchPage};
use crate::search::engine::Engine;

/// File name suggested to browsers for CSV downloads.
const EXPORT_FILE_NAME: &str = "search-results.csv";

type SharedEngine = Arc<Engine>;

/// Simple health-check response payload.
#[derive(Debug, Serialize)]
struct HealthResponse {
    status: &'static str,
}

/// JSON error body returned by the API.
#[derive(Debug, Serialize)]
struct ErrorResponse {
    error: String,
}

/// Error type used by HTTP handlers to map failures into JSON error
/// responses.
#[derive(Debug)]
struct ApiError {
    status: StatusCode,
    message: String,
}

impl ApiError {
    fn bad_request(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::BAD_REQUEST,
            message: message.into(),
        }
    }

    fn internal(message: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: message.into(),
        }
    }
}

impl From<anyhow::Error> for ApiError {
    fn from(err: anyhow::Error) -> Self {
        ApiError::internal(format!("{err:#}"))
    }
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        if self.status.is_server_error() {
            tracing::error!(status = %self.status, error = %self.message, "request failed");
        }
        let body = Json(ErrorResponse {
            error: self.message,
        });
        (self.status, body).into_response()
    }
}

/// Reject queries the engine would otherwise have to clamp.
fn validate_query(query: &Query) -> Result<(), ApiError> {
    if query.page < 1 {
        return Err(ApiError::bad_request("page must be at least 1"));
    }
    if query.page_size < 1 {
        return Err(ApiError::bad_request("pageSize must be at least 1"));
    }
    Ok(())
}

/// Build the Axum router for the rowsift HTTP API.
pub fn router(engine: SharedEngine) -> Router {
    Router::new()
        .route("/v1/health", get(health))
        .route("/api/fields", get(fields))
        .route("/api/search", post(search))
        .route("/api/search/export", post(export))
        .with_state(engine)
}

/// Run the HTTP server bound to the provided socket address.
///
/// This is used by the CLI `rowsift serve` subcommand.
pub async fn run(addr: SocketAddr, engine: SharedEngine) -> Result<()> {
    let listener = TcpListener::bind(addr).await?;
    serve_with_listener(listener, engine).await
}

/// Run the HTTP server using an existing `TcpListener`.
///
/// This is primarily used in tests to bind to an ephemeral port.
pub async fn serve_with_listener(listener: TcpListener, engine: SharedEngine) -> Result<()> {
    tracing::info!(
        addr = ?listener.local_addr().ok(),
        records = engine.records().len(),
        "serving search API"
    );
    let app = router(engine);
    axum::serve(listener, app).await?;
    Ok(())
}

async fn health() -> Json<HealthResponse> {
    Json(HealthResponse { status: "ok" })
}

async fn fields(State(engine): State<SharedEngine>) -> Json<Vec<FieldDefinition>> {
    Json(engine.fields().to_vec())
}

async fn search(
    State(engine): State<SharedEngine>,
    Json(query): Json<Query>,
) -> Result<Json<SearchPage>, ApiError> {
    validate_query(&query)?;
    Ok(Json(engine.search(&query)))
}

async fn export(
    State(engine): State<SharedEngine>,
    Json(query): Json<Query>,
) -> Result<Response, ApiError> {
    let csv = engine.export_all(&query)?;
    let disposition = format!("attachment; filename={EXPORT_FILE_NAME}");
    Ok((
        [
            (header::CONTENT_TYPE, "text/csv; charset=utf-8".to_string()),
            (header::CONTENT_DISPOSITION, disposition),
        ],
        csv,
    )
        .into_response())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::dataset::Dataset;
    use crate::models::{Combinator, Filter, SortOrder};

    fn engine() -> SharedEngine {
        Arc::new(Engine::new(Dataset::sample()))
    }

    #[tokio::test]
    async fn health_endpoint_returns_ok_status() {
        let response = health().await.into_response();
        assert_eq!(response.status(), StatusCode::OK);
    }

    #[tokio::test]
    async fn fields_endpoint_lists_registry_in_order() {
        let Json(fields) = fields(State(engine())).await;
        assert_eq!(fields.len(), 14);
        assert_eq!(fields[0].field, "id");
        assert_eq!(fields[9].field, "isActive");
    }

    #[tokio::test]
    async fn search_endpoint_returns_requested_page() {
        let query = Query {
            page: 2,
            page_size: 4,
            sort_field: "salary".to_string(),
            sort_order: SortOrder::Desc,
            ..Query::default()
        };

        let Json(page) = search(State(engine()), Json(query))
            .await
            .expect("search page");
        assert_eq!(page.total, 30);
        assert_eq!(page.total_pages, 8);
        assert_eq!(page.data.len(), 4);
    }

    #[tokio::test]
    async fn search_endpoint_rejects_zero_page_size() {
        let query = Query {
            page_size: 0,
            ..Query::default()
        };

        let err = search(State(engine()), Json(query))
            .await
            .expect_err("expected error");
        let response = err.into_response();
        assert_eq!(response.status(), StatusCode::BAD_REQUEST);
    }

    #[tokio::test]
    async fn export_endpoint_sets_csv_headers() {
        let query = Query {
            filters: vec![Filter::new("department", "equals", "finance")],
            combinator: Combinator::And,
            ..Query::default()
        };

        let response = export(State(engine()), Json(query))
            .await
            .expect("export response");
        assert_eq!(response.status(), StatusCode::OK);
        assert_eq!(
            response.headers()[header::CONTENT_TYPE],
            "text/csv; charset=utf-8"
        );
        assert_eq!(
            response.headers()[header::CONTENT_DISPOSITION],
            "attachment; filename=search-results.csv"
        );
    }
}
