//! HTTP API for the recommendation service.
//!
//! Routes:
//! - `POST /get-movies` with `{"text": "..."}` returns a `RecommendationResult`
//! - `GET /health` returns a static status document
//! - `GET /` describes the API
//!
//! Anything else gets a JSON 404.

use std::sync::Arc;

use axum::extract::rejection::JsonRejection;
use axum::extract::State;
use axum::http::StatusCode;
use axum::response::{IntoResponse, Response};
use axum::routing::{get, post};
use axum::{Json, Router};
use serde::Deserialize;
use serde_json::{json, Value};
use thiserror::Error;
use tokio::net::TcpListener;
use tracing::{error, info};

use crate::orchestrator::RecommendationOrchestrator;
use movie_types::{RecommendationRequest, RecommendationResult};

/// Errors returned to HTTP clients
#[derive(Error, Debug)]
pub enum ApiError {
    #[error("{0}")]
    BadRequest(String),

    #[error("Server error: {0}")]
    Internal(String),
}

impl IntoResponse for ApiError {
    fn into_response(self) -> Response {
        match self {
            ApiError::BadRequest(message) => {
                (StatusCode::BAD_REQUEST, Json(json!({ "error": message }))).into_response()
            }
            ApiError::Internal(message) => {
                error!("Server error: {}", message);
                (
                    StatusCode::INTERNAL_SERVER_ERROR,
                    Json(json!({
                        "error": "Internal server error",
                        "message": "Something went wrong on the server"
                    })),
                )
                    .into_response()
            }
        }
    }
}

/// Body of `POST /get-movies`
#[derive(Debug, Deserialize)]
pub struct GetMoviesBody {
    #[serde(default)]
    pub text: Option<String>,
}

/// Build the router around a shared orchestrator
pub fn router(orchestrator: Arc<RecommendationOrchestrator>) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/health", get(health))
        .route("/get-movies", post(get_movies))
        .fallback(not_found)
        .with_state(orchestrator)
}

/// Serve the API on `listener` until ctrl-c is received
pub async fn serve(
    listener: TcpListener,
    orchestrator: Arc<RecommendationOrchestrator>,
) -> anyhow::Result<()> {
    let addr = listener.local_addr()?;
    info!("Movie recommender API listening on http://{}", addr);

    axum::serve(listener, router(orchestrator))
        .with_graceful_shutdown(async {
            if let Err(e) = tokio::signal::ctrl_c().await {
                error!("Failed to listen for shutdown signal: {}", e);
            }
            info!("Shutting down");
        })
        .await?;

    Ok(())
}

async fn get_movies(
    State(orchestrator): State<Arc<RecommendationOrchestrator>>,
    payload: Result<Json<GetMoviesBody>, JsonRejection>,
) -> Result<Json<RecommendationResult>, ApiError> {
    let Json(body) = payload.map_err(|rejection| {
        info!("Rejected request body: {}", rejection);
        ApiError::BadRequest("No JSON data provided".to_string())
    })?;

    let request = RecommendationRequest::new(body.text.unwrap_or_default())
        .map_err(|e| ApiError::BadRequest(e.to_string()))?;

    info!("Processing request for: '{}'", request.text());

    // A panic inside the orchestration task surfaces as a 500.
    let result = tokio::spawn(async move { orchestrator.get_complete_movie_data(&request).await })
        .await
        .map_err(|e| ApiError::Internal(e.to_string()))?;

    info!("Found {} movies", result.movie_names.len());
    Ok(Json(result))
}

async fn health() -> Json<Value> {
    Json(json!({
        "status": "Backend is running!",
        "message": "Movie Recommender API is healthy",
        "endpoints": {
            "/get-movies": "POST - Get movie recommendations",
            "/health": "GET - Health check"
        }
    }))
}

async fn index() -> Json<Value> {
    Json(json!({
        "message": "Movie Recommender API",
        "version": env!("CARGO_PKG_VERSION"),
        "endpoints": {
            "/get-movies": {
                "method": "POST",
                "description": "Get movie recommendations",
                "payload": {
                    "text": "Your movie preference (e.g., \"action movies\", \"Leonardo DiCaprio films\")"
                }
            },
            "/health": {
                "method": "GET",
                "description": "Health check"
            }
        },
        "example_request": {
            "url": "/get-movies",
            "method": "POST",
            "headers": { "Content-Type": "application/json" },
            "body": { "text": "action movies" }
        }
    }))
}

async fn not_found() -> (StatusCode, Json<Value>) {
    (
        StatusCode::NOT_FOUND,
        Json(json!({
            "error": "Endpoint not found",
            "message": "Available endpoints: /, /health, /get-movies"
        })),
    )
}
