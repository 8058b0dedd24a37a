use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use axum::extract::State;
use axum::extract::rejection::JsonRejection;
use axum::http::StatusCode;
use axum::response::IntoResponse;
use axum::routing::{get, post};
use axum::{Json, Router};
use chrono::Utc;
use tower_http::cors::CorsLayer;

use studyplan_core::completion::Completion;
use studyplan_core::plan::{StudyPlan, generate_study_plan_with_max_tokens};
use studyplan_core::profile::LearnerProfile;

// ---------------------------------------------------------------------------
// Error type
// ---------------------------------------------------------------------------

pub struct AppError {
    status: StatusCode,
    message: String,
}

impl AppError {
    pub fn unprocessable(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::UNPROCESSABLE_ENTITY,
            message: msg.into(),
        }
    }

    pub fn internal(msg: impl Into<String>) -> Self {
        Self {
            status: StatusCode::INTERNAL_SERVER_ERROR,
            message: msg.into(),
        }
    }
}

impl From<JsonRejection> for AppError {
    fn from(rejection: JsonRejection) -> Self {
        Self {
            status: rejection.status(),
            message: rejection.body_text(),
        }
    }
}

impl IntoResponse for AppError {
    fn into_response(self) -> axum::response::Response {
        let body = serde_json::json!({ "error": self.message });
        (self.status, Json(body)).into_response()
    }
}

// ---------------------------------------------------------------------------
// Router
// ---------------------------------------------------------------------------

#[derive(Clone)]
struct AppState {
    completion: Arc<dyn Completion>,
    max_tokens: u32,
}

pub fn build_router(completion: Arc<dyn Completion>, max_tokens: u32) -> Router {
    Router::new()
        .route("/ai-agent/study-plan", post(create_study_plan))
        .route("/ai-agent/health", get(health))
        .layer(CorsLayer::permissive())
        .with_state(AppState {
            completion,
            max_tokens,
        })
}

// ---------------------------------------------------------------------------
// Entry point
// ---------------------------------------------------------------------------

pub async fn run_serve(
    completion: Arc<dyn Completion>,
    max_tokens: u32,
    bind: &str,
    port: u16,
) -> Result<()> {
    let provider = completion.name().to_string();
    let app = build_router(completion, max_tokens);
    let addr: SocketAddr = format!("{bind}:{port}").parse()?;
    tracing::info!(%provider, "studyplan serve listening on http://{addr}");
    let listener = tokio::net::TcpListener::bind(addr).await?;
    axum::serve(listener, app)
        .with_graceful_shutdown(shutdown_signal())
        .await?;
    tracing::info!("studyplan serve shut down");
    Ok(())
}

async fn shutdown_signal() {
    if let Err(e) = tokio::signal::ctrl_c().await {
        tracing::warn!(error = %e, "failed to install Ctrl+C handler; serving until killed");
        std::future::pending::<()>().await;
    }
}

// ---------------------------------------------------------------------------
// Handlers
// ---------------------------------------------------------------------------

async fn create_study_plan(
    State(state): State<AppState>,
    payload: Result<Json<LearnerProfile>, JsonRejection>,
) -> Result<(StatusCode, Json<StudyPlan>), AppError> {
    let Json(profile) = payload?;
    profile
        .validate()
        .map_err(|e| AppError::unprocessable(e.to_string()))?;

    let plan =
        generate_study_plan_with_max_tokens(&profile, state.completion.as_ref(), state.max_tokens)
            .await
            .map_err(|e| {
                tracing::error!(student_id = %profile.student_id, error = %e, "study plan request failed");
                AppError::internal(format!("Failed to generate study plan: {e}"))
            })?;

    Ok((StatusCode::CREATED, Json(plan)))
}

async fn health() -> Json<serde_json::Value> {
    Json(serde_json::json!({
        "status": "ok",
        "timestamp": Utc::now().to_rfc3339(),
    }))
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
