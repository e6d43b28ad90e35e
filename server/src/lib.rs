//! HTTP surface of the chatbot backend.
//!
//! The binary and the integration tests build the same router from here.

use axum::{
    Json, Router,
    extract::{Query, State, rejection::JsonRejection},
    response::{Html, IntoResponse, Redirect, Response},
    routing::{get, post},
};
use sea_orm::DatabaseConnection;
use serde::Deserialize;
use tourbot::dispatch::dispatch;
use tourbot::kakao::{SkillRequest, SkillResponse};
use tourbot::maps::{NAVER_MAP_WEB_HOME, launcher_page};
use tourbot::responses::ReplyContext;
use tower_http::services::ServeDir;
use tracing::warn;

pub const HEALTH_TEXT: &str = "Kakao Chatbot is running.";

#[derive(Clone)]
pub struct AppState {
    pub db: DatabaseConnection,
    pub ctx: ReplyContext,
    pub map_app_name: String,
}

pub fn build_router(state: AppState, images_dir: &str) -> Router {
    Router::new()
        .route("/", get(health))
        .route("/kakao/webhook", post(kakao_webhook))
        .route("/map/open", get(open_map))
        .nest_service("/images", ServeDir::new(images_dir))
        .with_state(state)
}

async fn health() -> &'static str {
    HEALTH_TEXT
}

/// Always answers 200 with a skill response; an unreadable body is treated
/// as a request with no intent.
async fn kakao_webhook(
    State(state): State<AppState>,
    payload: Result<Json<SkillRequest>, JsonRejection>,
) -> Json<SkillResponse> {
    let request = match payload {
        Ok(Json(request)) => request,
        Err(rejection) => {
            warn!("Unreadable skill request: {}", rejection);
            SkillRequest::default()
        }
    };

    Json(dispatch(&state.db, &state.ctx, &request).await)
}

#[derive(Debug, Deserialize)]
struct MapQuery {
    #[serde(default)]
    query: String,
}

async fn open_map(State(state): State<AppState>, Query(params): Query<MapQuery>) -> Response {
    let query = params.query.trim();
    if query.is_empty() {
        return Redirect::temporary(NAVER_MAP_WEB_HOME).into_response();
    }

    Html(launcher_page(query, &state.map_app_name)).into_response()
}
