//! # API 문서 핸들러
//!
//! - `GET /openapi.json` → OpenAPI 3.0 문서
//! - `GET /docs`         → Swagger UI 페이지

use crate::{error::AppError, routes::questions::AppState, services::openapi};
use axum::{extract::State, response::Html, Json};
use serde_json::Value;

pub async fn openapi_json(State(state): State<AppState>) -> Json<Value> {
    Json(openapi::document(&state.app_title))
}

pub async fn swagger_ui(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let html = openapi::swagger_ui_html(&state.templates, &state.app_title)?;
    Ok(Html(html))
}
