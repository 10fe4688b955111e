//! # 관리자 화면 핸들러
//!
//! REST API와 별개로, 브라우저에서 질문을 조회/생성/수정/삭제하는 HTML 화면입니다.
//! HTML 폼은 GET/POST만 보낼 수 있으므로 수정과 삭제도 POST로 받습니다.
//!
//! ## 엔드포인트
//! - `GET  /admin`                         → 목록 + 생성 폼
//! - `POST /admin/questions`               → 생성 후 `/admin`으로 리다이렉트
//! - `GET  /admin/questions/{id}`          → 수정 폼
//! - `POST /admin/questions/{id}`          → 수정 후 리다이렉트
//! - `POST /admin/questions/{id}/delete`   → 삭제 후 리다이렉트

use crate::{
    db,
    error::AppError,
    models::QuestionForm,
    routes::questions::AppState,
    services::admin_page,
};
use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::{Html, IntoResponse, Redirect, Response},
    Form,
};

const ADMIN_HOME: &str = "/admin";

/// 없는 id에 대한 404 HTML 응답
fn not_found_page(state: &AppState, id: i64) -> Result<Response, AppError> {
    let html = admin_page::render_not_found(&state.templates, &state.app_title, id)?;
    Ok((StatusCode::NOT_FOUND, Html(html)).into_response())
}

pub async fn admin_index(State(state): State<AppState>) -> Result<Html<String>, AppError> {
    let questions = db::list_questions(&state.pool).await?;
    let count = db::count_questions(&state.pool).await?;
    let html = admin_page::render_list(&state.templates, &state.app_title, &questions, count)?;
    Ok(Html(html))
}

pub async fn admin_edit(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    match db::get_question(&state.pool, id).await? {
        Some(question) => {
            let html = admin_page::render_edit(&state.templates, &state.app_title, &question)?;
            Ok(Html(html).into_response())
        }
        None => not_found_page(&state, id),
    }
}

/// `Form(pairs)`: `application/x-www-form-urlencoded` 본문을 `(키, 값)` 목록으로 파싱합니다.
/// 같은 이름(`answers`)이 반복되므로 구조체 대신 쌍 목록으로 받습니다.
pub async fn admin_create(
    State(state): State<AppState>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Redirect, AppError> {
    let form = QuestionForm::from_pairs(pairs)?;
    db::create_question(&state.pool, &form.into_payload()).await?;
    // Redirect::to(): 303 See Other. 새로고침 시 폼이 다시 제출되지 않습니다.
    Ok(Redirect::to(ADMIN_HOME))
}

pub async fn admin_update(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Form(pairs): Form<Vec<(String, String)>>,
) -> Result<Response, AppError> {
    let form = QuestionForm::from_pairs(pairs)?;
    match db::update_question(&state.pool, id, &form.into_payload()).await? {
        Some(_) => Ok(Redirect::to(ADMIN_HOME).into_response()),
        None => not_found_page(&state, id),
    }
}

pub async fn admin_delete(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Response, AppError> {
    if db::delete_question(&state.pool, id).await? {
        Ok(Redirect::to(ADMIN_HOME).into_response())
    } else {
        not_found_page(&state, id)
    }
}
