//! # 질문(Question) REST 핸들러
//!
//! 저장소의 다섯 가지 연산을 HTTP 요청과 1:1로 연결합니다.
//! 중간 서비스 계층 없이 `db` 모듈 함수를 바로 호출합니다.
//!
//! ## 엔드포인트
//! | 메서드 | 경로 | 핸들러 | 설명 |
//! |--------|------|--------|------|
//! | GET | / | `list_questions` | 전체 질문 목록 |
//! | POST | / | `create_question` | 새 질문 생성 |
//! | GET | /ques/{id} | `get_question` | 단일 질문 조회 |
//! | PUT | /ques/{id} | `update_question` | 질문 전체 교체 |
//! | DELETE | /ques/{id} | `delete_question` | 질문 삭제 |
//!
//! 없는 id는 모두 `AppError::NotFound` → HTTP 404로 응답합니다.

use crate::{db, error::AppError, models::*};
use axum::{
    extract::{Path, State},
    Json,
};
use sqlx::SqlitePool;
use std::sync::Arc;
use tera::Tera;

/// 애플리케이션 공유 상태
///
/// 모든 요청 핸들러가 `State(state): State<AppState>`로 접근합니다.
/// SqlitePool은 내부적으로 Arc를 사용하므로 clone해도 같은 풀을 가리킵니다.
/// 템플릿도 `Arc`로 감싸 요청마다 복제되지 않게 합니다.
#[derive(Clone)]
pub struct AppState {
    /// SQLite 연결 풀
    pub pool: SqlitePool,
    /// OpenAPI 문서와 관리자 화면에 표시할 제목
    pub app_title: String,
    /// 관리자 화면과 Swagger UI 페이지의 Tera 템플릿
    pub templates: Arc<Tera>,
}

impl AppState {
    /// 포함된 템플릿을 파싱하여 상태를 만듭니다.
    pub fn new(pool: SqlitePool, app_title: impl Into<String>) -> Result<Self, tera::Error> {
        Ok(Self {
            pool,
            app_title: app_title.into(),
            templates: Arc::new(crate::services::templates::load()?),
        })
    }
}

/// `GET /` — 저장된 모든 질문을 배열로 반환합니다.
pub async fn list_questions(
    State(state): State<AppState>,
) -> Result<Json<Vec<Question>>, AppError> {
    let questions = db::list_questions(&state.pool).await?;
    Ok(Json(questions))
}

/// `POST /` — 새 질문을 생성합니다.
///
/// `Json(req)`: 요청 본문을 `QuestionPayload`로 파싱합니다.
/// 필수 필드 누락 등 파싱 실패는 Axum이 자동으로 4xx 응답을 돌려줍니다.
pub async fn create_question(
    State(state): State<AppState>,
    Json(req): Json<QuestionPayload>,
) -> Result<Json<Question>, AppError> {
    let question = db::create_question(&state.pool, &req).await?;
    Ok(Json(question))
}

/// `GET /ques/{id}` — 단일 질문을 조회합니다.
pub async fn get_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<Question>, AppError> {
    let question = db::get_question(&state.pool, id)
        .await?
        // None(질문 없음)이면 NotFound 에러 → HTTP 404 응답
        .ok_or(AppError::NotFound)?;
    Ok(Json(question))
}

/// `PUT /ques/{id}` — 제목, 질문, 답변을 통째로 교체합니다. id는 바뀌지 않습니다.
pub async fn update_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
    Json(req): Json<QuestionPayload>,
) -> Result<Json<Question>, AppError> {
    let question = db::update_question(&state.pool, id, &req)
        .await?
        .ok_or(AppError::NotFound)?;
    Ok(Json(question))
}

/// `DELETE /ques/{id}` — 질문을 삭제합니다.
///
/// 성공 시 `{ "msg": "delete successfully" }`를 반환합니다.
pub async fn delete_question(
    State(state): State<AppState>,
    Path(id): Path<i64>,
) -> Result<Json<DeleteResponse>, AppError> {
    let deleted = db::delete_question(&state.pool, id).await?;
    if !deleted {
        return Err(AppError::NotFound);
    }
    Ok(Json(DeleteResponse::success()))
}
