//! # Question Store
//!
//! 질문(Question) 하나의 엔티티를 SQLite 테이블 하나에 저장하는 CRUD HTTP 서비스입니다.
//!
//! - REST API: `GET /`, `POST /`, `GET|PUT|DELETE /ques/{id}`
//! - 관리자 화면: `/admin`
//! - API 문서: `/openapi.json`, `/docs`
//!
//! `main.rs`는 설정/로깅/DB 준비만 하고, 라우터 구성은 `build_router()`가 담당합니다.
//! 통합 테스트(tests/)도 같은 `build_router()`로 서버를 띄웁니다.

pub mod config;
pub mod db;
pub mod error;
pub mod models;
pub mod routes;
pub mod services;

use axum::{
    routing::{get, post},
    Router,
};
use tower_http::{
    cors::{Any, CorsLayer},
    trace::TraceLayer,
};

pub use routes::AppState;

/// 모든 라우트와 미들웨어를 조립한 라우터를 만듭니다.
///
/// 경로 파라미터는 axum 0.8 문법인 `{id}`를 사용합니다.
pub fn build_router(state: AppState) -> Router {
    let admin_routes = Router::new()
        .route("/admin", get(routes::admin_index))
        .route("/admin/questions", post(routes::admin_create))
        .route(
            "/admin/questions/{id}",
            get(routes::admin_edit).post(routes::admin_update),
        )
        .route(
            "/admin/questions/{id}/delete",
            post(routes::admin_delete),
        );

    let app = Router::new()
        // 질문 REST API
        .route(
            "/",
            get(routes::list_questions).post(routes::create_question),
        )
        .route(
            "/ques/{id}",
            get(routes::get_question)
                .put(routes::update_question)
                .delete(routes::delete_question),
        )
        // API 문서
        .route("/openapi.json", get(routes::openapi_json))
        .route("/docs", get(routes::swagger_ui))
        .route("/health", get(routes::health_check))
        .merge(admin_routes)
        .with_state(state);

    // 개발 편의를 위해 모든 출처/메서드/헤더를 허용합니다.
    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    app.layer(cors).layer(TraceLayer::new_for_http())
}
