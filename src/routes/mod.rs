//! # 라우트 핸들러 모듈
//!
//! HTTP 요청을 처리하는 핸들러 함수들을 모아둔 모듈입니다.
//!
//! 각 하위 모듈:
//! - `questions`: 질문 REST API (목록/생성/조회/수정/삭제)
//! - `admin`: 관리자 HTML 화면
//! - `docs`: OpenAPI 문서와 Swagger UI
//! - `health`: 서버 상태 확인 (헬스체크)

pub mod admin;
pub mod docs;
pub mod health;
pub mod questions;

pub use admin::*;
pub use docs::*;
pub use health::*;
pub use questions::*;
