//! # 서비스 모듈
//!
//! 라우트 핸들러가 사용하는, DB와 무관한 보조 로직입니다.
//! - `templates`: Tera 템플릿 로딩
//! - `admin_page`: 관리자 화면 HTML 렌더링
//! - `openapi`: OpenAPI 문서와 Swagger UI 페이지

pub mod admin_page;
pub mod openapi;
pub mod templates;
