//! # 관리자 화면 HTML 렌더링
//!
//! `/admin` 아래의 페이지를 Tera 템플릿(`list.html`, `edit.html`, `not_found.html`)으로
//! 렌더링합니다. 사용자 입력은 템플릿의 autoescape가 이스케이프합니다.

use crate::models::Question;
use tera::{Context, Tera};

/// 질문 목록 + 새 질문 생성 폼 페이지
///
/// `count`는 목록 길이가 아니라 저장소가 센 레코드 수입니다.
pub fn render_list(
    tera: &Tera,
    app_title: &str,
    questions: &[Question],
    count: i64,
) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("app_title", app_title);
    context.insert("questions", questions);
    context.insert("count", &count);
    tera.render("list.html", &context)
}

/// 질문 하나를 수정하는 폼 페이지
///
/// 답변마다 `<textarea name="answers">`를 하나씩 두어
/// 줄바꿈, 앞뒤 공백, 빈 문자열이 그대로 왕복되게 합니다.
pub fn render_edit(tera: &Tera, app_title: &str, question: &Question) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("app_title", app_title);
    context.insert("question", question);
    tera.render("edit.html", &context)
}

/// 없는 id를 요청했을 때의 페이지
pub fn render_not_found(tera: &Tera, app_title: &str, id: i64) -> Result<String, tera::Error> {
    let mut context = Context::new();
    context.insert("app_title", app_title);
    context.insert("id", &id);
    tera.render("not_found.html", &context)
}
