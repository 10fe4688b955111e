//! # HTML 템플릿 로딩
//!
//! `templates/` 폴더의 Tera 템플릿을 `include_str!`로 바이너리에 포함시킵니다.
//! 실행 위치(작업 디렉토리)와 상관없이 같은 템플릿을 사용할 수 있습니다.
//!
//! `autoescape_on(vec![".html"])`: `.html`로 끝나는 템플릿에서는
//! `{{ 변수 }}`로 출력하는 모든 값이 자동으로 HTML 이스케이프됩니다.

use tera::Tera;

/// 포함된 템플릿 (이름, 내용) 목록
const TEMPLATES: [(&str, &str); 5] = [
    ("layout.html", include_str!("../../templates/layout.html")),
    ("list.html", include_str!("../../templates/list.html")),
    ("edit.html", include_str!("../../templates/edit.html")),
    ("not_found.html", include_str!("../../templates/not_found.html")),
    ("swagger.html", include_str!("../../templates/swagger.html")),
];

/// 모든 템플릿을 파싱한 Tera 인스턴스를 만듭니다.
///
/// `add_raw_templates`는 전부 추가한 뒤 상속(`{% extends %}`) 관계를 한 번에 구성합니다.
pub fn load() -> Result<Tera, tera::Error> {
    let mut tera = Tera::default();
    tera.add_raw_templates(TEMPLATES.to_vec())?;
    tera.autoescape_on(vec![".html"]);
    Ok(tera)
}
