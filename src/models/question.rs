//! # 질문(Question) 모델 정의
//!
//! ## 구조체 역할
//! - `Question`: 데이터베이스에 저장된 질문 한 건 (응답용)
//! - `QuestionPayload`: 생성/수정 시 클라이언트가 보내는 JSON 본문
//! - `DeleteResponse`: 삭제 성공 시 응답 본문

use crate::error::AppError;
use serde::{Deserialize, Serialize};

/// 삭제 성공 시 돌려주는 고정 메시지
pub const DELETE_MESSAGE: &str = "delete successfully";

/// 질문 엔티티 — DB의 `question` 테이블 한 행(row)에 대응합니다.
///
/// - `sqlx::FromRow`: SQL 쿼리 결과(행)를 이 구조체로 자동 매핑합니다
/// - `#[sqlx(json)]`: TEXT 컬럼에 저장된 JSON 배열을 `Vec<String>`으로 디코딩합니다
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, sqlx::FromRow)]
pub struct Question {
    /// 저장소가 생성 시 발급하는 정수 id (이후 변경 불가)
    pub id: i64,
    pub title: String,
    pub question: String,
    /// 답변 목록. 순서가 유지되며 비어 있을 수 있습니다.
    #[sqlx(json)]
    pub answers: Vec<String>,
}

/// 질문 생성/수정 요청 — `POST /`와 `PUT /ques/{id}`의 요청 본문입니다.
///
/// `id` 필드는 받지 않습니다. 본문에 `id`가 있어도 serde가 모르는 필드로 무시하므로
/// 저장소가 발급한 id는 절대 바뀌지 않습니다.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionPayload {
    pub title: String,
    pub question: String,
    /// `#[serde(default)]`: 필드가 없으면 빈 Vec으로 채웁니다.
    #[serde(default)]
    pub answers: Vec<String>,
}

/// 관리자 화면 HTML 폼 본문 (`application/x-www-form-urlencoded`)
///
/// - `answers`: 기존 답변. 답변마다 `<textarea>` 하나이며 같은 이름이 반복됩니다.
/// - `remove`: 지울 기존 답변의 인덱스(체크박스)
/// - `new_answers`: 새로 추가할 답변. 한 줄에 하나씩 적습니다.
///
/// 같은 키가 여러 번 나오는 폼은 구조체로 바로 역직렬화할 수 없으므로
/// `(키, 값)` 쌍 목록을 받아 `from_pairs()`로 조립합니다.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct QuestionForm {
    pub title: String,
    pub question: String,
    pub answers: Vec<String>,
    pub remove: Vec<usize>,
    pub new_answers: String,
}

impl QuestionForm {
    /// 폼 필드 쌍을 순서대로 읽어 `QuestionForm`을 만듭니다.
    ///
    /// `title`, `question`이 없거나 `remove` 값이 숫자가 아니면 `AppError::BadRequest`.
    pub fn from_pairs(pairs: Vec<(String, String)>) -> Result<Self, AppError> {
        let mut title = None;
        let mut question = None;
        let mut form = QuestionForm::default();

        for (key, value) in pairs {
            match key.as_str() {
                "title" => title = Some(value),
                "question" => question = Some(value),
                "answers" => form.answers.push(value),
                "remove" => {
                    let index = value
                        .parse()
                        .map_err(|_| AppError::BadRequest(format!("invalid remove index `{value}`")))?;
                    form.remove.push(index);
                }
                "new_answers" => form.new_answers = value,
                _ => {}
            }
        }

        form.title = title.ok_or_else(|| AppError::BadRequest("missing field `title`".into()))?;
        form.question =
            question.ok_or_else(|| AppError::BadRequest("missing field `question`".into()))?;
        Ok(form)
    }

    /// 폼 입력을 REST 요청과 같은 `QuestionPayload`로 변환합니다.
    ///
    /// 기존 답변은 자르거나 버리지 않고 그대로 유지합니다. 브라우저가 textarea 줄바꿈을
    /// CRLF로 보내므로 `\r\n`만 `\n`으로 되돌립니다. 새 답변은 줄마다 앞뒤 공백을 자르고
    /// 빈 줄은 버린 뒤 뒤에 붙입니다.
    pub fn into_payload(self) -> QuestionPayload {
        let remove = self.remove;
        let mut answers: Vec<String> = self
            .answers
            .into_iter()
            .enumerate()
            .filter(|(index, _)| !remove.contains(index))
            .map(|(_, answer)| answer.replace("\r\n", "\n"))
            .collect();

        answers.extend(
            self.new_answers
                .lines()
                .map(str::trim)
                .filter(|line| !line.is_empty())
                .map(String::from),
        );

        QuestionPayload {
            title: self.title,
            question: self.question,
            answers,
        }
    }
}

/// `DELETE /ques/{id}` 응답 — `{ "msg": "delete successfully" }`
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct DeleteResponse {
    pub msg: String,
}

impl DeleteResponse {
    pub fn success() -> Self {
        Self {
            msg: DELETE_MESSAGE.to_string(),
        }
    }
}
