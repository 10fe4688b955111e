//! # 질문(Question) 데이터베이스 쿼리 모듈
//!
//! `question` 테이블에 대한 CRUD 쿼리 함수들입니다.
//! 모든 함수는 `SqlitePool` 참조를 받아 비동기로 실행되며,
//! 각 함수는 단일 SQL 문 하나로 끝나는 원자적 읽기/쓰기입니다.
//!
//! ## 반환값 규칙
//! - 조회/수정: `Ok(None)` → 해당 id가 없음 (404 처리는 라우트 핸들러에 위임)
//! - 삭제: `Ok(false)` → 해당 id가 없음

use crate::error::AppError;
use crate::models::*;
use sqlx::{types::Json, SqlitePool};

/// 모든 질문을 id(삽입) 순으로 조회합니다.
pub async fn list_questions(pool: &SqlitePool) -> Result<Vec<Question>, AppError> {
    let questions = sqlx::query_as::<_, Question>(
        "SELECT id, title, question, answers FROM question ORDER BY id",
    )
    .fetch_all(pool)
    .await?;

    Ok(questions)
}

/// 저장된 질문 수를 셉니다. (관리자 목록 화면 제목의 개수)
pub async fn count_questions(pool: &SqlitePool) -> Result<i64, AppError> {
    // query_scalar: 첫 번째 컬럼 하나만 꺼내는 쿼리
    let count = sqlx::query_scalar::<_, i64>("SELECT COUNT(*) FROM question")
        .fetch_one(pool)
        .await?;

    Ok(count)
}

/// id로 질문 하나를 조회합니다.
///
/// `fetch_optional`은 결과가 0행이면 None, 1행이면 Some(Question)을 반환합니다.
pub async fn get_question(pool: &SqlitePool, id: i64) -> Result<Option<Question>, AppError> {
    let question = sqlx::query_as::<_, Question>(
        "SELECT id, title, question, answers FROM question WHERE id = ?",
    )
    .bind(id)
    .fetch_optional(pool)
    .await?;

    Ok(question)
}

/// 새 질문을 저장하고 저장된 레코드 전체를 반환합니다.
///
/// id는 SQLite의 AUTOINCREMENT가 발급합니다. 삭제된 id는 재사용되지 않습니다.
/// `RETURNING`으로 INSERT 한 문장 안에서 발급된 id와 저장된 값을 함께 돌려받습니다.
/// `Json(&req.answers)`: 답변 배열을 JSON 텍스트로 직렬화하여 바인딩합니다.
pub async fn create_question(
    pool: &SqlitePool,
    req: &QuestionPayload,
) -> Result<Question, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        INSERT INTO question (title, question, answers) VALUES (?, ?, ?)
        RETURNING id, title, question, answers
        "#,
    )
    .bind(&req.title)
    .bind(&req.question)
    .bind(Json(&req.answers))
    .fetch_one(pool)
    .await?;

    tracing::debug!(id = question.id, "created question");
    Ok(question)
}

/// id를 제외한 모든 필드를 통째로 교체합니다.
///
/// ## 반환값
/// - `Ok(Some(Question))`: 수정 성공, 변경된 레코드
/// - `Ok(None)`: 해당 id가 없음 (WHERE에 맞는 행이 없어 아무것도 바뀌지 않음)
pub async fn update_question(
    pool: &SqlitePool,
    id: i64,
    req: &QuestionPayload,
) -> Result<Option<Question>, AppError> {
    let question = sqlx::query_as::<_, Question>(
        r#"
        UPDATE question SET title = ?, question = ?, answers = ?
        WHERE id = ?
        RETURNING id, title, question, answers
        "#,
    )
    .bind(&req.title)
    .bind(&req.question)
    .bind(Json(&req.answers))
    .bind(id)
    .fetch_optional(pool)
    .await?;

    if question.is_some() {
        tracing::debug!(id, "updated question");
    }
    Ok(question)
}

/// id로 질문을 삭제합니다.
///
/// ## 반환값
/// - `true`: 삭제 성공
/// - `false`: 해당 id가 없어 삭제된 행이 없음
pub async fn delete_question(pool: &SqlitePool, id: i64) -> Result<bool, AppError> {
    let result = sqlx::query("DELETE FROM question WHERE id = ?")
        .bind(id)
        .execute(pool)
        .await?;

    let deleted = result.rows_affected() > 0;
    if deleted {
        tracing::debug!(id, "deleted question");
    }
    Ok(deleted)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::{connect_in_memory, migrate};

    async fn test_pool() -> SqlitePool {
        let pool = connect_in_memory().await.unwrap();
        migrate(&pool).await.unwrap();
        pool
    }

    fn payload(title: &str, question: &str, answers: &[&str]) -> QuestionPayload {
        QuestionPayload {
            title: title.to_string(),
            question: question.to_string(),
            answers: answers.iter().map(|a| a.to_string()).collect(),
        }
    }

    #[tokio::test]
    async fn create_then_get_returns_same_fields() {
        let pool = test_pool().await;
        let created = create_question(&pool, &payload("Cold", "What is cold?", &["low temperature"]))
            .await
            .unwrap();

        assert_eq!(created.id, 1);
        assert_eq!(created.answers, vec!["low temperature".to_string()]);

        let fetched = get_question(&pool, created.id).await.unwrap();
        assert_eq!(fetched, Some(created));
    }

    #[tokio::test]
    async fn answers_keep_their_order_and_may_be_empty() {
        let pool = test_pool().await;
        let many = create_question(&pool, &payload("Heat", "What is heat?", &["b", "a", "c"]))
            .await
            .unwrap();
        let none = create_question(&pool, &payload("Pain", "What is pain?", &[]))
            .await
            .unwrap();

        assert_eq!(many.answers, vec!["b", "a", "c"]);
        assert!(none.answers.is_empty());
    }

    #[tokio::test]
    async fn delete_removes_record_and_second_delete_reports_absent() {
        let pool = test_pool().await;
        let created = create_question(&pool, &payload("Cold", "What is cold?", &[]))
            .await
            .unwrap();

        assert!(delete_question(&pool, created.id).await.unwrap());
        assert_eq!(get_question(&pool, created.id).await.unwrap(), None);
        assert!(!delete_question(&pool, created.id).await.unwrap());
    }

    #[tokio::test]
    async fn update_replaces_fields_but_not_id() {
        let pool = test_pool().await;
        let created = create_question(&pool, &payload("Cold", "What is cold?", &["low"]))
            .await
            .unwrap();

        let updated = update_question(&pool, created.id, &payload("Hot", "What is hot?", &[]))
            .await
            .unwrap()
            .unwrap();

        assert_eq!(updated.id, created.id);
        assert_eq!(updated.title, "Hot");
        assert_eq!(updated.question, "What is hot?");
        assert!(updated.answers.is_empty());
    }

    #[tokio::test]
    async fn update_of_missing_id_changes_nothing() {
        let pool = test_pool().await;
        let created = create_question(&pool, &payload("Cold", "What is cold?", &["low"]))
            .await
            .unwrap();

        let result = update_question(&pool, 999, &payload("Hot", "What is hot?", &[]))
            .await
            .unwrap();
        assert_eq!(result, None);
        assert_eq!(list_questions(&pool).await.unwrap(), vec![created]);
    }

    #[tokio::test]
    async fn count_tracks_creates_and_deletes() {
        let pool = test_pool().await;
        assert_eq!(count_questions(&pool).await.unwrap(), 0);

        let first = create_question(&pool, &payload("A", "a?", &[])).await.unwrap();
        create_question(&pool, &payload("B", "b?", &[])).await.unwrap();
        assert_eq!(list_questions(&pool).await.unwrap().len(), 2);

        delete_question(&pool, first.id).await.unwrap();
        assert_eq!(count_questions(&pool).await.unwrap(), 1);
    }

    #[tokio::test]
    async fn deleted_ids_are_never_reissued() {
        let pool = test_pool().await;
        let first = create_question(&pool, &payload("A", "a?", &[])).await.unwrap();
        let second = create_question(&pool, &payload("B", "b?", &[])).await.unwrap();
        delete_question(&pool, second.id).await.unwrap();

        let third = create_question(&pool, &payload("C", "c?", &[])).await.unwrap();
        assert!(third.id > second.id);
        assert_ne!(third.id, first.id);
    }
}
