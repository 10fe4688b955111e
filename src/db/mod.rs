//! # 데이터베이스 접근 계층 (Data Access Layer)
//!
//! 데이터베이스와 직접 상호작용하는 함수들을 모아둔 모듈입니다.
//! 라우트 핸들러(routes/)에서 이 모듈의 함수를 호출하여 DB 작업을 수행합니다.
//!
//! - `connect()` / `migrate()`: 연결 풀 생성과 스키마 자동 생성
//! - `questions`: 질문(Question) 테이블의 CRUD 쿼리

pub mod questions;

pub use questions::*;

use sqlx::sqlite::{SqliteConnectOptions, SqlitePool, SqlitePoolOptions};
use std::str::FromStr;

/// SQLite 연결 풀을 생성합니다.
///
/// 연결 풀(Connection Pool): 연결을 미리 만들어두고 요청마다 빌려 쓰는 패턴.
/// 각 쿼리는 풀에서 연결 하나를 빌리고, 작업이 끝나면(성공이든 실패든)
/// 연결 객체가 drop되면서 자동으로 풀에 반환됩니다.
///
/// `create_if_missing(true)`: 데이터베이스 파일이 없으면 새로 만듭니다.
pub async fn connect(database_url: &str) -> Result<SqlitePool, sqlx::Error> {
    let options = SqliteConnectOptions::from_str(database_url)?.create_if_missing(true);

    SqlitePoolOptions::new()
        .max_connections(5) // 최대 5개의 동시 연결을 유지
        .connect_with(options)
        .await
}

/// 메모리 전용 SQLite 풀을 생성합니다. (테스트용)
///
/// 인메모리 DB는 연결마다 별개의 데이터베이스이므로,
/// 연결을 1개로 고정하고 유휴 타임아웃으로 닫히지 않게 합니다.
pub async fn connect_in_memory() -> Result<SqlitePool, sqlx::Error> {
    SqlitePoolOptions::new()
        .max_connections(1)
        .idle_timeout(None)
        .max_lifetime(None)
        .connect("sqlite::memory:")
        .await
}

/// 아직 적용되지 않은 마이그레이션을 실행합니다.
///
/// `sqlx::migrate!`는 컴파일 타임에 ./migrations 폴더의 SQL 파일들을 바이너리에 포함시킵니다.
/// `question` 테이블이 없으면 이 단계에서 생성됩니다.
pub async fn migrate(pool: &SqlitePool) -> Result<(), sqlx::migrate::MigrateError> {
    sqlx::migrate!("./migrations").run(pool).await
}
