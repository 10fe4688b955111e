//! # Question Store 웹 서버 진입점
//!
//! 이 파일이 수행하는 작업:
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. SQLite 데이터베이스 연결 풀 생성 (파일이 없으면 생성)
//! 4. 데이터베이스 마이그레이션 실행 (`question` 테이블 자동 생성)
//! 5. 라우터 설정
//! 6. HTTP 서버 시작

use anyhow::Result; // anyhow::Result: 어떤 에러 타입이든 담을 수 있는 범용 Result 타입
use question_store::{build_router, config::Config, db, AppState};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "question_store=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();
    tracing::info!("Starting {} on {}", config.app_title, config.bind_addr());

    // ── 4단계: SQLite 연결 풀 생성 ──
    let pool = db::connect(&config.database_url).await?;

    // ── 5단계: 마이그레이션 ──
    tracing::info!("Running database migrations...");
    db::migrate(&pool).await?;

    // ── 6단계: 템플릿 로딩 + 라우터 ──
    let state = AppState::new(pool, config.app_title.clone())?;
    let app = build_router(state);

    // ── 7단계: 서버 시작 ──
    let addr = config.bind_addr();
    let listener = tokio::net::TcpListener::bind(&addr).await?;
    tracing::info!("Server listening on {}", addr);

    axum::serve(listener, app).await?;

    Ok(())
}
