//! Database Connection Management Module
//!
//! 자격 증명 저장소(MongoDB) 연결을 담당합니다.
//! 연결 문자열과 데이터베이스 이름은 [`AppConfig`](crate::config::AppConfig)에서 전달됩니다.
//!
//! # 기본 사용법
//!
//! ```rust,ignore
//! use crate::db::Database;
//!
//! let database = Database::connect(&config.db_url, &config.database_name).await?;
//! let users = MongoUserRepository::new(&database);
//! ```

use mongodb::{Client, options::ClientOptions};
use log::info;
use crate::errors::{AppResult, ErrorContext};

/// MongoDB 데이터베이스 연결 래퍼
#[derive(Clone)]
pub struct Database {
    /// MongoDB 클라이언트 인스턴스 (내부적으로 연결 풀 공유)
    client: Client,
    /// 사용할 데이터베이스 이름
    database_name: String,
}

impl Database {
    /// 새 MongoDB 데이터베이스 연결을 생성합니다.
    ///
    /// 클라이언트를 초기화한 뒤 `ping`으로 연결 상태를 검증합니다.
    pub async fn connect(db_url: &str, database_name: &str) -> AppResult<Self> {
        let mut client_options = ClientOptions::parse(db_url)
            .await
            .storage_context("MongoDB URI 파싱 실패")?;

        // 모니터링에서 식별할 애플리케이션 이름
        client_options.app_name = Some("secrets_service".to_string());

        let client = Client::with_options(client_options)
            .storage_context("MongoDB 클라이언트 생성 실패")?;

        client
            .database(database_name)
            .run_command(mongodb::bson::doc! { "ping": 1 })
            .await
            .storage_context("MongoDB ping 실패")?;

        info!("✅ MongoDB 연결 성공: {}", database_name);

        Ok(Self {
            client,
            database_name: database_name.to_string(),
        })
    }

    /// 리포지토리에서 컬렉션에 접근할 때 사용하는 데이터베이스 핸들
    pub fn get_database(&self) -> mongodb::Database {
        self.client.database(&self.database_name)
    }
}
