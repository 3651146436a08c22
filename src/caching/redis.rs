//! # Redis 클라이언트 구현
//!
//! 폐기된 리프레시 토큰 목록 같은 TTL 기반 키를 다루는 얇은 래퍼입니다.
//! 값은 Serde 를 통해 JSON 문자열로 저장합니다.
//!
//! ## 연결 관리
//!
//! `ConnectionManager` 는 멀티플렉싱된 단일 연결을 공유하며,
//! 연결이 끊기면 자동으로 재연결합니다. 복제 비용이 작아 호출마다 clone 해서 씁니다.

use redis::aio::ConnectionManager;
use redis::{AsyncCommands, Client};
use serde::Serialize;

use crate::config::RedisConfig;

#[derive(Clone)]
pub struct RedisClient {
    manager: ConnectionManager,
}

impl RedisClient {
    /// Redis 에 연결하고 PING 으로 가용성을 확인합니다.
    pub async fn new(config: &RedisConfig) -> Result<Self, redis::RedisError> {
        let client = Client::open(config.url.as_str())?;
        let mut manager = ConnectionManager::new(client).await?;

        redis::cmd("PING").query_async::<()>(&mut manager).await?;
        log::info!("✅ Redis 연결 성공");

        Ok(Self { manager })
    }

    /// 키가 없을 때만 만료 시간과 함께 저장합니다. (`SET key value NX EX seconds`)
    ///
    /// 새로 저장했으면 `true`, 이미 키가 있었으면 `false` 를 돌려줍니다.
    pub async fn set_nx_with_expiry<T: Serialize>(&self, key: &str, value: &T, seconds: u64) -> Result<bool, redis::RedisError> {
        let mut conn = self.manager.clone();
        let json = serde_json::to_string(value)
            .map_err(|e| redis::RedisError::from((redis::ErrorKind::TypeError, "Serialization failed", e.to_string())))?;

        let reply: Option<String> = redis::cmd("SET")
            .arg(key)
            .arg(json)
            .arg("NX")
            .arg("EX")
            .arg(seconds)
            .query_async(&mut conn)
            .await?;

        Ok(reply.is_some())
    }

    pub async fn exists(&self, key: &str) -> Result<bool, redis::RedisError> {
        let mut conn = self.manager.clone();
        conn.exists(key).await
    }
}
