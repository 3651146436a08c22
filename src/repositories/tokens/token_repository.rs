//! 폐기된 리프레시 토큰 저장소
//!
//! 로그아웃과 리프레시 회전 시 사용된 리프레시 토큰을 Redis 에 기록합니다.
//! 키는 토큰의 `jti` 클레임이고, TTL 은 토큰의 남은 수명과 같습니다.
//! 토큰이 자연 만료되면 키도 함께 사라집니다.
//!
//! 폐기는 `SET NX` 한 번으로 이루어지므로, 같은 토큰으로 동시에 들어온
//! 갱신 요청 중 하나만 폐기에 성공합니다.

use std::sync::Arc;

use async_trait::async_trait;
use chrono::Utc;
use serde::{Deserialize, Serialize};

use crate::caching::redis::RedisClient;
use crate::core::errors::AppResult;

const KEY_PREFIX: &str = "revoked_token";

/// 폐기 토큰 저장소 인터페이스
#[async_trait]
pub trait RevokedTokenStore: Send + Sync {
    /// 토큰을 폐기 목록에 올립니다.
    ///
    /// 이번 호출로 처음 폐기했으면 `true`, 이미 폐기되어 있었으면 `false` 입니다.
    /// `ttl_seconds` 가 0 이하인 토큰은 이미 만료되었으므로 기록하지 않고 `false` 를 돌려줍니다.
    async fn revoke(&self, jti: &str, ttl_seconds: i64) -> AppResult<bool>;

    async fn is_revoked(&self, jti: &str) -> AppResult<bool>;
}

/// 폐기 기록 값
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct RevokedTokenInfo {
    /// 폐기 시각 (Unix timestamp)
    pub revoked_at: i64,
}

pub struct TokenRepository {
    redis: Arc<RedisClient>,
}

impl TokenRepository {
    pub fn new(redis: Arc<RedisClient>) -> Self {
        Self { redis }
    }
}

/// Redis 키: `revoked_token:{jti}`
pub fn revoked_token_key(jti: &str) -> String {
    format!("{}:{}", KEY_PREFIX, jti)
}

#[async_trait]
impl RevokedTokenStore for TokenRepository {
    async fn revoke(&self, jti: &str, ttl_seconds: i64) -> AppResult<bool> {
        if ttl_seconds <= 0 {
            return Ok(false);
        }

        let info = RevokedTokenInfo {
            revoked_at: Utc::now().timestamp(),
        };

        let newly_revoked = self.redis
            .set_nx_with_expiry(&revoked_token_key(jti), &info, ttl_seconds as u64)
            .await?;

        log::debug!("리프레시 토큰 폐기 기록: jti={} 신규={} (TTL {}초)", jti, newly_revoked, ttl_seconds);
        Ok(newly_revoked)
    }

    async fn is_revoked(&self, jti: &str) -> AppResult<bool> {
        Ok(self.redis.exists(&revoked_token_key(jti)).await?)
    }
}
