//! 캐싱 계층 모듈
//!
//! Redis 를 백엔드로 하는 TTL 키 저장소를 제공합니다.
//! 현재는 로그아웃/토큰 회전으로 폐기된 리프레시 토큰을 기록하는 데 사용합니다.
//!
//! # 사용 예제
//!
//! ```rust,ignore
//! use crate::caching::redis::RedisClient;
//!
//! let redis = RedisClient::new(&config.redis).await?;
//! let newly_set = redis.set_nx_with_expiry("revoked_token:<jti>", &info, 3600).await?;
//! let revoked = redis.exists("revoked_token:<jti>").await?;
//! ```
//!
//! # 환경 설정
//!
//! ```bash
//! REDIS_URL=redis://localhost:6379  # 기본값
//! ```

pub mod redis;
