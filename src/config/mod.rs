//! # Configuration Module
//!
//! 인증 서비스의 설정 관리를 담당하는 모듈입니다.
//! 프로세스 시작 시 [`AppConfig::from_env`]로 한 번 로드한 뒤,
//! 필요한 하위 설정을 각 컴포넌트 생성자에 명시적으로 전달합니다.
//! 전역 정적 설정은 두지 않습니다.
//!
//! ## 모듈 구성
//!
//! - [`data_config`] - 실행 환경, 서버, MongoDB, Redis, Rate Limiting, CORS 설정
//! - [`auth_config`] - JWT, bcrypt, 계정 토큰, OAuth 클라이언트 설정
//!
//! ## 사용 예제
//!
//! ```rust,ignore
//! use herm_auth_service::config::AppConfig;
//! use herm_auth_service::services::auth::{PasswordCodec, TokenService};
//!
//! let config = AppConfig::from_env()?;
//! let codec = PasswordCodec::new(&config.password);
//! let tokens = TokenService::new(config.jwt.clone());
//! ```

pub mod data_config;
pub mod auth_config;

pub use data_config::*;
pub use auth_config::*;

use std::env;
use std::fmt::Display;
use std::str::FromStr;

use crate::core::errors::AppResult;

/// 설정 키로 값을 조회하는 함수
///
/// 운영에서는 프로세스 환경변수를, 테스트에서는 `HashMap` 기반 클로저를 넘깁니다.
pub type EnvLookup<'a> = &'a dyn Fn(&str) -> Option<String>;

/// 값을 파싱하고, 없거나 파싱에 실패하면 기본값을 돌려줍니다.
pub(crate) fn parse_or<T>(lookup: EnvLookup, key: &str, default: T) -> T
where
    T: FromStr + Display,
    T::Err: Display,
{
    match lookup(key) {
        Some(raw) => raw.trim().parse::<T>().unwrap_or_else(|e| {
            log::error!("{} 파싱 실패: {}. 기본값 {} 사용", key, e, default);
            default
        }),
        None => default,
    }
}

/// 애플리케이션 전체 설정
#[derive(Debug, Clone)]
pub struct AppConfig {
    pub environment: Environment,
    pub server: ServerConfig,
    pub database: DatabaseConfig,
    pub redis: RedisConfig,
    pub jwt: JwtConfig,
    pub password: PasswordConfig,
    pub account: AccountConfig,
    pub oauth: OAuthConfig,
    pub rate_limit: RateLimitConfig,
    pub cors: CorsConfig,
}

impl AppConfig {
    pub const SERVICE_NAME: &'static str = "Email Integration Service";

    /// 프로세스 환경변수에서 설정을 로드합니다.
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(&|key: &str| env::var(key).ok())
    }

    pub fn from_lookup(lookup: EnvLookup) -> AppResult<Self> {
        let environment = Environment::from_lookup(lookup);

        Ok(Self {
            server: ServerConfig::from_lookup(lookup),
            database: DatabaseConfig::from_lookup(lookup),
            redis: RedisConfig::from_lookup(lookup),
            jwt: JwtConfig::from_lookup(lookup, &environment)?,
            password: PasswordConfig::from_lookup(lookup, &environment),
            account: AccountConfig::from_lookup(lookup),
            oauth: OAuthConfig::from_lookup(lookup),
            rate_limit: RateLimitConfig::from_lookup(lookup),
            cors: CorsConfig::from_lookup(lookup),
            environment,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    #[test]
    fn test_app_config_from_lookup() {
        let map: HashMap<&str, &str> = HashMap::from([
            ("ENVIRONMENT", "staging"),
            ("SECRET_KEY", "staging-secret"),
            ("DATABASE_NAME", "herm_staging"),
        ]);
        let lookup = |key: &str| map.get(key).map(|v| v.to_string());

        let config = AppConfig::from_lookup(&lookup).unwrap();

        assert_eq!(config.environment, Environment::Staging);
        assert_eq!(config.jwt.secret, "staging-secret");
        assert_eq!(config.password.bcrypt_cost, 10);
        assert_eq!(config.database.database_name, "herm_staging");
        assert_eq!(config.redis.url, "redis://localhost:6379");
    }

    #[test]
    fn test_app_config_rejects_missing_secret_in_production() {
        let lookup = |_: &str| -> Option<String> { None };
        assert!(AppConfig::from_lookup(&lookup).is_err());
    }

    #[test]
    fn test_parse_or_falls_back_on_garbage() {
        let lookup = |_: &str| Some("not-a-number".to_string());
        assert_eq!(parse_or(&lookup, "PORT", 8000u16), 8000);
    }
}
