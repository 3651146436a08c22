//! 데이터 및 서버 설정 관리 모듈
//!
//! 실행 환경, 서버 바인딩, MongoDB, Redis, Rate Limiting, CORS 설정을 관리합니다.
//! 모든 설정은 [`EnvLookup`]을 통해 읽으므로 테스트에서 프로세스 환경변수를
//! 건드리지 않고 원하는 값을 주입할 수 있습니다.

use super::{parse_or, EnvLookup};

/// 애플리케이션 실행 환경
#[derive(Debug, Clone, PartialEq)]
pub enum Environment {
    Development,
    Test,
    Staging,
    Production,
}

impl Environment {
    /// `ENVIRONMENT` 값을 해석합니다. 값이 없으면 가장 엄격한 Production 으로 간주합니다.
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        lookup("ENVIRONMENT")
            .map(|value| Self::from_str(&value))
            .unwrap_or(Environment::Production)
    }

    pub fn from_str(s: &str) -> Self {
        match s.to_lowercase().as_str() {
            "development" | "dev" => Environment::Development,
            "test" | "testing" => Environment::Test,
            "staging" | "stage" => Environment::Staging,
            _ => Environment::Production,
        }
    }

    pub fn is_production(&self) -> bool {
        matches!(self, Environment::Production)
    }
}

/// HTTP 서버 바인딩 설정
#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub workers: usize,
}

impl ServerConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        Self {
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port: parse_or(lookup, "PORT", 8000),
            workers: parse_or(lookup, "WORKERS", 4),
        }
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

/// MongoDB 연결 설정
#[derive(Debug, Clone)]
pub struct DatabaseConfig {
    pub uri: String,
    pub database_name: String,
}

impl DatabaseConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        Self {
            uri: lookup("MONGODB_URI").unwrap_or_else(|| "mongodb://localhost:27017".to_string()),
            database_name: lookup("DATABASE_NAME").unwrap_or_else(|| "herm_auth".to_string()),
        }
    }
}

/// Redis 연결 설정
#[derive(Debug, Clone)]
pub struct RedisConfig {
    pub url: String,
}

impl RedisConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        Self {
            url: lookup("REDIS_URL").unwrap_or_else(|| "redis://localhost:6379".to_string()),
        }
    }
}

/// Rate Limiting 설정
///
/// 전역 제한과 로그인/가입/토큰 갱신 경로에만 적용되는 더 엄격한 제한을 함께 가집니다.
///
/// ```bash
/// RATE_LIMIT_PER_SECOND=100
/// RATE_LIMIT_BURST_SIZE=200
/// LOGIN_RATE_LIMIT_SECONDS=60   # 요청 1회가 보충되는 주기 (초)
/// LOGIN_RATE_LIMIT_BURST=5
/// ```
#[derive(Debug, Clone)]
pub struct RateLimitConfig {
    pub per_second: u64,
    pub burst_size: u32,
    pub login_seconds_per_request: u64,
    pub login_burst_size: u32,
}

impl RateLimitConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        Self {
            per_second: parse_or(lookup, "RATE_LIMIT_PER_SECOND", 100),
            burst_size: parse_or(lookup, "RATE_LIMIT_BURST_SIZE", 200),
            login_seconds_per_request: parse_or(lookup, "LOGIN_RATE_LIMIT_SECONDS", 60),
            login_burst_size: parse_or(lookup, "LOGIN_RATE_LIMIT_BURST", 5),
        }
    }
}

/// CORS 허용 Origin 설정
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
}

impl CorsConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let allowed_origins = match lookup("CORS_ORIGINS") {
            Some(raw) => raw
                .split(',')
                .map(|origin| origin.trim().to_string())
                .filter(|origin| !origin.is_empty())
                .collect(),
            None => vec![
                "http://localhost:3000".to_string(),
                "http://127.0.0.1:3000".to_string(),
            ],
        };

        Self { allowed_origins }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashMap;

    fn lookup_from(pairs: &[(&str, &str)]) -> impl Fn(&str) -> Option<String> {
        let map: HashMap<String, String> = pairs
            .iter()
            .map(|(k, v)| (k.to_string(), v.to_string()))
            .collect();
        move |key| map.get(key).cloned()
    }

    #[test]
    fn test_environment_from_string() {
        assert_eq!(Environment::from_str("development"), Environment::Development);
        assert_eq!(Environment::from_str("DEV"), Environment::Development);
        assert_eq!(Environment::from_str("test"), Environment::Test);
        assert_eq!(Environment::from_str("stage"), Environment::Staging);
        assert_eq!(Environment::from_str("production"), Environment::Production);
        assert_eq!(Environment::from_str("unknown"), Environment::Production);
    }

    #[test]
    fn test_environment_defaults_to_production() {
        let lookup = lookup_from(&[]);
        assert!(Environment::from_lookup(&lookup).is_production());
    }

    #[test]
    fn test_server_config_defaults() {
        let lookup = lookup_from(&[]);
        let server = ServerConfig::from_lookup(&lookup);

        assert_eq!(server.bind_address(), "0.0.0.0:8000");
        assert_eq!(server.workers, 4);
    }

    #[test]
    fn test_server_config_invalid_port_falls_back() {
        let lookup = lookup_from(&[("PORT", "eighty"), ("HOST", "127.0.0.1")]);
        let server = ServerConfig::from_lookup(&lookup);

        assert_eq!(server.bind_address(), "127.0.0.1:8000");
    }

    #[test]
    fn test_rate_limit_overrides() {
        let lookup = lookup_from(&[
            ("RATE_LIMIT_PER_SECOND", "20"),
            ("LOGIN_RATE_LIMIT_BURST", "3"),
        ]);
        let rate_limit = RateLimitConfig::from_lookup(&lookup);

        assert_eq!(rate_limit.per_second, 20);
        assert_eq!(rate_limit.burst_size, 200);
        assert_eq!(rate_limit.login_seconds_per_request, 60);
        assert_eq!(rate_limit.login_burst_size, 3);
    }

    #[test]
    fn test_cors_origins_are_split_and_trimmed() {
        let lookup = lookup_from(&[("CORS_ORIGINS", "https://app.herm.io, https://admin.herm.io,")]);
        let cors = CorsConfig::from_lookup(&lookup);

        assert_eq!(
            cors.allowed_origins,
            vec!["https://app.herm.io".to_string(), "https://admin.herm.io".to_string()]
        );
    }
}
