//! # Authentication Configuration Module
//!
//! JWT 서명, 비밀번호 해싱, 계정 토큰(비밀번호 재설정, 이메일 인증),
//! 이메일 프로바이더 OAuth 클라이언트 설정을 관리합니다.
//! 각 설정은 한 번 로드된 뒤 생성자 인자로 명시적으로 전달됩니다.
//!
//! ## 필수 환경 변수 설정
//!
//! ### JWT 토큰 설정
//! ```bash
//! export SECRET_KEY="your-super-secret-jwt-key"   # production 에서는 필수
//! export ACCESS_TOKEN_EXPIRE_MINUTES="30"
//! export REFRESH_TOKEN_EXPIRE_DAYS="7"          # 1 ~ 365
//! ```
//!
//! ### 계정 토큰 설정
//! ```bash
//! export FRONTEND_URL="http://localhost:3000"
//! export PASSWORD_RESET_EXPIRE_HOURS="24"       # 1 ~ 168
//! export EMAIL_VERIFICATION_EXPIRE_HOURS="24"   # 1 ~ 168
//! ```
//!
//! ### OAuth 클라이언트 설정
//! ```bash
//! export GOOGLE_CLIENT_ID="..."
//! export GOOGLE_CLIENT_SECRET="..."
//! export GOOGLE_REDIRECT_URI="http://localhost:8000/herm-auth/api/v1/oauth/google/callback"
//! # MICROSOFT_*, YAHOO_* 도 동일한 형식
//! ```

use super::{parse_or, EnvLookup, Environment};
use crate::core::errors::{AppError, AppResult};

const DEV_SECRET_KEY: &str = "herm-dev-secret-key";

/// JWT 서명 및 만료 설정
///
/// 알고리즘은 HS256 으로 고정입니다.
#[derive(Debug, Clone)]
pub struct JwtConfig {
    pub secret: String,
    pub access_token_expire_minutes: i64,
    pub refresh_token_expire_days: i64,
}

impl JwtConfig {
    pub const DEFAULT_ACCESS_MINUTES: i64 = 30;
    pub const DEFAULT_REFRESH_DAYS: i64 = 7;
    pub const MAX_ACCESS_MINUTES: i64 = 24 * 60;
    pub const MAX_REFRESH_DAYS: i64 = 365;

    /// 서명 키와 기본 만료 시간으로 설정을 만듭니다.
    pub fn new(secret: impl Into<String>) -> Self {
        Self {
            secret: secret.into(),
            access_token_expire_minutes: Self::DEFAULT_ACCESS_MINUTES,
            refresh_token_expire_days: Self::DEFAULT_REFRESH_DAYS,
        }
    }

    /// # Errors
    ///
    /// * production 환경에서 `SECRET_KEY` 가 비어 있으면 `AppError::InternalError`
    pub fn from_lookup(lookup: EnvLookup, environment: &Environment) -> AppResult<Self> {
        let secret = match lookup("SECRET_KEY").filter(|s| !s.is_empty()) {
            Some(secret) => secret,
            None if environment.is_production() => {
                return Err(AppError::InternalError(
                    "SECRET_KEY must be set in production".to_string(),
                ));
            }
            None => {
                log::warn!("SECRET_KEY not set, using default (not secure for production!)");
                DEV_SECRET_KEY.to_string()
            }
        };

        let access_token_expire_minutes = bounded_or(
            lookup,
            "ACCESS_TOKEN_EXPIRE_MINUTES",
            Self::DEFAULT_ACCESS_MINUTES,
            Self::MAX_ACCESS_MINUTES,
        );
        let refresh_token_expire_days = bounded_or(
            lookup,
            "REFRESH_TOKEN_EXPIRE_DAYS",
            Self::DEFAULT_REFRESH_DAYS,
            Self::MAX_REFRESH_DAYS,
        );

        Ok(Self {
            secret,
            access_token_expire_minutes,
            refresh_token_expire_days,
        })
    }

    pub fn access_ttl_seconds(&self) -> i64 {
        self.access_token_expire_minutes * 60
    }

    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.refresh_token_expire_days * 24 * 60 * 60
    }
}

/// 0 이하이면 기본값, `max` 를 넘으면 `max` 로 제한합니다.
fn bounded_or(lookup: EnvLookup, key: &str, default: i64, max: i64) -> i64 {
    let value = parse_or(lookup, key, default);

    if value <= 0 {
        default
    } else if value > max {
        log::warn!("{}={} 가 최대값을 넘어 {} 로 제한합니다", key, value, max);
        max
    } else {
        value
    }
}

/// 비밀번호 재설정/이메일 인증 토큰 설정
#[derive(Debug, Clone)]
pub struct AccountConfig {
    /// 메일 본문 링크의 기준 URL (`{frontend_url}/reset-password?token=...`)
    pub frontend_url: String,
    pub password_reset_expire_hours: i64,
    pub email_verification_expire_hours: i64,
}

impl Default for AccountConfig {
    fn default() -> Self {
        Self {
            frontend_url: Self::DEFAULT_FRONTEND_URL.to_string(),
            password_reset_expire_hours: Self::DEFAULT_EXPIRE_HOURS,
            email_verification_expire_hours: Self::DEFAULT_EXPIRE_HOURS,
        }
    }
}

impl AccountConfig {
    pub const DEFAULT_FRONTEND_URL: &'static str = "http://localhost:3000";
    pub const DEFAULT_EXPIRE_HOURS: i64 = 24;
    pub const MAX_EXPIRE_HOURS: i64 = 7 * 24;

    pub fn from_lookup(lookup: EnvLookup) -> Self {
        let frontend_url = lookup("FRONTEND_URL")
            .map(|url| url.trim().trim_end_matches('/').to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or_else(|| Self::DEFAULT_FRONTEND_URL.to_string());

        Self {
            frontend_url,
            password_reset_expire_hours: bounded_or(
                lookup,
                "PASSWORD_RESET_EXPIRE_HOURS",
                Self::DEFAULT_EXPIRE_HOURS,
                Self::MAX_EXPIRE_HOURS,
            ),
            email_verification_expire_hours: bounded_or(
                lookup,
                "EMAIL_VERIFICATION_EXPIRE_HOURS",
                Self::DEFAULT_EXPIRE_HOURS,
                Self::MAX_EXPIRE_HOURS,
            ),
        }
    }
}

/// bcrypt 해싱 설정
#[derive(Debug, Clone)]
pub struct PasswordConfig {
    pub bcrypt_cost: u32,
}

impl PasswordConfig {
    pub const MIN_COST: u32 = 4;
    pub const MAX_COST: u32 = 15;

    /// `BCRYPT_COST` 가 4~15 범위면 그 값을, 아니면 환경별 기본값을 사용합니다.
    pub fn from_lookup(lookup: EnvLookup, environment: &Environment) -> Self {
        let bcrypt_cost = lookup("BCRYPT_COST")
            .and_then(|raw| raw.parse::<u32>().ok())
            .filter(|cost| (Self::MIN_COST..=Self::MAX_COST).contains(cost))
            .unwrap_or_else(|| Self::bcrypt_cost_for_env(environment));

        Self { bcrypt_cost }
    }

    pub fn bcrypt_cost_for_env(env: &Environment) -> u32 {
        match env {
            Environment::Development => 4,
            Environment::Test => 4,
            Environment::Staging => 10,
            Environment::Production => 12,
        }
    }
}

/// 단일 OAuth 클라이언트 등록 정보
#[derive(Debug, Clone, Default)]
pub struct OAuthClientConfig {
    pub client_id: String,
    pub client_secret: String,
    pub redirect_uri: String,
}

impl OAuthClientConfig {
    fn from_lookup(lookup: EnvLookup, prefix: &str) -> Self {
        let read = |suffix: &str| lookup(&format!("{}_{}", prefix, suffix)).unwrap_or_default();

        Self {
            client_id: read("CLIENT_ID"),
            client_secret: read("CLIENT_SECRET"),
            redirect_uri: read("REDIRECT_URI"),
        }
    }

    pub fn is_configured(&self) -> bool {
        !self.client_id.is_empty() && !self.client_secret.is_empty() && !self.redirect_uri.is_empty()
    }
}

/// 세 이메일 프로바이더의 OAuth 클라이언트 설정
#[derive(Debug, Clone, Default)]
pub struct OAuthConfig {
    pub google: OAuthClientConfig,
    pub microsoft: OAuthClientConfig,
    pub yahoo: OAuthClientConfig,
}

impl OAuthConfig {
    pub fn from_lookup(lookup: EnvLookup) -> Self {
        Self {
            google: OAuthClientConfig::from_lookup(lookup, "GOOGLE"),
            microsoft: OAuthClientConfig::from_lookup(lookup, "MICROSOFT"),
            yahoo: OAuthClientConfig::from_lookup(lookup, "YAHOO"),
        }
    }

    pub fn client(&self, provider: OAuthProvider) -> &OAuthClientConfig {
        match provider {
            OAuthProvider::Google => &self.google,
            OAuthProvider::Microsoft => &self.microsoft,
            OAuthProvider::Yahoo => &self.yahoo,
        }
    }
}

/// 프로바이더별 고정 OAuth 엔드포인트
#[derive(Debug, Clone, Copy)]
pub struct ProviderEndpoints {
    pub authorize_url: &'static str,
    pub token_url: &'static str,
    pub userinfo_url: &'static str,
    pub scope: &'static str,
    pub extra_params: &'static [(&'static str, &'static str)],
}

/// OAuth 인증을 수행하는 외부 ID 프로바이더
#[derive(Debug, Clone, Copy, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OAuthProvider {
    Google,
    Microsoft,
    Yahoo,
}

impl OAuthProvider {
    pub fn from_str(s: &str) -> Result<Self, String> {
        match s.to_lowercase().as_str() {
            "google" => Ok(OAuthProvider::Google),
            "microsoft" => Ok(OAuthProvider::Microsoft),
            "yahoo" => Ok(OAuthProvider::Yahoo),
            _ => Err(format!("Unsupported OAuth provider: {}", s)),
        }
    }

    pub fn as_str(&self) -> &'static str {
        match self {
            OAuthProvider::Google => "google",
            OAuthProvider::Microsoft => "microsoft",
            OAuthProvider::Yahoo => "yahoo",
        }
    }

    pub fn endpoints(&self) -> ProviderEndpoints {
        match self {
            OAuthProvider::Google => ProviderEndpoints {
                authorize_url: "https://accounts.google.com/o/oauth2/v2/auth",
                token_url: "https://oauth2.googleapis.com/token",
                userinfo_url: "https://www.googleapis.com/oauth2/v2/userinfo",
                scope: "openid email profile https://www.googleapis.com/auth/gmail.readonly",
                extra_params: &[("access_type", "offline"), ("prompt", "consent")],
            },
            OAuthProvider::Microsoft => ProviderEndpoints {
                authorize_url: "https://login.microsoftonline.com/common/oauth2/v2.0/authorize",
                token_url: "https://login.microsoftonline.com/common/oauth2/v2.0/token",
                userinfo_url: "https://graph.microsoft.com/v1.0/me",
                scope: "openid email profile Mail.Read offline_access",
                extra_params: &[("response_mode", "query")],
            },
            OAuthProvider::Yahoo => ProviderEndpoints {
                authorize_url: "https://api.login.yahoo.com/oauth2/request_auth",
                token_url: "https://api.login.yahoo.com/oauth2/get_token",
                userinfo_url: "https://api.login.yahoo.com/openid/v1/userinfo",
                scope: "openid email profile",
                extra_params: &[],
            },
        }
    }
}
