//! JWT 토큰 발급/검증 서비스 구현
//!
//! 액세스 토큰과 리프레시 토큰을 HS256 으로 서명해 발급하고,
//! 제시된 토큰을 검증하여 태그드 [`Claims`]로 복원합니다.
//!
//! 검증 결과는 토큰, 서명 키, 현재 시각만으로 결정됩니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! let tokens = TokenService::new(JwtConfig::new("secret"));
//! let now = Utc::now();
//!
//! let access = tokens.issue_access(&user.id, &user.email, now)?;
//! let claims = tokens.verify_access(&access, now).expect("fresh token");
//! assert_eq!(claims.sub, user.id);
//! ```

use chrono::{DateTime, Duration, Utc};
use jsonwebtoken::{decode, encode, Algorithm, DecodingKey, EncodingKey, Header, Validation};
use uuid::Uuid;

use crate::config::JwtConfig;
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::models::token::{AccessClaims, Claims, RefreshClaims, TokenPair};

const BEARER_PREFIX: &str = "Bearer ";

/// 액세스/리프레시 토큰 발급기 겸 검증기
pub struct TokenService {
    config: JwtConfig,
    encoding_key: EncodingKey,
    decoding_key: DecodingKey,
    validation: Validation,
}

impl TokenService {
    /// 명시적인 JWT 설정으로 서비스를 생성합니다.
    pub fn new(config: JwtConfig) -> Self {
        let encoding_key = EncodingKey::from_secret(config.secret.as_bytes());
        let decoding_key = DecodingKey::from_secret(config.secret.as_bytes());

        // 만료는 호출자가 넘긴 `now` 기준으로 직접 비교한다 (now >= exp 이면 거부)
        let mut validation = Validation::new(Algorithm::HS256);
        validation.validate_exp = false;
        validation.leeway = 0;
        validation.set_required_spec_claims(&["exp"]);

        Self {
            config,
            encoding_key,
            decoding_key,
            validation,
        }
    }

    /// 액세스 토큰 수명 (초)
    pub fn access_ttl_seconds(&self) -> i64 {
        self.config.access_ttl_seconds()
    }

    /// 리프레시 토큰 수명 (초)
    pub fn refresh_ttl_seconds(&self) -> i64 {
        self.config.refresh_ttl_seconds()
    }

    /// 액세스 토큰을 발급합니다.
    ///
    /// 만료 시각은 `now + ACCESS_TOKEN_EXPIRE_MINUTES` 입니다.
    pub fn issue_access(&self, sub: &str, email: &str, now: DateTime<Utc>) -> AppResult<String> {
        let exp = now + Duration::minutes(self.config.access_token_expire_minutes);

        self.sign(&Claims::Access(AccessClaims {
            sub: sub.to_string(),
            email: email.to_string(),
            exp: exp.timestamp(),
        }))
    }

    /// 리프레시 토큰을 발급합니다. 이메일은 담지 않습니다.
    ///
    /// 매 발급마다 새 `jti` 를 부여하므로 같은 사용자, 같은 시각이라도 토큰이 겹치지 않습니다.
    pub fn issue_refresh(&self, sub: &str, now: DateTime<Utc>) -> AppResult<String> {
        let exp = now + Duration::days(self.config.refresh_token_expire_days);

        self.sign(&Claims::Refresh(RefreshClaims {
            sub: sub.to_string(),
            jti: Uuid::new_v4().to_string(),
            iat: now.timestamp(),
            exp: exp.timestamp(),
        }))
    }

    /// 액세스/리프레시 토큰 쌍을 발급합니다.
    pub fn issue_pair(&self, sub: &str, email: &str, now: DateTime<Utc>) -> AppResult<TokenPair> {
        Ok(TokenPair {
            access_token: self.issue_access(sub, email, now)?,
            refresh_token: self.issue_refresh(sub, now)?,
            token_type: "bearer".to_string(),
            expires_in: self.access_ttl_seconds(),
        })
    }

    /// 토큰을 검증하고 클레임을 복원합니다.
    ///
    /// 서명 불일치, 구조 손상, 알 수 없는 `type`, `now >= exp` 는 모두 `None` 입니다.
    /// 호출자에게 실패 원인을 구분해서 알려주지 않습니다.
    pub fn verify(&self, token: &str, now: DateTime<Utc>) -> Option<Claims> {
        let claims = match decode::<Claims>(token, &self.decoding_key, &self.validation) {
            Ok(data) => data.claims,
            Err(e) => {
                log::debug!("토큰 검증 실패: {:?}", e.kind());
                return None;
            }
        };

        if now.timestamp() >= claims.exp() {
            log::debug!("만료된 {} 토큰: sub={}", claims.token_type(), claims.sub());
            return None;
        }

        Some(claims)
    }

    /// 액세스 토큰으로만 검증합니다. 리프레시 토큰은 거부됩니다.
    pub fn verify_access(&self, token: &str, now: DateTime<Utc>) -> Option<AccessClaims> {
        match self.verify(token, now)? {
            Claims::Access(claims) => Some(claims),
            Claims::Refresh(claims) => {
                log::warn!("액세스 토큰 자리에 리프레시 토큰 사용 시도: sub={}", claims.sub);
                None
            }
        }
    }

    /// 리프레시 토큰으로만 검증합니다. 액세스 토큰은 거부됩니다.
    pub fn verify_refresh(&self, token: &str, now: DateTime<Utc>) -> Option<RefreshClaims> {
        match self.verify(token, now)? {
            Claims::Refresh(claims) => Some(claims),
            Claims::Access(claims) => {
                log::warn!("리프레시 토큰 자리에 액세스 토큰 사용 시도: sub={}", claims.sub);
                None
            }
        }
    }

    /// `Authorization` 헤더 값에서 Bearer 토큰을 꺼냅니다.
    pub fn extract_bearer_token<'a>(&self, auth_header: &'a str) -> AppResult<&'a str> {
        match auth_header.strip_prefix(BEARER_PREFIX).map(str::trim) {
            Some(token) if !token.is_empty() => Ok(token),
            _ => Err(AppError::AuthenticationError(
                "Invalid authorization header".to_string(),
            )),
        }
    }

    fn sign(&self, claims: &Claims) -> AppResult<String> {
        encode(&Header::new(Algorithm::HS256), claims, &self.encoding_key)
            .context("JWT 토큰 생성 실패")
    }
}
