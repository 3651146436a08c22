//! JWT 클레임 셋과 발급된 토큰 페어
//!
//! 클레임은 `type` 필드로 구분되는 태그드 열거형입니다.
//! 액세스 토큰만 이메일을 담습니다. 리프레시 토큰은 이메일 대신 발급마다 고유한
//! `jti` 와 발급 시각 `iat` 를 담아, 같은 초에 발급된 토큰도 서로 구분됩니다.
//!
//! ```text
//! access : {"type":"access",  "sub":"<uuid>", "email":"a@b.c", "exp":1700000000}
//! refresh: {"type":"refresh", "sub":"<uuid>", "jti":"<uuid>", "iat":1699995200, "exp":1700600000}
//! ```

use serde::{Deserialize, Serialize};

/// 액세스 토큰 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccessClaims {
    pub sub: String,
    pub email: String,
    pub exp: i64,
}

/// 리프레시 토큰 클레임
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RefreshClaims {
    pub sub: String,
    /// 토큰 식별자. 폐기 목록의 키로 사용됩니다.
    pub jti: String,
    pub iat: i64,
    pub exp: i64,
}

/// 서명된 토큰에서 복원한 클레임 셋
///
/// 사용처는 기대하는 variant 만 받아들이고 다른 variant 는 거부해야 합니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "lowercase")]
pub enum Claims {
    Access(AccessClaims),
    Refresh(RefreshClaims),
}

impl Claims {
    pub fn sub(&self) -> &str {
        match self {
            Claims::Access(claims) => &claims.sub,
            Claims::Refresh(claims) => &claims.sub,
        }
    }

    pub fn exp(&self) -> i64 {
        match self {
            Claims::Access(claims) => claims.exp,
            Claims::Refresh(claims) => claims.exp,
        }
    }

    pub fn token_type(&self) -> &'static str {
        match self {
            Claims::Access(_) => "access",
            Claims::Refresh(_) => "refresh",
        }
    }
}

/// 로그인/가입/갱신 시 클라이언트에 내려주는 토큰 쌍
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TokenPair {
    pub access_token: String,
    pub refresh_token: String,
    pub token_type: String,
    /// 액세스 토큰 수명 (초)
    pub expires_in: i64,
}
