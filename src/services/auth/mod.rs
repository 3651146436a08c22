//! 인증 및 보안 서비스 모듈
//!
//! 비밀번호 코덱, JWT 토큰 발급/검증, 이메일 프로바이더 OAuth 연동을 제공합니다.
//!
//! # Security
//!
//! - bcrypt 해싱 (72 바이트 절단을 해싱/검증 양쪽에 동일하게 적용)
//! - HMAC-SHA256 토큰 서명, `type` 클레임으로 액세스/리프레시 구분
//! - OAuth 클라이언트 시크릿은 서버에서만 사용
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::auth::{PasswordCodec, TokenService};
//!
//! let codec = PasswordCodec::new(&config.password);
//! let hash = codec.hash("Sup3rSecret!")?;
//! assert!(codec.verify("Sup3rSecret!", &hash));
//!
//! let tokens = TokenService::new(config.jwt.clone());
//! let pair = tokens.issue_pair(&user.id, &user.email, Utc::now())?;
//! ```

pub mod password_codec;
pub mod token_service;
pub mod oauth_service;

pub use password_codec::PasswordCodec;
pub use token_service::TokenService;
pub use oauth_service::OAuthService;
