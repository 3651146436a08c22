//! # OAuth Domain Models Module
//!
//! 이메일 프로바이더(Google, Microsoft, Yahoo) OAuth 2.0 플로우에서 주고받는
//! 외부 응답 모델을 정의합니다.
//!
//! ```text
//! authorize URL ──► (사용자 동의) ──► callback?code=...
//!                                        │
//!                                        ▼
//!                     token endpoint ─► ProviderTokenResponse
//!                                        │
//!                                        ▼
//!                  userinfo endpoint ─► ProviderUserInfo ─► ConnectedApp
//! ```
//!
//! 프로바이더별 엔드포인트와 스코프는 [`crate::config::OAuthProvider::endpoints`]에 있습니다.

pub mod provider_response;

pub use provider_response::*;
