//! 사용자 계정 서비스 모듈
//!
//! 가입, 로그인, 토큰 갱신/로그아웃, 현재 사용자 조회([`UserService`])와
//! 비밀번호 재설정, 이메일 인증([`AccountService`])을 담당합니다.
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::users::UserService;
//!
//! let user_service = UserService::new(users, revoked_tokens, codec, tokens);
//! let pair = user_service.login(request).await?;
//! ```

pub mod user_service;
pub mod account_service;

pub use account_service::AccountService;
pub use user_service::UserService;
