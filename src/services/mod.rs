//! 비즈니스 로직을 담당하는 서비스 계층 모듈
//!
//! 각 서비스는 생성자로 설정과 저장소를 명시적으로 주입받으며,
//! `main` 에서 한 번 만들어 `web::Data` 로 공유합니다.
//!
//! # Features
//!
//! - 가입/로그인과 리프레시 토큰 회전
//! - JWT 액세스/리프레시 토큰 발급과 검증
//! - 연결 앱 (이메일 프로바이더 자격 증명) 관리
//! - Google, Microsoft, Yahoo OAuth 2.0 연동
//!
//! # Examples
//!
//! ```rust,ignore
//! use crate::services::{auth::TokenService, users::UserService};
//!
//! let tokens = Arc::new(TokenService::new(config.jwt.clone()));
//! let user_service = UserService::new(users, revoked_tokens, codec, tokens.clone());
//! ```

pub mod users;
pub mod auth;
pub mod connected_apps;
