//! # Domain Entities Module
//!
//! MongoDB 컬렉션과 1:1 로 대응되는 영속성 엔티티들을 정의합니다.
//!
//! ```text
//! Domain Layer
//! ├── entities/     ← 이 모듈 (MongoDB 문서)
//! ├── models/       ← 클레임, 인증 사용자, OAuth 응답 등 값 객체
//! └── dto/          ← 요청/응답 데이터 전송 객체
//! ```
//!
//! | 엔티티 | 컬렉션 | 식별자 |
//! |--------|--------|--------|
//! | [`users::user::User`] | `users` | UUID v4 문자열 |
//! | [`connected_apps::connected_app::ConnectedApp`] | `connected_apps` | UUID v4 문자열 |
//! | [`account_tokens::account_token::AccountToken`] | `password_reset_tokens`, `email_verification_tokens` | UUID v4 문자열 |
//! | [`pending_emails::pending_email::PendingEmail`] | `pending_emails` | UUID v4 문자열 |
//!
//! 식별자는 ObjectId 대신 UUID 문자열을 사용하므로 JWT 의 `sub` 클레임과
//! 그대로 비교할 수 있습니다.

pub mod users;
pub mod connected_apps;
pub mod account_tokens;
pub mod pending_emails;
