//! Herm 인증 서비스 백엔드
//!
//! 이메일 연동 제품을 위한 얇은 인증 서비스입니다.
//! 이메일/비밀번호 가입과 로그인으로 JWT 액세스/리프레시 토큰을 발급하고,
//! Gmail, Outlook, Yahoo 의 OAuth 토큰을 "연결 앱" 으로 저장합니다.
//!
//! # Features
//!
//! - **비밀번호 코덱**: bcrypt, 해싱/검증 양쪽에서 72 바이트 절단
//! - **JWT 인증**: HS256, `type` 클레임으로 구분되는 액세스/리프레시 토큰
//! - **토큰 회전**: 사용된 리프레시 토큰은 Redis 폐기 목록에 등록
//! - **계정 복구**: 비밀번호 재설정, 이메일 인증 (일회용 토큰, 발송 대기 메일 적재)
//! - **OAuth 2.0**: Google, Microsoft, Yahoo 인가 코드 플로우
//! - **MongoDB**: 사용자, 연결 앱, 계정 토큰, 발송 대기 메일 영구 저장
//!
//! # Architecture
//!
//! ```text
//! ┌─────────────────┐
//! │   HTTP Routes   │ ← REST API 엔드포인트 (/herm-auth)
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ Middlewares     │ ← Bearer 액세스 토큰 검증
//! │ Handlers        │ ← 요청/응답 처리
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │    Services     │ ← 비즈니스 로직
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │  Repositories   │ ← 데이터 액세스
//! └─────────────────┘
//!          │
//!          ▼
//! ┌─────────────────┐
//! │ MongoDB + Redis │ ← 저장소
//! └─────────────────┘
//! ```
//!
//! # Examples
//!
//! ```rust,ignore
//! use herm_auth_service::config::AppConfig;
//! use herm_auth_service::core::registry::ServiceRegistry;
//!
//! let config = AppConfig::from_env()?;
//! let registry = ServiceRegistry::connect(&config).await?;
//! let pair = registry.users.login(request).await?;
//! ```

pub mod core;
pub mod config;
pub mod db;
pub mod caching;
pub mod domain;
pub mod repositories;
pub mod services;
pub mod utils;
pub mod routes;
pub mod handlers;
pub mod middlewares;
