//! # HTTP Request Handlers Module
//!
//! HTTP 요청을 받아 서비스 계층을 호출하고 응답을 만드는 핸들러들입니다.
//!
//! ## 아키텍처 위치
//!
//! ```text
//! ┌─────────────────────────────────────────────┐
//!   Client (Web App, API Client)
//! └─────────────────────┬───────────────────────┘
//!                       │ HTTP Request/Response
//! ┌─────────────────────▼───────────────────────┐
//!   Handlers (이 모듈) - HTTP 엔드포인트 처리         ← Web Layer
//! ├─────────────────────────────────────────────┤
//!   Services - 비즈니스 로직                        ← Service Layer
//! ├─────────────────────────────────────────────┤
//!   Repositories - 데이터 접근                     ← Repository Layer
//! └─────────────────────────────────────────────┘
//! ```
//!
//! ## 공통 규칙
//!
//! - 서비스는 `web::Data<...>` 로 주입받습니다.
//! - 요청 DTO 는 `payload.validate()?` 로 검증하며, 실패 시 400 입니다.
//! - 모든 에러는 `AppError` 로 전파되어 `{"error": "..."}` 로 응답합니다.
//! - 보호된 엔드포인트는 [`AuthenticatedUser`](crate::domain::models::auth::AuthenticatedUser)
//!   추출기로 요청 주체를 받습니다.
//!
//! ## 모듈 구성
//!
//! - **`auth`**: 가입, 로그인, 토큰 갱신/로그아웃, 현재 사용자
//! - **`account`**: 비밀번호 재설정, 이메일 인증
//! - **`connected_apps`**: 연결 앱 등록, 목록, 삭제
//! - **`oauth`**: 프로바이더별 인가 URL 과 콜백
//! - **`health`**: 헬스체크

pub mod auth;
pub mod account;
pub mod connected_apps;
pub mod oauth;
pub mod health;
