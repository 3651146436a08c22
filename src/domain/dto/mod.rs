//! # Data Transfer Objects (DTO) Module
//!
//! API 경계의 요청/응답 구조체를 정의합니다.
//! 요청 DTO 는 `validator` 로 검증하고, 응답 DTO 는 엔티티에서 `From` 으로 변환합니다.
//!
//! ```text
//! dto/
//! ├── users/           ← 가입, 로그인, 토큰 갱신 요청 / 사용자 응답
//! └── connected_apps/  ← 연결 앱 요청, OAuth 콜백 쿼리 / 연결 앱 응답
//! ```

pub mod users;
pub mod connected_apps;
