//! # Domain Models Module
//!
//! 영속성과 무관한 도메인 값 객체들을 정의합니다.
//!
//! ## Entities vs Models 구분
//!
//! - **Entities** (`../entities/`): MongoDB 에 저장되는 문서, 고유 식별자를 가짐
//! - **Models** (`./`): 서명된 토큰 안에만 존재하는 클레임, 요청 범위의 인증 주체,
//!   외부 프로바이더 응답처럼 저장되지 않는 값
//!
//! ## 모듈 구성
//!
//! ```text
//! models/
//! ├── auth/    ← AuthenticatedUser (요청 extension + 추출기)
//! ├── token/   ← Claims(Access | Refresh), TokenPair
//! └── oauth/   ← ProviderTokenResponse, ProviderUserInfo
//! ```

pub mod auth;
pub mod token;
pub mod oauth;
