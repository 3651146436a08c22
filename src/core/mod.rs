//! 애플리케이션 핵심 인프라 모듈
//!
//! 통합 에러 타입과 시작 시 서비스를 조립하는 레지스트리를 제공합니다.
//!
//! - [`errors`] - `AppError`, `AppResult`, HTTP 응답 변환
//! - [`registry`] - 설정과 저장소로부터 서비스를 조립하는 `ServiceRegistry`

pub mod errors;
pub mod registry;

pub use errors::*;
pub use registry::*;
