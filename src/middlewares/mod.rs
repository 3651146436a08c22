//! 미들웨어 모듈
//!
//! ActixWeb 요청 처리 파이프라인에서 사용하는 미들웨어를 제공합니다.
//!
//! # 제공 미들웨어
//!
//! ### 인증 미들웨어 (AuthMiddleware)
//! - Bearer 액세스 토큰 추출 및 검증
//! - 사용자 정보를 request extension 에 저장
//!
//! # 사용 방법
//!
//! ```rust,ignore
//! use actix_web::{web, App};
//!
//! App::new()
//!     .app_data(token_service.clone())
//!     .service(
//!         web::scope("/api/v1/connected-apps")
//!             .wrap(AuthMiddleware::required())
//!             .service(list_connected_apps)
//!     )
//! ```

pub mod auth_middleware;
mod auth_inner;

pub use auth_middleware::AuthMiddleware;
