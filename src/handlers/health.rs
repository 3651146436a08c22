//! 헬스체크 엔드포인트

use actix_web::{get, HttpResponse};
use serde_json::json;

use crate::config::AppConfig;

/// 로드밸런서나 모니터링 시스템에서 서비스 상태를 확인하는 데 사용됩니다.
///
/// ```json
/// {
///   "status": "healthy",
///   "service": "Email Integration Service",
///   "version": "0.1.0",
///   "timestamp": "2026-01-01T00:00:00+00:00"
/// }
/// ```
#[get("/health")]
pub async fn health_check() -> HttpResponse {
    HttpResponse::Ok().json(json!({
        "status": "healthy",
        "service": AppConfig::SERVICE_NAME,
        "version": env!("CARGO_PKG_VERSION"),
        "timestamp": chrono::Utc::now().to_rfc3339(),
    }))
}
