//! API 라우트 설정 모듈
//!
//! 모든 엔드포인트는 `/herm-auth` 접두사 아래에 등록됩니다.
//!
//! | 경로 | 인증 | 비고 |
//! |------|------|------|
//! | `/herm-auth/health` | - | 헬스체크 |
//! | `/herm-auth/api/v1/auth/{signup,login,refresh}` | - | 엄격한 요청 제한 |
//! | `/herm-auth/api/v1/auth/{forgot-password,reset-password}` | - | 엄격한 요청 제한 |
//! | `/herm-auth/api/v1/auth/verify-email` | - | 메일 토큰으로 인증 |
//! | `/herm-auth/api/v1/auth/verify-email/send` | Bearer | |
//! | `/herm-auth/api/v1/auth/logout` | - | 리프레시 토큰 폐기 |
//! | `/herm-auth/api/v1/auth/me` | Bearer | |
//! | `/herm-auth/api/v1/connected-apps` | Bearer | 스코프 전체 |
//! | `/herm-auth/api/v1/oauth/{provider}/authorize` | - | |
//! | `/herm-auth/api/v1/oauth/{provider}/callback` | Bearer | |
//!
//! # Examples
//!
//! ```rust,ignore
//! let rate_limit = config.rate_limit.clone();
//!
//! App::new().configure(|cfg| configure_all_routes(cfg, &rate_limit));
//! ```

use actix_governor::{Governor, GovernorConfig, GovernorConfigBuilder};
use actix_web::web;

use crate::config::RateLimitConfig;
use crate::handlers;
use crate::middlewares::AuthMiddleware;

pub const API_PREFIX: &str = "/herm-auth";

/// 모든 라우트를 설정합니다
///
/// 가입/로그인/갱신/비밀번호 재설정 엔드포인트는 `LOGIN_RATE_LIMIT_SECONDS` 마다 1회 보충되는
/// 별도 제한을 공유합니다. 설정값이 0 이면 `GovernorConfig::secure()` 로 대체합니다.
pub fn configure_all_routes(cfg: &mut web::ServiceConfig, rate_limit: &RateLimitConfig) {
    let auth_limit = GovernorConfigBuilder::default()
        .seconds_per_request(rate_limit.login_seconds_per_request)
        .burst_size(rate_limit.login_burst_size)
        .finish()
        .unwrap_or_else(|| {
            log::warn!("인증 요청 제한 설정이 올바르지 않아 기본 제한을 사용합니다");
            GovernorConfig::secure()
        });

    // 자격 증명을 받는 엔드포인트는 IP 기준으로 같은 제한을 공유한다
    let auth_scope = web::scope("/auth")
        .service(
            web::resource("/signup")
                .wrap(Governor::new(&auth_limit))
                .route(web::post().to(handlers::auth::signup)),
        )
        .service(
            web::resource("/login")
                .wrap(Governor::new(&auth_limit))
                .route(web::post().to(handlers::auth::login)),
        )
        .service(
            web::resource("/refresh")
                .wrap(Governor::new(&auth_limit))
                .route(web::post().to(handlers::auth::refresh)),
        )
        .service(
            web::resource("/forgot-password")
                .wrap(Governor::new(&auth_limit))
                .route(web::post().to(handlers::account::forgot_password)),
        )
        .service(
            web::resource("/reset-password")
                .wrap(Governor::new(&auth_limit))
                .route(web::post().to(handlers::account::reset_password)),
        )
        .service(handlers::account::send_verification_email)
        .service(handlers::account::verify_email)
        .service(handlers::auth::logout)
        .service(handlers::auth::me);

    cfg.service(
        web::scope(API_PREFIX)
            .service(handlers::health::health_check)
            .service(
                web::scope("/api/v1")
                    .service(auth_scope)
                    .configure(configure_connected_app_routes)
                    .configure(configure_oauth_routes),
            ),
    );
}

fn configure_connected_app_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/connected-apps")
            .wrap(AuthMiddleware::required())
            .service(handlers::connected_apps::connect_app)
            .service(handlers::connected_apps::list_connected_apps)
            .service(handlers::connected_apps::delete_connected_app),
    );
}

/// OAuth 라우트. 콜백만 핸들러 단위로 인증 미들웨어가 걸려 있습니다.
fn configure_oauth_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/oauth")
            .service(handlers::oauth::authorize)
            .service(handlers::oauth::callback),
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use actix_web::{http::StatusCode, test, App};

    fn rate_limit(login_burst_size: u32) -> RateLimitConfig {
        RateLimitConfig {
            per_second: 100,
            burst_size: 200,
            login_seconds_per_request: 60,
            login_burst_size,
        }
    }

    #[actix_web::test]
    async fn test_health_is_under_prefix() {
        let config = rate_limit(5);
        let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &config))).await;

        let req = test::TestRequest::get().uri("/herm-auth/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);

        let req = test::TestRequest::get().uri("/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::NOT_FOUND);
    }

    #[actix_web::test]
    async fn test_invalid_auth_limit_still_builds_routes() {
        let config = rate_limit(0);
        let app = test::init_service(App::new().configure(|cfg| configure_all_routes(cfg, &config))).await;

        let req = test::TestRequest::get().uri("/herm-auth/health").to_request();
        assert_eq!(test::call_service(&app, req).await.status(), StatusCode::OK);
    }
}
