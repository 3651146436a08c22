//! Herm 인증 서비스 메인 애플리케이션
//!
//! 설정을 로드하고 MongoDB, Redis 에 연결한 뒤
//! Actix-web 기반 HTTP 서버를 구동합니다.

use actix_cors::Cors;
use actix_governor::{Governor, GovernorConfigBuilder};
use actix_web::http::header;
use actix_web::{middleware, App, HttpServer};
use dotenv::dotenv;
use env_logger::Env;
use log::{error, info};

use herm_auth_service::config::{AppConfig, CorsConfig};
use herm_auth_service::core::registry::ServiceRegistry;
use herm_auth_service::routes::{configure_all_routes, API_PREFIX};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // .env 의 RUST_LOG 가 반영되도록 환경 파일을 먼저 로드
    let env_file = load_env_file();
    init_logging();

    match env_file {
        Ok(loaded) => info!("{}", loaded),
        Err(e) => error!("{}", e),
    }

    info!("🚀 {} 시작중...", AppConfig::SERVICE_NAME);

    let config = AppConfig::from_env().map_err(|e| {
        error!("설정 로드 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;
    info!("실행 환경: {:?}", config.environment);

    let registry = ServiceRegistry::connect(&config).await.map_err(|e| {
        error!("서비스 초기화 실패: {}", e);
        std::io::Error::other(e.to_string())
    })?;

    info!("✅ 모든 서비스가 성공적으로 초기화되었습니다!");

    start_http_server(config, registry).await
}

/// HTTP 서버를 구성하고 실행합니다
///
/// 전역 요청 제한, CORS, 로깅, 경로 정규화 미들웨어를 포함합니다.
///
/// # Errors
///
/// * `std::io::Error` - 요청 제한 설정 오류, 포트 바인딩 실패 또는 서버 실행 오류
async fn start_http_server(config: AppConfig, registry: ServiceRegistry) -> std::io::Result<()> {
    let bind_address = config.server.bind_address();

    info!("🌐 서버가 http://{} 에서 실행중입니다", bind_address);
    info!("📍 Health check: http://{}{}/health", bind_address, API_PREFIX);

    // Rate Limiting 설정
    let governor_conf = GovernorConfigBuilder::default()
        .requests_per_second(config.rate_limit.per_second)
        .burst_size(config.rate_limit.burst_size)
        .use_headers()
        .finish()
        .ok_or_else(|| std::io::Error::other("RATE_LIMIT_PER_SECOND, RATE_LIMIT_BURST_SIZE 는 0 보다 커야 합니다"))?;

    info!(
        "🛡️ Rate Limiting 활성화: 초당 {}요청, 버스트 {}개 (인증: {}초당 1회, 버스트 {}개)",
        config.rate_limit.per_second,
        config.rate_limit.burst_size,
        config.rate_limit.login_seconds_per_request,
        config.rate_limit.login_burst_size,
    );

    let workers = config.server.workers;
    let rate_limit = config.rate_limit.clone();
    let cors_config = config.cors.clone();

    HttpServer::new(move || {
        App::new()
            // Rate Limiting 미들웨어 (가장 먼저 적용)
            .wrap(Governor::new(&governor_conf))
            .wrap(configure_cors(&cors_config))
            .wrap(middleware::Logger::default())
            .wrap(middleware::NormalizePath::trim())
            .configure(|cfg| registry.register(cfg))
            .configure(|cfg| configure_all_routes(cfg, &rate_limit))
    })
        .bind(bind_address)?
        .workers(workers)
        .run()
        .await
}

/// 환경별 설정 파일을 로드합니다
///
/// * `PROFILE=dev` - .env.dev 파일 로드 (기본값)
/// * `PROFILE=prod` - .env.prod 파일 로드
/// * 기타 - 기본 .env 파일 로드
///
/// 로거 초기화 전에 호출되므로 결과 메시지를 반환하고 호출자가 기록합니다.
fn load_env_file() -> Result<String, String> {
    let profile = std::env::var("PROFILE").unwrap_or_else(|_| "dev".to_string());

    let filename = match profile.as_str() {
        "prod" => ".env.prod",
        "dev" => ".env.dev",
        _ => {
            dotenv().ok();
            return Ok(format!("Current profile: {}, 기본 .env 파일 로드", profile));
        }
    };

    dotenv::from_filename(filename)
        .map(|_| format!("Current profile: {}, {} 파일 로드 됨", profile, filename))
        .map_err(|e| format!("Current profile: {}, {} 파일 로드 실패: {}", profile, filename, e))
}

/// `RUST_LOG` 기반 로깅 초기화 (기본값: "info,actix_web=debug")
fn init_logging() {
    env_logger::init_from_env(Env::default().default_filter_or("info,actix_web=debug"));
}

/// 설정된 Origin 만 허용하는 CORS 미들웨어
fn configure_cors(config: &CorsConfig) -> Cors {
    let cors = config
        .allowed_origins
        .iter()
        .fold(Cors::default(), |cors, origin| cors.allowed_origin(origin));

    cors.allowed_methods(vec!["GET", "POST", "PUT", "DELETE", "PATCH", "OPTIONS"])
        .allowed_headers(vec![
            header::AUTHORIZATION,
            header::ACCEPT,
            header::CONTENT_TYPE,
        ])
        .supports_credentials()
        .max_age(3600)
}
