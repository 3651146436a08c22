//! 연결 앱 서비스 모듈

pub mod connected_app_service;

pub use connected_app_service::ConnectedAppService;
