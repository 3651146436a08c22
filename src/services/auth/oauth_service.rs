//! 이메일 프로바이더 OAuth 2.0 서비스
//!
//! Google, Microsoft, Yahoo 의 Authorization Code 플로우를 처리하여
//! 결과를 연결 앱으로 저장합니다.
//!
//! ```text
//! 1. GET  /oauth/{provider}/authorize  → authorization_url, state
//! 2. 사용자가 프로바이더에서 동의 → redirect_uri?code=...
//! 3. GET  /oauth/{provider}/callback   → code 교환 → userinfo → 연결 앱 upsert
//! ```
//!
//! 프로바이더 토큰의 갱신/폐기와 재시도는 하지 않습니다.

use std::sync::Arc;
use std::time::Duration;

use chrono::Utc;
use uuid::Uuid;

use crate::config::{OAuthClientConfig, OAuthConfig, OAuthProvider};
use crate::core::errors::{AppError, AppResult, ErrorContext};
use crate::domain::dto::connected_apps::{AuthorizationUrlResponse, ConnectAppRequest, ConnectedAppResponse};
use crate::domain::models::oauth::{ProviderTokenResponse, ProviderUserInfo};
use crate::services::connected_apps::ConnectedAppService;

const HTTP_TIMEOUT_SECS: u64 = 10;

pub struct OAuthService {
    config: OAuthConfig,
    http: reqwest::Client,
    connected_apps: Arc<ConnectedAppService>,
}

impl OAuthService {
    pub fn new(config: OAuthConfig, connected_apps: Arc<ConnectedAppService>) -> AppResult<Self> {
        let http = reqwest::Client::builder()
            .timeout(Duration::from_secs(HTTP_TIMEOUT_SECS))
            .build()
            .context("HTTP 클라이언트 생성 실패")?;

        Ok(Self {
            config,
            http,
            connected_apps,
        })
    }

    /// 프로바이더 동의 화면 URL 과 state 값을 만듭니다.
    ///
    /// state 는 클라이언트가 콜백에서 대조하도록 돌려주기만 하고 서버에 저장하지 않습니다.
    pub fn authorization_url(&self, provider: OAuthProvider) -> AppResult<AuthorizationUrlResponse> {
        let client = self.client(provider)?;
        let state = Uuid::new_v4().to_string();

        Ok(AuthorizationUrlResponse {
            authorization_url: build_authorization_url(provider, client, &state),
            state,
        })
    }

    /// 콜백의 인가 코드를 교환하고, 프로바이더 계정을 현재 사용자의 연결 앱으로 저장합니다.
    ///
    /// # Errors
    ///
    /// * `AppError::BadRequest` - 코드 교환 또는 사용자 정보 조회가 거부된 경우
    /// * `AppError::ExternalServiceError` - 프로바이더와 통신할 수 없는 경우
    pub async fn connect_with_code(
        &self,
        user_id: &str,
        provider: OAuthProvider,
        code: &str,
    ) -> AppResult<ConnectedAppResponse> {
        let token = self.exchange_code(provider, code).await?;
        let user_info = self.fetch_user_info(provider, &token.access_token).await?;

        let provider_email = user_info
            .primary_email()
            .map(str::to_string)
            .ok_or_else(|| {
                log::warn!("{} 사용자 정보에 이메일이 없음", provider.as_str());
                AppError::BadRequest("Failed to get user info".to_string())
            })?;

        let expires_at = Utc::now() + chrono::Duration::seconds(token.expires_in_seconds());

        self.connected_apps
            .connect(
                user_id,
                ConnectAppRequest {
                    provider: provider.into(),
                    provider_email,
                    access_token: token.access_token,
                    refresh_token: token.refresh_token,
                    token_expires_at: Some(expires_at),
                },
            )
            .await
    }

    async fn exchange_code(&self, provider: OAuthProvider, code: &str) -> AppResult<ProviderTokenResponse> {
        let client = self.client(provider)?;
        let endpoints = provider.endpoints();

        let params = [
            ("code", code),
            ("client_id", client.client_id.as_str()),
            ("client_secret", client.client_secret.as_str()),
            ("redirect_uri", client.redirect_uri.as_str()),
            ("grant_type", "authorization_code"),
        ];

        let response = self.http
            .post(endpoints.token_url)
            .form(&params)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 요청 실패: {}", provider.as_str(), e)))?;

        if !response.status().is_success() {
            log::warn!("{} 토큰 교환 거부: {}", provider.as_str(), response.status());
            return Err(AppError::BadRequest("Failed to exchange code for token".to_string()));
        }

        response
            .json::<ProviderTokenResponse>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 토큰 응답 파싱 실패: {}", provider.as_str(), e)))
    }

    async fn fetch_user_info(&self, provider: OAuthProvider, access_token: &str) -> AppResult<ProviderUserInfo> {
        let response = self.http
            .get(provider.endpoints().userinfo_url)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 요청 실패: {}", provider.as_str(), e)))?;

        if !response.status().is_success() {
            log::warn!("{} 사용자 정보 조회 거부: {}", provider.as_str(), response.status());
            return Err(AppError::BadRequest("Failed to get user info".to_string()));
        }

        response
            .json::<ProviderUserInfo>()
            .await
            .map_err(|e| AppError::ExternalServiceError(format!("{} 사용자 정보 파싱 실패: {}", provider.as_str(), e)))
    }

    fn client(&self, provider: OAuthProvider) -> AppResult<&OAuthClientConfig> {
        let client = self.config.client(provider);
        if client.is_configured() {
            Ok(client)
        } else {
            Err(AppError::BadRequest(format!("OAuth provider not configured: {}", provider.as_str())))
        }
    }
}

/// 인가 URL 을 조립합니다. 모든 값은 퍼센트 인코딩됩니다.
pub fn build_authorization_url(provider: OAuthProvider, client: &OAuthClientConfig, state: &str) -> String {
    let endpoints = provider.endpoints();

    let mut params: Vec<(&str, &str)> = vec![
        ("client_id", client.client_id.as_str()),
        ("redirect_uri", client.redirect_uri.as_str()),
        ("response_type", "code"),
        ("scope", endpoints.scope),
        ("state", state),
    ];
    params.extend_from_slice(endpoints.extra_params);

    let query_string = params
        .iter()
        .map(|(k, v)| format!("{}={}", k, urlencoding::encode(v)))
        .collect::<Vec<_>>()
        .join("&");

    format!("{}?{}", endpoints.authorize_url, query_string)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::repositories::memory::InMemoryConnectedAppStore;

    fn client() -> OAuthClientConfig {
        OAuthClientConfig {
            client_id: "client-123".to_string(),
            client_secret: "secret".to_string(),
            redirect_uri: "http://localhost:3000/oauth/callback".to_string(),
        }
    }

    fn service(config: OAuthConfig) -> OAuthService {
        let apps = Arc::new(ConnectedAppService::new(Arc::new(InMemoryConnectedAppStore::default())));
        OAuthService::new(config, apps).unwrap()
    }

    #[test]
    fn test_google_url_has_offline_access() {
        let url = build_authorization_url(OAuthProvider::Google, &client(), "st-1");

        assert!(url.starts_with("https://accounts.google.com/o/oauth2/v2/auth?"));
        assert!(url.contains("client_id=client-123"));
        assert!(url.contains("redirect_uri=http%3A%2F%2Flocalhost%3A3000%2Foauth%2Fcallback"));
        assert!(url.contains("response_type=code"));
        assert!(url.contains("scope=openid%20email%20profile%20https%3A%2F%2Fwww.googleapis.com%2Fauth%2Fgmail.readonly"));
        assert!(url.contains("access_type=offline"));
        assert!(url.contains("prompt=consent"));
        assert!(url.contains("state=st-1"));
    }

    #[test]
    fn test_microsoft_url_uses_query_response_mode() {
        let url = build_authorization_url(OAuthProvider::Microsoft, &client(), "st-2");

        assert!(url.starts_with("https://login.microsoftonline.com/common/oauth2/v2.0/authorize?"));
        assert!(url.contains("scope=openid%20email%20profile%20Mail.Read%20offline_access"));
        assert!(url.contains("response_mode=query"));
        assert!(!url.contains("access_type"));
    }

    #[test]
    fn test_yahoo_url_has_no_extras() {
        let url = build_authorization_url(OAuthProvider::Yahoo, &client(), "st-3");

        assert!(url.starts_with("https://api.login.yahoo.com/oauth2/request_auth?"));
        assert!(url.ends_with("state=st-3"));
    }

    #[test]
    fn test_authorization_url_returns_state() {
        let svc = service(OAuthConfig {
            yahoo: client(),
            ..OAuthConfig::default()
        });

        let response = svc.authorization_url(OAuthProvider::Yahoo).unwrap();

        assert!(Uuid::parse_str(&response.state).is_ok());
        assert!(response.authorization_url.contains(&format!("state={}", response.state)));
    }

    #[test]
    fn test_unconfigured_provider_rejected() {
        let svc = service(OAuthConfig::default());

        let err = svc.authorization_url(OAuthProvider::Google).unwrap_err();

        assert!(matches!(err, AppError::BadRequest(_)));
    }
}
