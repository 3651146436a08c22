//! 연결 앱 서비스
//!
//! 사용자별 이메일 프로바이더 자격 증명의 등록, 조회, 삭제를 담당합니다.
//! 삭제는 소유자만 할 수 있습니다.

use std::sync::Arc;

use crate::core::errors::{AppError, AppResult};
use crate::domain::dto::connected_apps::{ConnectAppRequest, ConnectedAppResponse, ConnectedAppsList};
use crate::repositories::connected_apps::{ConnectedAppStore, NewConnectedApp};
use crate::utils::string_utils::clean_optional_string;
use crate::utils::time_utils::to_bson;

pub struct ConnectedAppService {
    apps: Arc<dyn ConnectedAppStore>,
}

impl ConnectedAppService {
    pub fn new(apps: Arc<dyn ConnectedAppStore>) -> Self {
        Self { apps }
    }

    /// 프로바이더 연결을 등록합니다. 이미 연결된 프로바이더면 토큰을 교체합니다.
    pub async fn connect(&self, user_id: &str, request: ConnectAppRequest) -> AppResult<ConnectedAppResponse> {
        let provider = request.provider;

        let app = self.apps
            .upsert(NewConnectedApp {
                user_id: user_id.to_string(),
                provider,
                provider_email: request.provider_email.trim().to_string(),
                access_token: request.access_token,
                refresh_token: clean_optional_string(request.refresh_token),
                token_expires_at: request.token_expires_at.map(to_bson),
            })
            .await?;

        log::info!("앱 연결: user={} provider={}", user_id, provider.as_str());
        Ok(ConnectedAppResponse::from(app))
    }

    pub async fn list(&self, user_id: &str) -> AppResult<ConnectedAppsList> {
        let apps = self.apps.list_by_user(user_id).await?;
        Ok(ConnectedAppsList::from(apps))
    }

    /// # Errors
    ///
    /// * `AppError::NotFound` - 존재하지 않는 연결 앱
    /// * `AppError::AuthorizationError` - 다른 사용자의 연결 앱
    pub async fn delete(&self, user_id: &str, app_id: &str) -> AppResult<()> {
        let app = self.apps
            .find_by_id(app_id)
            .await?
            .ok_or_else(|| AppError::NotFound("Connected app not found".to_string()))?;

        if app.user_id != user_id {
            log::warn!("다른 사용자의 연결 앱 삭제 시도: user={} app={}", user_id, app_id);
            return Err(AppError::AuthorizationError("Not authorized to delete this app".to_string()));
        }

        if !self.apps.delete(app_id).await? {
            return Err(AppError::NotFound("Connected app not found".to_string()));
        }

        log::info!("앱 연결 해제: user={} provider={}", user_id, app.provider.as_str());
        Ok(())
    }
}
