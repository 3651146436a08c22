//! OAuth 프로바이더 응답 모델
//!
//! 토큰 엔드포인트와 사용자 정보 엔드포인트의 응답 중 필요한 필드만 정의합니다.
//! Google, Microsoft Graph, Yahoo OpenID 응답을 하나의 구조체로 받습니다.

use serde::Deserialize;

/// 인가 코드 교환 응답
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderTokenResponse {
    pub access_token: String,
    #[serde(default)]
    pub refresh_token: Option<String>,
    /// 액세스 토큰 수명 (초). 누락 시 3600 으로 간주합니다.
    #[serde(default)]
    pub expires_in: Option<i64>,
    #[serde(default)]
    pub token_type: Option<String>,
    #[serde(default)]
    pub scope: Option<String>,
}

impl ProviderTokenResponse {
    pub const DEFAULT_EXPIRES_IN: i64 = 3600;

    pub fn expires_in_seconds(&self) -> i64 {
        self.expires_in.unwrap_or(Self::DEFAULT_EXPIRES_IN)
    }
}

/// 사용자 정보 응답
#[derive(Debug, Clone, Deserialize)]
pub struct ProviderUserInfo {
    #[serde(default)]
    pub email: Option<String>,
    /// Microsoft Graph 의 메일 주소
    #[serde(default)]
    pub mail: Option<String>,
    /// Microsoft Graph 에서 `mail` 이 비어 있을 때의 대체 값
    #[serde(default, rename = "userPrincipalName")]
    pub user_principal_name: Option<String>,
}

impl ProviderUserInfo {
    /// 연결 앱에 저장할 이메일 주소
    pub fn primary_email(&self) -> Option<&str> {
        [&self.email, &self.mail, &self.user_principal_name]
            .into_iter()
            .filter_map(|candidate| candidate.as_deref())
            .find(|value| !value.is_empty())
    }
}
