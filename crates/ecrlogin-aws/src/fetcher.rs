//! ECR 認証トークンの取得

use crate::resolver::{load_sdk_config, lookup_instance_region};
use async_trait::async_trait;
use aws_config::SdkConfig;
use aws_sdk_ecr::error::DisplayErrorContext;
use aws_sdk_ecr::types::AuthorizationData;
use ecrlogin_core::{AuthorizationRecord, LoginError, Result, TokenSource};

/// ECR `GetAuthorizationToken` API を使う `TokenSource`
pub struct EcrTokenSource {
    client: aws_sdk_ecr::Client,
}

impl EcrTokenSource {
    pub fn new(config: &SdkConfig) -> Self {
        Self {
            client: aws_sdk_ecr::Client::new(config),
        }
    }

    /// 環境から認証情報とリージョンを解決してクライアントを作成
    pub async fn from_environment() -> Result<Self> {
        let lookup = lookup_instance_region().await;
        let config = load_sdk_config(lookup).await?;
        Ok(Self::new(&config))
    }
}

#[async_trait]
impl TokenSource for EcrTokenSource {
    async fn fetch(&self) -> Result<Vec<AuthorizationRecord>> {
        let output = self
            .client
            .get_authorization_token()
            .send()
            .await
            .map_err(|e| LoginError::Api(DisplayErrorContext(&e).to_string()))?;

        output.authorization_data().iter().map(to_record).collect()
    }
}

fn to_record(data: &AuthorizationData) -> Result<AuthorizationRecord> {
    let endpoint = data.proxy_endpoint().ok_or_else(|| {
        LoginError::ResponseShape("ECR authorization data has no proxy endpoint".to_string())
    })?;
    let token = data.authorization_token().ok_or_else(|| {
        LoginError::ResponseShape("ECR authorization data has no token".to_string())
    })?;

    Ok(AuthorizationRecord::new(endpoint, token))
}
