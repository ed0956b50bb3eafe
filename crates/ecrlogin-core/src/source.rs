//! 認証トークンの取得元

use crate::error::{LoginError, Result};
use crate::model::AuthorizationRecord;
use async_trait::async_trait;

/// `GetAuthorizationToken` 相当の呼び出しを抽象化するトレイト
#[async_trait]
pub trait TokenSource: Send + Sync {
    /// 認証エントリの一覧を取得
    async fn fetch(&self) -> Result<Vec<AuthorizationRecord>>;
}

/// 認証エントリを取得し、ちょうど 1 件であることを確認する
pub async fn fetch_single<S: TokenSource + ?Sized>(source: &S) -> Result<AuthorizationRecord> {
    let mut records = source.fetch().await?;
    tracing::debug!("ECR returned {} authorization entries", records.len());

    if records.len() != 1 {
        return Err(LoginError::ResponseShape(format!(
            "ECR returned {} tokens, want exactly 1",
            records.len()
        )));
    }

    Ok(records.remove(0))
}
