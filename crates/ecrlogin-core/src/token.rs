//! 認証トークンのデコードと検証

use crate::error::{LoginError, Result};
use crate::model::{AuthorizationRecord, Credential};
use base64::Engine;

/// 認証エントリを login / secret に分解する
///
/// - エンドポイントは `https:` で始まっていること
/// - トークンは標準 Base64 で、デコード結果は UTF-8 であること
/// - 最初の `:` で分割する (secret 側に `:` が残ってもよい)
pub fn decode(record: &AuthorizationRecord) -> Result<Credential> {
    if !record.endpoint.starts_with("https:") {
        return Err(LoginError::EndpointFormat(record.endpoint.clone()));
    }

    let decoded = base64::engine::general_purpose::STANDARD
        .decode(&record.encoded_token)
        .map_err(|e| LoginError::Encoding(format!("failed to decode token: {}", e)))?;

    let pair = String::from_utf8(decoded).map_err(|_| {
        LoginError::Encoding("decoded login:password pair is not valid utf8".to_string())
    })?;

    let (login, secret) = pair.split_once(':').ok_or(LoginError::TokenFormat)?;

    Ok(Credential {
        login: login.to_string(),
        secret: secret.to_string(),
    })
}
