//! ECR 認証まわりのデータモデル

use std::fmt;

/// `GetAuthorizationToken` が返す認証エントリ 1 件分
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AuthorizationRecord {
    /// レジストリのエンドポイント (例: `https://123.dkr.ecr.us-east-1.amazonaws.com`)
    pub endpoint: String,
    /// Base64エンコードされた "login:secret"
    pub encoded_token: String,
}

impl AuthorizationRecord {
    pub fn new(endpoint: impl Into<String>, encoded_token: impl Into<String>) -> Self {
        Self {
            endpoint: endpoint.into(),
            encoded_token: encoded_token.into(),
        }
    }
}

/// デコード済みの認証情報
#[derive(Clone, PartialEq, Eq)]
pub struct Credential {
    pub login: String,
    pub secret: String,
}

impl fmt::Debug for Credential {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Credential")
            .field("login", &self.login)
            .field("secret", &"<redacted>")
            .finish()
    }
}

/// 実行する login コマンドライン
///
/// secret は引数に含めず、常に stdin 経由で渡す。
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInvocation {
    pub program: String,
    pub args: Vec<String>,
}

impl LoginInvocation {
    /// `<program> login --username <login> --password-stdin <endpoint>` を組み立てる
    pub fn new(program: impl Into<String>, login: &str, endpoint: &str) -> Self {
        Self {
            program: program.into(),
            args: vec![
                "login".to_string(),
                "--username".to_string(),
                login.to_string(),
                "--password-stdin".to_string(),
                endpoint.to_string(),
            ],
        }
    }
}

impl fmt::Display for LoginInvocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.program)?;
        for arg in &self.args {
            write!(f, " {}", arg)?;
        }
        Ok(())
    }
}
