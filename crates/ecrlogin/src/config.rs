//! 実行時設定

use std::path::Path;

/// login に使うクライアントを上書きする環境変数
pub const CLIENT_ENV: &str = "DOCKER_LOGIN_ECR_CLIENT";

/// デフォルトのコンテナクライアント
pub const DEFAULT_CLIENT: &str = "docker";

const DEFAULT_PROGRAM: &str = "docker-login-ecr";

/// 一回の実行に必要な設定
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 起動時のプログラム名 (usage 表示用)
    pub program: String,
    /// login サブコマンドを持つクライアント (PATH から探索)
    pub client: String,
}

impl Config {
    pub fn new(program: impl Into<String>, client: Option<String>) -> Self {
        let client = client
            .filter(|c| !c.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_CLIENT.to_string());

        Self {
            program: program.into(),
            client,
        }
    }

    /// 環境変数から設定を組み立てる
    pub fn from_env(program: impl Into<String>) -> Self {
        Self::new(program, std::env::var(CLIENT_ENV).ok())
    }
}

/// 一行の usage
pub fn usage(program: &str) -> String {
    format!("Command {} logs docker client into AWS ECR", program)
}

/// argv[0] からプログラム名を取得
pub fn program_name() -> String {
    std::env::args_os()
        .next()
        .map(|arg0| {
            Path::new(&arg0)
                .file_name()
                .unwrap_or(arg0.as_os_str())
                .to_string_lossy()
                .into_owned()
        })
        .unwrap_or_else(|| DEFAULT_PROGRAM.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_usage() {
        assert_eq!(
            usage("docker-login-ecr"),
            "Command docker-login-ecr logs docker client into AWS ECR"
        );
    }

    #[test]
    fn test_default_client() {
        let config = Config::new("docker-login-ecr", None);
        assert_eq!(config.client, "docker");
        assert_eq!(config.program, "docker-login-ecr");
    }

    #[test]
    fn test_client_override() {
        let config = Config::new("docker-login-ecr", Some("podman".to_string()));
        assert_eq!(config.client, "podman");
    }

    #[test]
    fn test_empty_client_falls_back_to_default() {
        let config = Config::new("docker-login-ecr", Some("  ".to_string()));
        assert_eq!(config.client, "docker");
    }

    #[test]
    fn test_from_env() {
        temp_env::with_var(CLIENT_ENV, Some("nerdctl"), || {
            assert_eq!(Config::from_env("x").client, "nerdctl");
        });
        temp_env::with_var_unset(CLIENT_ENV, || {
            assert_eq!(Config::from_env("x").client, "docker");
        });
    }
}
