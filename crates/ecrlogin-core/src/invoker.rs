//! コンテナクライアントの login サブコマンド実行
//!
//! secret は引数に載せず、子プロセスの stdin にだけ書き込みます。

use crate::error::{LoginError, Result};
use crate::model::LoginInvocation;
use async_trait::async_trait;
use std::io;
use std::process::Stdio;
use tokio::io::AsyncWriteExt;
use tokio::process::Command;

/// login コマンドの実行を抽象化するトレイト
#[async_trait]
pub trait LoginCommand: Send + Sync {
    /// `invocation` を実行し、`secret` を stdin に流し込む
    async fn run(&self, invocation: &LoginInvocation, secret: &str) -> Result<()>;
}

/// 実プロセスを起動する LoginCommand
///
/// stdout / stderr は親プロセスのものをそのまま引き継ぐ。
#[derive(Debug, Default)]
pub struct ProcessLogin;

impl ProcessLogin {
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl LoginCommand for ProcessLogin {
    async fn run(&self, invocation: &LoginInvocation, secret: &str) -> Result<()> {
        let failed = |message: String| LoginError::ExternalCommand {
            program: invocation.program.clone(),
            message,
        };

        tracing::debug!("Spawning: {}", invocation);

        let mut child = Command::new(&invocation.program)
            .args(&invocation.args)
            .stdin(Stdio::piped())
            .stdout(Stdio::inherit())
            .stderr(Stdio::inherit())
            .spawn()
            .map_err(|e| failed(format!("failed to start: {}", e)))?;

        // stdin を drop して EOF を通知する
        let mut write_error = None;
        if let Some(mut stdin) = child.stdin.take() {
            match stdin.write_all(secret.as_bytes()).await {
                Ok(()) => {}
                // stdin を読まずに終了したクライアントは終了ステータスで判定する
                Err(e) if e.kind() == io::ErrorKind::BrokenPipe => {
                    tracing::debug!(
                        "{} closed stdin before reading the password",
                        invocation.program
                    );
                }
                Err(e) => write_error = Some(e),
            }
        }

        let status = child
            .wait()
            .await
            .map_err(|e| failed(format!("failed to wait: {}", e)))?;

        if !status.success() {
            return Err(failed(status.to_string()));
        }

        if let Some(e) = write_error {
            return Err(failed(format!("failed to write password: {}", e)));
        }

        Ok(())
    }
}
