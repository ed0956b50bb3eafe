//! トークン取得から login 実行までの一連の処理

use crate::error::Result;
use crate::invoker::LoginCommand;
use crate::model::LoginInvocation;
use crate::source::{TokenSource, fetch_single};
use crate::token::decode;

/// ECR のトークンを取得してクライアントをログインさせる
///
/// 途中のどこかで失敗した場合、クライアントは起動しない。
pub async fn login<S, C>(source: &S, command: &C, client: &str) -> Result<()>
where
    S: TokenSource + ?Sized,
    C: LoginCommand + ?Sized,
{
    let record = fetch_single(source).await?;
    let credential = decode(&record)?;

    let invocation = LoginInvocation::new(client, &credential.login, &record.endpoint);
    println!("{}", trace_line(&invocation));

    command.run(&invocation, &credential.secret).await
}

/// 実行前に表示するコマンドライン (secret は含まない)
pub fn trace_line(invocation: &LoginInvocation) -> String {
    format!("running: {}", invocation)
}
