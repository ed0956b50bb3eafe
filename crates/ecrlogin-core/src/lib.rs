//! docker-login-ecr のコア
//!
//! AWS に直接依存しない部分をまとめたクレートです。
//! 認証エントリのモデル、トークンのデコードと検証、
//! `docker login` の実行、それらをつなぐパイプラインを提供します。

pub mod error;
pub mod invoker;
pub mod model;
pub mod pipeline;
pub mod source;
pub mod token;

pub use error::{LoginError, Result};
pub use invoker::{LoginCommand, ProcessLogin};
pub use model::{AuthorizationRecord, Credential, LoginInvocation};
pub use pipeline::{login, trace_line};
pub use source::{TokenSource, fetch_single};
pub use token::decode;
