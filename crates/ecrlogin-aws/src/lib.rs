//! docker-login-ecr の AWS バックエンド
//!
//! リージョンを解決し (instance identity document を優先、無ければ
//! 環境変数と共有 config)、ECR から認証トークンを取得します。

pub mod fetcher;
pub mod resolver;

pub use fetcher::EcrTokenSource;
pub use resolver::{RegionLookup, load_sdk_config, lookup_instance_region};
