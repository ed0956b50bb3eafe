//! 認証情報とリージョンの解決

use aws_config::environment::EnvironmentVariableRegionProvider;
use aws_config::imds;
use aws_config::meta::region::RegionProviderChain;
use aws_config::profile::ProfileFileRegionProvider;
use aws_config::{BehaviorVersion, Region, SdkConfig};
use ecrlogin_core::{LoginError, Result};
use serde::Deserialize;
use std::time::Duration;

const IDENTITY_DOCUMENT_PATH: &str = "/latest/dynamic/instance-identity/document";
const METADATA_DISABLED_ENV: &str = "AWS_EC2_METADATA_DISABLED";

/// インスタンスメタデータからのリージョン取得結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RegionLookup {
    /// EC2 上で実行中。identity document のリージョン
    Found { region: String },
    /// メタデータサービスが無い、または document を読めなかった
    NotAvailable,
}

/// EC2 instance identity document のうち必要な部分
#[derive(Debug, Deserialize)]
struct IdentityDocument {
    region: String,
}

/// identity document からリージョンを取り出す
pub fn parse_identity_document(document: &str) -> RegionLookup {
    match serde_json::from_str::<IdentityDocument>(document) {
        Ok(doc) if !doc.region.is_empty() => RegionLookup::Found { region: doc.region },
        Ok(_) => RegionLookup::NotAvailable,
        Err(e) => {
            tracing::debug!("Failed to parse instance identity document: {}", e);
            RegionLookup::NotAvailable
        }
    }
}

/// IMDS から instance identity document を読む
///
/// 失敗はしない。EC2 の外では `NotAvailable` が普通の結果になる。
pub async fn lookup_instance_region() -> RegionLookup {
    if metadata_disabled(std::env::var(METADATA_DISABLED_ENV).ok().as_deref()) {
        tracing::debug!("{} is set, skipping instance metadata", METADATA_DISABLED_ENV);
        return RegionLookup::NotAvailable;
    }

    let client = imds::Client::builder()
        .max_attempts(1)
        .connect_timeout(Duration::from_secs(1))
        .read_timeout(Duration::from_secs(1))
        .build();

    match client.get(IDENTITY_DOCUMENT_PATH).await {
        Ok(document) => parse_identity_document(document.as_ref()),
        Err(e) => {
            tracing::debug!("Instance metadata not available: {}", e);
            RegionLookup::NotAvailable
        }
    }
}

fn metadata_disabled(value: Option<&str>) -> bool {
    value.is_some_and(|v| v.eq_ignore_ascii_case("true"))
}

/// 環境変数 → 共有 config ファイルの順でリージョンを探すチェーン
///
/// IMDS は `lookup_instance_region` で確認済みなので含めない。
fn fallback_region_chain() -> RegionProviderChain {
    RegionProviderChain::first_try(EnvironmentVariableRegionProvider::new())
        .or_else(ProfileFileRegionProvider::new())
}

/// SDK の共通設定を読み込む
///
/// インスタンスメタデータのリージョンが最優先。
/// 見つからなければ環境変数と共有 config ファイルで決める。
pub async fn load_sdk_config(lookup: RegionLookup) -> Result<SdkConfig> {
    let mut loader = aws_config::defaults(BehaviorVersion::latest());

    match lookup {
        RegionLookup::Found { region } => {
            tracing::debug!("Using region {} from instance metadata", region);
            loader = loader.region(Region::new(region));
        }
        RegionLookup::NotAvailable => {
            tracing::debug!("Falling back to environment / profile region resolution");
            loader = loader.region(fallback_region_chain());
        }
    }

    let config = loader.load().await;

    if config.region().is_none() {
        return Err(LoginError::SessionInit(
            "no region could be resolved; set AWS_REGION or configure a default region"
                .to_string(),
        ));
    }

    Ok(config)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_identity_document() {
        let document = r#"{
            "accountId": "123456789012",
            "architecture": "x86_64",
            "availabilityZone": "ap-northeast-1a",
            "imageId": "ami-0123456789abcdef0",
            "instanceId": "i-0123456789abcdef0",
            "instanceType": "t3.micro",
            "privateIp": "10.0.0.10",
            "region": "ap-northeast-1",
            "version": "2017-09-30"
        }"#;
        assert_eq!(
            parse_identity_document(document),
            RegionLookup::Found {
                region: "ap-northeast-1".to_string()
            }
        );
    }

    #[test]
    fn test_parse_identity_document_garbage() {
        assert_eq!(
            parse_identity_document("<html>not found</html>"),
            RegionLookup::NotAvailable
        );
    }

    #[test]
    fn test_parse_identity_document_missing_region() {
        assert_eq!(
            parse_identity_document(r#"{"accountId": "123456789012"}"#),
            RegionLookup::NotAvailable
        );
        assert_eq!(
            parse_identity_document(r#"{"region": ""}"#),
            RegionLookup::NotAvailable
        );
    }

    #[test]
    fn test_metadata_disabled() {
        assert!(metadata_disabled(Some("true")));
        assert!(metadata_disabled(Some("TRUE")));
        assert!(!metadata_disabled(Some("false")));
        assert!(!metadata_disabled(None));
    }

    #[tokio::test]
    async fn test_load_sdk_config_falls_back_to_env_region() {
        let temp_dir = tempfile::tempdir().unwrap();
        let no_config = temp_dir.path().join("no-config");

        let config = temp_env::async_with_vars(
            [
                ("AWS_REGION", Some("us-west-2".to_string())),
                ("AWS_CONFIG_FILE", Some(no_config.display().to_string())),
            ],
            load_sdk_config(RegionLookup::NotAvailable),
        )
        .await
        .unwrap();
        assert_eq!(config.region().map(|r| r.as_ref()), Some("us-west-2"));
    }

    #[tokio::test]
    async fn test_load_sdk_config_without_region() {
        let temp_dir = tempfile::tempdir().unwrap();
        let no_file = temp_dir.path().join("no-file").display().to_string();

        // IMDS は到達不能なポートを指しておく
        let result = temp_env::async_with_vars(
            [
                ("AWS_REGION", None),
                ("AWS_DEFAULT_REGION", None),
                ("AWS_PROFILE", None),
                ("AWS_CONFIG_FILE", Some(no_file.clone())),
                ("AWS_SHARED_CREDENTIALS_FILE", Some(no_file)),
                (
                    "AWS_EC2_METADATA_SERVICE_ENDPOINT",
                    Some("http://127.0.0.1:9".to_string()),
                ),
            ],
            load_sdk_config(RegionLookup::NotAvailable),
        )
        .await;

        assert!(matches!(result, Err(LoginError::SessionInit(_))));
    }

    #[tokio::test]
    async fn test_load_sdk_config_pins_found_region() {
        let config = load_sdk_config(RegionLookup::Found {
            region: "eu-west-1".to_string(),
        })
        .await
        .unwrap();
        assert_eq!(config.region().map(|r| r.as_ref()), Some("eu-west-1"));
    }
}
