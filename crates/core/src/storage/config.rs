//! Storage configuration types.

use serde::{Deserialize, Serialize};
use std::path::PathBuf;

use catalog_shared::{DataConfig, S3Config};

/// Storage provider configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum StorageProvider {
    /// S3-compatible storage: Cloudflare R2, Supabase, AWS S3, DigitalOcean Spaces
    S3 {
        /// S3 endpoint URL.
        endpoint: String,
        /// S3 bucket name.
        bucket: String,
        /// AWS access key ID.
        access_key_id: String,
        /// AWS secret access key.
        secret_access_key: String,
        /// AWS region.
        region: String,
    },
    /// Local filesystem
    LocalFs {
        /// Root directory path.
        root: PathBuf,
    },
}

impl StorageProvider {
    /// Create S3-compatible provider (Cloudflare R2, Supabase, AWS S3).
    #[must_use]
    pub fn s3(
        endpoint: impl Into<String>,
        bucket: impl Into<String>,
        access_key_id: impl Into<String>,
        secret_access_key: impl Into<String>,
        region: impl Into<String>,
    ) -> Self {
        Self::S3 {
            endpoint: endpoint.into(),
            bucket: bucket.into(),
            access_key_id: access_key_id.into(),
            secret_access_key: secret_access_key.into(),
            region: region.into(),
        }
    }

    /// Create local filesystem provider.
    #[must_use]
    pub fn local_fs(root: impl Into<PathBuf>) -> Self {
        Self::LocalFs { root: root.into() }
    }

    /// Pick the provider described by the data configuration.
    ///
    /// S3 settings win over the local directory when both are present.
    #[must_use]
    pub fn from_data_config(data: &DataConfig) -> Self {
        match &data.s3 {
            Some(S3Config {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            }) => Self::s3(endpoint, bucket, access_key_id, secret_access_key, region),
            None => Self::local_fs(&data.dir),
        }
    }

    /// Get the provider name for logging.
    #[must_use]
    pub fn name(&self) -> &'static str {
        match self {
            Self::S3 { .. } => "s3",
            Self::LocalFs { .. } => "local",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_storage_provider_s3() {
        let provider = StorageProvider::s3(
            "https://account.r2.cloudflarestorage.com",
            "catalog",
            "access_key",
            "secret_key",
            "auto",
        );
        assert_eq!(provider.name(), "s3");
    }

    #[test]
    fn test_storage_provider_local() {
        let provider = StorageProvider::local_fs("./jsons");
        assert_eq!(provider.name(), "local");
    }

    #[test]
    fn test_from_data_config_defaults_to_local_dir() {
        let provider = StorageProvider::from_data_config(&DataConfig::default());
        assert!(matches!(
            provider,
            StorageProvider::LocalFs { ref root } if root == &PathBuf::from("jsons")
        ));
    }

    #[test]
    fn test_from_data_config_prefers_s3() {
        let data = DataConfig {
            s3: Some(S3Config {
                endpoint: "http://localhost:9001".to_string(),
                bucket: "catalog".to_string(),
                access_key_id: "minio".to_string(),
                secret_access_key: "minio123".to_string(),
                region: "auto".to_string(),
            }),
            ..DataConfig::default()
        };
        let provider = StorageProvider::from_data_config(&data);
        assert!(matches!(
            provider,
            StorageProvider::S3 { ref endpoint, ref bucket, ref access_key_id, ref secret_access_key, ref region }
                if endpoint == "http://localhost:9001"
                    && bucket == "catalog"
                    && access_key_id == "minio"
                    && secret_access_key == "minio123"
                    && region == "auto"
        ));
    }
}
