//! Storage service implementation using Apache OpenDAL.

use opendal::{ErrorKind, Operator, services};

use super::config::StorageProvider;
use super::error::StorageError;

/// Staging directory, under the local root, for documents being written.
const ATOMIC_WRITE_DIR: &str = ".tmp";

/// Storage service for whole-document reads and writes.
#[derive(Debug, Clone)]
pub struct StorageService {
    operator: Operator,
    provider_name: &'static str,
}

impl StorageService {
    /// Create a new storage service from a provider.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage provider cannot be initialized.
    pub fn from_provider(provider: &StorageProvider) -> Result<Self, StorageError> {
        let operator = Self::create_operator(provider)?;
        Ok(Self {
            operator,
            provider_name: provider.name(),
        })
    }

    /// Create OpenDAL operator from provider config.
    fn create_operator(provider: &StorageProvider) -> Result<Operator, StorageError> {
        match provider {
            StorageProvider::S3 {
                endpoint,
                bucket,
                access_key_id,
                secret_access_key,
                region,
            } => {
                let builder = services::S3::default()
                    .endpoint(endpoint)
                    .bucket(bucket)
                    .access_key_id(access_key_id)
                    .secret_access_key(secret_access_key)
                    .region(region);

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
            StorageProvider::LocalFs { root } => {
                let root = std::path::absolute(root)
                    .map_err(|e| StorageError::configuration(e.to_string()))?;
                let staging = root.join(ATOMIC_WRITE_DIR);
                // Writes land in the staging dir and are renamed over the
                // target, so readers never see a truncated document.
                let builder = services::Fs::default()
                    .root(
                        root.to_str()
                            .ok_or_else(|| StorageError::configuration("invalid path"))?,
                    )
                    .atomic_write_dir(
                        staging
                            .to_str()
                            .ok_or_else(|| StorageError::configuration("invalid path"))?,
                    );

                Ok(Operator::new(builder)
                    .map_err(|e| StorageError::configuration(e.to_string()))?
                    .finish())
            }
        }
    }

    /// Read a whole document.
    ///
    /// # Errors
    ///
    /// Returns `NotFound` if the document does not exist, `Operation` on any
    /// other failure.
    pub async fn read(&self, key: &str) -> Result<Vec<u8>, StorageError> {
        let buffer = self
            .operator
            .read(key)
            .await
            .map_err(|e| StorageError::from_opendal(key, &e))?;
        Ok(buffer.to_vec())
    }

    /// Replace a whole document.
    ///
    /// # Errors
    ///
    /// Returns an error if the write fails.
    pub async fn write(&self, key: &str, data: Vec<u8>) -> Result<(), StorageError> {
        self.operator
            .write(key, data)
            .await
            .map_err(|e| StorageError::from_opendal(key, &e))?;
        Ok(())
    }

    /// Check if a document exists in storage.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be queried.
    pub async fn exists(&self, key: &str) -> Result<bool, StorageError> {
        match self.operator.stat(key).await {
            Ok(_) => Ok(true),
            Err(e) if e.kind() == ErrorKind::NotFound => Ok(false),
            Err(e) => Err(StorageError::from_opendal(key, &e)),
        }
    }

    /// Get the storage provider name.
    #[must_use]
    pub fn provider_name(&self) -> &'static str {
        self.provider_name
    }
}
