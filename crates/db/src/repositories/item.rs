//! Item repository backed by a single collection document.

use std::sync::Arc;

use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use tokio::sync::RwLock;
use tracing::{debug, error, info};

use catalog_core::catalog::{CatalogError, Item, ItemList, ItemStore};
use catalog_core::storage::{StorageError, StorageService};

/// Repository persisting the item collection as one JSON document.
///
/// Every append is a full read-modify-write of the document, performed under
/// an exclusive lock so concurrent appends never lose each other's records.
/// The write runs on its own task: dropping the caller's future does not stop
/// it halfway.
#[derive(Debug, Clone)]
pub struct ItemRepository {
    collection: Arc<Collection>,
}

/// Shared state of one collection document.
#[derive(Debug)]
struct Collection {
    storage: StorageService,
    key: String,
    lock: RwLock<()>,
}

impl ItemRepository {
    /// Creates a new item repository over the document at `key`.
    #[must_use]
    pub fn new(storage: StorageService, key: impl Into<String>) -> Self {
        Self {
            collection: Arc::new(Collection {
                storage,
                key: key.into(),
                lock: RwLock::new(()),
            }),
        }
    }

    /// Storage key of the collection document.
    #[must_use]
    pub fn key(&self) -> &str {
        &self.collection.key
    }

    /// Creates an empty collection document if none exists.
    ///
    /// Returns `true` when a document was created.
    ///
    /// # Errors
    ///
    /// Returns an error if the storage cannot be queried or written.
    pub async fn initialize(&self) -> Result<bool, CatalogError> {
        let collection = &self.collection;
        let _guard = collection.lock.write().await;

        if collection.storage.exists(&collection.key).await? {
            return Ok(false);
        }

        collection.persist(&ItemList::default()).await?;
        info!(
            key = %collection.key,
            provider = collection.storage.provider_name(),
            "Created empty item collection"
        );
        Ok(true)
    }

    /// Encodes a collection as tab-indented JSON.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization fails.
    pub fn encode(list: &ItemList) -> Result<Vec<u8>, CatalogError> {
        let mut buf = Vec::new();
        let mut serializer =
            serde_json::Serializer::with_formatter(&mut buf, PrettyFormatter::with_indent(b"\t"));
        list.serialize(&mut serializer)
            .map_err(|e| CatalogError::encoding(e.to_string()))?;
        Ok(buf)
    }

    /// Decodes a collection document.
    ///
    /// # Errors
    ///
    /// Returns `CorruptData` if the document does not parse or carries fields
    /// this version does not know.
    pub fn decode(bytes: &[u8]) -> Result<ItemList, CatalogError> {
        serde_json::from_slice(bytes).map_err(|e| CatalogError::corrupt_data(e.to_string()))
    }
}

impl Collection {
    async fn load(&self) -> Result<ItemList, CatalogError> {
        let bytes = self.storage.read(&self.key).await.map_err(|e| {
            error!(key = %self.key, error = %e, "Failed to read item collection");
            match e {
                StorageError::NotFound { key } => {
                    CatalogError::storage_unavailable(format!("collection document missing: {key}"))
                }
                other => CatalogError::from(other),
            }
        })?;

        ItemRepository::decode(&bytes).inspect_err(|e| {
            error!(key = %self.key, error = %e, "Item collection does not parse");
        })
    }

    async fn persist(&self, list: &ItemList) -> Result<(), CatalogError> {
        let bytes = ItemRepository::encode(list)?;
        self.storage.write(&self.key, bytes).await.map_err(|e| {
            error!(key = %self.key, error = %e, "Failed to write item collection");
            CatalogError::from(e)
        })
    }

    async fn append(&self, item: Item) -> Result<(), CatalogError> {
        let _guard = self.lock.write().await;

        let mut list = self.load().await?;
        list.items.push(item);
        self.persist(&list).await?;

        debug!(key = %self.key, count = list.items.len(), "Item collection written");
        Ok(())
    }
}

impl ItemStore for ItemRepository {
    async fn read_all(&self) -> Result<Vec<Item>, CatalogError> {
        let _guard = self.collection.lock.read().await;
        Ok(self.collection.load().await?.items)
    }

    async fn append(&self, item: Item) -> Result<(), CatalogError> {
        let collection = Arc::clone(&self.collection);
        tokio::spawn(async move { collection.append(item).await })
            .await
            .map_err(|e| {
                error!(key = %self.collection.key, error = %e, "Append task failed");
                CatalogError::internal(e.to_string())
            })?
    }
}
