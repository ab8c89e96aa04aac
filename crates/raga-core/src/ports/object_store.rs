use async_trait::async_trait;

/// A stored object: raw bytes plus the content type recorded at put time.
#[derive(Debug, Clone)]
pub struct StoredObject {
    pub key: String,
    pub content_type: String,
    pub bytes: Vec<u8>,
}

/// Object metadata, as returned by listings.
#[derive(Debug, Clone, serde::Serialize, serde::Deserialize)]
pub struct ObjectInfo {
    pub key: String,
    pub content_type: String,
    pub size: u64,
}

/// Object store port - flat key namespace over a managed blob service.
#[async_trait]
pub trait ObjectStore: Send + Sync {
    async fn put(&self, key: &str, content_type: &str, bytes: Vec<u8>) -> Result<(), StoreError>;

    async fn get(&self, key: &str) -> Result<Option<StoredObject>, StoreError>;

    async fn delete(&self, key: &str) -> Result<(), StoreError>;

    /// List objects whose key starts with `prefix`, in key order.
    async fn list(&self, prefix: &str) -> Result<Vec<ObjectInfo>, StoreError>;
}

/// Object store operation errors.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("Invalid object key: {0}")]
    InvalidKey(String),

    #[error("Storage backend error: {0}")]
    Backend(String),
}
