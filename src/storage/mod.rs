//! Repository and object-storage interfaces used by the handlers.
//!
//! Handlers only see the traits defined here. The concrete clients are built
//! once per process and injected through [`AppState`](crate::app::AppState):
//!
//! - [`DynamoRepository`] and [`S3UploadSigner`] in deployed functions.
//! - [`InMemoryRepository`] in tests and local runs.

mod dynamo;
mod memory;
mod s3;

use std::time::Duration;

use anyhow::Result;
use async_trait::async_trait;
use serde::{de::DeserializeOwned, Serialize};

pub use dynamo::DynamoRepository;
pub use memory::InMemoryRepository;
pub use s3::S3UploadSigner;

/// A record type that lives in its own table under a string partition key.
pub trait Entity: Serialize + DeserializeOwned + Clone + Send + Sync + 'static {
    /// Human readable type name, used in log and error messages.
    const NAME: &'static str;
    /// Attribute holding the primary key.
    const PARTITION_KEY: &'static str;

    fn key(&self) -> &str;
}

/// Point get, unconditional put and delete, and full scan over one entity type.
///
/// Single-record operations are atomic in the underlying store; nothing spans
/// more than one record.
#[async_trait]
pub trait Repository<T: Entity>: Send + Sync {
    async fn get(&self, key: &str) -> Result<Option<T>>;

    /// Writes `entity`, replacing any record with the same key.
    async fn put(&self, entity: &T) -> Result<()>;

    /// Removes the record if present. Missing keys are not an error.
    async fn delete(&self, key: &str) -> Result<()>;

    /// Returns every record. Order is whatever the store yields.
    async fn scan(&self) -> Result<Vec<T>>;
}

/// Issues time-limited URLs that allow a single object upload.
#[async_trait]
pub trait UploadSigner: Send + Sync {
    /// Returns a URL that authorizes one `PUT` of `content_type` to `key`
    /// for `expires_in`.
    async fn presign_put(&self, key: &str, content_type: &str, expires_in: Duration)
        -> Result<String>;
}
