use std::collections::HashMap;
use std::sync::Arc;

use anyhow::Result;
use async_trait::async_trait;
use tokio::sync::RwLock;

use crate::storage::{Entity, Repository};

/// In-memory [`Repository`] for tests and local runs.
///
/// Clones share the same underlying map. Data is lost when the last clone is
/// dropped.
#[derive(Debug, Clone)]
pub struct InMemoryRepository<T> {
    records: Arc<RwLock<HashMap<String, T>>>,
}

impl<T> Default for InMemoryRepository<T> {
    fn default() -> Self {
        Self {
            records: Arc::new(RwLock::new(HashMap::new())),
        }
    }
}

impl<T: Entity> InMemoryRepository<T> {
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a repository pre-populated with `records`.
    pub fn with_records(records: impl IntoIterator<Item = T>) -> Self {
        let map = records
            .into_iter()
            .map(|record| (record.key().to_string(), record))
            .collect();
        Self {
            records: Arc::new(RwLock::new(map)),
        }
    }

    pub async fn len(&self) -> usize {
        self.records.read().await.len()
    }

    pub async fn is_empty(&self) -> bool {
        self.records.read().await.is_empty()
    }
}

#[async_trait]
impl<T: Entity> Repository<T> for InMemoryRepository<T> {
    async fn get(&self, key: &str) -> Result<Option<T>> {
        Ok(self.records.read().await.get(key).cloned())
    }

    async fn put(&self, entity: &T) -> Result<()> {
        self.records
            .write()
            .await
            .insert(entity.key().to_string(), entity.clone());
        Ok(())
    }

    async fn delete(&self, key: &str) -> Result<()> {
        self.records.write().await.remove(key);
        Ok(())
    }

    async fn scan(&self) -> Result<Vec<T>> {
        Ok(self.records.read().await.values().cloned().collect())
    }
}
