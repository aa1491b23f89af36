//! Fixtures shared by the unit and routing tests.

use std::sync::Arc;
use std::time::Duration;

use anyhow::{anyhow, Result};
use async_trait::async_trait;

use crate::app::AppState;
use crate::models::{Item, Report};
use crate::storage::{Entity, InMemoryRepository, Repository, UploadSigner};

pub fn item(id: &str, name: &str) -> Item {
    Item {
        item_id: id.to_string(),
        name: name.to_string(),
        description: None,
    }
}

/// Signs nothing; returns a URL that echoes its inputs.
pub struct FakeSigner;

#[async_trait]
impl UploadSigner for FakeSigner {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String> {
        Ok(format!(
            "https://uploads.example.test/{key}?content-type={content_type}&expires={}",
            expires_in.as_secs()
        ))
    }
}

pub struct FailingSigner;

#[async_trait]
impl UploadSigner for FailingSigner {
    async fn presign_put(
        &self,
        _key: &str,
        _content_type: &str,
        _expires_in: Duration,
    ) -> Result<String> {
        Err(anyhow!("credentials unavailable"))
    }
}

/// Repository whose every call fails, standing in for an unreachable table.
pub struct FailingRepository;

#[async_trait]
impl<T: Entity> Repository<T> for FailingRepository {
    async fn get(&self, _key: &str) -> Result<Option<T>> {
        Err(anyhow!("table unavailable"))
    }

    async fn put(&self, _entity: &T) -> Result<()> {
        Err(anyhow!("table unavailable"))
    }

    async fn delete(&self, _key: &str) -> Result<()> {
        Err(anyhow!("table unavailable"))
    }

    async fn scan(&self) -> Result<Vec<T>> {
        Err(anyhow!("table unavailable"))
    }
}

pub fn state_with_items(items: impl IntoIterator<Item = Item>) -> AppState {
    AppState::new(
        Arc::new(InMemoryRepository::with_records(items)),
        Arc::new(InMemoryRepository::<Report>::new()),
        Arc::new(FakeSigner),
    )
}

pub fn state_with_signer(signer: Arc<dyn UploadSigner>) -> AppState {
    AppState::new(
        Arc::new(InMemoryRepository::<Item>::new()),
        Arc::new(InMemoryRepository::<Report>::new()),
        signer,
    )
}

pub fn failing_state() -> AppState {
    AppState::new(
        Arc::new(FailingRepository),
        Arc::new(FailingRepository),
        Arc::new(FakeSigner),
    )
}
