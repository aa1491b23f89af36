use std::time::Duration;

use anyhow::{Context, Result};
use async_trait::async_trait;
use aws_sdk_s3::{presigning::PresigningConfig, Client};

use crate::storage::UploadSigner;

/// [`UploadSigner`] that presigns S3 `PutObject` requests for one bucket.
#[derive(Debug, Clone)]
pub struct S3UploadSigner {
    client: Client,
    bucket: String,
}

impl S3UploadSigner {
    pub fn new(sdk_config: &aws_config::SdkConfig, bucket: impl Into<String>) -> Self {
        Self::from_client(Client::new(sdk_config), bucket)
    }

    pub fn from_client(client: Client, bucket: impl Into<String>) -> Self {
        Self {
            client,
            bucket: bucket.into(),
        }
    }
}

#[async_trait]
impl UploadSigner for S3UploadSigner {
    async fn presign_put(
        &self,
        key: &str,
        content_type: &str,
        expires_in: Duration,
    ) -> Result<String> {
        let presigning = PresigningConfig::expires_in(expires_in)
            .context("invalid presigning expiry")?;

        // Content-Type is part of the signature, so the upload must declare
        // exactly this type.
        let request = self
            .client
            .put_object()
            .bucket(&self.bucket)
            .key(key)
            .content_type(content_type)
            .presigned(presigning)
            .await
            .with_context(|| format!("failed to presign upload for '{key}'"))?;

        Ok(request.uri().to_string())
    }
}
