use std::time::Duration;

use serde::Serialize;
use tracing::{error, info, instrument, warn};
use uuid::Uuid;

use crate::app::AppState;
use crate::error::ApiError;

pub const UPLOAD_PREFIX: &str = "uploads/";
pub const UPLOAD_URL_TTL: Duration = Duration::from_secs(300);
pub const DEFAULT_CONTENT_TYPE: &str = "image/jpeg";
const DEFAULT_EXTENSION: &str = "jpeg";

/// A signed upload URL and the object key it writes to. Not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UploadTicket {
    pub upload_url: String,
    pub key: String,
}

/// `GET /upload-url?contentType=image/png`
#[instrument(skip(state))]
pub async fn generate_upload_url(
    state: &AppState,
    content_type: Option<&str>,
) -> Result<UploadTicket, ApiError> {
    let content_type = content_type.unwrap_or(DEFAULT_CONTENT_TYPE);
    if !content_type.starts_with("image/") {
        warn!(content_type, "Rejected non-image content type");
        return Err(ApiError::InvalidInput(
            "contentType must be an image/* type".to_string(),
        ));
    }

    let key = format!(
        "{UPLOAD_PREFIX}{}.{}",
        Uuid::new_v4(),
        extension_for(content_type)
    );

    match state
        .uploads
        .presign_put(&key, content_type, UPLOAD_URL_TTL)
        .await
    {
        Ok(upload_url) => {
            info!(key = %key, "Issued upload URL");
            Ok(UploadTicket { upload_url, key })
        }
        Err(e) => {
            error!(key = %key, error = %e, "Failed to sign upload URL");
            Err(e.into())
        }
    }
}

/// File extension for an `image/*` content type: the subtype without
/// parameters, or `jpeg` if there is none.
fn extension_for(content_type: &str) -> &str {
    content_type
        .split_once('/')
        .map(|(_, subtype)| subtype.split(';').next().unwrap_or_default().trim())
        .filter(|subtype| !subtype.is_empty())
        .unwrap_or(DEFAULT_EXTENSION)
}
