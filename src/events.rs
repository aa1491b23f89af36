//! Handling of asynchronous event-bus notifications.

use serde::{Deserialize, Deserializer};
use serde_json::Value;
use tracing::{info, warn};

pub const ITEM_CREATED: &str = "ItemCreated";

/// The part of an event-bus envelope the processor reads.
///
/// Parsing never fails on the envelope fields: a missing or non-string
/// `detail-type` or `source` reads as `None`.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct EventNotification {
    #[serde(rename = "detail-type", default, deserialize_with = "string_or_none")]
    pub detail_type: Option<String>,
    #[serde(default, deserialize_with = "string_or_none")]
    pub source: Option<String>,
    #[serde(default)]
    pub detail: Value,
}

impl EventNotification {
    /// Reads the envelope out of a raw invocation payload. A payload that is
    /// not a JSON object yields an envelope with no discriminator.
    pub fn from_payload(payload: Value) -> Self {
        serde_json::from_value(payload).unwrap_or_default()
    }
}

fn string_or_none<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::String(s) => Some(s),
        _ => None,
    })
}

/// What the processor did with an event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum EventOutcome {
    /// Logged only. Covers every discriminator without a dedicated branch.
    Received,
    ItemCreated { item_id: String },
}

pub fn process_event(event: &EventNotification) -> EventOutcome {
    info!(
        detail_type = event.detail_type.as_deref().unwrap_or("unknown"),
        source = event.source.as_deref().unwrap_or("unknown"),
        "Received event"
    );

    if event.detail_type.as_deref() != Some(ITEM_CREATED) {
        return EventOutcome::Received;
    }

    match event.detail.get("itemId").and_then(Value::as_str) {
        Some(item_id) => {
            info!(item_id, "Item created");
            EventOutcome::ItemCreated {
                item_id: item_id.to_string(),
            }
        }
        None => {
            warn!(detail = %event.detail, "ItemCreated event without itemId");
            EventOutcome::Received
        }
    }
}
