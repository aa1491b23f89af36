use serde::Serialize;
use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{Item, NewItem};
use crate::storage::Entity;
use crate::validation::create_item_schema;

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

/// `GET /items/{itemId}`
#[instrument(skip(state))]
pub async fn get_item(state: &AppState, item_id: Option<&str>) -> Result<Item, ApiError> {
    let Some(item_id) = item_id else {
        warn!("Missing itemId path parameter");
        return Err(ApiError::MissingParameter(Item::PARTITION_KEY));
    };

    match state.items.get(item_id).await {
        Ok(Some(item)) => Ok(item),
        Ok(None) => {
            warn!(item_id, "Item not found");
            Err(ApiError::NotFound(Item::NAME))
        }
        Err(e) => {
            error!(item_id, error = %e, "Failed to get item");
            Err(e.into())
        }
    }
}

/// `GET /items`
///
/// Full scan with no pagination: the response holds every stored item.
#[instrument(skip(state))]
pub async fn list_items(state: &AppState) -> Result<Vec<Item>, ApiError> {
    match state.items.scan().await {
        Ok(items) => {
            info!(count = items.len(), "Listed items");
            Ok(items)
        }
        Err(e) => {
            error!(error = %e, "Failed to list items");
            Err(e.into())
        }
    }
}

/// `DELETE /items/{itemId}`
///
/// Deleting a key that does not exist succeeds like any other delete.
#[instrument(skip(state))]
pub async fn delete_item(
    state: &AppState,
    item_id: Option<&str>,
) -> Result<DeleteConfirmation, ApiError> {
    let Some(item_id) = item_id else {
        warn!("Missing itemId path parameter");
        return Err(ApiError::MissingParameter(Item::PARTITION_KEY));
    };

    match state.items.delete(item_id).await {
        Ok(()) => {
            info!(item_id, "Item deleted");
            Ok(DeleteConfirmation {
                message: "Item deleted successfully".to_string(),
            })
        }
        Err(e) => {
            error!(item_id, error = %e, "Failed to delete item");
            Err(e.into())
        }
    }
}

/// `POST /items`
#[instrument(skip(state, body))]
pub async fn create_item(state: &AppState, body: Value) -> Result<Item, ApiError> {
    if let Err(e) = create_item_schema().validate(&body) {
        warn!(error = %e, "Rejected item payload");
        return Err(e.into());
    }

    let new_item: NewItem = serde_json::from_value(body)?;
    let item = Item::create(new_item);

    match state.items.put(&item).await {
        Ok(()) => {
            info!(item_id = %item.item_id, "Item created");
            Ok(item)
        }
        Err(e) => {
            error!(item_id = %item.item_id, error = %e, "Failed to create item");
            Err(e.into())
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::{failing_state, item, state_with_items};
    use serde_json::json;

    #[tokio::test]
    async fn test_get_item_found() {
        let state = state_with_items([item("abc123", "Widget")]);

        let found = get_item(&state, Some("abc123")).await.unwrap();
        assert_eq!(found, item("abc123", "Widget"));
    }

    #[tokio::test]
    async fn test_get_item_not_found() {
        let state = state_with_items([]);

        let err = get_item(&state, Some("missing")).await.unwrap_err();
        assert!(matches!(err, ApiError::NotFound("Item")));
    }

    #[tokio::test]
    async fn test_missing_item_id_skips_store() {
        // A failing store would turn any store call into InternalFailure.
        let state = failing_state();

        let err = get_item(&state, None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("itemId")));

        let err = delete_item(&state, None).await.unwrap_err();
        assert!(matches!(err, ApiError::MissingParameter("itemId")));
    }

    #[tokio::test]
    async fn test_store_failure_is_internal() {
        let state = failing_state();

        let err = get_item(&state, Some("abc123")).await.unwrap_err();
        assert!(matches!(err, ApiError::InternalFailure(ref msg) if msg.contains("unavailable")));

        assert!(matches!(
            list_items(&state).await.unwrap_err(),
            ApiError::InternalFailure(_)
        ));
        assert!(matches!(
            delete_item(&state, Some("abc123")).await.unwrap_err(),
            ApiError::InternalFailure(_)
        ));
    }

    #[tokio::test]
    async fn test_delete_item_is_idempotent() {
        let state = state_with_items([item("abc123", "Widget")]);

        for _ in 0..2 {
            let confirmation = delete_item(&state, Some("abc123")).await.unwrap();
            assert_eq!(confirmation.message, "Item deleted successfully");
        }
        assert!(matches!(
            get_item(&state, Some("abc123")).await,
            Err(ApiError::NotFound(_))
        ));
    }

    #[tokio::test]
    async fn test_list_items_matches_store_size() {
        let state = state_with_items([]);
        assert!(list_items(&state).await.unwrap().is_empty());

        let state = state_with_items([
            item("a1", "Widget"),
            item("b2", "Gadget"),
            item("c3", "Gizmo"),
        ]);
        assert_eq!(list_items(&state).await.unwrap().len(), 3);
    }

    #[tokio::test]
    async fn test_create_item_stores_record() {
        let state = state_with_items([]);

        let created = create_item(&state, json!({"name": "Widget", "description": "blue"}))
            .await
            .unwrap();

        assert_eq!(created.name, "Widget");
        let stored = get_item(&state, Some(created.item_id.as_str())).await.unwrap();
        assert_eq!(stored, created);
    }

    #[tokio::test]
    async fn test_create_item_validation() {
        let state = state_with_items([]);

        let err = create_item(&state, json!({"description": "no name"}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::MissingFields(ref fields) if fields == &["name"]));

        let err = create_item(&state, json!({"name": ["Widget"]}))
            .await
            .unwrap_err();
        assert!(matches!(err, ApiError::InvalidInput(_)));
    }
}
