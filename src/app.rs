use std::borrow::Cow;
use std::sync::Arc;

use lambda_http::{http::StatusCode, Body, Error, Request, Response};
use tracing::info;

use crate::config::Config;
use crate::dynamodb::DynamoDb;
use crate::handlers;
use crate::http::{
    json_body, not_found_response, path_parameter, preflight_response, query_parameter, respond,
};
use crate::models::{Item, Report};
use crate::storage::{DynamoRepository, Repository, S3UploadSigner, UploadSigner};

const ITEMS_PATH: &str = "/items";

/// Clients shared by every invocation handled by this process.
///
/// Built once at cold start and passed by reference into each handler.
#[derive(Clone)]
pub struct AppState {
    pub items: Arc<dyn Repository<Item>>,
    pub reports: Arc<dyn Repository<Report>>,
    pub uploads: Arc<dyn UploadSigner>,
}

impl AppState {
    pub fn new(
        items: Arc<dyn Repository<Item>>,
        reports: Arc<dyn Repository<Report>>,
        uploads: Arc<dyn UploadSigner>,
    ) -> Self {
        Self {
            items,
            reports,
            uploads,
        }
    }

    /// Wires the DynamoDB and S3 backed implementations.
    pub fn from_config(config: &Config, sdk_config: &aws_config::SdkConfig) -> Self {
        let db = DynamoDb::new(sdk_config);
        info!(
            items_table = %config.items_table,
            reports_table = %config.reports_table,
            bucket = %config.bucket_name,
            "Initialising clients"
        );

        Self::new(
            Arc::new(DynamoRepository::<Item>::new(db.clone(), &config.items_table)),
            Arc::new(DynamoRepository::<Report>::new(db, &config.reports_table)),
            Arc::new(S3UploadSigner::new(sdk_config, &config.bucket_name)),
        )
    }
}

/// Dispatches one HTTP invocation to its handler.
///
/// Handler failures are already rendered as JSON error responses; an `Err`
/// here means a response could not be built at all.
pub async fn route(state: &AppState, event: Request) -> Result<Response<Body>, Error> {
    let method = event.method().as_str().to_string();
    let path = event.uri().path().trim_end_matches('/').to_string();

    match (method.as_str(), path.as_str()) {
        ("OPTIONS", _) => preflight_response(),
        ("GET", ITEMS_PATH) => respond(StatusCode::OK, handlers::list_items(state).await),
        ("POST", ITEMS_PATH) => {
            let result = match json_body(&event) {
                Ok(body) => handlers::create_item(state, body).await,
                Err(e) => Err(e),
            };
            respond(StatusCode::CREATED, result)
        }
        ("GET", p) if is_item_path(p) => {
            let item_id = item_id(&event, p);
            respond(
                StatusCode::OK,
                handlers::get_item(state, item_id.as_deref()).await,
            )
        }
        ("DELETE", p) if is_item_path(p) || p == ITEMS_PATH => {
            let item_id = item_id(&event, p);
            respond(
                StatusCode::OK,
                handlers::delete_item(state, item_id.as_deref()).await,
            )
        }
        ("GET", "/upload-url") => {
            let content_type = query_parameter(&event, "contentType");
            respond(
                StatusCode::OK,
                handlers::generate_upload_url(state, content_type.as_deref()).await,
            )
        }
        ("POST", "/reports") => {
            let result = match json_body(&event) {
                Ok(body) => handlers::create_report(state, body).await,
                Err(e) => Err(e),
            };
            respond(StatusCode::CREATED, result)
        }
        _ => not_found_response(),
    }
}

fn is_item_path(path: &str) -> bool {
    path.strip_prefix(ITEMS_PATH)
        .and_then(|rest| rest.strip_prefix('/'))
        .is_some_and(|id| !id.is_empty() && !id.contains('/'))
}

/// The `itemId` path parameter, or the percent-decoded trailing path segment
/// when the gateway did not populate path parameters.
fn item_id(event: &Request, path: &str) -> Option<String> {
    path_parameter(event, "itemId").or_else(|| {
        path.strip_prefix(ITEMS_PATH)
            .and_then(|rest| rest.strip_prefix('/'))
            .filter(|id| !id.is_empty())
            .map(|id| {
                urlencoding::decode(id)
                    .map(Cow::into_owned)
                    .unwrap_or_else(|_| id.to_string())
            })
    })
}
