//! Response building and request accessors for HTTP-triggered invocations.

use lambda_http::{http::StatusCode, Body, Error, Request, RequestExt, Response};
use serde::Serialize;
use serde_json::json;

use crate::error::ApiError;

const ALLOWED_METHODS: &str = "GET,POST,DELETE,OPTIONS";
const ALLOWED_HEADERS: &str = "Content-Type,Authorization";

/// Serializes `body` as the JSON payload of a response.
pub fn json_response<T: Serialize>(status: StatusCode, body: &T) -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(status)
        .header("Content-Type", "application/json")
        .header("Access-Control-Allow-Origin", "*")
        .body(Body::Text(serde_json::to_string(body)?))?)
}

/// Renders an [`ApiError`] as `{"error": message}`.
pub fn error_response(err: &ApiError) -> Result<Response<Body>, Error> {
    json_response(err.status_code(), &json!({ "error": err.to_string() }))
}

/// Converts a handler result into a response.
pub fn respond<T: Serialize>(
    status: StatusCode,
    result: Result<T, ApiError>,
) -> Result<Response<Body>, Error> {
    match result {
        Ok(body) => json_response(status, &body),
        Err(err) => error_response(&err),
    }
}

/// Answers a CORS preflight request.
pub fn preflight_response() -> Result<Response<Body>, Error> {
    Ok(Response::builder()
        .status(StatusCode::OK)
        .header("Access-Control-Allow-Origin", "*")
        .header("Access-Control-Allow-Methods", ALLOWED_METHODS)
        .header("Access-Control-Allow-Headers", ALLOWED_HEADERS)
        .body(Body::Empty)?)
}

pub fn not_found_response() -> Result<Response<Body>, Error> {
    json_response(StatusCode::NOT_FOUND, &json!({ "error": "Not found" }))
}

/// Returns a non-empty path parameter populated by the gateway.
pub fn path_parameter(event: &Request, name: &str) -> Option<String> {
    event
        .path_parameters()
        .first(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Returns a non-empty query string parameter.
pub fn query_parameter(event: &Request, name: &str) -> Option<String> {
    event
        .query_string_parameters()
        .first(name)
        .filter(|value| !value.is_empty())
        .map(str::to_string)
}

/// Parses the request body as JSON. An empty body parses as `{}`.
pub fn json_body(event: &Request) -> Result<serde_json::Value, ApiError> {
    let body = event.body();
    if body.is_empty() {
        return Ok(json!({}));
    }
    Ok(serde_json::from_slice(body.as_ref())?)
}
