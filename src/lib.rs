//! # Serverless Items
//!
//! Function handlers for a small CRUD API over a key-value table:
//!
//! - item get, list, create and delete (`/items`),
//! - presigned image uploads to object storage (`/upload-url`),
//! - issue reports referencing an uploaded image (`/reports`),
//! - an event-bus consumer for item notifications.
//!
//! The HTTP handlers run in the `serverless-items` binary and the event
//! consumer in `event-processor`. Both are stateless between invocations.

pub mod app;
pub mod config;
pub mod dynamodb;
pub mod error;
pub mod events;
pub mod handlers;
pub mod http;
pub mod logging;
pub mod models;
pub mod storage;
pub mod validation;

#[cfg(test)]
mod test_support;
