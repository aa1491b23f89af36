//! # DynamoDB Module
//!
//! Low-level access to the key-value tables backing the handlers.
//!
//! ## Components
//!
//! - `DynamoDb`: A client wrapper for point get, put, delete and full scans.
//! - `Record`: A raw attribute map, the unit DynamoDB reads and writes.
//! - `Table`: A table name together with its partition key attribute.
//!
//! ## Usage
//!
//! The SDK configuration is loaded from the environment:
//!
//! - `AWS_REGION`: The AWS region where the tables live.
//! - `AWS_ACCESS_KEY_ID` / `AWS_SECRET_ACCESS_KEY`: Only needed outside the
//!   function runtime, which provides credentials itself.
//!
//! Optionally, `AWS_ENDPOINT_URL` points the client at DynamoDB Local.
//!
//! Handlers never use this module directly; they go through the
//! [`Repository`](crate::storage::Repository) interface, whose DynamoDB
//! implementation is built on top of it.

mod client;
mod record;
mod table;

pub use client::DynamoDb;
pub use record::Record;
pub use table::Table;
