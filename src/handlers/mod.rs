//! One function per HTTP operation.
//!
//! Each handler performs at most one store or storage call and returns
//! either its payload or an [`ApiError`](crate::error::ApiError). Routing and
//! response encoding live in [`app`](crate::app).

mod items;
mod reports;
mod uploads;

pub use items::{create_item, delete_item, get_item, list_items, DeleteConfirmation};
pub use reports::create_report;
pub use uploads::{
    generate_upload_url, UploadTicket, DEFAULT_CONTENT_TYPE, UPLOAD_PREFIX, UPLOAD_URL_TTL,
};
