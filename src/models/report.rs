use chrono::{SecondsFormat, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::storage::Entity;

/// A submitted issue report pointing at an uploaded image.
///
/// `report_id` and `created_at` are always generated server side.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub report_id: String,
    /// ISO-8601 timestamp in UTC.
    pub created_at: String,
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub contact: Option<String>,
    pub location: Location,
    pub image_key: String,
    pub status: ReportStatus,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Location {
    pub lat: f64,
    pub lng: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum ReportStatus {
    New,
}

/// Body of `POST /reports`. Every field is optional here so that absent
/// fields can be reported together instead of failing on the first one.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateReportRequest {
    pub name: Option<String>,
    pub contact: Option<String>,
    pub location: Option<Location>,
    pub image_key: Option<String>,
}

impl CreateReportRequest {
    /// Converts the request into a new report, or returns `None` when a
    /// required field is missing or blank.
    pub fn into_report(self) -> Option<Report> {
        let name = self.name.filter(|name| !name.trim().is_empty())?;
        let location = self.location?;
        let image_key = self.image_key.filter(|key| !key.trim().is_empty())?;

        Some(Report {
            report_id: Uuid::new_v4().to_string(),
            created_at: Utc::now().to_rfc3339_opts(SecondsFormat::Millis, true),
            name,
            contact: self.contact,
            location,
            image_key,
            status: ReportStatus::New,
        })
    }
}

impl Entity for Report {
    const NAME: &'static str = "Report";
    const PARTITION_KEY: &'static str = "reportId";

    fn key(&self) -> &str {
        &self.report_id
    }
}
