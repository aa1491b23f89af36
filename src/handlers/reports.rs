use serde_json::Value;
use tracing::{error, info, instrument, warn};

use crate::app::AppState;
use crate::error::ApiError;
use crate::models::{CreateReportRequest, Report};
use crate::validation::create_report_schema;

/// `POST /reports`
///
/// The report id, timestamp and `NEW` status are set here; any values the
/// client sends for them are ignored.
#[instrument(skip(state, body))]
pub async fn create_report(state: &AppState, body: Value) -> Result<Report, ApiError> {
    let schema = create_report_schema();
    if let Err(e) = schema.validate(&body) {
        warn!(error = %e, "Rejected report payload");
        return Err(e.into());
    }

    let request: CreateReportRequest = serde_json::from_value(body).map_err(|e| {
        warn!(error = %e, "Malformed report payload");
        ApiError::InvalidInput(format!("Invalid report: {e}"))
    })?;

    let report = request.into_report().ok_or_else(|| {
        ApiError::MissingFields(
            schema
                .required_fields()
                .into_iter()
                .map(str::to_string)
                .collect(),
        )
    })?;

    match state.reports.put(&report).await {
        Ok(()) => {
            info!(report_id = %report.report_id, image_key = %report.image_key, "Report created");
            Ok(report)
        }
        Err(e) => {
            error!(report_id = %report.report_id, error = %e, "Failed to create report");
            Err(e.into())
        }
    }
}
