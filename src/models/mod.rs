//! Records stored by the handlers.

mod item;
mod report;

pub use item::{Item, NewItem};
pub use report::{CreateReportRequest, Location, Report, ReportStatus};
