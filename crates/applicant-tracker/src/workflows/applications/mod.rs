//! Applicant tracking: intake, FIFO review queue, status changes with undo, exact-name search,
//! filtering, per-applicant progress, and aggregate reporting.
//!
//! [`ApplicationStore`] owns the data structures and is used directly by single-threaded
//! callers. [`ApplicationService`] shares one store behind a read/write lock for the HTTP
//! router and CLI.

pub mod domain;
pub(crate) mod filter;
pub(crate) mod history;
pub(crate) mod index;
pub mod interchange;
pub(crate) mod report;
pub mod router;
pub mod service;
pub mod store;

#[cfg(test)]
mod tests;

pub use domain::{
    ApplicantRecord, ApplicationStatus, ChangeEvent, Clock, NewApplication, ProgressStep,
    SystemClock, Timestamp, UnknownStatus, TIMESTAMP_FORMAT,
};
pub use filter::FilterCriteria;
pub use interchange::{
    export_applications, import_applications, ImportError, ImportSummary, SkippedRow,
};
pub use report::{ApplicationReport, StatusSummary};
pub use router::{application_router, HistoryView, StatusUpdateRequest};
pub use service::ApplicationService;
pub use store::{ApplicationStore, StoreError, UndoOutcome};
