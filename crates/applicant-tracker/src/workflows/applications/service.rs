use std::io::{Read, Write};
use std::path::Path;
use std::sync::Arc;

use parking_lot::RwLock;
use tracing::{debug, info, warn};

use super::domain::{ApplicantRecord, ApplicationStatus, ChangeEvent, Clock, NewApplication};
use super::filter::FilterCriteria;
use super::interchange::{export_applications, import_applications, ImportError, ImportSummary};
use super::report::ApplicationReport;
use super::store::{ApplicationStore, StoreError, UndoOutcome};

/// Cloneable handle sharing one store between request handlers.
///
/// Mutations take the write lock for their whole multi-structure update; lookups, filters,
/// reports, and exports share the read lock.
#[derive(Clone, Default)]
pub struct ApplicationService {
    store: Arc<RwLock<ApplicationStore>>,
}

impl ApplicationService {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self::from_store(ApplicationStore::with_clock(clock))
    }

    pub fn from_store(store: ApplicationStore) -> Self {
        Self {
            store: Arc::new(RwLock::new(store)),
        }
    }

    pub fn add(&self, application: NewApplication) -> Result<(), StoreError> {
        let name = application.name.clone();
        let job_id = application.job_id.clone();
        let result = self.store.write().add(application);

        match &result {
            Ok(()) => info!(applicant = %name, %job_id, "application submitted"),
            Err(err) => warn!(applicant = %name, error = %err, "application rejected"),
        }
        result
    }

    pub fn process_next(&self) -> Result<ApplicantRecord, StoreError> {
        let result = self.store.write().process_next();

        match &result {
            Ok(record) => info!(
                applicant = %record.name,
                job_id = %record.job_id,
                status = %record.status,
                "application picked up for review"
            ),
            Err(err) => debug!(error = %err, "no application picked up"),
        }
        result
    }

    pub fn update_status(&self, name: &str, status: ApplicationStatus) -> Result<bool, StoreError> {
        let result = self.store.write().update_status(name, status);

        match &result {
            Ok(true) => info!(applicant = %name, %status, "status updated"),
            Ok(false) => debug!(applicant = %name, %status, "status unchanged"),
            Err(err) => warn!(applicant = %name, error = %err, "status update failed"),
        }
        result
    }

    pub fn undo_last(&self) -> Result<UndoOutcome, StoreError> {
        let result = self.store.write().undo_last();

        match &result {
            Ok(outcome) => info!(
                applicant = %outcome.event.name,
                from = %outcome.reverted_from,
                to = %outcome.event.old_status,
                history_trimmed = outcome.history_trimmed,
                "status change reverted"
            ),
            Err(err) => warn!(error = %err, "undo failed"),
        }
        result
    }

    pub fn search_by_name(&self, name: &str) -> Option<ApplicantRecord> {
        self.store.read().search_by_name(name).cloned()
    }

    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<ApplicantRecord> {
        self.store
            .read()
            .filter(criteria)
            .into_iter()
            .cloned()
            .collect()
    }

    pub fn history(&self, name: &str) -> Vec<ApplicationStatus> {
        self.store.read().history(name)
    }

    pub fn report(&self) -> Result<ApplicationReport, StoreError> {
        self.store.read().report()
    }

    pub fn applications(&self) -> Vec<ApplicantRecord> {
        self.store.read().applications().cloned().collect()
    }

    pub fn applicant_names(&self) -> Vec<String> {
        self.store.read().applicant_names().to_vec()
    }

    pub fn change_log(&self) -> Vec<ChangeEvent> {
        self.store.read().change_log().to_vec()
    }

    pub fn queue_len(&self) -> usize {
        self.store.read().queue_len()
    }

    pub fn len(&self) -> usize {
        self.store.read().len()
    }

    pub fn is_empty(&self) -> bool {
        self.store.read().is_empty()
    }

    /// Import CSV rows under a single write lock so readers never see a partial batch.
    pub fn import_csv<R: Read>(&self, reader: R) -> Result<ImportSummary, ImportError> {
        let summary = {
            let mut store = self.store.write();
            import_applications(&mut store, reader)?
        };

        for skipped in &summary.skipped {
            warn!(
                row = skipped.row,
                applicant = %skipped.name,
                reason = %skipped.reason,
                "skipped application row"
            );
        }
        info!(
            added = summary.added,
            skipped = summary.skipped.len(),
            "applications imported"
        );
        Ok(summary)
    }

    pub fn import_path<P: AsRef<Path>>(&self, path: P) -> Result<ImportSummary, ImportError> {
        let path = path.as_ref();
        debug!(path = %path.display(), "importing applications");
        let file = std::fs::File::open(path)?;
        self.import_csv(file)
    }

    pub fn export_csv<W: Write>(&self, writer: W) -> Result<(), csv::Error> {
        export_applications(&self.store.read(), writer)
    }
}
