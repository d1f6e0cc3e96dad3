use std::collections::{HashMap, VecDeque};
use std::sync::Arc;

use super::domain::{
    ApplicantRecord, ApplicationStatus, ChangeEvent, Clock, NewApplication, SystemClock,
};
use super::filter::FilterCriteria;
use super::history::StatusHistory;
use super::index::SortedNameIndex;
use super::report::ApplicationReport;

/// Failures surfaced by store operations. None of them leave the store unusable.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum StoreError {
    #[error("Name is required.")]
    MissingName,
    #[error("Applicant '{0}' already exists.")]
    DuplicateName(String),
    #[error("Applicant '{0}' not found.")]
    UnknownApplicant(String),
    #[error("Nothing to undo.")]
    NothingToUndo,
    #[error("Applicant '{0}' missing.")]
    ApplicantMissing(String),
    #[error("Queue is empty.")]
    EmptyQueue,
    #[error("No data yet.")]
    EmptyReport,
}

/// Result of reverting the most recent status change.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UndoOutcome {
    pub event: ChangeEvent,
    /// Status the record held immediately before the undo.
    pub reverted_from: ApplicationStatus,
    pub history_trimmed: bool,
}

impl UndoOutcome {
    pub fn message(&self) -> String {
        format!(
            "Reverted {}: {} → {}",
            self.event.name, self.reverted_from, self.event.old_status
        )
    }
}

/// In-memory applicant table with its review queue, undo stack, name index, and histories.
///
/// The queue, change log, and histories reference records by name, so a status change made
/// through any path is visible everywhere.
pub struct ApplicationStore {
    records: HashMap<String, ApplicantRecord>,
    arrival: Vec<String>,
    index: SortedNameIndex,
    queue: VecDeque<String>,
    changes: Vec<ChangeEvent>,
    histories: HashMap<String, StatusHistory>,
    clock: Arc<dyn Clock>,
}

impl Default for ApplicationStore {
    fn default() -> Self {
        Self::new()
    }
}

impl ApplicationStore {
    pub fn new() -> Self {
        Self::with_clock(Arc::new(SystemClock))
    }

    pub fn with_clock(clock: Arc<dyn Clock>) -> Self {
        Self {
            records: HashMap::new(),
            arrival: Vec::new(),
            index: SortedNameIndex::default(),
            queue: VecDeque::new(),
            changes: Vec::new(),
            histories: HashMap::new(),
            clock,
        }
    }

    /// Register a new application as `Submitted` and queue it for review.
    pub fn add(&mut self, application: NewApplication) -> Result<(), StoreError> {
        if application.name.trim().is_empty() {
            return Err(StoreError::MissingName);
        }
        if self.records.contains_key(&application.name) {
            return Err(StoreError::DuplicateName(application.name));
        }

        let record = ApplicantRecord::submitted(application, self.clock.now());
        let name = record.name.clone();

        self.index.insert(&name);
        self.arrival.push(name.clone());
        self.queue.push_back(name.clone());
        self.histories.insert(name.clone(), StatusHistory::new(record.status));
        self.records.insert(name, record);
        Ok(())
    }

    /// Dequeue the oldest pending application. A record still `Submitted` moves to
    /// `Under Review` as part of being picked up.
    pub fn process_next(&mut self) -> Result<ApplicantRecord, StoreError> {
        let name = self.queue.pop_front().ok_or(StoreError::EmptyQueue)?;
        let status = self
            .records
            .get(&name)
            .map(|record| record.status)
            .ok_or_else(|| StoreError::ApplicantMissing(name.clone()))?;

        if status == ApplicationStatus::Submitted {
            self.update_status(&name, ApplicationStatus::UnderReview)?;
        }

        self.records
            .get(&name)
            .cloned()
            .ok_or(StoreError::ApplicantMissing(name))
    }

    /// Apply a status change. Returns `Ok(false)` when the status is already current.
    pub fn update_status(
        &mut self,
        name: &str,
        status: ApplicationStatus,
    ) -> Result<bool, StoreError> {
        let record = self
            .records
            .get_mut(name)
            .ok_or_else(|| StoreError::UnknownApplicant(name.to_string()))?;

        let old_status = record.status;
        if old_status == status {
            return Ok(false);
        }

        self.changes.push(ChangeEvent {
            name: record.name.clone(),
            old_status,
            new_status: status,
            timestamp: self.clock.now(),
        });
        record.status = status;
        self.histories
            .entry(record.name.clone())
            .or_insert_with(|| StatusHistory::new(old_status))
            .push(status);
        Ok(true)
    }

    /// Revert the most recent status change.
    pub fn undo_last(&mut self) -> Result<UndoOutcome, StoreError> {
        let event = self.changes.pop().ok_or(StoreError::NothingToUndo)?;
        let record = self
            .records
            .get_mut(&event.name)
            .ok_or_else(|| StoreError::ApplicantMissing(event.name.clone()))?;

        let reverted_from = record.status;
        record.status = event.old_status;

        let history_trimmed = self
            .histories
            .get_mut(&event.name)
            .map(|history| history.trim_if_last(reverted_from))
            .unwrap_or(false);

        Ok(UndoOutcome {
            event,
            reverted_from,
            history_trimmed,
        })
    }

    /// Exact-name lookup through the sorted index.
    pub fn search_by_name(&self, name: &str) -> Option<&ApplicantRecord> {
        if self.index.contains(name) {
            self.records.get(name)
        } else {
            None
        }
    }

    /// Records satisfying every provided criterion, in arrival order.
    pub fn filter(&self, criteria: &FilterCriteria) -> Vec<&ApplicantRecord> {
        if criteria.is_empty() {
            return self.applications().collect();
        }
        self.applications()
            .filter(|record| criteria.matches(record))
            .collect()
    }

    /// Status history oldest first; empty for unknown applicants.
    pub fn history(&self, name: &str) -> Vec<ApplicationStatus> {
        self.histories
            .get(name)
            .map(|history| history.entries().to_vec())
            .unwrap_or_default()
    }

    pub fn report(&self) -> Result<ApplicationReport, StoreError> {
        ApplicationReport::build(self.applications(), self.queue.len())
            .ok_or(StoreError::EmptyReport)
    }

    /// Every record in arrival order.
    pub fn applications(&self) -> impl Iterator<Item = &ApplicantRecord> + '_ {
        self.arrival.iter().filter_map(|name| self.records.get(name))
    }

    pub fn applicant_names(&self) -> &[String] {
        &self.arrival
    }

    pub fn sorted_names(&self) -> &[String] {
        self.index.names()
    }

    /// Pending undo stack, oldest first.
    pub fn change_log(&self) -> &[ChangeEvent] {
        &self.changes
    }

    pub fn queue_len(&self) -> usize {
        self.queue.len()
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    #[cfg(test)]
    pub(crate) fn remove_record_for_tests(&mut self, name: &str) -> Option<ApplicantRecord> {
        self.records.remove(name)
    }

    #[cfg(test)]
    pub(crate) fn push_history_for_tests(&mut self, name: &str, status: ApplicationStatus) {
        if let Some(history) = self.histories.get_mut(name) {
            history.push(status);
        }
    }
}
