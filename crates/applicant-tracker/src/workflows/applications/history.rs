use super::domain::ApplicationStatus;

/// Status log for one applicant, oldest first. The tail mirrors the record's current status.
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) struct StatusHistory {
    entries: Vec<ApplicationStatus>,
}

impl StatusHistory {
    pub(crate) fn new(initial: ApplicationStatus) -> Self {
        Self {
            entries: vec![initial],
        }
    }

    pub(crate) fn push(&mut self, status: ApplicationStatus) {
        self.entries.push(status);
    }

    pub(crate) fn last(&self) -> Option<ApplicationStatus> {
        self.entries.last().copied()
    }

    /// Drop the tail only when it matches `status`; anything else leaves the log intact.
    pub(crate) fn trim_if_last(&mut self, status: ApplicationStatus) -> bool {
        if self.last() == Some(status) {
            self.entries.pop();
            true
        } else {
            false
        }
    }

    pub(crate) fn entries(&self) -> &[ApplicationStatus] {
        &self.entries
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn starts_with_initial_status() {
        let history = StatusHistory::new(ApplicationStatus::Submitted);
        assert_eq!(history.entries(), [ApplicationStatus::Submitted]);
        assert_eq!(history.last(), Some(ApplicationStatus::Submitted));
    }

    #[test]
    fn trim_only_removes_matching_tail() {
        let mut history = StatusHistory::new(ApplicationStatus::Submitted);
        history.push(ApplicationStatus::Shortlisted);

        assert!(!history.trim_if_last(ApplicationStatus::Rejected));
        assert_eq!(history.entries().len(), 2);

        assert!(history.trim_if_last(ApplicationStatus::Shortlisted));
        assert_eq!(history.entries(), [ApplicationStatus::Submitted]);
    }
}
