use std::collections::BTreeMap;

use serde::Serialize;

use super::domain::{ApplicantRecord, ApplicationStatus};

/// Aggregate view of the application table, computed fresh on every request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ApplicationReport {
    pub total_applications: usize,
    pub applications_per_job: BTreeMap<String, usize>,
    pub status_summary: StatusSummary,
    pub queue_length: usize,
}

/// Decision breakdown. `pending` combines submitted and under-review applications.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct StatusSummary {
    #[serde(rename = "Shortlisted")]
    pub shortlisted: usize,
    #[serde(rename = "Rejected")]
    pub rejected: usize,
    #[serde(rename = "Pending")]
    pub pending: usize,
}

impl StatusSummary {
    fn record(&mut self, status: ApplicationStatus) {
        if status.is_pending() {
            self.pending += 1;
        } else if status == ApplicationStatus::Shortlisted {
            self.shortlisted += 1;
        } else {
            self.rejected += 1;
        }
    }
}

impl ApplicationReport {
    /// Returns `None` for an empty table.
    pub(crate) fn build<'a, I>(records: I, queue_length: usize) -> Option<Self>
    where
        I: IntoIterator<Item = &'a ApplicantRecord>,
    {
        let mut total_applications = 0;
        let mut applications_per_job = BTreeMap::new();
        let mut status_summary = StatusSummary::default();

        for record in records {
            total_applications += 1;
            *applications_per_job
                .entry(record.job_id.clone())
                .or_insert(0) += 1;
            status_summary.record(record.status);
        }

        if total_applications == 0 {
            return None;
        }

        Some(Self {
            total_applications,
            applications_per_job,
            status_summary,
            queue_length,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::workflows::applications::domain::Timestamp;

    fn record(name: &str, job_id: &str, status: ApplicationStatus) -> ApplicantRecord {
        ApplicantRecord {
            name: name.to_string(),
            job_id: job_id.to_string(),
            resume_link: String::new(),
            skills: String::new(),
            experience: String::new(),
            education: String::new(),
            status,
            date_applied: "2025-01-02 09:00:00".parse::<Timestamp>().expect("timestamp"),
        }
    }

    #[test]
    fn empty_table_has_no_report() {
        assert!(ApplicationReport::build(std::iter::empty(), 0).is_none());
    }

    #[test]
    fn summary_serializes_with_display_keys() {
        let records = [
            record("Alice", "J1", ApplicationStatus::Shortlisted),
            record("Bob", "J2", ApplicationStatus::Submitted),
        ];
        let report = ApplicationReport::build(&records, 1).expect("report");
        let json = serde_json::to_value(&report).expect("serializes");

        assert_eq!(json["status_summary"]["Shortlisted"], 1);
        assert_eq!(json["status_summary"]["Pending"], 1);
        assert_eq!(json["applications_per_job"]["J2"], 1);
        assert_eq!(json["queue_length"], 1);
    }

    #[test]
    fn under_review_counts_as_pending() {
        let records = [
            record("Alice", "J1", ApplicationStatus::UnderReview),
            record("Bob", "J1", ApplicationStatus::Submitted),
            record("Carol", "J1", ApplicationStatus::Rejected),
        ];
        let report = ApplicationReport::build(&records, 0).expect("report");

        assert_eq!(
            report.status_summary,
            StatusSummary {
                shortlisted: 0,
                rejected: 1,
                pending: 2,
            }
        );
    }
}
