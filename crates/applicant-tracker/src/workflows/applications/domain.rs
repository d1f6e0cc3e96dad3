use std::fmt;
use std::str::FromStr;

use chrono::{Local, NaiveDateTime, Timelike};
use serde::{Deserialize, Deserializer, Serialize, Serializer};

/// Wall-clock format shared by records, change events, and CSV exports.
pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Review stage of an application.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ApplicationStatus {
    Submitted,
    #[serde(rename = "Under Review")]
    UnderReview,
    Shortlisted,
    Rejected,
}

impl ApplicationStatus {
    pub const ALL: [ApplicationStatus; 4] = [
        ApplicationStatus::Submitted,
        ApplicationStatus::UnderReview,
        ApplicationStatus::Shortlisted,
        ApplicationStatus::Rejected,
    ];

    pub const fn label(self) -> &'static str {
        match self {
            ApplicationStatus::Submitted => "Submitted",
            ApplicationStatus::UnderReview => "Under Review",
            ApplicationStatus::Shortlisted => "Shortlisted",
            ApplicationStatus::Rejected => "Rejected",
        }
    }

    /// Submitted and under-review applications still await a decision.
    pub const fn is_pending(self) -> bool {
        matches!(
            self,
            ApplicationStatus::Submitted | ApplicationStatus::UnderReview
        )
    }
}

impl fmt::Display for ApplicationStatus {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

impl FromStr for ApplicationStatus {
    type Err = UnknownStatus;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        ApplicationStatus::ALL
            .into_iter()
            .find(|status| status.label() == value)
            .ok_or_else(|| UnknownStatus(value.to_string()))
    }
}

/// Raised when a status label does not match one of the exact labels.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown status '{0}' (expected Submitted, Under Review, Shortlisted, or Rejected)")]
pub struct UnknownStatus(pub String);

/// Second-resolution local timestamp rendered as `YYYY-MM-DD HH:MM:SS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Timestamp(NaiveDateTime);

impl Timestamp {
    pub fn new(value: NaiveDateTime) -> Self {
        Self(value.with_nanosecond(0).unwrap_or(value))
    }
}

impl From<NaiveDateTime> for Timestamp {
    fn from(value: NaiveDateTime) -> Self {
        Self::new(value)
    }
}

impl fmt::Display for Timestamp {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0.format(TIMESTAMP_FORMAT))
    }
}

impl FromStr for Timestamp {
    type Err = chrono::ParseError;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        NaiveDateTime::parse_from_str(value.trim(), TIMESTAMP_FORMAT).map(Self::new)
    }
}

impl Serialize for Timestamp {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.collect_str(self)
    }
}

impl<'de> Deserialize<'de> for Timestamp {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = String::deserialize(deserializer)?;
        raw.parse().map_err(serde::de::Error::custom)
    }
}

/// Source of timestamps for records and change events.
pub trait Clock: Send + Sync {
    fn now(&self) -> Timestamp;
}

/// Local wall clock.
#[derive(Debug, Default, Clone, Copy)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now(&self) -> Timestamp {
        Timestamp::new(Local::now().naive_local())
    }
}

/// Intake payload captured by the application form.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewApplication {
    pub name: String,
    #[serde(default)]
    pub job_id: String,
    #[serde(default)]
    pub resume_link: String,
    #[serde(default)]
    pub skills: String,
    #[serde(default)]
    pub experience: String,
    #[serde(default)]
    pub education: String,
}

impl NewApplication {
    pub fn new(name: impl Into<String>, job_id: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            job_id: job_id.into(),
            ..Self::default()
        }
    }

    pub fn with_resume_link(mut self, resume_link: impl Into<String>) -> Self {
        self.resume_link = resume_link.into();
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = skills.into();
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = experience.into();
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = education.into();
        self
    }
}

/// Stored application. `name` and `date_applied` never change after intake.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ApplicantRecord {
    pub name: String,
    pub job_id: String,
    pub resume_link: String,
    pub skills: String,
    pub experience: String,
    pub education: String,
    pub status: ApplicationStatus,
    pub date_applied: Timestamp,
}

impl ApplicantRecord {
    pub(crate) fn submitted(application: NewApplication, date_applied: Timestamp) -> Self {
        let NewApplication {
            name,
            job_id,
            resume_link,
            skills,
            experience,
            education,
        } = application;

        Self {
            name,
            job_id,
            resume_link,
            skills,
            experience,
            education,
            status: ApplicationStatus::Submitted,
            date_applied,
        }
    }
}

/// One applied status transition, kept on the undo stack.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChangeEvent {
    pub name: String,
    pub old_status: ApplicationStatus,
    pub new_status: ApplicationStatus,
    pub timestamp: Timestamp,
}

/// Numbered entry of an applicant's progress, starting at step 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct ProgressStep {
    pub step: usize,
    pub status: ApplicationStatus,
}

impl ProgressStep {
    pub fn from_history(history: &[ApplicationStatus]) -> Vec<ProgressStep> {
        history
            .iter()
            .enumerate()
            .map(|(index, status)| ProgressStep {
                step: index + 1,
                status: *status,
            })
            .collect()
    }
}
