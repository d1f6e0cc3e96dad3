use serde::{Deserialize, Serialize};

use super::domain::ApplicantRecord;

/// Conjunctive filter over the application table.
///
/// `job_id` and `status` must match exactly (status against its display label); `skills`,
/// `experience` and `education` match as case-insensitive substrings. Missing or empty values
/// impose no constraint.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub job_id: Option<String>,
    #[serde(default)]
    pub status: Option<String>,
    #[serde(default)]
    pub skills: Option<String>,
    #[serde(default)]
    pub experience: Option<String>,
    #[serde(default)]
    pub education: Option<String>,
}

impl FilterCriteria {
    pub fn with_job_id(mut self, job_id: impl Into<String>) -> Self {
        self.job_id = Some(job_id.into());
        self
    }

    pub fn with_status(mut self, status: impl Into<String>) -> Self {
        self.status = Some(status.into());
        self
    }

    pub fn with_skills(mut self, skills: impl Into<String>) -> Self {
        self.skills = Some(skills.into());
        self
    }

    pub fn with_experience(mut self, experience: impl Into<String>) -> Self {
        self.experience = Some(experience.into());
        self
    }

    pub fn with_education(mut self, education: impl Into<String>) -> Self {
        self.education = Some(education.into());
        self
    }

    /// True when no criterion would constrain the result.
    pub fn is_empty(&self) -> bool {
        [
            &self.job_id,
            &self.status,
            &self.skills,
            &self.experience,
            &self.education,
        ]
        .into_iter()
        .all(|value| active(value).is_none())
    }

    pub fn matches(&self, record: &ApplicantRecord) -> bool {
        if let Some(job_id) = active(&self.job_id) {
            if record.job_id != job_id {
                return false;
            }
        }

        if let Some(status) = active(&self.status) {
            if record.status.label() != status {
                return false;
            }
        }

        [
            (&self.skills, &record.skills),
            (&self.experience, &record.experience),
            (&self.education, &record.education),
        ]
        .into_iter()
        .all(|(needle, haystack)| match active(needle) {
            Some(needle) => contains_ignore_case(haystack, needle),
            None => true,
        })
    }
}

fn active(value: &Option<String>) -> Option<&str> {
    value.as_deref().filter(|value| !value.is_empty())
}

fn contains_ignore_case(haystack: &str, needle: &str) -> bool {
    haystack.to_lowercase().contains(&needle.to_lowercase())
}
