use std::io::{Read, Write};

use serde::Deserialize;

use super::domain::NewApplication;
use super::store::{ApplicationStore, StoreError};

#[derive(Debug)]
pub enum ImportError {
    Io(std::io::Error),
    Csv(csv::Error),
}

impl std::fmt::Display for ImportError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImportError::Io(err) => write!(f, "failed to read applications export: {}", err),
            ImportError::Csv(err) => write!(f, "invalid applications CSV data: {}", err),
        }
    }
}

impl std::error::Error for ImportError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            ImportError::Io(err) => Some(err),
            ImportError::Csv(err) => Some(err),
        }
    }
}

impl From<std::io::Error> for ImportError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err)
    }
}

impl From<csv::Error> for ImportError {
    fn from(err: csv::Error) -> Self {
        Self::Csv(err)
    }
}

/// Row the store declined while importing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SkippedRow {
    /// 1-based data row, excluding the header.
    pub row: usize,
    pub name: String,
    pub reason: StoreError,
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ImportSummary {
    pub added: usize,
    pub skipped: Vec<SkippedRow>,
}

#[derive(Debug, Deserialize)]
struct ApplicationRow {
    name: String,
    #[serde(default)]
    job_id: String,
    #[serde(default)]
    resume_link: String,
    #[serde(default)]
    skills: String,
    #[serde(default)]
    experience: String,
    #[serde(default)]
    education: String,
}

impl From<ApplicationRow> for NewApplication {
    fn from(row: ApplicationRow) -> Self {
        NewApplication {
            name: row.name,
            job_id: row.job_id,
            resume_link: row.resume_link,
            skills: row.skills,
            experience: row.experience,
            education: row.education,
        }
    }
}

/// Add every CSV row in file order. Rows the store rejects are collected, not fatal; rows
/// added before a parse failure stay in the store.
pub fn import_applications<R: Read>(
    store: &mut ApplicationStore,
    reader: R,
) -> Result<ImportSummary, ImportError> {
    let mut csv_reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_reader(reader);
    let mut summary = ImportSummary::default();

    for (offset, row) in csv_reader.deserialize::<ApplicationRow>().enumerate() {
        let application = NewApplication::from(row?);
        let name = application.name.clone();

        match store.add(application) {
            Ok(()) => summary.added += 1,
            Err(reason) => summary.skipped.push(SkippedRow {
                row: offset + 1,
                name,
                reason,
            }),
        }
    }

    Ok(summary)
}

/// Write the full table in arrival order, including status labels and application dates.
pub fn export_applications<W: Write>(
    store: &ApplicationStore,
    writer: W,
) -> Result<(), csv::Error> {
    let mut csv_writer = csv::Writer::from_writer(writer);
    let mut wrote_any = false;

    for record in store.applications() {
        csv_writer.serialize(record)?;
        wrote_any = true;
    }

    if !wrote_any {
        csv_writer.write_record(EXPORT_HEADERS)?;
    }

    csv_writer.flush()?;
    Ok(())
}

const EXPORT_HEADERS: [&str; 8] = [
    "name",
    "job_id",
    "resume_link",
    "skills",
    "experience",
    "education",
    "status",
    "date_applied",
];
