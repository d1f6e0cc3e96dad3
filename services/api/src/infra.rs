use applicant_tracker::config::IntakeConfig;
use applicant_tracker::workflows::applications::{ApplicationService, ImportError};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::Arc;
use tracing::info;

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Build the store for this process, importing the configured seed CSV when present.
pub(crate) fn seeded_service(intake: &IntakeConfig) -> Result<ApplicationService, ImportError> {
    let service = ApplicationService::new();

    if let Some(path) = &intake.seed_csv {
        let summary = service.import_path(path)?;
        info!(
            path = %path.display(),
            added = summary.added,
            skipped = summary.skipped.len(),
            "seeded applications"
        );
    }

    Ok(service)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    #[test]
    fn seeded_service_without_csv_is_empty() {
        let service = seeded_service(&IntakeConfig::default()).expect("no seed needed");
        assert!(service.is_empty());
    }

    #[test]
    fn missing_seed_file_is_an_io_error() {
        let intake = IntakeConfig {
            seed_csv: Some(PathBuf::from("does/not/exist/applicants.csv")),
        };
        assert!(matches!(seeded_service(&intake), Err(ImportError::Io(_))));
    }
}
