use applicant_tracker::error::AppError;
use applicant_tracker::workflows::applications::{
    ApplicationReport, ApplicationService, ApplicationStatus, FilterCriteria, NewApplication,
    ProgressStep,
};
use clap::Args;
use std::path::PathBuf;

#[derive(Args, Debug, Default)]
pub(crate) struct DemoArgs {
    /// Skip the undo portion of the walkthrough.
    #[arg(long)]
    pub(crate) skip_undo: bool,
}

#[derive(Args, Debug)]
pub(crate) struct ReportArgs {
    /// CSV export with name,job_id,resume_link,skills,experience,education columns
    #[arg(long)]
    pub(crate) applications_csv: PathBuf,
    /// Pick up this many queued applications before reporting
    #[arg(long, default_value_t = 0)]
    pub(crate) process: usize,
}

pub(crate) fn run_report(args: ReportArgs) -> Result<(), AppError> {
    let ReportArgs {
        applications_csv,
        process,
    } = args;

    let service = ApplicationService::new();
    let summary = service.import_path(&applications_csv)?;
    println!(
        "Imported {} applications from {}",
        summary.added,
        applications_csv.display()
    );
    for skipped in &summary.skipped {
        println!("  - row {} ({}): {}", skipped.row, skipped.name, skipped.reason);
    }

    for _ in 0..process {
        match service.process_next() {
            Ok(record) => println!("Processing: {} (Job: {})", record.name, record.job_id),
            Err(err) => {
                println!("{err}");
                break;
            }
        }
    }

    match service.report() {
        Ok(report) => render_report(&report),
        Err(err) => println!("\n{err}"),
    }

    Ok(())
}

pub(crate) fn run_demo(args: DemoArgs) -> Result<(), AppError> {
    let service = ApplicationService::new();

    println!("Applicant tracking demo");
    println!("\nIntake");
    for application in demo_applications() {
        let name = application.name.clone();
        match service.add(application) {
            Ok(()) => println!("- {name} added successfully!"),
            Err(err) => println!("- {name}: {err}"),
        }
    }
    if let Err(err) = service.add(NewApplication::new("Priya Natarajan", "ENG-204")) {
        println!("- Priya Natarajan (again): {err}");
    }

    println!("\nReview queue (FIFO)");
    for _ in 0..2 {
        match service.process_next() {
            Ok(record) => println!(
                "- Processing: {} (Job: {}) -> {}",
                record.name, record.job_id, record.status
            ),
            Err(err) => println!("- {err}"),
        }
    }
    println!("- {} still queued", service.queue_len());

    println!("\nStatus updates");
    for (name, status) in [
        ("Priya Natarajan", ApplicationStatus::Shortlisted),
        ("Marcus Hale", ApplicationStatus::Rejected),
        ("Lena Okafor", ApplicationStatus::Shortlisted),
    ] {
        match service.update_status(name, status) {
            Ok(true) => println!("- {name} → {status}"),
            Ok(false) => println!("- {name} already {status}"),
            Err(err) => println!("- {err}"),
        }
    }

    if !args.skip_undo {
        println!("\nUndo");
        match service.undo_last() {
            Ok(outcome) => println!("- {}", outcome.message()),
            Err(err) => println!("- {err}"),
        }
    }

    println!("\nBinary search by name");
    for name in ["Lena Okafor", "Dana Whitfield"] {
        match service.search_by_name(name) {
            Some(record) => println!(
                "- {}: {} for {} since {}",
                record.name, record.status, record.job_id, record.date_applied
            ),
            None => println!("- {name}: Not found."),
        }
    }

    println!("\nFilter: job ENG-204 with Rust skills");
    let criteria = FilterCriteria::default()
        .with_job_id("ENG-204")
        .with_skills("rust");
    let matches = service.filter(&criteria);
    if matches.is_empty() {
        println!("- No matches.");
    }
    for record in matches {
        println!("- {} ({})", record.name, record.status);
    }

    println!("\nProgress tracking");
    for name in service.applicant_names() {
        let steps = ProgressStep::from_history(&service.history(&name));
        let rendered: Vec<String> = steps
            .iter()
            .map(|step| format!("Step {}: {}", step.step, step.status))
            .collect();
        println!("- {name}: {}", rendered.join(" | "));
    }

    match service.report() {
        Ok(report) => render_report(&report),
        Err(err) => println!("\n{err}"),
    }

    Ok(())
}

fn demo_applications() -> Vec<NewApplication> {
    vec![
        NewApplication::new("Priya Natarajan", "ENG-204")
            .with_resume_link("https://cv.example.org/priya-natarajan.pdf")
            .with_skills("Rust, PostgreSQL, Kafka")
            .with_experience("6 years platform engineering")
            .with_education("MSc Computer Science"),
        NewApplication::new("Marcus Hale", "ENG-204")
            .with_resume_link("https://cv.example.org/marcus-hale.pdf")
            .with_skills("Java, Spring")
            .with_experience("3 years backend")
            .with_education("BSc Software Engineering"),
        NewApplication::new("Lena Okafor", "DES-118")
            .with_resume_link("https://cv.example.org/lena-okafor.pdf")
            .with_skills("Figma, user research")
            .with_experience("4 years product design")
            .with_education("BA Interaction Design"),
        NewApplication::new("Tomás Ferreira", "ENG-204")
            .with_resume_link("https://cv.example.org/tomas-ferreira.pdf")
            .with_skills("rust, embedded C")
            .with_experience("2 years firmware")
            .with_education("BEng Electronics"),
    ]
}

fn render_report(report: &ApplicationReport) {
    println!("\nDetailed report");
    println!("- Total applications: {}", report.total_applications);
    println!("- Queue length: {}", report.queue_length);
    println!("Applications per job:");
    for (job_id, count) in &report.applications_per_job {
        println!("  - {job_id}: {count}");
    }
    println!("Status summary:");
    println!("  - Shortlisted: {}", report.status_summary.shortlisted);
    println!("  - Rejected: {}", report.status_summary.rejected);
    println!("  - Pending: {}", report.status_summary.pending);
}
