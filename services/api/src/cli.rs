use crate::demo::{run_demo, run_report, DemoArgs, ReportArgs};
use crate::server;
use applicant_tracker::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Applicant Tracker",
    about = "Run the applicant tracking service or explore it from the command line",
    version
)]
struct Cli {
    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Start the HTTP service (default command)
    Serve(ServeArgs),
    /// Import applications from CSV and print the aggregate report
    Report(ReportArgs),
    /// Walk through intake, review, undo, search, filter, and reporting
    Demo(DemoArgs),
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Report(args) => run_report(args),
        Command::Demo(args) => run_demo(args),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn serve_is_the_default_command() {
        let cli = Cli::try_parse_from(["applicant-tracker-api"]).expect("parses");
        assert!(cli.command.is_none());
    }

    #[test]
    fn report_requires_a_csv_path() {
        assert!(Cli::try_parse_from(["applicant-tracker-api", "report"]).is_err());

        let cli = Cli::try_parse_from([
            "applicant-tracker-api",
            "report",
            "--applications-csv",
            "applicants.csv",
            "--process",
            "2",
        ])
        .expect("parses");
        match cli.command {
            Some(Command::Report(args)) => {
                assert_eq!(args.applications_csv.to_string_lossy(), "applicants.csv");
                assert_eq!(args.process, 2);
            }
            other => panic!("expected report command, got {other:?}"),
        }
    }

    #[test]
    fn serve_accepts_overrides() {
        let cli = Cli::try_parse_from(["applicant-tracker-api", "serve", "--port", "8080"])
            .expect("parses");
        match cli.command {
            Some(Command::Serve(args)) => {
                assert_eq!(args.port, Some(8080));
                assert!(args.host.is_none());
            }
            other => panic!("expected serve command, got {other:?}"),
        }
    }
}
