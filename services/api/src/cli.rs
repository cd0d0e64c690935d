use crate::commands::{run_compare, run_report, run_score, CompareArgs, ReportArgs, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use mindtype::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "mindtype",
    about = "Score four-axis personality assessments and serve the assessment API",
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
    /// Score a CSV answer file and print the classification
    Score(ScoreArgs),
    /// Compare two type codes for relationship compatibility
    Compare(CompareArgs),
    /// Print the descriptive report and career matches for a type code
    Report(ReportArgs),
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
        Command::Score(args) => run_score(args),
        Command::Compare(args) => run_compare(args),
        Command::Report(args) => run_report(args),
    }
}
