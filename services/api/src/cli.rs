use crate::demo::{run_demo, run_progress_report, DemoArgs, ProgressReportArgs};
use crate::server;
use center_onboard::error::AppError;
use clap::{Args, Parser, Subcommand};

#[derive(Parser, Debug)]
#[command(
    name = "Treatment Center Onboarding Service",
    about = "Run and demonstrate the treatment center onboarding progress service from the command line",
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
    /// Compute onboarding progress reports offline
    Progress {
        #[command(subcommand)]
        command: ProgressCommand,
    },
    /// Run a scripted wizard walk-through from empty snapshot to submission
    Demo(DemoArgs),
}

#[derive(Subcommand, Debug)]
enum ProgressCommand {
    /// Render a progress report for a saved form snapshot
    Report(ProgressReportArgs),
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
        Command::Progress {
            command: ProgressCommand::Report(args),
        } => run_progress_report(args),
        Command::Demo(args) => run_demo(args),
    }
}
