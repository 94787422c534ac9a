use crate::assess::{run_assess, run_choices, AssessArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use strain_triage::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Strain Triage",
    about = "Score exercise-related pain reports over HTTP or from the command line",
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
    /// Assess a single JSON injury report and print the result
    Assess(AssessArgs),
    /// Print the allowed values for location, pain type and onset timing
    Choices,
}

#[derive(Args, Debug, Default)]
pub(crate) struct ServeArgs {
    /// Override the configured host for the HTTP server
    #[arg(long)]
    pub(crate) host: Option<String>,
    /// Override the configured port for the HTTP server
    #[arg(long)]
    pub(crate) port: Option<u16>,
    /// Seed the randomized indices instead of drawing from an unseeded source
    #[arg(long)]
    pub(crate) seed: Option<u64>,
}

pub(crate) async fn run() -> Result<(), AppError> {
    let cli = Cli::parse();
    let command = cli
        .command
        .unwrap_or_else(|| Command::Serve(ServeArgs::default()));

    match command {
        Command::Serve(args) => server::run(args).await,
        Command::Assess(args) => run_assess(args),
        Command::Choices => run_choices(),
    }
}
