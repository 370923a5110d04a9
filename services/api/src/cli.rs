use crate::scoring::{run_criteria, run_score, ScoreArgs};
use crate::server;
use clap::{Args, Parser, Subcommand};
use coaching_eval::error::AppError;

#[derive(Parser, Debug)]
#[command(
    name = "Coaching Evaluation Service",
    about = "Score field coaching visits and serve the coaching report API",
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
    /// Print the coaching criteria grouped by category
    Criteria,
    /// Score a ratings file and print the breakdown
    Score(ScoreArgs),
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
        Command::Criteria => {
            run_criteria();
            Ok(())
        }
        Command::Score(args) => run_score(args),
    }
}
