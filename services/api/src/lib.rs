mod cli;
mod infra;
mod routes;
mod scoring;
mod server;

use coaching_eval::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
