mod assess;
mod cli;
mod infra;
mod routes;
mod server;

use strain_triage::error::AppError;

pub async fn run() -> Result<(), AppError> {
    cli::run().await
}
