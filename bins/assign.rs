//! Seed employee to service-provider assignments round-robin.
//!
//! `assign --employees 1,2,7 --providers 2,3,4` assigns employee 1 to
//! provider 2, employee 2 to provider 3 and employee 7 to provider 4.

use std::process::ExitCode;

use chrono::NaiveDate;
use clap::Parser;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "assign", about = "Assign employees to service providers round-robin")]
struct Args {
    /// Employee ids, comma separated
    #[arg(long, value_delimiter = ',', required = true)]
    employees: Vec<i32>,
    /// Provider ids, comma separated; employee i gets provider i % len
    #[arg(long, value_delimiter = ',', required = true)]
    providers: Vec<i32>,
    /// Assignment date (YYYY-MM-DD), defaults to today
    #[arg(long)]
    date: Option<NaiveDate>,
}

async fn run(args: Args) -> anyhow::Result<usize> {
    let db = models::db::connect().await?;
    let assigned_at = args.date.unwrap_or_else(service::domain::today);
    let rows = service::assignment_service::assign_round_robin(&db, &args.employees, &args.providers, assigned_at).await?;
    for row in &rows {
        info!(employee_id = row.employee_id, provider_id = row.provider_id, assigned_at = %row.assigned_at, "assigned");
    }
    Ok(rows.len())
}

#[tokio::main]
async fn main() -> ExitCode {
    dotenvy::dotenv().ok();
    common::utils::logging::init_logging_from_env();
    let args = Args::parse();

    match run(args).await {
        Ok(count) => {
            info!(count, "assignments created");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!(error = %e, "assignment failed");
            ExitCode::FAILURE
        }
    }
}
