mod cli;

use clap::Parser;
use eyre::{Result, WrapErr};
use tracing::info;
use tracing_subscriber::EnvFilter;

use cli::{Cli, Command};
use seating_planner::display::{print_seating, write_seating_to_file};
use seating_planner::parser::load_guests;
use seating_planner::{SeatingPlanner, Venue};

fn setup_logging(log_level: Option<&str>) {
    // --log-level wins over the INFO default, RUST_LOG directives still apply per target
    let level = match log_level.map(str::to_uppercase).as_deref() {
        Some("TRACE") => tracing::Level::TRACE,
        Some("DEBUG") => tracing::Level::DEBUG,
        Some("WARN") | Some("WARNING") => tracing::Level::WARN,
        Some("ERROR") => tracing::Level::ERROR,
        Some("INFO") | None => tracing::Level::INFO,
        Some(other) => {
            eprintln!("Warning: Unknown log-level '{}', defaulting to INFO", other);
            tracing::Level::INFO
        }
    };

    tracing_subscriber::fmt()
        .with_writer(std::io::stderr)
        .with_env_filter(EnvFilter::from_default_env().add_directive(level.into()))
        .init();
}

#[tokio::main]
async fn main() -> Result<()> {
    let cli = Cli::parse();
    setup_logging(cli.log_level.as_deref());

    match cli.command {
        Command::Web { port, admin_password } => {
            println!("Access the API at http://localhost:{}/api", port);
            seating_planner::web::start_server(port, admin_password)
                .await
                .wrap_err("web server failed")?;
        }
        Command::Plan { guests, tables, seats, venue_name, output, json } => {
            let venue = Venue::new(venue_name, 0.0, tables.saturating_mul(seats), tables, seats);
            let planner = SeatingPlanner::new(venue)?;

            let roster = load_guests(&guests)
                .wrap_err_with(|| format!("failed to load guests from {}", guests.display()))?;
            info!(guests = roster.count(), "guest list loaded");

            let plan = planner.generate_seating(roster.all_guests());

            if json {
                println!("{}", serde_json::to_string_pretty(&plan)?);
            } else {
                print_seating(planner.venue(), &plan);
            }

            if let Some(path) = output {
                write_seating_to_file(planner.venue(), &plan, &path)
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
                println!("Seating saved to {}", path.display());
            }
        }
    }

    Ok(())
}
