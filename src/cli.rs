use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// Seat event guests at tables, keeping groups together
#[derive(Debug, Parser)]
#[command(name = "seating-planner", version)]
pub struct Cli {
    /// Log level (TRACE, DEBUG, INFO, WARN, ERROR)
    #[arg(short = 'l', long = "log-level", global = true)]
    pub log_level: Option<String>,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Subcommand)]
pub enum Command {
    /// Generate a seating plan from a CSV guest list
    Plan {
        /// CSV file with a header row and name/group columns
        #[arg(short, long)]
        guests: PathBuf,

        /// Number of tables at the venue
        #[arg(short, long)]
        tables: u32,

        /// Seats at each table
        #[arg(short, long)]
        seats: u32,

        /// Venue name shown in the output
        #[arg(long, default_value = "")]
        venue_name: String,

        /// Also write the plan to this text file
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// Print the plan as JSON instead of text
        #[arg(long)]
        json: bool,
    },

    /// Serve the JSON API
    Web {
        #[arg(short, long, default_value_t = 8080)]
        port: u16,

        /// Password for the upload endpoint
        #[arg(long, env = "ADMIN_PASSWORD", default_value = "admin123", hide_env_values = true)]
        admin_password: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_is_well_formed() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_plan() {
        let cli = Cli::try_parse_from([
            "seating-planner", "-l", "debug", "plan", "--guests", "guests.csv", "--tables", "4", "--seats", "8", "--json",
        ])
        .unwrap();

        assert_eq!(cli.log_level.as_deref(), Some("debug"));
        match cli.command {
            Command::Plan { tables, seats, json, output, .. } => {
                assert_eq!((tables, seats), (4, 8));
                assert!(json);
                assert!(output.is_none());
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }

    #[test]
    fn test_parse_web_default_port() {
        let cli = Cli::try_parse_from(["seating-planner", "web", "--admin-password", "pw"]).unwrap();
        match cli.command {
            Command::Web { port, admin_password } => {
                assert_eq!(port, 8080);
                assert_eq!(admin_password, "pw");
            }
            other => panic!("unexpected command: {:?}", other),
        }
    }
}
