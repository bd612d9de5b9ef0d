use clap::{Parser, Subcommand};
use std::path::PathBuf;

const LONG_ABOUT: &str = r#"
Taskboard - a small task-management service

Runs a REST API over a SQLite database together with a bundled
single-page web client. Tasks move through a simple lifecycle:
created active, soft-deleted into the trash, restored out of it,
or permanently removed.

Typical usage:
  taskboard serve                 Start on 127.0.0.1:5000 with ./taskboard.db
  taskboard serve --port 8080     Pick another port
  taskboard serve --open          Open the UI in a browser
  taskboard init --db tasks.db    Create and migrate a database ahead of time

The database path can also be set with the TASKBOARD_DB environment
variable; the --db flag wins when both are present.
"#;

#[derive(Parser, Clone)]
#[command(name = "taskboard")]
#[command(about = "Task management over HTTP - create, complete, trash, restore")]
#[command(long_about = LONG_ABOUT)]
#[command(version)]
pub struct Cli {
    /// Enable verbose output (-v)
    #[arg(short, long, action = clap::ArgAction::Count)]
    pub verbose: u8,

    /// Suppress non-error output (-q)
    #[arg(short, long)]
    pub quiet: bool,

    /// Output logs in JSON format
    #[arg(long)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Clone)]
pub enum Commands {
    /// Start the HTTP server and web client
    Serve {
        /// Address to bind
        #[arg(long, default_value = "127.0.0.1")]
        host: String,

        /// Port to bind (default: 5000)
        #[arg(long)]
        port: Option<u16>,

        /// Path to the SQLite database (default: ./taskboard.db, or TASKBOARD_DB)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Open the web client in a browser once the server is up
        #[arg(long)]
        open: bool,
    },

    /// Create and migrate a database file without starting the server
    Init {
        /// Path to the SQLite database (default: ./taskboard.db, or TASKBOARD_DB)
        #[arg(long)]
        db: Option<PathBuf>,

        /// Recreate the database from scratch if it already exists
        #[arg(long)]
        force: bool,
    },
}

pub const DEFAULT_PORT: u16 = 5000;
pub const DEFAULT_DB_FILE: &str = "taskboard.db";

/// Resolve the database path: flag, then environment, then default.
pub fn resolve_db_path(flag: Option<PathBuf>) -> PathBuf {
    flag.or_else(|| std::env::var("TASKBOARD_DB").ok().map(PathBuf::from))
        .unwrap_or_else(|| PathBuf::from(DEFAULT_DB_FILE))
}
