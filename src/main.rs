use clap::Parser;
use std::io::IsTerminal;
use taskboard::cli::{resolve_db_path, Cli, Commands, DEFAULT_PORT};
use taskboard::db::{create_pool, run_migrations};
use taskboard::error::Result;
use taskboard::logging::{cleanup_old_logs, log_file_path, ApplicationMode, LoggingConfig};
use taskboard::server::server::TaskboardServer;

#[tokio::main]
async fn main() {
    let cli = Cli::parse();

    let mut log_config = LoggingConfig::from_args(cli.quiet, cli.verbose > 0, cli.json);

    // A server with stdout redirected logs to a file instead, so detached
    // runs still leave a trail. TASKBOARD_LOG_FILE forces this for tests.
    if matches!(cli.command, Commands::Serve { .. }) {
        let force_file_log = std::env::var("TASKBOARD_LOG_FILE").is_ok();

        if force_file_log || !std::io::stdout().is_terminal() {
            if let Some(path) = log_file_path(ApplicationMode::Server) {
                log_config = LoggingConfig::for_mode(ApplicationMode::Server);
                log_config.file_output = Some(path);
            }
        }
    }

    if let Err(e) = taskboard::logging::init_logging(log_config) {
        eprintln!("Failed to initialize logging: {}", e);
        std::process::exit(1);
    }

    if matches!(cli.command, Commands::Serve { .. }) {
        if let Some(log_dir) = dirs::home_dir().map(|h| h.join(".taskboard").join("logs")) {
            let retention_days = std::env::var("TASKBOARD_LOG_RETENTION_DAYS")
                .ok()
                .and_then(|s| s.parse().ok())
                .unwrap_or(7);

            cleanup_old_logs(&log_dir, retention_days).ok();
        }
    }

    if let Err(e) = run(&cli).await {
        let error_response = e.to_error_response();
        tracing::error!("{}", e);
        eprintln!("{}", serde_json::to_string_pretty(&error_response).unwrap());
        std::process::exit(1);
    }
}

async fn run(cli: &Cli) -> Result<()> {
    match cli.command.clone() {
        Commands::Serve {
            host,
            port,
            db,
            open,
        } => {
            let port = port.unwrap_or(DEFAULT_PORT);
            let db_path = resolve_db_path(db);

            if open {
                let url = format!("http://{}:{}/", host, port);
                tokio::spawn(async move {
                    // Give the listener a moment to come up
                    tokio::time::sleep(std::time::Duration::from_millis(500)).await;
                    if let Err(e) = open::that(&url) {
                        tracing::warn!("Failed to open browser at {}: {}", url, e);
                    }
                });
            }

            let server = TaskboardServer::new(host, port, db_path);
            server
                .run()
                .await
                .map_err(|e| std::io::Error::other(format!("{:#}", e)))?;
        },

        Commands::Init { db, force } => {
            let db_path = resolve_db_path(db);

            if force && db_path.exists() {
                std::fs::remove_file(&db_path)?;
                tracing::info!("Removed existing database at {}", db_path.display());
            }

            let pool = create_pool(&db_path).await?;
            run_migrations(&pool).await?;
            pool.close().await;

            println!("Database ready at {}", db_path.display());
        },
    }

    Ok(())
}
