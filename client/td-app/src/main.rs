//! td - team dashboard client
//!
//! # Examples
//!
//! ```bash
//! td sign-up --username alice --email a@b.com --password secret1 --repeat-password secret1
//! td profile --username alice --password secret1 --bio "Hello" \
//!     --avatar-uri file:///tmp/me.jpg --link website=https://alice.dev
//! td dashboard --username alice --password secret1
//! ```

use td_app::{App, AppError, Cli, logger};
use td_config::Config;
use td_remote::RestClient;

use std::process::ExitCode;
use std::sync::Arc;

use clap::Parser;
use log::{error, info};

#[tokio::main]
async fn main() -> ExitCode {
    // A missing .env file is fine
    let _ = dotenvy::dotenv();

    let cli = Cli::parse();

    let app = match setup(&cli).await {
        Ok(app) => app,
        Err(e) => {
            eprintln!("Error: {e}");
            return ExitCode::FAILURE;
        }
    };

    match app.run(cli.command).await {
        Ok(report) => {
            print!("{report}");
            ExitCode::SUCCESS
        }
        Err(e) => {
            error!("{e}");
            let report = app.report();
            print!("{report}");
            if report.message.as_deref() != Some(e.user_message().as_str()) {
                eprintln!("Error: {}", e.user_message());
            }
            ExitCode::FAILURE
        }
    }
}

/// Load config, start logging, and build the app
async fn setup(cli: &Cli) -> Result<App, AppError> {
    let config_dir = match cli.config_dir {
        Some(ref dir) => dir.clone(),
        None => Config::config_dir()?,
    };

    let config = Config::load_from_dir(&config_dir)?;
    config.validate()?;

    let log_file_path = config.log_file_path(&config_dir);
    if let Some(ref path) = log_file_path
        && let Some(parent) = path.parent()
    {
        std::fs::create_dir_all(parent)
            .map_err(|e| AppError::io(parent.display().to_string(), e))?;
    }

    logger::initialize(config.logging.level, log_file_path, config.logging.colored)?;

    info!("Starting td v{}", env!("CARGO_PKG_VERSION"));
    config.log_summary();

    let remote = Arc::new(RestClient::from_config(&config.remote, &config_dir)?);
    let app = App::new(remote, config.session.clone());
    app.start().await?;

    Ok(app)
}
