use std::path::PathBuf;
use std::sync::Arc;

use eyre::Result;
use log::{debug, info, warn};

mod cli;

use cli::Cli;
use ytxd::config::{Config, config_path};
use ytxd::service::TranscriptService;
use ytxd::youtube::YouTubeSource;

fn setup_logging() -> Result<()> {
    let log_dir = log_dir();
    std::fs::create_dir_all(&log_dir)?;
    let log_file = log_dir.join("ytxd.log");

    let target = Box::new(std::fs::OpenOptions::new().create(true).append(true).open(&log_file)?);

    env_logger::Builder::from_default_env()
        .target(env_logger::Target::Pipe(target))
        .init();

    info!("Logging initialized: {}", log_file.display());
    Ok(())
}

fn log_dir() -> PathBuf {
    dirs::data_local_dir()
        .unwrap_or_else(|| PathBuf::from("."))
        .join("ytxd")
        .join("logs")
}

fn build_after_help() -> String {
    format!(
        "\nENDPOINTS:\n  GET  /\n  POST /api/v1/youtube/transcript\n\nConfig is read from: {}\nLogs are written to: {}",
        config_path().display(),
        log_dir().join("ytxd.log").display()
    )
}

#[tokio::main]
async fn main() -> Result<()> {
    setup_logging()?;

    let after_help = build_after_help();
    let cmd = <Cli as clap::CommandFactory>::command().after_help(after_help);
    let matches = cmd.get_matches();
    let cli = <Cli as clap::FromArgMatches>::from_arg_matches(&matches)?;

    // Load config file (non-fatal if missing/invalid)
    let config = Config::load().unwrap_or_else(|e| {
        warn!("Ignoring unreadable config {}: {e}", config_path().display());
        Config::default()
    });

    // CLI flags take priority over the config file
    let host = cli.host.clone().unwrap_or_else(|| config.host().to_string());
    let port = cli.port.unwrap_or_else(|| config.port());
    let languages = if cli.langs.is_empty() {
        config.default_languages()
    } else {
        cli.langs.clone()
    };
    debug!("Default languages: {languages:?}");

    if cli.verbose {
        let path = config_path();
        if path.exists() {
            eprintln!("Config: {}", path.display());
        }
        eprintln!("Listening on {host}:{port}, default languages {languages:?}");
    }

    let source = YouTubeSource::new(config.user_agent(), config.request_timeout())?;
    let service = Arc::new(TranscriptService::new(Arc::new(source), languages));

    ytxd::server::serve(service, &host, port).await?;
    Ok(())
}
