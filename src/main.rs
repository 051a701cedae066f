use clap::Parser;
use std::path::PathBuf;
use tracing_subscriber::EnvFilter;

mod cli;
mod commands;
mod config;
mod domain;
mod errors;
mod services;

use cli::Cli;
use commands::App;
use services::api::ApiClient;

fn main() {
    let _log_guard = init_log();
    if let Err(err) = run() {
        tracing::debug!(%err, "fatal error");
        eprintln!("{err}");
        std::process::exit(1);
    }
}

fn run() -> anyhow::Result<()> {
    let cli = Cli::parse();
    let config = config::read_config()?;
    let profile = config.profile(&cli.profile)?;

    // Commandline/environment overrides win over the profile's defaults.
    let output = match cli.output {
        Some(mode) => mode,
        None => profile.output.parse()?,
    };
    let base_url = cli
        .api_url
        .clone()
        .or_else(|| profile.api_url.clone())
        .unwrap_or_else(|| config::DEFAULT_API_URL.to_string());

    let client = ApiClient::new(profile, base_url)?;
    let app = App { client, output };
    commands::dispatch(&app, &cli)
}

/// Sends debug logs to a daily-rolling file under ~/.els/log/. Stdout stays
/// reserved for command output. The guard must live for the whole run so
/// buffered log lines are flushed on exit.
fn init_log() -> Option<tracing_appender::non_blocking::WorkerGuard> {
    let home = std::env::var("HOME").ok()?;
    let dir = PathBuf::from(home).join(".els").join("log");
    std::fs::create_dir_all(&dir).ok()?;

    let appender = tracing_appender::rolling::daily(dir, "els-cli.log");
    let (writer, guard) = tracing_appender::non_blocking(appender);
    let filter =
        EnvFilter::try_from_env("ELSCLI_LOG").unwrap_or_else(|_| EnvFilter::new("els_cli=debug"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(writer)
        .with_ansi(false)
        .init();
    Some(guard)
}
