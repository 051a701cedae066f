//! Command handler layer.
//!
//! Parse/match CLI inputs here and delegate the work to `services/*`.
//! Handlers receive the app context explicitly; there is no global state.
//!
//! ## Files
//! - `vendors.rs` — vendor resources, rulesets, infringement report.
//! - `cloud_providers.rs` — cloud provider ('partner') resources.
//! - `users.rs` — access-key lifecycle.
//! - `raw.rs` — generic signed calls to any path.

use crate::cli::{Cli, Commands, OutputMode};
use crate::services::api::ApiClient;
use crate::services::output;
use reqwest::Method;
use std::path::Path;

pub mod cloud_providers;
pub mod raw;
pub mod users;
pub mod vendors;

/// Everything a command handler needs for one invocation.
pub struct App {
    pub client: ApiClient,
    pub output: OutputMode,
}

impl App {
    /// Executes the call and writes the formatted response to stdout.
    /// 4xx/5xx statuses are output, not errors.
    fn call_and_write(&self, method: Method, path: &str, src: Option<&Path>) -> anyhow::Result<()> {
        let rep = self.client.call_with_input(method, path, src)?;
        output::write_response(&mut std::io::stdout().lock(), self.output, &rep)
    }
}

pub fn dispatch(app: &App, cli: &Cli) -> anyhow::Result<()> {
    match &cli.command {
        Commands::Vendors { vendor_id, command } => {
            vendors::handle_vendor_commands(app, vendor_id, command)
        }
        Commands::CloudProviders {
            cloud_provider_id,
            command,
        } => cloud_providers::handle_cloud_provider_commands(app, cloud_provider_id, command),
        Commands::Users { email, command } => users::handle_user_commands(app, email, command),
        Commands::Do { command } => raw::handle_raw_commands(app, command),
    }
}
