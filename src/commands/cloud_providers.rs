use crate::cli::CloudProviderCommands;
use crate::commands::App;
use reqwest::Method;

// Cloud providers live under the partners API; some of these routes are
// only accessible to ELS role-holders.
pub fn handle_cloud_provider_commands(
    app: &App,
    cloud_provider_id: &str,
    command: &CloudProviderCommands,
) -> anyhow::Result<()> {
    let path = format!("/partners/{}", cloud_provider_id);
    match command {
        CloudProviderCommands::Put { src } => app.call_and_write(Method::PUT, &path, src.as_deref()),
        CloudProviderCommands::Get => app.call_and_write(Method::GET, &path, None),
    }
}
