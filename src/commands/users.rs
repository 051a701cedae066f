use crate::cli::{AccessKeyCommands, UserCommands};
use crate::commands::App;
use crate::domain::models::CreatedAccessKey;
use crate::errors::CliError;
use crate::services::password;
use chrono::SecondsFormat;
use reqwest::Method;
use std::io::Write;

pub fn handle_user_commands(app: &App, email: &str, command: &UserCommands) -> anyhow::Result<()> {
    match command {
        UserCommands::AccessKeys { command } => match command {
            AccessKeyCommands::Create { expiry_days } => {
                create_access_key(app, email, *expiry_days)
            }
            AccessKeyCommands::Delete { access_key_id } => app.call_and_write(
                Method::DELETE,
                &format!("/users/{}/accessKeys/{}", email, access_key_id),
                None,
            ),
            AccessKeyCommands::List => {
                app.call_and_write(Method::GET, &format!("/users/{}/accessKeys", email), None)
            }
        },
    }
}

/// Asks for the user's password, requests a new access key, and prints the
/// key as it should be declared in a default profile.
fn create_access_key(app: &App, email: &str, expiry_days: u32) -> anyhow::Result<()> {
    let mut out = std::io::stdout().lock();
    let pw = password::read_password(&mut out)?;

    let rep = app.client.create_access_key(email, &pw, expiry_days)?;

    if rep.status == 401 {
        writeln!(out, "The email address or password are incorrect.")?;
        return Err(CliError::RequestFailed(rep.status).into());
    }
    if !(200..300).contains(&rep.status) {
        return Err(CliError::RequestFailed(rep.status).into());
    }

    let key: CreatedAccessKey = serde_json::from_slice(&rep.body)?;

    writeln!(out, "Access Key Created - shown below in a 'default' profile.")?;
    writeln!(out, "To sign API calls made by the els-cli with this access key,")?;
    writeln!(out, "add the profile to ~/.els/els-cli.toml .\n")?;

    let mut snippet = String::new();
    snippet.push_str("[profiles.default]\n");
    snippet.push_str("\t[profiles.default.accessKey]\n");
    snippet.push_str(&format!("\t\temail = \"{}\"\n", email));
    snippet.push_str(&format!("\t\tid = \"{}\"\n", key.id));
    snippet.push_str(&format!(
        "\t\tsecretAccessKey = \"{}\"\n",
        key.secret_access_key
    ));
    if expiry_days > 0 {
        if let Some(expiry) = key.expiry_date {
            snippet.push_str(&format!(
                "\t\texpiryDate = \"{}\"\n",
                expiry.to_rfc3339_opts(SecondsFormat::Secs, true)
            ));
        }
    }
    writeln!(out, "{}", snippet)?;

    Ok(())
}
