use crate::cli::RawCommands;
use crate::commands::App;
use reqwest::Method;

// All generic calls are signed, whether the route needs it or not.
pub fn handle_raw_commands(app: &App, command: &RawCommands) -> anyhow::Result<()> {
    match command {
        RawCommands::Get { url } => app.call_and_write(Method::GET, &rooted(url), None),
        RawCommands::Put { url, content } => {
            app.call_and_write(Method::PUT, &rooted(url), content.as_deref())
        }
        RawCommands::Post { url, content } => {
            app.call_and_write(Method::POST, &rooted(url), content.as_deref())
        }
        RawCommands::Patch { url, content } => {
            app.call_and_write(Method::PATCH, &rooted(url), content.as_deref())
        }
        RawCommands::Delete { url } => app.call_and_write(Method::DELETE, &rooted(url), None),
    }
}

fn rooted(url: &str) -> String {
    format!("/{}", url.trim_start_matches('/'))
}
