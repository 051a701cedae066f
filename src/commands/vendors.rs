use crate::cli::{RulesetCommands, VendorCommands};
use crate::commands::App;
use crate::services::report;
use reqwest::Method;

pub fn handle_vendor_commands(
    app: &App,
    vendor_id: &str,
    command: &VendorCommands,
) -> anyhow::Result<()> {
    match command {
        VendorCommands::Put { src } => app.call_and_write(
            Method::PUT,
            &format!("/vendors/{}", vendor_id),
            src.as_deref(),
        ),
        VendorCommands::Get => {
            app.call_and_write(Method::GET, &format!("/vendors/{}", vendor_id), None)
        }
        VendorCommands::ListRulesets => app.call_and_write(
            Method::GET,
            &format!("/vendors/{}/paygRuleSets", vendor_id),
            None,
        ),
        VendorCommands::Rulesets {
            ruleset_id,
            command,
        } => handle_ruleset_commands(app, vendor_id, ruleset_id, command),
        VendorCommands::GetEulaLicenseInfringements { year, month } => report::export_infringements(
            &app.client,
            &mut std::io::stdout().lock(),
            vendor_id,
            *year,
            *month,
        ),
    }
}

fn handle_ruleset_commands(
    app: &App,
    vendor_id: &str,
    ruleset_id: &str,
    command: &RulesetCommands,
) -> anyhow::Result<()> {
    let path = format!("/vendors/{}/paygRuleSets/{}", vendor_id, ruleset_id);
    match command {
        RulesetCommands::Put { src } => app.call_and_write(Method::PUT, &path, src.as_deref()),
        RulesetCommands::Get => app.call_and_write(Method::GET, &path, None),
        RulesetCommands::Activate => {
            app.call_and_write(Method::PATCH, &format!("{}/activate", path), None)
        }
    }
}
