use clap::{Parser, Subcommand, ValueEnum};
use std::path::PathBuf;

#[derive(Parser, Debug)]
#[command(name = "els-cli", version, about = "Make signed API calls to Elastic Licensing")]
pub struct Cli {
    #[arg(
        short = 'p',
        long,
        global = true,
        default_value = "default",
        env = "ELSCLI_PROFILE",
        help = "Profile in ~/.els/els-cli.toml supplying credentials and call defaults"
    )]
    pub profile: String,
    #[arg(
        short = 'o',
        long,
        global = true,
        value_enum,
        env = "ELSCLI_OUTPUT",
        help = "Override the output mode defined in the profile"
    )]
    pub output: Option<OutputMode>,
    #[arg(
        long,
        global = true,
        env = "ELSCLI_API_URL",
        help = "Override the API root URL"
    )]
    pub api_url: Option<String>,
    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand, Debug)]
pub enum Commands {
    /// Vendor API
    Vendors {
        vendor_id: String,
        #[command(subcommand)]
        command: VendorCommands,
    },
    /// Cloud Provider ('Partner') API
    CloudProviders {
        cloud_provider_id: String,
        #[command(subcommand)]
        command: CloudProviderCommands,
    },
    /// User API
    Users {
        email: String,
        #[command(subcommand)]
        command: UserCommands,
    },
    /// Make any signed call to the API
    Do {
        #[command(subcommand)]
        command: RawCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum VendorCommands {
    /// Update or create a vendor
    Put { src: Option<PathBuf> },
    /// Get details about a vendor
    Get,
    /// List all the Pricing Rulesets
    ListRulesets,
    /// Manage Pricing Rulesets
    Rulesets {
        ruleset_id: String,
        #[command(subcommand)]
        command: RulesetCommands,
    },
    /// Export a CSV report of Customer Licence EULA Infringements
    GetEulaLicenseInfringements { year: i32, month: u32 },
}

#[derive(Subcommand, Debug)]
pub enum RulesetCommands {
    /// Create or update a Pricing Ruleset (an activated Ruleset cannot be updated)
    Put { src: Option<PathBuf> },
    /// Get a specific Pricing Ruleset
    Get,
    /// Activate a Pricing Ruleset so it is used to generate live rates
    Activate,
}

#[derive(Subcommand, Debug)]
pub enum CloudProviderCommands {
    /// Update or create a cloud provider
    Put { src: Option<PathBuf> },
    /// Get details about a cloud provider
    Get,
}

#[derive(Subcommand, Debug)]
pub enum UserCommands {
    /// Manage API Access Keys
    AccessKeys {
        #[command(subcommand)]
        command: AccessKeyCommands,
    },
}

#[derive(Subcommand, Debug)]
pub enum AccessKeyCommands {
    /// Create a new API Access Key
    Create {
        #[arg(default_value_t = 30, help = "Number of days before expiry")]
        expiry_days: u32,
    },
    /// Delete an API Access Key
    Delete { access_key_id: String },
    /// List API Access Keys
    List,
}

#[derive(Subcommand, Debug)]
pub enum RawCommands {
    /// GET a resource; URL is the path without the API root - e.g. 'vendors/...'
    Get { url: String },
    /// PUT a resource, with the body taken from CONTENT or piped input
    Put {
        url: String,
        content: Option<PathBuf>,
    },
    /// POST a resource, with the body taken from CONTENT or piped input
    Post {
        url: String,
        content: Option<PathBuf>,
    },
    /// PATCH a resource; the body may validly be empty
    Patch {
        url: String,
        content: Option<PathBuf>,
    },
    /// DELETE a resource
    Delete { url: String },
}

/// Selects which parts of an HTTP response (status code, body) are printed.
#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputMode {
    #[value(name = "wholeResponse")]
    WholeResponse,
    #[value(name = "bodyOnly")]
    BodyOnly,
    #[value(name = "statusCodeOnly")]
    StatusCodeOnly,
}

impl std::str::FromStr for OutputMode {
    type Err = crate::errors::CliError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "wholeResponse" => Ok(OutputMode::WholeResponse),
            "bodyOnly" => Ok(OutputMode::BodyOnly),
            "statusCodeOnly" => Ok(OutputMode::StatusCodeOnly),
            other => Err(crate::errors::CliError::InvalidOutput(other.to_string())),
        }
    }
}
