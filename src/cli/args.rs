//! Command-line argument parsing

use clap::{ArgGroup, Parser};

use crate::cli::operation_mode::OperationMode;
use crate::config::AuthConfig;
use crate::error::{AuditError, Result};

/// Environment variable consulted when `--pass` is omitted.
pub const ENV_PASS: &str = "NEXUSPASS";

#[derive(Parser, Debug)]
#[command(name = "nexus-image-audit")]
#[command(about = "Audit and prune Docker images held in a Nexus repository")]
#[command(version)]
#[command(group(ArgGroup::new("mode").required(true).args(["keep", "delete", "list"])))]
pub struct Args {
    /// User name for connecting to Nexus
    #[arg(short = 'u', long = "user", help = "User name for connecting to Nexus")]
    pub user: String,

    /// Password for connecting to Nexus
    #[arg(
        short = 'p',
        long = "pass",
        help = "Password for connecting to Nexus (falls back to the NEXUSPASS environment variable)"
    )]
    pub pass: Option<String>,

    /// Skip the interactive confirmation prompt
    #[arg(short = 'y', long = "yes", help = "Answer 'yes' to all prompts")]
    pub yes: bool,

    /// Verbose output
    #[arg(short = 'v', long = "verbose", help = "Enable verbose output")]
    pub verbose: bool,

    /// Base Nexus URL
    #[arg(long = "url", help = "Nexus URL, e.g. \"https://nexus.example.org\"")]
    pub url: String,

    /// Keep only images whose version matches the pattern
    #[arg(long = "keep", help = "Keep images matching the regex argument, delete the rest")]
    pub keep: bool,

    /// Delete images whose version matches the pattern
    #[arg(long = "delete", help = "Delete images matching the regex argument")]
    pub delete: bool,

    /// List images whose version matches the pattern
    #[arg(long = "list", help = "List matching images and write audit_list.csv")]
    pub list: bool,

    /// Regex pattern matched against the version string
    #[arg(value_name = "PATTERN", help = "Regex pattern to search for")]
    pub pattern: String,

    /// Docker repository name in Nexus
    #[arg(value_name = "REPO", help = "Name of the Docker repository in Nexus")]
    pub repo: String,
}

impl Args {
    /// Fall back to the environment for the password when `--pass` was
    /// not given.
    pub fn from_env(mut self) -> Self {
        if self.pass.is_none() {
            self.pass = std::env::var(ENV_PASS).ok();
        }
        self
    }

    /// Validate arguments that clap cannot check on its own.
    pub fn validate(&self) -> Result<()> {
        let parsed = url::Url::parse(&self.url)
            .map_err(|e| AuditError::Config(format!("Invalid Nexus URL {}: {}", self.url, e)))?;
        match parsed.scheme() {
            "http" | "https" => {}
            scheme => {
                return Err(AuditError::Config(format!(
                    "Nexus URL must use http or https, got {}://",
                    scheme
                )));
            }
        }

        if self.pass.is_none() {
            return Err(AuditError::Config(format!(
                "No password given and {} is not set",
                ENV_PASS
            )));
        }

        Ok(())
    }

    /// The selected run mode. The clap group guarantees exactly one flag.
    pub fn mode(&self) -> OperationMode {
        if self.list {
            OperationMode::List
        } else if self.keep {
            OperationMode::Keep
        } else {
            OperationMode::Delete
        }
    }

    pub fn credentials(&self) -> AuthConfig {
        AuthConfig::new(self.user.as_str(), self.pass.as_deref().unwrap_or_default())
    }
}
