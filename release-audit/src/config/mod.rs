//! Audit configuration.
//!
//! Settings come from a `release-audit.toml` file, optionally overridden by
//! command line flags and environment variables, and are validated once into
//! an [`AuditConfig`] before any request is made.

mod error;
mod file;

pub use error::ConfigError;
pub use file::{ConfigFile, ConfigOverrides, GitHubSection, JiraSection};

use crate::readiness::DowngradePolicy;
use tracing::info;
use url::Url;

/// Config file read when no path is given.
pub const DEFAULT_CONFIG_FILE: &str = "release-audit.toml";

/// Custom field Jira uses for sprint memberships unless configured otherwise.
pub const DEFAULT_SPRINT_FIELD: &str = "customfield_10006";

/// Closed pull requests audited per repository unless configured otherwise.
pub const DEFAULT_CLOSED_LIMIT: u8 = 10;

/// Largest page GitHub returns for pull request listings.
pub const MAX_PAGE_SIZE: u8 = 100;

/// Jira connection settings.
#[derive(Debug, Clone)]
pub struct JiraSettings {
    base_url: Url,
    username: String,
    password: String,
    sprint_field: String,
}

impl JiraSettings {
    /// Creates Jira settings.
    pub fn new(base_url: Url, username: String, password: String, sprint_field: String) -> Self {
        Self {
            base_url,
            username,
            password,
            sprint_field,
        }
    }

    /// Returns the Jira instance URL.
    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    /// Returns the Jira user name.
    pub fn username(&self) -> &str {
        &self.username
    }

    /// Returns the Jira password or API token.
    pub fn password(&self) -> &str {
        &self.password
    }

    /// Returns the custom field holding sprint memberships.
    pub fn sprint_field(&self) -> &str {
        &self.sprint_field
    }
}

/// Validated configuration for an audit run.
#[derive(Debug, Clone)]
pub struct AuditConfig {
    organization: String,
    repositories: Vec<String>,
    closed_limit: u8,
    sprint_policy: DowngradePolicy,
    github_token: String,
    jira: JiraSettings,
}

impl AuditConfig {
    /// Creates a configuration with default closed limit and sprint policy.
    pub fn new(
        organization: String,
        repositories: Vec<String>,
        github_token: String,
        jira: JiraSettings,
    ) -> Self {
        Self {
            organization,
            repositories,
            closed_limit: DEFAULT_CLOSED_LIMIT,
            sprint_policy: DowngradePolicy::default(),
            github_token,
            jira,
        }
    }

    /// Sets the number of closed pull requests audited per repository.
    pub fn with_closed_limit(mut self, closed_limit: u8) -> Self {
        self.closed_limit = closed_limit;
        self
    }

    /// Sets how sprint downgrades combine.
    pub fn with_sprint_policy(mut self, sprint_policy: DowngradePolicy) -> Self {
        self.sprint_policy = sprint_policy;
        self
    }

    /// Validates merged file and override values.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::MissingSetting`] for the first required setting
    /// that is absent, or [`ConfigError::ValidationError`] for unusable values.
    pub fn resolve(file: ConfigFile) -> Result<Self, ConfigError> {
        let github_token = required_secret(file.github.token, "github.token")?;
        let organization = required(file.organization, "organization")?;

        let repositories: Vec<String> = file
            .repos
            .into_iter()
            .map(|repo| repo.trim().to_string())
            .collect();
        if repositories.is_empty() {
            return Err(ConfigError::MissingSetting { setting: "repos" });
        }
        if repositories.iter().any(String::is_empty) {
            return Err(ConfigError::ValidationError {
                setting: "repos",
                message: "repository names must not be empty".to_string(),
            });
        }

        let base_url = required(file.jira.base_url, "jira.base-url")?;
        let base_url = parse_base_url(&base_url)?;
        let username = required(file.jira.username, "jira.username")?;
        let password = required_secret(file.jira.password, "jira.password")?;
        let sprint_field = file
            .jira
            .sprint_field
            .filter(|field| !field.trim().is_empty())
            .unwrap_or_else(|| DEFAULT_SPRINT_FIELD.to_string());

        let closed_limit = file.closed_limit.unwrap_or(DEFAULT_CLOSED_LIMIT);
        if closed_limit > MAX_PAGE_SIZE {
            return Err(ConfigError::ValidationError {
                setting: "closed-limit",
                message: format!("must be at most {MAX_PAGE_SIZE}, got {closed_limit}"),
            });
        }

        let config = Self::new(
            organization,
            repositories,
            github_token,
            JiraSettings::new(base_url, username, password, sprint_field),
        )
        .with_closed_limit(closed_limit)
        .with_sprint_policy(file.sprint_policy.unwrap_or_default());

        info!(
            organization = %config.organization,
            repositories = config.repositories.len(),
            jira = %config.jira.base_url,
            "Configuration loaded"
        );
        Ok(config)
    }

    /// Returns the GitHub organization.
    pub fn organization(&self) -> &str {
        &self.organization
    }

    /// Returns the repositories to audit, in order.
    pub fn repositories(&self) -> &[String] {
        &self.repositories
    }

    /// Returns the number of closed pull requests audited per repository.
    pub fn closed_limit(&self) -> u8 {
        self.closed_limit
    }

    /// Returns the sprint downgrade policy.
    pub fn sprint_policy(&self) -> DowngradePolicy {
        self.sprint_policy
    }

    /// Returns the GitHub token.
    pub fn github_token(&self) -> &str {
        &self.github_token
    }

    /// Returns the Jira settings.
    pub fn jira(&self) -> &JiraSettings {
        &self.jira
    }
}

/// Rejects absent and blank values.
fn required(value: Option<String>, setting: &'static str) -> Result<String, ConfigError> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
        .ok_or(ConfigError::MissingSetting { setting })
}

/// Rejects absent and blank secrets, keeping the value byte for byte.
fn required_secret(value: Option<String>, setting: &'static str) -> Result<String, ConfigError> {
    value
        .filter(|v| !v.trim().is_empty())
        .ok_or(ConfigError::MissingSetting { setting })
}

fn parse_base_url(value: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(value).map_err(|e| ConfigError::ValidationError {
        setting: "jira.base-url",
        message: e.to_string(),
    })?;
    if !matches!(url.scheme(), "http" | "https") {
        return Err(ConfigError::ValidationError {
            setting: "jira.base-url",
            message: format!("unsupported scheme '{}'", url.scheme()),
        });
    }
    Ok(url)
}
