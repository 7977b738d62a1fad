//! Config file deserialization.

use crate::config::ConfigError;
use crate::readiness::DowngradePolicy;
use serde::Deserialize;
use std::path::Path;
use tracing::debug;

/// Raw contents of a `release-audit.toml` file.
///
/// Every field is optional here; [`AuditConfig::resolve`] decides what is
/// required once command line overrides have been applied.
///
/// [`AuditConfig::resolve`]: crate::config::AuditConfig::resolve
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct ConfigFile {
    /// GitHub organization owning the repositories.
    pub organization: Option<String>,

    /// Repository names to audit.
    #[serde(default)]
    pub repos: Vec<String>,

    /// Number of recently closed pull requests to audit per repository.
    pub closed_limit: Option<u8>,

    /// How sprint downgrades combine across tickets.
    pub sprint_policy: Option<DowngradePolicy>,

    /// GitHub settings.
    #[serde(default)]
    pub github: GitHubSection,

    /// Jira settings.
    #[serde(default)]
    pub jira: JiraSection,
}

/// `[github]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct GitHubSection {
    /// Personal access token.
    pub token: Option<String>,
}

/// `[jira]` table.
#[derive(Debug, Clone, Default, Deserialize)]
#[serde(rename_all = "kebab-case", deny_unknown_fields)]
pub struct JiraSection {
    /// Jira instance URL, e.g. `https://company.atlassian.net`.
    pub base_url: Option<String>,

    /// Jira user name or email.
    pub username: Option<String>,

    /// Jira password or API token.
    pub password: Option<String>,

    /// Name of the custom field holding sprint memberships.
    pub sprint_field: Option<String>,
}

/// Values supplied on the command line or through the environment.
///
/// Set fields replace the corresponding file values.
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Replaces `organization`.
    pub organization: Option<String>,

    /// Replaces `repos` when non-empty.
    pub repos: Vec<String>,

    /// Replaces `closed-limit`.
    pub closed_limit: Option<u8>,

    /// Replaces `sprint-policy`.
    pub sprint_policy: Option<DowngradePolicy>,

    /// Replaces `github.token`.
    pub github_token: Option<String>,

    /// Replaces `jira.base-url`.
    pub jira_base_url: Option<String>,

    /// Replaces `jira.username`.
    pub jira_username: Option<String>,

    /// Replaces `jira.password`.
    pub jira_password: Option<String>,

    /// Replaces `jira.sprint-field`.
    pub jira_sprint_field: Option<String>,
}

impl ConfigFile {
    /// Parses a config file.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file cannot be read or is not valid TOML.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        debug!(path = %path.display(), "Loading config file");
        let contents = std::fs::read_to_string(path).map_err(|e| ConfigError::IoError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::parse(&contents, path)
    }

    /// Parses a config file, treating a missing file as empty.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError`] if the file exists but cannot be read or parsed.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        match std::fs::read_to_string(path) {
            Ok(contents) => Self::parse(&contents, path),
            Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
                debug!(path = %path.display(), "No config file, using defaults");
                Ok(Self::default())
            }
            Err(e) => Err(ConfigError::IoError {
                path: path.display().to_string(),
                source: e,
            }),
        }
    }

    fn parse(contents: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(contents).map_err(|e| ConfigError::TomlError {
            path: path.display().to_string(),
            source: e,
        })
    }

    /// Applies command line overrides on top of the file values.
    #[must_use]
    pub fn with_overrides(mut self, overrides: ConfigOverrides) -> Self {
        fn replace<T>(target: &mut Option<T>, value: Option<T>) {
            if value.is_some() {
                *target = value;
            }
        }

        replace(&mut self.organization, overrides.organization);
        if !overrides.repos.is_empty() {
            self.repos = overrides.repos;
        }
        replace(&mut self.closed_limit, overrides.closed_limit);
        replace(&mut self.sprint_policy, overrides.sprint_policy);
        replace(&mut self.github.token, overrides.github_token);
        replace(&mut self.jira.base_url, overrides.jira_base_url);
        replace(&mut self.jira.username, overrides.jira_username);
        replace(&mut self.jira.password, overrides.jira_password);
        replace(&mut self.jira.sprint_field, overrides.jira_sprint_field);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    #[test]
    fn parses_full_file() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-audit.toml");
        fs::write(
            &path,
            r#"
organization = "acme"
repos = ["api", "web"]
closed-limit = 5
sprint-policy = "worst-case"

[github]
token = "ghp_test"

[jira]
base-url = "https://acme.atlassian.net"
username = "me@acme.com"
password = "secret"
sprint-field = "customfield_10020"
"#,
        )
        .unwrap();

        let file = ConfigFile::load(&path).unwrap();

        assert_eq!(file.organization.as_deref(), Some("acme"));
        assert_eq!(file.repos, ["api", "web"]);
        assert_eq!(file.closed_limit, Some(5));
        assert_eq!(file.sprint_policy, Some(DowngradePolicy::WorstCase));
        assert_eq!(file.github.token.as_deref(), Some("ghp_test"));
        assert_eq!(
            file.jira.sprint_field.as_deref(),
            Some("customfield_10020")
        );
    }

    #[test]
    fn missing_file_is_empty_when_optional() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("absent.toml");

        let file = ConfigFile::load_or_default(&path).unwrap();
        assert!(file.organization.is_none());
        assert!(file.repos.is_empty());

        assert!(matches!(
            ConfigFile::load(&path),
            Err(ConfigError::IoError { .. })
        ));
    }

    #[test]
    fn rejects_unknown_keys() {
        let temp = TempDir::new().unwrap();
        let path = temp.path().join("release-audit.toml");
        fs::write(&path, "organisation = \"typo\"\n").unwrap();

        assert!(matches!(
            ConfigFile::load(&path),
            Err(ConfigError::TomlError { .. })
        ));
    }

    #[test]
    fn overrides_replace_file_values() {
        let file = ConfigFile {
            organization: Some("acme".to_string()),
            repos: vec!["api".to_string()],
            ..ConfigFile::default()
        };

        let merged = file.with_overrides(ConfigOverrides {
            repos: vec!["web".to_string()],
            github_token: Some("from-env".to_string()),
            ..ConfigOverrides::default()
        });

        assert_eq!(merged.organization.as_deref(), Some("acme"));
        assert_eq!(merged.repos, ["web"]);
        assert_eq!(merged.github.token.as_deref(), Some("from-env"));
    }
}
