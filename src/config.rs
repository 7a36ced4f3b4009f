//! Viewer configuration
//!
//! Settings come from three layers, later ones winning:
//! built-in defaults, an optional YAML file, and command-line flags.
//!
//! ```yaml
//! endpoint: https://example.com/members.json
//! page_size: 10
//! timeout_secs: 15
//! show_id: true
//! numbered: false
//! refetch: once
//! ```

use crate::error::{Error, Result, ResultExt};
use crate::http::HttpClientConfig;
use crate::pagination::PageSize;
use crate::source::DEFAULT_ENDPOINT;
use crate::types::RefetchPolicy;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

// ============================================================================
// Viewer Config
// ============================================================================

/// Complete viewer configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct ViewerConfig {
    /// URL of the JSON employee list
    pub endpoint: String,

    /// Read from this file instead of the endpoint
    pub file: Option<PathBuf>,

    /// Rows per page
    pub page_size: PageSize,

    /// Fetch timeout in seconds
    pub timeout_secs: u64,

    /// Show the ID column
    pub show_id: bool,

    /// Show numbered page controls next to Previous/Next
    pub numbered: bool,

    /// When to go back to the data source
    pub refetch: RefetchPolicy,

    /// User agent for HTTP requests
    pub user_agent: Option<String>,
}

impl Default for ViewerConfig {
    fn default() -> Self {
        Self {
            endpoint: DEFAULT_ENDPOINT.to_string(),
            file: None,
            page_size: PageSize::default(),
            timeout_secs: 30,
            show_id: false,
            numbered: false,
            refetch: RefetchPolicy::Once,
            user_agent: None,
        }
    }
}

impl ViewerConfig {
    /// Load a config from a YAML file
    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let content = fs::read_to_string(path).map_err(|e| {
            Error::config(format!(
                "Failed to read config file '{}': {}",
                path.display(),
                e
            ))
        })?;
        Self::from_yaml(&content).with_context(|| format!("Invalid config '{}'", path.display()))
    }

    /// Load a config from a YAML string
    pub fn from_yaml(yaml: &str) -> Result<Self> {
        let config: Self = serde_yaml::from_str(yaml)?;
        config.validate()?;
        Ok(config)
    }

    /// Apply command-line overrides on top of this config
    #[must_use]
    pub fn with_overrides(mut self, overrides: &ConfigOverrides) -> Self {
        if let Some(endpoint) = &overrides.endpoint {
            self.endpoint.clone_from(endpoint);
            self.file = None;
        }
        if let Some(file) = &overrides.file {
            self.file = Some(file.clone());
        }
        if let Some(page_size) = overrides.page_size {
            self.page_size = page_size;
        }
        if let Some(timeout_secs) = overrides.timeout_secs {
            self.timeout_secs = timeout_secs;
        }
        if overrides.show_id {
            self.show_id = true;
        }
        if overrides.numbered {
            self.numbered = true;
        }
        if let Some(refetch) = overrides.refetch {
            self.refetch = refetch;
        }
        self
    }

    /// Check that the config describes a usable viewer
    pub fn validate(&self) -> Result<()> {
        if self.timeout_secs == 0 {
            return Err(Error::invalid_value("timeout_secs", "must be at least 1"));
        }

        if self.file.is_none() {
            let url = Url::parse(&self.endpoint)?;
            if !matches!(url.scheme(), "http" | "https") {
                return Err(Error::invalid_value(
                    "endpoint",
                    format!("unsupported scheme '{}'", url.scheme()),
                ));
            }
        }

        Ok(())
    }

    /// Fetch timeout as a duration
    pub fn timeout(&self) -> Duration {
        Duration::from_secs(self.timeout_secs)
    }

    /// HTTP client settings derived from this config
    pub fn http_config(&self) -> HttpClientConfig {
        let mut builder = HttpClientConfig::builder()
            .timeout(self.timeout())
            .header("Accept", "application/json");
        if let Some(agent) = &self.user_agent {
            builder = builder.user_agent(agent);
        }
        builder.build()
    }
}

// ============================================================================
// Overrides
// ============================================================================

/// Values given on the command line; `None`/`false` leaves the config as is
#[derive(Debug, Clone, Default)]
pub struct ConfigOverrides {
    /// Endpoint URL; also clears any configured file
    pub endpoint: Option<String>,
    /// JSON file to read instead of the endpoint
    pub file: Option<PathBuf>,
    /// Rows per page
    pub page_size: Option<PageSize>,
    /// Fetch timeout in seconds
    pub timeout_secs: Option<u64>,
    /// Force the ID column on
    pub show_id: bool,
    /// Force numbered page controls on
    pub numbered: bool,
    /// When to re-issue the fetch
    pub refetch: Option<RefetchPolicy>,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config() {
        let config = ViewerConfig::default();
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
        assert_eq!(config.page_size.get(), 10);
        assert_eq!(config.timeout(), Duration::from_secs(30));
        assert_eq!(config.refetch, RefetchPolicy::Once);
        assert!(!config.show_id);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_from_yaml_partial() {
        let config = ViewerConfig::from_yaml(
            r"
page_size: 5
show_id: true
refetch: on_page_change
",
        )
        .unwrap();

        assert_eq!(config.page_size.get(), 5);
        assert!(config.show_id);
        assert_eq!(config.refetch, RefetchPolicy::OnPageChange);
        assert_eq!(config.endpoint, DEFAULT_ENDPOINT);
    }

    #[test]
    fn test_from_yaml_rejects_zero_page_size() {
        let err = ViewerConfig::from_yaml("page_size: 0").unwrap_err();
        assert!(matches!(err, Error::YamlParse(_)));
    }

    #[test]
    fn test_from_yaml_rejects_unknown_field() {
        assert!(ViewerConfig::from_yaml("rows_per_page: 10").is_err());
    }

    #[test]
    fn test_validate_rejects_bad_endpoint() {
        let config = ViewerConfig {
            endpoint: "not a url".to_string(),
            ..Default::default()
        };
        assert!(matches!(config.validate(), Err(Error::InvalidUrl(_))));

        let config = ViewerConfig {
            endpoint: "ftp://example.com/members.json".to_string(),
            ..Default::default()
        };
        assert!(matches!(
            config.validate(),
            Err(Error::InvalidConfigValue { .. })
        ));
    }

    #[test]
    fn test_validate_skips_endpoint_when_file_set() {
        let config = ViewerConfig {
            endpoint: String::new(),
            file: Some(PathBuf::from("members.json")),
            ..Default::default()
        };
        assert!(config.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_zero_timeout() {
        let config = ViewerConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_overrides_win() {
        let overrides = ConfigOverrides {
            endpoint: Some("http://localhost:9000/members.json".to_string()),
            page_size: PageSize::new(3),
            numbered: true,
            ..Default::default()
        };
        let config = ViewerConfig {
            file: Some(PathBuf::from("old.json")),
            ..Default::default()
        }
        .with_overrides(&overrides);

        assert_eq!(config.endpoint, "http://localhost:9000/members.json");
        assert!(config.file.is_none());
        assert_eq!(config.page_size.get(), 3);
        assert!(config.numbered);
        assert!(!config.show_id);
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "timeout_secs: 5\nnumbered: true").unwrap();

        let config = ViewerConfig::from_file(file.path()).unwrap();
        assert_eq!(config.timeout_secs, 5);
        assert!(config.numbered);
    }

    #[test]
    fn test_from_file_missing() {
        let err = ViewerConfig::from_file("/nonexistent/viewer.yaml").unwrap_err();
        assert!(err.to_string().contains("Failed to read config file"));
    }

    #[test]
    fn test_http_config_carries_timeout() {
        let config = ViewerConfig {
            timeout_secs: 7,
            user_agent: Some("directory-test".to_string()),
            ..Default::default()
        };
        let http = config.http_config();
        assert_eq!(http.timeout, Duration::from_secs(7));
        assert_eq!(http.user_agent, "directory-test");
    }
}
