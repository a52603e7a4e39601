//! Configuration module
//!
//! Locates and loads the CLI configuration file.
//!
//! The configuration folder is taken from the `--config-path` flag, then the
//! `PNC_CONFIG_PATH` environment variable, then `~/.config/pnc-bacon`. The
//! folder must contain a `config.yaml`:
//!
//! ```yaml
//! pnc:
//!   url: http://pnc.example.com
//!   token: ${PNC_TOKEN}
//!   timeout_secs: 30
//! ```

use std::fmt::{self, Display, Formatter};
use std::fs;
use std::path::{Path, PathBuf};
use std::sync::LazyLock;
use std::time::Duration;

use anyhow::{Context, Result, anyhow, bail};
use pnc_client::PncClient;
use regex::Regex;
use serde::Deserialize;

/// Environment variable naming the configuration folder
pub const CONFIG_ENV: &str = "PNC_CONFIG_PATH";

/// Name of the configuration file inside the folder
pub const CONFIG_FILE_NAME: &str = "config.yaml";

/// Default configuration folder, relative to the home directory
pub const DEFAULT_CONFIG_FOLDER: &str = ".config/pnc-bacon";

const DEFAULT_TIMEOUT_SECS: u64 = 30;

static ENV_REFERENCE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\$\{([A-Za-z_][A-Za-z0-9_]*)\}").expect("environment reference pattern is valid")
});

/// Where the configuration folder came from
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConfigSource {
    Flag,
    EnvironmentVariable,
    Default,
}

impl Display for ConfigSource {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            ConfigSource::Flag => write!(f, "flag"),
            ConfigSource::EnvironmentVariable => write!(f, "environment variable"),
            ConfigSource::Default => write!(f, "default"),
        }
    }
}

/// A resolved configuration folder
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigLocation {
    pub folder: PathBuf,
    pub source: ConfigSource,
}

impl ConfigLocation {
    /// Pick the configuration folder
    ///
    /// The flag wins over the environment variable, which wins over the
    /// default folder in `home`. Empty values count as unset.
    pub fn resolve(
        flag: Option<PathBuf>,
        env_value: Option<String>,
        home: Option<PathBuf>,
    ) -> Result<Self> {
        if let Some(folder) = flag.filter(|p| !p.as_os_str().is_empty()) {
            return Ok(Self {
                folder,
                source: ConfigSource::Flag,
            });
        }

        if let Some(folder) = env_value.filter(|v| !v.is_empty()) {
            return Ok(Self {
                folder: PathBuf::from(folder),
                source: ConfigSource::EnvironmentVariable,
            });
        }

        let home = home.ok_or_else(|| {
            anyhow!(
                "Cannot determine the home directory; use --config-path or set {}",
                CONFIG_ENV
            )
        })?;
        Ok(Self {
            folder: home.join(DEFAULT_CONFIG_FOLDER),
            source: ConfigSource::Default,
        })
    }

    /// Resolve against the real process environment
    pub fn from_env(flag: Option<PathBuf>) -> Result<Self> {
        Self::resolve(flag, std::env::var(CONFIG_ENV).ok(), dirs::home_dir())
    }

    /// Path of the configuration file
    pub fn file_path(&self) -> PathBuf {
        self.folder.join(CONFIG_FILE_NAME)
    }
}

/// CLI configuration
#[derive(Debug, Clone, Deserialize)]
pub struct Config {
    pub pnc: PncSettings,
}

/// Connection settings for the PNC server
#[derive(Debug, Clone, Deserialize)]
pub struct PncSettings {
    /// URL of the PNC server, without the REST prefix
    pub url: String,
    /// Bearer token used for calls that modify data
    #[serde(default)]
    pub token: Option<String>,
    /// HTTP request timeout in seconds
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

fn default_timeout_secs() -> u64 {
    DEFAULT_TIMEOUT_SECS
}

impl Config {
    /// Build a configuration pointing at a server, without credentials
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            pnc: PncSettings {
                url: url.into(),
                token: None,
                timeout_secs: DEFAULT_TIMEOUT_SECS,
            },
        }
    }

    pub fn with_token(mut self, token: impl Into<String>) -> Self {
        self.pnc.token = Some(token.into());
        self
    }

    /// Load `config.yaml` from a resolved location
    pub fn load(location: &ConfigLocation) -> Result<Self> {
        let path = location.file_path();
        tracing::debug!(
            "Config file set from {} to {}",
            location.source,
            path.display()
        );

        Self::load_file(&path)
    }

    /// Load a configuration file, expanding `${VAR}` references from the environment
    pub fn load_file(path: &Path) -> Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file {}", path.display()))?;

        Self::parse(&content, |name| std::env::var(name).ok())
            .with_context(|| format!("Invalid config file {}", path.display()))
    }

    /// Parse configuration text
    ///
    /// # Arguments
    /// * `content` - YAML text
    /// * `lookup` - Resolves the `${VAR}` references found in the text
    pub fn parse(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<Self> {
        let expanded = expand_env_vars(content, lookup)?;
        let config: Config =
            serde_yaml::from_str(&expanded).context("Failed to parse configuration YAML")?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<()> {
        if self.pnc.url.trim().is_empty() {
            bail!("pnc.url must not be empty");
        }
        if self.pnc.timeout_secs == 0 {
            bail!("pnc.timeout_secs must be greater than zero");
        }
        Ok(())
    }

    fn http_client(&self) -> Result<reqwest::Client> {
        reqwest::Client::builder()
            .timeout(Duration::from_secs(self.pnc.timeout_secs))
            .build()
            .context("Failed to build HTTP client")
    }

    /// Client for read-only calls
    pub fn client(&self) -> Result<PncClient> {
        Ok(PncClient::with_client(&self.pnc.url, self.http_client()?))
    }

    /// Client for calls that modify data
    ///
    /// Fails when no token is configured, before anything is sent.
    pub fn authenticated_client(&self) -> Result<PncClient> {
        let token = self
            .pnc
            .token
            .as_deref()
            .filter(|t| !t.is_empty())
            .ok_or_else(|| anyhow!("pnc.token is not configured; it is required for this command"))?;

        Ok(self.client()?.with_token(token))
    }
}

/// Replace `${VAR}` references; unknown variables are an error
///
/// Comment lines are copied as-is.
fn expand_env_vars(content: &str, lookup: impl Fn(&str) -> Option<String>) -> Result<String> {
    let mut missing = Vec::new();
    let mut expanded = String::with_capacity(content.len());

    for line in content.split_inclusive('\n') {
        if line.trim_start().starts_with('#') {
            expanded.push_str(line);
            continue;
        }
        let line = ENV_REFERENCE.replace_all(line, |caps: &regex::Captures<'_>| {
            let name = &caps[1];
            lookup(name).unwrap_or_else(|| {
                missing.push(name.to_string());
                String::new()
            })
        });
        expanded.push_str(&line);
    }

    if !missing.is_empty() {
        bail!("Undefined environment variables: {}", missing.join(", "));
    }
    Ok(expanded)
}
