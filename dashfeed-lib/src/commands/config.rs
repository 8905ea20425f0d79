use crate::Result;
use crate::sources::RepoSpec;
use camino::Utf8Path;
use core::time::Duration;
use ohno::{EnrichableExt, IntoAppError, app_err, bail};
use serde::Deserialize;
use std::fs;
use std::io;
use url::Url;

/// The default configuration TOML content, embedded from `default_config.toml`
pub const DEFAULT_CONFIG_TOML: &str = include_str!("../../default_config.toml");

/// File looked up in the current directory when no configuration path is given
pub const DEFAULT_CONFIG_FILE: &str = "dashfeed.toml";

#[derive(Debug, Clone, Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    /// Display name of the player whose games are published
    pub player: String,

    /// Seasons to fetch, in publish order
    pub seasons: Vec<String>,

    /// Repository whose commit activity is published
    pub repository: String,

    pub stats_base_url: Url,
    pub github_base_url: Url,
    pub databox_base_url: Url,

    /// Timeout applied to every individual HTTP request
    #[serde(with = "humantime_serde")]
    pub request_timeout: Duration,
}

impl Config {
    /// Load configuration from a file or use defaults
    ///
    /// An explicit path must exist. Without one, `dashfeed.toml` in the current directory is
    /// used when present. Settings missing from the file keep their default values.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or parsed, or fails validation
    pub fn load(config_path: Option<&Utf8Path>) -> Result<Self> {
        let (final_path, text) = if let Some(path) = config_path {
            let text = fs::read_to_string(path).into_app_err_with(|| format!("reading dashfeed configuration file '{path}'"))?;
            (path, text)
        } else {
            let path = Utf8Path::new(DEFAULT_CONFIG_FILE);
            match fs::read_to_string(path) {
                Ok(text) => (path, text),
                Err(e) if e.kind() == io::ErrorKind::NotFound => return Self::defaults(),
                Err(e) => return Err(e).into_app_err_with(|| format!("reading dashfeed configuration file '{path}'")),
            }
        };

        Self::from_toml(&text).map_err(|e| e.enrich_with(|| format!("loading configuration file '{final_path}'")))
    }

    /// The built-in configuration
    ///
    /// # Errors
    ///
    /// Returns an error if the embedded defaults do not parse
    pub fn defaults() -> Result<Self> {
        Self::from_toml("")
    }

    /// Parse configuration text layered over the embedded defaults, then validate it.
    ///
    /// # Errors
    ///
    /// Returns an error on malformed TOML, unknown keys, bad values, or failed validation
    pub fn from_toml(text: &str) -> Result<Self> {
        let mut table: toml::Table = toml::from_str(DEFAULT_CONFIG_TOML).into_app_err("parsing default configuration")?;
        let overrides: toml::Table = toml::from_str(text).into_app_err("parsing configuration")?;
        table.extend(overrides);

        let config: Self = toml::Value::Table(table).try_into().into_app_err("reading configuration values")?;
        config.validate()?;
        Ok(config)
    }

    /// Save the default configuration to a TOML file
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be written
    pub fn save_default(output_path: &Utf8Path) -> Result<()> {
        fs::write(output_path, DEFAULT_CONFIG_TOML).into_app_err_with(|| format!("writing default configuration to {output_path}"))?;
        Ok(())
    }

    pub fn repo_spec(&self) -> Result<RepoSpec> {
        RepoSpec::parse(&self.repository)
    }

    /// Validate configuration values
    ///
    /// # Errors
    ///
    /// Returns an error if a value is empty or malformed
    pub fn validate(&self) -> Result<()> {
        if self.player.trim().is_empty() {
            bail!("player must not be empty");
        }

        if self.seasons.is_empty() {
            bail!("seasons must list at least one season");
        }

        for season in &self.seasons {
            validate_season(season)?;
        }

        let _ = self.repo_spec()?;

        if self.request_timeout.is_zero() {
            bail!("request_timeout must be greater than zero");
        }

        Ok(())
    }
}

/// Check that a season is written `YYYY-YY`, the second year following the first.
fn validate_season(season: &str) -> Result<()> {
    let invalid = || app_err!("invalid season '{season}': expected the form 2023-24");

    let (start, end) = season.split_once('-').ok_or_else(invalid)?;
    if start.len() != 4 || end.len() != 2 || !start.bytes().chain(end.bytes()).all(|b| b.is_ascii_digit()) {
        return Err(invalid());
    }

    let start: u32 = start.parse().map_err(|_e: core::num::ParseIntError| invalid())?;
    let end: u32 = end.parse().map_err(|_e: core::num::ParseIntError| invalid())?;
    if (start + 1) % 100 != end {
        return Err(invalid());
    }

    Ok(())
}
