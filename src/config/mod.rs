use anyhow::{Context, Result, bail};
use figment::{
    Figment,
    providers::{Env, Format, Serialized, Toml},
};
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::time::Duration;

pub mod defaults;

use defaults::*;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    #[serde(default)]
    pub web: WebConfig,
    #[serde(default)]
    pub addon: AddonConfig,
    #[serde(default)]
    pub http: HttpClientConfig,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WebConfig {
    #[serde(default = "default_host")]
    pub host: String,
    #[serde(default = "default_port")]
    pub port: u16,
}

/// Identity of the add-on as advertised in its manifest
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AddonConfig {
    #[serde(default = "default_addon_id")]
    pub id: String,
    #[serde(default = "default_addon_version")]
    pub version: String,
    #[serde(default = "default_addon_name")]
    pub name: String,
    #[serde(default = "default_addon_description")]
    pub description: String,
    /// Namespace prefix prepended to every stream URL to form its identifier
    #[serde(default = "default_id_prefix")]
    pub id_prefix: String,
    #[serde(default = "default_catalog_id")]
    pub catalog_id: String,
    #[serde(default = "default_catalog_name")]
    pub catalog_name: String,
    #[serde(default = "default_content_type")]
    pub content_type: String,
}

/// Settings for the client used to download playlists
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct HttpClientConfig {
    /// Connection timeout, humantime format ("10s", "1m")
    #[serde(default = "default_connect_timeout")]
    pub connect_timeout: String,
    /// Total request timeout, humantime format
    #[serde(default = "default_request_timeout")]
    pub request_timeout: String,
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
}

fn default_host() -> String {
    DEFAULT_HOST.to_string()
}

fn default_port() -> u16 {
    DEFAULT_PORT
}

fn default_addon_id() -> String {
    DEFAULT_ADDON_ID.to_string()
}

fn default_addon_version() -> String {
    DEFAULT_ADDON_VERSION.to_string()
}

fn default_addon_name() -> String {
    DEFAULT_ADDON_NAME.to_string()
}

fn default_addon_description() -> String {
    DEFAULT_ADDON_DESCRIPTION.to_string()
}

fn default_id_prefix() -> String {
    DEFAULT_ID_PREFIX.to_string()
}

fn default_catalog_id() -> String {
    DEFAULT_CATALOG_ID.to_string()
}

fn default_catalog_name() -> String {
    DEFAULT_CATALOG_NAME.to_string()
}

fn default_content_type() -> String {
    DEFAULT_CONTENT_TYPE.to_string()
}

fn default_connect_timeout() -> String {
    DEFAULT_CONNECT_TIMEOUT.to_string()
}

fn default_request_timeout() -> String {
    DEFAULT_REQUEST_TIMEOUT.to_string()
}

fn default_user_agent() -> String {
    format!("m3u-loader/{}", env!("CARGO_PKG_VERSION"))
}

impl Default for WebConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

impl Default for AddonConfig {
    fn default() -> Self {
        Self {
            id: default_addon_id(),
            version: default_addon_version(),
            name: default_addon_name(),
            description: default_addon_description(),
            id_prefix: default_id_prefix(),
            catalog_id: default_catalog_id(),
            catalog_name: default_catalog_name(),
            content_type: default_content_type(),
        }
    }
}

impl Default for HttpClientConfig {
    fn default() -> Self {
        Self {
            connect_timeout: default_connect_timeout(),
            request_timeout: default_request_timeout(),
            user_agent: default_user_agent(),
        }
    }
}

impl HttpClientConfig {
    pub fn connect_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.connect_timeout)
            .with_context(|| format!("Invalid http.connect_timeout '{}'", self.connect_timeout))
    }

    pub fn request_timeout(&self) -> Result<Duration> {
        humantime::parse_duration(&self.request_timeout)
            .with_context(|| format!("Invalid http.request_timeout '{}'", self.request_timeout))
    }
}

impl Config {
    /// Layer defaults, the TOML file (if it exists) and `M3U_LOADER_*` environment variables
    pub fn load_from_file(config_file: impl AsRef<Path>) -> Result<Self> {
        Self::figment(config_file.as_ref())
            .extract::<Self>()
            .context("Failed to load configuration")
            .and_then(|config| {
                config.validate()?;
                Ok(config)
            })
    }

    fn figment(config_file: &Path) -> Figment {
        Figment::from(Serialized::defaults(Self::default()))
            .merge(Toml::file(config_file))
            .merge(Env::prefixed(ENV_PREFIX).split("__"))
    }

    pub fn validate(&self) -> Result<()> {
        if self.addon.id_prefix.is_empty() {
            bail!("addon.id_prefix must not be empty");
        }
        if self.addon.catalog_id.is_empty() {
            bail!("addon.catalog_id must not be empty");
        }
        self.http.connect_timeout()?;
        self.http.request_timeout()?;
        Ok(())
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.web.host, self.web.port)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_config_is_valid() {
        let config = Config::default();
        assert!(config.validate().is_ok());
        assert_eq!(config.web.port, 7000);
        assert_eq!(config.addon.id_prefix, "m3uloader-");
        assert_eq!(config.addon.catalog_id, "m3u-catalog");
        assert_eq!(config.http.connect_timeout().unwrap(), Duration::from_secs(10));
    }

    #[test]
    fn test_missing_file_falls_back_to_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from_file(dir.path().join("absent.toml")).unwrap();
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.addon.name, "M3U Loader");
    }

    #[test]
    fn test_partial_file_overrides_defaults() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "[web]\nport = 8123\n\n[addon]\nname = \"My Lists\"").unwrap();

        let config = Config::load_from_file(file.path()).unwrap();
        assert_eq!(config.web.port, 8123);
        assert_eq!(config.web.host, "0.0.0.0");
        assert_eq!(config.addon.name, "My Lists");
        assert_eq!(config.addon.id_prefix, "m3uloader-");
    }

    #[test]
    fn test_validation_rejects_bad_values() {
        let mut config = Config::default();
        config.addon.id_prefix = String::new();
        assert!(config.validate().is_err());

        let mut config = Config::default();
        config.http.request_timeout = "soon".to_string();
        assert!(config.validate().is_err());
    }
}
