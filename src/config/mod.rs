//! Configuration management

/// Backend the UI talks to when nothing else is configured.
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:8000";

/// Base URL of the REST backend.
///
/// Browser builds bake it in at compile time (`CATALOG_API_BASE_URL`). Server
/// builds prefer the value loaded from [`Config`] at startup.
pub fn api_base_url() -> String {
    #[cfg(feature = "server")]
    {
        if let Some(url) = server::RUNTIME_API_BASE_URL.get() {
            return url.clone();
        }
    }

    option_env!("CATALOG_API_BASE_URL")
        .unwrap_or(DEFAULT_API_BASE_URL)
        .to_string()
}

#[cfg(feature = "server")]
pub use server::{load_config, load_config_from, use_api_base_url, Config, CONFIG_FILE};

#[cfg(feature = "server")]
mod server {
    use std::path::Path;
    use std::sync::OnceLock;

    use anyhow::{bail, Context, Result};
    use serde::Deserialize;

    use super::DEFAULT_API_BASE_URL;

    /// Optional config file looked up in the working directory.
    pub const CONFIG_FILE: &str = "catalog-admin.toml";

    pub(super) static RUNTIME_API_BASE_URL: OnceLock<String> = OnceLock::new();

    #[derive(Debug, Clone, PartialEq, Deserialize)]
    pub struct Config {
        /// Port the admin UI server listens on
        #[serde(default = "default_port")]
        pub port: u16,

        /// REST backend the UI sends requests to
        #[serde(default = "default_api_base_url")]
        pub api_base_url: String,

        /// Port of the bundled development backend
        #[serde(default = "default_backend_port")]
        pub backend_port: u16,

        /// Start the development backend with a few sample records
        #[serde(default)]
        pub seed_sample_data: bool,
    }

    fn default_port() -> u16 {
        8080
    }

    fn default_api_base_url() -> String {
        DEFAULT_API_BASE_URL.to_string()
    }

    fn default_backend_port() -> u16 {
        8000
    }

    impl Default for Config {
        fn default() -> Self {
            Self {
                port: default_port(),
                api_base_url: default_api_base_url(),
                backend_port: default_backend_port(),
                seed_sample_data: false,
            }
        }
    }

    impl Config {
        fn validate(self) -> Result<Self> {
            let url = url::Url::parse(&self.api_base_url)
                .with_context(|| format!("invalid api_base_url {:?}", self.api_base_url))?;
            if !matches!(url.scheme(), "http" | "https") {
                bail!("api_base_url must be http or https, got {}", url.scheme());
            }
            Ok(self)
        }
    }

    /// Load configuration from `catalog-admin.toml` (if present) and `CATALOG_*` env vars.
    pub fn load_config() -> Result<Config> {
        load_config_from(Path::new(CONFIG_FILE))
    }

    pub fn load_config_from(path: &Path) -> Result<Config> {
        let config = ::config::Config::builder()
            // Start with defaults
            .set_default("port", i64::from(default_port()))?
            .set_default("api_base_url", DEFAULT_API_BASE_URL)?
            .set_default("backend_port", i64::from(default_backend_port()))?
            .set_default("seed_sample_data", false)?
            // Load from config file if it exists
            .add_source(::config::File::from(path).required(false))
            // Override with environment variables (CATALOG_PORT, CATALOG_API_BASE_URL, etc.)
            .add_source(
                ::config::Environment::with_prefix("CATALOG")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        let config: Config = config.try_deserialize()?;
        config.validate()
    }

    /// Make the configured backend the one [`super::api_base_url`] returns.
    ///
    /// Only the first call has any effect.
    pub fn use_api_base_url(config: &Config) {
        if RUNTIME_API_BASE_URL.set(config.api_base_url.clone()).is_err() {
            tracing::debug!("API base URL already set, ignoring {}", config.api_base_url);
        }
    }

}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_base_url_has_no_trailing_slash_by_default() {
        assert!(!DEFAULT_API_BASE_URL.ends_with('/'));
        assert!(api_base_url().starts_with("http"));
    }
}
