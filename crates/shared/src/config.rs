//! Application configuration management.

use std::path::PathBuf;

use serde::Deserialize;

/// Environment variable prefix for configuration overrides.
pub const ENV_PREFIX: &str = "CATALOG";

/// Legacy variable naming the front-end origin allowed by CORS.
pub const FRONT_URL_VAR: &str = "FRONT_URL";

/// Application configuration.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct AppConfig {
    /// Server configuration.
    #[serde(default)]
    pub server: ServerConfig,
    /// CORS configuration.
    #[serde(default)]
    pub cors: CorsConfig,
    /// Item collection storage configuration.
    #[serde(default)]
    pub data: DataConfig,
    /// Image directory configuration.
    #[serde(default)]
    pub images: ImagesConfig,
}

/// Server configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ServerConfig {
    /// Host to bind to.
    #[serde(default = "default_host")]
    pub host: String,
    /// Port to listen on.
    #[serde(default = "default_port")]
    pub port: u16,
}

fn default_host() -> String {
    "0.0.0.0".to_string()
}

fn default_port() -> u16 {
    9000
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
        }
    }
}

/// CORS configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct CorsConfig {
    /// Origin of the front-end allowed to call the API.
    #[serde(default = "default_front_url")]
    pub front_url: String,
}

fn default_front_url() -> String {
    "http://localhost:3000".to_string()
}

impl Default for CorsConfig {
    fn default() -> Self {
        Self {
            front_url: default_front_url(),
        }
    }
}

/// Item collection storage configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct DataConfig {
    /// Directory holding the collection document (local filesystem storage).
    #[serde(default = "default_data_dir")]
    pub dir: PathBuf,
    /// Name of the collection document.
    #[serde(default = "default_items_file")]
    pub items_file: String,
    /// S3-compatible storage; takes precedence over `dir` when set.
    #[serde(default)]
    pub s3: Option<S3Config>,
}

fn default_data_dir() -> PathBuf {
    PathBuf::from("jsons")
}

fn default_items_file() -> String {
    "items.json".to_string()
}

impl Default for DataConfig {
    fn default() -> Self {
        Self {
            dir: default_data_dir(),
            items_file: default_items_file(),
            s3: None,
        }
    }
}

/// S3-compatible storage credentials.
#[derive(Debug, Clone, Deserialize)]
pub struct S3Config {
    /// S3 endpoint URL.
    pub endpoint: String,
    /// Bucket name.
    pub bucket: String,
    /// Access key ID.
    pub access_key_id: String,
    /// Secret access key.
    pub secret_access_key: String,
    /// Region.
    #[serde(default = "default_region")]
    pub region: String,
}

fn default_region() -> String {
    "auto".to_string()
}

/// Image directory configuration.
#[derive(Debug, Clone, Deserialize)]
pub struct ImagesConfig {
    /// Root directory of the image assets.
    #[serde(default = "default_images_dir")]
    pub dir: PathBuf,
    /// File served when a requested image does not exist.
    #[serde(default = "default_image")]
    pub default_image: String,
}

fn default_images_dir() -> PathBuf {
    PathBuf::from("images")
}

fn default_image() -> String {
    "default.jpg".to_string()
}

impl Default for ImagesConfig {
    fn default() -> Self {
        Self {
            dir: default_images_dir(),
            default_image: default_image(),
        }
    }
}

impl AppConfig {
    /// Loads configuration from environment and config files.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be loaded.
    pub fn load() -> Result<Self, config::ConfigError> {
        let run_mode = std::env::var("RUN_MODE").unwrap_or_else(|_| "development".to_string());

        let config = config::Config::builder()
            .add_source(config::File::with_name("config/default").required(false))
            .add_source(config::File::with_name(&format!("config/{run_mode}")).required(false))
            .add_source(
                config::Environment::with_prefix(ENV_PREFIX)
                    .separator("__")
                    .try_parsing(true),
            )
            .set_override_option("cors.front_url", std::env::var(FRONT_URL_VAR).ok())?
            .build()?;

        config.try_deserialize()
    }

    /// Socket address string the server binds to.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}
