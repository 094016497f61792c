use config::{Config, Environment, File, FileFormat};
use serde::Deserialize;

use crate::error::BoardError;

/// Main configuration structure
#[derive(Debug, Deserialize, Clone, Default)]
pub struct BoardConfig {
    /// Recipe backend the board talks to
    #[serde(default)]
    pub server: ServerConfig,
    /// Model used by the in-process backend
    #[serde(default)]
    pub suggester: SuggesterConfig,
}

/// Configuration for the remote recipe backend
#[derive(Debug, Deserialize, Clone)]
pub struct ServerConfig {
    /// Base URL that `/get_recipes` and `/recipe_history` are appended to
    #[serde(default = "default_server_url")]
    pub base_url: String,
    /// Request timeout in seconds; requests never time out when unset
    #[serde(default)]
    pub request_timeout_secs: Option<u64>,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            base_url: default_server_url(),
            request_timeout_secs: None,
        }
    }
}

/// Configuration for the chat-completions suggester
#[derive(Debug, Deserialize, Clone)]
pub struct SuggesterConfig {
    /// API key for authentication (can also be set via OPENAI_API_KEY)
    pub api_key: Option<String>,
    /// Base URL for API endpoint (for custom or proxy endpoints)
    #[serde(default = "default_openai_url")]
    pub base_url: String,
    /// Model identifier
    #[serde(default = "default_model")]
    pub model: String,
    /// Maximum tokens to generate
    #[serde(default = "default_max_tokens")]
    pub max_tokens: u32,
    /// Temperature for generation (0.0-1.0)
    #[serde(default = "default_temperature")]
    pub temperature: f32,
}

impl Default for SuggesterConfig {
    fn default() -> Self {
        Self {
            api_key: None,
            base_url: default_openai_url(),
            model: default_model(),
            max_tokens: default_max_tokens(),
            temperature: default_temperature(),
        }
    }
}

// Default value functions
fn default_server_url() -> String {
    "http://127.0.0.1:5000".to_string()
}

fn default_openai_url() -> String {
    "https://api.openai.com".to_string()
}

fn default_model() -> String {
    "gpt-3.5-turbo".to_string()
}

fn default_max_tokens() -> u32 {
    500
}

fn default_temperature() -> f32 {
    0.7
}

impl BoardConfig {
    /// Load configuration from file and environment variables
    ///
    /// Configuration is loaded with the following priority (highest to lowest):
    /// 1. Environment variables with RECIPE_BOARD__ prefix
    /// 2. config.toml file in current directory
    /// 3. Default values
    ///
    /// Environment variable format: RECIPE_BOARD__SERVER__BASE_URL
    pub fn load() -> Result<Self, BoardError> {
        let settings = Config::builder()
            // Optional config file (can be missing)
            .add_source(File::with_name("config").required(false))
            .add_source(
                Environment::with_prefix("RECIPE_BOARD")
                    .prefix_separator("__")
                    .separator("__")
                    .try_parsing(true),
            )
            .build()?;

        Ok(settings.try_deserialize()?)
    }

    /// Parse configuration from TOML text alone
    pub fn from_toml(text: &str) -> Result<Self, BoardError> {
        let settings = Config::builder()
            .add_source(File::from_str(text, FileFormat::Toml))
            .build()?;

        Ok(settings.try_deserialize()?)
    }
}
