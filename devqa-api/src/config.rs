use config::{Config, ConfigError, Environment, File};
use devqa_llm_sdk::models::gemini::GEMINI_2_0_FLASH_ID;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::path::PathBuf;

pub const DEFAULT_HOST: &str = "0.0.0.0";
pub const DEFAULT_PORT: u16 = 5000;

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ApiConfig {
    pub server: ServerConfig,
    pub gemini: GeminiConfig,
    pub logging: LoggingConfig,
    pub cors: CorsConfig,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct GeminiConfig {
    pub api_key: Option<String>,
    pub model: String,
    /// Override for the Gemini endpoint, mainly for local stubs
    pub base_url: Option<String>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct LoggingConfig {
    pub level: String,
    /// Also write logs to this file when set
    pub file: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Serialize, Clone)]
pub struct CorsConfig {
    /// `"*"` allows any origin
    pub allowed_origins: Vec<String>,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                host: DEFAULT_HOST.to_string(),
                port: DEFAULT_PORT,
            },
            gemini: GeminiConfig {
                api_key: None,
                model: GEMINI_2_0_FLASH_ID.to_string(),
                base_url: None,
            },
            logging: LoggingConfig {
                level: "info".to_string(),
                file: None,
            },
            cors: CorsConfig {
                allowed_origins: vec!["*".to_string()],
            },
        }
    }
}

impl ApiConfig {
    /// Defaults, then config files, then `DEVQA_API_*` variables, then the
    /// plain `PORT`, `GEMINI_API_KEY` and `GEMINI_MODEL` variables.
    pub fn load(extra_file: Option<PathBuf>) -> Result<Self, ConfigError> {
        let mut files = default_config_paths();
        files.extend(extra_file);
        Self::load_from(&files, std::env::vars().collect())
    }

    pub fn load_from(files: &[PathBuf], env: HashMap<String, String>) -> Result<Self, ConfigError> {
        let defaults = ApiConfig::default();

        let mut builder = Config::builder()
            .set_default("server.host", defaults.server.host)?
            .set_default("server.port", i64::from(defaults.server.port))?
            .set_default("gemini.model", defaults.gemini.model)?
            .set_default("logging.level", defaults.logging.level)?
            .set_default("cors.allowed_origins", defaults.cors.allowed_origins)?;

        for path in files {
            builder = builder.add_source(File::from(path.clone()).required(false));
        }

        builder = builder.add_source(
            Environment::with_prefix("DEVQA_API")
                .prefix_separator("_")
                .separator("__")
                .source(Some(env.clone().into_iter().collect())),
        );

        builder = builder
            .set_override_option("server.port", non_empty(&env, "PORT"))?
            .set_override_option("gemini.api_key", non_empty(&env, "GEMINI_API_KEY"))?
            .set_override_option("gemini.model", non_empty(&env, "GEMINI_MODEL"))?;

        builder.build()?.try_deserialize()
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.server.host, self.server.port)
    }
}

fn non_empty(env: &HashMap<String, String>, key: &str) -> Option<String> {
    env.get(key).filter(|v| !v.trim().is_empty()).cloned()
}

/// Later entries win: the working-directory file, then the user config file
fn default_config_paths() -> Vec<PathBuf> {
    let mut paths = vec![PathBuf::from("devqa-api.toml")];
    if let Some(config_dir) = dirs::config_dir() {
        paths.push(config_dir.join("devqa").join("api.toml"));
    }
    paths
}
