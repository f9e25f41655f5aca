use config::{Config as ConfigBuilder, ConfigError, Environment, File};
use nutriplan_shared::GenerationSettings;
use serde::Deserialize;
use std::{env, time::Duration};

#[derive(Debug, Deserialize, Clone, Default)]
pub struct Config {
    #[serde(default)]
    pub observability: ObservabilityConfig,
    #[serde(default)]
    pub generation: GenerationConfig,
}

#[derive(Debug, Deserialize, Clone)]
pub struct ObservabilityConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    /// Structured JSON lines instead of the pretty console format
    #[serde(default)]
    pub json: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            json: false,
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

#[derive(Debug, Deserialize, Clone)]
pub struct GenerationConfig {
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
    #[serde(default = "default_min_meals_per_day")]
    pub min_meals_per_day: usize,
    #[serde(default = "default_min_ingredients")]
    pub min_ingredients: usize,
    #[serde(default = "default_min_instructions")]
    pub min_instructions: usize,
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            timeout_secs: default_timeout_secs(),
            min_meals_per_day: default_min_meals_per_day(),
            min_ingredients: default_min_ingredients(),
            min_instructions: default_min_instructions(),
        }
    }
}

fn default_timeout_secs() -> u64 {
    90
}

fn default_min_meals_per_day() -> usize {
    1
}

fn default_min_ingredients() -> usize {
    2
}

fn default_min_instructions() -> usize {
    1
}

impl From<&GenerationConfig> for GenerationSettings {
    fn from(config: &GenerationConfig) -> Self {
        Self {
            timeout: Duration::from_secs(config.timeout_secs),
            min_meals_per_day: config.min_meals_per_day,
            min_ingredients: config.min_ingredients,
            min_instructions: config.min_instructions,
        }
    }
}

impl Config {
    /// Load configuration from file and environment variables
    ///
    /// Priority (highest to lowest):
    /// 1. Environment variables (NUTRIPLAN__GENERATION__TIMEOUT_SECS, etc.)
    /// 2. Config file given by path, `NUTRIPLAN_CONFIG`, or `config/default.toml`
    /// 3. Hardcoded defaults
    pub fn load(config_path: Option<String>) -> Result<Self, ConfigError> {
        let mut builder = ConfigBuilder::builder()
            .set_default("observability.log_level", default_log_level())?
            .set_default("observability.json", false)?
            .set_default("generation.timeout_secs", default_timeout_secs())?
            .set_default("generation.min_meals_per_day", default_min_meals_per_day() as u64)?
            .set_default("generation.min_ingredients", default_min_ingredients() as u64)?
            .set_default("generation.min_instructions", default_min_instructions() as u64)?;

        let config_file_path = config_path
            .or_else(|| env::var("NUTRIPLAN_CONFIG").ok())
            .unwrap_or_else(|| "config/default.toml".to_string());

        // Missing file is fine, defaults and env still apply
        if std::path::Path::new(&config_file_path).exists() {
            builder = builder.add_source(File::with_name(&config_file_path));
        }

        builder = builder.add_source(
            Environment::with_prefix("NUTRIPLAN")
                .separator("__")
                .try_parsing(true),
        );

        builder.build()?.try_deserialize()
    }

    pub fn validate(&self) -> Result<(), String> {
        if self.generation.timeout_secs == 0 {
            return Err("Generation timeout_secs must be greater than 0".to_string());
        }
        if self.generation.min_meals_per_day < 1 {
            return Err("Generation min_meals_per_day must be at least 1".to_string());
        }
        if self.observability.log_level.trim().is_empty() {
            return Err("Observability log_level must not be empty".to_string());
        }
        Ok(())
    }

    pub fn generation_settings(&self) -> GenerationSettings {
        GenerationSettings::from(&self.generation)
    }
}
