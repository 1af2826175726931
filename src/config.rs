// file: src/config.rs
// description: application configuration management with toml support
// reference: https://docs.rs/config

use crate::error::{RagError, Result};
use crate::utils::Validator;
use dotenvy::dotenv;
use serde::{Deserialize, Serialize};
use std::env;
use std::path::Path;

#[derive(Debug, Clone, Default, Deserialize, Serialize)]
pub struct Config {
    #[serde(default)]
    pub upstream: UpstreamConfig,
    #[serde(default)]
    pub product: ProductConfig,
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct UpstreamConfig {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    /// Absence is a recoverable per-call condition, never a startup failure.
    #[serde(default)]
    pub api_key: Option<String>,

    #[serde(default = "default_model")]
    pub search_model: String,

    #[serde(default = "default_model")]
    pub answer_model: String,
}

/// Product identity used to template tool names and descriptions.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProductConfig {
    #[serde(default = "default_slug")]
    pub slug: String,

    #[serde(default = "default_product_name")]
    pub name: String,
}

fn default_base_url() -> String {
    "https://api.groq.com/openai/v1".to_string()
}

fn default_model() -> String {
    "openai/gpt-oss-120b".to_string()
}

fn default_slug() -> String {
    "docs".to_string()
}

fn default_product_name() -> String {
    "Documentation".to_string()
}

impl Default for UpstreamConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            api_key: None,
            search_model: default_model(),
            answer_model: default_model(),
        }
    }
}

impl Default for ProductConfig {
    fn default() -> Self {
        Self {
            slug: default_slug(),
            name: default_product_name(),
        }
    }
}

impl Config {
    /// Resolve configuration once per process start: built-in defaults, an
    /// optional TOML file, `RAG_TOOLS`-prefixed environment variables, then
    /// the plain documented variables (`API_KEY` and friends) on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        dotenv().ok();

        let mut builder = config::Config::builder();

        let file = path.unwrap_or_else(|| Path::new("config/default.toml"));
        if file.exists() {
            builder = builder.add_source(config::File::from(file));
        }

        builder = builder.add_source(
            config::Environment::with_prefix("RAG_TOOLS")
                .separator("__")
                .try_parsing(true),
        );

        let settings = builder
            .build()
            .map_err(|e| RagError::Config(e.to_string()))?;

        let mut config: Config = settings
            .try_deserialize()
            .map_err(|e| RagError::Config(e.to_string()))?;

        config.apply_env_overrides();
        config.validate()?;
        Ok(config)
    }

    pub fn default_config() -> Self {
        Self::default()
    }

    fn apply_env_overrides(&mut self) {
        if let Ok(value) = env::var("API_BASE_URL")
            && !value.trim().is_empty()
        {
            self.upstream.base_url = value;
        }

        if let Ok(value) = env::var("API_KEY")
            && !value.trim().is_empty()
        {
            self.upstream.api_key = Some(value);
        }

        // One variable covers both tools; per-tool values come from the file.
        if let Ok(value) = env::var("API_MODEL")
            && !value.trim().is_empty()
        {
            self.upstream.search_model = value.clone();
            self.upstream.answer_model = value;
        }

        if let Ok(value) = env::var("PRODUCT_SLUG")
            && !value.trim().is_empty()
        {
            self.product.slug = value;
        }

        if let Ok(value) = env::var("PRODUCT_NAME")
            && !value.trim().is_empty()
        {
            self.product.name = value;
        }
    }

    fn validate(&self) -> Result<()> {
        Validator::validate_base_url(&self.upstream.base_url)?;
        Validator::validate_slug(&self.product.slug)?;

        if self.upstream.search_model.trim().is_empty()
            || self.upstream.answer_model.trim().is_empty()
        {
            return Err(RagError::Config(
                "model name must not be empty".to_string(),
            ));
        }

        Ok(())
    }
}
