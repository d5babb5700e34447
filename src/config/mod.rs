mod types;

pub use types::*;

use crate::{Error, Result};
use std::env;
use tracing::debug;

/// Loads configuration from the process environment. The service credential
/// is the only required value; everything else falls back to defaults.
pub fn load() -> Result<Config> {
    let api_key = env::var("LLM_API_KEY")
        .map_err(|_| Error::config("LLM_API_KEY not found in environment variables"))?;

    let config = Config {
        llm: LlmConfig {
            base_url: env::var("LLM_BASE_URL").unwrap_or_default(),
            api_key,
            model: env::var("LLM_MODEL").unwrap_or_else(|_| types::default_model()),
        },
        server: ServerConfig {
            host: env::var("WEB_SERVER_HOST").unwrap_or_else(|_| types::default_host()),
            port: env::var("WEB_SERVER_PORT")
                .ok()
                .and_then(|p| p.parse().ok())
                .unwrap_or_else(types::default_port),
            logs: LogsConfig {
                level: env::var("LOG_LEVEL").unwrap_or_else(|_| types::default_log_level()),
            },
        },
        generation: GenerationConfig {
            context_word_threshold: env::var("CONTEXT_WORD_THRESHOLD")
                .ok()
                .and_then(|t| t.parse().ok())
                .unwrap_or_else(types::default_context_word_threshold),
        },
    };

    debug!("Configuration loaded for model: {}", config.llm.model);

    Ok(config)
}
