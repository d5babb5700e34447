#[derive(Debug, Clone)]
pub struct Config {
    pub llm: LlmConfig,
    pub server: ServerConfig,
    pub generation: GenerationConfig,
}

#[derive(Debug, Clone)]
pub struct LlmConfig {
    /// OpenAI-compatible endpoint override; empty means the provider default.
    pub base_url: String,
    pub api_key: String,
    pub model: String,
}

#[derive(Debug, Clone)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
    pub logs: LogsConfig,
}

#[derive(Debug, Clone)]
pub struct LogsConfig {
    pub level: String,
}

#[derive(Debug, Clone)]
pub struct GenerationConfig {
    /// Inputs shorter than this many words are treated as bare topics and
    /// expanded into a paragraph before question generation.
    pub context_word_threshold: usize,
}

impl Default for LogsConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
        }
    }
}

impl Default for GenerationConfig {
    fn default() -> Self {
        Self {
            context_word_threshold: default_context_word_threshold(),
        }
    }
}

pub(super) fn default_model() -> String {
    "gpt-4o-mini".to_string()
}

pub(super) fn default_host() -> String {
    "0.0.0.0".to_string()
}

pub(super) fn default_port() -> u16 {
    8080
}

pub(super) fn default_log_level() -> String {
    "info".to_string()
}

pub(super) fn default_context_word_threshold() -> usize {
    5
}
