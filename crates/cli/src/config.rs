//! CLI configuration

/// Configuration loaded from environment variables
pub struct Config {
    /// Path to a tokenizer.json for the optional entity recognizer.
    pub model_path: Option<String>,
}

impl Config {
    /// Load configuration from environment variables
    pub fn from_env() -> Self {
        Self {
            model_path: std::env::var("NLQ_MODEL_PATH").ok(),
        }
    }
}
