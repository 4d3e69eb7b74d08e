use clap::Parser;
use std::time::Duration;

/// Runtime settings. Every flag can also come from the environment (or a `.env` file).
#[derive(Parser, Debug, Clone)]
#[command(name = "pdfwizard")]
#[command(about = "Turns free text into a LaTeX document and a compiled PDF")]
pub struct ServerConfig {
    /// Host address to bind to
    #[arg(long, env = "PDFWIZARD_HOST", default_value = "127.0.0.1")]
    pub host: String,

    /// Port to listen on
    #[arg(short, long, env = "PDFWIZARD_PORT", default_value = "8080")]
    pub port: u16,

    /// Open the UI in the default browser once the server is up
    #[arg(long, env = "PDFWIZARD_OPEN_BROWSER")]
    pub open_browser: bool,

    /// Bearer token for the chat-completion service
    #[arg(long, env = "GROK_API_KEY", hide_env_values = true)]
    pub api_key: String,

    #[arg(long, env = "GENERATION_URL", default_value = "https://api.x.ai/v1/chat/completions")]
    pub generation_url: String,

    #[arg(long, env = "GENERATION_MODEL", default_value = "grok-4-fast-reasoning")]
    pub model: String,

    #[arg(long, env = "GENERATION_TEMPERATURE", default_value = "0.2")]
    pub temperature: f32,

    #[arg(long, env = "GENERATION_MAX_TOKENS", default_value = "3000")]
    pub max_tokens: u32,

    /// Timeout of a single generation call, in seconds
    #[arg(long, env = "GENERATION_TIMEOUT_SECS", default_value = "60")]
    pub generation_timeout_secs: u64,

    #[arg(long, env = "COMPILE_URL", default_value = "https://latexonline.cc/compile")]
    pub compile_url: String,

    #[arg(long, env = "COMPILE_COMPILER", default_value = "pdflatex")]
    pub compiler: String,

    /// Timeout of a single compile attempt, in seconds
    #[arg(long, env = "COMPILE_TIMEOUT_SECS", default_value = "60")]
    pub compile_timeout_secs: u64,

    /// Extra compile attempts after a transient failure
    #[arg(long, env = "COMPILE_RETRIES", default_value = "2")]
    pub compile_retries: u32,

    /// Delay before the first compile retry; doubles on each further attempt
    #[arg(long, env = "RETRY_BACKOFF_MS", default_value = "500")]
    pub retry_backoff_ms: u64,

    /// Deadline for the whole generate + compile chain, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value = "150")]
    pub request_timeout_secs: u64,

    /// Maximum accepted JSON body, in bytes
    #[arg(long, env = "BODY_LIMIT_BYTES", default_value = "262144")]
    pub body_limit: usize,
}

impl ServerConfig {
    pub fn url(&self) -> String {
        format!("http://{}:{}", self.host, self.port)
    }

    pub fn generation_timeout(&self) -> Duration {
        Duration::from_secs(self.generation_timeout_secs)
    }

    pub fn compile_timeout(&self) -> Duration {
        Duration::from_secs(self.compile_timeout_secs)
    }

    pub fn retry_backoff(&self) -> Duration {
        Duration::from_millis(self.retry_backoff_ms)
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}
