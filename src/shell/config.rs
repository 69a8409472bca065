use clap::Parser;
use std::time::Duration;

#[derive(Debug, Clone, Parser)]
#[command(
    name = "course_registrations",
    about = "Course catalog, inquiries and paid registrations"
)]
pub struct Config {
    #[arg(long, env = "HOST", default_value = "0.0.0.0")]
    pub host: String,

    #[arg(long, env = "PORT", default_value_t = 8080)]
    pub port: u16,

    /// Simulated card tokenization latency.
    #[arg(long, env = "TOKENIZE_LATENCY_MS", default_value_t = 500)]
    pub tokenize_latency_ms: u64,

    /// Simulated charge latency.
    #[arg(long, env = "PAYMENT_LATENCY_MS", default_value_t = 2000)]
    pub payment_latency_ms: u64,

    /// A charge still running after this long is treated as declined.
    #[arg(long, env = "PAYMENT_TIMEOUT_MS", default_value_t = 10_000)]
    pub payment_timeout_ms: u64,

    /// Pending registrations older than this are failed by the sweep.
    #[arg(long, env = "PENDING_TTL_SECS", default_value_t = 900)]
    pub pending_ttl_secs: u64,

    #[arg(long, env = "SWEEP_INTERVAL_SECS", default_value_t = 60)]
    pub sweep_interval_secs: u64,

    /// Start with an empty catalog.
    #[arg(long, env = "NO_SEED")]
    pub no_seed: bool,
}

impl Config {
    pub fn addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    pub fn tokenize_latency(&self) -> Duration {
        Duration::from_millis(self.tokenize_latency_ms)
    }

    pub fn payment_latency(&self) -> Duration {
        Duration::from_millis(self.payment_latency_ms)
    }

    pub fn payment_timeout(&self) -> Duration {
        Duration::from_millis(self.payment_timeout_ms)
    }

    pub fn pending_ttl(&self) -> chrono::TimeDelta {
        i64::try_from(self.pending_ttl_secs)
            .ok()
            .and_then(chrono::TimeDelta::try_seconds)
            .unwrap_or(chrono::TimeDelta::MAX)
    }

    pub fn sweep_interval(&self) -> Duration {
        Duration::from_secs(self.sweep_interval_secs.max(1))
    }
}
