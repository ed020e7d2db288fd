//! Server configuration from environment variables.
//!
//! Load configuration using `Config::from_env()` after calling `dotenvy::dotenv()`.
//! Site address, reload port and asset paths come from `[package.metadata.leptos]`.

/// Log filter used when `RUST_LOG` is not set
pub const DEFAULT_LOG_FILTER: &str = "info";

/// Server configuration loaded from environment variables.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// `tracing` filter directive
    /// Example: info,authpanel=debug
    pub log_filter: Option<String>,

    /// Whether responses are compressed with brotli/gzip
    pub compression: bool,
}

impl Config {
    /// Load configuration from environment variables.
    ///
    /// Call `dotenvy::dotenv()` before this to load from `.env` file.
    pub fn from_env() -> Self {
        Self::from_vars(
            std::env::var("RUST_LOG").ok(),
            std::env::var("COMPRESSION").ok(),
        )
    }

    fn from_vars(log_filter: Option<String>, compression: Option<String>) -> Self {
        Self {
            log_filter: log_filter.filter(|f| !f.trim().is_empty()),
            compression: compression.as_deref().map(parse_flag).unwrap_or(true),
        }
    }

    /// Filter directive to hand to the tracing subscriber
    pub fn log_filter_or_default(&self) -> &str {
        self.log_filter.as_deref().unwrap_or(DEFAULT_LOG_FILTER)
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            log_filter: None,
            compression: true,
        }
    }
}

/// Anything but an explicit "off" value enables the flag
fn parse_flag(value: &str) -> bool {
    !matches!(
        value.trim().to_ascii_lowercase().as_str(),
        "0" | "false" | "off" | "no"
    )
}
