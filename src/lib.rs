//! # render-probe
//!
//! Headless page verification. Navigate to a URL, wait for expected content
//! to render, capture a screenshot to disk.
//!
//! ## Quick Start
//!
//! ```rust,no_run
//! use render_probe::{capture, ProbeConfig};
//!
//! # #[tokio::main]
//! # async fn main() -> render_probe::Result<()> {
//! let config = ProbeConfig::default();
//! let report = capture(&config).await?;
//! println!("Wrote {} bytes to {}", report.bytes, report.artifact.display());
//! # Ok(())
//! # }
//! ```

mod config;
mod probe;

pub use config::{
    BrowserConfig, Navigation, Output, ProbeConfig, Readiness, TargetUrl, Viewport,
};
pub use probe::{capture, Probe, ProbeReport};

/// Result type for render-probe operations.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors that can occur during config loading or a probe run.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    #[error("config error: {0}")]
    Config(String),

    #[error("yaml parse error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),

    #[error("browser launch failed: {0}")]
    EngineLaunch(#[source] eoka::Error),

    #[error("navigation to '{url}' did not complete within {timeout_ms}ms")]
    NavigationTimeout { url: String, timeout_ms: u64 },

    #[error("readiness condition '{condition}' not met within {timeout_ms}ms")]
    ReadinessTimeout { condition: String, timeout_ms: u64 },

    #[error("capture failed: {0}")]
    Capture(String),

    #[error("browser error: {0}")]
    Browser(#[from] eoka::Error),
}
