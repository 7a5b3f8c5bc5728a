mod readiness;

use crate::config::{BrowserConfig, ProbeConfig};
use crate::{Error, Result};
use eoka::{Browser, Page};
use std::path::PathBuf;
use std::time::{Duration, Instant};
use tracing::{debug, info, warn};

/// Result of a completed probe run.
#[derive(Debug)]
pub struct ProbeReport {
    /// Path the screenshot was written to.
    pub artifact: PathBuf,
    /// Size of the written artifact in bytes.
    pub bytes: usize,
    /// Total duration in milliseconds.
    pub duration_ms: u64,
}

/// Run the full probe sequence with scoped browser acquisition.
///
/// The browser is closed on every exit path, including navigation and
/// readiness failures, before the error is propagated.
pub async fn capture(config: &ProbeConfig) -> Result<ProbeReport> {
    let probe = Probe::launch(&config.browser).await?;
    let outcome = probe.run(config).await;
    if let Err(e) = probe.close().await {
        // Close errors never mask the run outcome.
        warn!("browser close failed: {}", e);
    }
    outcome
}

/// A launched browser holding one page, ready to run probe configs.
pub struct Probe {
    browser: Browser,
    page: Page,
}

impl Probe {
    /// Launch a browser per the config.
    pub async fn launch(config: &BrowserConfig) -> Result<Self> {
        let stealth = eoka::StealthConfig {
            headless: config.headless,
            proxy: config.proxy.clone(),
            user_agent: config.user_agent.clone(),
            viewport_width: config.viewport.as_ref().map(|v| v.width).unwrap_or(1280),
            viewport_height: config.viewport.as_ref().map(|v| v.height).unwrap_or(720),
            ..Default::default()
        };

        debug!(
            "Launching browser (headless: {}, viewport: {}x{})",
            stealth.headless, stealth.viewport_width, stealth.viewport_height
        );
        let browser = Browser::launch_with_config(stealth)
            .await
            .map_err(Error::EngineLaunch)?;
        let page = match browser.new_page("about:blank").await {
            Ok(page) => page,
            Err(e) => {
                if let Err(close_err) = browser.close().await {
                    warn!("browser close failed: {}", close_err);
                }
                return Err(Error::EngineLaunch(e));
            }
        };

        Ok(Self { browser, page })
    }

    /// Navigate, wait for readiness, capture, write the artifact.
    pub async fn run(&self, config: &ProbeConfig) -> Result<ProbeReport> {
        let start = Instant::now();

        info!("Navigating to: {}", config.target.url);
        self.navigate(&config.target.url, config.navigation.timeout_ms)
            .await?;

        info!("Waiting for: {}", config.readiness.describe());
        readiness::wait_until_ready(&self.page, &config.readiness).await?;

        info!("Capturing screenshot to: {}", config.output.path);
        let bytes = self.write_screenshot(&config.output.path).await?;

        Ok(ProbeReport {
            artifact: PathBuf::from(&config.output.path),
            bytes,
            duration_ms: start.elapsed().as_millis() as u64,
        })
    }

    async fn navigate(&self, url: &str, timeout_ms: u64) -> Result<()> {
        let deadline = Duration::from_millis(timeout_ms);
        match tokio::time::timeout(deadline, self.page.goto(url)).await {
            Ok(Ok(_)) => Ok(()),
            Ok(Err(e)) => {
                debug!("navigation failed: {}", e);
                Err(Error::Browser(e))
            }
            Err(_) => Err(Error::NavigationTimeout {
                url: url.to_string(),
                timeout_ms,
            }),
        }
    }

    async fn write_screenshot(&self, path: &str) -> Result<usize> {
        let data = self.page.screenshot().await?;
        std::fs::write(path, &data)
            .map_err(|e| Error::Capture(format!("cannot write '{}': {}", path, e)))?;
        Ok(data.len())
    }

    /// Close the browser.
    pub async fn close(self) -> Result<()> {
        self.browser.close().await?;
        Ok(())
    }
}
