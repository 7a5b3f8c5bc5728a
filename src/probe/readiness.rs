//! Readiness wait — blocks until the configured element has rendered.

use crate::config::Readiness;
use crate::{Error, Result};
use eoka::Page;
use std::time::{Duration, Instant};
use tracing::debug;

/// Poll interval for the selector+text condition.
const POLL_MS: u64 = 100;

/// Block until the readiness condition holds, bounded by its timeout.
pub async fn wait_until_ready(page: &Page, readiness: &Readiness) -> Result<()> {
    match readiness.text {
        Some(ref text) => {
            wait_for_selector_with_text(page, &readiness.selector, text, readiness.timeout_ms)
                .await
        }
        None => page
            .wait_for(&readiness.selector, readiness.timeout_ms)
            .await
            .map(|_| ())
            .map_err(|e| {
                debug!("wait_for '{}' failed: {}", readiness.selector, e);
                Error::ReadinessTimeout {
                    condition: readiness.describe(),
                    timeout_ms: readiness.timeout_ms,
                }
            }),
    }
}

/// Poll until an element matching `selector` contains `text`.
async fn wait_for_selector_with_text(
    page: &Page,
    selector: &str,
    text: &str,
    timeout_ms: u64,
) -> Result<()> {
    let js = format!(
        r#"(() => {{
            const els = document.querySelectorAll({sel});
            for (const el of els) {{
                if ((el.textContent || '').includes({txt})) return true;
            }}
            return false;
        }})()"#,
        sel = quote(selector),
        txt = quote(text),
    );

    let deadline = Instant::now() + Duration::from_millis(timeout_ms);
    loop {
        let ready: bool = page.evaluate(&js).await?;
        if ready {
            return Ok(());
        }
        if Instant::now() >= deadline {
            return Err(Error::ReadinessTimeout {
                condition: format!("{} containing '{}'", selector, text),
                timeout_ms,
            });
        }
        page.wait(POLL_MS).await;
    }
}

/// Quote a string for safe embedding in evaluated JS.
fn quote(s: &str) -> String {
    serde_json::to_string(s).unwrap_or_else(|_| "\"\"".into())
}
