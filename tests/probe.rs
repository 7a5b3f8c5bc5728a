//! Integration tests for render-probe
//!
//! These tests require Chrome to be installed and available.
//! Run with: cargo test --test probe -- --ignored

use render_probe::{capture, Error, ProbeConfig};

/// Check if Chrome is available
fn chrome_available() -> bool {
    eoka::stealth::patcher::find_chrome().is_ok()
}

fn config_for(url: &str, output: &str) -> ProbeConfig {
    let mut config = ProbeConfig::default();
    config.target.url = url.to_string();
    config.output.path = output.to_string();
    config.navigation.timeout_ms = 10_000;
    config.readiness.timeout_ms = 3_000;
    config
}

fn temp_path(name: &str) -> String {
    std::env::temp_dir()
        .join(name)
        .to_string_lossy()
        .into_owned()
}

const DASHBOARD_PAGE: &str = "data:text/html,<h1>Dashboard</h1><nav>menu</nav>";
const BLANK_PAGE: &str = "data:text/html,<p>loading forever</p>";

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_capture_writes_artifact() {
    if !chrome_available() {
        eprintln!("Chrome not found, skipping test");
        return;
    }

    let output = temp_path("render_probe_capture.png");
    let _ = std::fs::remove_file(&output);

    let config = config_for(DASHBOARD_PAGE, &output);
    let report = capture(&config).await.expect("probe should succeed");

    assert_eq!(report.artifact.to_string_lossy(), output);
    assert!(report.bytes > 0);
    let on_disk = std::fs::metadata(&output).expect("artifact should exist");
    assert_eq!(on_disk.len() as usize, report.bytes);

    let _ = std::fs::remove_file(&output);
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_readiness_timeout_writes_nothing() {
    if !chrome_available() {
        eprintln!("Chrome not found, skipping test");
        return;
    }

    let output = temp_path("render_probe_never.png");
    let _ = std::fs::remove_file(&output);

    let mut config = config_for(BLANK_PAGE, &output);
    config.readiness.timeout_ms = 1_500;

    let err = capture(&config).await.expect_err("heading never appears");
    assert!(
        matches!(err, Error::ReadinessTimeout { .. }),
        "unexpected error: {err}"
    );
    assert!(
        std::fs::metadata(&output).is_err(),
        "no artifact should be written on failure"
    );
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_rerun_overwrites_artifact() {
    if !chrome_available() {
        eprintln!("Chrome not found, skipping test");
        return;
    }

    let output = temp_path("render_probe_rerun.png");
    let _ = std::fs::remove_file(&output);

    let config = config_for(DASHBOARD_PAGE, &output);
    let first = capture(&config).await.expect("first run should succeed");
    let second = capture(&config).await.expect("rerun should succeed");

    assert!(first.bytes > 0);
    assert!(second.bytes > 0);
    assert!(std::fs::metadata(&output).is_ok());

    let _ = std::fs::remove_file(&output);
}

#[tokio::test]
#[ignore = "requires Chrome"]
async fn test_unreachable_target_fails() {
    if !chrome_available() {
        eprintln!("Chrome not found, skipping test");
        return;
    }

    let output = temp_path("render_probe_unreachable.png");
    let _ = std::fs::remove_file(&output);

    // Nothing listens on this port; navigation fails fast or times out.
    let mut config = config_for("http://localhost:59999/dashboard", &output);
    config.navigation.timeout_ms = 5_000;

    let err = capture(&config).await.expect_err("target is unreachable");
    assert!(
        matches!(
            err,
            Error::NavigationTimeout { .. } | Error::Browser(_)
        ),
        "unexpected error: {err}"
    );
    assert!(std::fs::metadata(&output).is_err());
}
