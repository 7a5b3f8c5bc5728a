use clap::Parser;
use render_probe::ProbeConfig;
use std::path::PathBuf;
use tracing::Level;
use tracing_subscriber::FmtSubscriber;

#[derive(Parser)]
#[command(name = "render-probe")]
#[command(about = "Headless page verification — navigate, wait, screenshot")]
#[command(version)]
struct Cli {
    /// Config file to run (omit to run the built-in scenario)
    config: Option<PathBuf>,

    /// Target URL (overrides config)
    #[arg(long)]
    url: Option<String>,

    /// Output path for the screenshot (overrides config)
    #[arg(short, long)]
    output: Option<String>,

    /// Run with a visible browser window (overrides config)
    #[arg(long)]
    headed: bool,

    /// Validate config without launching a browser
    #[arg(long)]
    check: bool,

    /// Verbose output (-v for info, -vv for debug)
    #[arg(short, long, action = clap::ArgAction::Count)]
    verbose: u8,

    /// Quiet mode (only errors)
    #[arg(short, long)]
    quiet: bool,
}

#[tokio::main]
async fn main() -> render_probe::Result<()> {
    let cli = Cli::parse();

    // Set up logging based on verbosity
    let level = if cli.quiet {
        Level::ERROR
    } else {
        match cli.verbose {
            0 => Level::WARN,
            1 => Level::INFO,
            _ => Level::DEBUG,
        }
    };

    FmtSubscriber::builder()
        .with_max_level(level)
        .with_target(false)
        .with_thread_ids(false)
        .with_file(false)
        .with_line_number(false)
        .compact()
        .init();

    // Load config, or fall back to the compiled-in scenario
    let mut config = match cli.config {
        Some(ref path) => ProbeConfig::load(path)?,
        None => ProbeConfig::default(),
    };

    // Apply CLI overrides
    if let Some(url) = cli.url {
        config.target.url = url;
    }
    if let Some(output) = cli.output {
        config.output.path = output;
    }
    if cli.headed {
        config.browser.headless = false;
    }
    config.validate()?;

    if cli.check {
        println!("Config valid: {}", config.name);
        println!("  Target: {}", config.target.url);
        if let Some(ref viewport) = config.browser.viewport {
            println!("  Viewport: {}x{}", viewport.width, viewport.height);
        }
        println!("  Readiness: {}", config.readiness.describe());
        println!("  Output: {}", config.output.path);
        println!("  Navigation timeout: {}ms", config.navigation.timeout_ms);
        return Ok(());
    }

    println!("Running: {}", config.name);

    let report = render_probe::capture(&config).await;

    println!();
    match report {
        Ok(report) => {
            println!("✓ Captured {}", report.artifact.display());
            println!("  Bytes: {}", report.bytes);
            println!("  Duration: {}ms", report.duration_ms);
            Ok(())
        }
        Err(e) => {
            println!("✗ Failed");
            println!("  Error: {}", e);
            std::process::exit(1);
        }
    }
}
