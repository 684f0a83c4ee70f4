mod app;
mod banner;
mod command;
mod term;

use std::io::IsTerminal;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use egp_core::config::export_dir_from_env_value;
use egp_core::CoreConfig;

/// Main entry point for the eGP application.
///
/// Plays the startup banner, then runs the interactive session loop over
/// stdin/stdout until `quit` or end of input.
///
/// # Environment Variables
/// - `EGP_EXPORT_DIR`: Directory that receives `userProfile.json` on export
///   (default: the current directory)
/// - `EGP_BANNER`: Set to `off` to skip the banner animation (also skipped
///   when stdout is not a terminal)
///
/// # Returns
/// * `Ok(())` - When the session ends normally
/// * `Err(anyhow::Error)` - If startup configuration is invalid
fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();

    tracing_subscriber::registry()
        .with(tracing_subscriber::EnvFilter::from_default_env().add_directive("egp=info".parse()?))
        .with(tracing_subscriber::fmt::layer())
        .init();

    let export_dir = export_dir_from_env_value(std::env::var("EGP_EXPORT_DIR").ok());
    let config = CoreConfig::new(export_dir)?;

    let mut stdout = std::io::stdout();
    let banner_off = std::env::var("EGP_BANNER")
        .map(|v| v.eq_ignore_ascii_case("off"))
        .unwrap_or(false);
    if !banner_off && stdout.is_terminal() {
        banner::play(&mut rand::thread_rng(), &mut stdout);
    }

    tracing::info!(
        "++ Starting eGP session (exports to {})",
        config.export_path().display()
    );

    let stdin = std::io::stdin();
    let mut console = term::LineConsole::new(stdin.lock(), stdout);
    let mut session = app::Session::new(config);
    session.run(&mut console);

    Ok(())
}
