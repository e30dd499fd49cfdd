//! Folio - declarative single-page portfolio renderer
//!
//! Main entry point for the static renderer.
//!
//! # Execution Flow
//!
//! 1. Initialize logging → logs/folio.<date>
//! 2. Create the metrics collector
//! 3. Load the portfolio document from `Folio Data/Portfolio.yaml`
//!    (a starter document is generated on first run)
//! 4. Mount the app and render the page (a config failure renders the
//!    config-error view instead of the section sequence; there is never a
//!    blank page)
//! 5. Write the rendered HTML to `dist/index.html`
//! 6. Log the metrics summary
//!
//! # Configuration Files
//!
//! Expected in the `Folio Data/` directory:
//! - `Portfolio.yaml`: profile, principles, skills, snippets, trackers,
//!   certifications, projects, tools

use anyhow::{Context, Result};
use folio::{App, AppPhase, ConfigStore, Metrics, APP_NAME, VERSION};
use std::fs;
use std::sync::Arc;

fn main() -> Result<()> {
    let _guard = folio::logging::setup_logging("logs", "folio", false, true)?;

    tracing::info!("Starting {} v{}", APP_NAME, VERSION);

    let metrics = Arc::new(Metrics::new());

    let store = ConfigStore::new("Folio Data")?;
    let load_result = store.load();
    if load_result.is_ok() {
        metrics.record_config_load();
    }

    let mut app = App::mount(load_result, metrics.clone());
    let page = app.render();

    if *app.phase() == AppPhase::ConfigErrorDisplayed {
        tracing::warn!("Rendering config-error page instead of the portfolio");
    }

    let out_dir = "dist";
    fs::create_dir_all(out_dir)
        .with_context(|| format!("Failed to create output directory: {}", out_dir))?;

    let out_path = format!("{}/index.html", out_dir);
    let html = format!("<!DOCTYPE html>\n{}", page.to_html());
    fs::write(&out_path, html).with_context(|| format!("Failed to write {}", out_path))?;

    tracing::info!("Rendered page written to {}", out_path);

    metrics.log_summary();
    tracing::info!("Shutdown complete");

    Ok(())
}
