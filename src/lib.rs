// Folio - declarative single-page portfolio renderer
//
// This is the library crate containing the configuration schema, the section
// renderers, and the presentation-state machinery. The binary crate
// (main.rs) loads a portfolio document and writes the rendered page.

pub mod app;
pub mod behavior;
pub mod config;
pub mod logging;
pub mod metrics;
pub mod models;
pub mod net;
pub mod sections;
pub mod state;
pub mod view;

// Re-export commonly used types for convenience
pub use app::{App, AppPhase};
pub use config::ConfigStore;
pub use metrics::Metrics;
pub use models::{PortfolioConfig, PortfolioDocument, ViewState};
pub use state::{StateChange, ViewEvent, ViewModel};

/// Application version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");

/// Application name
pub const APP_NAME: &str = env!("CARGO_PKG_NAME");
