use crate::behavior::{ScrollTracker, hero_parallax};
use crate::metrics::Metrics;
use crate::models::PortfolioConfig;
use crate::sections;
use crate::state::{StateChange, ViewEvent, ViewModel};
use crate::view::{Node, el};
use std::panic::{AssertUnwindSafe, catch_unwind};
use std::sync::Arc;
use tracing::{error, info, warn};

/// Page lifecycle phases.
///
/// The two error phases are terminal: a failed configuration load never
/// mounts the page, and a render panic permanently replaces the page with
/// the critical-error view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppPhase {
    /// Created but not yet mounted.
    Uninitialized,

    /// Configuration validated, sections live, events flowing.
    Mounted,

    /// Configuration failed to load or validate. Only the config-error
    /// view renders; no section ever mounts.
    ConfigErrorDisplayed,

    /// A render pass panicked. Only the critical-error view renders.
    CriticalErrorDisplayed,
}

/// Root of the page: owns the validated configuration, the view model, and
/// the scroll fan-out, and renders the fixed section sequence.
pub struct App {
    config: Option<PortfolioConfig>,
    phase: AppPhase,
    error_message: Option<String>,
    view_model: ViewModel,
    scroll: ScrollTracker,
    metrics: Arc<Metrics>,
}

impl App {
    /// Mount the page from a configuration load result.
    ///
    /// On success this registers one reveal region per skill bar and enters
    /// [`AppPhase::Mounted`]. On failure it enters
    /// [`AppPhase::ConfigErrorDisplayed`] with the load error's message; no
    /// partial page is ever produced.
    pub fn mount(load_result: anyhow::Result<PortfolioConfig>, metrics: Arc<Metrics>) -> Self {
        let view_model = ViewModel::new();
        let scroll = ScrollTracker::new();

        match load_result {
            Ok(config) => {
                for (category, entries) in &config.skills {
                    for index in 0..entries.len() {
                        view_model.register_region(&sections::expertise::skill_region_id(category, index));
                    }
                }

                info!(
                    "Page mounted: {} skill bars, {} projects, {} sections",
                    view_model.regions().len(),
                    config.projects.len(),
                    SECTION_COUNT
                );

                Self {
                    config: Some(config),
                    phase: AppPhase::Mounted,
                    error_message: None,
                    view_model,
                    scroll,
                    metrics,
                }
            }
            Err(err) => {
                error!("Configuration load failed: {:#}", err);

                Self {
                    config: None,
                    phase: AppPhase::ConfigErrorDisplayed,
                    error_message: Some(format!("{:#}", err)),
                    view_model,
                    scroll,
                    metrics,
                }
            }
        }
    }

    pub fn phase(&self) -> &AppPhase {
        &self.phase
    }

    pub fn view_model(&self) -> &ViewModel {
        &self.view_model
    }

    pub fn scroll_tracker(&self) -> &ScrollTracker {
        &self.scroll
    }

    /// Feed a scroll offset through the tracker and the view model.
    pub fn on_scroll(&self, offset_y: f64) {
        if self.phase != AppPhase::Mounted {
            return;
        }

        self.metrics.record_scroll_event();
        self.scroll.publish(offset_y);
        self.record_changes(self.view_model.apply(ViewEvent::Scrolled(offset_y)));
    }

    /// Report an intersection for a reveal region.
    pub fn on_region_visible(&self, region: &str, visible_ratio: f64) {
        if self.phase != AppPhase::Mounted {
            return;
        }

        self.record_changes(self.view_model.apply(ViewEvent::RegionVisible {
            region: region.to_string(),
            visible_ratio,
        }));
    }

    /// Report a failed project image load.
    pub fn on_image_error(&self, index: usize) {
        if self.phase != AppPhase::Mounted {
            return;
        }

        self.record_changes(self.view_model.apply(ViewEvent::ImageFailed(index)));
    }

    fn record_changes(&self, changes: Vec<StateChange>) {
        for change in changes {
            self.metrics.record_state_update();
            match change {
                StateChange::SectionRevealed { .. } => self.metrics.record_reveal_fired(),
                StateChange::ImageFellBack { .. } => self.metrics.record_image_fallback(),
                _ => {}
            }
        }
    }

    /// Render the page for the current phase and state.
    ///
    /// A panic escaping any section is caught here: the app transitions to
    /// [`AppPhase::CriticalErrorDisplayed`] and the critical-error view is
    /// returned in place of the page, so one poisoned config value can
    /// never leave a blank page behind.
    pub fn render(&mut self) -> Node {
        match self.phase {
            AppPhase::Uninitialized | AppPhase::ConfigErrorDisplayed => {
                config_error_view(self.error_message.as_deref().unwrap_or("Configuration unavailable"))
            }
            AppPhase::CriticalErrorDisplayed => critical_error_view(
                self.error_message.as_deref().unwrap_or("Unknown render failure"),
            ),
            AppPhase::Mounted => {
                let config = match &self.config {
                    Some(config) => config,
                    None => return config_error_view("Configuration unavailable"),
                };

                let state = self.view_model.snapshot();
                let result = catch_unwind(AssertUnwindSafe(|| render_page(config, &state)));

                match result {
                    Ok(page) => {
                        self.metrics.record_page_rendered();
                        page
                    }
                    Err(payload) => {
                        let message = panic_message(payload.as_ref());
                        error!("Render pass panicked: {}", message);
                        self.metrics.record_render_error();
                        self.phase = AppPhase::CriticalErrorDisplayed;
                        self.error_message = Some(message.clone());
                        critical_error_view(&message)
                    }
                }
            }
        }
    }
}

/// Number of top-level sections on the mounted page.
pub const SECTION_COUNT: usize = 11;

/// Build the full page: the fixed section sequence inside the page shell.
///
/// Section order is part of the page contract and never depends on which
/// config groups are populated; an empty group renders its section empty,
/// it does not reorder or drop its slot.
fn render_page(config: &PortfolioConfig, state: &crate::models::ViewState) -> Node {
    let parallax = hero_parallax(state.scroll_y);

    el("div")
        .class("antialiased")
        .child(sections::navbar::render(&config.profile, state.is_scrolled()))
        .child(sections::hero::render(&config.profile, parallax))
        .child(sections::snippet::hybrid_summary(config))
        .child(sections::principles::render(&config.principles))
        .child(sections::snippet::code_philosophy(config))
        .child(sections::expertise::render(&config.skills, state))
        .child(sections::trackers::render(&config.trackers))
        .child(sections::certifications::render(&config.certifications))
        .child(sections::projects::render(&config.projects, state))
        .child(sections::contact::render(&config.profile))
        .child(sections::footer::render(&config.profile))
        .into()
}

/// Full-viewport error card shown when the configuration cannot be loaded.
pub fn config_error_view(message: &str) -> Node {
    el("div")
        .class("min-h-screen flex items-center justify-center px-6")
        .child(
            el("div")
                .class("glass-card p-8 rounded-xl max-w-xl text-center border border-red-500/50")
                .child(
                    el("h1")
                        .class("text-2xl font-bold text-red-400 mb-4")
                        .text("Configuration Error"),
                )
                .child(
                    el("p")
                        .class("text-slate-400 text-sm font-mono")
                        .text(message),
                )
                .child(
                    el("p")
                        .class("text-slate-500 text-sm mt-4")
                        .text("Fix the portfolio document and reload."),
                ),
        )
        .into()
}

/// Full-viewport error card shown after a render panic.
pub fn critical_error_view(message: &str) -> Node {
    el("div")
        .class("min-h-screen flex items-center justify-center px-6")
        .child(
            el("div")
                .class("glass-card p-8 rounded-xl max-w-xl text-center border border-red-500/50")
                .child(
                    el("h1")
                        .class("text-2xl font-bold text-red-400 mb-4")
                        .text("Something went wrong"),
                )
                .child(
                    el("p")
                        .class("text-slate-400 text-sm font-mono")
                        .text(message),
                ),
        )
        .into()
}

fn panic_message(payload: &(dyn std::any::Any + Send)) -> String {
    if let Some(message) = payload.downcast_ref::<&str>() {
        (*message).to_string()
    } else if let Some(message) = payload.downcast_ref::<String>() {
        message.clone()
    } else {
        warn!("Render panic payload was not a string");
        "Unknown render failure".to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{PortfolioDocument, Profile};

    fn metrics() -> Arc<Metrics> {
        Arc::new(Metrics::new())
    }

    fn config() -> PortfolioConfig {
        crate::config::ConfigStore::default_document()
            .try_into()
            .unwrap()
    }

    #[test]
    fn test_mount_with_valid_config() {
        let app = App::mount(Ok(config()), metrics());
        assert_eq!(*app.phase(), AppPhase::Mounted);
        assert!(!app.view_model().regions().is_empty());
    }

    #[test]
    fn test_mount_with_failed_load_shows_config_error() {
        let err = anyhow::anyhow!("Portfolio document failed validation");
        let mut app = App::mount(Err(err), metrics());

        assert_eq!(*app.phase(), AppPhase::ConfigErrorDisplayed);

        let html = app.render().to_html();
        assert!(html.contains("Configuration Error"));
        assert!(html.contains("Portfolio document failed validation"));
        // No section mounts alongside the error card.
        assert!(!html.contains("<nav"));
        assert!(!html.contains("<footer"));
    }

    #[test]
    fn test_rendered_page_has_all_sections_in_order() {
        let mut app = App::mount(Ok(config()), metrics());
        let html = app.render().to_html();

        let markers = [
            "<nav",
            "id=\"about\"",
            "Hybrid Workflow",
            "id=\"principles\"",
            "id=\"code-philosophy\"",
            "id=\"expertise\"",
            "id=\"impact\"",
            "id=\"certifications\"",
            "id=\"projects\"",
            "id=\"contact\"",
            "<footer",
        ];
        assert_eq!(markers.len(), SECTION_COUNT);

        let mut cursor = 0;
        for marker in markers {
            let pos = html[cursor..]
                .find(marker)
                .map(|p| cursor + p)
                .unwrap_or_else(|| panic!("section marker {marker} missing or out of order"));
            cursor = pos;
        }
    }

    #[test]
    fn test_scroll_event_updates_rendered_navbar() {
        let mut app = App::mount(Ok(config()), metrics());

        let before = app.render().to_html();
        assert!(before.contains("bg-transparent"));

        app.on_scroll(150.0);
        let after = app.render().to_html();
        assert!(after.contains("bg-black/95"));
    }

    #[test]
    fn test_region_reveal_fills_skill_bar() {
        let mut app = App::mount(Ok(config()), metrics());
        let region = app.view_model().regions()[0].clone();

        app.on_region_visible(&region, 0.5);
        let html = app.render().to_html();
        assert!(app.view_model().snapshot().is_revealed(&region));
        assert!(!html.is_empty());
    }

    #[test]
    fn test_image_error_switches_to_placeholder() {
        let mut app = App::mount(Ok(config()), metrics());

        app.on_image_error(0);
        let html = app.render().to_html();
        assert!(html.contains(sections::PLACEHOLDER_IMAGE_URL));
    }

    #[test]
    fn test_events_ignored_in_error_phase() {
        let app = App::mount(Err(anyhow::anyhow!("bad document")), metrics());
        app.on_scroll(500.0);
        app.on_image_error(0);

        let state = app.view_model().snapshot();
        assert_eq!(state.scroll_y, 0.0);
        assert!(state.failed_images.is_empty());
    }

    #[test]
    fn test_minimal_profile_only_config_renders() {
        let doc = PortfolioDocument {
            profile: Some(Profile::default()),
            ..Default::default()
        };
        let config = PortfolioConfig::try_from(doc).unwrap();

        let mut app = App::mount(Ok(config), metrics());
        let html = app.render().to_html();
        assert_eq!(*app.phase(), AppPhase::Mounted);
        assert!(html.contains("id=\"projects\""));
    }
}
