// Performance metrics module
//
// Provides lightweight metrics tracking for monitoring page rendering

use std::sync::atomic::{AtomicU64, AtomicUsize, Ordering};
use std::time::Instant;

/// Global rendering metrics
///
/// Uses atomic operations for thread-safe metric tracking without locks.
/// Metrics are collected over the lifetime of a mounted page and logged
/// on shutdown.
#[derive(Debug)]
pub struct Metrics {
    /// Number of full-page render passes
    pub pages_rendered: AtomicUsize,

    /// Number of render passes that ended in a critical error
    pub render_errors: AtomicUsize,

    /// Number of portfolio documents loaded
    pub config_loads: AtomicUsize,

    /// Number of scroll events processed
    pub scroll_events: AtomicU64,

    /// Number of reveal regions that fired
    pub reveals_fired: AtomicU64,

    /// Number of project images that fell back to the placeholder
    pub image_fallbacks: AtomicU64,

    /// Number of state updates performed
    pub state_updates: AtomicU64,

    /// Application start time
    start_time: Instant,
}

impl Metrics {
    pub fn new() -> Self {
        Self {
            pages_rendered: AtomicUsize::new(0),
            render_errors: AtomicUsize::new(0),
            config_loads: AtomicUsize::new(0),
            scroll_events: AtomicU64::new(0),
            reveals_fired: AtomicU64::new(0),
            image_fallbacks: AtomicU64::new(0),
            state_updates: AtomicU64::new(0),
            start_time: Instant::now(),
        }
    }

    /// Record a completed full-page render pass
    pub fn record_page_rendered(&self) {
        self.pages_rendered.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a render pass that ended in a critical error
    pub fn record_render_error(&self) {
        self.render_errors.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a portfolio document load
    pub fn record_config_load(&self) {
        self.config_loads.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a processed scroll event
    pub fn record_scroll_event(&self) {
        self.scroll_events.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a reveal region firing
    pub fn record_reveal_fired(&self) {
        self.reveals_fired.fetch_add(1, Ordering::Relaxed);
    }

    /// Record an image falling back to the placeholder
    pub fn record_image_fallback(&self) {
        self.image_fallbacks.fetch_add(1, Ordering::Relaxed);
    }

    /// Record a state update
    pub fn record_state_update(&self) {
        self.state_updates.fetch_add(1, Ordering::Relaxed);
    }

    /// Get total uptime
    pub fn uptime(&self) -> std::time::Duration {
        self.start_time.elapsed()
    }

    /// Log metrics summary
    pub fn log_summary(&self) {
        tracing::info!("=== Rendering Metrics Summary ===");
        tracing::info!("Uptime: {:.2}s", self.uptime().as_secs_f64());
        tracing::info!(
            "Pages: {} rendered, {} critical errors, {} config loads",
            self.pages_rendered.load(Ordering::Relaxed),
            self.render_errors.load(Ordering::Relaxed),
            self.config_loads.load(Ordering::Relaxed)
        );
        tracing::info!(
            "Events: {} scrolls, {} reveals, {} image fallbacks, {} state updates",
            self.scroll_events.load(Ordering::Relaxed),
            self.reveals_fired.load(Ordering::Relaxed),
            self.image_fallbacks.load(Ordering::Relaxed),
            self.state_updates.load(Ordering::Relaxed)
        );
    }
}

impl Default for Metrics {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_metrics_creation() {
        let metrics = Metrics::new();
        assert_eq!(metrics.pages_rendered.load(Ordering::Relaxed), 0);
        assert_eq!(metrics.scroll_events.load(Ordering::Relaxed), 0);
    }

    #[test]
    fn test_record_operations() {
        let metrics = Metrics::new();

        metrics.record_page_rendered();
        metrics.record_page_rendered();
        metrics.record_render_error();
        metrics.record_scroll_event();
        metrics.record_reveal_fired();
        metrics.record_image_fallback();

        assert_eq!(metrics.pages_rendered.load(Ordering::Relaxed), 2);
        assert_eq!(metrics.render_errors.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.scroll_events.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.reveals_fired.load(Ordering::Relaxed), 1);
        assert_eq!(metrics.image_fallbacks.load(Ordering::Relaxed), 1);
    }

    #[test]
    fn test_uptime_advances() {
        let metrics = Metrics::new();
        std::thread::sleep(std::time::Duration::from_millis(5));
        assert!(metrics.uptime().as_millis() >= 5);
    }
}
