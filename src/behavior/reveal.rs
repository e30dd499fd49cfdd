/// Default visibility threshold: the region must be at least 10% visible.
pub const DEFAULT_REVEAL_THRESHOLD: f64 = 0.1;

/// One-shot visibility observer.
///
/// Models the intersection-observer reveal behavior: the observer fires
/// exactly once, on the first intersection report at or above its threshold,
/// and then detaches permanently. A region that is already visible when the
/// observer attaches fires on the first report. Re-mounting the owning
/// section creates a fresh observer; fired state never resurrects.
#[derive(Debug, Clone)]
pub struct RevealObserver {
    threshold: f64,
    fired: bool,
    detached: bool,
}

impl RevealObserver {
    /// Create an observer with the default 10% visibility threshold.
    pub fn new() -> Self {
        Self::with_threshold(DEFAULT_REVEAL_THRESHOLD)
    }

    /// Create an observer with an explicit visibility threshold in `[0, 1]`.
    pub fn with_threshold(threshold: f64) -> Self {
        Self {
            threshold: threshold.clamp(0.0, 1.0),
            fired: false,
            detached: false,
        }
    }

    /// Report an intersection with the given visible ratio.
    ///
    /// Returns `true` exactly once: on the first qualifying report. All
    /// subsequent reports, qualifying or not, return `false` because the
    /// observer has detached.
    pub fn on_intersection(&mut self, visible_ratio: f64) -> bool {
        if self.detached {
            return false;
        }

        if visible_ratio >= self.threshold {
            self.fired = true;
            self.detached = true;
            return true;
        }

        false
    }

    /// Detach without firing. Used when the observed region is removed
    /// before it ever became visible; the callback must not run afterwards.
    pub fn detach(&mut self) {
        self.detached = true;
    }

    pub fn has_fired(&self) -> bool {
        self.fired
    }

    pub fn is_detached(&self) -> bool {
        self.detached
    }
}

impl Default for RevealObserver {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fires_once_then_detaches() {
        let mut observer = RevealObserver::new();

        assert!(observer.on_intersection(0.5));
        assert!(observer.has_fired());
        assert!(observer.is_detached());

        // Later intersection reports are ignored.
        assert!(!observer.on_intersection(1.0));
        assert!(!observer.on_intersection(0.0));
    }

    #[test]
    fn test_below_threshold_does_not_fire() {
        let mut observer = RevealObserver::new();

        assert!(!observer.on_intersection(0.05));
        assert!(!observer.has_fired());
        assert!(!observer.is_detached());

        assert!(observer.on_intersection(0.1));
    }

    #[test]
    fn test_already_visible_region_fires_on_first_report() {
        let mut observer = RevealObserver::new();
        assert!(observer.on_intersection(1.0));
        assert!(!observer.on_intersection(1.0));
    }

    #[test]
    fn test_detach_before_firing_suppresses_callback() {
        let mut observer = RevealObserver::new();
        observer.detach();

        assert!(!observer.on_intersection(1.0));
        assert!(!observer.has_fired());
    }

    #[test]
    fn test_new_instance_starts_fresh() {
        let mut first = RevealObserver::new();
        assert!(first.on_intersection(0.5));

        let mut second = RevealObserver::new();
        assert!(!second.has_fired());
        assert!(second.on_intersection(0.5));
    }

    #[test]
    fn test_threshold_is_clamped() {
        let mut observer = RevealObserver::with_threshold(2.0);
        assert!(observer.on_intersection(1.0));
    }
}
