use std::collections::HashSet;

/// Scroll threshold (in pixels) past which the navbar switches to its
/// compact, opaque variant.
pub const NAVBAR_SCROLL_THRESHOLD: f64 = 20.0;

/// Single source of truth for all presentation state derived from browser
/// events.
///
/// The portfolio configuration itself is immutable after load; everything
/// that *can* change while the page is up lives here: the viewport scroll
/// offset, which reveal regions have fired, and which project images have
/// failed to load.
///
/// # Related Types
///
/// - [`crate::state::ViewModel`]: wraps this struct with change detection and
///   event broadcast
/// - [`crate::behavior::ScrollTracker`]: source of the scroll offset and the
///   pure derivations below
/// - [`crate::behavior::RevealObserver`]: source of one-shot reveal triggers
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ViewState {
    /// Current vertical scroll offset of the tracked viewport, in pixels.
    pub scroll_y: f64,

    /// Reveal regions that have fired. Membership is permanent for the
    /// lifetime of the mounted page; re-delivered intersections are ignored.
    pub revealed: HashSet<String>,

    /// Indices of project entries whose image failed to load. These render
    /// the placeholder image on every subsequent pass.
    pub failed_images: HashSet<usize>,
}

impl ViewState {
    /// Whether the viewport has scrolled past the navbar threshold.
    pub fn is_scrolled(&self) -> bool {
        self.scroll_y > NAVBAR_SCROLL_THRESHOLD
    }

    /// Whether the reveal region with the given id has fired.
    pub fn is_revealed(&self, region: &str) -> bool {
        self.revealed.contains(region)
    }

    /// Whether the project at `index` should render the placeholder image.
    pub fn image_failed(&self, index: usize) -> bool {
        self.failed_images.contains(&index)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_state() {
        let state = ViewState::default();
        assert_eq!(state.scroll_y, 0.0);
        assert!(!state.is_scrolled());
        assert!(!state.is_revealed("skills:manual:0"));
        assert!(!state.image_failed(0));
    }

    #[test]
    fn test_scrolled_threshold_is_exclusive() {
        let mut state = ViewState::default();
        state.scroll_y = NAVBAR_SCROLL_THRESHOLD;
        assert!(!state.is_scrolled());

        state.scroll_y = NAVBAR_SCROLL_THRESHOLD + 0.1;
        assert!(state.is_scrolled());
    }
}
