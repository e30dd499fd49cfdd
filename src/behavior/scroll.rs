use crate::models::NAVBAR_SCROLL_THRESHOLD;
use tokio::sync::broadcast;

/// Scroll distance over which the hero fades, in pixels.
const HERO_FADE_DISTANCE: f64 = 600.0;

/// Maximum fade applied to the hero; opacity never drops below 0.2.
const HERO_MAX_FADE: f64 = 0.8;

/// Parallax factor applied to the hero's vertical translation.
const HERO_PARALLAX_FACTOR: f64 = 0.3;

/// Derived hero presentation values for a given scroll offset.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct HeroParallax {
    pub opacity: f64,
    pub translate_y: f64,
}

/// Hero opacity for a scroll offset: `1 - min(y / 600, 0.8)`, floor 0.2.
pub fn hero_opacity(offset_y: f64) -> f64 {
    1.0 - (offset_y / HERO_FADE_DISTANCE).min(HERO_MAX_FADE)
}

/// Hero vertical translation for a scroll offset: `y * 0.3`.
pub fn hero_translate_y(offset_y: f64) -> f64 {
    offset_y * HERO_PARALLAX_FACTOR
}

/// Navbar variant flag: scrolled once the offset exceeds 20 px.
pub fn is_scrolled(offset_y: f64) -> bool {
    offset_y > NAVBAR_SCROLL_THRESHOLD
}

/// All hero derivations for one offset. Pure; recomputed on every event,
/// never stored independently of the offset.
pub fn hero_parallax(offset_y: f64) -> HeroParallax {
    HeroParallax {
        opacity: hero_opacity(offset_y),
        translate_y: hero_translate_y(offset_y),
    }
}

/// Viewport scroll publisher.
///
/// Every scroll event is republished to all subscribers in event order, with
/// no smoothing, debouncing, or throttling. Subscribing returns a broadcast
/// receiver; dropping the receiver is the unsubscribe, so an owning section
/// that goes away leaves no dangling subscription.
#[derive(Debug, Clone)]
pub struct ScrollTracker {
    offset_tx: broadcast::Sender<f64>,
}

impl ScrollTracker {
    pub fn new() -> Self {
        let (offset_tx, _) = broadcast::channel(100);
        Self { offset_tx }
    }

    /// Subscribe to scroll offsets. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> broadcast::Receiver<f64> {
        self.offset_tx.subscribe()
    }

    /// Publish the current vertical offset to all subscribers.
    ///
    /// # Returns
    /// The number of subscribers the offset was delivered to.
    pub fn publish(&self, offset_y: f64) -> usize {
        // A send error just means no one is listening right now.
        self.offset_tx.send(offset_y).unwrap_or(0)
    }
}

impl Default for ScrollTracker {
    fn default() -> Self {
        Self::new()
    }
}
