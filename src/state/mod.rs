// View-model module
//
// Wraps ViewState with shared access, applies viewport events, and emits
// change events so owning sections re-render only when their inputs changed.

use crate::behavior::{RevealObserver, hero_parallax, is_scrolled};
use crate::models::ViewState;
use indexmap::IndexMap;
use std::sync::{Arc, RwLock};
use tokio::sync::broadcast;

/// Discrete viewport events fed into the view model.
///
/// This is the entire write path of the page: browser events in, derived
/// local state out. Nothing writes back into the portfolio configuration.
#[derive(Clone, Debug, PartialEq)]
pub enum ViewEvent {
    /// The viewport scrolled to the given vertical offset.
    Scrolled(f64),

    /// A reveal region reported an intersection with the given visible ratio.
    RegionVisible { region: String, visible_ratio: f64 },

    /// The image of the project at `index` failed to load.
    ImageFailed(usize),
}

/// Change events emitted when presentation state is modified.
///
/// Emitted to notify owning sections about state changes without requiring
/// them to poll.
#[derive(Clone, Debug, PartialEq)]
pub enum StateChange {
    /// The navbar scrolled-past-threshold flag flipped.
    ScrolledFlagChanged { scrolled: bool },

    /// The hero's scroll-derived presentation values changed.
    HeroParallaxChanged { opacity: f64, translate_y: f64 },

    /// A reveal region fired for the first (and only) time.
    SectionRevealed { region: String },

    /// A project image fell back to the placeholder.
    ImageFellBack { index: usize },
}

/// Shared view model with event emission.
///
/// This is the central presentation-state component:
/// - Provides shared access to [`ViewState`] via `Arc<RwLock<T>>`
/// - Applies [`ViewEvent`]s and detects the resulting changes
/// - Owns the per-region [`RevealObserver`]s
/// - Supports subscribing to [`StateChange`]s via a broadcast channel
///
/// Handlers run on the caller's thread in event order; within one scroll
/// burst no reordering occurs.
pub struct ViewModel {
    state: Arc<RwLock<ViewState>>,

    /// Reveal observers keyed by region id, in registration order.
    observers: Arc<RwLock<IndexMap<String, RevealObserver>>>,

    /// Broadcast channel for emitting state change events.
    change_tx: broadcast::Sender<StateChange>,
}

impl ViewModel {
    /// Create a new ViewModel with default state and no registered regions.
    pub fn new() -> Self {
        let (change_tx, _) = broadcast::channel(100);
        Self {
            state: Arc::new(RwLock::new(ViewState::default())),
            observers: Arc::new(RwLock::new(IndexMap::new())),
            change_tx,
        }
    }

    /// Get a snapshot of the current presentation state.
    pub fn snapshot(&self) -> ViewState {
        self.state.read().unwrap().clone()
    }

    /// Execute a function with read access to the state.
    pub fn read<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&ViewState) -> R,
    {
        let state = self.state.read().unwrap();
        f(&state)
    }

    /// Subscribe to state change events. Drop the receiver to unsubscribe.
    pub fn subscribe(&self) -> broadcast::Receiver<StateChange> {
        self.change_tx.subscribe()
    }

    /// Register a reveal region, creating a fresh observer for it.
    ///
    /// Re-registering an id replaces the observer with a new, unfired one
    /// (the re-mount case: state does not resurrect).
    pub fn register_region(&self, region: &str) {
        let mut observers = self.observers.write().unwrap();
        observers.insert(region.to_string(), RevealObserver::new());
        self.state.write().unwrap().revealed.remove(region);
    }

    /// Detach a region's observer without firing it (region removed before
    /// it ever became visible).
    pub fn detach_region(&self, region: &str) {
        if let Some(observer) = self.observers.write().unwrap().get_mut(region) {
            observer.detach();
        }
    }

    /// Registered region ids, in registration order.
    pub fn regions(&self) -> Vec<String> {
        self.observers.read().unwrap().keys().cloned().collect()
    }

    /// Apply a viewport event, updating state and emitting change events.
    ///
    /// # Returns
    /// The [`StateChange`]s that resulted from this event, in emission order.
    pub fn apply(&self, event: ViewEvent) -> Vec<StateChange> {
        let changes = match event {
            ViewEvent::Scrolled(offset_y) => self.apply_scroll(offset_y),
            ViewEvent::RegionVisible {
                region,
                visible_ratio,
            } => self.apply_region_visible(&region, visible_ratio),
            ViewEvent::ImageFailed(index) => self.apply_image_failed(index),
        };

        for change in &changes {
            // Ignore send errors - it's OK if no one is listening.
            let _ = self.change_tx.send(change.clone());
        }

        changes
    }

    fn apply_scroll(&self, offset_y: f64) -> Vec<StateChange> {
        let mut state = self.state.write().unwrap();
        let old_offset = state.scroll_y;
        state.scroll_y = offset_y;

        let mut changes = Vec::new();

        if old_offset != offset_y {
            let parallax = hero_parallax(offset_y);
            changes.push(StateChange::HeroParallaxChanged {
                opacity: parallax.opacity,
                translate_y: parallax.translate_y,
            });
        }

        if is_scrolled(old_offset) != is_scrolled(offset_y) {
            changes.push(StateChange::ScrolledFlagChanged {
                scrolled: is_scrolled(offset_y),
            });
        }

        changes
    }

    fn apply_region_visible(&self, region: &str, visible_ratio: f64) -> Vec<StateChange> {
        let mut observers = self.observers.write().unwrap();

        let Some(observer) = observers.get_mut(region) else {
            tracing::warn!("Intersection report for unregistered region: {}", region);
            return Vec::new();
        };

        if !observer.on_intersection(visible_ratio) {
            return Vec::new();
        }

        self.state
            .write()
            .unwrap()
            .revealed
            .insert(region.to_string());

        tracing::debug!("Region revealed: {}", region);
        vec![StateChange::SectionRevealed {
            region: region.to_string(),
        }]
    }

    fn apply_image_failed(&self, index: usize) -> Vec<StateChange> {
        let newly_failed = self.state.write().unwrap().failed_images.insert(index);

        if newly_failed {
            tracing::warn!("Project image {} failed to load, using placeholder", index);
            vec![StateChange::ImageFellBack { index }]
        } else {
            Vec::new()
        }
    }
}

impl Default for ViewModel {
    fn default() -> Self {
        Self::new()
    }
}

// Cloneable for sharing with subscribers; clones share the same state.
impl Clone for ViewModel {
    fn clone(&self) -> Self {
        Self {
            state: Arc::clone(&self.state),
            observers: Arc::clone(&self.observers),
            change_tx: self.change_tx.clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_new_view_model() {
        let vm = ViewModel::new();
        let state = vm.snapshot();

        assert_eq!(state.scroll_y, 0.0);
        assert!(state.revealed.is_empty());
        assert!(state.failed_images.is_empty());
    }

    #[test]
    fn test_scroll_emits_parallax_and_flag() {
        let vm = ViewModel::new();

        let changes = vm.apply(ViewEvent::Scrolled(100.0));
        assert_eq!(changes.len(), 2);
        assert!(matches!(changes[0], StateChange::HeroParallaxChanged { .. }));
        assert!(matches!(
            changes[1],
            StateChange::ScrolledFlagChanged { scrolled: true }
        ));

        // Another scroll past the threshold changes parallax only.
        let changes = vm.apply(ViewEvent::Scrolled(200.0));
        assert_eq!(changes.len(), 1);
        assert!(matches!(changes[0], StateChange::HeroParallaxChanged { .. }));
    }

    #[test]
    fn test_scroll_to_same_offset_emits_nothing() {
        let vm = ViewModel::new();
        vm.apply(ViewEvent::Scrolled(50.0));

        let changes = vm.apply(ViewEvent::Scrolled(50.0));
        assert!(changes.is_empty());
    }

    #[test]
    fn test_region_reveal_fires_once() {
        let vm = ViewModel::new();
        vm.register_region("skills:manual:0");

        let changes = vm.apply(ViewEvent::RegionVisible {
            region: "skills:manual:0".to_string(),
            visible_ratio: 0.5,
        });
        assert_eq!(
            changes,
            vec![StateChange::SectionRevealed {
                region: "skills:manual:0".to_string()
            }]
        );
        assert!(vm.read(|s| s.is_revealed("skills:manual:0")));

        // Idempotent: a re-delivered intersection emits nothing.
        let changes = vm.apply(ViewEvent::RegionVisible {
            region: "skills:manual:0".to_string(),
            visible_ratio: 1.0,
        });
        assert!(changes.is_empty());
    }

    #[test]
    fn test_unregistered_region_is_ignored() {
        let vm = ViewModel::new();

        let changes = vm.apply(ViewEvent::RegionVisible {
            region: "nope".to_string(),
            visible_ratio: 1.0,
        });
        assert!(changes.is_empty());
        assert!(vm.snapshot().revealed.is_empty());
    }

    #[test]
    fn test_detached_region_never_fires() {
        let vm = ViewModel::new();
        vm.register_region("skills:ai:2");
        vm.detach_region("skills:ai:2");

        let changes = vm.apply(ViewEvent::RegionVisible {
            region: "skills:ai:2".to_string(),
            visible_ratio: 1.0,
        });
        assert!(changes.is_empty());
    }

    #[test]
    fn test_reregistering_region_resets_reveal() {
        let vm = ViewModel::new();
        vm.register_region("skills:manual:1");
        vm.apply(ViewEvent::RegionVisible {
            region: "skills:manual:1".to_string(),
            visible_ratio: 1.0,
        });
        assert!(vm.read(|s| s.is_revealed("skills:manual:1")));

        // Re-mount: a fresh observer, fired state does not resurrect.
        vm.register_region("skills:manual:1");
        assert!(!vm.read(|s| s.is_revealed("skills:manual:1")));

        let changes = vm.apply(ViewEvent::RegionVisible {
            region: "skills:manual:1".to_string(),
            visible_ratio: 1.0,
        });
        assert_eq!(changes.len(), 1);
    }

    #[test]
    fn test_image_failure_recorded_once() {
        let vm = ViewModel::new();

        let changes = vm.apply(ViewEvent::ImageFailed(3));
        assert_eq!(changes, vec![StateChange::ImageFellBack { index: 3 }]);
        assert!(vm.read(|s| s.image_failed(3)));

        let changes = vm.apply(ViewEvent::ImageFailed(3));
        assert!(changes.is_empty());
    }

    #[test]
    fn test_subscribe_to_changes() {
        let vm = ViewModel::new();
        let mut rx = vm.subscribe();

        vm.apply(ViewEvent::Scrolled(300.0));

        let event = rx.try_recv().unwrap();
        assert!(matches!(event, StateChange::HeroParallaxChanged { .. }));
    }

    #[test]
    fn test_clone_shares_state() {
        let vm1 = ViewModel::new();
        let vm2 = vm1.clone();

        vm1.apply(ViewEvent::Scrolled(40.0));
        assert_eq!(vm2.snapshot().scroll_y, 40.0);
    }
}
