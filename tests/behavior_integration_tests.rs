//! Integration tests for the behavior and state layers
//!
//! These tests drive ViewModel and ScrollTracker together the way the app
//! root does: scroll offsets in, derived presentation state and change
//! events out.

use folio::behavior::{ScrollTracker, hero_opacity, hero_translate_y, is_scrolled};
use folio::{StateChange, ViewEvent, ViewModel};
use proptest::prelude::*;

#[test]
fn test_scroll_derivation_vectors() {
    let offsets = [0.0, 100.0, 600.0, 1000.0];

    let opacities: Vec<f64> = offsets.iter().map(|&y| hero_opacity(y)).collect();
    assert_eq!(opacities[0], 1.0);
    assert_eq!(opacities[1], 1.0 - 100.0 / 600.0);
    assert_eq!(opacities[2], 1.0 - 0.8);
    assert_eq!(opacities[3], 1.0 - 0.8);

    let flags: Vec<bool> = offsets.iter().map(|&y| is_scrolled(y)).collect();
    assert_eq!(flags, vec![false, true, true, true]);

    assert_eq!(hero_translate_y(1000.0), 300.0);
}

#[tokio::test]
async fn test_scroll_tracker_fans_out_in_order() {
    let tracker = ScrollTracker::new();
    let mut first = tracker.subscribe();
    let mut second = tracker.subscribe();

    tracker.publish(10.0);
    tracker.publish(50.0);

    assert_eq!(first.recv().await.unwrap(), 10.0);
    assert_eq!(first.recv().await.unwrap(), 50.0);
    assert_eq!(second.recv().await.unwrap(), 10.0);
    assert_eq!(second.recv().await.unwrap(), 50.0);
}

#[test]
fn test_scrolled_flag_change_emitted_once_per_flip() {
    let model = ViewModel::new();

    let changes = model.apply(ViewEvent::Scrolled(100.0));
    assert!(changes.iter().any(|c| matches!(
        c,
        StateChange::ScrolledFlagChanged { scrolled: true }
    )));

    // Further scrolling on the same side of the threshold re-derives the
    // parallax but not the flag.
    let changes = model.apply(ViewEvent::Scrolled(200.0));
    assert!(!changes.iter().any(|c| matches!(c, StateChange::ScrolledFlagChanged { .. })));
    assert!(changes.iter().any(|c| matches!(c, StateChange::HeroParallaxChanged { .. })));
}

#[test]
fn test_region_reveal_is_one_shot() {
    let model = ViewModel::new();
    model.register_region("skills:manual:0");

    let below = model.apply(ViewEvent::RegionVisible {
        region: "skills:manual:0".to_string(),
        visible_ratio: 0.05,
    });
    assert!(below.is_empty());

    let fired = model.apply(ViewEvent::RegionVisible {
        region: "skills:manual:0".to_string(),
        visible_ratio: 0.5,
    });
    assert_eq!(fired.len(), 1);

    let redelivered = model.apply(ViewEvent::RegionVisible {
        region: "skills:manual:0".to_string(),
        visible_ratio: 1.0,
    });
    assert!(redelivered.is_empty());
    assert!(model.snapshot().is_revealed("skills:manual:0"));
}

#[test]
fn test_unregistered_region_is_ignored() {
    let model = ViewModel::new();

    let changes = model.apply(ViewEvent::RegionVisible {
        region: "skills:unknown:9".to_string(),
        visible_ratio: 1.0,
    });

    assert!(changes.is_empty());
    assert!(!model.snapshot().is_revealed("skills:unknown:9"));
}

#[tokio::test]
async fn test_changes_broadcast_to_subscribers() {
    let model = ViewModel::new();
    let mut rx = model.subscribe();

    model.apply(ViewEvent::ImageFailed(2));

    let change = rx.recv().await.unwrap();
    assert_eq!(change, StateChange::ImageFellBack { index: 2 });
}

proptest! {
    #[test]
    fn prop_hero_opacity_stays_in_range(offset in 0.0f64..100_000.0) {
        let opacity = hero_opacity(offset);
        prop_assert!((0.2..=1.0).contains(&opacity));
    }

    #[test]
    fn prop_translate_is_linear(offset in 0.0f64..100_000.0) {
        prop_assert_eq!(hero_translate_y(offset), offset * 0.3);
    }
}
