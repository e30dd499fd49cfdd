//! Behavior primitives - the two generic, section-agnostic behaviors.
//!
//! - [`RevealObserver`]: one-shot visibility trigger. The owning section
//!   attaches an observer to a region; on the first intersection at or above
//!   the threshold the observer fires and detaches. Used by the skill
//!   progress bars to animate from zero on first sight.
//!
//! - [`ScrollTracker`]: republishes viewport scroll offsets to subscribers
//!   and hosts the pure derivations (hero opacity and translation, navbar
//!   scrolled flag) computed from an offset. The derivations are free
//!   functions so sections can recompute them synchronously on each event.
//!
//! Both behaviors carry no reference to any section's internals; sections own
//! their instances and fold the outputs into their local view state.

pub mod reveal;
pub mod scroll;

pub use reveal::{DEFAULT_REVEAL_THRESHOLD, RevealObserver};
pub use scroll::{
    HeroParallax, ScrollTracker, hero_opacity, hero_parallax, hero_translate_y, is_scrolled,
};
