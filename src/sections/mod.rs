//! Sections - pure rendering of config slices into view trees.
//!
//! Each section exposes a `render` function that is a pure function of its
//! required configuration slice (plus, for the scroll- and reveal-reactive
//! sections, the presentation state it consumes). Sections never read each
//! other's output and never write anywhere; the only state they consume is
//! handed in explicitly.
//!
//! # Components
//!
//! - [`navbar`] / [`footer`] / [`contact`] / [`hero`]: pure templating from
//!   the profile group; navbar and hero additionally take scroll-derived
//!   inputs
//! - [`principles`] / [`expertise`] / [`trackers`] / [`certifications`] /
//!   [`projects`]: list sections iterating an ordered config sequence; an
//!   empty sequence renders the section header with zero items
//! - [`snippet`]: the code-snippet viewer (line classification, numbering,
//!   whitespace preservation) and the two sections built on it
//!
//! # Design Philosophy
//!
//! The sections layer is designed to be:
//! - **Pure**: view trees out, nothing else
//! - **Slice-scoped**: each section touches only its config group
//! - **Testable**: rendered output is plain data that tests assert on

pub mod certifications;
pub mod contact;
pub mod expertise;
pub mod footer;
pub mod hero;
pub mod navbar;
pub mod principles;
pub mod projects;
pub mod snippet;
pub mod trackers;

pub use snippet::{ClassifyRule, LinePredicate, SnippetViewer, StyleToken, StyledLine};

use crate::models::Profile;
use crate::view::{Element, Node, el};

/// Fixed placeholder shown when a project image cannot be displayed.
pub const PLACEHOLDER_IMAGE_URL: &str =
    "https://placehold.co/600x400/1e293b/a5f3fc?text=Placeholder+Image";

/// In-page anchors rendered by the navbar, in display order.
pub const NAV_LINKS: &[(&str, &str)] = &[
    ("#about", "About"),
    ("#principles", "Principles"),
    ("#code-philosophy", "Code"),
    ("#expertise", "Expertise"),
    ("#impact", "Impact"),
    ("#certifications", "Certifications"),
    ("#projects", "Projects"),
];

/// Standard header shown at the top of most sections.
#[derive(Debug, Clone)]
pub struct SectionHeader {
    pub badge: String,
    pub title: String,
    pub gradient_text: String,
    pub description: String,
}

impl SectionHeader {
    pub fn new(badge: &str, title: &str, gradient_text: &str, description: &str) -> Self {
        Self {
            badge: badge.to_string(),
            title: title.to_string(),
            gradient_text: gradient_text.to_string(),
            description: description.to_string(),
        }
    }

    pub fn render(&self) -> Node {
        el("div")
            .class("text-center mb-16")
            .child(
                el("span")
                    .class("text-sm font-mono text-cyan-400 uppercase tracking-widest")
                    .text(&self.badge),
            )
            .child(
                el("h2")
                    .class("text-4xl font-extrabold mt-3")
                    .text(format!("{} ", self.title))
                    .child(el("span").class("gradient-text").text(&self.gradient_text)),
            )
            .child(
                el("p")
                    .class("text-slate-400 max-w-2xl mx-auto mt-4")
                    .text(&self.description),
            )
            .into()
    }
}

/// The download-CV call-to-action, reused by the navbar and the hero.
pub fn cv_button(profile: &Profile, extra_classes: &str) -> Node {
    el("a")
        .class("flex items-center gap-2 font-semibold px-6 py-2 rounded-full text-slate-900 cta-button")
        .class(extra_classes)
        .attr("href", &profile.resume_url)
        .attr("target", "_blank")
        .attr("download", "")
        .text("Download CV")
        .into()
}

/// A phosphor icon element for the given icon key.
pub fn icon(icon_key: &str, extra_classes: &str) -> Element {
    el("i").class("ph").class(icon_key).class(extra_classes)
}
