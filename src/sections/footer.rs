use crate::models::Profile;
use crate::view::{Node, el};

/// Site footer with the copyright line.
pub fn render(profile: &Profile) -> Node {
    el("footer")
        .class("bg-black/20 border-t border-slate-800/50 py-8")
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6 text-center text-slate-500 text-sm")
                .child(el("p").text(format!("© {}. All rights reserved.", profile.name)))
                .child(
                    el("p")
                        .class("mt-2 font-mono text-xs")
                        .text("Built with a declarative section pipeline."),
                ),
        )
        .into()
}
