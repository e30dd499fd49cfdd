use crate::behavior::HeroParallax;
use crate::models::Profile;
use crate::sections::{cv_button, icon};
use crate::view::{Node, el};

/// Landing section with the scroll-linked fade/parallax applied as inline
/// style. `parallax` is derived from the current scroll offset; at the top
/// of the page it is full opacity with zero offset.
pub fn render(profile: &Profile, parallax: HeroParallax) -> Node {
    let style = format!(
        "opacity: {}; transform: translateY({}px); transition: transform 0s, opacity 0s",
        parallax.opacity, parallax.translate_y
    );

    let headline = el("h1")
        .class("text-5xl md:text-8xl font-extrabold leading-tight mb-8 text-white")
        .child(el("span").class("gradient-text").text("Bridging the gap between "))
        .child(el("br").class("hidden sm:block"))
        .child(el("span").class("gradient-text").text("Manual Precision"))
        .text(" & Automation Speed.");

    let actions = el("div")
        .class("flex justify-center gap-6")
        .child(cv_button(profile, "text-base"))
        .child(
            el("a")
                .class("flex items-center gap-2 font-semibold px-6 py-2 rounded-full text-cyan-400 border-2 border-cyan-400/50 hover:bg-cyan-500/10 transition-colors")
                .attr("href", "#projects")
                .text("View Work ")
                .child(icon("ph-arrow-right", "text-lg")),
        );

    el("section")
        .attr("id", "about")
        .class("min-h-screen flex items-center justify-center pt-24 relative overflow-hidden")
        .child(el("div").class("absolute inset-0 z-0 opacity-10 pointer-events-none").attr(
            "style",
            "background-image: radial-gradient(circle at 50% 10%, #22d3ee20, transparent 70%)",
        ))
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6 z-10 text-center")
                .attr("style", style)
                .child(
                    el("h2")
                        .class("text-xl text-cyan-400 font-mono mb-6 tracking-wide uppercase")
                        .text(&profile.role),
                )
                .child(headline)
                .child(
                    el("p")
                        .class("text-slate-400 text-lg leading-relaxed mb-10 max-w-3xl mx-auto")
                        .text(&profile.about),
                )
                .child(actions),
        )
        .into()
}
