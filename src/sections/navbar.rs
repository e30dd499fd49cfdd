use crate::models::Profile;
use crate::sections::{NAV_LINKS, cv_button};
use crate::view::{Node, el};

/// Fixed top navigation bar.
///
/// `scrolled` is the derived navbar flag: past the scroll threshold the bar
/// gets an opaque backdrop and tighter padding, at the top it stays
/// transparent.
pub fn render(profile: &Profile, scrolled: bool) -> Node {
    let chrome = if scrolled {
        "bg-black/95 shadow-xl backdrop-blur-sm py-3"
    } else {
        "bg-transparent py-5"
    };

    let links = el("div")
        .class("hidden lg:flex space-x-8 text-sm font-medium text-slate-300")
        .children(NAV_LINKS.iter().map(|(href, label)| {
            el("a")
                .class("hover:text-cyan-400 transition-colors")
                .attr("href", *href)
                .text(*label)
                .into()
        }));

    let brand = el("div")
        .class("text-2xl font-extrabold font-mono tracking-tighter")
        .child(el("span").class("text-cyan-400").text(brand_prefix(&profile.name)))
        .child(el("span").class("text-white").text(".QA"));

    el("nav")
        .class("fixed w-full z-50 transition-all duration-300")
        .class(chrome)
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6 flex justify-between items-center")
                .child(brand)
                .child(links)
                .child(cv_button(profile, "hidden sm:flex text-sm")),
        )
        .into()
}

/// Brand wordmark prefix: the profile's last name word, or the whole name if
/// it is a single word.
fn brand_prefix(name: &str) -> &str {
    name.split_whitespace().last().unwrap_or(name)
}
