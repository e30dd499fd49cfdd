use crate::models::{Skill, ViewState};
use crate::sections::{SectionHeader, icon};
use crate::view::{Node, el};
use indexmap::IndexMap;

/// Reveal-region id for one skill bar. The expertise section registers one
/// region per bar under this id, and the bar animates from zero width the
/// first time its region reports visible.
pub fn skill_region_id(category: &str, index: usize) -> String {
    format!("skills:{category}:{index}")
}

/// Column chrome for a skill category: heading, icon, accent class.
fn category_display(category: &str) -> (String, &'static str, &'static str) {
    match category {
        "manual" => ("Manual & Hybrid Testing".to_string(), "ph-hand-tap", "text-blue-400"),
        "automation" => ("Automation & Frameworks".to_string(), "ph-code-block", "text-cyan-400"),
        "ai" => ("AI-Augmented Testing".to_string(), "ph-brain", "text-purple-400"),
        other => (title_case(other), "ph-code", "text-slate-300"),
    }
}

fn title_case(word: &str) -> String {
    let mut chars = word.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().collect::<String>() + chars.as_str(),
        None => String::new(),
    }
}

/// Skill-stack section: one column per category in authored order, each
/// skill as an animated progress bar.
///
/// A bar's fill width is its clamped proficiency once the bar's reveal
/// region has fired, and zero before that, so the CSS width transition
/// plays the grow animation exactly once.
pub fn render(skills: &IndexMap<String, Vec<Skill>>, view: &ViewState) -> Node {
    let header = SectionHeader::new(
        "Skill Stack",
        "Technical",
        "Expertise",
        "A balanced profile of deep manual rigor and efficient automation engineering.",
    );

    let columns = el("div")
        .class("grid md:grid-cols-2 lg:grid-cols-3 gap-12")
        .children(skills.iter().map(|(category, entries)| {
            let (heading, icon_key, accent) = category_display(category);

            el("div")
                .class("glass-card p-8 rounded-xl")
                .child(
                    el("h3")
                        .class("text-2xl font-bold mb-6 flex items-center gap-3")
                        .class(accent)
                        .child(icon(icon_key, "text-3xl"))
                        .text(format!(" {heading}")),
                )
                .child(el("div").class("space-y-4").children(
                    entries.iter().enumerate().map(|(index, skill)| {
                        let revealed = view.is_revealed(&skill_region_id(category, index));
                        progress_bar(skill, revealed)
                    }),
                ))
                .into()
        }));

    el("section")
        .attr("id", "expertise")
        .class("py-24 bg-slate-900/40")
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6")
                .child(header.render())
                .child(columns),
        )
        .into()
}

fn progress_bar(skill: &Skill, revealed: bool) -> Node {
    let level = skill.clamped_level();
    let width = if revealed { level } else { 0 };

    el("div")
        .class("mb-4")
        .child(
            el("div")
                .class("flex justify-between items-center mb-1")
                .child(
                    el("span")
                        .class("text-sm font-medium text-slate-300")
                        .text(&skill.name),
                )
                .child(
                    el("span")
                        .class("text-xs font-semibold")
                        .class(&format!("text-{}", skill.color_token))
                        .text(format!("{level}%")),
                ),
        )
        .child(
            el("div").class("w-full progress-bar-bg rounded-full h-2").child(
                el("div")
                    .class("h-2 rounded-full transition-all duration-1000 ease-out")
                    .class(&format!("bg-{}", skill.color_token))
                    .attr("style", format!("width: {width}%")),
            ),
        )
        .into()
}
