use crate::models::Principle;
use crate::sections::{SectionHeader, icon};
use crate::view::{Node, el};

/// Core-principles card grid, in authored order.
pub fn render(principles: &[Principle]) -> Node {
    let header = SectionHeader::new(
        "My Foundation",
        "Driving Quality with",
        "Intent",
        "The four pillars that define every testing strategy and execution in my workflow.",
    );

    let cards = el("div")
        .class("grid md:grid-cols-2 lg:grid-cols-4 gap-8")
        .children(principles.iter().map(|principle| {
            el("div")
                .class("glass-card p-6 rounded-xl text-center")
                .child(icon(&principle.icon_key, "text-4xl gradient-text mb-4 inline-block"))
                .child(
                    el("h3")
                        .class("text-xl font-semibold mb-3 text-white")
                        .text(&principle.title),
                )
                .child(
                    el("p")
                        .class("text-slate-400 text-sm")
                        .text(&principle.description),
                )
                .into()
        }));

    el("section")
        .attr("id", "principles")
        .class("py-24")
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6")
                .child(header.render())
                .child(cards),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_principles_rendered_in_order() {
        let principles = vec![
            Principle {
                title: "Prevention over Detection".to_string(),
                icon_key: "ph-shield-check".to_string(),
                description: "Shift-left involvement.".to_string(),
            },
            Principle {
                title: "Risk-Based Prioritization".to_string(),
                icon_key: "ph-chart-line-up".to_string(),
                description: "Test where it hurts most.".to_string(),
            },
        ];

        let html = render(&principles).to_html();
        let first = html.find("Prevention over Detection").unwrap();
        let second = html.find("Risk-Based Prioritization").unwrap();
        assert!(first < second);
        assert!(html.contains("ph-shield-check"));
    }

    #[test]
    fn test_empty_list_renders_header_only() {
        let html = render(&[]).to_html();
        assert!(html.contains("Driving Quality with"));
        assert!(!html.contains("glass-card p-6 rounded-xl text-center"));
    }
}
