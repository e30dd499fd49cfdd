use crate::models::TrackerMetric;
use crate::sections::SectionHeader;
use crate::view::{Node, el};

/// Impact-metric card grid. `value` is rendered verbatim; it is a display
/// string and may carry units or qualifiers ("85%", "<1%", "30 Min").
pub fn render(trackers: &[TrackerMetric]) -> Node {
    let header = SectionHeader::new(
        "Measurable Results",
        "QA Metrics &",
        "Impact",
        "Quantifying success is crucial. These are the core metrics I focus on to ensure business value.",
    );

    let cards = el("div")
        .class("grid grid-cols-2 md:grid-cols-4 gap-6")
        .children(trackers.iter().map(|tracker| {
            el("div")
                .class("glass-card p-6 rounded-xl text-center border-b-4 border-cyan-400/50")
                .child(
                    el("p")
                        .class("text-3xl sm:text-5xl font-extrabold gradient-text mb-2")
                        .text(&tracker.value),
                )
                .child(
                    el("h3")
                        .class("text-sm font-mono text-slate-300 uppercase tracking-wider mb-2")
                        .text(&tracker.metric),
                )
                .child(
                    el("p")
                        .class("text-xs text-slate-500")
                        .text(&tracker.description),
                )
                .into()
        }));

    el("section")
        .attr("id", "impact")
        .class("py-24 bg-slate-900/40")
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
    fn test_value_rendered_verbatim_and_escaped() {
        let trackers = vec![TrackerMetric {
            metric: "Production Bug Leakage".to_string(),
            value: "<1%".to_string(),
            description: "Bugs escaping to production".to_string(),
        }];

        let html = render(&trackers).to_html();
        assert!(html.contains("&lt;1%"));
        assert!(html.contains("Production Bug Leakage"));
    }

    #[test]
    fn test_empty_trackers_render_header_only() {
        let html = render(&[]).to_html();
        assert!(html.contains("QA Metrics"));
        assert!(!html.contains("border-b-4"));
    }
}
