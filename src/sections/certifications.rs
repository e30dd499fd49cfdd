use crate::models::Certification;
use crate::sections::{SectionHeader, icon};
use crate::view::{Node, el};

/// Certification list: each entry is an outbound link card captioned
/// "{issuer} ({year})".
pub fn render(certifications: &[Certification]) -> Node {
    let header = SectionHeader::new(
        "Formal Validation",
        "Professional",
        "Certifications",
        "Commitment to continuous learning and validated industry expertise.",
    );

    let cards = el("div")
        .class("grid md:grid-cols-2 gap-6")
        .children(certifications.iter().map(|cert| {
            el("a")
                .class("glass-card p-6 rounded-xl flex items-start gap-4 hover:bg-slate-700/50 transition-all duration-200 group")
                .attr("href", &cert.link)
                .attr("target", "_blank")
                .attr("rel", "noopener noreferrer")
                .child(icon("ph-seal-check", "text-3xl text-blue-400 mt-1 flex-shrink-0"))
                .child(
                    el("div")
                        .child(
                            el("h3")
                                .class("text-lg font-semibold text-white group-hover:text-cyan-400 transition-colors")
                                .text(&cert.title),
                        )
                        .child(
                            el("p")
                                .class("text-sm text-slate-400")
                                .text(format!("{} ({})", cert.issuer, cert.year)),
                        ),
                )
                .into()
        }));

    el("section")
        .attr("id", "certifications")
        .class("py-24")
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6")
                .child(header.render())
                .child(cards),
        )
        .into()
}
