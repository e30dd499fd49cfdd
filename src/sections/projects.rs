use crate::models::{Project, ViewState};
use crate::sections::{PLACEHOLDER_IMAGE_URL, SectionHeader, icon};
use crate::view::{Node, el};

/// Project card grid with the image-fallback policy applied: entries whose
/// index is recorded as failed in `view` render the fixed placeholder image
/// instead of their configured URL.
pub fn render(projects: &[Project], view: &ViewState) -> Node {
    let header = SectionHeader::new(
        "Hands-On Experience",
        "Key",
        "Projects & Frameworks",
        "Showcasing depth in building efficient, scalable, and resilient test automation solutions.",
    );

    let cards = el("div")
        .class("grid lg:grid-cols-4 gap-8")
        .children(
            projects
                .iter()
                .enumerate()
                .map(|(index, project)| card(index, project, view)),
        );

    el("section")
        .attr("id", "projects")
        .class("py-24 bg-slate-900/40")
        .child(
            el("div")
                .class("max-w-7xl mx-auto px-6")
                .child(header.render())
                .child(cards),
        )
        .into()
}

fn card(index: usize, project: &Project, view: &ViewState) -> Node {
    let image_src = if view.image_failed(index) {
        PLACEHOLDER_IMAGE_URL
    } else {
        project.image_url.as_str()
    };

    let stack = el("div").class("flex flex-wrap gap-2").children(
        project.stack.iter().map(|tech| {
            el("span")
                .class("text-xs font-mono px-3 py-1 bg-slate-700/50 text-slate-300 rounded-full")
                .text(tech)
                .into()
        }),
    );

    let view_link = el("a")
        .class("text-sm font-semibold flex items-center gap-1 px-3 py-1 rounded-full text-slate-900 cta-button hover:opacity-90 transition-opacity")
        .attr("href", &project.project_link)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(icon("ph-link-simple", "text-base"))
        .text(" View");

    el("div")
        .class("glass-card rounded-xl overflow-hidden flex flex-col")
        .child(
            el("img")
                .class("w-full h-48 object-cover object-center")
                .attr("src", image_src)
                .attr("alt", &project.title)
                .attr("data-project-index", index.to_string()),
        )
        .child(
            el("div")
                .class("p-6 flex flex-col flex-grow")
                .child(
                    el("h3")
                        .class("text-xl font-bold mb-3 text-cyan-400")
                        .text(&project.title),
                )
                .child(
                    el("p")
                        .class("text-slate-400 text-sm mb-4 flex-grow")
                        .text(&project.description),
                )
                .child(
                    el("div")
                        .class("flex justify-between items-center pt-4 border-t border-slate-700/50")
                        .child(stack)
                        .child(view_link),
                ),
        )
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn projects() -> Vec<Project> {
        vec![
            Project {
                title: "Cypress Regression Suite".to_string(),
                stack: vec!["Cypress".to_string(), "JavaScript".to_string()],
                description: "End-to-end regression coverage.".to_string(),
                image_url: "https://images.example.com/cypress.jpg".to_string(),
                project_link: "https://github.com/example/cypress-suite".to_string(),
            },
            Project {
                title: "API Contract Tests".to_string(),
                stack: vec!["Postman".to_string()],
                description: "Contract checks for service APIs.".to_string(),
                image_url: "https://images.example.com/api.jpg".to_string(),
                project_link: "https://github.com/example/api-tests".to_string(),
            },
        ]
    }

    #[test]
    fn test_configured_image_used_by_default() {
        let html = render(&projects(), &ViewState::default()).to_html();
        assert!(html.contains("https://images.example.com/cypress.jpg"));
        assert!(!html.contains("placehold.co"));
    }

    #[test]
    fn test_failed_image_swapped_for_placeholder() {
        let mut view = ViewState::default();
        view.failed_images.insert(0);

        let html = render(&projects(), &view).to_html();
        assert!(html.contains(PLACEHOLDER_IMAGE_URL));
        assert!(!html.contains("https://images.example.com/cypress.jpg"));
        // Only the failed entry falls back.
        assert!(html.contains("https://images.example.com/api.jpg"));
    }

    #[test]
    fn test_stack_tags_rendered() {
        let html = render(&projects(), &ViewState::default()).to_html();
        assert!(html.contains("Cypress"));
        assert!(html.contains("JavaScript"));
        assert!(html.contains("Postman"));
    }
}
