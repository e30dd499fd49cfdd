use crate::models::Profile;
use crate::sections::icon;
use crate::view::{Element, Node, el};

/// Contact section. The email renders as a `mailto:` link only when the
/// address passes the shape check; otherwise the address appears as literal
/// text so a typo in the document degrades visibly instead of producing a
/// dead link.
pub fn render(profile: &Profile) -> Node {
    let email: Node = if profile.has_valid_email() {
        el("a")
            .class("text-slate-300 hover:text-cyan-400 transition-colors flex items-center gap-2")
            .attr("href", format!("mailto:{}", profile.email))
            .child(icon("ph-envelope-simple", "text-3xl"))
            .child(
                el("span")
                    .class("hidden sm:inline")
                    .text(&profile.email),
            )
            .into()
    } else {
        el("span")
            .class("text-slate-300 flex items-center gap-2")
            .child(icon("ph-envelope-simple", "text-3xl"))
            .child(
                el("span")
                    .class("hidden sm:inline")
                    .text(&profile.email),
            )
            .into()
    };

    el("section")
        .attr("id", "contact")
        .class("py-24")
        .child(
            el("div")
                .class("max-w-4xl mx-auto px-6 text-center")
                .child(
                    el("h2")
                        .class("text-4xl font-extrabold mb-4")
                        .text("Let's ")
                        .child(el("span").class("gradient-text").text("Connect")),
                )
                .child(el("p").class("text-slate-400 text-lg max-w-xl mx-auto mb-12").text(
                    "I am currently open to new Senior Hybrid QA Engineer roles. Feel free to reach out for collaboration or opportunities.",
                ))
                .child(
                    el("div")
                        .class("flex justify-center items-center gap-6 text-xl")
                        .child(email)
                        .child(social_link(&profile.linkedin_url, "ph-linkedin-logo"))
                        .child(social_link(&profile.github_url, "ph-github-logo")),
                ),
        )
        .into()
}

fn social_link(url: &str, icon_key: &str) -> Element {
    el("a")
        .class("text-slate-300 hover:text-cyan-400 transition-colors")
        .attr("href", url)
        .attr("target", "_blank")
        .attr("rel", "noopener noreferrer")
        .child(el("i").class("ph-fill text-3xl").class(icon_key))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_valid_email_renders_mailto_link() {
        let profile = Profile {
            email: "someone@example.com".to_string(),
            ..Default::default()
        };

        let html = render(&profile).to_html();
        assert!(html.contains("href=\"mailto:someone@example.com\""));
    }

    #[test]
    fn test_invalid_email_renders_literal_text() {
        let profile = Profile {
            email: "not-an-email".to_string(),
            ..Default::default()
        };

        let html = render(&profile).to_html();
        assert!(!html.contains("mailto:"));
        assert!(html.contains("not-an-email"));
    }

    #[test]
    fn test_social_links_target_blank() {
        let profile = Profile {
            linkedin_url: "https://linkedin.com/in/someone".to_string(),
            github_url: "https://github.com/someone".to_string(),
            ..Default::default()
        };

        let html = render(&profile).to_html();
        assert!(html.contains("href=\"https://linkedin.com/in/someone\""));
        assert!(html.contains("href=\"https://github.com/someone\""));
        assert!(html.contains("ph-linkedin-logo"));
        assert!(html.contains("ph-github-logo"));
    }
}
