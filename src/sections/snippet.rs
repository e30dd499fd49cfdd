use crate::models::{CodeSnippet, PortfolioConfig};
use crate::sections::SectionHeader;
use crate::view::{Node, el};

/// Style assigned to a displayed snippet line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum StyleToken {
    Plain,
    Comment,
    Keyword,
    Emphasis,
}

impl StyleToken {
    /// CSS classes for the line's `<span>`.
    pub fn css_class(&self) -> &'static str {
        match self {
            StyleToken::Plain => "text-slate-300",
            StyleToken::Comment => "text-green-400 italic",
            StyleToken::Keyword => "text-cyan-400 font-semibold",
            StyleToken::Emphasis => "text-yellow-300",
        }
    }
}

/// Predicate over the raw (untrimmed-for-display) line text.
#[derive(Debug, Clone)]
pub enum LinePredicate {
    /// The trimmed line starts with any of the given prefixes.
    TrimStartsWithAny(Vec<String>),

    /// The raw line contains any of the given substrings.
    ContainsAny(Vec<String>),
}

impl LinePredicate {
    fn matches(&self, line: &str) -> bool {
        match self {
            LinePredicate::TrimStartsWithAny(prefixes) => {
                let trimmed = line.trim();
                prefixes.iter().any(|p| trimmed.starts_with(p.as_str()))
            }
            LinePredicate::ContainsAny(needles) => {
                needles.iter().any(|n| line.contains(n.as_str()))
            }
        }
    }
}

/// One classification rule: `predicate` selects the line, `style` paints it.
#[derive(Debug, Clone)]
pub struct ClassifyRule {
    pub predicate: LinePredicate,
    pub style: StyleToken,
}

/// One display line of a rendered snippet.
#[derive(Debug, Clone, PartialEq)]
pub struct StyledLine {
    /// 1-based line number, left-padded to at least two digits.
    pub number: String,

    /// Line text with every whitespace character replaced by a non-breaking
    /// space, so the authored alignment survives HTML rendering exactly.
    pub content: String,

    pub style: StyleToken,
}

/// Line-based snippet formatter.
///
/// Applies an ordered rule list to each line of the source text:
/// first-match-wins, top to bottom, falling back to [`StyleToken::Plain`].
/// This is deliberately not most-specific-match; the rule order is part of
/// the observable output. The source text is display data only and is never
/// executed.
#[derive(Debug, Clone)]
pub struct SnippetViewer {
    rules: Vec<ClassifyRule>,
}

fn contains(needles: &[&str]) -> LinePredicate {
    LinePredicate::ContainsAny(needles.iter().map(|n| n.to_string()).collect())
}

fn trim_starts_with(prefixes: &[&str]) -> LinePredicate {
    LinePredicate::TrimStartsWithAny(prefixes.iter().map(|p| p.to_string()).collect())
}

impl SnippetViewer {
    pub fn new(rules: Vec<ClassifyRule>) -> Self {
        Self { rules }
    }

    /// Rules for the hybrid-workflow snippet: comments, branch keywords,
    /// the two named workflow calls.
    pub fn hybrid() -> Self {
        Self::new(vec![
            ClassifyRule {
                predicate: trim_starts_with(&["//"]),
                style: StyleToken::Comment,
            },
            ClassifyRule {
                predicate: contains(&["if (", "else {"]),
                style: StyleToken::Keyword,
            },
            ClassifyRule {
                predicate: contains(&["executeExploratoryTest", "runCypressSuite"]),
                style: StyleToken::Emphasis,
            },
        ])
    }

    /// Rules for the code-philosophy snippet: block and line comments,
    /// declaration/branch keywords, logging and example lines.
    pub fn philosophy() -> Self {
        Self::new(vec![
            ClassifyRule {
                predicate: trim_starts_with(&["//", "/*", "*"]),
                style: StyleToken::Comment,
            },
            ClassifyRule {
                predicate: contains(&["const", "if (", "return"]),
                style: StyleToken::Keyword,
            },
            ClassifyRule {
                predicate: contains(&["console.log", "Example:"]),
                style: StyleToken::Emphasis,
            },
        ])
    }

    /// Classify one raw line: first matching rule wins, plain otherwise.
    pub fn classify(&self, line: &str) -> StyleToken {
        self.rules
            .iter()
            .find(|rule| rule.predicate.matches(line))
            .map(|rule| rule.style)
            .unwrap_or(StyleToken::Plain)
    }

    /// Transform source text into display lines.
    ///
    /// The source is trimmed, then split on newlines: a source of N lines
    /// yields exactly N display lines, numbered `01..N` with a two-digit
    /// minimum (line 100 renders as `100`).
    pub fn styled_lines(&self, source_text: &str) -> Vec<StyledLine> {
        source_text
            .trim()
            .split('\n')
            .enumerate()
            .map(|(index, line)| StyledLine {
                number: format!("{:02}", index + 1),
                content: line
                    .chars()
                    .map(|c| if c.is_whitespace() { '\u{a0}' } else { c })
                    .collect(),
                style: self.classify(line),
            })
            .collect()
    }

    /// Render the snippet as a titled code window.
    pub fn render(&self, snippet: &CodeSnippet) -> Node {
        let lines = self.styled_lines(&snippet.source_text);

        let code = el("code").class("text-slate-300").children(lines.iter().map(|line| {
            el("div")
                .class("flex hover:bg-slate-800/50 transition-colors duration-100")
                .child(
                    el("span")
                        .class("text-slate-600 w-8 text-right pr-3 flex-shrink-0 select-none")
                        .text(&line.number),
                )
                .child(el("span").class(line.style.css_class()).text(&line.content))
                .into()
        }));

        el("div")
            .class("code-window p-6 pt-4 relative border border-slate-700/50")
            .child(
                el("div")
                    .class("flex items-center justify-between mb-4")
                    .child(
                        el("div")
                            .class("window-controls")
                            .child(el("div").class("control-dot bg-red-500"))
                            .child(el("div").class("control-dot bg-yellow-500"))
                            .child(el("div").class("control-dot bg-green-500")),
                    )
                    .child(
                        el("span")
                            .class("font-mono text-sm text-slate-500")
                            .text(&snippet.title),
                    )
                    .child(el("div")),
            )
            .child(
                el("pre")
                    .class("text-xs sm:text-sm font-mono leading-relaxed overflow-x-auto")
                    .child(code),
            )
            .into()
    }
}

/// The hybrid-workflow summary section: a code window for the `hybrid`
/// snippet plus the zero-bug-leakage badge.
pub fn hybrid_summary(config: &PortfolioConfig) -> Node {
    let header = el("div")
        .class("text-center mb-10")
        .child(
            el("h2")
                .class("text-3xl font-bold mb-2")
                .text("My ")
                .child(el("span").class("gradient-text").text("Hybrid Workflow"))
                .text(" in Action"),
        )
        .child(el("p").class("text-slate-400 max-w-xl mx-auto").text(
            "The core logic: Rigorous manual testing for new features, automated speed for regression.",
        ));

    let mut body = el("div").class("max-w-4xl mx-auto px-6 relative").child(header);

    if let Some(snippet) = config.snippets.get("hybrid") {
        let badge = el("div")
            .class("absolute right-4 bottom-4 transition-all duration-500 hover:scale-105")
            .child(
                el("div")
                    .class("glass-card hybrid-box p-4 flex items-center gap-4 text-white min-w-40")
                    .child(crate::sections::icon("ph-target", "text-4xl text-white"))
                    .child(
                        el("div")
                            .child(el("p").class("text-2xl font-extrabold leading-none").text("Zero"))
                            .child(
                                el("p")
                                    .class("text-xs font-mono tracking-widest uppercase mt-1")
                                    .text("Bug Leakage"),
                            ),
                    ),
            );

        body = body.child(SnippetViewer::hybrid().render(snippet)).child(badge);
    }

    el("section")
        .class("pb-24 pt-12 bg-slate-900/40")
        .child(body)
        .into()
}

/// The code-philosophy section: a code window for the `philosophy` snippet.
pub fn code_philosophy(config: &PortfolioConfig) -> Node {
    let header = SectionHeader::new(
        "Engineering Mindset",
        "Automation",
        "Code Philosophy",
        "Strategic test execution based on risk and feature type.",
    );

    let mut body = el("div").class("max-w-7xl mx-auto px-6").child(header.render());

    if let Some(snippet) = config.snippets.get("philosophy") {
        body = body.child(
            el("div")
                .class("max-w-4xl mx-auto")
                .child(SnippetViewer::philosophy().render(snippet)),
        );
    }

    el("section")
        .attr("id", "code-philosophy")
        .class("py-24")
        .child(body)
        .into()
}
