use indexmap::IndexMap;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::sync::OnceLock;
use thiserror::Error;

/// Errors produced while validating a portfolio document.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("required configuration group missing: {0}")]
    MissingRequiredField(&'static str),
}

/// Raw portfolio document as authored in `Portfolio.yaml`.
///
/// Every group except `profile` defaults to empty, so a partially authored
/// document still renders the sections it can. Validation into
/// [`PortfolioConfig`] is where a missing `profile` becomes fatal.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct PortfolioDocument {
    #[serde(default)]
    pub profile: Option<Profile>,

    #[serde(default)]
    pub principles: Vec<Principle>,

    /// Skill category name -> ordered skill list. Insertion order is the
    /// display order of the category columns.
    #[serde(default)]
    pub skills: IndexMap<String, Vec<Skill>>,

    /// Named code snippets. The page consumes the `hybrid` and `philosophy`
    /// entries; extra entries are carried but not rendered.
    #[serde(default)]
    pub snippets: IndexMap<String, CodeSnippet>,

    #[serde(default)]
    pub trackers: Vec<TrackerMetric>,

    #[serde(default)]
    pub certifications: Vec<Certification>,

    #[serde(default)]
    pub projects: Vec<Project>,

    #[serde(default)]
    pub tools: Vec<Tool>,
}

/// Validated, read-only portfolio configuration.
///
/// Constructed once at startup via `TryFrom<PortfolioDocument>` and never
/// mutated afterwards. Sections receive it by shared reference only.
#[derive(Debug, Clone, Serialize)]
pub struct PortfolioConfig {
    pub profile: Profile,
    pub principles: Vec<Principle>,
    pub skills: IndexMap<String, Vec<Skill>>,
    pub snippets: IndexMap<String, CodeSnippet>,
    pub trackers: Vec<TrackerMetric>,
    pub certifications: Vec<Certification>,
    pub projects: Vec<Project>,
    pub tools: Vec<Tool>,
}

impl TryFrom<PortfolioDocument> for PortfolioConfig {
    type Error = ConfigError;

    fn try_from(doc: PortfolioDocument) -> Result<Self, Self::Error> {
        let profile = doc
            .profile
            .ok_or(ConfigError::MissingRequiredField("profile"))?;

        Ok(Self {
            profile,
            principles: doc.principles,
            skills: doc.skills,
            snippets: doc.snippets,
            trackers: doc.trackers,
            certifications: doc.certifications,
            projects: doc.projects,
            tools: doc.tools,
        })
    }
}

/// Author identity and outbound links.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Profile {
    #[serde(default)]
    pub name: String,

    #[serde(default)]
    pub role: String,

    #[serde(default)]
    pub tagline: String,

    #[serde(default)]
    pub about: String,

    #[serde(default)]
    pub email: String,

    #[serde(default)]
    pub linkedin_url: String,

    #[serde(default)]
    pub github_url: String,

    #[serde(default)]
    pub resume_url: String,
}

fn email_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("invalid email pattern"))
}

impl Profile {
    /// Basic email-shape check. A failing address is not fatal: the contact
    /// section falls back to rendering the address as literal text.
    pub fn has_valid_email(&self) -> bool {
        email_pattern().is_match(&self.email)
    }
}

/// One core-principle card (ordered).
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Principle {
    pub title: String,

    #[serde(default)]
    pub icon_key: String,

    #[serde(default)]
    pub description: String,
}

/// A single skill with a proficiency level and accent color token.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Skill {
    pub name: String,

    /// Authored proficiency. May be out of range in the source document;
    /// rendering always goes through [`Skill::clamped_level`].
    #[serde(default)]
    pub level: i64,

    #[serde(default)]
    pub color_token: String,
}

impl Skill {
    /// Proficiency clamped to `[0, 100]` for display.
    pub fn clamped_level(&self) -> u8 {
        self.level.clamp(0, 100) as u8
    }
}

/// A fixed block of example source text, rendered line-by-line and never
/// executed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct CodeSnippet {
    pub title: String,

    #[serde(default)]
    pub language: String,

    #[serde(default)]
    pub source_text: String,
}

/// A displayed QA/business metric. `value` is a display string and may carry
/// units or qualifiers ("85%", "<1%", "30 Min").
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackerMetric {
    pub metric: String,

    #[serde(default)]
    pub value: String,

    #[serde(default)]
    pub description: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Certification {
    pub title: String,

    #[serde(default)]
    pub issuer: String,

    #[serde(default)]
    pub year: i32,

    #[serde(default)]
    pub link: String,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Project {
    pub title: String,

    #[serde(default)]
    pub stack: Vec<String>,

    #[serde(default)]
    pub description: String,

    #[serde(default)]
    pub image_url: String,

    #[serde(default)]
    pub project_link: String,
}

/// Tool/technology catalog entry. Carried by the config for authoring
/// completeness; no section renders the catalog on the page.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Tool {
    pub name: String,

    #[serde(default)]
    pub category: String,

    #[serde(default)]
    pub icon_url: String,
}
