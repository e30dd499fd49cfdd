use crate::models::{PortfolioConfig, PortfolioDocument};
use anyhow::{Context, Result};
use camino::{Utf8Path, Utf8PathBuf};
use std::fs;

/// Configuration store for the portfolio document.
///
/// Manages a single YAML file (`Portfolio.yaml`) inside the data directory.
/// The document is loaded exactly once at startup and validated into a
/// read-only [`PortfolioConfig`]; there is no mutation API afterwards.
#[derive(Debug, Clone)]
pub struct ConfigStore {
    config_dir: Utf8PathBuf,
    document_path: Utf8PathBuf,
}

impl ConfigStore {
    /// Create a new ConfigStore with the specified data directory.
    ///
    /// # Arguments
    /// * `config_dir` - Directory containing the portfolio document
    ///   (e.g., "Folio Data")
    pub fn new<P: AsRef<Utf8Path>>(config_dir: P) -> Result<Self> {
        let config_dir = config_dir.as_ref().to_path_buf();

        if !config_dir.exists() {
            fs::create_dir_all(&config_dir)
                .with_context(|| format!("Failed to create config directory: {}", config_dir))?;
        }

        Ok(Self {
            document_path: config_dir.join("Portfolio.yaml"),
            config_dir,
        })
    }

    /// Load and validate the portfolio document.
    ///
    /// If the file does not exist, the canonical starter document is written
    /// to disk and used, so a fresh checkout renders a complete page the
    /// author can then edit.
    ///
    /// # Returns
    /// The validated [`PortfolioConfig`], or an error if the file is
    /// unreadable, not valid YAML, or missing the required `profile` group.
    pub fn load(&self) -> Result<PortfolioConfig> {
        let document = if self.document_path.exists() {
            let file_contents = fs::read_to_string(&self.document_path)
                .with_context(|| format!("Failed to read portfolio document: {}", self.document_path))?;

            let document: PortfolioDocument = serde_yaml_ng::from_str(&file_contents)
                .with_context(|| format!("Failed to parse portfolio document: {}", self.document_path))?;

            tracing::info!("Loaded portfolio document from {}", self.document_path);
            document
        } else {
            tracing::warn!(
                "Portfolio document not found at {}, writing starter document",
                self.document_path
            );
            let document = Self::default_document();
            self.save(&document)?;
            document
        };

        let config = PortfolioConfig::try_from(document)
            .context("Portfolio document failed validation")?;

        tracing::info!(
            "Portfolio config validated: {} principles, {} skill categories, {} projects",
            config.principles.len(),
            config.skills.len(),
            config.projects.len()
        );

        Ok(config)
    }

    /// Save a portfolio document back to disk.
    pub fn save(&self, document: &PortfolioDocument) -> Result<()> {
        let yaml_string = serde_yaml_ng::to_string(document)
            .context("Failed to serialize portfolio document to YAML")?;

        fs::write(&self.document_path, yaml_string)
            .with_context(|| format!("Failed to write portfolio document: {}", self.document_path))?;

        tracing::info!("Saved portfolio document to {}", self.document_path);
        Ok(())
    }

    /// Get the data directory path.
    pub fn config_dir(&self) -> &Utf8Path {
        &self.config_dir
    }

    /// Get the portfolio document path.
    pub fn document_path(&self) -> &Utf8Path {
        &self.document_path
    }

    /// The canonical starter document.
    ///
    /// This is the full authored portfolio content; it doubles as the schema
    /// reference for anyone editing `Portfolio.yaml` by hand.
    pub fn default_document() -> PortfolioDocument {
        use crate::models::{
            Certification, CodeSnippet, Principle, Profile, Project, Skill, Tool, TrackerMetric,
        };
        use indexmap::IndexMap;

        let profile = Profile {
            name: "Md. Hafijur Rahman".to_string(),
            role: "Senior Hybrid QA Engineer".to_string(),
            tagline: "Bridging Manual Precision, Automation Speed & AI Intelligence.".to_string(),
            about: "I am a forward-thinking Software Test Engineer leveraging AI-powered tools \
                    and automation to revolutionize the Quality Assurance lifecycle. My hybrid \
                    approach combines strategic manual exploratory testing with intelligent \
                    automation frameworks (Cypress, Playwright, Robot Framework) and cutting-edge \
                    AI tools to accelerate test creation, optimize coverage, and deliver \
                    exceptional quality with measurable business impact."
                .to_string(),
            email: "hafijurandrahman@gmail.com".to_string(),
            linkedin_url: "https://www.linkedin.com/in/md-hafijur-rahman".to_string(),
            github_url: "https://github.com/HafijurRahman".to_string(),
            resume_url: "#".to_string(),
        };

        let principles = vec![
            Principle {
                title: "Strategy-First Approach".to_string(),
                icon_key: "ph-strategy".to_string(),
                description: "Every testing effort begins with clear goals, risk assessment, and \
                              a tailored test plan (Manual/Automation mix)."
                    .to_string(),
            },
            Principle {
                title: "AI-Enhanced Automation".to_string(),
                icon_key: "ph-robot".to_string(),
                description: "Leveraging AI tools to generate, optimize, and maintain automation \
                              scripts, focusing on high-risk paths to maximize ROI and accelerate \
                              delivery."
                    .to_string(),
            },
            Principle {
                title: "Exploratory Depth".to_string(),
                icon_key: "ph-binoculars".to_string(),
                description: "Prioritizing deep, human-led exploratory testing on new features to \
                              uncover non-obvious, critical bugs."
                    .to_string(),
            },
            Principle {
                title: "AI-Driven Efficiency".to_string(),
                icon_key: "ph-chart-line".to_string(),
                description: "Using AI tools to boost productivity, accelerate test design, \
                              auto-generate documentation, and translate QA results into \
                              actionable business metrics."
                    .to_string(),
            },
        ];

        let mut skills = IndexMap::new();
        skills.insert(
            "manual".to_string(),
            vec![
                skill("Test Strategy & Planning", 95, "blue-400"),
                skill("AI-Assisted Requirement Analysis", 92, "blue-400"),
                skill("Exploratory & Usability Testing", 92, "blue-400"),
                skill("Jira / TestRail Management", 90, "blue-400"),
                skill("Agile / Scrum Methodologies", 95, "blue-400"),
                skill("SQL Database Verification (DML/DDL)", 85, "blue-400"),
            ],
        );
        skills.insert(
            "automation".to_string(),
            vec![
                skill("Cypress & Playwright (AI-Enhanced)", 90, "cyan-400"),
                skill("Selenium WebDriver (Java/Python)", 80, "cyan-400"),
                skill("API Automation (RestAssured/Postman)", 88, "cyan-400"),
                skill("Performance Testing (JMeter/K6)", 75, "cyan-400"),
                skill("CI/CD Integration (Jenkins/GitHub Actions)", 85, "cyan-400"),
                skill("Git Version Control", 98, "cyan-400"),
            ],
        );
        skills.insert(
            "ai".to_string(),
            vec![
                skill("GitHub Copilot (Code Generation)", 95, "purple-400"),
                skill("ChatGPT & Claude (Test Design)", 93, "purple-400"),
                skill("AI-Powered Test Case Generation", 90, "purple-400"),
                skill("Prompt Engineering for QA", 92, "purple-400"),
                skill("AI Documentation & Reporting", 88, "purple-400"),
                skill("AI-Assisted Code Review", 90, "purple-400"),
            ],
        );

        let mut snippets = IndexMap::new();
        snippets.insert(
            "hybrid".to_string(),
            CodeSnippet {
                title: "ai_hybrid_workflow.js".to_string(),
                language: "JavaScript".to_string(),
                source_text: r#"
if (feature.isNew) {
    // AI-Assisted Manual Exploratory
    aiGenerateTestScenarios();
    executeExploratoryTest();
} else {
    // AI-Optimized Automation
    runCypressSuite();
}
"#
                .to_string(),
            },
        );
        snippets.insert(
            "philosophy".to_string(),
            CodeSnippet {
                title: "smart_test_executor.ts".to_string(),
                language: "TypeScript".to_string(),
                source_text: r#"
/**
 * Smart Test Executor: Determines optimal test strategy (API vs E2E vs Unit)
 * based on input context and risk level to ensure speed and coverage.
 */
const executeOptimalTest = (featureName: string, riskLevel: 'High' | 'Medium' | 'Low', isNewFeature: boolean): void => {
    if (isNewFeature) {
        // High-touch: Manual validation is prioritized to catch subtle usability and design defects.
        console.log(`[MANUAL/EXPLORATORY] Running deep exploratory session for ${featureName}`);
        return;
    }

    if (riskLevel === 'High') {
        // For critical regression paths, use robust, full E2E automation (Playwright/Cypress).
        console.log(`[E2E/REGRESSION] Running full E2E path: validate ${featureName} critical flow.`);
        // Example: cy.validateCheckoutFlow();
    } else if (riskLevel === 'Medium') {
        // Fastest execution: Validate business logic via API/Contract tests (RestAssured/Jest).
        console.log(`[API/CONTRACT] Executing service contract tests for ${featureName} endpoints.`);
        // Example: RestAssured.validateStatusCode(200);
    } else {
        // Low-risk: Rely primarily on developer unit tests.
        console.log(`[UNIT/DEV] Low risk. Confirming required unit tests are passing for ${featureName}.`);
    }
};
"#
                .to_string(),
            },
        );

        let trackers = vec![
            TrackerMetric {
                metric: "Automation Coverage".to_string(),
                value: "85%".to_string(),
                description: "Critical regression tests automated.".to_string(),
            },
            TrackerMetric {
                metric: "Framework Flakiness".to_string(),
                value: "1.5%".to_string(),
                description: "Average daily unstable test rate (Goal: <2%).".to_string(),
            },
            TrackerMetric {
                metric: "MTTR (Framework)".to_string(),
                value: "30 Min".to_string(),
                description: "Mean Time To Recover a failing test/suite.".to_string(),
            },
            TrackerMetric {
                metric: "Defect Leakage".to_string(),
                value: "<1%".to_string(),
                description: "Critical defects found in production (monthly avg).".to_string(),
            },
        ];

        let certifications = vec![
            certification(
                "ISTQB Certified Tester Advanced Level - Test Automation Engineer",
                "ISTQB",
                2023,
            ),
            certification("ISTQB Certified Tester Foundation Level (CTFL)", "ISTQB", 2021),
            certification("Certified ScrumMaster (CSM)", "Scrum Alliance", 2022),
            certification("Professional Scrum Master I (PSM I)", "Scrum.org", 2022),
            certification(
                "AWS Certified Cloud Practitioner (CCP)",
                "Amazon Web Services",
                2024,
            ),
            certification(
                "Microsoft Certified: Azure Fundamentals (AZ-900)",
                "Microsoft",
                2024,
            ),
            certification(
                "Certified Kubernetes Application Developer (CKAD)",
                "CNCF",
                2023,
            ),
            certification(
                "Selenium WebDriver with Java Certification",
                "Test Automation University",
                2021,
            ),
            certification(
                "Cypress End-to-End Testing Certification",
                "Cypress.io",
                2023,
            ),
            certification("API Testing and Validation Certification", "Postman", 2022),
        ];

        let projects = vec![
            project(
                "E-commerce BDD Automation Framework (Cypress)",
                &["Cypress", "JavaScript", "Cucumber", "GitHub Actions"],
                "Developed and maintained a scalable Behavior-Driven Development (BDD) framework \
                 for an e-commerce platform, enabling non-technical stakeholders to review test \
                 scenarios. Achieved 95% feature coverage.",
                "https://images.unsplash.com/photo-1460925895917-afdab827c52f?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/ecommerce-bdd-framework",
            ),
            project(
                "High-Volume API Load Testing Suite",
                &["JMeter", "BlazeMeter", "AWS S3", "Grafana"],
                "Designed and executed comprehensive load and stress tests against critical \
                 microservices, simulating 10k concurrent users. Identified and resolved three \
                 major bottlenecks in the payment gateway.",
                "https://images.unsplash.com/photo-1526374965328-7f61d4dc18c5?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/api-load-testing-suite",
            ),
            project(
                "Database Verification Tool (Python)",
                &["Python", "Pandas", "PyMySQL", "SQLAlchemy"],
                "Scripted a Python utility to cross-validate data input via the UI (Selenium) \
                 against the backend database records across multiple environments, drastically \
                 improving data integrity testing speed.",
                "https://images.unsplash.com/photo-1640158615573-cd28feb1bf4e?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/db-verification-tool",
            ),
            project(
                "Mobile App E2E Test (Appium)",
                &["Appium", "Java", "TestNG", "Maven"],
                "Implemented a full E2E automation suite for a hybrid mobile application on both \
                 iOS and Android platforms, focusing on checkout flow and user personalization \
                 features.",
                "https://images.unsplash.com/photo-1512941937669-90a1b58e7e9c?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/mobile-appium-tests",
            ),
            project(
                "Microservices API Contract Testing",
                &["RestAssured", "Java", "Postman", "Jenkins"],
                "Built a comprehensive API contract testing framework for microservices \
                 architecture, validating request/response schemas, status codes, and business \
                 logic across 50+ endpoints.",
                "https://images.unsplash.com/photo-1558494949-ef010cbdcc31?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/api-contract-testing",
            ),
            project(
                "Playwright Cross-Browser Testing Suite",
                &["Playwright", "TypeScript", "Docker", "Azure DevOps"],
                "Developed a robust cross-browser automation framework using Playwright, \
                 executing tests in parallel across Chrome, Firefox, and Safari with 40% faster \
                 execution time.",
                "https://images.unsplash.com/photo-1517694712202-14dd9538aa97?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/playwright-cross-browser",
            ),
            project(
                "Robot Framework Keyword-Driven Testing",
                &["Robot Framework", "Python", "Selenium", "CI/CD"],
                "Created a keyword-driven automation framework using Robot Framework with custom \
                 libraries, enabling non-technical testers to write and maintain test cases \
                 efficiently.",
                "https://images.unsplash.com/photo-1485827404703-89b55fcc595e?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/robot-keyword-framework",
            ),
            project(
                "Cloud Infrastructure Testing (AWS/Azure)",
                &["Terraform", "Python", "AWS", "Azure"],
                "Implemented infrastructure validation tests for cloud deployments, verifying \
                 resource configurations, security policies, and compliance requirements across \
                 AWS and Azure environments.",
                "https://images.unsplash.com/photo-1451187580459-43490279c0fa?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/cloud-infra-testing",
            ),
            project(
                "Performance Monitoring Dashboard",
                &["K6", "Grafana", "PostgreSQL", "Docker"],
                "Built an automated performance testing pipeline with K6, integrated with Grafana \
                 dashboards for real-time metrics visualization and historical performance trend \
                 analysis.",
                "https://images.unsplash.com/photo-1504868584819-f8e8b4b6d7e3?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/k6-performance-monitoring",
            ),
            project(
                "Security Testing Automation Suite",
                &["OWASP ZAP", "Python", "Selenium", "Jenkins"],
                "Automated security vulnerability scanning integrated into CI/CD pipeline, \
                 detecting and reporting SQL injection, XSS, and authentication vulnerabilities \
                 before production deployment.",
                "https://images.unsplash.com/photo-1563986768609-322da13575f3?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/security-automation",
            ),
            project(
                "Test Data Management Framework",
                &["Python", "PostgreSQL", "MongoDB", "Docker"],
                "Designed a centralized test data management system supporting multiple \
                 databases, enabling dynamic test data generation, cleanup, and isolation across \
                 test environments.",
                "https://images.unsplash.com/photo-1555949963-aa79dcee981c?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/test-data-framework",
            ),
            project(
                "CI/CD Pipeline Optimization",
                &["Jenkins", "Docker", "Kubernetes", "GitLab CI"],
                "Optimized CI/CD pipelines reducing test execution time by 60%, implementing \
                 parallel execution, containerization, and intelligent test selection based on \
                 code changes.",
                "https://images.unsplash.com/photo-1667372393119-3d4c48d07fc9?w=600&h=400&fit=crop&q=80",
                "https://github.com/mhrahman-qa/cicd-optimization",
            ),
        ];

        let tools = vec![
            tool("Cypress", "E2E Testing"),
            tool("Playwright", "E2E Testing"),
            tool("Selenium", "E2E Testing"),
            tool("Appium", "Mobile Testing"),
            tool("Postman", "API Testing"),
            tool("RestAssured", "API Testing"),
            tool("JMeter", "Performance"),
            tool("K6", "Performance"),
            tool("Cucumber", "BDD Framework"),
            tool("Jenkins", "CI/CD"),
            tool("GitHub Actions", "CI/CD"),
            tool("Docker", "DevOps"),
            tool("Jira", "Test Management"),
            tool("Git", "Version Control"),
            tool("PostgreSQL", "Database"),
        ];

        PortfolioDocument {
            profile: Some(profile),
            principles,
            skills,
            snippets,
            trackers,
            certifications,
            projects,
            tools,
        }
    }
}

fn skill(name: &str, level: i64, color_token: &str) -> crate::models::Skill {
    crate::models::Skill {
        name: name.to_string(),
        level,
        color_token: color_token.to_string(),
    }
}

fn certification(title: &str, issuer: &str, year: i32) -> crate::models::Certification {
    crate::models::Certification {
        title: title.to_string(),
        issuer: issuer.to_string(),
        year,
        link: "#".to_string(),
    }
}

fn project(
    title: &str,
    stack: &[&str],
    description: &str,
    image_url: &str,
    project_link: &str,
) -> crate::models::Project {
    crate::models::Project {
        title: title.to_string(),
        stack: stack.iter().map(|s| s.to_string()).collect(),
        description: description.to_string(),
        image_url: image_url.to_string(),
        project_link: project_link.to_string(),
    }
}

fn tool(name: &str, category: &str) -> crate::models::Tool {
    crate::models::Tool {
        name: name.to_string(),
        category: category.to_string(),
        icon_url: String::new(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    fn create_test_store() -> (ConfigStore, TempDir) {
        let temp_dir = TempDir::new().unwrap();
        let config_path = Utf8PathBuf::try_from(temp_dir.path().to_path_buf()).unwrap();
        let store = ConfigStore::new(&config_path).unwrap();
        (store, temp_dir)
    }

    #[test]
    fn test_create_config_store() {
        let (_store, _temp_dir) = create_test_store();
    }

    #[test]
    fn test_load_writes_starter_document() {
        let (store, _temp_dir) = create_test_store();

        let config = store.load().unwrap();
        assert!(store.document_path().exists());
        assert_eq!(config.profile.name, "Md. Hafijur Rahman");
        assert_eq!(config.principles.len(), 4);
    }

    #[test]
    fn test_default_document_groups() {
        let document = ConfigStore::default_document();

        assert!(document.profile.is_some());
        assert_eq!(document.trackers.len(), 4);
        assert_eq!(document.certifications.len(), 10);
        assert_eq!(document.projects.len(), 12);
        assert!(document.snippets.contains_key("hybrid"));
        assert!(document.snippets.contains_key("philosophy"));

        // Skill categories keep their authored order.
        let categories: Vec<&String> = document.skills.keys().collect();
        assert_eq!(categories, vec!["manual", "automation", "ai"]);
    }

    #[test]
    fn test_save_and_reload_round_trip() {
        let (store, _temp_dir) = create_test_store();

        let document = ConfigStore::default_document();
        store.save(&document).unwrap();

        let reloaded = store.load().unwrap();
        let original = PortfolioConfig::try_from(document).unwrap();

        // Ordered sequences must survive the YAML round trip byte-identically.
        let reloaded_titles: Vec<&String> = reloaded.projects.iter().map(|p| &p.title).collect();
        let original_titles: Vec<&String> = original.projects.iter().map(|p| &p.title).collect();
        assert_eq!(reloaded_titles, original_titles);

        let reloaded_cats: Vec<&String> = reloaded.skills.keys().collect();
        let original_cats: Vec<&String> = original.skills.keys().collect();
        assert_eq!(reloaded_cats, original_cats);

        assert_eq!(
            reloaded.snippets.get("philosophy").unwrap().source_text,
            original.snippets.get("philosophy").unwrap().source_text
        );
    }

    #[test]
    fn test_load_rejects_document_without_profile() {
        let (store, _temp_dir) = create_test_store();

        std::fs::write(store.document_path(), "trackers: []\n").unwrap();

        let err = store.load().unwrap_err();
        assert!(err.to_string().contains("validation"));
    }
}
