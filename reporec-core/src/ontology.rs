//! Static skill and domain lookup tables used for fuzzy matching.
//!
//! The ontology is read-only data shared by the profile builder and the
//! match scorer. It answers two questions: which skills are related to a
//! given skill token, and which keywords signal membership in a domain.
//! `Default` carries the built-in tables; callers can assemble their own
//! mapping when the defaults do not fit.

use std::collections::HashMap;

use crate::Domain;

/// Related skills and a relevance weight for one skill token.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillLink {
    /// Skill tokens considered adjacent to the parent skill.
    pub related: Vec<String>,
    /// Relevance weight of the skill itself, nominally `1.0`.
    pub weight: f64,
}

impl SkillLink {
    fn new(related: &[&str], weight: f64) -> Self {
        Self {
            related: related.iter().map(|&s| s.to_owned()).collect(),
            weight,
        }
    }
}

/// Skill-to-related-skills graph plus the ordered domain keyword table.
///
/// The keyword table order matters: when the profile builder scores
/// candidate domains and two tie, the domain listed first wins.
///
/// # Examples
/// ```
/// use reporec_core::SkillOntology;
///
/// let ontology = SkillOntology::default();
/// assert!(ontology.related("python").contains(&"machine-learning".to_owned()));
/// assert!(ontology.related("cobol").is_empty());
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct SkillOntology {
    skills: HashMap<String, SkillLink>,
    domain_keywords: Vec<(Domain, Vec<String>)>,
}

impl SkillOntology {
    /// Construct an empty ontology.
    #[must_use]
    pub fn empty() -> Self {
        Self {
            skills: HashMap::new(),
            domain_keywords: Vec::new(),
        }
    }

    /// Insert or replace the link entry for a skill token.
    pub fn insert_skill(&mut self, token: impl Into<String>, link: SkillLink) {
        self.skills.insert(token.into(), link);
    }

    /// Insert a skill link while consuming `self`, enabling chaining.
    #[must_use]
    pub fn with_skill(mut self, token: impl Into<String>, link: SkillLink) -> Self {
        self.insert_skill(token, link);
        self
    }

    /// Append a domain keyword entry, preserving enumeration order.
    pub fn insert_domain_keywords<I, S>(&mut self, domain: Domain, keywords: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.domain_keywords
            .push((domain, keywords.into_iter().map(Into::into).collect()));
    }

    /// Append a domain keyword entry while consuming `self`.
    #[must_use]
    pub fn with_domain_keywords<I, S>(mut self, domain: Domain, keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.insert_domain_keywords(domain, keywords);
        self
    }

    /// Skills related to `token`, or an empty slice when unknown.
    #[must_use]
    pub fn related(&self, token: &str) -> &[String] {
        self.skills
            .get(token)
            .map_or(&[], |link| link.related.as_slice())
    }

    /// Relevance weight for `token`, defaulting to `1.0` when unknown.
    #[must_use]
    pub fn skill_weight(&self, token: &str) -> f64 {
        self.skills.get(token).map_or(1.0, |link| link.weight)
    }

    /// The ordered domain keyword table.
    #[must_use]
    pub fn domain_keywords(&self) -> &[(Domain, Vec<String>)] {
        &self.domain_keywords
    }
}

impl Default for SkillOntology {
    fn default() -> Self {
        let mut ontology = Self::empty();

        let skills: &[(&str, &[&str], f64)] = &[
            (
                "python",
                &[
                    "machine-learning",
                    "data-analysis",
                    "backend",
                    "automation",
                    "visualization",
                    "scraping",
                ],
                1.0,
            ),
            (
                "javascript",
                &["frontend", "visualization", "web", "node", "react", "vue"],
                1.0,
            ),
            (
                "java",
                &["backend", "big-data", "enterprise", "spring", "microservices"],
                1.0,
            ),
            ("go", &["cloud-native", "devops", "operations", "microservices"], 1.0),
            ("rust", &["systems", "performance", "blockchain", "embedded"], 1.0),
            ("sql", &["database", "data-analysis", "data-warehouse", "bi"], 1.0),
            (
                "typescript",
                &["javascript", "frontend", "type-safety", "react", "vue"],
                1.1,
            ),
            ("html", &["frontend", "css", "ui", "web"], 1.0),
            ("css", &["frontend", "html", "ui", "styling"], 1.0),
            (
                "machine-learning",
                &[
                    "deep-learning",
                    "ai",
                    "data-mining",
                    "python",
                    "tensorflow",
                    "pytorch",
                ],
                1.2,
            ),
            (
                "visualization",
                &["echarts", "matplotlib", "seaborn", "frontend", "data-analysis"],
                1.1,
            ),
            (
                "frontend",
                &["javascript", "react", "vue", "css", "html", "web"],
                1.2,
            ),
            (
                "backend",
                &["api", "database", "microservices", "server", "middleware"],
                1.1,
            ),
            (
                "devops",
                &["docker", "kubernetes", "ci-cd", "operations", "automation"],
                1.1,
            ),
        ];
        for &(token, related, weight) in skills {
            ontology.insert_skill(token, SkillLink::new(related, weight));
        }

        // Table order fixes the core-domain tie-break.
        ontology.insert_domain_keywords(
            Domain::Ai,
            ["ai", "ml", "machine", "learning", "deep", "pytorch", "tensorflow"],
        );
        ontology.insert_domain_keywords(
            Domain::Data,
            ["data", "analysis", "pandas", "numpy", "sql", "database"],
        );
        ontology.insert_domain_keywords(
            Domain::Frontend,
            ["frontend", "react", "vue", "js", "javascript", "html", "css"],
        );
        ontology.insert_domain_keywords(
            Domain::Backend,
            ["backend", "api", "server", "java", "go", "spring"],
        );
        ontology.insert_domain_keywords(
            Domain::DevOps,
            ["devops", "docker", "kubernetes", "ci", "cd", "ops"],
        );

        ontology
    }
}
