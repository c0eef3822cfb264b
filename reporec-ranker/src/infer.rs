//! Heuristic attribute inference for candidates that arrive with only an
//! identity.
//!
//! Both classifiers are pure functions over fixed, ordered rule tables:
//! the first matching rule wins, and new vendors or domains are added by
//! extending the tables rather than touching scoring logic.

use reporec_core::Domain;

/// Attributes inferred from an identity when upstream data is missing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct InferredAttributes {
    /// Inferred primary language, `"unknown"` or `"multiple"` when the
    /// tables cannot decide.
    pub language: String,
    /// Inferred domain.
    pub domain: Domain,
    /// Inferred lowercase tags.
    pub tags: Vec<String>,
}

struct LanguageRule {
    needles: &'static [&'static str],
    language: &'static str,
}

struct DomainRule {
    needles: &'static [&'static str],
    domain: Domain,
    tags: &'static [&'static str],
}

/// Ordered language rules; earlier entries win.
const LANGUAGE_RULES: &[LanguageRule] = &[
    LanguageRule {
        needles: &["python", "pytorch", "tensorflow"],
        language: "Python",
    },
    LanguageRule {
        needles: &["js", "javascript", "react", "vue", "angular"],
        language: "JavaScript",
    },
    LanguageRule {
        needles: &["java", "spring"],
        language: "Java",
    },
    LanguageRule {
        needles: &["golang", "go"],
        language: "Go",
    },
    LanguageRule {
        needles: &["rust"],
        language: "Rust",
    },
    LanguageRule {
        needles: &["cpp", "c++"],
        language: "C++",
    },
    LanguageRule {
        needles: &["csharp", "c#"],
        language: "C#",
    },
    LanguageRule {
        needles: &["swift"],
        language: "Swift",
    },
    LanguageRule {
        needles: &["kotlin"],
        language: "Kotlin",
    },
    LanguageRule {
        needles: &["php"],
        language: "PHP",
    },
    LanguageRule {
        needles: &["ruby"],
        language: "Ruby",
    },
];

/// Ordered domain rules; earlier entries win.
const DOMAIN_RULES: &[DomainRule] = &[
    DomainRule {
        needles: &["ai", "ml", "machine-learning", "tensorflow", "pytorch", "neural", "deep"],
        domain: Domain::Ai,
        tags: &["machine-learning", "ai", "deep-learning"],
    },
    DomainRule {
        needles: &["data", "analytics", "analysis", "pandas", "numpy", "sql", "database"],
        domain: Domain::Data,
        tags: &["data-processing", "data-analysis", "visualization"],
    },
    DomainRule {
        needles: &["frontend", "react", "vue", "angular", "ui", "web", "css", "html"],
        domain: Domain::Frontend,
        tags: &["ui", "frontend", "web"],
    },
    DomainRule {
        needles: &["backend", "api", "server", "spring", "express", "flask", "django"],
        domain: Domain::Backend,
        tags: &["backend", "api", "microservices"],
    },
    DomainRule {
        needles: &["devops", "docker", "kubernetes", "cloud", "infrastructure", "terraform"],
        domain: Domain::DevOps,
        tags: &["cloud-native", "containers", "automation"],
    },
    DomainRule {
        needles: &["mobile", "app", "flutter", "react-native", "android", "ios"],
        domain: Domain::Mobile,
        tags: &["mobile", "cross-platform", "app"],
    },
    DomainRule {
        needles: &["game", "unity", "unreal", "engine"],
        domain: Domain::Gaming,
        tags: &["gamedev", "engine"],
    },
    DomainRule {
        needles: &["blockchain", "crypto", "web3", "nft"],
        domain: Domain::Blockchain,
        tags: &["blockchain", "web3", "crypto"],
    },
    DomainRule {
        needles: &["iot", "embedded", "arduino", "raspberry"],
        domain: Domain::Embedded,
        tags: &["iot", "hardware", "embedded"],
    },
];

/// Known organisations mapped to their dominant stack.
const ORG_RULES: &[(&str, &str, Domain, &[&str])] = &[
    ("facebook", "JavaScript", Domain::Frontend, &["ui", "frontend", "social"]),
    ("google", "multiple", Domain::Ai, &["machine-learning", "search", "cloud"]),
    ("microsoft", "multiple", Domain::Backend, &["os", "productivity", "cloud"]),
    ("apple", "Swift", Domain::Mobile, &["ios", "macos", "hardware"]),
    ("apache", "Java", Domain::BigData, &["open-source", "big-data", "web-server"]),
    ("alibaba", "Java", Domain::Backend, &["ecommerce", "cloud", "microservices"]),
    ("adguardteam", "multiple", Domain::Tooling, &["ad-blocking", "privacy", "security"]),
    ("airbytehq", "Java", Domain::Data, &["data-integration", "etl", "pipelines"]),
    ("ansible", "Python", Domain::DevOps, &["automation", "configuration", "operations"]),
    ("angular", "TypeScript", Domain::Frontend, &["framework", "spa", "web"]),
    ("ant-design", "TypeScript", Domain::Frontend, &["ui-components", "design-system", "react"]),
    ("appsmithorg", "JavaScript", Domain::Frontend, &["low-code", "apps", "dashboards"]),
    ("ankidroid", "Java", Domain::Mobile, &["flashcards", "learning", "android"]),
    ("redis", "C", Domain::Backend, &["database", "cache", "in-memory"]),
    ("elastic", "Java", Domain::Backend, &["search", "logging", "analytics"]),
    ("docker", "Go", Domain::DevOps, &["containers", "virtualization", "cloud-native"]),
    ("kubernetes", "Go", Domain::DevOps, &["orchestration", "cloud-native", "microservices"]),
];

/// Infer language, domain, and tags from a repository identity.
///
/// Matching is case-insensitive substring search against the ordered rule
/// tables; identities matching nothing fall back to an `"unknown"`
/// language and the [`Domain::General`] domain with no tags.
///
/// # Examples
/// ```
/// use reporec_core::Domain;
/// use reporec_ranker::infer_attributes;
///
/// let attrs = infer_attributes("huggingface/tensorflow-examples");
/// assert_eq!(attrs.language, "Python");
/// assert_eq!(attrs.domain, Domain::Ai);
/// ```
#[must_use]
pub fn infer_attributes(identity: &str) -> InferredAttributes {
    let lowered = identity.to_lowercase();

    let language = LANGUAGE_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| lowered.contains(needle)))
        .map_or("unknown", |rule| rule.language);

    let (domain, tags) = DOMAIN_RULES
        .iter()
        .find(|rule| rule.needles.iter().any(|needle| lowered.contains(needle)))
        .map_or((Domain::General, [].as_slice()), |rule| {
            (rule.domain, rule.tags)
        });

    InferredAttributes {
        language: language.to_owned(),
        domain,
        tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
    }
}

/// Infer the dominant stack of an organisation-level aggregate.
///
/// Unknown organisations receive a generic fallback rather than an error.
#[must_use]
pub fn infer_org_attributes(org: &str) -> InferredAttributes {
    let lowered = org.to_lowercase();
    ORG_RULES
        .iter()
        .find(|(name, _, _, _)| *name == lowered)
        .map_or_else(
            || InferredAttributes {
                language: "multiple".to_owned(),
                domain: Domain::General,
                tags: vec!["open-source".to_owned(), "software".to_owned()],
            },
            |&(_, language, domain, tags)| InferredAttributes {
                language: language.to_owned(),
                domain,
                tags: tags.iter().map(|&tag| tag.to_owned()).collect(),
            },
        )
}
