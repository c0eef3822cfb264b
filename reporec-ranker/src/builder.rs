//! Profile construction from raw per-user repository signals.
//!
//! With signals available, the builder derives skills from the language
//! histogram, domains from keyword counting, and the experience tier from
//! mean stars. Without signals, a deterministic fallback profile is
//! derived purely from a stable hash of the user identity, so the same
//! identity always reproduces the same profile.
//!
//! All randomness flows through a request-scoped [`ChaCha8Rng`] seeded
//! from that hash; there is no shared generator state between requests.

use std::collections::HashMap;
use std::fmt::Write as _;
use std::sync::LazyLock;

use rand::seq::SliceRandom;
use rand::{Rng, SeedableRng};
use rand_chacha::ChaCha8Rng;
use regex::Regex;
use sha2::{Digest, Sha256};

use reporec_core::{
    Domain, ExperienceLevel, ProfileWeights, SkillOntology, UserProfile, UserProfileError,
};

/// Language histogram entries kept as direct skills.
const TOP_LANGUAGES: usize = 3;
/// Related skills appended per direct skill.
const RELATED_PER_SKILL: usize = 2;
/// Ceiling on a histogram-derived skill strength.
const MAX_SKILL_STRENGTH: f64 = 0.95;
/// Strength ratio of a related skill to its parent.
const RELATED_STRENGTH_RATIO: f64 = 0.7;
/// Extra domains appended after the core domain.
const EXTRA_DOMAINS: usize = 2;

/// Fallback core domains, indexed by `hash % 5`.
const FALLBACK_CORES: [Domain; 5] = [
    Domain::Ai,
    Domain::Frontend,
    Domain::Backend,
    Domain::DevOps,
    Domain::Data,
];

/// Pool the fallback path samples its extra domains from.
const FALLBACK_EXTRAS: [Domain; 5] = [
    Domain::Ai,
    Domain::Data,
    Domain::Backend,
    Domain::Frontend,
    Domain::Tooling,
];

#[expect(
    clippy::expect_used,
    reason = "the pattern is a compile-time constant and always valid"
)]
static WORD_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"\b[a-zA-Z]{3,}\b").expect("static word pattern compiles")
});

/// One repository's worth of upstream signal about a user.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct RepoSignal {
    /// Repository name.
    pub name: String,
    /// Primary language, possibly empty.
    pub language: String,
    /// Free-text description, possibly empty.
    pub description: String,
    /// Topic tags.
    pub topics: Vec<String>,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
}

/// Builds [`UserProfile`]s from signals, consulting the shared ontology
/// for related skills and domain keywords.
///
/// # Examples
/// ```
/// use reporec_ranker::{ProfileBuilder, RepoSignal};
///
/// let builder = ProfileBuilder::with_defaults();
/// let fallback = builder.build("octocat", &[]).unwrap();
/// let again = builder.build("octocat", &[]).unwrap();
/// assert_eq!(fallback, again);
/// ```
#[derive(Debug, Clone)]
pub struct ProfileBuilder {
    ontology: SkillOntology,
}

impl ProfileBuilder {
    /// Construct a builder over the given ontology.
    #[must_use]
    pub const fn new(ontology: SkillOntology) -> Self {
        Self { ontology }
    }

    /// Construct a builder over the built-in ontology tables.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SkillOntology::default())
    }

    /// Build a profile for `user_id` from `signals`.
    ///
    /// An empty signal set falls back to a profile derived purely from a
    /// stable hash of the identity; repeated calls for the same identity
    /// reproduce the same profile either way.
    ///
    /// # Errors
    /// Returns [`UserProfileError`] when derived values violate profile
    /// invariants; with the built-in tables this does not occur.
    pub fn build(
        &self,
        user_id: &str,
        signals: &[RepoSignal],
    ) -> Result<UserProfile, UserProfileError> {
        if signals.is_empty() {
            fallback_profile(user_id)
        } else {
            self.profile_from_signals(user_id, signals)
        }
    }

    #[expect(
        clippy::float_arithmetic,
        clippy::cast_precision_loss,
        reason = "skill strengths are ratios over small signal counts"
    )]
    fn profile_from_signals(
        &self,
        user_id: &str,
        signals: &[RepoSignal],
    ) -> Result<UserProfile, UserProfileError> {
        let histogram = language_histogram(signals);
        let total = signals.len();

        let mut skills: HashMap<String, f64> = HashMap::new();
        let top: Vec<(String, usize)> = histogram
            .iter()
            .take(TOP_LANGUAGES)
            .map(|(language, count)| (language.clone(), *count))
            .collect();
        for (language, count) in &top {
            let strength = MAX_SKILL_STRENGTH.min(*count as f64 / total as f64);
            skills.insert(language.clone(), strength);
        }
        for (language, _) in &top {
            let Some(&parent) = skills.get(language) else {
                continue;
            };
            for token in self
                .ontology
                .related(language)
                .iter()
                .take(RELATED_PER_SKILL)
            {
                skills
                    .entry(token.clone())
                    .or_insert(parent * RELATED_STRENGTH_RATIO);
            }
        }

        let words = keyword_soup(signals);
        let core = self.core_domain(&words);

        let mut rng = ChaCha8Rng::seed_from_u64(signal_seed(user_id, &histogram));
        let mut domains = vec![core];
        let others: Vec<Domain> = self
            .ontology
            .domain_keywords()
            .iter()
            .map(|(domain, _)| *domain)
            .filter(|domain| *domain != core)
            .collect();
        domains.extend(others.choose_multiple(&mut rng, EXTRA_DOMAINS).copied());

        let experience = experience_from_stars(signals);
        let weights = draw_weights(&mut rng);

        UserProfile::new(skills, domains, experience, weights)
    }

    /// Highest-scoring domain by keyword substring counting; ties go to
    /// the domain listed earlier in the ontology table.
    fn core_domain(&self, words: &[String]) -> Domain {
        let mut best = Domain::General;
        let mut best_score = 0_usize;
        let mut first = true;
        for (domain, keywords) in self.ontology.domain_keywords() {
            let score: usize = keywords
                .iter()
                .map(|keyword| words.iter().filter(|word| word.contains(keyword)).count())
                .sum();
            if first || score > best_score {
                best = *domain;
                best_score = score;
                first = false;
            }
        }
        best
    }
}

/// Deterministic fallback profile from a hash of the identity alone.
fn fallback_profile(user_id: &str) -> Result<UserProfile, UserProfileError> {
    let hash = stable_hash(user_id);
    let index = usize::try_from(hash % FALLBACK_CORES.len() as u64).unwrap_or(0);
    let core = FALLBACK_CORES.get(index).copied().unwrap_or(Domain::General);

    let skills: HashMap<String, f64> = fallback_skills(core)
        .iter()
        .map(|&(token, strength)| (token.to_owned(), strength))
        .collect();

    let mut rng = ChaCha8Rng::seed_from_u64(hash);
    let mut domains = vec![core];
    let others: Vec<Domain> = FALLBACK_EXTRAS
        .iter()
        .copied()
        .filter(|domain| *domain != core)
        .collect();
    domains.extend(others.choose_multiple(&mut rng, EXTRA_DOMAINS).copied());

    let experience = match rng.gen_range(0_u8..3) {
        0 => ExperienceLevel::Beginner,
        1 => ExperienceLevel::Intermediate,
        _ => ExperienceLevel::Advanced,
    };
    let weights = draw_weights(&mut rng);

    UserProfile::new(skills, domains, experience, weights)
}

const fn fallback_skills(core: Domain) -> &'static [(&'static str, f64)] {
    match core {
        Domain::Ai => &[("python", 0.9), ("machine-learning", 0.85)],
        Domain::Frontend => &[("javascript", 0.9), ("frontend", 0.85)],
        Domain::Backend => &[("java", 0.9), ("backend", 0.85)],
        Domain::DevOps => &[("go", 0.9), ("devops", 0.85)],
        _ => &[("sql", 0.9), ("data-processing", 0.85)],
    }
}

fn draw_weights(rng: &mut ChaCha8Rng) -> ProfileWeights {
    ProfileWeights {
        experience: rng.gen_range(0.8..1.2),
        contribution: rng.gen_range(0.7..1.3),
        activity: rng.gen_range(0.8..1.2),
    }
}

/// Languages by descending count; count ties break alphabetically so the
/// histogram (and everything seeded from it) is deterministic.
fn language_histogram(signals: &[RepoSignal]) -> Vec<(String, usize)> {
    let mut counts: HashMap<String, usize> = HashMap::new();
    for signal in signals {
        let language = signal.language.trim().to_lowercase();
        if !language.is_empty() {
            *counts.entry(language).or_insert(0) += 1;
        }
    }
    let mut ordered: Vec<(String, usize)> = counts.into_iter().collect();
    ordered.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));
    ordered
}

/// Lowercased topic tags plus description words of three or more letters.
fn keyword_soup(signals: &[RepoSignal]) -> Vec<String> {
    let mut words = Vec::new();
    for signal in signals {
        for found in WORD_PATTERN.find_iter(&signal.description) {
            words.push(found.as_str().to_lowercase());
        }
        for topic in &signal.topics {
            words.push(topic.to_lowercase());
        }
    }
    words
}

#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "the experience tier derives from a mean over small counts"
)]
fn experience_from_stars(signals: &[RepoSignal]) -> ExperienceLevel {
    let total: u64 = signals.iter().map(|signal| signal.stars).sum();
    let mean = total as f64 / signals.len().max(1) as f64;
    if mean > 50.0 {
        ExperienceLevel::Advanced
    } else if mean > 10.0 {
        ExperienceLevel::Intermediate
    } else {
        ExperienceLevel::Beginner
    }
}

/// Seed mixing the identity with the language histogram, so the sampled
/// extra domains shift only when the user's language mix does.
fn signal_seed(user_id: &str, histogram: &[(String, usize)]) -> u64 {
    let mut input = String::from(user_id);
    for (language, count) in histogram {
        let _ = write!(input, "|{language}:{count}");
    }
    stable_hash(&input)
}

/// Stable 64-bit hash of a string, identical across runs and platforms.
fn stable_hash(input: &str) -> u64 {
    let digest = Sha256::digest(input.as_bytes());
    digest
        .iter()
        .take(8)
        .fold(0_u64, |acc, &byte| (acc << 8) | u64::from(byte))
}
