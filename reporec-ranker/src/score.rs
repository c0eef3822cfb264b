//! Personalised match scoring: a weighted linear combination of skill,
//! domain, difficulty, and quality terms.
//!
//! The scorer is a pure function of the candidate, the profile, and the
//! shared ontology. It never fails: missing information contributes zero
//! match instead of an error, and the candidate pool guarantees metrics
//! are populated before scoring runs.

use reporec_core::{
    CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer, QualityMetrics, SkillOntology,
    UserProfile,
};

/// Base term weights before the per-user multipliers apply.
const SKILL_WEIGHT: f64 = 0.45;
const DOMAIN_WEIGHT: f64 = 0.20;
const DIFFICULTY_WEIGHT: f64 = 0.15;
const QUALITY_WEIGHT: f64 = 0.15;

/// Flat bonus for curated-provenance candidates.
const CURATED_BONUS: f64 = 0.03;

/// Reference star count for logarithmic scaling. Candidates above this
/// push the quality term past 1.0; that is intentional and preserved.
const STAR_REFERENCE: f64 = 100_000.0;

/// Scorer combining profile skills, domains, difficulty fit, and
/// repository quality into one raw score on a nominal 0–100 scale.
///
/// # Examples
/// ```
/// use reporec_core::{
///     CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer, ProfileWeights,
///     SkillOntology, UserProfile,
/// };
/// use reporec_ranker::PersonalizedScorer;
///
/// let scorer = PersonalizedScorer::with_defaults();
/// let profile = UserProfile::new(
///     [("rust".to_owned(), 0.9)].into(),
///     vec![Domain::Systems],
///     ExperienceLevel::Advanced,
///     ProfileWeights::default(),
/// )
/// .unwrap();
/// let candidate = CandidateRepo::new("rust-lang/rust", "Rust", Domain::Systems, Difficulty::Advanced);
/// assert!(scorer.score(&candidate, &profile) > 0.0);
/// ```
#[derive(Debug, Clone)]
pub struct PersonalizedScorer {
    ontology: SkillOntology,
}

impl PersonalizedScorer {
    /// Construct a scorer over the given ontology.
    #[must_use]
    pub const fn new(ontology: SkillOntology) -> Self {
        Self { ontology }
    }

    /// Construct a scorer over the built-in ontology tables.
    #[must_use]
    pub fn with_defaults() -> Self {
        Self::new(SkillOntology::default())
    }

    /// The ontology this scorer consults for related-skill matches.
    #[must_use]
    pub const fn ontology(&self) -> &SkillOntology {
        &self.ontology
    }

    /// Strength-weighted average of per-skill match values.
    ///
    /// Each profile skill matches at `1.0` against the candidate's
    /// primary language, `0.9` against a literal tag, `0.6` when any
    /// ontology-related skill appears in the tag set, else `0.0`. A zero
    /// weight sum yields `0.0` rather than a division fault.
    #[expect(
        clippy::float_arithmetic,
        reason = "skill matching is a weighted average over strengths"
    )]
    fn skill_match(&self, candidate: &CandidateRepo, profile: &UserProfile) -> f64 {
        let language = candidate.language.to_lowercase();
        let mut weighted = 0.0_f64;
        let mut weight_sum = 0.0_f64;
        for (skill, &strength) in profile.skills() {
            if strength <= 0.0 || !strength.is_finite() {
                continue;
            }
            weight_sum += strength;
            weighted += strength * self.skill_value(skill, &language, candidate);
        }
        if weight_sum > 0.0 {
            weighted / weight_sum
        } else {
            0.0
        }
    }

    fn skill_value(&self, skill: &str, language: &str, candidate: &CandidateRepo) -> f64 {
        if !language.is_empty() && skill == language {
            return 1.0;
        }
        if tag_matches(candidate, skill) {
            return 0.9;
        }
        let related = self.ontology.related(skill);
        if related.iter().any(|token| tag_matches(candidate, token)) {
            return 0.6;
        }
        0.0
    }
}

fn tag_matches(candidate: &CandidateRepo, token: &str) -> bool {
    candidate
        .tags
        .iter()
        .any(|tag| tag.eq_ignore_ascii_case(token))
}

/// Affinity between a candidate's domain and the profile's domain list.
///
/// Returns `1.0` for the core (first-listed) domain, `0.4` for any other
/// listed domain, and `0.0` otherwise.
#[must_use]
pub fn domain_affinity(candidate_domain: Domain, domains: &[Domain]) -> f64 {
    if domains.first() == Some(&candidate_domain) {
        1.0
    } else if domains.contains(&candidate_domain) {
        0.4
    } else {
        0.0
    }
}

/// Fixed compatibility between experience level and candidate difficulty.
///
/// The diagonal scores `1.0`, adjacent tiers `0.6`, and the
/// beginner/advanced extremes `0.2`.
#[must_use]
pub const fn difficulty_affinity(level: ExperienceLevel, difficulty: Difficulty) -> f64 {
    match (level, difficulty) {
        (ExperienceLevel::Beginner, Difficulty::Beginner)
        | (ExperienceLevel::Intermediate, Difficulty::Intermediate)
        | (ExperienceLevel::Advanced, Difficulty::Advanced) => 1.0,
        (ExperienceLevel::Beginner, Difficulty::Advanced)
        | (ExperienceLevel::Advanced, Difficulty::Beginner) => 0.2,
        _ => 0.6,
    }
}

/// Quality term from OpenRank, activity, and log-scaled stars.
///
/// `0.8 * (0.6*openrank/100 + 0.4*activity/100) + 0.2 * ln(1+stars)/ln(1+100_000)`.
/// The star term is deliberately unclamped: extremely popular candidates
/// may contribute slightly more than `1.0`, and flattening that would
/// reorder results against the reference behaviour.
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "quality scoring is a weighted floating-point blend of bounded metrics"
)]
pub fn quality_score(metrics: &QualityMetrics) -> f64 {
    let rank_blend = 0.6 * (metrics.openrank / 100.0) + 0.4 * (metrics.activity / 100.0);
    let stars = metrics.stars as f64;
    let star_scaled = stars.ln_1p() / STAR_REFERENCE.ln_1p();
    0.8 * rank_blend + 0.2 * star_scaled
}

impl MatchScorer for PersonalizedScorer {
    #[expect(
        clippy::float_arithmetic,
        reason = "the raw score is a weighted linear combination of sub-scores"
    )]
    fn score(&self, candidate: &CandidateRepo, profile: &UserProfile) -> f64 {
        let weights = profile.weights();
        let skill = self.skill_match(candidate, profile);
        let domain = domain_affinity(candidate.domain, profile.domains());
        let difficulty = difficulty_affinity(profile.experience(), candidate.difficulty);
        let quality = quality_score(&candidate.metrics);
        let bonus = if candidate.is_curated() {
            CURATED_BONUS
        } else {
            0.0
        };

        let raw = skill * SKILL_WEIGHT * weights.experience
            + domain * DOMAIN_WEIGHT * weights.contribution
            + difficulty * DIFFICULTY_WEIGHT
            + quality * QUALITY_WEIGHT * weights.activity
            + bonus;
        <Self as MatchScorer>::sanitise(raw * 100.0)
    }
}
