//! Unit tests for the scoring formula and its sub-scores.

use reporec_core::{
    CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer, ProfileWeights,
    Provenance, QualityMetrics, UserProfile,
};
use rstest::{fixture, rstest};

use crate::{PersonalizedScorer, difficulty_affinity, domain_affinity, quality_score};

fn profile_with(
    skills: &[(&str, f64)],
    domains: Vec<Domain>,
    experience: ExperienceLevel,
    weights: ProfileWeights,
) -> UserProfile {
    let skills = skills
        .iter()
        .map(|&(name, strength)| (name.to_owned(), strength))
        .collect();
    UserProfile::new(skills, domains, experience, weights).unwrap()
}

#[fixture]
fn scorer() -> PersonalizedScorer {
    PersonalizedScorer::with_defaults()
}

fn zeroed_metrics() -> QualityMetrics {
    QualityMetrics {
        openrank: 0.0,
        activity: 0.0,
        stars: 0,
        forks: 0,
        contributors: 0,
    }
}

#[rstest]
#[case(ExperienceLevel::Beginner, Difficulty::Beginner, 1.0)]
#[case(ExperienceLevel::Intermediate, Difficulty::Intermediate, 1.0)]
#[case(ExperienceLevel::Advanced, Difficulty::Advanced, 1.0)]
#[case(ExperienceLevel::Beginner, Difficulty::Intermediate, 0.6)]
#[case(ExperienceLevel::Intermediate, Difficulty::Advanced, 0.6)]
#[case(ExperienceLevel::Advanced, Difficulty::Intermediate, 0.6)]
#[case(ExperienceLevel::Beginner, Difficulty::Advanced, 0.2)]
#[case(ExperienceLevel::Advanced, Difficulty::Beginner, 0.2)]
fn difficulty_table_is_symmetric_about_the_diagonal(
    #[case] level: ExperienceLevel,
    #[case] difficulty: Difficulty,
    #[case] expected: f64,
) {
    assert!((difficulty_affinity(level, difficulty) - expected).abs() < f64::EPSILON);
}

#[rstest]
fn core_domain_outranks_listed_and_unlisted() {
    let domains = [Domain::Ai, Domain::Data];
    assert!((domain_affinity(Domain::Ai, &domains) - 1.0).abs() < f64::EPSILON);
    assert!((domain_affinity(Domain::Data, &domains) - 0.4).abs() < f64::EPSILON);
    assert!(domain_affinity(Domain::Gaming, &domains).abs() < f64::EPSILON);
}

#[rstest]
fn quality_formula_matches_hand_computation() {
    let metrics = QualityMetrics {
        openrank: 50.0,
        activity: 75.0,
        stars: 0,
        forks: 0,
        contributors: 0,
    };
    // 0.8 * (0.6*0.5 + 0.4*0.75) + 0.2 * 0 = 0.48
    assert!((quality_score(&metrics) - 0.48).abs() < 1e-12);
}

#[rstest]
fn star_term_is_not_clamped_above_the_reference() {
    let over = QualityMetrics {
        stars: 10_000_000,
        ..zeroed_metrics()
    };
    let at_reference = QualityMetrics {
        stars: 100_000,
        ..zeroed_metrics()
    };
    assert!(quality_score(&over) > quality_score(&at_reference));
    assert!((quality_score(&at_reference) - 0.2).abs() < 1e-9);
}

#[rstest]
fn language_match_beats_tag_match(scorer: PersonalizedScorer) {
    let profile = profile_with(
        &[("python", 1.0)],
        vec![Domain::General],
        ExperienceLevel::Intermediate,
        ProfileWeights::default(),
    );
    let by_language = CandidateRepo::new("a/a", "Python", Domain::Gaming, Difficulty::Intermediate)
        .with_metrics(zeroed_metrics());
    let by_tag = CandidateRepo::new("b/b", "C", Domain::Gaming, Difficulty::Intermediate)
        .with_tags(["python".to_owned()])
        .with_metrics(zeroed_metrics());

    assert!(scorer.score(&by_language, &profile) > scorer.score(&by_tag, &profile));
}

#[rstest]
fn related_skill_scores_through_the_ontology(scorer: PersonalizedScorer) {
    let profile = profile_with(
        &[("python", 1.0)],
        vec![Domain::General],
        ExperienceLevel::Intermediate,
        ProfileWeights::default(),
    );
    // "data-analysis" is related to "python" in the built-in ontology.
    let related = CandidateRepo::new("c/c", "C", Domain::Gaming, Difficulty::Intermediate)
        .with_tags(["data-analysis".to_owned()])
        .with_metrics(zeroed_metrics());
    let unrelated = CandidateRepo::new("d/d", "C", Domain::Gaming, Difficulty::Intermediate)
        .with_metrics(zeroed_metrics());

    // skill 0.6 * 0.45 * 100 = 27, plus the shared difficulty term.
    let lift = scorer.score(&related, &profile) - scorer.score(&unrelated, &profile);
    assert!((lift - 27.0).abs() < 1e-9);
}

#[rstest]
fn zero_strength_skills_contribute_nothing(scorer: PersonalizedScorer) {
    let profile = profile_with(
        &[("python", 0.0)],
        vec![Domain::General],
        ExperienceLevel::Intermediate,
        ProfileWeights::default(),
    );
    let candidate = CandidateRepo::new("a/a", "Python", Domain::Gaming, Difficulty::Beginner)
        .with_metrics(zeroed_metrics());
    // Only the difficulty term survives: 0.6 * 0.15 * 100 = 9.
    assert!((scorer.score(&candidate, &profile) - 9.0).abs() < 1e-9);
}

#[rstest]
fn curated_bonus_adds_three_points(scorer: PersonalizedScorer) {
    let profile = profile_with(
        &[("rust", 0.8)],
        vec![Domain::Systems],
        ExperienceLevel::Advanced,
        ProfileWeights::default(),
    );
    let generic = CandidateRepo::new("a/a", "Rust", Domain::Systems, Difficulty::Advanced)
        .with_metrics(zeroed_metrics());
    let curated = CandidateRepo::new("b/b", "Rust", Domain::Systems, Difficulty::Advanced)
        .with_metrics(zeroed_metrics())
        .with_provenance(Provenance::Curated);

    let lift = scorer.score(&curated, &profile) - scorer.score(&generic, &profile);
    assert!((lift - 3.0).abs() < 1e-9);
}

#[rstest]
fn profile_weights_scale_their_terms(scorer: PersonalizedScorer) {
    let baseline = profile_with(
        &[("rust", 1.0)],
        vec![Domain::Systems],
        ExperienceLevel::Advanced,
        ProfileWeights::default(),
    );
    let boosted = profile_with(
        &[("rust", 1.0)],
        vec![Domain::Systems],
        ExperienceLevel::Advanced,
        ProfileWeights {
            experience: 1.2,
            ..ProfileWeights::default()
        },
    );
    let candidate = CandidateRepo::new("a/a", "Rust", Domain::Systems, Difficulty::Advanced)
        .with_metrics(zeroed_metrics());

    // Skill term goes from 45 to 54; everything else is unchanged.
    let lift = scorer.score(&candidate, &boosted) - scorer.score(&candidate, &baseline);
    assert!((lift - 9.0).abs() < 1e-9);
}

#[rstest]
fn negative_raw_scores_are_floored_at_zero(scorer: PersonalizedScorer) {
    let profile = profile_with(
        &[],
        vec![Domain::General],
        ExperienceLevel::Beginner,
        ProfileWeights::default(),
    );
    let candidate = CandidateRepo::new("a/a", "Rust", Domain::Gaming, Difficulty::Intermediate)
        .with_metrics(zeroed_metrics());
    assert!(scorer.score(&candidate, &profile) >= 0.0);
}
