//! End-to-end behaviour of the score → normalize → select pipeline.

use std::collections::HashMap;

use reporec_core::{
    CandidatePool, CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer,
    ProfileWeights, UserProfile,
};
use reporec_ranker::{HIGH_SCORE, LOW_SCORE, RecommendOptions, normalize, recommend_with};
use rstest::{fixture, rstest};

/// Scorer returning a fixed score per identity, for deterministic plumbing
/// tests.
struct TableScorer(HashMap<String, f64>);

impl MatchScorer for TableScorer {
    fn score(&self, candidate: &CandidateRepo, _profile: &UserProfile) -> f64 {
        self.0.get(&candidate.id).copied().unwrap_or(0.0)
    }
}

#[fixture]
fn profile() -> UserProfile {
    UserProfile::new(
        HashMap::from([("rust".to_owned(), 0.9), ("go".to_owned(), 0.5)]),
        vec![Domain::Systems, Domain::DevOps],
        ExperienceLevel::Advanced,
        ProfileWeights::default(),
    )
    .expect("fixture profile is valid")
}

fn repo(id: &str) -> CandidateRepo {
    CandidateRepo::new(id, "Rust", Domain::Systems, Difficulty::Advanced)
}

fn pool_of(ids: &[&str]) -> CandidatePool {
    ids.iter().map(|&id| repo(id)).collect()
}

#[rstest]
fn five_candidates_rank_onto_the_display_scale(profile: UserProfile) {
    let raw_scores = [
        ("r/a", 80.0),
        ("r/b", 60.0),
        ("r/c", 40.0),
        ("r/d", 20.0),
        ("r/e", 10.0),
    ];
    let scorer = TableScorer(
        raw_scores
            .iter()
            .map(|&(id, score)| (id.to_owned(), score))
            .collect(),
    );
    let pool = pool_of(&["r/a", "r/b", "r/c", "r/d", "r/e"]);

    let picks = recommend_with(&scorer, &pool, &profile, &RecommendOptions::default());

    assert_eq!(picks.len(), 5);
    let ids: Vec<_> = picks.iter().map(|c| c.id().to_owned()).collect();
    assert_eq!(ids, ["r/a", "r/b", "r/c", "r/d", "r/e"]);

    let first = picks.first().expect("non-empty");
    let last = picks.last().expect("non-empty");
    assert!((first.total_score - HIGH_SCORE).abs() < 0.01);
    assert!((last.total_score - LOW_SCORE).abs() < 0.01);
    for candidate in &picks {
        assert!(candidate.total_score >= LOW_SCORE);
        assert!(candidate.total_score <= HIGH_SCORE);
    }
}

#[rstest]
fn raw_scores_survive_alongside_display_scores(profile: UserProfile) {
    let scorer = TableScorer(HashMap::from([
        ("r/a".to_owned(), 73.5),
        ("r/b".to_owned(), 12.0),
    ]));
    let pool = pool_of(&["r/a", "r/b"]);

    let picks = recommend_with(&scorer, &pool, &profile, &RecommendOptions::default());

    let top = picks.first().expect("non-empty");
    assert_eq!(top.id(), "r/a");
    assert!((top.raw_score - 73.5).abs() < f64::EPSILON);
}

#[rstest]
fn non_finite_scores_are_neutralised_not_propagated(profile: UserProfile) {
    struct FaultyScorer;
    impl MatchScorer for FaultyScorer {
        fn score(&self, candidate: &CandidateRepo, _profile: &UserProfile) -> f64 {
            if candidate.id == "bad/bad" {
                f64::NAN
            } else {
                50.0
            }
        }
    }

    let pool = pool_of(&["good/good", "bad/bad"]);
    let picks = recommend_with(&FaultyScorer, &pool, &profile, &RecommendOptions::default());

    assert_eq!(picks.len(), 2, "a faulty candidate stays in the list");
    let top = picks.first().expect("non-empty");
    assert_eq!(top.id(), "good/good");
    assert!(picks.iter().all(|c| c.total_score.is_finite()));
}

#[rstest]
fn pipeline_is_deterministic(profile: UserProfile) {
    let scorer = TableScorer(
        (0..12)
            .map(|i| (format!("r/{i}"), f64::from(i) * 7.3))
            .collect(),
    );
    let ids: Vec<String> = (0..12).map(|i| format!("r/{i}")).collect();
    let pool: CandidatePool = ids.iter().map(|id| repo(id)).collect();

    let first = recommend_with(&scorer, &pool, &profile, &RecommendOptions::default());
    let second = recommend_with(&scorer, &pool, &profile, &RecommendOptions::default());
    assert_eq!(first, second);
}

#[rstest]
fn identically_built_pools_yield_identical_lists(profile: UserProfile) {
    // Equal raw scores everywhere: ordering must come from the pool's
    // identity order, not from per-instance map iteration order.
    struct FlatScorer;
    impl MatchScorer for FlatScorer {
        fn score(&self, _candidate: &CandidateRepo, _profile: &UserProfile) -> f64 {
            50.0
        }
    }

    let ids: Vec<String> = (0..30).map(|i| format!("owner/repo-{i:02}")).collect();
    let build_pool = || -> CandidatePool { ids.iter().map(|id| repo(id)).collect() };
    let options = RecommendOptions::default();

    let first = recommend_with(&FlatScorer, &build_pool(), &profile, &options);
    let second = recommend_with(&FlatScorer, &build_pool(), &profile, &options);

    assert_eq!(first, second, "same logical pool must yield the same list");
    let picked_ids: Vec<_> = first.iter().map(|c| c.id().to_owned()).collect();
    let mut sorted_ids = picked_ids.clone();
    sorted_ids.sort();
    assert_eq!(picked_ids, sorted_ids, "ties resolve by identity order");
}

#[rstest]
fn normalize_alone_handles_the_degenerate_sizes() {
    assert!(normalize(Vec::new()).is_empty());

    let one = normalize(vec![(repo("solo/solo"), 42.0)]);
    let midpoint = (HIGH_SCORE + LOW_SCORE) / 2.0;
    assert!((one.first().expect("one candidate").total_score - midpoint).abs() < 1e-9);
}
