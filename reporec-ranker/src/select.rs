//! Diversity-constrained selection of the final recommendation list.
//!
//! Normalized candidates are split into four buckets by provenance and
//! core-domain membership, then drained greedily under the curated quota.
//! The quota guarantees every user sees at most a handful of featured
//! items; core-domain priority keeps the list relevant without excluding
//! other domains; dedup keeps an identity from satisfying two buckets.

use std::collections::HashSet;

use reporec_core::{ScoredCandidate, UserProfile};

use crate::RecommendOptions;

/// Pick the final ordered top-N from normalized candidates.
///
/// Bucket walk order: curated∧core, curated∧other (both capped by
/// `max_curated` across the pair), then generic∧core, generic∧other.
/// Each bucket is drained by `total_score` descending, skipping already
/// selected identities and stopping at `top_n`. The assembled result is
/// re-sorted by `total_score` descending, since quota cutoffs can
/// interleave bucket scores.
///
/// A pool smaller than `top_n` yields a partial result, not an error.
///
/// # Examples
/// ```
/// use reporec_core::{
///     CandidateRepo, Difficulty, Domain, ExperienceLevel, ProfileWeights, ScoredCandidate,
///     UserProfile,
/// };
/// use reporec_ranker::{RecommendOptions, select};
///
/// let profile = UserProfile::new(
///     [("rust".to_owned(), 0.9)].into(),
///     vec![Domain::Systems],
///     ExperienceLevel::Advanced,
///     ProfileWeights::default(),
/// )
/// .unwrap();
/// let scored = vec![ScoredCandidate {
///     repo: CandidateRepo::new("a/b", "Rust", Domain::Systems, Difficulty::Advanced),
///     raw_score: 80.0,
///     total_score: 95.0,
/// }];
/// let picked = select(scored, &profile, &RecommendOptions::default());
/// assert_eq!(picked.len(), 1);
/// ```
#[must_use]
pub fn select(
    scored: Vec<ScoredCandidate>,
    profile: &UserProfile,
    options: &RecommendOptions,
) -> Vec<ScoredCandidate> {
    let core = profile.core_domain();

    let mut curated_core = Vec::new();
    let mut curated_other = Vec::new();
    let mut generic_core = Vec::new();
    let mut generic_other = Vec::new();
    for candidate in scored {
        let bucket = match (candidate.repo.is_curated(), candidate.repo.domain == core) {
            (true, true) => &mut curated_core,
            (true, false) => &mut curated_other,
            (false, true) => &mut generic_core,
            (false, false) => &mut generic_other,
        };
        bucket.push(candidate);
    }

    let mut picked: Vec<ScoredCandidate> = Vec::new();
    let mut seen: HashSet<String> = HashSet::new();
    let mut curated_taken = 0_usize;

    for bucket in [curated_core, curated_other] {
        drain_bucket(bucket, options.top_n, &mut picked, &mut seen, |_| {
            if curated_taken < options.max_curated {
                curated_taken += 1;
                true
            } else {
                false
            }
        });
    }
    for bucket in [generic_core, generic_other] {
        drain_bucket(bucket, options.top_n, &mut picked, &mut seen, |_| true);
    }

    picked.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    picked
}

fn drain_bucket(
    mut bucket: Vec<ScoredCandidate>,
    top_n: usize,
    picked: &mut Vec<ScoredCandidate>,
    seen: &mut HashSet<String>,
    mut admit: impl FnMut(&ScoredCandidate) -> bool,
) {
    bucket.sort_by(|a, b| b.total_score.total_cmp(&a.total_score));
    for candidate in bucket {
        if picked.len() >= top_n {
            break;
        }
        if seen.contains(candidate.id()) {
            continue;
        }
        if !admit(&candidate) {
            break;
        }
        seen.insert(candidate.id().to_owned());
        picked.push(candidate);
    }
}
