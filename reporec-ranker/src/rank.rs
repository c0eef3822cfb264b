//! Rank-based score normalization.
//!
//! Raw scores from the linear formula cluster tightly and are not
//! comparable across very different profiles. Remapping by sort position
//! instead of absolute value yields a bounded, strictly-ordered display
//! scale that outliers cannot distort.

use reporec_core::{CandidateRepo, ScoredCandidate};

/// Upper bound of the normalized scale; two-decimal rounding lands the
/// top rank of a multi-candidate pool exactly on it.
pub const HIGH_SCORE: f64 = 98.9;

/// Lower bound of the normalized scale.
pub const LOW_SCORE: f64 = 60.1;

/// Map raw scores onto the bounded rank scale.
///
/// Candidates are stably sorted by raw score descending (ties keep input
/// order), then mapped: a single candidate receives the scale midpoint;
/// otherwise rank `idx` of `n` receives
/// `LOW + 0.001 + (1 - idx/(n-1)) * (HIGH - LOW - 0.002)`, rounded to two
/// decimals. The pre-rounding values sit strictly between the bounds, but
/// rounding lands the extreme ranks exactly on them, so outputs lie in
/// the closed range `[LOW_SCORE, HIGH_SCORE]`.
///
/// An empty input produces an empty output, not an error.
///
/// # Examples
/// ```
/// use reporec_core::{CandidateRepo, Difficulty, Domain};
/// use reporec_ranker::normalize;
///
/// let repo = |id: &str| CandidateRepo::new(id, "Rust", Domain::Systems, Difficulty::Advanced);
/// let ranked = normalize(vec![(repo("a/a"), 40.0), (repo("b/b"), 80.0)]);
/// assert_eq!(ranked[0].id(), "b/b");
/// assert!(ranked[0].total_score > ranked[1].total_score);
/// ```
#[must_use]
#[expect(
    clippy::float_arithmetic,
    clippy::cast_precision_loss,
    reason = "rank interpolation is floating-point over sorted positions"
)]
pub fn normalize(raw: Vec<(CandidateRepo, f64)>) -> Vec<ScoredCandidate> {
    let n = raw.len();
    if n == 0 {
        return Vec::new();
    }

    let mut sorted = raw;
    sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

    let span = HIGH_SCORE - LOW_SCORE - 0.002;
    sorted
        .into_iter()
        .enumerate()
        .map(|(idx, (repo, raw_score))| {
            let total = if n == 1 {
                (HIGH_SCORE + LOW_SCORE) / 2.0
            } else {
                let frac = idx as f64 / (n - 1) as f64;
                round2(LOW_SCORE + 0.001 + (1.0 - frac) * span)
            };
            ScoredCandidate {
                repo,
                raw_score,
                total_score: total,
            }
        })
        .collect()
}

#[expect(
    clippy::float_arithmetic,
    reason = "two-decimal rounding scales and divides"
)]
fn round2(value: f64) -> f64 {
    (value * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;
    use reporec_core::{Difficulty, Domain};
    use rstest::rstest;

    fn repo(id: &str) -> CandidateRepo {
        CandidateRepo::new(id, "Rust", Domain::Systems, Difficulty::Intermediate)
    }

    #[rstest]
    fn empty_pool_yields_empty_result() {
        assert!(normalize(Vec::new()).is_empty());
    }

    #[rstest]
    fn single_candidate_receives_midpoint() {
        let ranked = normalize(vec![(repo("a/a"), 55.0)]);
        assert_eq!(ranked.len(), 1);
        assert!((ranked[0].total_score - (HIGH_SCORE + LOW_SCORE) / 2.0).abs() < 1e-9);
    }

    #[rstest]
    fn scores_stay_within_closed_bounds() {
        let raw = (0..20)
            .map(|i| (repo(&format!("r/{i}")), f64::from(i)))
            .collect();
        let ranked = normalize(raw);
        for candidate in &ranked {
            assert!(candidate.total_score >= LOW_SCORE);
            assert!(candidate.total_score <= HIGH_SCORE);
        }
    }

    #[rstest]
    fn extreme_ranks_round_onto_the_bounds() {
        // 98.899 rounds up to 98.9 and 60.101 down to 60.1, so the two
        // extreme ranks sit exactly on the scale bounds.
        let ranked = normalize(vec![(repo("top/top"), 90.0), (repo("low/low"), 10.0)]);
        assert!((ranked[0].total_score - HIGH_SCORE).abs() < 1e-9);
        assert!((ranked[1].total_score - LOW_SCORE).abs() < 1e-9);
    }

    #[rstest]
    fn top_rank_lands_nearest_high() {
        let ranked = normalize(vec![
            (repo("low/low"), 10.0),
            (repo("top/top"), 90.0),
            (repo("mid/mid"), 50.0),
        ]);
        assert_eq!(ranked[0].id(), "top/top");
        assert!((ranked[0].total_score - 98.9).abs() < 0.01);
        assert!((ranked[2].total_score - 60.1).abs() < 0.01);
    }

    #[rstest]
    fn ties_keep_input_order() {
        let ranked = normalize(vec![
            (repo("first/tie"), 42.0),
            (repo("second/tie"), 42.0),
        ]);
        assert_eq!(ranked[0].id(), "first/tie");
        assert_eq!(ranked[1].id(), "second/tie");
    }
}
