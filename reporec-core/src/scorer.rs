//! Score candidate repositories for a user profile.
//!
//! The `MatchScorer` trait assigns a raw match score to a
//! [`CandidateRepo`](crate::CandidateRepo) given a
//! [`UserProfile`](crate::UserProfile).

use crate::{CandidateRepo, UserProfile};

/// Calculate a raw match score for a candidate repository.
///
/// Higher scores indicate a better match between the candidate and the
/// user's profile. Implementations must be thread-safe (`Send` + `Sync`)
/// so scorers can run across threads against a shared read-only pool.
/// The method is infallible; implementers must return `0.0` when no
/// information is available, never raise.
///
/// Scores live on a nominal `0..=100` scale but are deliberately not
/// clamped from above: the quality term's star scaling can push extreme
/// candidates slightly past the nominal range, and downstream rank
/// normalization only cares about order. Use [`MatchScorer::sanitise`] to
/// guard against non-finite and negative values.
///
/// # Examples
///
/// ```rust
/// use reporec_core::{
///     CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer, ProfileWeights,
///     UserProfile,
/// };
///
/// struct UnitScorer;
///
/// impl MatchScorer for UnitScorer {
///     fn score(&self, _candidate: &CandidateRepo, _profile: &UserProfile) -> f64 {
///         100.0
///     }
/// }
///
/// let candidate = CandidateRepo::new("a/b", "Rust", Domain::Systems, Difficulty::Advanced);
/// let profile = UserProfile::new(
///     [("rust".to_owned(), 0.9)].into(),
///     vec![Domain::Systems],
///     ExperienceLevel::Advanced,
///     ProfileWeights::default(),
/// )
/// .unwrap();
/// assert_eq!(UnitScorer.score(&candidate, &profile), 100.0);
/// ```
pub trait MatchScorer: Send + Sync {
    /// Return a raw score for `candidate` according to `profile`.
    fn score(&self, candidate: &CandidateRepo, profile: &UserProfile) -> f64;

    /// Validate a raw score.
    ///
    /// Returns `0.0` for non-finite or negative values. Does not clamp
    /// from above; see the trait documentation.
    fn sanitise(score: f64) -> f64 {
        if score.is_finite() {
            score.max(0.0)
        } else {
            0.0
        }
    }
}
