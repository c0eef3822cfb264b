//! Ranking engine: personalised scoring, rank normalization, and
//! diversity-constrained selection over a candidate pool.
//!
//! The pipeline has three stages. [`PersonalizedScorer`] produces a raw
//! match score per candidate, [`normalize`] remaps raw scores onto a
//! bounded rank scale, and [`select`] assembles the final list under the
//! curated quota. [`recommend`] runs all three; [`recommend_with`] does
//! the same over any [`MatchScorer`] implementation.
//!
//! Supporting modules build the inputs: [`ProfileBuilder`] derives a
//! [`reporec_core::UserProfile`] from contribution signals, and
//! [`PoolBuilder`] materialises a pool from partial upstream records.
#![forbid(unsafe_code)]

mod builder;
mod error;
mod infer;
mod pool;
mod rank;
mod score;
mod select;

#[cfg(test)]
mod tests;

pub use builder::{ProfileBuilder, RepoSignal};
pub use error::RecommendError;
pub use infer::{InferredAttributes, infer_attributes, infer_org_attributes};
pub use pool::{CandidateRecord, PoolBuilder};
pub use rank::{HIGH_SCORE, LOW_SCORE, normalize};
pub use score::{PersonalizedScorer, difficulty_affinity, domain_affinity, quality_score};
pub use select::select;

use reporec_core::{CandidatePool, MatchScorer, ScoredCandidate, UserProfile};

/// Tunables for one recommendation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecommendOptions {
    /// Maximum length of the returned list.
    pub top_n: usize,
    /// Maximum number of curated-provenance items in the list.
    pub max_curated: usize,
}

impl Default for RecommendOptions {
    fn default() -> Self {
        Self {
            top_n: 8,
            max_curated: 3,
        }
    }
}

impl RecommendOptions {
    /// Check that the options describe a servable request.
    ///
    /// # Errors
    /// Returns [`RecommendError::InvalidTopN`] or
    /// [`RecommendError::InvalidQuota`] when either bound is zero.
    pub const fn validate(&self) -> Result<(), RecommendError> {
        if self.top_n == 0 {
            return Err(RecommendError::InvalidTopN);
        }
        if self.max_curated == 0 {
            return Err(RecommendError::InvalidQuota);
        }
        Ok(())
    }
}

/// Run the full pipeline with the default [`PersonalizedScorer`].
///
/// # Errors
/// Returns an error when `options` fail validation; an empty or
/// undersized pool is not an error and yields a short (possibly empty)
/// list.
///
/// # Examples
/// ```
/// use reporec_core::{Domain, ExperienceLevel, ProfileWeights, UserProfile};
/// use reporec_ranker::{CandidateRecord, PoolBuilder, RecommendOptions, recommend};
///
/// let mut builder = PoolBuilder::new();
/// builder.push(CandidateRecord::named("rust-lang/rust"));
/// builder.push(CandidateRecord::named("tokio-rs/tokio"));
/// let pool = builder.build();
///
/// let profile = UserProfile::new(
///     [("rust".to_owned(), 0.9)].into(),
///     vec![Domain::Systems],
///     ExperienceLevel::Advanced,
///     ProfileWeights::default(),
/// )
/// .unwrap();
///
/// let picks = recommend(&pool, &profile, &RecommendOptions::default()).unwrap();
/// assert_eq!(picks.len(), 2);
/// ```
pub fn recommend(
    pool: &CandidatePool,
    profile: &UserProfile,
    options: &RecommendOptions,
) -> Result<Vec<ScoredCandidate>, RecommendError> {
    options.validate()?;
    let scorer = PersonalizedScorer::with_defaults();
    Ok(recommend_with(&scorer, pool, profile, options))
}

/// Run the full pipeline with a caller-supplied scorer.
///
/// A scorer returning a non-finite value for some candidate does not
/// poison the request: the candidate is kept with a neutral raw score of
/// `0.0` and the fault is logged.
#[must_use]
pub fn recommend_with<S: MatchScorer>(
    scorer: &S,
    pool: &CandidatePool,
    profile: &UserProfile,
    options: &RecommendOptions,
) -> Vec<ScoredCandidate> {
    let raw: Vec<_> = pool
        .candidates()
        .map(|candidate| {
            let raw_score = scorer.score(candidate, profile);
            let safe_score = if raw_score.is_finite() {
                raw_score
            } else {
                log::warn!("non-finite score for candidate {}; using 0.0", candidate.id);
                0.0
            };
            (candidate.clone(), safe_score)
        })
        .collect();
    let ranked = normalize(raw);
    select(ranked, profile, options)
}
