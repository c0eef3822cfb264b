//! Facade crate for the reporec recommendation engine.
//!
//! Re-exports the core domain types from `reporec-core` and the ranking
//! pipeline from `reporec-ranker`, so applications depend on a single
//! crate.

#![forbid(unsafe_code)]

pub use reporec_core::{
    CandidatePool, CandidateRepo, Difficulty, Domain, ExperienceLevel, MatchScorer,
    ProfileWeights, Provenance, QualityMetrics, ScoredCandidate, SkillLink, SkillOntology,
    UserProfile, UserProfileError,
};

pub use reporec_ranker::{
    CandidateRecord, HIGH_SCORE, InferredAttributes, LOW_SCORE, PersonalizedScorer, PoolBuilder,
    ProfileBuilder, RecommendError, RecommendOptions, RepoSignal, difficulty_affinity,
    domain_affinity, infer_attributes, infer_org_attributes, normalize, quality_score, recommend,
    recommend_with, select,
};
