//! Core domain types for the reporec recommendation engine.
//!
//! These models provide basic validation to keep downstream components
//! honest. Constructors return `Result` to surface invalid input early.
//! The scoring, normalization, and selection logic lives in
//! `reporec-ranker`; this crate only defines the vocabulary those passes
//! share: user profiles, candidate repositories, the skill ontology, and
//! the [`MatchScorer`] trait seam.

#![forbid(unsafe_code)]
#![cfg_attr(docsrs, feature(doc_cfg))]

mod candidate;
mod domain;
mod ontology;
mod profile;
mod scorer;

pub use candidate::{
    CandidatePool, CandidateRepo, Difficulty, Provenance, QualityMetrics, ScoredCandidate,
};
pub use domain::Domain;
pub use ontology::{SkillLink, SkillOntology};
pub use profile::{ExperienceLevel, ProfileWeights, UserProfile, UserProfileError};
pub use scorer::MatchScorer;
