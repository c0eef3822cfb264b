//! Candidate repositories and the read-only pool the ranking passes share.
//!
//! A [`CandidatePool`] is built once by the pool-construction collaborator
//! and reused read-only across many scoring calls. Every repository in a
//! pool must arrive fully populated: missing metrics are filled with the
//! documented defaults before scoring, never left absent.

use std::collections::{BTreeMap, BTreeSet};

use crate::Domain;

/// Difficulty tier a repository is suited for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Difficulty {
    /// Approachable for first-time contributors.
    Beginner,
    /// Requires familiarity with the stack.
    Intermediate,
    /// Large or specialised codebases.
    Advanced,
}

impl Difficulty {
    /// Return the tier as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for Difficulty {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Where a candidate entered the pool from.
///
/// Curated candidates come from a pre-vetted high-quality project list and
/// are subject to a display quota in the diversity selector, so a narrow
/// featured set can never dominate the output.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum Provenance {
    /// Sourced from the curated project list.
    Curated,
    /// Sourced generically.
    Generic,
}

/// Quality signals for one candidate, on the scales the scorer expects.
///
/// `openrank` and `activity` are nominally `0..=100`; pool construction
/// clamps them into range. The `Default` values are the documented
/// fill-ins for metrics the upstream source could not provide.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct QualityMetrics {
    /// OpenRank influence score, `0..=100`.
    pub openrank: f64,
    /// Activity score, `0..=100`.
    pub activity: f64,
    /// Stargazer count.
    pub stars: u64,
    /// Fork count.
    pub forks: u64,
    /// Contributor count.
    pub contributors: u64,
}

impl QualityMetrics {
    /// Return a copy with `openrank` and `activity` clamped into `0..=100`.
    #[must_use]
    pub fn clamped(self) -> Self {
        Self {
            openrank: self.openrank.clamp(0.0, 100.0),
            activity: self.activity.clamp(0.0, 100.0),
            ..self
        }
    }
}

impl Default for QualityMetrics {
    fn default() -> Self {
        Self {
            openrank: 70.0,
            activity: 70.0,
            stars: 1_000,
            forks: 100,
            contributors: 10,
        }
    }
}

/// A repository (or organisation aggregate) eligible for recommendation.
///
/// # Examples
/// ```
/// use reporec_core::{CandidateRepo, Difficulty, Domain, Provenance};
///
/// let repo = CandidateRepo::new("rust-lang/rust", "Rust", Domain::Systems, Difficulty::Advanced)
///     .with_tags(["language", "compiler"])
///     .with_provenance(Provenance::Curated);
/// assert_eq!(repo.id, "rust-lang/rust");
/// assert!(repo.tags.contains("compiler"));
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidateRepo {
    /// Unique identity within a pool: `owner/name` or a synthetic org key.
    pub id: String,
    /// Primary implementation language.
    pub language: String,
    /// Domain the repository belongs to.
    pub domain: Domain,
    /// Difficulty tier.
    pub difficulty: Difficulty,
    /// Lowercase descriptive tags.
    pub tags: BTreeSet<String>,
    /// Quality signals, always populated.
    pub metrics: QualityMetrics,
    /// Pool provenance, governs the curated selection quota.
    pub provenance: Provenance,
    /// Marks an organisation-level aggregate rather than a single
    /// repository. Display-only; scoring ignores it.
    pub is_aggregate: bool,
}

impl CandidateRepo {
    /// Construct a candidate with default metrics, no tags, and generic
    /// provenance.
    pub fn new(
        id: impl Into<String>,
        language: impl Into<String>,
        domain: Domain,
        difficulty: Difficulty,
    ) -> Self {
        Self {
            id: id.into(),
            language: language.into(),
            domain,
            difficulty,
            tags: BTreeSet::new(),
            metrics: QualityMetrics::default(),
            provenance: Provenance::Generic,
            is_aggregate: false,
        }
    }

    /// Replace the tag set while returning `self` for chaining.
    #[must_use]
    pub fn with_tags<I, S>(mut self, tags: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.tags = tags.into_iter().map(Into::into).collect();
        self
    }

    /// Replace the quality metrics while returning `self` for chaining.
    #[must_use]
    pub fn with_metrics(mut self, metrics: QualityMetrics) -> Self {
        self.metrics = metrics;
        self
    }

    /// Set the provenance while returning `self` for chaining.
    #[must_use]
    pub fn with_provenance(mut self, provenance: Provenance) -> Self {
        self.provenance = provenance;
        self
    }

    /// Mark the candidate as an organisation-level aggregate.
    #[must_use]
    pub fn as_aggregate(mut self) -> Self {
        self.is_aggregate = true;
        self
    }

    /// Report whether the candidate came from the curated list.
    #[must_use]
    pub const fn is_curated(&self) -> bool {
        matches!(self.provenance, Provenance::Curated)
    }
}

/// Read-only mapping from identity to candidate.
///
/// Built once, then shared across scoring requests. Inserting a duplicate
/// identity replaces the earlier entry, matching snapshot-merge semantics.
/// The map is ordered by identity so iteration, and everything ranked
/// from it, is reproducible across runs.
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CandidatePool {
    repos: BTreeMap<String, CandidateRepo>,
}

impl CandidatePool {
    /// Construct an empty pool.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a candidate, keyed by its identity. Returns the entry it
    /// replaced, if any.
    pub fn insert(&mut self, repo: CandidateRepo) -> Option<CandidateRepo> {
        self.repos.insert(repo.id.clone(), repo)
    }

    /// Look up a candidate by identity.
    #[must_use]
    pub fn get(&self, id: &str) -> Option<&CandidateRepo> {
        self.repos.get(id)
    }

    /// Iterate over all candidates in ascending identity order.
    pub fn candidates(&self) -> impl Iterator<Item = &CandidateRepo> {
        self.repos.values()
    }

    /// Return the number of candidates.
    #[must_use]
    pub fn len(&self) -> usize {
        self.repos.len()
    }

    /// Report whether the pool is empty.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.repos.is_empty()
    }
}

impl FromIterator<CandidateRepo> for CandidatePool {
    fn from_iter<I: IntoIterator<Item = CandidateRepo>>(iter: I) -> Self {
        let mut pool = Self::new();
        for repo in iter {
            pool.insert(repo);
        }
        pool
    }
}

/// A candidate carrying its transient scoring results.
///
/// `raw_score` is the scorer's output on the nominal 0–100 scale;
/// `total_score` is the rank-normalized display score. Neither is ever
/// written back into the pool.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ScoredCandidate {
    /// The candidate being scored.
    pub repo: CandidateRepo,
    /// Raw weighted-combination score.
    pub raw_score: f64,
    /// Rank-normalized score in `[60.1, 98.9]`.
    pub total_score: f64,
}

impl ScoredCandidate {
    /// The candidate's identity.
    #[must_use]
    pub fn id(&self) -> &str {
        &self.repo.id
    }
}
