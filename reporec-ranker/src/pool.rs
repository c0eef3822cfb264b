//! Candidate pool assembly from partial upstream records.
//!
//! This is the thin glue between external data sources and the scoring
//! path. It upholds the pool contract: every candidate handed to the
//! scorer has clamped, fully populated metrics and best-effort inferred
//! attributes where upstream data was missing. Fetching and caching those
//! records is an external concern.

use reporec_core::{
    CandidatePool, CandidateRepo, Difficulty, Domain, Provenance, QualityMetrics,
};

use crate::infer::{infer_attributes, infer_org_attributes};

/// A possibly-incomplete candidate as received from upstream.
///
/// Optional fields are filled during pool construction: attributes by the
/// inference rule tables, metrics by the documented defaults. Records
/// deserialize from the JSON pool-snapshot format.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize, serde::Deserialize)]
#[serde(default)]
pub struct CandidateRecord {
    /// Repository identity (`owner/name`), or the organisation name for
    /// organisation records.
    pub id: String,
    /// Primary language, when known.
    pub language: Option<String>,
    /// Domain, when known.
    pub domain: Option<Domain>,
    /// Difficulty tier, when known.
    pub difficulty: Option<Difficulty>,
    /// Descriptive tags; lowercased during construction.
    pub tags: Vec<String>,
    /// OpenRank score, when known.
    pub openrank: Option<f64>,
    /// Activity score, when known.
    pub activity: Option<f64>,
    /// Stargazer count, when known.
    pub stars: Option<u64>,
    /// Fork count, when known.
    pub forks: Option<u64>,
    /// Contributor count, when known.
    pub contributors: Option<u64>,
    /// Provenance; absent means generically sourced.
    pub provenance: Option<Provenance>,
    /// Marks an organisation rather than a single repository.
    pub is_organization: bool,
}

impl CandidateRecord {
    /// Construct a record carrying only an identity.
    #[must_use]
    pub fn named(id: impl Into<String>) -> Self {
        Self {
            id: id.into(),
            ..Self::default()
        }
    }
}

/// Accumulates records and materialises a fully-populated
/// [`CandidatePool`].
///
/// # Examples
/// ```
/// use reporec_ranker::{CandidateRecord, PoolBuilder};
///
/// let mut builder = PoolBuilder::new();
/// builder.push(CandidateRecord::named("pytorch/pytorch"));
/// let pool = builder.build();
/// let repo = pool.get("pytorch/pytorch").unwrap();
/// assert_eq!(repo.language, "Python");
/// ```
#[derive(Debug, Clone, Default)]
pub struct PoolBuilder {
    records: Vec<CandidateRecord>,
}

impl PoolBuilder {
    /// Construct an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Append one record.
    pub fn push(&mut self, record: CandidateRecord) {
        self.records.push(record);
    }

    /// Append many records.
    pub fn extend<I: IntoIterator<Item = CandidateRecord>>(&mut self, records: I) {
        self.records.extend(records);
    }

    /// Materialise the pool. Later records replace earlier ones that
    /// share an identity.
    #[must_use]
    pub fn build(self) -> CandidatePool {
        self.records.into_iter().map(candidate_from_record).collect()
    }
}

fn candidate_from_record(record: CandidateRecord) -> CandidateRepo {
    let (identity, attrs, is_aggregate) = if record.is_organization {
        let attrs = infer_org_attributes(&record.id);
        (format!("{}/top-repos", record.id), attrs, true)
    } else {
        let attrs = infer_attributes(&record.id);
        (record.id.clone(), attrs, false)
    };

    let language = record
        .language
        .filter(|language| !language.trim().is_empty())
        .unwrap_or(attrs.language);
    let domain = record.domain.unwrap_or(attrs.domain);
    let difficulty = record.difficulty.unwrap_or(Difficulty::Intermediate);
    let tags: Vec<String> = if record.tags.is_empty() {
        attrs.tags
    } else {
        record.tags.iter().map(|tag| tag.to_lowercase()).collect()
    };

    let defaults = QualityMetrics::default();
    let metrics = QualityMetrics {
        openrank: record.openrank.unwrap_or(defaults.openrank),
        activity: record.activity.unwrap_or(defaults.activity),
        stars: record.stars.unwrap_or(defaults.stars),
        forks: record.forks.unwrap_or(defaults.forks),
        contributors: record.contributors.unwrap_or(defaults.contributors),
    }
    .clamped();

    let mut repo = CandidateRepo::new(identity, language, domain, difficulty)
        .with_tags(tags)
        .with_metrics(metrics)
        .with_provenance(record.provenance.unwrap_or(Provenance::Generic));
    if is_aggregate {
        repo = repo.as_aggregate();
    }
    repo
}
