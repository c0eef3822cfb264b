//! User preference profiles: per-skill strengths, ordered domain
//! interests, experience level, and per-user score multipliers.
//!
//! Profiles are created once per recommendation request and are immutable
//! afterwards. The validating constructor keeps the invariants the scorer
//! relies on: a non-empty domain list, lowercase skill tokens with
//! strengths in `[0.0, 1.0]`, and positive, finite weight multipliers.

use std::collections::HashMap;

use thiserror::Error;

use crate::Domain;

/// Self-reported experience tier used for difficulty matching.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "lowercase"))]
pub enum ExperienceLevel {
    /// New to open-source contribution.
    Beginner,
    /// Comfortable with everyday contribution workflows.
    Intermediate,
    /// Experienced maintainer or heavy contributor.
    Advanced,
}

impl ExperienceLevel {
    /// Return the level as a lowercase `&str`.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Beginner => "beginner",
            Self::Intermediate => "intermediate",
            Self::Advanced => "advanced",
        }
    }
}

impl std::fmt::Display for ExperienceLevel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for ExperienceLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "beginner" => Ok(Self::Beginner),
            "intermediate" => Ok(Self::Intermediate),
            "advanced" => Ok(Self::Advanced),
            _ => Err(format!("unknown experience level '{s}'")),
        }
    }
}

/// Per-user multipliers applied to the scorer's term weights.
///
/// Nominally centred at `1.0` with per-user variance drawn by the profile
/// builder. All three values must be positive and finite.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ProfileWeights {
    /// Multiplier applied to the skill-match term.
    pub experience: f64,
    /// Multiplier applied to the domain-match term.
    pub contribution: f64,
    /// Multiplier applied to the quality term.
    pub activity: f64,
}

impl ProfileWeights {
    /// Validate the weights and return a copy.
    ///
    /// # Errors
    /// Returns [`UserProfileError::InvalidWeights`] when any value is not
    /// finite or not strictly positive.
    pub fn validate(self) -> Result<Self, UserProfileError> {
        if self.is_valid() {
            Ok(self)
        } else {
            Err(UserProfileError::InvalidWeights)
        }
    }

    const fn is_valid(self) -> bool {
        self.has_finite_values() && self.has_positive_values()
    }

    const fn has_finite_values(self) -> bool {
        self.experience.is_finite() && self.contribution.is_finite() && self.activity.is_finite()
    }

    const fn has_positive_values(self) -> bool {
        self.experience > 0.0 && self.contribution > 0.0 && self.activity > 0.0
    }
}

impl Default for ProfileWeights {
    fn default() -> Self {
        Self {
            experience: 1.0,
            contribution: 1.0,
            activity: 1.0,
        }
    }
}

/// Errors returned by [`UserProfile::new`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum UserProfileError {
    /// The domain list was empty.
    #[error("profile must list at least one domain")]
    NoDomains,
    /// A skill token contained uppercase characters.
    #[error("skill token '{0}' must be lowercase")]
    SkillNotLowercase(String),
    /// A skill strength fell outside `[0.0, 1.0]` or was not finite.
    #[error("skill strength for '{0}' must be a finite value in 0.0..=1.0")]
    InvalidSkillStrength(String),
    /// A weight multiplier was non-positive or not finite.
    #[error("profile weights must be finite and strictly positive")]
    InvalidWeights,
}

/// A user's inferred preferences for candidate matching.
///
/// The first entry of `domains` is the *core domain*: the single most
/// significant interest, used by the diversity selector as its priority
/// tie-break.
///
/// # Examples
/// ```
/// use std::collections::HashMap;
/// use reporec_core::{Domain, ExperienceLevel, ProfileWeights, UserProfile};
///
/// # fn main() -> Result<(), reporec_core::UserProfileError> {
/// let skills = HashMap::from([("rust".to_owned(), 0.9)]);
/// let profile = UserProfile::new(
///     skills,
///     vec![Domain::Systems, Domain::Backend],
///     ExperienceLevel::Advanced,
///     ProfileWeights::default(),
/// )?;
/// assert_eq!(profile.core_domain(), Domain::Systems);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct UserProfile {
    skills: HashMap<String, f64>,
    domains: Vec<Domain>,
    experience: ExperienceLevel,
    weights: ProfileWeights,
}

impl UserProfile {
    /// Validate and construct a [`UserProfile`].
    ///
    /// # Errors
    /// Returns [`UserProfileError`] when the domain list is empty, a skill
    /// token is not lowercase, a strength lies outside `[0.0, 1.0]`, or a
    /// weight multiplier is non-positive.
    pub fn new(
        skills: HashMap<String, f64>,
        domains: Vec<Domain>,
        experience: ExperienceLevel,
        weights: ProfileWeights,
    ) -> Result<Self, UserProfileError> {
        if domains.is_empty() {
            return Err(UserProfileError::NoDomains);
        }
        for (token, strength) in &skills {
            if token.chars().any(|c| c.is_ascii_uppercase()) {
                return Err(UserProfileError::SkillNotLowercase(token.clone()));
            }
            if !strength.is_finite() || !(0.0..=1.0).contains(strength) {
                return Err(UserProfileError::InvalidSkillStrength(token.clone()));
            }
        }
        let weights = weights.validate()?;
        Ok(Self {
            skills,
            domains,
            experience,
            weights,
        })
    }

    /// Skill tokens mapped to strengths in `[0.0, 1.0]`.
    #[must_use]
    pub const fn skills(&self) -> &HashMap<String, f64> {
        &self.skills
    }

    /// Ordered domain interests; the first entry is the core domain.
    #[must_use]
    pub fn domains(&self) -> &[Domain] {
        &self.domains
    }

    /// The highest-priority domain interest.
    #[must_use]
    pub fn core_domain(&self) -> Domain {
        self.domains.first().copied().unwrap_or(Domain::General)
    }

    /// The user's experience tier.
    #[must_use]
    pub const fn experience(&self) -> ExperienceLevel {
        self.experience
    }

    /// Per-user score multipliers.
    #[must_use]
    pub const fn weights(&self) -> ProfileWeights {
        self.weights
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    fn skills(entries: &[(&str, f64)]) -> HashMap<String, f64> {
        entries
            .iter()
            .map(|&(token, strength)| (token.to_owned(), strength))
            .collect()
    }

    #[rstest]
    fn profile_requires_domains() {
        let result = UserProfile::new(
            skills(&[("rust", 0.8)]),
            Vec::new(),
            ExperienceLevel::Beginner,
            ProfileWeights::default(),
        );
        assert_eq!(result.unwrap_err(), UserProfileError::NoDomains);
    }

    #[rstest]
    fn profile_rejects_uppercase_skill() {
        let result = UserProfile::new(
            skills(&[("Rust", 0.8)]),
            vec![Domain::Systems],
            ExperienceLevel::Beginner,
            ProfileWeights::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            UserProfileError::SkillNotLowercase(_)
        ));
    }

    #[rstest]
    #[case(-0.1)]
    #[case(1.1)]
    #[case(f64::NAN)]
    fn profile_rejects_out_of_range_strength(#[case] strength: f64) {
        let result = UserProfile::new(
            skills(&[("rust", strength)]),
            vec![Domain::Systems],
            ExperienceLevel::Beginner,
            ProfileWeights::default(),
        );
        assert!(matches!(
            result.unwrap_err(),
            UserProfileError::InvalidSkillStrength(_)
        ));
    }

    #[rstest]
    #[case(0.0)]
    #[case(1.0)]
    fn profile_accepts_boundary_strengths(#[case] strength: f64) {
        let result = UserProfile::new(
            skills(&[("rust", strength)]),
            vec![Domain::Systems],
            ExperienceLevel::Beginner,
            ProfileWeights::default(),
        );
        assert!(result.is_ok());
    }

    #[rstest]
    fn weights_reject_zero_multiplier() {
        let weights = ProfileWeights {
            experience: 0.0,
            contribution: 1.0,
            activity: 1.0,
        };
        assert_eq!(
            weights.validate().unwrap_err(),
            UserProfileError::InvalidWeights
        );
    }

    #[rstest]
    fn core_domain_is_first_listed() {
        let profile = UserProfile::new(
            skills(&[("go", 0.7)]),
            vec![Domain::DevOps, Domain::Backend],
            ExperienceLevel::Intermediate,
            ProfileWeights::default(),
        )
        .unwrap();
        assert_eq!(profile.core_domain(), Domain::DevOps);
    }
}
