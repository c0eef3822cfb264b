//! Interest domains describing broad categories of open-source work.
//!
//! The enum offers compile-time safety for domain lookups. The variant
//! order is significant: it fixes the keyword-table enumeration order used
//! to break ties when the profile builder scores candidate domains.
//!
//! # Examples
//! ```
//! use reporec_core::Domain;
//!
//! assert_eq!(Domain::Ai.as_str(), "ai");
//! assert_eq!(Domain::Frontend.to_string(), "frontend");
//! ```

/// Broad category of open-source work a repository belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "kebab-case"))]
pub enum Domain {
    /// Machine learning and artificial intelligence.
    Ai,
    /// Data processing, analysis, and visualisation.
    Data,
    /// User interfaces and web frontends.
    Frontend,
    /// Servers, APIs, and service frameworks.
    Backend,
    /// Infrastructure, containers, and operations tooling.
    #[cfg_attr(feature = "serde", serde(rename = "devops"))]
    DevOps,
    /// Distributed storage and large-scale computation.
    BigData,
    /// Languages, runtimes, and low-level systems.
    Systems,
    /// Developer tools and general utilities.
    Tooling,
    /// Mobile and cross-platform applications.
    Mobile,
    /// Game development and engines.
    Gaming,
    /// Blockchain and web3 projects.
    Blockchain,
    /// Embedded systems and IoT.
    Embedded,
    /// Catch-all for repositories without a clearer home.
    General,
}

impl Domain {
    /// Return the domain as a lowercase `&str`.
    ///
    /// # Examples
    /// ```
    /// use reporec_core::Domain;
    ///
    /// assert_eq!(Domain::BigData.as_str(), "big-data");
    /// ```
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Ai => "ai",
            Self::Data => "data",
            Self::Frontend => "frontend",
            Self::Backend => "backend",
            Self::DevOps => "devops",
            Self::BigData => "big-data",
            Self::Systems => "systems",
            Self::Tooling => "tooling",
            Self::Mobile => "mobile",
            Self::Gaming => "gaming",
            Self::Blockchain => "blockchain",
            Self::Embedded => "embedded",
            Self::General => "general",
        }
    }
}

impl std::fmt::Display for Domain {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

impl std::str::FromStr for Domain {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "ai" => Ok(Self::Ai),
            "data" => Ok(Self::Data),
            "frontend" => Ok(Self::Frontend),
            "backend" => Ok(Self::Backend),
            "devops" => Ok(Self::DevOps),
            "big-data" => Ok(Self::BigData),
            "systems" => Ok(Self::Systems),
            "tooling" => Ok(Self::Tooling),
            "mobile" => Ok(Self::Mobile),
            "gaming" => Ok(Self::Gaming),
            "blockchain" => Ok(Self::Blockchain),
            "embedded" => Ok(Self::Embedded),
            "general" => Ok(Self::General),
            _ => Err(format!("unknown domain '{s}'")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn display_matches_as_str() {
        assert_eq!(Domain::DevOps.to_string(), Domain::DevOps.as_str());
    }

    #[test]
    fn parsing_round_trips() {
        for domain in [Domain::Ai, Domain::BigData, Domain::Embedded] {
            assert_eq!(Domain::from_str(domain.as_str()).unwrap(), domain);
        }
    }

    #[test]
    fn parsing_rejects_unknown() {
        let err = Domain::from_str("quantum").unwrap_err();
        assert!(err.contains("unknown domain"));
    }

    #[cfg(feature = "serde")]
    #[test]
    fn serde_names_match_as_str() {
        let json = serde_json::to_string(&Domain::DevOps).unwrap();
        assert_eq!(json, "\"devops\"");
        let json = serde_json::to_string(&Domain::BigData).unwrap();
        assert_eq!(json, "\"big-data\"");
    }
}
