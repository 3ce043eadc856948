//! Chart version value type
//!
//! Charts carry a bare `major.minor.patch` triple. Prerelease builds are
//! tagged `-pre.<build>` on top of a base triple; the tag never
//! participates in ordering, so only the triple is modeled here.

use std::fmt;
use std::str::FromStr;

use crate::error::CoreError;

/// A `major.minor.patch` version triple.
///
/// Ordering is full lexicographic comparison on the triple: major,
/// then minor, then patch.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ChartVersion {
    pub major: u64,
    pub minor: u64,
    pub patch: u64,
}

impl ChartVersion {
    pub fn new(major: u64, minor: u64, patch: u64) -> Self {
        Self {
            major,
            minor,
            patch,
        }
    }

    /// Parse a bare `X.Y.Z` version string.
    pub fn parse(value: &str) -> Result<Self, CoreError> {
        let invalid = |message: &str| CoreError::InvalidVersion {
            value: value.to_string(),
            message: message.to_string(),
        };

        let mut parts = value.trim().split('.');
        let mut component = |name: &str| -> Result<u64, CoreError> {
            let part = parts
                .next()
                .ok_or_else(|| invalid(&format!("missing {} component", name)))?;
            part.parse::<u64>()
                .map_err(|_| invalid(&format!("{} component is not a number", name)))
        };

        let major = component("major")?;
        let minor = component("minor")?;
        let patch = component("patch")?;

        if parts.next().is_some() {
            return Err(invalid("expected exactly three components"));
        }

        Ok(Self {
            major,
            minor,
            patch,
        })
    }

    /// The next release version in this major.minor line.
    pub fn bump_patch(&self) -> Self {
        Self {
            major: self.major,
            minor: self.minor,
            patch: self.patch + 1,
        }
    }
}

impl fmt::Display for ChartVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}.{}.{}", self.major, self.minor, self.patch)
    }
}

impl FromStr for ChartVersion {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::parse(s)
    }
}

/// Compute the version string for the next build.
///
/// Prerelease builds reuse the highest published version verbatim and
/// append the build tag; release builds increment the patch component.
pub fn next_version(highest: ChartVersion, prerelease: bool, build_number: &str) -> String {
    if prerelease {
        format!("{}-pre.{}", highest, build_number)
    } else {
        highest.bump_patch().to_string()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_valid() {
        let v = ChartVersion::parse("1.2.3").unwrap();
        assert_eq!(v, ChartVersion::new(1, 2, 3));
        assert_eq!(v.to_string(), "1.2.3");
    }

    #[test]
    fn test_parse_trims_whitespace() {
        assert_eq!(
            ChartVersion::parse(" 0.12.7 ").unwrap(),
            ChartVersion::new(0, 12, 7)
        );
    }

    #[test]
    fn test_parse_rejects_malformed() {
        assert!(ChartVersion::parse("1.2").is_err());
        assert!(ChartVersion::parse("1.2.3.4").is_err());
        assert!(ChartVersion::parse("1.2.x").is_err());
        assert!(ChartVersion::parse("").is_err());
        assert!(ChartVersion::parse("1.2.-3").is_err());
    }

    #[test]
    fn test_ordering_is_lexicographic() {
        let v123 = ChartVersion::new(1, 2, 3);
        assert!(ChartVersion::new(1, 2, 4) > v123);
        assert!(ChartVersion::new(1, 3, 0) > v123);
        assert!(ChartVersion::new(2, 0, 0) > v123);
        // Higher patch does not outweigh a lower minor
        assert!(ChartVersion::new(1, 1, 99) < v123);
    }

    #[test]
    fn test_bump_patch() {
        assert_eq!(
            ChartVersion::new(1, 2, 3).bump_patch(),
            ChartVersion::new(1, 2, 4)
        );
    }

    #[test]
    fn test_next_version_release() {
        let highest = ChartVersion::new(1, 2, 5);
        assert_eq!(next_version(highest, false, "42"), "1.2.6");
    }

    #[test]
    fn test_next_version_prerelease() {
        let highest = ChartVersion::new(1, 2, 5);
        assert_eq!(next_version(highest, true, "42"), "1.2.5-pre.42");
        // Timestamped build ids pass through verbatim
        assert_eq!(
            next_version(highest, true, "20220629.4"),
            "1.2.5-pre.20220629.4"
        );
    }
}
