use std::{fmt, str::FromStr};

use serde::{Deserialize, Serialize};

/// The kind of a displayed requirement identifier.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum Kind {
    /// Functional requirement.
    Fr,
    /// Non-functional requirement.
    Nfr,
    /// Use case.
    Uc,
}

impl Kind {
    /// Returns the upper-case prefix used when displaying identifiers.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        match self {
            Self::Fr => "FR",
            Self::Nfr => "NFR",
            Self::Uc => "UC",
        }
    }
}

impl fmt::Display for Kind {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Kind {
    type Err = InvalidKindError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "FR" => Ok(Self::Fr),
            "NFR" => Ok(Self::Nfr),
            "UC" => Ok(Self::Uc),
            _ => Err(InvalidKindError(s.to_string())),
        }
    }
}

/// Error returned when a string is not one of `FR`, `NFR` or `UC`.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid identifier kind '{0}': must be one of FR, NFR, UC")]
pub struct InvalidKindError(String);

/// A displayed identifier such as `NFR11`, `UC3` or `FR4.2`.
///
/// Identifiers are never stored in the catalogue. They are derived from the
/// zero-based position of a record plus a "before" offset, which counts the
/// records of the same kind numbered by an earlier part of the document.
///
/// No bounds checking is performed: a negative offset can produce `FR0` or
/// `FR-2`, which is rendered as-is.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Identifier {
    kind: Kind,
    number: i64,
    minor: Option<u32>,
}

impl Identifier {
    /// Create the identifier for the record at `index` (zero-based), shifted
    /// by `before`.
    ///
    /// ```
    /// use reqdoc::domain::{Identifier, Kind};
    ///
    /// assert_eq!(Identifier::from_position(Kind::Fr, 0, 3).to_string(), "FR4");
    /// assert_eq!(Identifier::from_position(Kind::Uc, 2, 0).to_string(), "UC3");
    /// ```
    #[must_use]
    #[allow(clippy::cast_possible_wrap)]
    pub const fn from_position(kind: Kind, index: usize, before: i64) -> Self {
        Self {
            kind,
            number: index as i64 + before + 1,
            minor: None,
        }
    }

    /// Attach a minor (sub-step) index, displayed after a `.`.
    #[must_use]
    pub const fn with_minor(mut self, minor: u32) -> Self {
        self.minor = Some(minor);
        self
    }

    /// Returns the kind of the identifier.
    #[must_use]
    pub const fn kind(&self) -> Kind {
        self.kind
    }

    /// Returns the displayed (one-based, offset) number.
    #[must_use]
    pub const fn number(&self) -> i64 {
        self.number
    }

    /// Returns the minor index, if any.
    #[must_use]
    pub const fn minor(&self) -> Option<u32> {
        self.minor
    }

    /// Returns the numeric part without the kind prefix, e.g. `4.2`.
    #[must_use]
    pub const fn code(&self) -> Code<'_> {
        Code { identifier: self }
    }
}

impl fmt::Display for Identifier {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}{}", self.kind, self.code())
    }
}

/// The numeric part of an [`Identifier`].
///
/// Returned by [`Identifier::code`].
#[derive(Debug, Clone, Copy)]
pub struct Code<'a> {
    identifier: &'a Identifier,
}

impl fmt::Display for Code<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        match self.identifier.minor {
            Some(minor) => write!(f, "{}.{minor}", self.identifier.number),
            None => write!(f, "{}", self.identifier.number),
        }
    }
}

/// Format the identifier of the record at `index` (zero-based).
///
/// Shorthand for [`Identifier::from_position`] followed by `to_string`.
#[must_use]
pub fn format_id(kind: Kind, index: usize, before: i64) -> String {
    Identifier::from_position(kind, index, before).to_string()
}

/// A cross-reference from a non-functional requirement to a functional
/// requirement (and optionally one of its sub-steps).
///
/// Serialized as a sequence of one or two numbers: `[major]` or
/// `[major, minor]`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "Vec<u32>", into = "Vec<u32>")]
pub struct FrRef {
    major: u32,
    minor: Option<u32>,
}

impl FrRef {
    /// A reference to the whole functional requirement at `major`
    /// (zero-based).
    #[must_use]
    pub const fn new(major: u32) -> Self {
        Self { major, minor: None }
    }

    /// A reference to sub-step `minor` of the functional requirement at
    /// `major` (zero-based).
    #[must_use]
    pub const fn with_minor(major: u32, minor: u32) -> Self {
        Self {
            major,
            minor: Some(minor),
        }
    }

    /// Returns the zero-based index of the functional requirement.
    #[must_use]
    pub const fn major(&self) -> u32 {
        self.major
    }

    /// Returns the sub-step, if any.
    #[must_use]
    pub const fn minor(&self) -> Option<u32> {
        self.minor
    }

    /// Resolve the displayed identifier given the number of functional
    /// requirements defined before this document.
    #[must_use]
    pub const fn identifier(&self, fr_before: i64) -> Identifier {
        let identifier = Identifier::from_position(Kind::Fr, self.major as usize, fr_before);
        match self.minor {
            Some(minor) => identifier.with_minor(minor),
            None => identifier,
        }
    }
}

/// Error returned when a serialized [`FrRef`] does not hold one or two
/// numbers.
#[derive(Debug, thiserror::Error, PartialEq, Eq)]
#[error("Invalid FR reference {0:?}: expected [major] or [major, minor]")]
pub struct InvalidFrRefError(Vec<u32>);

impl TryFrom<Vec<u32>> for FrRef {
    type Error = InvalidFrRefError;

    fn try_from(value: Vec<u32>) -> Result<Self, Self::Error> {
        match value.as_slice() {
            [major] => Ok(Self::new(*major)),
            [major, minor] => Ok(Self::with_minor(*major, *minor)),
            _ => Err(InvalidFrRefError(value)),
        }
    }
}

impl From<FrRef> for Vec<u32> {
    fn from(value: FrRef) -> Self {
        match value.minor {
            Some(minor) => vec![value.major, minor],
            None => vec![value.major],
        }
    }
}

#[cfg(test)]
mod tests {
    use test_case::test_case;

    use super::*;

    #[test_case(Kind::Fr, 0, 3, "FR4"; "fr with offset")]
    #[test_case(Kind::Nfr, 0, 10, "NFR11"; "nfr with offset")]
    #[test_case(Kind::Uc, 4, 0, "UC5"; "uc without offset")]
    #[test_case(Kind::Fr, 0, -3, "FR-2"; "negative offset propagates")]
    fn format_id_applies_offset(kind: Kind, index: usize, before: i64, expected: &str) {
        assert_eq!(format_id(kind, index, before), expected);
    }

    #[test]
    fn minor_index_is_appended_when_present() {
        let identifier = Identifier::from_position(Kind::Fr, 0, 3).with_minor(2);
        assert_eq!(identifier.to_string(), "FR4.2");
        assert_eq!(identifier.code().to_string(), "4.2");
    }

    #[test]
    fn no_separator_without_minor_index() {
        let identifier = Identifier::from_position(Kind::Fr, 1, 3);
        assert_eq!(identifier.code().to_string(), "5");
        assert_eq!(identifier.minor(), None);
    }

    #[test]
    fn fr_ref_resolves_against_offset() {
        assert_eq!(FrRef::new(0).identifier(3).to_string(), "FR4");
        assert_eq!(FrRef::with_minor(2, 7).identifier(3).to_string(), "FR6.7");
    }

    #[test]
    fn fr_ref_deserializes_from_sequence() {
        let refs: Vec<FrRef> = serde_yaml::from_str("[[0], [1, 4]]").unwrap();
        assert_eq!(refs, vec![FrRef::new(0), FrRef::with_minor(1, 4)]);
    }

    #[test]
    fn fr_ref_rejects_wrong_length() {
        assert!(serde_yaml::from_str::<FrRef>("[]").is_err());
        assert!(serde_yaml::from_str::<FrRef>("[1, 2, 3]").is_err());
    }

    #[test]
    fn kind_parses_upper_case_names_only() {
        assert_eq!("NFR".parse::<Kind>(), Ok(Kind::Nfr));
        assert_eq!(
            "nfr".parse::<Kind>().unwrap_err().to_string(),
            "Invalid identifier kind 'nfr': must be one of FR, NFR, UC"
        );
    }
}
