//! Station identifier types.

use std::borrow::Borrow;
use std::fmt;

use serde::{Deserialize, Serialize};

/// Separator between the display name and the line codes.
const LINE_SEPARATOR: char = '~';

/// Error returned when a station identifier does not have the
/// `"<display name>~<line codes>"` shape.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("malformed station identifier {id:?}: {reason}")]
pub struct MalformedStation {
    pub id: String,
    pub reason: &'static str,
}

/// A station identifier, e.g. `"Rajiv Chowk~BY"`.
///
/// The identifier is an opaque string token: two identifiers are equal iff
/// their content is equal. The graph accepts any string; the
/// `"<display name>~<line codes>"` structure is only checked when the line
/// membership is needed (see [`StationId::lines`]).
///
/// # Examples
///
/// ```
/// use metro_router::domain::StationId;
///
/// let rc = StationId::new("Rajiv Chowk~BY");
/// assert_eq!(rc.display_name().unwrap(), "Rajiv Chowk");
///
/// let lines = rc.lines().unwrap();
/// assert!(lines.contains('B'));
/// assert!(lines.contains('Y'));
///
/// // No separator
/// assert!(StationId::new("Rajiv Chowk").lines().is_err());
/// ```
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StationId(String);

impl StationId {
    /// Wrap a raw identifier.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }

    /// Split into display name and line-code suffix.
    fn split(&self) -> Result<(&str, &str), MalformedStation> {
        let (name, codes) = self
            .0
            .rsplit_once(LINE_SEPARATOR)
            .ok_or_else(|| MalformedStation {
                id: self.0.clone(),
                reason: "missing '~' separator",
            })?;

        if name.trim().is_empty() {
            return Err(MalformedStation {
                id: self.0.clone(),
                reason: "empty display name",
            });
        }

        Ok((name, codes))
    }

    /// The human-readable part before the `~`.
    pub fn display_name(&self) -> Result<&str, MalformedStation> {
        self.split().map(|(name, _)| name)
    }

    /// The set of lines this station is on.
    pub fn lines(&self) -> Result<LineSet, MalformedStation> {
        let (_, codes) = self.split()?;
        LineSet::parse(codes).map_err(|reason| MalformedStation {
            id: self.0.clone(),
            reason,
        })
    }
}

impl fmt::Debug for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationId({})", self.0)
    }
}

impl fmt::Display for StationId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl Borrow<str> for StationId {
    fn borrow(&self) -> &str {
        &self.0
    }
}

impl From<&str> for StationId {
    fn from(s: &str) -> Self {
        Self::new(s)
    }
}

impl From<String> for StationId {
    fn from(s: String) -> Self {
        Self(s)
    }
}

/// A set of single-letter line codes (`A`-`Z`), stored as a bitmask.
#[derive(Clone, Copy, Default, PartialEq, Eq, Hash)]
pub struct LineSet(u32);

impl LineSet {
    /// Parse a run of uppercase letters with no delimiter, e.g. `"BY"`.
    fn parse(codes: &str) -> Result<Self, &'static str> {
        if codes.is_empty() {
            return Err("no line codes after '~'");
        }

        let mut mask = 0u32;
        for b in codes.bytes() {
            if !b.is_ascii_uppercase() {
                return Err("line codes must be uppercase ASCII letters A-Z");
            }
            mask |= 1u32 << (b - b'A');
        }

        Ok(Self(mask))
    }

    /// Whether the set contains the given line code.
    pub fn contains(&self, code: char) -> bool {
        code.is_ascii_uppercase() && self.0 & (1u32 << (code as u8 - b'A')) != 0
    }

    /// Whether the two sets have at least one line in common.
    pub fn shares_line(&self, other: &LineSet) -> bool {
        self.0 & other.0 != 0
    }

    /// Number of distinct lines.
    pub fn len(&self) -> usize {
        self.0.count_ones() as usize
    }

    /// Returns true if the set has no lines.
    pub fn is_empty(&self) -> bool {
        self.0 == 0
    }

    /// Iterate the line codes in alphabetical order.
    pub fn codes(&self) -> impl Iterator<Item = char> + '_ {
        (0u8..26)
            .filter(|bit| self.0 & (1u32 << *bit) != 0)
            .map(|bit| (b'A' + bit) as char)
    }
}

impl fmt::Debug for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "LineSet({})", self)
    }
}

impl fmt::Display for LineSet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for code in self.codes() {
            write!(f, "{code}")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn display_name_and_lines() {
        let id = StationId::new("Janak Puri West~BO");
        assert_eq!(id.display_name().unwrap(), "Janak Puri West");

        let lines = id.lines().unwrap();
        assert_eq!(lines.len(), 2);
        assert!(lines.contains('B'));
        assert!(lines.contains('O'));
        assert!(!lines.contains('Y'));
    }

    #[test]
    fn reject_missing_separator() {
        let err = StationId::new("Saket").lines().unwrap_err();
        assert_eq!(err.reason, "missing '~' separator");
    }

    #[test]
    fn reject_empty_codes() {
        let err = StationId::new("Saket~").lines().unwrap_err();
        assert_eq!(err.reason, "no line codes after '~'");
    }

    #[test]
    fn reject_lowercase_codes() {
        assert!(StationId::new("Saket~y").lines().is_err());
        assert!(StationId::new("Saket~Y1").lines().is_err());
    }

    #[test]
    fn reject_empty_name() {
        let err = StationId::new("~Y").display_name().unwrap_err();
        assert_eq!(err.reason, "empty display name");
    }

    #[test]
    fn shares_line() {
        let rc = StationId::new("Rajiv Chowk~BY").lines().unwrap();
        let nd = StationId::new("New Delhi~YO").lines().unwrap();
        let vaishali = StationId::new("Vaishali~B").lines().unwrap();
        let igi = StationId::new("IGI Airport~O").lines().unwrap();

        assert!(rc.shares_line(&nd));
        assert!(rc.shares_line(&vaishali));
        assert!(!vaishali.shares_line(&igi));
    }

    #[test]
    fn line_set_display_is_sorted() {
        let lines = StationId::new("X~YB").lines().unwrap();
        assert_eq!(lines.to_string(), "BY");
        assert_eq!(lines.codes().collect::<Vec<_>>(), vec!['B', 'Y']);
    }

    #[test]
    fn equality_is_by_content() {
        assert_eq!(StationId::new("Saket~Y"), StationId::from("Saket~Y"));
        assert_ne!(StationId::new("Saket~Y"), StationId::new("Saket~B"));
    }

    #[test]
    fn debug_and_display() {
        let id = StationId::new("AIIMS~Y");
        assert_eq!(format!("{}", id), "AIIMS~Y");
        assert_eq!(format!("{:?}", id), "StationId(AIIMS~Y)");
    }
}
