//! Station code types and the station record.

use std::fmt;

use serde::Serialize;

use super::{LatLng, LineName};

/// Error returned when parsing an invalid station code.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("invalid station code: {reason}")]
pub struct InvalidStationCode {
    reason: &'static str,
}

/// A valid suburban-network station code.
///
/// Station codes are 2 to 5 uppercase ASCII letters (e.g. `DR`, `CSMT`,
/// `KURLA`). This type guarantees that any `StationCode` value is valid
/// by construction, and is `Copy` so it can be used freely as a map key
/// during search.
///
/// # Examples
///
/// ```
/// use transit_server::domain::StationCode;
///
/// let dadar = StationCode::parse("DR").unwrap();
/// assert_eq!(dadar.as_str(), "DR");
///
/// // Lowercase is rejected by `parse`, accepted by `parse_normalized`
/// assert!(StationCode::parse("dr").is_err());
/// assert_eq!(StationCode::parse_normalized("dr").unwrap(), dadar);
///
/// // Wrong length is rejected
/// assert!(StationCode::parse("A").is_err());
/// assert!(StationCode::parse("TOOLONG").is_err());
/// ```
#[derive(Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct StationCode {
    bytes: [u8; 5],
    len: u8,
}

impl StationCode {
    /// Parse a station code from a string.
    ///
    /// The input must be 2 to 5 uppercase ASCII letters.
    pub fn parse(s: &str) -> Result<Self, InvalidStationCode> {
        let raw = s.as_bytes();

        if raw.len() < 2 || raw.len() > 5 {
            return Err(InvalidStationCode {
                reason: "must be 2 to 5 characters",
            });
        }

        for &b in raw {
            if !b.is_ascii_uppercase() {
                return Err(InvalidStationCode {
                    reason: "must be uppercase ASCII letters A-Z",
                });
            }
        }

        let mut bytes = [0u8; 5];
        bytes[..raw.len()].copy_from_slice(raw);

        Ok(StationCode {
            bytes,
            len: raw.len() as u8,
        })
    }

    /// Parse a station code, uppercasing and trimming the input first.
    ///
    /// Convenience for user-supplied input such as query parameters.
    pub fn parse_normalized(s: &str) -> Result<Self, InvalidStationCode> {
        Self::parse(&s.trim().to_ascii_uppercase())
    }

    /// Returns the station code as a string slice.
    pub fn as_str(&self) -> &str {
        // Only ASCII uppercase letters are ever stored
        std::str::from_utf8(&self.bytes[..self.len as usize]).unwrap()
    }
}

impl fmt::Debug for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "StationCode({})", self.as_str())
    }
}

impl fmt::Display for StationCode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl Serialize for StationCode {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(self.as_str())
    }
}

/// A station in the network model.
///
/// Stations are static configuration data: they are defined once at
/// startup and never mutated. A station serving two or more lines is
/// *eligible* to be an interchange, but transfer edges only exist where
/// an interchange is explicitly declared in the network model.
#[derive(Debug, Clone)]
pub struct Station {
    /// Unique station code.
    pub code: StationCode,

    /// Display name.
    pub name: String,

    /// Lines this station serves.
    pub lines: Vec<LineName>,

    /// Geographic position, used only for distance-derived edge
    /// weighting at graph-build time.
    pub coordinates: Option<LatLng>,

    /// Fare zone (1..=3). `None` is treated as zone 1.
    pub zone: Option<u8>,

    /// Distance from the line terminal in kilometres (informational).
    pub distance_from_terminal: u32,
}

impl Station {
    /// Returns the fare zone, defaulting to 1 when unset.
    pub fn zone_or_default(&self) -> u8 {
        self.zone.unwrap_or(1)
    }

    /// Returns true if this station serves the given line.
    pub fn serves(&self, line: &LineName) -> bool {
        self.lines.iter().any(|l| l == line)
    }
}


#[cfg(test)]
mod proptests {
    use super::*;
    use proptest::prelude::*;

    proptest! {
        /// Roundtrip: parse then as_str returns the original
        #[test]
        fn roundtrip(s in "[A-Z]{2,5}") {
            let code = StationCode::parse(&s).unwrap();
            prop_assert_eq!(code.as_str(), s.as_str());
        }

        /// Lowercase input is always rejected by `parse`
        #[test]
        fn lowercase_rejected(s in "[a-z]{2,5}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }

        /// `parse_normalized` agrees with `parse` on uppercased input
        #[test]
        fn normalized_agrees(s in "[a-z]{2,5}") {
            let normalized = StationCode::parse_normalized(&s).unwrap();
            let upper = StationCode::parse(&s.to_ascii_uppercase()).unwrap();
            prop_assert_eq!(normalized, upper);
        }

        /// Wrong-length strings are always rejected
        #[test]
        fn wrong_length_rejected(s in "[A-Z]{0,1}|[A-Z]{6,10}") {
            prop_assert!(StationCode::parse(&s).is_err());
        }
    }
}
