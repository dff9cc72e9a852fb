//! Line identity and travel direction.

use std::fmt;
use std::sync::Arc;

use serde::Serialize;

/// Name of a railway line (e.g. "Western", "Trans-Harbour").
///
/// Cheap to clone: the name is reference-counted. Line names compare
/// and hash by their text, so the same name constructed twice is equal.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct LineName(Arc<str>);

impl LineName {
    /// Create a line name.
    pub fn new(name: impl AsRef<str>) -> Self {
        Self(Arc::from(name.as_ref()))
    }

    /// Returns the name as a string slice.
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for LineName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for LineName {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

impl Serialize for LineName {
    fn serialize<S: serde::Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&self.0)
    }
}

/// Direction of travel along a line.
///
/// Suburban timetables are published per direction: "up" trains run
/// towards the city terminal, "down" trains away from it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum Direction {
    Up,
    Down,
}

impl Direction {
    /// Both directions, in a fixed order.
    pub const BOTH: [Direction; 2] = [Direction::Up, Direction::Down];
}

impl fmt::Display for Direction {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Direction::Up => f.write_str("UP"),
            Direction::Down => f.write_str("DOWN"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn equality_by_text() {
        let a = LineName::new("Western");
        let b = LineName::from("Western");
        let c = LineName::new("Central");
        assert_eq!(a, b);
        assert_ne!(a, c);
    }

    #[test]
    fn display() {
        assert_eq!(LineName::new("Harbour").to_string(), "Harbour");
        assert_eq!(Direction::Up.to_string(), "UP");
        assert_eq!(Direction::Down.to_string(), "DOWN");
    }

    #[test]
    fn hash_consistent_with_eq() {
        use std::collections::HashSet;
        let mut set = HashSet::new();
        set.insert(LineName::new("Western"));
        assert!(set.contains(&LineName::new("Western")));
        assert!(!set.contains(&LineName::new("Central")));
    }
}
