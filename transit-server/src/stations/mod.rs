//! Station lookup and free-text resolution.
//!
//! Requests name stations as codes ("CCG") or as text ("churchgate",
//! "marine lines"). The directory resolves both against the model,
//! preferring the most exact interpretation.

use std::collections::HashMap;

use crate::domain::{Station, StationCode};
use crate::network::NetworkModel;

/// Immutable index of the network's stations.
#[derive(Debug, Clone)]
pub struct StationDirectory {
    /// Sorted by code, so iteration order is stable.
    stations: Vec<Station>,
    by_code: HashMap<StationCode, usize>,
}

impl StationDirectory {
    /// Build the directory from a network model.
    pub fn from_model(model: &NetworkModel) -> Self {
        let mut stations = model.stations.clone();
        stations.sort_by_key(|s| s.code);
        let by_code = stations
            .iter()
            .enumerate()
            .map(|(i, s)| (s.code, i))
            .collect();
        Self { stations, by_code }
    }

    /// Look up a station by its exact code.
    pub fn by_code(&self, code: &StationCode) -> Option<&Station> {
        self.by_code.get(code).map(|&i| &self.stations[i])
    }

    /// Resolve free text to a single station.
    ///
    /// Tries, in order: station code, exact name, name substring, then
    /// token-prefix match (every query word prefixes some word of the
    /// name). All comparisons are case-insensitive. Returns `None`
    /// when nothing matches; the caller decides whether that is an
    /// empty result or an error.
    pub fn resolve(&self, query: &str) -> Option<&Station> {
        let trimmed = query.trim();
        if trimmed.is_empty() {
            return None;
        }

        if let Ok(code) = StationCode::parse_normalized(trimmed) {
            if let Some(station) = self.by_code(&code) {
                return Some(station);
            }
        }

        let needle = trimmed.to_lowercase();
        if let Some(station) = self
            .stations
            .iter()
            .find(|s| s.name.to_lowercase() == needle)
        {
            return Some(station);
        }
        if let Some(station) = self
            .stations
            .iter()
            .find(|s| s.name.to_lowercase().contains(&needle))
        {
            return Some(station);
        }
        self.stations
            .iter()
            .find(|s| tokens_prefix_match(&s.name, &needle))
    }

    /// All stations whose name or code matches the query, in code
    /// order, capped at `limit`.
    pub fn search(&self, query: &str, limit: usize) -> Vec<&Station> {
        let needle = query.trim().to_lowercase();
        if needle.is_empty() {
            return Vec::new();
        }
        self.stations
            .iter()
            .filter(|s| {
                s.code.as_str().to_lowercase().starts_with(&needle)
                    || s.name.to_lowercase().contains(&needle)
                    || tokens_prefix_match(&s.name, &needle)
            })
            .take(limit)
            .collect()
    }

    /// Number of stations in the directory.
    pub fn len(&self) -> usize {
        self.stations.len()
    }

    /// Returns true if the directory is empty.
    pub fn is_empty(&self) -> bool {
        self.stations.is_empty()
    }

    /// All stations in code order.
    pub fn iter(&self) -> impl Iterator<Item = &Station> {
        self.stations.iter()
    }
}

/// Every whitespace-separated query token prefixes some token of the
/// station name, case-insensitively.
fn tokens_prefix_match(name: &str, needle: &str) -> bool {
    let name = name.to_lowercase();
    let name_tokens: Vec<&str> = name.split_whitespace().collect();
    let mut query_tokens = needle.split_whitespace().peekable();
    if query_tokens.peek().is_none() {
        return false;
    }
    query_tokens.all(|q| name_tokens.iter().any(|t| t.starts_with(q)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::network::mumbai::mumbai;

    fn directory() -> StationDirectory {
        StationDirectory::from_model(&mumbai())
    }

    fn code(s: &str) -> StationCode {
        StationCode::parse(s).unwrap()
    }

    #[test]
    fn resolves_codes_case_insensitively() {
        let dir = directory();
        assert_eq!(dir.resolve("CCG").unwrap().code, code("CCG"));
        assert_eq!(dir.resolve("ccg").unwrap().code, code("CCG"));
        assert_eq!(dir.resolve(" ccg ").unwrap().code, code("CCG"));
    }

    #[test]
    fn resolves_exact_names() {
        let dir = directory();
        assert_eq!(dir.resolve("Churchgate").unwrap().code, code("CCG"));
        assert_eq!(dir.resolve("churchgate").unwrap().code, code("CCG"));
    }

    #[test]
    fn resolves_name_substrings() {
        let dir = directory();
        assert_eq!(dir.resolve("churchg").unwrap().code, code("CCG"));
    }

    #[test]
    fn exact_name_beats_substring() {
        let dir = directory();
        // "Dadar" is both an exact name and a substring of nothing
        // else that should win
        assert_eq!(dir.resolve("dadar").unwrap().code, code("DR"));
    }

    #[test]
    fn resolves_token_prefixes() {
        let dir = directory();
        // Substring match covers a contiguous prefix of the name
        assert_eq!(dir.resolve("marine lin").unwrap().code, code("MEL"));
        // Non-contiguous tokens fall through to prefix matching
        assert_eq!(dir.resolve("mar lines").unwrap().code, code("MEL"));
    }

    #[test]
    fn unknown_text_resolves_to_none() {
        let dir = directory();
        assert!(dir.resolve("atlantis").is_none());
        assert!(dir.resolve("").is_none());
        assert!(dir.resolve("   ").is_none());
    }

    #[test]
    fn search_caps_results() {
        let dir = directory();
        let all = dir.search("a", usize::MAX);
        assert!(all.len() > 5);
        let capped = dir.search("a", 5);
        assert_eq!(capped.len(), 5);
        // The cap keeps the head of the full result list
        for (a, b) in capped.iter().zip(&all) {
            assert_eq!(a.code, b.code);
        }
    }

    #[test]
    fn search_finds_by_code_prefix() {
        let dir = directory();
        let results = dir.search("ccg", 10);
        assert!(results.iter().any(|s| s.code == code("CCG")));
    }
}
