use serde::Serialize;
use std::fmt;

/// Exact, case-sensitive containment. An empty needle always matches.
pub fn contains(haystack: &str, needle: &str) -> bool {
    haystack.contains(needle)
}

#[derive(Serialize, Debug, Clone, PartialEq, Eq)]
pub struct SubstringReport {
    pub haystack: String,
    pub needle: String,
    pub found: bool,
    /// Byte offset of the first match
    pub position: Option<usize>,
}

impl SubstringReport {
    pub fn message(&self) -> String {
        if self.found {
            format!("'{}' contains '{}'", self.haystack, self.needle)
        } else {
            format!("'{}' does not contain '{}'", self.haystack, self.needle)
        }
    }
}

impl fmt::Display for SubstringReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.message())
    }
}

pub fn check(haystack: &str, needle: &str) -> SubstringReport {
    let position = haystack.find(needle);
    log::debug!("Searching for '{}': {:?}", needle, position);
    SubstringReport {
        haystack: haystack.to_string(),
        needle: needle.to_string(),
        found: position.is_some(),
        position,
    }
}
