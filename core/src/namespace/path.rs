//! Slash-joined namespace paths.
//!
//! Parses paths like `intel/mock/First/0/Uno` into segment sequences,
//! formats them back, and matches wildcard namespaces (`root/First/*/Uno`)
//! against concrete ones.

use std::fmt;

use serde::{Deserialize, Serialize};


/// Separator between namespace segments.
pub const SEPARATOR: char = '/';

/// Segment standing in for any index or key of a container.
pub const WILDCARD: &str = "*";


/// A sequence of non-empty segments, root to leaf.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct Namespace {
    segments: Vec<String>,
}

impl Namespace {
    /// Build from segments. Empty segments are rejected.
    pub fn new<S: Into<String>>(segments: impl IntoIterator<Item = S>) -> Result<Self, String> {
        let segments: Vec<String> = segments.into_iter().map(Into::into).collect();
        if segments.iter().any(|s| s.is_empty()) {
            return Err("empty segment in namespace".to_string());
        }
        Ok(Namespace { segments })
    }

    /// Parse `root/First/0/Uno`. A single leading separator is accepted.
    pub fn parse(input: &str) -> Result<Self, String> {
        let input = input.trim();
        let body = input.strip_prefix(SEPARATOR).unwrap_or(input);
        if body.is_empty() {
            return Err("empty namespace".to_string());
        }
        let mut segments = Vec::new();
        for part in body.split(SEPARATOR) {
            if part.is_empty() {
                return Err(format!("empty segment in namespace '{}'", input));
            }
            segments.push(part.to_string());
        }
        Ok(Namespace { segments })
    }

    pub fn segments(&self) -> &[String] {
        &self.segments
    }

    pub fn len(&self) -> usize {
        self.segments.len()
    }

    pub fn is_empty(&self) -> bool {
        self.segments.is_empty()
    }

    /// True if any segment is the wildcard.
    pub fn is_pattern(&self) -> bool {
        self.segments.iter().any(|s| s == WILDCARD)
    }

    /// Segments after `prefix`, or `None` if this namespace does not start
    /// with it.
    pub fn strip_prefix(&self, prefix: &Namespace) -> Option<&[String]> {
        self.segments.strip_prefix(prefix.segments.as_slice())
    }

    /// Match a concrete namespace against this one, `*` matching exactly
    /// one segment.
    pub fn matches(&self, concrete: &Namespace) -> bool {
        self.segments.len() == concrete.segments.len()
            && self
                .segments
                .iter()
                .zip(&concrete.segments)
                .all(|(p, c)| p == WILDCARD || p == c)
    }

    /// Format back to the slash-joined string.
    pub fn to_path(&self) -> String {
        self.segments.join("/")
    }
}

impl fmt::Display for Namespace {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.to_path())
    }
}


/// Append `segment` to a slash-joined `path`. An empty path yields the
/// segment alone; a trailing separator on `path` is not doubled.
pub fn join(path: &str, segment: &str) -> String {
    let path = path.trim_end_matches(SEPARATOR);
    if path.is_empty() {
        segment.to_string()
    } else {
        format!("{}{}{}", path, SEPARATOR, segment)
    }
}

/// Number of segments in a slash-joined path.
pub fn depth(path: &str) -> usize {
    path.split(SEPARATOR).filter(|s| !s.is_empty()).count()
}


// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn parse_simple() {
        let ns = Namespace::parse("root/First/0/Uno").unwrap();
        assert_eq!(ns.len(), 4);
        assert_eq!(ns.segments()[2], "0");
        assert!(!ns.is_pattern());
    }

    #[test]
    fn parse_leading_separator() {
        let ns = Namespace::parse("/intel/mock/foo").unwrap();
        assert_eq!(ns.segments(), ["intel", "mock", "foo"]);
    }

    #[test]
    fn parse_rejects_empty() {
        assert!(Namespace::parse("").is_err());
        assert!(Namespace::parse("/").is_err());
        assert!(Namespace::parse("a//b").is_err());
        assert!(Namespace::parse("a/b/").is_err());
    }

    #[test]
    fn new_rejects_empty_segment() {
        assert!(Namespace::new(["a", ""]).is_err());
        assert!(Namespace::new(["a", "b"]).is_ok());
    }

    #[test]
    fn round_trip_display() {
        let input = "root/First/*/Dos/*/Alpha";
        let ns = Namespace::parse(input).unwrap();
        assert_eq!(ns.to_string(), input);
        assert!(ns.is_pattern());
    }

    #[test]
    fn strip_prefix_segments() {
        let ns = Namespace::parse("root/data/data_three/nested_data_one").unwrap();
        let prefix = Namespace::parse("root/data").unwrap();
        assert_eq!(ns.strip_prefix(&prefix).unwrap(), ["data_three", "nested_data_one"]);
        let other = Namespace::parse("other").unwrap();
        assert!(ns.strip_prefix(&other).is_none());
    }

    #[test]
    fn wildcard_matches_one_segment() {
        let pattern = Namespace::parse("root/First/*/Uno").unwrap();
        assert!(pattern.matches(&Namespace::parse("root/First/2/Uno").unwrap()));
        assert!(pattern.matches(&Namespace::parse("root/First/key/Uno").unwrap()));
        assert!(!pattern.matches(&Namespace::parse("root/First/2/Dos").unwrap()));
        assert!(!pattern.matches(&Namespace::parse("root/First/2/3/Uno").unwrap()));
    }

    #[test]
    fn literal_matches_itself() {
        let ns = Namespace::parse("root/Bar").unwrap();
        assert!(ns.matches(&ns));
    }

    #[test]
    fn join_paths() {
        assert_eq!(join("root", "Bar"), "root/Bar");
        assert_eq!(join("root/", "Bar"), "root/Bar");
        assert_eq!(join("", "Bar"), "Bar");
    }

    #[test]
    fn depth_counts_segments() {
        assert_eq!(depth("root"), 1);
        assert_eq!(depth("root/First/*/Dos"), 4);
        assert_eq!(depth(""), 0);
    }
}
