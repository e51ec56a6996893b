//! Path pattern parsing and matching.
//!
//! # Responsibilities
//! - Parse a path pattern into literal and `:named` parameter segments
//! - Match a concrete path against a pattern (case-sensitive)
//! - Extract parameter values as verbatim strings
//!
//! # Design Decisions
//! - Parsing is total: any string yields a pattern, no error path
//! - Matching is pure; no-match is `None`, never a panic
//! - Segment counts must be equal (no prefix or wildcard matching)
//! - Parameter values are opaque; validation belongs to the consumer

use std::collections::HashMap;

/// Parameter values extracted from a matched path, keyed by parameter name.
pub type Params = HashMap<String, String>;

/// One segment of a path pattern.
#[derive(Debug, Clone, PartialEq, Eq)]
enum Segment {
    /// Must equal the corresponding path segment exactly.
    Literal(String),
    /// Matches any non-empty segment and captures it under this name.
    Param(String),
}

/// A parsed path pattern such as `/edit/:id`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PathPattern {
    segments: Vec<Segment>,
}

impl PathPattern {
    /// Parse a pattern string. A segment starting with `:` is a named
    /// parameter; everything else is a literal. `/` parses to zero segments.
    pub fn parse(pattern: &str) -> Self {
        let segments = pattern
            .split('/')
            .filter(|s| !s.is_empty())
            .map(|s| match s.strip_prefix(':') {
                Some(name) if !name.is_empty() => Segment::Param(name.to_string()),
                _ => Segment::Literal(s.to_string()),
            })
            .collect();
        Self { segments }
    }

    /// Match a concrete path against this pattern.
    ///
    /// Returns the extracted parameters on a match (empty map for
    /// parameter-less patterns), or `None` if the path does not match.
    pub fn matches(&self, path: &str) -> Option<Params> {
        let parts: Vec<&str> = path.split('/').filter(|s| !s.is_empty()).collect();
        if parts.len() != self.segments.len() {
            return None;
        }

        let mut params = Params::new();
        for (segment, part) in self.segments.iter().zip(parts) {
            match segment {
                Segment::Literal(lit) if lit == part => {}
                Segment::Literal(_) => return None,
                Segment::Param(name) => {
                    params.insert(name.clone(), part.to_string());
                }
            }
        }
        Some(params)
    }

    /// Names of the parameters this pattern captures, in order.
    pub fn param_names(&self) -> Vec<&str> {
        self.segments
            .iter()
            .filter_map(|s| match s {
                Segment::Param(name) => Some(name.as_str()),
                Segment::Literal(_) => None,
            })
            .collect()
    }
}
