//! Error locations and their flat, display-ready field names.
//!
//! A location is the path the validation layer attaches to every error:
//! the request section it came from (`body`, `query`, `path`, `header`)
//! followed by field names and array indices. [`normalize`] turns that path
//! into the `field` string returned to API consumers, looking only at the
//! segments and never at the error message.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Marker segment for errors located in the request body.
pub const BODY: &str = "body";

/// One step of a location.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Segment {
    /// Array index or decode offset.
    Index(u64),
    /// Named field or request section.
    Key(String),
    /// Anything else a producer put in the path (negative or fractional
    /// numbers, booleans, objects).
    Other(Value),
}

impl Segment {
    pub fn key(name: impl Into<String>) -> Self {
        Self::Key(name.into())
    }

    pub fn index(idx: u64) -> Self {
        Self::Index(idx)
    }

    /// Whether this segment is an integer. Negative integers only show up
    /// through [`Segment::Other`] and still count.
    pub fn is_integer(&self) -> bool {
        match self {
            Self::Index(_) => true,
            Self::Key(_) => false,
            Self::Other(Value::Number(n)) => n.is_i64() || n.is_u64(),
            Self::Other(_) => false,
        }
    }

    fn is_key(&self, name: &str) -> bool {
        matches!(self, Self::Key(k) if k == name)
    }
}

impl fmt::Display for Segment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Index(i) => write!(f, "{i}"),
            Self::Key(k) => f.write_str(k),
            Self::Other(Value::String(s)) => f.write_str(s),
            Self::Other(v) => write!(f, "{v}"),
        }
    }
}

impl From<&str> for Segment {
    fn from(s: &str) -> Self {
        Self::Key(s.to_owned())
    }
}

impl From<String> for Segment {
    fn from(s: String) -> Self {
        Self::Key(s)
    }
}

impl From<u64> for Segment {
    fn from(i: u64) -> Self {
        Self::Index(i)
    }
}

impl From<usize> for Segment {
    fn from(i: usize) -> Self {
        Self::Index(i as u64)
    }
}

/// Request section an extractor reads from. Always the first segment of the
/// locations it produces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Source {
    Body,
    Query,
    Path,
    Header,
}

impl Source {
    pub fn as_str(&self) -> &'static str {
        match self {
            Source::Body => BODY,
            Source::Query => "query",
            Source::Path => "path",
            Source::Header => "header",
        }
    }
}

impl fmt::Display for Source {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Ordered path to the value an error refers to. `None` entries are null
/// markers; they are kept as produced and skipped by [`normalize`].
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Location(Vec<Option<Segment>>);

impl Location {
    pub fn new(segments: Vec<Option<Segment>>) -> Self {
        Self(segments)
    }

    /// Location rooted at a request section: `[source]`.
    pub fn root(source: Source) -> Self {
        Self(vec![Some(Segment::key(source.as_str()))])
    }

    pub fn push(&mut self, segment: impl Into<Segment>) {
        self.0.push(Some(segment.into()));
    }

    pub fn with(mut self, segment: impl Into<Segment>) -> Self {
        self.push(segment);
        self
    }

    pub fn segments(&self) -> &[Option<Segment>] {
        &self.0
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Display-ready field name, see [`normalize`].
    pub fn field(&self) -> String {
        normalize(&self.0)
    }
}

impl FromIterator<Option<Segment>> for Location {
    fn from_iter<I: IntoIterator<Item = Option<Segment>>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl FromIterator<Segment> for Location {
    fn from_iter<I: IntoIterator<Item = Segment>>(iter: I) -> Self {
        Self(iter.into_iter().map(Some).collect())
    }
}

/// Flatten a location into the `field` shown to API consumers.
///
/// - null markers are dropped first; nothing left gives `""`
/// - `["body"]` alone, or followed only by integers (a decode position inside
///   a malformed payload), gives `"body"`
/// - `["body", ...]` with at least one named segment gives the rest joined
///   with `.`, e.g. `["body", "items", 0, "name"]` -> `"items.0.name"`
/// - any other first segment is kept as a namespace prefix, e.g.
///   `["query", "limit"]` -> `"query.limit"`
pub fn normalize(location: &[Option<Segment>]) -> String {
    let cleaned: Vec<&Segment> = location.iter().flatten().collect();

    let Some((first, rest)) = cleaned.split_first() else {
        return String::new();
    };

    if first.is_key(BODY) {
        if rest.iter().all(|s| s.is_integer()) {
            return BODY.to_string();
        }
        return join(rest);
    }

    join(&cleaned)
}

fn join(segments: &[&Segment]) -> String {
    segments
        .iter()
        .map(|s| s.to_string())
        .collect::<Vec<_>>()
        .join(".")
}
