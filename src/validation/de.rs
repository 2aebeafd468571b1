//! Turning deserializer failures into located [`RawError`]s.

use serde_path_to_error::{Path, Segment as PathSegment};

use super::RawError;
use super::constants::{
    EXTRA_FORBIDDEN, INVALID_TYPE, INVALID_VALUE, JSON_INVALID, MISSING, VALUE_ERROR,
};
use crate::location::{Location, Segment, Source};

/// Data error at a tracked deserialization path.
pub(crate) fn data_error(source: Source, path: &Path, message: String) -> RawError {
    located(source, path.iter().map(path_segment), message)
}

/// Data error under `source` at the given segments. serde reports missing
/// and duplicated fields against their parent, so those are located at the
/// named field itself.
pub(crate) fn located<I>(source: Source, segments: I, message: String) -> RawError
where
    I: IntoIterator<Item = Option<Segment>>,
{
    let mut location: Vec<Option<Segment>> = vec![Some(Segment::key(source.as_str()))];
    location.extend(segments);

    let kind = match quoted_field(&message, "missing field `") {
        Some(name) => {
            location.push(Some(Segment::key(name)));
            MISSING
        }
        None => {
            if let Some(name) = quoted_field(&message, "duplicate field `") {
                location.push(Some(Segment::key(name)));
            }
            classify(&message)
        }
    };

    RawError::new(Location::new(location), message, kind)
}

/// Malformed JSON: located at `["body", offset]` where `offset` is the byte
/// position serde_json stopped at.
pub(crate) fn decode_error(body: &[u8], err: &serde_json::Error) -> RawError {
    let offset = decode_offset(body, err.line(), err.column());
    RawError::new(
        Location::root(Source::Body).with(offset),
        strip_position(err),
        JSON_INVALID,
    )
}

/// Convert serde_json's 1-based line/column into a 0-based byte offset,
/// clamped to the body length.
pub(crate) fn decode_offset(body: &[u8], line: usize, column: usize) -> usize {
    if line == 0 {
        return 0;
    }
    let line_start: usize = body
        .split(|b| *b == b'\n')
        .take(line - 1)
        .map(|l| l.len() + 1)
        .sum();
    (line_start + column.saturating_sub(1)).min(body.len())
}

/// serde_json appends " at line L column C" to its messages; the position is
/// already carried by the location.
pub(crate) fn strip_position(err: &serde_json::Error) -> String {
    let text = err.to_string();
    let suffix = format!(" at line {} column {}", err.line(), err.column());
    match text.strip_suffix(&suffix) {
        Some(message) => message.to_string(),
        None => text,
    }
}

fn path_segment(segment: &PathSegment) -> Option<Segment> {
    match segment {
        PathSegment::Seq { index } => Some(Segment::from(*index)),
        PathSegment::Map { key } => Some(Segment::key(key.as_str())),
        PathSegment::Enum { variant } => Some(Segment::key(variant.as_str())),
        PathSegment::Unknown => None,
    }
}

fn quoted_field<'a>(message: &'a str, prefix: &str) -> Option<&'a str> {
    message.strip_prefix(prefix)?.strip_suffix('`')
}

fn classify(message: &str) -> &'static str {
    if message.starts_with("unknown field") {
        EXTRA_FORBIDDEN
    } else if message.starts_with("invalid type") {
        INVALID_TYPE
    } else if message.starts_with("invalid value")
        || message.starts_with("invalid length")
        || message.starts_with("unknown variant")
        || message.starts_with("can not parse")
        || message.starts_with("invalid digit")
    {
        INVALID_VALUE
    } else {
        VALUE_ERROR
    }
}
