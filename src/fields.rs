//! Generic field access into opaque resources
//!
//! The YouTube API returns deeply nested JSON; callers usually want one
//! scalar out of it (`snippet.thumbnails.default.url`, `statistics.viewCount`,
//! ...). Rather than one bespoke getter per field, a [`FieldPath`] names the
//! location and [`get_field`] walks it once, folding every way the path can
//! fail to resolve (absent key, wrong type, index out of range) into `None`.

use crate::types::Resource;
use serde_json::Value;
use std::fmt;

/// One step of a field path
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Segment {
    /// Object key
    Key(String),
    /// Array index
    Index(usize),
}

/// An ordered sequence of keys and indices locating a value within a
/// [`Resource`]
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldPath(Vec<Segment>);

impl FieldPath {
    /// Build a path from explicit segments
    pub fn new(segments: Vec<Segment>) -> Self {
        Self(segments)
    }

    /// Parse a dot-notation path, e.g. `"snippet.thumbnails.default.url"`
    /// or `"items.0.id"`. Purely numeric segments become array indices.
    pub fn parse(path: &str) -> Self {
        let segments = path
            .split('.')
            .filter(|part| !part.is_empty())
            .map(|part| match part.parse::<usize>() {
                Ok(index) => Segment::Index(index),
                Err(_) => Segment::Key(part.to_string()),
            })
            .collect();
        Self(segments)
    }

    /// The path's segments in order
    pub fn segments(&self) -> &[Segment] {
        &self.0
    }
}

impl From<&str> for FieldPath {
    fn from(path: &str) -> Self {
        Self::parse(path)
    }
}

impl fmt::Display for FieldPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ".")?;
            }
            match segment {
                Segment::Key(key) => write!(f, "{key}")?,
                Segment::Index(index) => write!(f, "{index}")?,
            }
        }
        Ok(())
    }
}

/// Walk a field path into a resource
///
/// Never errors: an absent key, a wrong intermediate type, or an
/// out-of-range index all yield `None`.
pub fn get_field<'a>(resource: &'a Resource, path: &FieldPath) -> Option<&'a Value> {
    let mut current = resource;
    for segment in path.segments() {
        current = match segment {
            Segment::Key(key) => current.as_object()?.get(key)?,
            Segment::Index(index) => current.as_array()?.get(*index)?,
        };
    }
    Some(current)
}

/// Get a string field
pub fn get_str<'a>(resource: &'a Resource, path: &FieldPath) -> Option<&'a str> {
    get_field(resource, path)?.as_str()
}

/// Get a string field as an owned `String`
pub fn get_string(resource: &Resource, path: &FieldPath) -> Option<String> {
    get_str(resource, path).map(String::from)
}

/// Get an unsigned integer field
///
/// The API serializes counters as JSON strings (`"viewCount": "1234"`), so
/// both numbers and numeric strings are accepted.
pub fn get_u64(resource: &Resource, path: &FieldPath) -> Option<u64> {
    match get_field(resource, path)? {
        Value::Number(n) => n.as_u64(),
        Value::String(s) => s.parse().ok(),
        _ => None,
    }
}

/// Get a boolean field
pub fn get_bool(resource: &Resource, path: &FieldPath) -> Option<bool> {
    get_field(resource, path)?.as_bool()
}
