//! Dotted path drilling into JSON documents.
//!
//! A path is a `.` separated list of segments, each either `key` or
//! `key[index]`, e.g. `route.stays` or `location[0]`. Empty segments are
//! ignored, so the empty path resolves to the root itself.

use std::{fmt, str::FromStr};

use serde_json::Value;

use crate::{json_type_name, GeostayError, GeostayResult};

/// One `key` or `key[index]` segment.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeySpec {
    pub key: String,
    pub index: Option<usize>,
}

impl FromStr for KeySpec {
    type Err = GeostayError;

    fn from_str(segment: &str) -> Result<Self, Self::Err> {
        let invalid = || GeostayError::InvalidSegment(segment.to_string());

        let (key, index) = match segment.split_once('[') {
            Some((key, rest)) => {
                let digits = rest.strip_suffix(']').ok_or_else(invalid)?;
                if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
                    return Err(invalid());
                }
                (key, Some(digits.parse::<usize>().map_err(|_| invalid())?))
            }
            None => (segment, None),
        };

        if key.is_empty() || !key.chars().all(|c| c.is_ascii_alphanumeric() || c == '_') {
            return Err(invalid());
        }

        Ok(Self {
            key: key.to_string(),
            index,
        })
    }
}

impl fmt::Display for KeySpec {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.index {
            Some(index) => write!(f, "{}[{}]", self.key, index),
            None => write!(f, "{}", self.key),
        }
    }
}

impl KeySpec {
    fn step<'a>(&self, node: &'a Value) -> GeostayResult<&'a Value> {
        let value = node
            .as_object()
            .and_then(|object| object.get(&self.key))
            .ok_or_else(|| GeostayError::KeyNotFound {
                key: self.key.clone(),
                found: json_type_name(node),
            })?;

        let Some(index) = self.index else {
            return Ok(value);
        };

        let items = value.as_array().ok_or_else(|| GeostayError::NotAnArray {
            key: self.key.clone(),
            found: json_type_name(value),
        })?;

        items.get(index).ok_or(GeostayError::IndexOutOfRange {
            key: self.key.clone(),
            index,
            len: items.len(),
        })
    }
}

/// A parsed dotted path. Parse once, resolve against many records.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct JsonPath {
    segments: Vec<KeySpec>,
}

impl FromStr for JsonPath {
    type Err = GeostayError;

    fn from_str(path: &str) -> Result<Self, Self::Err> {
        let segments = path
            .split('.')
            .filter(|segment| !segment.is_empty())
            .map(KeySpec::from_str)
            .collect::<GeostayResult<Vec<_>>>()?;

        Ok(Self { segments })
    }
}

impl fmt::Display for JsonPath {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, segment) in self.segments.iter().enumerate() {
            if i > 0 {
                f.write_str(".")?;
            }
            write!(f, "{}", segment)?;
        }
        Ok(())
    }
}

impl JsonPath {
    pub fn segments(&self) -> &[KeySpec] {
        &self.segments
    }

    pub fn is_root(&self) -> bool {
        self.segments.is_empty()
    }

    pub fn resolve<'a>(&self, root: &'a Value) -> GeostayResult<&'a Value> {
        self.segments
            .iter()
            .try_fold(root, |node, segment| segment.step(node))
    }
}

/// Resolve `path` against `root`, returning a borrow of the located value.
pub fn resolve<'a>(root: &'a Value, path: &str) -> GeostayResult<&'a Value> {
    path.parse::<JsonPath>()?.resolve(root)
}

/// Extract a single field from a record using a key spec like `lat` or `location[0]`.
pub fn extract_field<'a>(record: &'a Value, key_spec: &str) -> GeostayResult<&'a Value> {
    resolve(record, key_spec)
}
