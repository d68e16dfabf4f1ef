//! Debug flags sourced from the page URL's query string.
//!
//! Flags are captured once at overlay construction (via
//! [`DebugFlags::from_url`]) and are immutable for the life of the overlay.
//! Parsing is total and permissive: malformed tokens are dropped, never
//! surfaced, and only keys from the fixed recognized set are kept.

use serde::Serialize;
use std::collections::HashMap;

/// The fixed set of query parameter names the overlay reacts to.
///
/// Key matching is case-insensitive; matched keys are stored under these
/// canonical lowercase names.
pub const RECOGNIZED_FLAGS: [&str; 4] = ["debug", "debug-start", "debug-visual", "debug-grid"];

/// A single flag value: boolean for the exact literals `true`/`false`,
/// otherwise the raw string.
///
/// Coercion is exact-case: `?debug=TRUE` stays the string `"TRUE"`, which
/// is still truthy, while `?debug=false` is a proper boolean false.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum FlagValue {
  Bool(bool),
  Text(String),
}

impl FlagValue {
  /// Truthiness in the host-page sense: false booleans and empty strings
  /// are falsy, everything else is truthy.
  pub fn is_truthy(&self) -> bool {
    match self {
      Self::Bool(value) => *value,
      Self::Text(value) => !value.is_empty(),
    }
  }

  fn coerce(raw: &str) -> Self {
    match raw {
      "true" => Self::Bool(true),
      "false" => Self::Bool(false),
      other => Self::Text(other.to_string()),
    }
  }
}

/// Recognized debug flags parsed from a URL query string.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct DebugFlags {
  #[serde(flatten)]
  values: HashMap<String, FlagValue>,
}

impl DebugFlags {
  /// Parse the recognized flags out of a URL string.
  pub fn from_url(url: &str) -> Self {
    parse_query_config(url)
  }

  /// Returns the value for a canonical flag name, if present.
  pub fn get(&self, name: &str) -> Option<&FlagValue> {
    self.values.get(name)
  }

  /// Returns true when the flag is present and truthy.
  pub fn truthy(&self, name: &str) -> bool {
    self.get(name).is_some_and(FlagValue::is_truthy)
  }

  pub fn len(&self) -> usize {
    self.values.len()
  }

  pub fn is_empty(&self) -> bool {
    self.values.is_empty()
  }

  fn insert(&mut self, name: &str, value: FlagValue) {
    self.values.insert(name.to_string(), value);
  }
}

/// Parses a URL's query string into the recognized flag map.
///
/// The scan starts after the first `?` (the whole string is scanned when no
/// `?` is present), splits on `&`, then splits each token on its first `=`.
/// Tokens without `=`, with an unrecognized key, or otherwise malformed
/// contribute nothing. This never fails, whatever the input.
pub fn parse_query_config(url: &str) -> DebugFlags {
  let query = match url.find('?') {
    Some(idx) => &url[idx + 1..],
    None => url,
  };

  let mut flags = DebugFlags::default();
  for token in query.split('&') {
    let Some((key, raw_value)) = token.split_once('=') else {
      continue;
    };
    let key = key.to_ascii_lowercase();
    let Some(canonical) = RECOGNIZED_FLAGS.iter().copied().find(|name| *name == key) else {
      continue;
    };
    flags.insert(canonical, FlagValue::coerce(raw_value));
  }
  flags
}
