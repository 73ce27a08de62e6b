use std::fmt;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Ordered capability tokens as stored in `users.permissions`.
///
/// The column holds a JSON array of strings. The list keeps insertion order
/// and `grant` never introduces a duplicate, but a list decoded from storage
/// is taken as-is.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct PermissionList(Vec<String>);

#[derive(Debug, Error)]
#[error("not a JSON array of strings: {0}")]
pub struct PermissionDecodeError(#[from] serde_json::Error);

impl PermissionList {
    #[must_use]
    pub fn new(tokens: Vec<String>) -> Self {
        Self(tokens)
    }

    /// Decodes the raw column value. NULL and blank text both mean "no permissions".
    pub fn decode(raw: Option<&str>) -> Result<Self, PermissionDecodeError> {
        match raw.map(str::trim) {
            None | Some("") => Ok(Self::default()),
            Some(text) => Ok(Self(serde_json::from_str(text)?)),
        }
    }

    /// Compact JSON, e.g. `["DASHBOARD","PERSONNEL"]`.
    #[must_use]
    pub fn encode(&self) -> String {
        serde_json::Value::from(self.0.clone()).to_string()
    }

    #[must_use]
    pub fn contains(&self, token: &str) -> bool {
        self.0.iter().any(|existing| existing == token)
    }

    /// Appends `token` unless present. Returns whether the list changed.
    pub fn grant(&mut self, token: &str) -> bool {
        if self.contains(token) {
            return false;
        }
        self.0.push(token.to_string());
        true
    }

    /// Removes every occurrence of `token`. Returns whether the list changed.
    pub fn revoke(&mut self, token: &str) -> bool {
        let before = self.0.len();
        self.0.retain(|existing| existing != token);
        self.0.len() != before
    }

    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl fmt::Display for PermissionList {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:?}", self.0)
    }
}

impl From<Vec<String>> for PermissionList {
    fn from(value: Vec<String>) -> Self {
        Self(value)
    }
}

impl<'a> From<&[&'a str]> for PermissionList {
    fn from(value: &[&'a str]) -> Self {
        Self(value.iter().map(|token| (*token).to_string()).collect())
    }
}
