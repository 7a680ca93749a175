//! Context-path key type.
//!
//! [`ContextPath`] is the URL path prefix a web application is mounted
//! under. Following the servlet contract, the root context is the empty
//! string and every other path starts with `/`.

use std::fmt;

use serde::{Deserialize, Serialize};

/// URL path prefix a web application is mounted under.
///
/// Used as the unique key in [`super::ServerRegistry`]. The value is stored
/// as delivered by the hosting container; no normalization is applied, so
/// `/app` and `/app/` are distinct keys.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ContextPath(String);

impl ContextPath {
    /// Creates a context path from the container-supplied string.
    #[must_use]
    pub fn new(path: impl Into<String>) -> Self {
        Self(path.into())
    }

    /// Returns the root context path (empty string per the servlet contract).
    #[must_use]
    pub const fn root() -> Self {
        Self(String::new())
    }

    /// Returns `true` if this is the root context.
    #[must_use]
    pub fn is_root(&self) -> bool {
        self.0.is_empty()
    }

    /// Returns the raw path string as delivered by the container.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl Default for ContextPath {
    /// The root context.
    fn default() -> Self {
        Self::root()
    }
}

impl fmt::Display for ContextPath {
    /// Renders the root context as `/` for log readability.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.0.is_empty() {
            write!(f, "/")
        } else {
            write!(f, "{}", self.0)
        }
    }
}

impl From<&str> for ContextPath {
    fn from(path: &str) -> Self {
        Self::new(path)
    }
}

impl From<String> for ContextPath {
    fn from(path: String) -> Self {
        Self(path)
    }
}

#[cfg(test)]
#[allow(clippy::panic)]
mod tests {
    use super::*;

    #[test]
    fn root_is_empty_string() {
        let root = ContextPath::root();
        assert!(root.is_root());
        assert_eq!(root.as_str(), "");
    }

    #[test]
    fn root_displays_as_slash() {
        assert_eq!(ContextPath::root().to_string(), "/");
        assert_eq!(ContextPath::new("/chat").to_string(), "/chat");
    }

    #[test]
    fn no_normalization() {
        assert_ne!(ContextPath::new("/app"), ContextPath::new("/app/"));
    }

    #[test]
    fn hash_works_in_hashmap() {
        use std::collections::HashMap;
        let path = ContextPath::new("/chat");
        let mut map = HashMap::new();
        map.insert(path.clone(), "test");
        assert_eq!(map.get(&path), Some(&"test"));
    }

    #[test]
    fn serde_is_transparent() {
        let Ok(json) = serde_json::to_string(&ContextPath::new("/chat")) else {
            panic!("serialization failed");
        };
        assert_eq!(json, "\"/chat\"");
    }
}
