//! Project loading configuration.

/// Settings applied while files are registered in a [`Project`](super::Project).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ProjectConfig {
    /// Internal path prefixes whose parsed trees are dropped at load time.
    ignored: Vec<String>,
}

impl ProjectConfig {
    /// Create a configuration with nothing ignored.
    pub fn new() -> Self {
        Self::default()
    }

    /// Ignore every file whose internal path starts with `prefix`.
    ///
    /// Ignored files stay registered (so imports of them still resolve to a
    /// file) but carry no parsed tree, so nothing inside them is visible.
    pub fn with_ignored(mut self, prefix: impl Into<String>) -> Self {
        self.ignored.push(prefix.into());
        self
    }

    /// The configured ignore prefixes.
    pub fn ignored(&self) -> &[String] {
        &self.ignored
    }

    /// Check if `path` falls under an ignore prefix.
    pub fn is_ignored(&self, path: &str) -> bool {
        self.ignored.iter().any(|prefix| path.starts_with(prefix.as_str()))
    }
}
