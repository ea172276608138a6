//! Feed metadata types usable across crates.

/// Typed key for identifying feeds in configuration and error reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeedKey(pub &'static str);

impl FeedKey {
    /// Construct a new typed feed key from a static name.
    #[must_use]
    pub const fn new(name: &'static str) -> Self {
        Self(name)
    }

    /// Returns the inner static string.
    #[must_use]
    pub const fn as_str(self) -> &'static str {
        self.0
    }
}

impl From<FeedKey> for &'static str {
    fn from(k: FeedKey) -> Self {
        k.0
    }
}
