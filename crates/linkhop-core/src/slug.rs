use crate::error::ShortenerError;
use std::fmt::Display;

/// Path prefix under which slugs are served.
pub const REDIRECT_PREFIX: &str = "/u/";

/// A short, URL-safe identifier for a stored link.
///
/// Slugs are compared byte for byte: `abc` and `ABC` are different slugs.
#[derive(Clone, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Slug(String);

impl Slug {
    /// Creates a slug from an untrusted source, such as a request path.
    ///
    /// The value is taken verbatim. Only the empty string is rejected.
    pub fn new(slug: impl Into<String>) -> Result<Self, ShortenerError> {
        let slug = slug.into();
        if slug.is_empty() {
            return Err(ShortenerError::InvalidInput(
                "slug cannot be empty".to_string(),
            ));
        }
        Ok(Self(slug))
    }

    /// Creates a slug without validation.
    ///
    /// Use this only for values produced by a generator or read back from storage.
    pub fn new_unchecked(slug: impl Into<String>) -> Self {
        Self(slug.into())
    }

    /// Builds the public short URL, e.g. `https://lnk.hop/u/AbC123xYz_`.
    pub fn to_url(&self, base_url: &str) -> String {
        format!(
            "{}{}{}",
            base_url.trim_end_matches('/'),
            REDIRECT_PREFIX,
            self.0
        )
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl Display for Slug {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

impl AsRef<str> for Slug {
    fn as_ref(&self) -> &str {
        &self.0
    }
}
