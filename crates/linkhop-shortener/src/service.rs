use async_trait::async_trait;
use linkhop_core::{Repository, ShortLink, Shortener, ShortenerError, StorageError};
use linkhop_generator::Generator;
use std::sync::Arc;
use tracing::{debug, info, warn};
use typed_builder::TypedBuilder;
use url::Url;

pub const DEFAULT_MAX_ATTEMPTS: u32 = 5;

#[derive(Debug, Clone, Copy, TypedBuilder)]
pub struct ShortenerSettings {
    /// Total insert attempts per request, the first one included.
    #[builder(default = DEFAULT_MAX_ATTEMPTS)]
    pub max_attempts: u32,
}

impl Default for ShortenerSettings {
    fn default() -> Self {
        Self::builder().build()
    }
}

/// A concrete implementation of the `Shortener` trait.
///
/// This service wraps a `Repository` and a `Generator` to handle:
/// - URL validation
/// - slug generation
/// - retrying on slug collisions reported by the repository
///
/// The repository's unique constraint is the only arbiter of slug
/// uniqueness; no existence check is made before inserting.
#[derive(Debug)]
pub struct ShortenerService<R, G> {
    repository: Arc<R>,
    generator: Arc<G>,
    settings: ShortenerSettings,
}

impl<R, G> Clone for ShortenerService<R, G> {
    fn clone(&self) -> Self {
        Self {
            repository: Arc::clone(&self.repository),
            generator: Arc::clone(&self.generator),
            settings: self.settings,
        }
    }
}

impl<R: Repository, G: Generator> ShortenerService<R, G> {
    /// Creates a new `ShortenerService` with default settings.
    pub fn new(repository: R, generator: G) -> Self {
        Self::with_settings(repository, generator, ShortenerSettings::default())
    }

    pub fn with_settings(repository: R, generator: G, settings: ShortenerSettings) -> Self {
        Self::from_shared(Arc::new(repository), generator, settings)
    }

    /// Creates a service over a repository that is also used elsewhere,
    /// e.g. by the redirector.
    pub fn from_shared(repository: Arc<R>, generator: G, settings: ShortenerSettings) -> Self {
        Self {
            repository,
            generator: Arc::new(generator),
            settings: ShortenerSettings {
                max_attempts: settings.max_attempts.max(1),
            },
        }
    }

    /// Validates the submitted URL and returns the value to store.
    ///
    /// The value must be an absolute `http` or `https` URL. Surrounding
    /// whitespace is dropped; everything else is kept as submitted.
    ///
    /// The parser silently strips tabs and newlines and encodes spaces, so a
    /// value containing them would be stored differently from what redirects
    /// resolve to. Such values are rejected outright.
    fn validate_url(raw: &str) -> Result<&str, ShortenerError> {
        let trimmed = raw.trim();
        if trimmed.is_empty() {
            return Err(ShortenerError::InvalidInput("URL is required".to_string()));
        }

        if let Some(c) = trimmed
            .chars()
            .find(|c| c.is_whitespace() || c.is_control())
        {
            return Err(ShortenerError::InvalidInput(format!(
                "URL is invalid: unexpected character {c:?}"
            )));
        }

        let parsed = Url::parse(trimmed)
            .map_err(|e| ShortenerError::InvalidInput(format!("URL is invalid: {e}")))?;

        match parsed.scheme() {
            "http" | "https" => {}
            other => {
                return Err(ShortenerError::InvalidInput(format!(
                    "URL is invalid: scheme must be http or https, got {other}"
                )))
            }
        }

        if !parsed.has_host() {
            return Err(ShortenerError::InvalidInput(
                "URL is invalid: missing host".to_string(),
            ));
        }

        Ok(trimmed)
    }
}

#[async_trait]
impl<R: Repository, G: Generator> Shortener for ShortenerService<R, G> {
    async fn shorten(&self, long_url: &str) -> Result<ShortLink, ShortenerError> {
        let long_url = Self::validate_url(long_url)?;
        let max_attempts = self.settings.max_attempts;
        let mut link = ShortLink::new(long_url, self.generator.generate().into());

        for attempt in 1..=max_attempts {
            if attempt > 1 {
                link = link.with_slug(self.generator.generate().into());
            }

            match self.repository.insert(&link).await {
                Ok(()) => {
                    info!(slug = %link.slug, id = %link.id, attempt, "created short link");
                    return Ok(link);
                }
                Err(StorageError::Conflict(slug)) => {
                    warn!(%slug, attempt, max_attempts, "slug collision, drawing a new one");
                }
                Err(other) => return Err(other.into()),
            }
        }

        Err(ShortenerError::GenerationFailed {
            attempts: max_attempts,
        })
    }

    async fn list(&self) -> Result<Vec<ShortLink>, ShortenerError> {
        let links = self.repository.list().await?;
        debug!(count = links.len(), "listed short links");
        Ok(links)
    }
}
