use std::sync::Arc;

use linkhop_core::{Repository, Shortener};
use linkhop_generator::Generator;
use linkhop_redirector::{Redirector, RedirectorService};
use linkhop_shortener::{ShortenerService, ShortenerSettings};

#[derive(Clone)]
pub struct AppState {
    shortener: Arc<dyn Shortener>,
    redirector: Arc<dyn Redirector>,
    base_url: String,
}

impl AppState {
    pub fn new(
        shortener: Arc<dyn Shortener>,
        redirector: Arc<dyn Redirector>,
        public_base_url: impl Into<String>,
    ) -> Self {
        Self {
            shortener,
            redirector,
            base_url: public_base_url.into(),
        }
    }

    /// Wires a shortener and a redirector over one shared repository.
    pub fn with_repository<R, G>(
        repository: Arc<R>,
        generator: G,
        settings: ShortenerSettings,
        public_base_url: impl Into<String>,
    ) -> Self
    where
        R: Repository,
        G: Generator,
    {
        let shortener = ShortenerService::from_shared(Arc::clone(&repository), generator, settings);
        let redirector = RedirectorService::from_shared(repository);
        Self::new(Arc::new(shortener), Arc::new(redirector), public_base_url)
    }

    pub fn shortener(&self) -> &dyn Shortener {
        self.shortener.as_ref()
    }

    pub fn redirector(&self) -> &dyn Redirector {
        self.redirector.as_ref()
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }
}
