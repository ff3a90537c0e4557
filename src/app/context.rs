use std::sync::Arc;

use crate::config::Config;
use crate::fetcher::http_fetcher::HttpFetcher;
use crate::fetcher::Fetcher;
use crate::mailer::{Mailer, SmtpMailer};
use crate::normalizer::Normalizer;

pub struct AppContext {
    pub fetcher: Arc<dyn Fetcher + Send + Sync>,
    pub normalizer: Normalizer,
    pub mailer: Arc<dyn Mailer + Send + Sync>,
}

impl AppContext {
    pub fn new(config: &Config) -> Self {
        let fetcher: Arc<dyn Fetcher + Send + Sync> = Arc::new(HttpFetcher::new());
        let mailer: Arc<dyn Mailer + Send + Sync> =
            Arc::new(SmtpMailer::new(config.email.clone()));

        Self {
            fetcher,
            normalizer: Normalizer::new(),
            mailer,
        }
    }

    /// Build a context from explicit parts, letting tests swap in fakes.
    pub fn with_parts(
        fetcher: Arc<dyn Fetcher + Send + Sync>,
        mailer: Arc<dyn Mailer + Send + Sync>,
    ) -> Self {
        Self {
            fetcher,
            normalizer: Normalizer::new(),
            mailer,
        }
    }
}
