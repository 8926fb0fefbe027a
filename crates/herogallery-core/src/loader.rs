//! Catalog loader.
//!
//! Two phases:
//!
//! 1. **Select** - try each source in priority order, one at a time, and
//!    keep the first non-empty normalized list. If none qualifies, use the
//!    fallback catalog.
//! 2. **Backfill** - run every record through the image resolver, so API
//!    and fallback records share one image-completion path.
//!
//! Sources are never raced: total latency is the sum of the failed
//! attempts. The lowest-index success always wins.

use std::time::Duration;

use tracing::{debug, info, warn};

use crate::config::GalleryConfig;
use crate::error::GalleryError;
use crate::fallback::fallback_catalog;
use crate::image::ImageResolver;
use crate::normalize::Normalizer;
use crate::record::Record;
use crate::source::{http_sources, CatalogSource};

/// Where the loaded catalog came from.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogOrigin {
    /// An external source, identified by its label
    Source { label: String },
    /// The bundled fallback list
    Fallback,
}

/// Result of one full load.
#[derive(Debug, Clone, PartialEq)]
pub struct LoadOutcome {
    pub records: Vec<Record>,
    pub origin: CatalogOrigin,
}

impl LoadOutcome {
    pub fn is_fallback(&self) -> bool {
        self.origin == CatalogOrigin::Fallback
    }

    /// Informational status line for the UI.
    pub fn status_message(&self) -> String {
        match self.origin {
            CatalogOrigin::Source { .. } => {
                format!("Found {} heroes from API.", self.records.len())
            }
            CatalogOrigin::Fallback => "Using fallback data (API unavailable).".to_string(),
        }
    }

    /// How long the status line stays visible.
    pub fn status_duration(&self, config: &GalleryConfig) -> Duration {
        let ms = match self.origin {
            CatalogOrigin::Source { .. } => config.status_hide_ms_api,
            CatalogOrigin::Fallback => config.status_hide_ms_fallback,
        };
        Duration::from_millis(ms)
    }
}

/// Loads the catalog from prioritized sources with a guaranteed fallback.
pub struct CatalogLoader {
    sources: Vec<Box<dyn CatalogSource>>,
    normalizer: Normalizer,
    resolver: ImageResolver,
    placeholder: String,
    wiki_base: String,
}

impl CatalogLoader {
    pub fn new(sources: Vec<Box<dyn CatalogSource>>, config: &GalleryConfig) -> Self {
        Self {
            sources,
            normalizer: Normalizer::new(
                config.aliases.clone(),
                config.placeholder_image.clone(),
                config.wiki_base.clone(),
            ),
            resolver: ImageResolver::new(config.image_cdn_base.clone()),
            placeholder: config.placeholder_image.clone(),
            wiki_base: config.wiki_base.clone(),
        }
    }

    /// Loader over HTTP sources for every URL in `config.sources`.
    pub fn from_config(config: &GalleryConfig) -> Self {
        Self::new(http_sources(&config.sources), config)
    }

    pub fn source_labels(&self) -> Vec<String> {
        self.sources.iter().map(|s| s.label().to_string()).collect()
    }

    /// Run the full load. Never fails: the worst case is the fallback.
    pub async fn load(&self) -> LoadOutcome {
        let (records, origin) = match self.select_source().await {
            Some((label, records)) => (records, CatalogOrigin::Source { label }),
            None => {
                warn!(error = %GalleryError::AllSourcesExhausted, "Using fallback catalog");
                (
                    fallback_catalog(&self.placeholder, &self.wiki_base),
                    CatalogOrigin::Fallback,
                )
            }
        };

        let records = self.resolver.resolve_all(records);
        info!(count = records.len(), ?origin, "Catalog loaded");
        LoadOutcome { records, origin }
    }

    async fn select_source(&self) -> Option<(String, Vec<Record>)> {
        for source in &self.sources {
            let label = source.label();
            let payload = match source.fetch().await {
                Ok(payload) => payload,
                Err(e) => {
                    warn!(source = %label, error = %e, "Catalog source failed");
                    continue;
                }
            };

            match self.normalizer.normalize(&payload) {
                Some(records) if !records.is_empty() => {
                    debug!(source = %label, count = records.len(), "Catalog source accepted");
                    return Some((label.to_string(), records));
                }
                Some(_) => {
                    warn!(source = %label, "Catalog source returned no usable entries");
                }
                None => {
                    warn!(source = %label, "Catalog source payload shape not recognized");
                }
            }
        }
        None
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::source::StaticSource;
    use serde_json::json;

    fn loader(sources: Vec<Box<dyn CatalogSource>>) -> CatalogLoader {
        CatalogLoader::new(sources, &GalleryConfig::default())
    }

    #[tokio::test]
    async fn test_no_sources_uses_fallback() {
        let outcome = loader(vec![]).load().await;
        assert!(outcome.is_fallback());
        assert_eq!(outcome.records.len(), crate::fallback::FALLBACK_HEROES.len());
        assert_eq!(outcome.status_message(), "Using fallback data (API unavailable).");
    }

    #[tokio::test]
    async fn test_first_good_source_wins() {
        let outcome = loader(vec![
            Box::new(StaticSource::failing("down")),
            Box::new(StaticSource::ok("second", json!({ "data": ["Miya"] }))),
            Box::new(StaticSource::ok("third", json!(["Layla", "Nana"]))),
        ])
        .load()
        .await;

        assert_eq!(
            outcome.origin,
            CatalogOrigin::Source {
                label: "second".to_string()
            }
        );
        assert_eq!(outcome.records.len(), 1);
        assert_eq!(outcome.status_message(), "Found 1 heroes from API.");
    }

    #[tokio::test]
    async fn test_status_durations() {
        let config = GalleryConfig::default();
        let fallback = loader(vec![]).load().await;
        assert_eq!(fallback.status_duration(&config), Duration::from_millis(1200));

        let api = loader(vec![Box::new(StaticSource::ok("a", json!(["Miya"])))])
            .load()
            .await;
        assert_eq!(api.status_duration(&config), Duration::from_millis(900));
    }
}
