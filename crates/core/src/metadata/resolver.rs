//! Best-effort enrichment of classified descriptors.

use std::sync::Arc;

use tracing::debug;

use super::providers::NullProvider;
use super::types::year_from_date;
use super::{MetadataError, MetadataProvider};
use crate::classifier::{MediaDescriptor, MediaKind};

/// Confirms a descriptor's title and year against a metadata provider.
///
/// The first result the provider returns wins. Any failure, including an
/// empty result, leaves the descriptor exactly as it was.
#[derive(Clone)]
pub struct MetadataResolver {
    provider: Arc<dyn MetadataProvider>,
}

impl MetadataResolver {
    /// Create a resolver backed by `provider`.
    pub fn new(provider: Arc<dyn MetadataProvider>) -> Self {
        Self { provider }
    }

    /// Resolver that never changes anything.
    pub fn disabled() -> Self {
        Self::new(Arc::new(NullProvider))
    }

    /// Name of the backing provider.
    pub fn provider_name(&self) -> &str {
        self.provider.name()
    }

    /// Overwrite title and year from the provider's first match.
    ///
    /// Returns `true` when a match was applied. Errors are logged at debug
    /// level and otherwise swallowed.
    pub async fn enrich(&self, descriptor: &mut MediaDescriptor) -> bool {
        match self.first_match(descriptor).await {
            Ok(Some((title, date))) => {
                apply_match(descriptor, title, date.as_deref());
                debug!(
                    "Updated {} from {}: {} ({})",
                    descriptor.source_path.display(),
                    self.provider.name(),
                    descriptor.title,
                    descriptor.year.as_deref().unwrap_or("-")
                );
                true
            }
            Ok(None) => {
                debug!("No metadata match for '{}'", descriptor.title);
                false
            }
            Err(e) => {
                debug!(
                    "Metadata lookup for '{}' failed, keeping parsed values: {}",
                    descriptor.title, e
                );
                false
            }
        }
    }

    /// Title and date of the first provider hit for this descriptor's kind.
    async fn first_match(
        &self,
        descriptor: &MediaDescriptor,
    ) -> Result<Option<(String, Option<String>)>, MetadataError> {
        let hit = match descriptor.kind {
            MediaKind::Movie => self
                .provider
                .lookup_movie(&descriptor.title)
                .await?
                .into_iter()
                .next()
                .map(|m| (m.title, m.release_date)),
            MediaKind::Series { .. } => self
                .provider
                .lookup_series(&descriptor.title)
                .await?
                .into_iter()
                .next()
                .map(|s| (s.name, s.first_aired)),
        };
        Ok(hit)
    }
}

impl std::fmt::Debug for MetadataResolver {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MetadataResolver")
            .field("provider", &self.provider.name())
            .finish()
    }
}

/// Copies provider values onto the descriptor, keeping local values where the
/// provider's are blank or too short.
fn apply_match(descriptor: &mut MediaDescriptor, title: String, date: Option<&str>) {
    let title = title.trim();
    if !title.is_empty() {
        descriptor.title = title.to_string();
    }
    if let Some(year) = year_from_date(date) {
        descriptor.year = Some(year);
    }
}
