//! Cache keys and revalidation for rendered post pages.
//!
//! Mutating handlers fire invalidation on a spawned task and move on;
//! there is no acknowledgment and no retry. A missed invalidation only
//! means one stale read until the TTL expires.

use std::sync::Arc;
use std::time::Duration;

use quill_core::ports::Cache;
use uuid::Uuid;

/// TTL for cached listing and detail payloads.
pub const PAGE_TTL: Duration = Duration::from_secs(60);

/// Prefix shared by every cached listing page.
pub const LIST_PREFIX: &str = "posts:list:";

pub fn detail_key(id: Uuid) -> String {
    format!("posts:detail:{id}")
}

pub fn slug_key(slug: &str) -> String {
    format!("posts:slug:{slug}")
}

/// Invalidate every cached listing page.
pub fn fire_listing_invalidation(cache: &Arc<dyn Cache>) {
    let cache = cache.clone();
    tokio::spawn(async move {
        purge_listing(cache.as_ref()).await;
    });
}

/// Invalidate the listing pages plus the detail pages of one post.
/// `slugs` covers both the old and new slug when an update renames.
pub fn fire_post_invalidation(cache: &Arc<dyn Cache>, id: Uuid, slugs: &[&str]) {
    let cache = cache.clone();
    let keys: Vec<String> = std::iter::once(detail_key(id))
        .chain(slugs.iter().map(|s| slug_key(s)))
        .collect();

    tokio::spawn(async move {
        purge_listing(cache.as_ref()).await;
        for key in keys {
            if let Err(e) = cache.delete(&key).await {
                tracing::warn!(key = %key, "Cache invalidation failed: {e}");
            }
        }
    });
}

async fn purge_listing(cache: &dyn Cache) {
    if let Err(e) = cache.delete_prefix(LIST_PREFIX).await {
        tracing::warn!("Listing cache invalidation failed: {e}");
    }
}
