use anyhow::Result;
use async_trait::async_trait;

/// City catalog collaborator.
///
/// Kept behind a trait so a session can be driven by a stub catalog in
/// tests instead of a live backend.
#[async_trait]
pub trait CityDirectory: Send + Sync {
    /// Fetch the ordered list of searchable city names
    async fn fetch_cities(&self) -> Result<Vec<String>>;
}
