use async_trait::async_trait;

use crate::filter::PropertyFilter;
use crate::listing::ListingError;
use crate::models::ResultSet;

/// Common trait for all listing sources
/// This allows swapping the live API for fixtures in tests, and adding
/// new providers later
#[async_trait]
pub trait ListingSource: Send + Sync {
    /// Fetch one page of listings matching the filter
    async fn search(&self, filter: &PropertyFilter) -> Result<ResultSet, ListingError>;

    /// Get the name of the listing source
    fn source_name(&self) -> &'static str;
}
