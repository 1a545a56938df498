//! `PuppetDB` API trait.

use pe_sdk::{ClientError, OrderBy, PageCursor, Pagination, Query};

use crate::models::{Fact, FactPath};

/// `PuppetDB` fact queries.
///
/// `pagination: None` leaves `limit`/`offset` off the request and returns the
/// whole result in one response.
pub trait PuppetDbApi: Send + Sync {
    /// Alphabetical list of every known fact name, deactivated nodes included.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn fact_names(
        &self,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<String>, ClientError>;

    /// Every known fact path.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn fact_paths(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<FactPath>, ClientError>;

    /// Facts matching `query`; deactivated nodes are excluded.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn facts(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<Fact>, ClientError>;

    /// Structured fact contents matching `query`.
    ///
    /// # Errors
    /// Returns the normalized error of the failed call.
    fn fact_contents(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<Fact>, ClientError>;

    /// Cursor over every fact matching `query`, `pagination.limit()` at a time.
    fn paginated_facts(
        &self,
        query: Query,
        pagination: Pagination,
        order_by: OrderBy,
    ) -> PageCursor<Fact>;
}
