use pe_sdk::{
    ApiClient, ClientError, ConfigError, OrderBy, PageCursor, Pagination, Query, SdkConfig,
    Service,
};

use crate::api::PuppetDbApi;
use crate::models::{Fact, FactPath};

pub const FACT_NAMES: &str = "/pdb/query/v4/fact-names";
pub const FACT_PATHS: &str = "/pdb/query/v4/fact-paths";
pub const FACT_CONTENTS: &str = "/pdb/query/v4/fact-contents";
pub const FACTS: &str = "/pdb/query/v4/facts";

/// HTTP implementation of [`PuppetDbApi`]
#[derive(Clone, Debug)]
pub struct PuppetDbClient {
    api: ApiClient,
}

impl PuppetDbClient {
    #[must_use]
    pub fn new(api: ApiClient) -> Self {
        Self { api }
    }

    /// Build a client from the `PuppetDB` settings of `config`
    ///
    /// # Errors
    /// Returns [`ConfigError`] if no `PuppetDB` URL is configured or the HTTP
    /// client cannot be built.
    pub fn from_config(config: &SdkConfig) -> Result<Self, ConfigError> {
        Ok(Self::new(config.api_client(Service::PuppetDb)?))
    }
}

impl PuppetDbApi for PuppetDbClient {
    fn fact_names(
        &self,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<String>, ClientError> {
        self.api
            .query(FACT_NAMES, &Query::none(), pagination, order_by)
    }

    fn fact_paths(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<FactPath>, ClientError> {
        self.api.query(FACT_PATHS, query, pagination, order_by)
    }

    fn facts(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<Fact>, ClientError> {
        self.api.query(FACTS, query, pagination, order_by)
    }

    fn fact_contents(
        &self,
        query: &Query,
        pagination: Option<&Pagination>,
        order_by: &OrderBy,
    ) -> Result<Vec<Fact>, ClientError> {
        self.api.query(FACT_CONTENTS, query, pagination, order_by)
    }

    fn paginated_facts(
        &self,
        query: Query,
        pagination: Pagination,
        order_by: OrderBy,
    ) -> PageCursor<Fact> {
        self.api.cursor(FACTS, query, pagination, order_by)
    }
}
