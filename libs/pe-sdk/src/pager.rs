//! Offset-based pagination over a query endpoint
//!
//! [`PageCursor`] turns one bounded query endpoint into a sequential walk over
//! the whole result set. Each [`next_page`](PageCursor::next_page) call issues
//! exactly one request at the current offset.
//!
//! - The offset advances by the number of records actually returned.
//! - A page shorter than the limit (including an empty one) is the last page;
//!   it is returned together with `end_of_stream = true`.
//! - A page that exactly fills the limit is not assumed final: the following
//!   call fetches again and may return an empty last page.
//! - A failed call leaves the offset untouched, so calling again re-issues the
//!   identical request.
//!
//! # Example
//!
//! ```rust,ignore
//! let mut cursor = client.cursor::<Fact>(path, query, Pagination::first(500)?, OrderBy::empty());
//! loop {
//!     let page = cursor.next_page()?;
//!     store(&page.items);
//!     if page.end_of_stream {
//!         break;
//!     }
//! }
//!
//! // or, item by item
//! for fact in client.cursor::<Fact>(path, query, pagination, order).into_items() {
//!     let fact = fact?;
//! }
//! ```

use crate::client::ApiClient;
use pe_errors::ClientError;
use pe_query::{OrderBy, Page, Pagination, Query, build_query_request};
use serde::de::DeserializeOwned;
use std::collections::VecDeque;
use std::fmt;
use std::marker::PhantomData;

/// Observable cursor state between calls
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CursorState {
    /// No page fetched yet
    Idle,
    /// Last fetch succeeded and more records may exist
    HasPage,
    /// Last fetch failed; the next call retries the same page
    Failed,
    /// Every record has been returned; no further requests are made
    Exhausted,
}

/// Sequential cursor over a paginated query endpoint.
///
/// Not shareable between callers: `next_page` takes `&mut self`.
#[must_use]
pub struct PageCursor<T> {
    client: ApiClient,
    path: String,
    query: Query,
    order_by: OrderBy,
    pagination: Pagination,
    state: CursorState,
    _item: PhantomData<fn() -> T>,
}

impl<T: DeserializeOwned> PageCursor<T> {
    pub fn new(
        client: ApiClient,
        path: impl Into<String>,
        query: Query,
        pagination: Pagination,
        order_by: OrderBy,
    ) -> Self {
        Self {
            client,
            path: path.into(),
            query,
            order_by,
            pagination,
            state: CursorState::Idle,
            _item: PhantomData,
        }
    }

    /// Fetch the next page.
    ///
    /// Once the cursor is exhausted this returns an empty page with
    /// `end_of_stream = true` without contacting the server.
    ///
    /// # Errors
    /// Returns the normalized [`ClientError`] of the failed fetch. The cursor
    /// stays at the same offset and may be called again.
    pub fn next_page(&mut self) -> Result<Page<T>, ClientError> {
        let offset = self.pagination.offset();
        if self.state == CursorState::Exhausted {
            tracing::trace!(path = %self.path, offset, "cursor already exhausted");
            return Ok(Page::end(offset));
        }

        let request = build_query_request(
            &self.path,
            &self.query,
            Some(&self.pagination),
            &self.order_by,
        );
        tracing::trace!(path = %self.path, offset, limit = self.pagination.limit(), "fetching page");

        let items: Vec<T> = match self.client.execute_json(&request) {
            Ok(items) => items,
            Err(err) => {
                self.state = CursorState::Failed;
                tracing::debug!(path = %self.path, offset, error = %err, "page fetch failed");
                return Err(err);
            }
        };

        let count = items.len() as u64;
        self.pagination = self.pagination.advanced_by(count);

        let end_of_stream = count < self.pagination.limit();
        if end_of_stream {
            self.state = CursorState::Exhausted;
            tracing::debug!(
                path = %self.path,
                total = self.pagination.offset(),
                "cursor exhausted"
            );
        } else {
            self.state = CursorState::HasPage;
        }

        Ok(Page::new(items, offset, end_of_stream))
    }

    /// Iterate over single records, fetching pages on demand.
    ///
    /// The iterator yields the first error and then ends.
    pub fn into_items(self) -> Items<T> {
        Items {
            cursor: self,
            buffer: VecDeque::new(),
            done: false,
        }
    }
}

impl<T> PageCursor<T> {
    #[must_use]
    pub fn state(&self) -> CursorState {
        self.state
    }

    #[must_use]
    pub fn is_exhausted(&self) -> bool {
        self.state == CursorState::Exhausted
    }

    /// Offset the next fetch will use
    #[must_use]
    pub fn offset(&self) -> u64 {
        self.pagination.offset()
    }

    #[must_use]
    pub fn limit(&self) -> u64 {
        self.pagination.limit()
    }

    #[must_use]
    pub fn path(&self) -> &str {
        &self.path
    }
}

impl<T> fmt::Debug for PageCursor<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PageCursor")
            .field("path", &self.path)
            .field("query", &self.query)
            .field("order_by", &self.order_by)
            .field("pagination", &self.pagination)
            .field("state", &self.state)
            .finish_non_exhaustive()
    }
}

/// Record-level iterator returned by [`PageCursor::into_items`]
#[must_use]
pub struct Items<T> {
    cursor: PageCursor<T>,
    buffer: VecDeque<T>,
    done: bool,
}

impl<T: DeserializeOwned> Iterator for Items<T> {
    type Item = Result<T, ClientError>;

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(item) = self.buffer.pop_front() {
                return Some(Ok(item));
            }

            if self.done {
                return None;
            }

            match self.cursor.next_page() {
                Ok(page) => {
                    if page.end_of_stream {
                        self.done = true;
                    }
                    self.buffer.extend(page.items);
                }
                Err(err) => {
                    self.done = true;
                    return Some(Err(err));
                }
            }
        }
    }
}

impl<T> fmt::Debug for Items<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Items")
            .field("cursor", &self.cursor)
            .field("buffered", &self.buffer.len())
            .field("done", &self.done)
            .finish()
    }
}
