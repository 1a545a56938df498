/// One decoded page of a paginated query.
///
/// `end_of_stream` is set on the last page together with its records; the
/// caller must consume `items` even when it is `true`.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Page<T> {
    pub items: Vec<T>,
    /// Offset the page was fetched at
    pub offset: u64,
    pub end_of_stream: bool,
}

impl<T> Page<T> {
    #[must_use]
    pub fn new(items: Vec<T>, offset: u64, end_of_stream: bool) -> Self {
        Self {
            items,
            offset,
            end_of_stream,
        }
    }

    /// Empty final page
    #[must_use]
    pub fn end(offset: u64) -> Self {
        Self::new(Vec::new(), offset, true)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.items.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Map page items to a different type
    pub fn map_items<U>(self, f: impl FnMut(T) -> U) -> Page<U> {
        Page {
            items: self.items.into_iter().map(f).collect(),
            offset: self.offset,
            end_of_stream: self.end_of_stream,
        }
    }
}

impl<T> IntoIterator for Page<T> {
    type Item = T;
    type IntoIter = std::vec::IntoIter<T>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.into_iter()
    }
}
