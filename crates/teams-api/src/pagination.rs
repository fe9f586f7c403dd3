//! Cursor pagination.
//!
//! Every paginated field of the API takes a `cursor` argument holding the id of the last item
//! the caller has seen, starting from the empty string. The fields only differ in how the end of
//! the sequence is signalled, which is captured by [`Termination`].

use futures::Stream;

use crate::errors::ApiError;

/// Items that can serve as a cursor for the following page.
pub trait Cursor {
    fn cursor(&self) -> &str;
}

/// Fetches a single page relative to a cursor.
#[async_trait::async_trait]
pub trait PageSource: Send + Sync {
    type Item: Cursor + Send;

    async fn fetch_page(&self, cursor: &str) -> Result<Vec<Self::Item>, ApiError>;
}

/// How a paginated field signals its last page.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Termination {
    /// The sequence ends with an empty page.
    EmptyPage,
    /// The sequence ends with the first page holding fewer items than the page size.
    ShortPage(usize),
}

impl Termination {
    fn is_last_page(self, len: usize) -> bool {
        match self {
            Termination::EmptyPage => len == 0,
            Termination::ShortPage(page_size) => len < page_size,
        }
    }
}

/// A lazy sequence of pages. Pages are fetched one at a time, only when asked for.
pub struct Paginator<S> {
    source: S,
    termination: Termination,
    cursor: String,
    exhausted: bool,
}

impl<S: PageSource> Paginator<S> {
    pub fn new(source: S, termination: Termination) -> Self {
        Self {
            source,
            termination,
            cursor: String::new(),
            exhausted: false,
        }
    }

    /// Fetches the next non-empty page, or `None` once the sequence is over.
    ///
    /// A failed fetch leaves the cursor untouched, so calling again retries the same page.
    pub async fn next_page(&mut self) -> Result<Option<Vec<S::Item>>, ApiError> {
        if self.exhausted {
            return Ok(None);
        }

        let page = self.source.fetch_page(&self.cursor).await?;
        tracing::debug!(cursor = %self.cursor, items = page.len(), "fetched page");

        self.exhausted = self.termination.is_last_page(page.len());

        match page.last() {
            Some(last) => {
                self.cursor = last.cursor().to_owned();
                Ok(Some(page))
            }
            None => Ok(None),
        }
    }

    /// Starts over from the first page.
    pub fn restart(&mut self) {
        self.cursor.clear();
        self.exhausted = false;
    }

    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    /// Fetches every remaining page and flattens them, preserving order.
    pub async fn collect_all(mut self) -> Result<Vec<S::Item>, ApiError> {
        let mut items = Vec::new();

        while let Some(page) = self.next_page().await? {
            items.extend(page);
        }

        Ok(items)
    }

    pub fn into_stream(self) -> impl Stream<Item = Result<Vec<S::Item>, ApiError>> {
        futures::stream::try_unfold(self, |mut paginator| async move {
            Ok(paginator.next_page().await?.map(|page| (page, paginator)))
        })
    }
}

#[cfg(test)]
mod tests {
    use std::sync::Mutex;

    use futures::TryStreamExt;

    use super::{Cursor, PageSource, Paginator, Termination};
    use crate::errors::{ApiError, TransportError};

    #[derive(Debug, Clone, PartialEq)]
    struct Item(String);

    impl Cursor for Item {
        fn cursor(&self) -> &str {
            &self.0
        }
    }

    #[derive(Default)]
    struct Pages {
        pages: Mutex<Vec<Result<Vec<Item>, ApiError>>>,
        cursors: Mutex<Vec<String>>,
    }

    impl Pages {
        fn new(pages: Vec<Vec<&str>>) -> Self {
            let pages = pages
                .into_iter()
                .rev()
                .map(|page| Ok(page.into_iter().map(|id| Item(id.to_owned())).collect()))
                .collect();

            Self {
                pages: Mutex::new(pages),
                cursors: Mutex::default(),
            }
        }

        fn push_failure(&self) {
            self.pages
                .lock()
                .unwrap()
                .push(Err(TransportError::Timeout.into()));
        }

        fn cursors(&self) -> Vec<String> {
            self.cursors.lock().unwrap().clone()
        }
    }

    #[async_trait::async_trait]
    impl<'a> PageSource for &'a Pages {
        type Item = Item;

        async fn fetch_page(&self, cursor: &str) -> Result<Vec<Item>, ApiError> {
            self.cursors.lock().unwrap().push(cursor.to_owned());
            self.pages.lock().unwrap().pop().unwrap_or_else(|| Ok(Vec::new()))
        }
    }

    fn ids(items: &[Item]) -> Vec<&str> {
        items.iter().map(|item| item.0.as_str()).collect()
    }

    #[tokio::test]
    async fn empty_page_termination() {
        let pages = Pages::new(vec![vec!["a", "b"], vec!["c"], vec![]]);

        let items = Paginator::new(&pages, Termination::EmptyPage)
            .collect_all()
            .await
            .unwrap();

        assert_eq!(vec!["a", "b", "c"], ids(&items));
        assert_eq!(vec!["", "b", "c"], pages.cursors());
    }

    #[tokio::test]
    async fn empty_first_page_ends_immediately() {
        let pages = Pages::new(vec![vec![]]);

        let items = Paginator::new(&pages, Termination::EmptyPage)
            .collect_all()
            .await
            .unwrap();

        assert!(items.is_empty());
        assert_eq!(vec![""], pages.cursors());
    }

    #[tokio::test]
    async fn short_page_termination() {
        let pages = Pages::new(vec![vec!["a", "b"], vec!["c"], vec!["never"]]);

        let items = Paginator::new(&pages, Termination::ShortPage(2))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(vec!["a", "b", "c"], ids(&items));
        assert_eq!(vec!["", "b"], pages.cursors());
    }

    #[tokio::test]
    async fn full_pages_always_ask_for_one_more() {
        let pages = Pages::new(vec![vec!["a", "b"], vec!["c", "d"]]);

        let items = Paginator::new(&pages, Termination::ShortPage(2))
            .collect_all()
            .await
            .unwrap();

        assert_eq!(vec!["a", "b", "c", "d"], ids(&items));
        assert_eq!(vec!["", "b", "d"], pages.cursors());
    }

    #[tokio::test]
    async fn failed_page_is_fetched_again_with_the_same_cursor() {
        let pages = Pages::new(vec![vec!["a"], vec![]]);
        let mut paginator = Paginator::new(&pages, Termination::EmptyPage);

        assert_eq!(vec!["a"], ids(&paginator.next_page().await.unwrap().unwrap()));

        pages.push_failure();
        assert!(paginator.next_page().await.is_err());
        assert!(!paginator.is_exhausted());

        assert_eq!(None, paginator.next_page().await.unwrap());
        assert!(paginator.is_exhausted());
        assert_eq!(vec!["", "a", "a"], pages.cursors());
    }

    #[tokio::test]
    async fn restart_goes_back_to_the_first_page() {
        let pages = Pages::new(vec![vec!["a"], vec![], vec!["b"], vec![]]);
        let mut paginator = Paginator::new(&pages, Termination::EmptyPage);

        while paginator.next_page().await.unwrap().is_some() {}
        paginator.restart();

        assert_eq!(vec!["b"], ids(&paginator.next_page().await.unwrap().unwrap()));
        assert_eq!(vec!["", "a", ""], pages.cursors());
    }

    #[tokio::test]
    async fn streams_pages_lazily() {
        let pages = Pages::new(vec![vec!["a", "b"], vec!["c"], vec![]]);

        let streamed: Vec<Vec<Item>> = Paginator::new(&pages, Termination::EmptyPage)
            .into_stream()
            .try_collect()
            .await
            .unwrap();

        assert_eq!(2, streamed.len());
        assert_eq!(vec!["c"], ids(&streamed[1]));
    }
}
