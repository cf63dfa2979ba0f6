//! Navigation state for one paginated message.

use std::future::Future;

use tracing::debug;

use super::page;
use super::source::{PageSource, RenderedPage};

/// Errors raised while setting up a pagination session.
#[derive(Debug, thiserror::Error)]
pub enum PaginationError {
    /// The source produced no pages; an empty session can never render.
    #[error("page source produced no pages")]
    NoPages,
}

/// Transport seam for the single message hosting a pagination session.
///
/// Implemented against the Discord HTTP client in production and by an
/// in-memory fake in tests.
pub trait PageHost: Send + Sync {
    /// Replace the hosting message's displayed content in place.
    fn show_page(&self, page: &RenderedPage) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete the hosting message.
    fn remove_hosting_message(&self) -> impl Future<Output = anyhow::Result<()>> + Send;

    /// Delete the message that invoked the command.
    fn remove_invoking_message(&self) -> impl Future<Output = anyhow::Result<()>> + Send;
}

/// One viewer's navigation state over a fixed list of pages.
pub struct PaginationSession<S, H> {
    source: S,
    host: H,
    pages: Vec<String>,
    index: usize,
    stopped: bool,
}

impl<S: PageSource, H: PageHost> PaginationSession<S, H> {
    /// Build a session over the source's current pages.
    ///
    /// The page list is captured once here and stays fixed for the whole
    /// session. Fails fast when the source has nothing to show.
    pub fn new(source: S, host: H) -> Result<Self, PaginationError> {
        let pages = source.page_ids();
        if pages.is_empty() {
            return Err(PaginationError::NoPages);
        }

        Ok(Self {
            source,
            host,
            pages,
            index: 0,
            stopped: false,
        })
    }

    /// Zero-based index of the page currently shown.
    pub fn index(&self) -> usize {
        self.index
    }

    /// Number of pages; fixed for the session's lifetime.
    pub fn total(&self) -> usize {
        self.pages.len()
    }

    /// Move one page back, wrapping, and re-render.
    pub async fn previous(&mut self) -> anyhow::Result<()> {
        self.index = page::wrap_previous(self.index, self.pages.len());
        self.render().await
    }

    /// Move one page forward, wrapping, and re-render.
    pub async fn next(&mut self) -> anyhow::Result<()> {
        self.index = page::wrap_next(self.index, self.pages.len());
        self.render().await
    }

    /// Render the current page onto the hosting message.
    ///
    /// Entries are queried fresh from the source on every call. A transport
    /// failure here propagates: the displayed page may now be stale.
    pub async fn render(&self) -> anyhow::Result<()> {
        let label = &self.pages[self.index];
        let rendered = RenderedPage {
            title: page::page_title(self.index, self.pages.len(), label),
            entries: self.source.entries(label),
        };

        self.host.show_page(&rendered).await
    }

    /// Tear down the interaction: delete the invoking and hosting messages.
    ///
    /// Cleanup is best-effort; the messages may already be gone. Calling
    /// this again after the first time does nothing.
    pub async fn stop(&mut self) {
        if self.stopped {
            return;
        }
        self.stopped = true;

        if let Err(source) = self.host.remove_invoking_message().await {
            debug!(?source, "invoking message was not deleted");
        }
        if let Err(source) = self.host.remove_hosting_message().await {
            debug!(?source, "hosting message was not deleted");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{FakeSource, RecordingHost};
    use super::*;

    fn four_page_session() -> (PaginationSession<FakeSource, RecordingHost>, RecordingHost) {
        let source = FakeSource::with_pages(&["one", "two", "three", "four"]);
        let host = RecordingHost::new();
        let probe = host.clone();
        let session = PaginationSession::new(source, host).unwrap();
        (session, probe)
    }

    #[test]
    fn zero_pages_fails_at_construction() {
        let source = FakeSource::with_pages(&[]);
        let result = PaginationSession::new(source, RecordingHost::new());
        assert!(matches!(result, Err(PaginationError::NoPages)));
    }

    #[tokio::test]
    async fn navigation_wraps_and_total_stays_fixed() {
        let (mut session, probe) = four_page_session();
        assert_eq!(session.index(), 0);
        assert_eq!(session.total(), 4);

        session.next().await.unwrap();
        assert_eq!(session.index(), 1);
        for _ in 0..3 {
            session.next().await.unwrap();
        }
        assert_eq!(session.index(), 0);
        assert_eq!(session.total(), 4);

        session.previous().await.unwrap();
        assert_eq!(session.index(), 3);

        let shown = probe.shown_titles();
        assert_eq!(shown.first().unwrap(), "Page 2 of 4 | two");
        assert_eq!(shown.last().unwrap(), "Page 4 of 4 | four");
    }

    #[tokio::test]
    async fn render_title_names_current_page() {
        let (session, probe) = four_page_session();
        session.render().await.unwrap();
        assert_eq!(probe.shown_titles(), vec!["Page 1 of 4 | one"]);
    }

    #[tokio::test]
    async fn render_failure_propagates() {
        let (session, probe) = four_page_session();
        probe.fail_next_show();
        assert!(session.render().await.is_err());
    }

    #[tokio::test]
    async fn stop_is_idempotent() {
        let (mut session, probe) = four_page_session();

        session.stop().await;
        assert_eq!(probe.hosting_deletes(), 1);
        assert_eq!(probe.invoking_deletes(), 1);

        session.stop().await;
        assert_eq!(probe.hosting_deletes(), 1);
        assert_eq!(probe.invoking_deletes(), 1);
    }

    #[tokio::test]
    async fn stop_swallows_delete_failures() {
        let (mut session, probe) = four_page_session();
        probe.fail_deletes();
        session.stop().await;
        assert_eq!(probe.hosting_deletes(), 0);
    }
}
