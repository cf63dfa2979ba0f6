//! In-memory fakes shared by the pagination tests.

use std::sync::Arc;
use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::Mutex;

use super::session::PageHost;
use super::source::{PageEntry, PageSource, RenderedPage};

/// Page source with a fixed page list and one synthetic entry per page.
pub(crate) struct FakeSource {
    pages: Vec<String>,
}

impl FakeSource {
    pub(crate) fn with_pages(pages: &[&str]) -> Self {
        Self {
            pages: pages.iter().map(|page| (*page).to_owned()).collect(),
        }
    }
}

impl PageSource for FakeSource {
    fn page_ids(&self) -> Vec<String> {
        self.pages.clone()
    }

    fn entries(&self, page_id: &str) -> Vec<PageEntry> {
        vec![PageEntry {
            name: format!("{page_id}-entry"),
            body: "a body".to_owned(),
        }]
    }
}

#[derive(Default)]
struct HostLog {
    shown: Mutex<Vec<RenderedPage>>,
    hosting_deletes: AtomicUsize,
    invoking_deletes: AtomicUsize,
    fail_next_show: AtomicBool,
    fail_deletes: AtomicBool,
}

/// Page host that records everything shown and deleted.
///
/// Clones share the same log, so a test can keep a probe handle after the
/// host has been moved into a session.
#[derive(Clone, Default)]
pub(crate) struct RecordingHost {
    log: Arc<HostLog>,
}

impl RecordingHost {
    pub(crate) fn new() -> Self {
        Self::default()
    }

    pub(crate) fn shown_titles(&self) -> Vec<String> {
        self.log
            .shown
            .lock()
            .unwrap()
            .iter()
            .map(|page| page.title.clone())
            .collect()
    }

    pub(crate) fn shown_count(&self) -> usize {
        self.log.shown.lock().unwrap().len()
    }

    pub(crate) fn hosting_deletes(&self) -> usize {
        self.log.hosting_deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn invoking_deletes(&self) -> usize {
        self.log.invoking_deletes.load(Ordering::SeqCst)
    }

    pub(crate) fn fail_next_show(&self) {
        self.log.fail_next_show.store(true, Ordering::SeqCst);
    }

    pub(crate) fn fail_deletes(&self) {
        self.log.fail_deletes.store(true, Ordering::SeqCst);
    }
}

impl PageHost for RecordingHost {
    async fn show_page(&self, page: &RenderedPage) -> anyhow::Result<()> {
        if self.log.fail_next_show.swap(false, Ordering::SeqCst) {
            anyhow::bail!("simulated edit failure");
        }
        self.log.shown.lock().unwrap().push(page.clone());
        Ok(())
    }

    async fn remove_hosting_message(&self) -> anyhow::Result<()> {
        if self.log.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("simulated delete failure");
        }
        self.log.hosting_deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }

    async fn remove_invoking_message(&self) -> anyhow::Result<()> {
        if self.log.fail_deletes.load(Ordering::SeqCst) {
            anyhow::bail!("simulated delete failure");
        }
        self.log.invoking_deletes.fetch_add(1, Ordering::SeqCst);
        Ok(())
    }
}
