//! Read-only page content suppliers.

/// One name/body line on a rendered page.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct PageEntry {
    pub name: String,
    pub body: String,
}

/// A fully shaped page ready to be shown on the hosting message.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct RenderedPage {
    pub title: String,
    pub entries: Vec<PageEntry>,
}

/// Supplies page identifiers and per-page entries to a pagination session.
///
/// `page_ids` must stay stable while a session is alive; the session copies
/// it once at construction. `entries` is queried fresh on every render and
/// may legitimately return nothing.
pub trait PageSource: Send + Sync {
    /// Ordered identifiers of the available pages.
    fn page_ids(&self) -> Vec<String>;

    /// Entries shown on the page with the given identifier.
    fn entries(&self, page_id: &str) -> Vec<PageEntry>;
}
