//! Pure page-index arithmetic for wraparound navigation.
//!
//! Callers guarantee `total > 0`; the session enforces this at construction.

/// Step one page back, wrapping from the first page to the last.
pub fn wrap_previous(index: usize, total: usize) -> usize {
    (index + total - 1) % total
}

/// Step one page forward, wrapping from the last page to the first.
pub fn wrap_next(index: usize, total: usize) -> usize {
    (index + 1) % total
}

/// Title line shown above a rendered page. One-based for display.
pub fn page_title(index: usize, total: usize, label: &str) -> String {
    format!("Page {} of {} | {}", index + 1, total, label)
}
