//! Reaction-driven pagination for a single in-place-edited message.
//!
//! One command invocation owns one [`PaginationSession`] and one
//! [`ReactionDispatcher`]; the gateway loop feeds reactions to sessions
//! through the shared [`ReactionRouter`].

/// Default timeout for a reaction pagination session.
pub const DEFAULT_TIMEOUT_SECS: u64 = 120;

mod dispatcher;
mod page;
mod respond;
mod router;
mod session;
mod source;

#[cfg(test)]
pub(crate) mod testutil;

pub use dispatcher::{ControlSymbol, DispatcherState, ReactionDispatcher, ReactionEvent};
pub use page::{page_title, wrap_next, wrap_previous};
pub use respond::{MessageHost, add_page_controls};
pub use router::ReactionRouter;
pub use session::{PageHost, PaginationError, PaginationSession};
pub use source::{PageEntry, PageSource, RenderedPage};
