/// Generic embed builders shared across commands.
pub mod embed;
/// Reaction-driven pagination: sessions, dispatch, and event routing.
pub mod pagination;

/// Command prefix used when a guild has not configured its own.
pub const DEFAULT_PREFIX: &str = "-";
