/// Environment-driven configuration.
pub mod config;
/// In-memory per-guild prefix overrides.
pub mod prefix;

use std::sync::Arc;

use tokio_util::sync::CancellationToken;
use twilight_http::Client;

use nolka_utils::pagination::ReactionRouter;

use crate::config::Config;
use crate::prefix::PrefixStore;

/// Shared application context passed into command handlers.
///
/// Cheap to clone because it only stores reference-counted shared state.
#[derive(Clone)]
pub struct Context {
    pub http: Arc<Client>,
    pub config: Arc<Config>,
    pub prefixes: Arc<PrefixStore>,
    pub reactions: Arc<ReactionRouter>,
    /// Cancelled when the bot is shutting down; live pagination sessions
    /// observe it and wind down quietly.
    pub shutdown: CancellationToken,
}

impl Context {
    /// Create a new application context.
    pub fn new(http: Arc<Client>, config: Config) -> Self {
        Self {
            http,
            config: Arc::new(config),
            prefixes: Arc::new(PrefixStore::default()),
            reactions: Arc::new(ReactionRouter::default()),
            shutdown: CancellationToken::new(),
        }
    }
}
