use std::collections::HashMap;

use tokio::sync::Mutex;
use twilight_model::id::{Id, marker::GuildMarker};

use nolka_utils::DEFAULT_PREFIX;

/// In-memory per-guild prefix overrides.
///
/// Guilds without an override (and direct messages) use [`DEFAULT_PREFIX`].
/// Overrides last until the process restarts.
#[derive(Default)]
pub struct PrefixStore {
    overrides: Mutex<HashMap<Id<GuildMarker>, Vec<String>>>,
}

impl PrefixStore {
    /// Prefixes currently active for a guild.
    pub async fn prefixes(&self, guild_id: Option<Id<GuildMarker>>) -> Vec<String> {
        if let Some(guild_id) = guild_id
            && let Some(overrides) = self.overrides.lock().await.get(&guild_id)
        {
            return overrides.clone();
        }

        vec![DEFAULT_PREFIX.to_owned()]
    }

    /// Replace a guild's prefixes with a single prefix.
    pub async fn set(&self, guild_id: Id<GuildMarker>, prefix: &str) {
        self.overrides
            .lock()
            .await
            .insert(guild_id, vec![prefix.to_owned()]);
    }

    /// Append prefixes to a guild, skipping ones already active.
    pub async fn add(&self, guild_id: Id<GuildMarker>, new_prefixes: &[&str]) {
        let mut overrides = self.overrides.lock().await;
        let active = overrides
            .entry(guild_id)
            .or_insert_with(|| vec![DEFAULT_PREFIX.to_owned()]);

        for prefix in new_prefixes {
            if !active.iter().any(|existing| existing == prefix) {
                active.push((*prefix).to_owned());
            }
        }
    }

    /// Drop a guild's overrides, restoring the default prefix.
    pub async fn reset(&self, guild_id: Id<GuildMarker>) {
        self.overrides.lock().await.remove(&guild_id);
    }

    /// Strip the longest active prefix from message content, if any.
    pub async fn strip_prefix<'a>(
        &self,
        guild_id: Option<Id<GuildMarker>>,
        content: &'a str,
    ) -> Option<&'a str> {
        let mut prefixes = self.prefixes(guild_id).await;
        prefixes.sort_by_key(|prefix| std::cmp::Reverse(prefix.len()));

        prefixes
            .iter()
            .find_map(|prefix| content.strip_prefix(prefix.as_str()))
    }
}
