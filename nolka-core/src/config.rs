use std::env;

use twilight_model::id::{Id, marker::ChannelMarker};

/// Configuration read from the process environment at startup.
pub struct Config {
    /// Discord bot token.
    pub token: String,
    /// Channel receiving forwarded reports, when configured.
    pub log_channel_id: Option<Id<ChannelMarker>>,
}

impl Config {
    /// Read configuration from the environment.
    ///
    /// `DISCORD_TOKEN` is required; `LOG_CHANNEL_ID` is an optional
    /// non-zero channel id.
    pub fn from_env() -> anyhow::Result<Self> {
        let token = env::var("DISCORD_TOKEN")?;

        let log_channel_id = match env::var("LOG_CHANNEL_ID") {
            Ok(raw) => {
                let value = raw.parse::<u64>()?;
                Some(
                    Id::new_checked(value)
                        .ok_or_else(|| anyhow::anyhow!("LOG_CHANNEL_ID must be non-zero"))?,
                )
            }
            Err(_) => None,
        };

        Ok(Self {
            token,
            log_channel_id,
        })
    }
}
