use std::sync::Arc;

use tracing::{error, info};
use twilight_gateway::{EventTypeFlags, Intents, Shard, ShardId, StreamExt as _};
use twilight_http::Client;
use twilight_model::channel::message::EmojiReactionType;
use twilight_model::gateway::event::Event;

use rustls::crypto::ring::default_provider;

use nolka_commands::handle_message;
use nolka_core::{Context, config::Config};
use nolka_utils::pagination::ReactionEvent;

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt::init();

    default_provider()
        .install_default()
        .map_err(|_| anyhow::anyhow!("failed to install rustls ring provider"))?;

    // Load the .env file
    dotenvy::dotenv().ok();
    let config = Config::from_env()?;
    let token = config.token.clone();

    // Create a single shared HTTP Client
    let http = Arc::new(Client::new(token.clone()));
    let ctx = Context::new(Arc::clone(&http), config);

    // Declare which intents the bot has
    let intents = Intents::GUILDS
        | Intents::GUILD_MESSAGES
        | Intents::MESSAGE_CONTENT
        | Intents::GUILD_MESSAGE_REACTIONS;

    // A shard is one Gateway WebSocket connection to Discord
    let mut shard = Shard::new(ShardId::new(0, 1), token, intents);

    // Ctrl-C flips the shared shutdown token so live pagination sessions
    // can wind down instead of being torn mid-render.
    let shutdown = ctx.shutdown.clone();
    tokio::spawn(async move {
        if tokio::signal::ctrl_c().await.is_ok() {
            shutdown.cancel();
        }
    });

    info!("Nolka is connecting...");

    loop {
        let item = tokio::select! {
            _ = ctx.shutdown.cancelled() => break,
            item = shard.next_event(EventTypeFlags::all()) => match item {
                Some(item) => item,
                None => break,
            },
        };

        let event = match item {
            Ok(event) => event,
            Err(source) => {
                error!(?source, "gateway event stream error");
                continue;
            }
        };

        match event {
            Event::Ready(_) => {
                info!("Nolka has successfully awoken!");
            }

            Event::MessageCreate(msg) => {
                handle_message(ctx.clone(), msg).await?;
            }
            Event::ReactionAdd(reaction) => {
                // Custom emoji are never bound controls.
                let EmojiReactionType::Unicode { name } = &reaction.emoji else {
                    continue;
                };
                ctx.reactions
                    .dispatch(ReactionEvent {
                        message_id: reaction.message_id,
                        user_id: reaction.user_id,
                        emoji: name.clone(),
                    })
                    .await;
            }
            _ => {} // Ignore unused events
        }
    }

    info!("Nolka is shutting down.");
    Ok(())
}
