//! Interactive, reaction-paginated command catalog.

use std::sync::Arc;
use std::time::Duration;

use tracing::error;
use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::{build_error_embed, build_notice_embed};
use nolka_utils::pagination::{
    DEFAULT_TIMEOUT_SECS, MessageHost, PageEntry, PageSource, PaginationError, PaginationSession,
    ReactionDispatcher, add_page_controls,
};

use crate::{COMMANDS, CommandMeta};

pub const META: CommandMeta = CommandMeta {
    name: "help",
    desc: "Ask Nolka for help, one category per page.",
    category: "utility",
    usage: "-help",
    subcommands: &[],
};

/// Categories hidden from the help catalog.
const HIDDEN_CATEGORIES: &[&str] = &["error-handler"];
/// Body shown for commands without a description.
const NO_DOCSTRING: &str = "No docstring";

/// Help pages backed by the static command registry, one category per page.
pub struct HelpPageSource {
    commands: &'static [CommandMeta],
}

impl HelpPageSource {
    pub fn over(commands: &'static [CommandMeta]) -> Self {
        Self { commands }
    }
}

impl PageSource for HelpPageSource {
    fn page_ids(&self) -> Vec<String> {
        let mut categories: Vec<String> = Vec::new();
        for command in self.commands {
            if HIDDEN_CATEGORIES.contains(&command.category) {
                continue;
            }
            if !categories.iter().any(|seen| seen == command.category) {
                categories.push(command.category.to_owned());
            }
        }

        categories
    }

    fn entries(&self, page_id: &str) -> Vec<PageEntry> {
        let mut entries = Vec::new();
        for command in self
            .commands
            .iter()
            .filter(|command| command.category == page_id)
        {
            if command.subcommands.is_empty() {
                entries.push(PageEntry {
                    name: command.name.to_owned(),
                    body: docstring(command.desc),
                });
            } else {
                // Grouped commands list one entry per subcommand.
                for sub in command.subcommands {
                    entries.push(PageEntry {
                        name: format!("{} {}", command.name, sub.name),
                        body: docstring(sub.desc),
                    });
                }
            }
        }

        entries
    }
}

fn docstring(raw: &str) -> String {
    if raw.trim().is_empty() {
        NO_DOCSTRING.to_owned()
    } else {
        raw.to_owned()
    }
}

/// Start a paginated help session owned by the invoking user.
pub async fn run(ctx: Context, msg: &MessageCreate) -> anyhow::Result<()> {
    let placeholder = build_notice_embed("Getting help")?;
    let hosting = ctx
        .http
        .create_message(msg.channel_id)
        .embeds(&[placeholder])
        .await?
        .model()
        .await?;

    let source = HelpPageSource::over(COMMANDS);
    let host = MessageHost::new(Arc::clone(&ctx.http), msg.channel_id, hosting.id, msg.id);

    let session = match PaginationSession::new(source, host) {
        Ok(session) => session,
        Err(PaginationError::NoPages) => {
            let embed = build_error_embed("There is nothing to show help for")?;
            ctx.http
                .update_message(msg.channel_id, hosting.id)
                .embeds(Some(&[embed]))
                .await?;
            return Ok(());
        }
    };

    add_page_controls(&ctx.http, msg.channel_id, hosting.id).await?;

    let events = ctx.reactions.subscribe(hosting.id).await;
    let mut dispatcher = ReactionDispatcher::new(
        session,
        events,
        hosting.id,
        msg.author.id,
        Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        ctx.shutdown.clone(),
    );

    let reactions = Arc::clone(&ctx.reactions);
    let hosting_id = hosting.id;
    tokio::spawn(async move {
        if let Err(source) = dispatcher.start().await {
            error!(?source, "help pagination ended early");
        }
        reactions.unsubscribe(hosting_id).await;
    });

    Ok(())
}
