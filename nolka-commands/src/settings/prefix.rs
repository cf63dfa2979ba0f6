use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::build_notice_embed;

use crate::{CommandMeta, SubcommandMeta};
use crate::error_handler::CommandError;

pub const META: CommandMeta = CommandMeta {
    name: "prefix",
    desc: "Get the prefixes used for Nolka on this guild.",
    category: "settings",
    usage: "-prefix",
    subcommands: &[
        SubcommandMeta {
            name: "set",
            desc: "Set Nolka's prefix for this guild.",
            usage: "-prefix set <prefix>",
        },
        SubcommandMeta {
            name: "add",
            desc: "Add a prefix to Nolka's prefixes for this guild.",
            usage: "-prefix add <prefixes>",
        },
        SubcommandMeta {
            name: "reset",
            desc: "Reset the prefix that Nolka uses on this guild.",
            usage: "-prefix reset",
        },
    ],
};

/// Show or mutate the guild's prefix list.
pub async fn run(
    ctx: Context,
    msg: &MessageCreate,
    sub: Option<&str>,
    rest: Option<&str>,
) -> anyhow::Result<()> {
    let Some(guild_id) = msg.guild_id else {
        return Err(CommandError::GuildOnly.into());
    };

    let reply = match sub {
        Some("set") => {
            let Some(prefix) = rest.and_then(|value| value.split_whitespace().next()) else {
                return Err(CommandError::MissingArgument {
                    usage: META.subcommands[0].usage,
                }
                .into());
            };

            if ctx
                .prefixes
                .prefixes(Some(guild_id))
                .await
                .iter()
                .any(|active| active == prefix)
            {
                format!("{prefix} is already a prefix")
            } else {
                ctx.prefixes.set(guild_id, prefix).await;
                format!("{prefix} was set")
            }
        }
        Some("add") => {
            let new_prefixes: Vec<&str> = rest
                .map(|value| value.split_whitespace().collect())
                .unwrap_or_default();
            if new_prefixes.is_empty() {
                return Err(CommandError::MissingArgument {
                    usage: META.subcommands[1].usage,
                }
                .into());
            }

            ctx.prefixes.add(guild_id, &new_prefixes).await;
            format!("{} can now be used as a prefix", new_prefixes.join(", "))
        }
        Some("reset") => {
            ctx.prefixes.reset(guild_id).await;
            "The guild prefix was reset".to_owned()
        }
        // Bare `prefix` (or an unknown subcommand) lists the active prefixes.
        _ => {
            let prefixes = ctx.prefixes.prefixes(Some(guild_id)).await;
            format!("The guild prefixes are {}", prefixes.join(", "))
        }
    };

    let embed = build_notice_embed(&reply)?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}
