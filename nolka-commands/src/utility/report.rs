use tracing::error;
use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::{build_infraction_embed, build_notice_embed};

use crate::CommandMeta;
use crate::error_handler::CommandError;

pub const META: CommandMeta = CommandMeta {
    name: "report",
    desc: "Report something to the bot owner so it appears in the log channel.",
    category: "utility",
    usage: "-report <something that happened with the bot>",
    subcommands: &[],
};

/// Forward a report to the configured log channel.
pub async fn run(ctx: Context, msg: &MessageCreate, report: Option<&str>) -> anyhow::Result<()> {
    let Some(report) = report else {
        return Err(CommandError::MissingArgument { usage: META.usage }.into());
    };

    let Some(log_channel_id) = ctx.config.log_channel_id else {
        let embed = build_notice_embed("The report was not sent")?;
        ctx.http
            .create_message(msg.channel_id)
            .embeds(&[embed])
            .await?;
        return Ok(());
    };

    let origin = msg
        .guild_id
        .map_or_else(|| "a direct message".to_owned(), |id| format!("guild {id}"));
    let text = format!("{} from {} said this:\n{}", msg.author.name, origin, report);
    let forwarded = build_infraction_embed(&text)?;

    if let Err(source) = ctx
        .http
        .create_message(log_channel_id)
        .embeds(&[forwarded])
        .await
    {
        error!(?source, "report forwarding failed");
        let embed = build_notice_embed("The report was not sent")?;
        ctx.http
            .create_message(msg.channel_id)
            .embeds(&[embed])
            .await?;
        return Ok(());
    }

    let embed = build_notice_embed("The report has been sent")?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}
