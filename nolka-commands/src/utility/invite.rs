use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::build_notice_embed;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "invite",
    desc: "Return an OAuth link to add this bot to a server.",
    category: "utility",
    usage: "-invite",
    subcommands: &[],
};

/// Permission bits requested by the generated invite link.
const INVITE_PERMISSIONS: u64 = 268_443_702;

/// Reply with the bot's OAuth authorization link.
pub async fn run(ctx: Context, msg: &MessageCreate) -> anyhow::Result<()> {
    let bot_user = ctx.http.current_user().await?.model().await?;
    let url = invite_url(bot_user.id.get());

    let embed = build_notice_embed(&format!("Add me to your server [here]({url})"))?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

fn invite_url(client_id: u64) -> String {
    format!(
        "https://discord.com/api/oauth2/authorize?client_id={client_id}&permissions={INVITE_PERMISSIONS}&scope=bot"
    )
}
