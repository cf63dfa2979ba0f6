use rand::Rng;
use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::build_color_embed;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "color",
    desc: "Get a random color.",
    category: "fun",
    usage: "-color",
    subcommands: &[],
};

/// Reply with a random 24-bit color, tinting the embed to match.
pub async fn run(ctx: Context, msg: &MessageCreate) -> anyhow::Result<()> {
    let value: u32 = rand::rng().random_range(0..0x00FF_FFFF);
    let embed = build_color_embed(&format!("#{value:06X}"), value)?;

    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}
