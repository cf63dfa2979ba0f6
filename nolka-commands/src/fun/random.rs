use rand::Rng;
use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::build_notice_embed;

use crate::CommandMeta;
use crate::error_handler::CommandError;

pub const META: CommandMeta = CommandMeta {
    name: "random",
    desc: "Get a random number. Default is 0 to 10. One argument: 0 to argument. Two arguments: argument 1 to argument 2.",
    category: "fun",
    usage: "-random [number] [number]",
    subcommands: &[],
};

/// Reply with a random number from the requested range.
pub async fn run(
    ctx: Context,
    msg: &MessageCreate,
    arg1: Option<&str>,
    arg2: Option<&str>,
) -> anyhow::Result<()> {
    let (low, high) = resolve_bounds(arg1, arg2);
    if high <= low {
        return Err(CommandError::InvalidRange { low, high }.into());
    }

    let value = rand::rng().random_range(low..high);
    let embed = build_notice_embed(&format!("Random from {low} to {high}: {value}"))?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

/// Resolve the requested bounds; unparsable arguments fall back to 0..10.
fn resolve_bounds(arg1: Option<&str>, arg2: Option<&str>) -> (i64, i64) {
    match (arg1, arg2) {
        (Some(first), Some(second)) => first
            .parse::<i64>()
            .ok()
            .zip(second.parse::<i64>().ok())
            .unwrap_or((0, 10)),
        (Some(first), None) => first
            .parse::<i64>()
            .ok()
            .map(|high| (0, high))
            .unwrap_or((0, 10)),
        (None, _) => (0, 10),
    }
}
