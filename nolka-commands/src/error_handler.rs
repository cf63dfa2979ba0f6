//! Internal responder turning command failures into readable replies.
//!
//! Registered under its own category so the help catalog can exclude it:
//! nothing here is user-invocable.

use tracing::error;
use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;
use nolka_utils::embed::build_error_embed;

use crate::CommandMeta;

pub const META: CommandMeta = CommandMeta {
    name: "errors",
    desc: "Turns command failures into readable replies.",
    category: "error-handler",
    usage: "",
    subcommands: &[],
};

/// User-facing command failures routed to this responder.
#[derive(Debug, thiserror::Error)]
pub enum CommandError {
    #[error("missing required argument")]
    MissingArgument { usage: &'static str },
    #[error("empty random range {low}..{high}")]
    InvalidRange { low: i64, high: i64 },
    #[error("command only works in a guild")]
    GuildOnly,
}

/// Reply to a failed invocation with an error embed.
///
/// Delivery is best-effort: if the reply itself cannot be sent (often the
/// same transport problem that failed the command), the failure is logged
/// and swallowed so it can never take down the event loop.
pub async fn respond(ctx: &Context, msg: &MessageCreate, command: &str, error: anyhow::Error) {
    let text = reply_text(command, &error);
    if let Err(source) = send_reply(ctx, msg, &text).await {
        error!(?source, command, "error reply was not delivered");
    }
}

/// Pick the user-facing reply for a failed invocation.
///
/// Known [`CommandError`] values get a specific message; anything else is
/// logged and answered generically.
fn reply_text(command: &str, error: &anyhow::Error) -> String {
    match error.downcast_ref::<CommandError>() {
        Some(CommandError::MissingArgument { usage }) => {
            format!("That command needs more input. Usage: `{usage}`")
        }
        Some(CommandError::InvalidRange { low, high }) => {
            format!("There are no numbers between {low} and {high}")
        }
        Some(CommandError::GuildOnly) => "That command only works inside a guild".to_owned(),
        None => {
            error!(?error, command, "command failed");
            "Something went wrong running that command".to_owned()
        }
    }
}

async fn send_reply(ctx: &Context, msg: &MessageCreate, text: &str) -> anyhow::Result<()> {
    let embed = build_error_embed(text)?;
    ctx.http
        .create_message(msg.channel_id)
        .embeds(&[embed])
        .await?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn known_errors_get_specific_replies() {
        let error: anyhow::Error = CommandError::MissingArgument {
            usage: "-report <text>",
        }
        .into();
        assert!(reply_text("report", &error).contains("`-report <text>`"));

        let error: anyhow::Error = CommandError::InvalidRange { low: 5, high: 5 }.into();
        assert!(reply_text("random", &error).contains("between 5 and 5"));

        let error: anyhow::Error = CommandError::GuildOnly.into();
        assert!(reply_text("prefix", &error).contains("inside a guild"));
    }

    #[test]
    fn unexpected_errors_get_the_generic_reply() {
        let error = anyhow::anyhow!("transport exploded");
        assert_eq!(
            reply_text("ping", &error),
            "Something went wrong running that command"
        );
    }
}
