pub mod error_handler;
pub mod fun;
pub mod settings;
pub mod utility;

use twilight_model::gateway::payload::incoming::MessageCreate;

use nolka_core::Context;

// Global command meta data
pub struct CommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub category: &'static str,
    pub usage: &'static str,
    pub subcommands: &'static [SubcommandMeta],
}

/// Help metadata for one subcommand of a command group.
pub struct SubcommandMeta {
    pub name: &'static str,
    pub desc: &'static str,
    pub usage: &'static str,
}

pub const COMMANDS: &[CommandMeta] = &[
    utility::help::META,
    utility::invite::META,
    utility::report::META,
    fun::random::META,
    fun::color::META,
    settings::prefix::META,
    error_handler::META,
    // Add new commands here
];

pub async fn handle_message(ctx: Context, msg: Box<MessageCreate>) -> anyhow::Result<()> {
    if msg.author.bot {
        return Ok(());
    }

    let content = msg.content.trim();
    let Some(stripped) = ctx.prefixes.strip_prefix(msg.guild_id, content).await else {
        return Ok(());
    };

    let (cmd, rest) = split_command(stripped);
    let (arg1, arg_tail) = split_first_argument(rest);

    let outcome = match cmd.as_str() {
        "help" => utility::help::run(ctx.clone(), &msg).await,
        "invite" => utility::invite::run(ctx.clone(), &msg).await,
        "report" => utility::report::run(ctx.clone(), &msg, rest).await,
        "random" | "rand" => fun::random::run(ctx.clone(), &msg, arg1, arg_tail).await,
        "color" | "colour" => fun::color::run(ctx.clone(), &msg).await,
        "prefix" => settings::prefix::run(ctx.clone(), &msg, arg1, arg_tail).await,
        // Add new commands here
        _ => Ok(()),
    };

    if let Err(error) = outcome {
        error_handler::respond(&ctx, &msg, &cmd, error).await;
    }

    Ok(())
}

/// Split the prefix-stripped content into the command word and the rest.
fn split_command(content: &str) -> (String, Option<&str>) {
    let mut command_and_rest = content.trim().splitn(2, char::is_whitespace);
    let cmd = command_and_rest.next().unwrap_or("").to_ascii_lowercase();
    let rest = command_and_rest
        .next()
        .map(str::trim)
        .filter(|value| !value.is_empty());

    (cmd, rest)
}

/// Split an argument tail into its first token and the remainder.
fn split_first_argument(rest: Option<&str>) -> (Option<&str>, Option<&str>) {
    let Some(value) = rest else {
        return (None, None);
    };

    let mut args = value.splitn(2, char::is_whitespace);
    let first = args.next().filter(|arg| !arg.is_empty());
    let tail = args
        .next()
        .map(str::trim)
        .filter(|remaining| !remaining.is_empty());

    (first, tail)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_command_lowercases_and_trims() {
        let (cmd, rest) = split_command("  HELP  ");
        assert_eq!(cmd, "help");
        assert_eq!(rest, None);

        let (cmd, rest) = split_command("Prefix set  !");
        assert_eq!(cmd, "prefix");
        assert_eq!(rest, Some("set  !"));
    }

    #[test]
    fn split_first_argument_separates_the_tail() {
        assert_eq!(split_first_argument(None), (None, None));
        assert_eq!(split_first_argument(Some("set")), (Some("set"), None));
        assert_eq!(
            split_first_argument(Some("add ! ?")),
            (Some("add"), Some("! ?"))
        );
    }
}
