use twilight_model::channel::message::embed::Embed;
use twilight_util::builder::embed::{EmbedBuilder, EmbedFieldBuilder};

use crate::pagination::RenderedPage;

/// Default embed color used across the bot UI.
pub const DEFAULT_EMBED_COLOR: u32 = 0x5C_7C_FA;
/// Embed color used for error replies.
pub const ERROR_EMBED_COLOR: u32 = 0xD0_3B_3B;
/// Embed color used for forwarded reports.
pub const INFRACTION_EMBED_COLOR: u32 = 0xE8_A3_3D;

/// Build a plain notice embed with consistent styling.
pub fn build_notice_embed(text: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(DEFAULT_EMBED_COLOR)
        .description(text)
        .validate()?
        .build();

    Ok(embed)
}

/// Build an error embed shown when a command cannot proceed.
pub fn build_error_embed(text: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(ERROR_EMBED_COLOR)
        .description(text)
        .validate()?
        .build();

    Ok(embed)
}

/// Build the embed forwarded to the report log channel.
pub fn build_infraction_embed(text: &str) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(INFRACTION_EMBED_COLOR)
        .description(text)
        .validate()?
        .build();

    Ok(embed)
}

/// Build an embed tinted with an arbitrary color, for color previews.
pub fn build_color_embed(text: &str, color: u32) -> anyhow::Result<Embed> {
    let embed = EmbedBuilder::new()
        .color(color)
        .description(text)
        .validate()?
        .build();

    Ok(embed)
}

/// Build the embed for one rendered pagination page.
///
/// Every entry becomes a non-inline field; a page with no entries is valid
/// and renders as a bare title.
pub fn build_page_embed(page: &RenderedPage) -> anyhow::Result<Embed> {
    let mut builder = EmbedBuilder::new()
        .title(&page.title)
        .color(DEFAULT_EMBED_COLOR);

    for entry in &page.entries {
        builder = builder.field(EmbedFieldBuilder::new(&entry.name, &entry.body));
    }

    Ok(builder.validate()?.build())
}
