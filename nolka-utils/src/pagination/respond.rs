//! Discord-backed hosting-message transport.

use std::sync::Arc;

use twilight_http::Client;
use twilight_http::request::channel::reaction::RequestReactionType;
use twilight_model::id::{
    Id,
    marker::{ChannelMarker, MessageMarker},
};

use crate::embed::build_page_embed;

use super::dispatcher::ControlSymbol;
use super::session::PageHost;
use super::source::RenderedPage;

/// [`PageHost`] editing one Discord message in place.
pub struct MessageHost {
    http: Arc<Client>,
    channel_id: Id<ChannelMarker>,
    hosting_message_id: Id<MessageMarker>,
    invoking_message_id: Id<MessageMarker>,
}

impl MessageHost {
    pub fn new(
        http: Arc<Client>,
        channel_id: Id<ChannelMarker>,
        hosting_message_id: Id<MessageMarker>,
        invoking_message_id: Id<MessageMarker>,
    ) -> Self {
        Self {
            http,
            channel_id,
            hosting_message_id,
            invoking_message_id,
        }
    }
}

impl PageHost for MessageHost {
    async fn show_page(&self, page: &RenderedPage) -> anyhow::Result<()> {
        let embed = build_page_embed(page)?;
        self.http
            .update_message(self.channel_id, self.hosting_message_id)
            .embeds(Some(&[embed]))
            .await?;

        Ok(())
    }

    async fn remove_hosting_message(&self) -> anyhow::Result<()> {
        self.http
            .delete_message(self.channel_id, self.hosting_message_id)
            .await?;

        Ok(())
    }

    async fn remove_invoking_message(&self) -> anyhow::Result<()> {
        self.http
            .delete_message(self.channel_id, self.invoking_message_id)
            .await?;

        Ok(())
    }
}

/// Seed the control reactions on a hosting message, in display order.
pub async fn add_page_controls(
    http: &Client,
    channel_id: Id<ChannelMarker>,
    message_id: Id<MessageMarker>,
) -> anyhow::Result<()> {
    for symbol in ControlSymbol::ALL {
        http.create_reaction(
            channel_id,
            message_id,
            &RequestReactionType::Unicode {
                name: symbol.emoji(),
            },
        )
        .await?;
    }

    Ok(())
}
