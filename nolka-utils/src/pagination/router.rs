//! Fan-out of gateway reactions to live pagination sessions.

use std::collections::HashMap;

use tokio::sync::{Mutex, mpsc};
use twilight_model::id::{Id, marker::MessageMarker};

use super::dispatcher::ReactionEvent;

/// Capacity of each session's event feed; reactions beyond it are dropped.
const EVENT_FEED_CAPACITY: usize = 16;

/// Routes gateway reaction events to the session listening on each message.
///
/// The gateway loop calls [`ReactionRouter::dispatch`] for every unicode
/// reaction; reactions on messages without a live session are ignored.
#[derive(Default)]
pub struct ReactionRouter {
    feeds: Mutex<HashMap<Id<MessageMarker>, mpsc::Sender<ReactionEvent>>>,
}

impl ReactionRouter {
    /// Open an event feed for a hosting message.
    pub async fn subscribe(&self, message_id: Id<MessageMarker>) -> mpsc::Receiver<ReactionEvent> {
        let (feed, events) = mpsc::channel(EVENT_FEED_CAPACITY);
        self.feeds.lock().await.insert(message_id, feed);
        events
    }

    /// Drop the feed for a hosting message once its session has ended.
    pub async fn unsubscribe(&self, message_id: Id<MessageMarker>) {
        self.feeds.lock().await.remove(&message_id);
    }

    /// Forward a reaction to the listening session, if any.
    ///
    /// A saturated feed drops the reaction rather than blocking the
    /// gateway loop.
    pub async fn dispatch(&self, event: ReactionEvent) {
        if let Some(feed) = self.feeds.lock().await.get(&event.message_id) {
            let _ = feed.try_send(event);
        }
    }
}
