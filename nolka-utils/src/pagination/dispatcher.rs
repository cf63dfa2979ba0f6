//! Reaction listener driving one pagination session's lifecycle.

use std::time::Duration;

use tokio::sync::mpsc;
use tokio::time::{Instant, sleep_until};
use tokio_util::sync::CancellationToken;
use twilight_model::id::{
    Id,
    marker::{MessageMarker, UserMarker},
};

use super::session::{PageHost, PaginationSession};
use super::source::PageSource;

/// Control inputs the dispatcher binds on the hosting message.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ControlSymbol {
    Previous,
    Next,
    Stop,
}

impl ControlSymbol {
    /// Every bound symbol, in the order reactions are seeded.
    pub const ALL: [ControlSymbol; 3] =
        [ControlSymbol::Previous, ControlSymbol::Next, ControlSymbol::Stop];

    /// Unicode emoji used for the reaction control.
    pub const fn emoji(self) -> &'static str {
        match self {
            Self::Previous => "\u{25c0}",
            Self::Next => "\u{25b6}",
            Self::Stop => "\u{23f9}",
        }
    }

    /// Map a reaction emoji back to its control, if bound.
    ///
    /// Clients may append an emoji variation selector; accept both forms.
    pub fn from_emoji(raw: &str) -> Option<Self> {
        match raw.trim_end_matches('\u{fe0f}') {
            "\u{25c0}" => Some(Self::Previous),
            "\u{25b6}" => Some(Self::Next),
            "\u{23f9}" => Some(Self::Stop),
            _ => None,
        }
    }
}

/// A reaction observed by the gateway, reduced to what dispatch needs.
#[derive(Clone, Debug)]
pub struct ReactionEvent {
    pub message_id: Id<MessageMarker>,
    pub user_id: Id<UserMarker>,
    pub emoji: String,
}

/// Lifecycle of a dispatcher.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum DispatcherState {
    Idle,
    Listening,
    Terminated,
}

/// Listens for control reactions on one hosting message and drives the
/// session owned by a single command invocation.
///
/// Events are handled one at a time: a render triggered by one reaction is
/// awaited before the next reaction is taken off the feed.
pub struct ReactionDispatcher<S, H> {
    session: PaginationSession<S, H>,
    events: mpsc::Receiver<ReactionEvent>,
    hosting_message_id: Id<MessageMarker>,
    viewer_id: Id<UserMarker>,
    timeout: Duration,
    shutdown: CancellationToken,
    state: DispatcherState,
}

impl<S: PageSource, H: PageHost> ReactionDispatcher<S, H> {
    pub fn new(
        session: PaginationSession<S, H>,
        events: mpsc::Receiver<ReactionEvent>,
        hosting_message_id: Id<MessageMarker>,
        viewer_id: Id<UserMarker>,
        timeout: Duration,
        shutdown: CancellationToken,
    ) -> Self {
        Self {
            session,
            events,
            hosting_message_id,
            viewer_id,
            timeout,
            shutdown,
            state: DispatcherState::Idle,
        }
    }

    pub fn state(&self) -> DispatcherState {
        self.state
    }

    pub fn session(&self) -> &PaginationSession<S, H> {
        &self.session
    }

    /// Render the first page, then pump control events until the viewer
    /// stops the session, the timeout elapses, or shutdown is requested.
    ///
    /// Timeout and shutdown are expected ends of life: the loop winds down
    /// quietly and leaves the last rendered page in place. Only a failed
    /// render surfaces as an error.
    pub async fn start(&mut self) -> anyhow::Result<()> {
        self.state = DispatcherState::Listening;
        let result = self.listen().await;
        self.state = DispatcherState::Terminated;
        result
    }

    async fn listen(&mut self) -> anyhow::Result<()> {
        self.session.render().await?;

        let deadline = Instant::now() + self.timeout;
        loop {
            let event = tokio::select! {
                _ = self.shutdown.cancelled() => return Ok(()),
                _ = sleep_until(deadline) => return Ok(()),
                maybe = self.events.recv() => match maybe {
                    Some(event) => event,
                    // Feed closed upstream: same quiet wind-down as a timeout.
                    None => return Ok(()),
                },
            };

            if event.message_id != self.hosting_message_id || event.user_id != self.viewer_id {
                continue;
            }
            let Some(symbol) = ControlSymbol::from_emoji(&event.emoji) else {
                continue;
            };

            match symbol {
                ControlSymbol::Previous => self.session.previous().await?,
                ControlSymbol::Next => self.session.next().await?,
                ControlSymbol::Stop => {
                    self.session.stop().await;
                    return Ok(());
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::super::testutil::{FakeSource, RecordingHost};
    use super::*;

    const HOSTING: Id<MessageMarker> = Id::new(100);
    const VIEWER: Id<UserMarker> = Id::new(7);

    fn dispatcher(
        pages: &[&str],
        events: mpsc::Receiver<ReactionEvent>,
        shutdown: CancellationToken,
    ) -> (ReactionDispatcher<FakeSource, RecordingHost>, RecordingHost) {
        let host = RecordingHost::new();
        let probe = host.clone();
        let session = PaginationSession::new(FakeSource::with_pages(pages), host).unwrap();
        let dispatcher = ReactionDispatcher::new(
            session,
            events,
            HOSTING,
            VIEWER,
            Duration::from_secs(120),
            shutdown,
        );
        (dispatcher, probe)
    }

    fn reaction(message_id: Id<MessageMarker>, user_id: Id<UserMarker>, emoji: &str) -> ReactionEvent {
        ReactionEvent {
            message_id,
            user_id,
            emoji: emoji.to_owned(),
        }
    }

    #[tokio::test]
    async fn navigation_and_stop_drive_the_session() {
        let (tx, rx) = mpsc::channel(16);
        let (mut dispatcher, probe) = dispatcher(&["one", "two", "three"], rx, CancellationToken::new());
        assert_eq!(dispatcher.state(), DispatcherState::Idle);

        tx.send(reaction(HOSTING, VIEWER, "\u{25b6}")).await.unwrap();
        tx.send(reaction(HOSTING, VIEWER, "\u{25b6}\u{fe0f}")).await.unwrap();
        tx.send(reaction(HOSTING, VIEWER, "\u{25c0}")).await.unwrap();
        tx.send(reaction(HOSTING, VIEWER, "\u{23f9}")).await.unwrap();

        dispatcher.start().await.unwrap();

        assert_eq!(dispatcher.state(), DispatcherState::Terminated);
        assert_eq!(dispatcher.session().index(), 1);
        assert_eq!(
            probe.shown_titles(),
            vec![
                "Page 1 of 3 | one",
                "Page 2 of 3 | two",
                "Page 3 of 3 | three",
                "Page 2 of 3 | two",
            ]
        );
        assert_eq!(probe.hosting_deletes(), 1);
        assert_eq!(probe.invoking_deletes(), 1);
    }

    #[tokio::test]
    async fn foreign_events_are_silently_ignored() {
        let (tx, rx) = mpsc::channel(16);
        let (mut dispatcher, probe) = dispatcher(&["one", "two"], rx, CancellationToken::new());

        // Wrong viewer, wrong message, unbound emoji.
        tx.send(reaction(HOSTING, Id::new(9), "\u{25b6}")).await.unwrap();
        tx.send(reaction(Id::new(200), VIEWER, "\u{25b6}")).await.unwrap();
        tx.send(reaction(HOSTING, VIEWER, "\u{1f600}")).await.unwrap();
        tx.send(reaction(HOSTING, VIEWER, "\u{23f9}")).await.unwrap();

        dispatcher.start().await.unwrap();

        assert_eq!(dispatcher.session().index(), 0);
        // Only the initial render happened.
        assert_eq!(probe.shown_count(), 1);
    }

    #[tokio::test]
    async fn timeout_terminates_without_cleanup() {
        tokio::time::pause();

        let (tx, rx) = mpsc::channel(16);
        let (mut dispatcher, probe) = dispatcher(&["one"], rx, CancellationToken::new());

        dispatcher.start().await.unwrap();

        assert_eq!(dispatcher.state(), DispatcherState::Terminated);
        assert_eq!(probe.shown_count(), 1);
        assert_eq!(probe.hosting_deletes(), 0);
        assert_eq!(probe.invoking_deletes(), 0);
        drop(tx);
    }

    #[tokio::test]
    async fn shutdown_cancellation_terminates_quietly() {
        let (tx, rx) = mpsc::channel(16);
        let shutdown = CancellationToken::new();
        let (mut dispatcher, probe) = dispatcher(&["one", "two"], rx, shutdown.clone());

        shutdown.cancel();
        dispatcher.start().await.unwrap();

        assert_eq!(dispatcher.state(), DispatcherState::Terminated);
        // The last rendered page stays visible untouched.
        assert_eq!(probe.shown_count(), 1);
        assert_eq!(probe.hosting_deletes(), 0);
        drop(tx);
    }

    #[tokio::test]
    async fn closed_feed_terminates_quietly() {
        let (tx, rx) = mpsc::channel(16);
        drop(tx);
        let (mut dispatcher, _probe) = dispatcher(&["one"], rx, CancellationToken::new());

        dispatcher.start().await.unwrap();
        assert_eq!(dispatcher.state(), DispatcherState::Terminated);
    }

    #[tokio::test]
    async fn failed_render_surfaces_and_terminates() {
        let (tx, rx) = mpsc::channel(16);
        let (mut dispatcher, probe) = dispatcher(&["one", "two"], rx, CancellationToken::new());

        probe.fail_next_show();
        tx.send(reaction(HOSTING, VIEWER, "\u{25b6}")).await.unwrap();

        assert!(dispatcher.start().await.is_err());
        assert_eq!(dispatcher.state(), DispatcherState::Terminated);
    }

    #[test]
    fn emoji_round_trip_covers_all_controls() {
        for symbol in ControlSymbol::ALL {
            assert_eq!(ControlSymbol::from_emoji(symbol.emoji()), Some(symbol));
        }
        assert_eq!(ControlSymbol::from_emoji("\u{2764}"), None);
    }
}
