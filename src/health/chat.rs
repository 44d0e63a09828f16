use std::sync::Arc;
use std::sync::atomic::{
    AtomicU64,
    Ordering,
};
use std::time::Duration;

use chrono::Local;
use serde::{
    Deserialize,
    Serialize,
};
use tokio::task::JoinHandle;

use crate::backend::{
    BackendError,
    ChatBackend,
};
use crate::clock::{
    Clock,
    SystemClock,
};
use crate::i18n::Localizer;

/// Interval of the session timer.
const TICK: Duration = Duration::from_secs(1);

/// Who the user is talking to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChatKind {
    /// The AI health assistant
    Bot,
    /// A female doctor
    Agent,
}

impl ChatKind {
    /// Catalog key of the opening message.
    const fn greeting_key(self) -> &'static str {
        match self {
            Self::Bot => "chat.botGreeting",
            Self::Agent => "chat.agentGreeting",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Deserialize, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum Sender {
    User,
    Bot,
    Agent,
}

impl From<ChatKind> for Sender {
    fn from(kind: ChatKind) -> Self {
        match kind {
            ChatKind::Bot => Self::Bot,
            ChatKind::Agent => Self::Agent,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize, Serialize)]
pub struct ChatMessage {
    /// Position in the conversation, starting at 1
    pub id: u32,
    pub sender: Sender,
    pub text: String,
    /// Local wall-clock time, `HH:MM`
    pub time: String,
}

/// A confidential support conversation.
///
/// While active, a background task counts session seconds. The task is
/// aborted by [`ChatSession::end`] and when the session is dropped.
#[derive(Debug)]
pub struct ChatSession<C = SystemClock> {
    /// Assistant or doctor
    kind: ChatKind,
    /// Conversation so far, greeting first
    messages: Vec<ChatMessage>,
    /// Seconds since the session started, written by the timer task
    elapsed: Arc<AtomicU64>,
    /// Session counter task, `None` once stopped or without a runtime
    timer: Option<JoinHandle<()>>,
    /// Cleared by [`ChatSession::end`]
    active: bool,
    /// Source of message times
    clock: C,
}

impl ChatSession<SystemClock> {
    /// Open a session greeted in the active language.
    #[must_use]
    pub fn start(kind: ChatKind, localizer: &Localizer) -> Self {
        Self::start_with_clock(kind, localizer, SystemClock)
    }
}

impl<C: Clock> ChatSession<C> {
    /// Open a session whose message times come from `clock`.
    #[must_use]
    pub fn start_with_clock(kind: ChatKind, localizer: &Localizer, clock: C) -> Self {
        let elapsed = Arc::new(AtomicU64::new(0));
        let timer = spawn_timer(Arc::clone(&elapsed));
        let mut session =
            Self { kind, messages: Vec::new(), elapsed, timer, active: true, clock };
        session.push(kind.into(), localizer.translate(kind.greeting_key()).to_string());
        tracing::debug!("Started {kind:?} chat session");
        session
    }

    #[must_use]
    pub const fn kind(&self) -> ChatKind {
        self.kind
    }

    #[must_use]
    pub fn messages(&self) -> &[ChatMessage] {
        &self.messages
    }

    #[must_use]
    pub const fn is_active(&self) -> bool {
        self.active
    }

    /// Seconds since the session started.
    #[must_use]
    pub fn elapsed_secs(&self) -> u64 {
        self.elapsed.load(Ordering::Relaxed)
    }

    /// Session duration as `m:ss`.
    #[must_use]
    pub fn elapsed_display(&self) -> String {
        format_elapsed(self.elapsed_secs())
    }

    /// Post `text` and wait for the reply.
    ///
    /// Blank input and ended sessions are ignored and yield `Ok(None)`.
    /// Otherwise the user message and the reply are appended and the reply is
    /// returned.
    ///
    /// # Errors
    /// Returns the backend error when no reply could be produced; the user
    /// message stays in the conversation.
    pub async fn send(
        &mut self,
        text: &str,
        backend: &impl ChatBackend,
        localizer: &Localizer,
    ) -> Result<Option<&ChatMessage>, BackendError> {
        if !self.active || text.trim().is_empty() {
            return Ok(None);
        }
        let locale = localizer.locale();
        self.push(Sender::User, text.to_string());

        let reply = backend.reply(self.kind, locale, &self.messages).await?;
        self.push(self.kind.into(), reply);
        Ok(self.messages.last())
    }

    /// Close the session: forget the conversation and stop the timer.
    pub fn end(&mut self) {
        self.stop_timer();
        self.messages.clear();
        self.elapsed.store(0, Ordering::Relaxed);
        self.active = false;
        tracing::debug!("Ended {:?} chat session", self.kind);
    }

    /// Append a message with the next id.
    fn push(&mut self, sender: Sender, text: String) {
        let id = u32::try_from(self.messages.len()).map_or(u32::MAX, |len| len.saturating_add(1));
        let time = self.clock.now().with_timezone(&Local).format("%H:%M").to_string();
        self.messages.push(ChatMessage { id, sender, text, time });
    }
}

impl<C> ChatSession<C> {
    /// Abort the counter task if it is still running.
    fn stop_timer(&mut self) {
        if let Some(timer) = self.timer.take() {
            timer.abort();
        }
    }
}

impl<C> Drop for ChatSession<C> {
    fn drop(&mut self) {
        self.stop_timer();
    }
}

/// Spawn the once-per-second session counter on the current runtime.
fn spawn_timer(elapsed: Arc<AtomicU64>) -> Option<JoinHandle<()>> {
    let Ok(runtime) = tokio::runtime::Handle::try_current() else {
        tracing::warn!("No async runtime available, chat session timer disabled");
        return None;
    };
    Some(runtime.spawn(async move {
        let mut interval = tokio::time::interval(TICK);
        // The first tick completes immediately.
        interval.tick().await;
        loop {
            interval.tick().await;
            elapsed.fetch_add(1, Ordering::Relaxed);
        }
    }))
}

/// Format seconds as `m:ss`.
#[must_use]
pub fn format_elapsed(seconds: u64) -> String {
    format!("{}:{:02}", seconds / 60, seconds % 60)
}

#[cfg(test)]
#[allow(clippy::unwrap_used, clippy::indexing_slicing)]
mod tests {
    use googletest::prelude::*;
    use rstest::rstest;

    use super::*;
    use crate::backend::SimulatedChatBackend;
    use crate::i18n::{
        Catalog,
        Locale,
    };
    use crate::test_utils::{
        fixed_clock,
        test_localizer,
    };

    fn instant_backend() -> SimulatedChatBackend {
        SimulatedChatBackend::new(Catalog::builtin().unwrap(), Duration::ZERO)
    }

    #[rstest]
    #[case(0, "0:00")]
    #[case(9, "0:09")]
    #[case(75, "1:15")]
    #[case(600, "10:00")]
    fn elapsed_formatting(#[case] seconds: u64, #[case] expected: &str) {
        assert_that!(format_elapsed(seconds), eq(expected));
    }

    #[tokio::test]
    async fn start_greets_in_active_language() {
        let mut localizer = test_localizer();
        localizer.set_locale(Locale::Hi);

        let session = ChatSession::start_with_clock(ChatKind::Agent, &localizer, fixed_clock());

        let greeting = &session.messages()[0];
        assert_that!(session.messages().len(), eq(1));
        assert_that!(greeting.id, eq(1));
        assert_that!(greeting.sender, eq(Sender::Agent));
        assert_that!(greeting.text, starts_with("नमस्ते, मैं डॉ. प्रिया"));
        assert_that!(greeting.time.len(), eq(5));
    }

    #[tokio::test]
    async fn send_appends_user_message_and_reply() {
        let localizer = test_localizer();
        let backend = instant_backend();
        let mut session = ChatSession::start_with_clock(ChatKind::Bot, &localizer, fixed_clock());

        let reply = session.send("I have cramps", &backend, &localizer).await.unwrap().cloned();

        assert_that!(reply.map(|message| message.sender), some(eq(Sender::Bot)));
        let messages = session.messages();
        assert_that!(
            messages.iter().map(|m| m.id).collect::<Vec<_>>(),
            elements_are![eq(&1), eq(&2), eq(&3)]
        );
        assert_that!(messages[1].text, eq("I have cramps"));
        assert_that!(messages[1].sender, eq(Sender::User));
        assert_that!(messages[2].text, starts_with("I understand your concern"));
    }

    #[tokio::test]
    async fn blank_input_is_ignored() {
        let localizer = test_localizer();
        let backend = instant_backend();
        let mut session = ChatSession::start_with_clock(ChatKind::Bot, &localizer, fixed_clock());

        let reply = session.send("   ", &backend, &localizer).await.unwrap();

        assert_that!(reply, none());
        assert_that!(session.messages().len(), eq(1));
    }

    #[tokio::test]
    async fn ended_session_is_cleared_and_ignores_input() {
        let localizer = test_localizer();
        let backend = instant_backend();
        let mut session = ChatSession::start_with_clock(ChatKind::Bot, &localizer, fixed_clock());

        session.end();
        let reply = session.send("hello", &backend, &localizer).await.unwrap();

        assert_that!(reply, none());
        assert_that!(session.messages(), empty());
        assert_that!(session.is_active(), eq(false));
    }

    #[tokio::test(start_paused = true)]
    async fn timer_counts_seconds_until_end() {
        let localizer = test_localizer();
        let mut session = ChatSession::start_with_clock(ChatKind::Bot, &localizer, fixed_clock());

        tokio::time::sleep(Duration::from_millis(3500)).await;
        assert_that!(session.elapsed_secs(), eq(3));
        assert_that!(session.elapsed_display(), eq("0:03"));

        session.end();
        tokio::time::sleep(Duration::from_secs(5)).await;
        assert_that!(session.elapsed_secs(), eq(0));
    }

    #[rstest]
    fn start_without_runtime_has_no_timer() {
        let localizer = test_localizer();

        let session = ChatSession::start_with_clock(ChatKind::Bot, &localizer, fixed_clock());

        assert_that!(session.timer.is_none(), eq(true));
        assert_that!(session.messages().len(), eq(1));
    }
}
