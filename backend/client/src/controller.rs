//! # Fetch Controller
//!
//! Picks a reminder the user has not seen yet for the current mood.
//!
//! ## Session
//! - mood: selected mood, `okay` by default
//! - seen: messages shown since the mood last changed
//! - view: what the display layer should show
//! - loading: true while a fetch is in flight, left set if that fetch is dropped
//!
//! ## Fetch
//! 1. Request up to 5 reminders one after another, accepting the first unseen one.
//! 2. If all 5 were repeats, request once more and accept whatever comes back.
//! 3. Before recording the accepted message, clear `seen` if it already holds 6.
//! 4. Any failed request aborts the fetch with `seen` and `mood` untouched.
//!
//! Worst case is 6 requests. Pools are 10 reminders per mood, so rejecting
//! repeats forever could stall once most of a pool has been shown.
use std::collections::HashSet;

use shared::{Mood, Reminder};
use tracing::{debug, info, warn};

use crate::{error::ClientError, source::ReminderSource};

pub const MAX_ATTEMPTS: usize = 5;
pub const SEEN_CAP: usize = 6;

#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub enum View {
    #[default]
    Empty,
    Showing(Reminder),
    Failed,
}

pub struct ReminderController<S> {
    source: S,
    mood: Mood,
    seen: HashSet<String>,
    view: View,
    loading: bool,
}

impl<S: ReminderSource> ReminderController<S> {
    pub fn new(source: S) -> Self {
        Self {
            source,
            mood: Mood::default(),
            seen: HashSet::new(),
            view: View::Empty,
            loading: false,
        }
    }

    pub fn mood(&self) -> Mood {
        self.mood
    }

    pub fn seen(&self) -> &HashSet<String> {
        &self.seen
    }

    pub fn view(&self) -> &View {
        &self.view
    }

    pub fn is_loading(&self) -> bool {
        self.loading
    }

    #[cfg(test)]
    fn source(&self) -> &S {
        &self.source
    }

    /// Starts a new mood session. Picking the current mood again only clears
    /// the displayed reminder.
    pub fn set_mood(&mut self, mood: Mood) {
        if mood != self.mood {
            debug!("Mood changed from {} to {mood}", self.mood);
            self.mood = mood;
            self.seen.clear();
        }

        self.view = View::Empty;
    }

    pub async fn fetch_reminder(&mut self) -> Result<Reminder, ClientError> {
        self.loading = true;
        let result = self.find_unseen().await;
        self.loading = false;

        match result {
            Ok(reminder) => {
                self.view = View::Showing(reminder.clone());
                Ok(reminder)
            }
            Err(e) => {
                warn!("Failed to fetch reminder: {e}");
                self.view = View::Failed;
                Err(e)
            }
        }
    }

    async fn find_unseen(&mut self) -> Result<Reminder, ClientError> {
        for attempt in 1..=MAX_ATTEMPTS {
            let reminder = self.source.fetch(self.mood).await?;

            if !self.seen.contains(&reminder.message) {
                self.record(&reminder.message);
                return Ok(reminder);
            }

            debug!(attempt, "Discarding repeat: {}", reminder.message);
        }

        info!("No unseen reminder after {MAX_ATTEMPTS} attempts, accepting a repeat");
        let reminder = self.source.fetch(self.mood).await?;
        self.record(&reminder.message);

        Ok(reminder)
    }

    fn record(&mut self, message: &str) {
        if self.seen.len() >= SEEN_CAP {
            debug!("Seen set reached {SEEN_CAP}, rotating");
            self.seen.clear();
        }

        self.seen.insert(message.to_string());
    }
}

#[cfg(test)]
mod tests {
    use std::{
        collections::VecDeque,
        sync::{
            Mutex,
            atomic::{AtomicUsize, Ordering},
        },
        time::Duration,
    };

    use async_trait::async_trait;

    use super::*;

    fn reminder(message: &str) -> Reminder {
        Reminder {
            message: message.to_string(),
            emotion: "gentle".to_string(),
            icon: "🌸".to_string(),
            category: Mood::Sad,
        }
    }

    fn failure() -> ClientError {
        ClientError::Status {
            status: 500,
            body: "boom".to_string(),
        }
    }

    /// Replays queued responses in order and counts requests.
    #[derive(Default)]
    struct ScriptedSource {
        responses: Mutex<VecDeque<Result<Reminder, ClientError>>>,
        moods: Mutex<Vec<Mood>>,
        calls: AtomicUsize,
    }

    impl ScriptedSource {
        fn push(&self, message: &str) {
            self.responses
                .lock()
                .unwrap()
                .push_back(Ok(reminder(message)));
        }

        fn push_all(&self, messages: &[&str]) {
            for message in messages {
                self.push(message);
            }
        }

        fn push_err(&self) {
            self.responses.lock().unwrap().push_back(Err(failure()));
        }

        fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }

        fn remaining(&self) -> usize {
            self.responses.lock().unwrap().len()
        }
    }

    #[async_trait]
    impl ReminderSource for ScriptedSource {
        async fn fetch(&self, mood: Mood) -> Result<Reminder, ClientError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.moods.lock().unwrap().push(mood);

            self.responses
                .lock()
                .unwrap()
                .pop_front()
                .expect("script ran out of responses")
        }
    }

    fn controller(mood: Mood) -> ReminderController<ScriptedSource> {
        let mut controller = ReminderController::new(ScriptedSource::default());
        controller.set_mood(mood);
        controller
    }

    #[tokio::test]
    async fn test_accepts_first_unseen() {
        let mut controller = controller(Mood::Sad);
        controller.source().push("a");

        let shown = controller.fetch_reminder().await.unwrap();

        assert_eq!(shown.message, "a");
        assert_eq!(controller.source().calls(), 1);
        assert_eq!(controller.view(), &View::Showing(reminder("a")));
        assert!(controller.seen().contains("a"));
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_skips_repeats_until_unseen() {
        let mut controller = controller(Mood::Sad);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.source().push_all(&["a", "a", "a", "a", "b", "c"]);
        let shown = controller.fetch_reminder().await.unwrap();

        assert_eq!(shown.message, "b");
        assert_eq!(controller.source().calls(), 1 + 5);
        assert_eq!(controller.source().remaining(), 1);
        assert_eq!(controller.seen().len(), 2);
    }

    #[tokio::test]
    async fn test_accepts_repeat_after_six_requests() {
        let mut controller = controller(Mood::Sad);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.source().push_all(&["a"; 7]);
        let shown = controller.fetch_reminder().await.unwrap();

        assert_eq!(shown.message, "a");
        assert_eq!(controller.source().calls(), 1 + 6);
        assert_eq!(controller.source().remaining(), 1);
        assert_eq!(controller.view(), &View::Showing(reminder("a")));
        assert_eq!(controller.seen().len(), 1);
    }

    #[tokio::test]
    async fn test_fallback_accepts_novel_reminder() {
        let mut controller = controller(Mood::Tired);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.source().push_all(&["a", "a", "a", "a", "a", "z"]);
        let shown = controller.fetch_reminder().await.unwrap();

        assert_eq!(shown.message, "z");
        assert_eq!(controller.source().calls(), 1 + 6);
        assert!(controller.seen().contains("z"));
    }

    #[tokio::test]
    async fn test_seen_rotates_at_cap() {
        let mut controller = controller(Mood::Numb);
        for message in ["a", "b", "c", "d", "e", "f"] {
            controller.source().push(message);
            controller.fetch_reminder().await.unwrap();
        }
        assert_eq!(controller.seen().len(), SEEN_CAP);

        controller.source().push("g");
        controller.fetch_reminder().await.unwrap();

        assert_eq!(controller.seen().len(), 1);
        assert!(controller.seen().contains("g"));
    }

    #[tokio::test]
    async fn test_seen_never_exceeds_cap() {
        let mut controller = controller(Mood::Okay);
        let messages: Vec<String> = (0..20).map(|i| format!("m{i}")).collect();

        for message in &messages {
            controller.source().push(message);
            controller.fetch_reminder().await.unwrap();
            assert!(controller.seen().len() <= SEEN_CAP);
        }
    }

    #[tokio::test]
    async fn test_rotation_on_repeat_fallback() {
        let mut controller = controller(Mood::Sad);
        for message in ["a", "b", "c", "d", "e", "f"] {
            controller.source().push(message);
            controller.fetch_reminder().await.unwrap();
        }

        controller.source().push_all(&["a"; 6]);
        controller.fetch_reminder().await.unwrap();

        assert_eq!(controller.seen().len(), 1);
        assert!(controller.seen().contains("a"));
    }

    #[tokio::test]
    async fn test_mood_change_clears_session() {
        let mut controller = controller(Mood::Sad);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.set_mood(Mood::Tired);

        assert!(controller.seen().is_empty());
        assert_eq!(controller.view(), &View::Empty);

        controller.source().push("a");
        let shown = controller.fetch_reminder().await.unwrap();

        assert_eq!(shown.message, "a");
        assert_eq!(controller.source().calls(), 2);
        assert_eq!(
            *controller.source().moods.lock().unwrap(),
            vec![Mood::Sad, Mood::Tired]
        );
    }

    #[tokio::test]
    async fn test_same_mood_keeps_seen() {
        let mut controller = controller(Mood::Sad);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.set_mood(Mood::Sad);

        assert_eq!(controller.view(), &View::Empty);
        assert!(controller.seen().contains("a"));
    }

    #[tokio::test]
    async fn test_failure_aborts_fetch() {
        let mut controller = controller(Mood::Overwhelmed);
        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        controller.source().push("a");
        controller.source().push_err();
        controller.source().push("b");

        let result = controller.fetch_reminder().await;

        assert!(matches!(result, Err(ClientError::Status { status: 500, .. })));
        assert_eq!(controller.view(), &View::Failed);
        assert_eq!(controller.mood(), Mood::Overwhelmed);
        assert_eq!(controller.seen().len(), 1);
        assert_eq!(controller.source().remaining(), 1);
        assert!(!controller.is_loading());
    }

    #[tokio::test]
    async fn test_retry_after_failure() {
        let mut controller = controller(Mood::Sad);
        controller.source().push_err();
        assert!(controller.fetch_reminder().await.is_err());

        controller.source().push("a");
        controller.fetch_reminder().await.unwrap();

        assert_eq!(controller.view(), &View::Showing(reminder("a")));
    }

    /// Never answers, so the fetch stays in flight.
    struct StalledSource;

    #[async_trait]
    impl ReminderSource for StalledSource {
        async fn fetch(&self, _mood: Mood) -> Result<Reminder, ClientError> {
            std::future::pending().await
        }
    }

    #[tokio::test]
    async fn test_loading_while_in_flight() {
        let mut controller = ReminderController::new(StalledSource);
        assert!(!controller.is_loading());

        let fetch = tokio::time::timeout(Duration::from_millis(50), controller.fetch_reminder());
        assert!(fetch.await.is_err());

        assert!(controller.is_loading());
        assert_eq!(controller.view(), &View::Empty);
    }

    #[tokio::test]
    async fn test_default_mood() {
        let controller = ReminderController::new(ScriptedSource::default());

        assert_eq!(controller.mood(), Mood::Okay);
        assert_eq!(controller.view(), &View::Empty);
    }
}
