//! Chat session with delayed bot replies
//!
//! Replies are not delivered immediately: each one is stamped with the instant
//! it becomes due and the caller polls `deliver_due` from its own loop. Replies
//! delivered in the same poll appear in deadline order.

use std::collections::VecDeque;
use std::time::{Duration, Instant};

use log::debug;

use super::faq::FaqBase;

/// Delay before answering a typed question
pub const QUESTION_REPLY_DELAY: Duration = Duration::from_millis(350);

/// Delay before answering a clicked topic tag
pub const TOPIC_REPLY_DELAY: Duration = Duration::from_millis(300);

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Speaker {
    User,
    Bot,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bubble {
    pub from: Speaker,
    pub text: String,
}

#[derive(Debug, Clone)]
struct PendingReply {
    due: Instant,
    text: String,
}

#[derive(Debug, Clone, Default)]
pub struct ChatSession {
    faq: FaqBase,
    log: Vec<Bubble>,
    pending: VecDeque<PendingReply>,
}

impl ChatSession {
    pub fn new(faq: FaqBase) -> Self {
        Self {
            faq,
            log: Vec::new(),
            pending: VecDeque::new(),
        }
    }

    pub fn faq(&self) -> &FaqBase {
        &self.faq
    }

    /// Messages shown so far, oldest first
    pub fn log(&self) -> &[Bubble] {
        &self.log
    }

    /// Post a typed question. Blank input is ignored and returns `false`.
    pub fn ask(&mut self, question: &str, now: Instant) -> bool {
        let question = question.trim();
        if question.is_empty() {
            return false;
        }
        self.push(Speaker::User, question);

        let reply = self.faq.answer(question);
        debug!("question matched topic {:?}", reply.topic);
        let text = reply.text.to_string();
        self.schedule(text, now + QUESTION_REPLY_DELAY);
        true
    }

    /// Post a topic tag as if the user had typed it. Unknown labels return `false`.
    pub fn select_topic(&mut self, label: &str, now: Instant) -> bool {
        let Some(answer) = self.faq.lookup(label).map(|e| e.answer.clone()) else {
            return false;
        };
        self.push(Speaker::User, label);
        self.schedule(answer, now + TOPIC_REPLY_DELAY);
        true
    }

    /// Append every reply due at `now`, earliest deadline first; equal deadlines
    /// keep the order they were scheduled in
    pub fn deliver_due(&mut self, now: Instant) -> usize {
        let (mut due, waiting): (Vec<_>, Vec<_>) =
            self.pending.drain(..).partition(|reply| reply.due <= now);
        self.pending = waiting.into();

        // stable: ties stay in scheduling order
        due.sort_by_key(|reply| reply.due);
        let delivered = due.len();
        self.log.extend(due.into_iter().map(|reply| Bubble {
            from: Speaker::Bot,
            text: reply.text,
        }));
        delivered
    }

    /// Earliest instant a pending reply becomes due
    pub fn next_due(&self) -> Option<Instant> {
        self.pending.iter().map(|r| r.due).min()
    }

    pub fn pending_count(&self) -> usize {
        self.pending.len()
    }

    fn push(&mut self, from: Speaker, text: &str) {
        self.log.push(Bubble {
            from,
            text: text.to_string(),
        });
    }

    fn schedule(&mut self, text: String, due: Instant) {
        self.pending.push_back(PendingReply { due, text });
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::assistant::FALLBACK_ANSWER;

    #[test]
    fn test_reply_waits_for_delay() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();

        assert!(chat.ask("  Et la crypto ?  ", t0));
        assert_eq!(chat.log().len(), 1);
        assert_eq!(chat.log()[0], Bubble { from: Speaker::User, text: "Et la crypto ?".into() });

        assert_eq!(chat.deliver_due(t0 + Duration::from_millis(349)), 0);
        assert_eq!(chat.pending_count(), 1);

        assert_eq!(chat.deliver_due(t0 + QUESTION_REPLY_DELAY), 1);
        assert_eq!(chat.log()[1].from, Speaker::Bot);
        assert!(chat.log()[1].text.contains("poche expérimentale"));
        assert_eq!(chat.next_due(), None);
    }

    #[test]
    fn test_blank_question_ignored() {
        let mut chat = ChatSession::default();
        assert!(!chat.ask("   ", Instant::now()));
        assert!(chat.log().is_empty());
        assert_eq!(chat.pending_count(), 0);
    }

    #[test]
    fn test_fallback_reply() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();
        chat.ask("Bonjour", t0);
        chat.deliver_due(t0 + Duration::from_secs(1));
        assert_eq!(chat.log()[1].text, FALLBACK_ANSWER);
    }

    #[test]
    fn test_select_topic() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();

        assert!(!chat.select_topic("Inconnu", t0));
        assert!(chat.select_topic("ETF monde", t0));
        assert_eq!(chat.next_due(), Some(t0 + TOPIC_REPLY_DELAY));
        assert_eq!(chat.log()[0].text, "ETF monde");

        chat.deliver_due(t0 + TOPIC_REPLY_DELAY);
        assert_eq!(chat.log()[1].text, chat.faq().lookup("ETF monde").unwrap().answer);
    }

    #[test]
    fn test_only_due_replies_delivered() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();
        chat.ask("horizon ?", t0);
        chat.select_topic("ETF monde", t0 + Duration::from_millis(10));

        // topic reply due at 310ms, question reply at 350ms
        assert_eq!(chat.deliver_due(t0 + Duration::from_millis(320)), 1);
        assert!(chat.log()[2].text.starts_with("Un ETF monde"));
        assert_eq!(chat.next_due(), Some(t0 + QUESTION_REPLY_DELAY));

        assert_eq!(chat.deliver_due(t0 + Duration::from_millis(400)), 1);
        assert!(chat.log()[3].text.starts_with("Plus l'horizon"));
    }

    #[test]
    fn test_same_poll_delivers_by_deadline() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();
        chat.ask("horizon ?", t0);
        chat.select_topic("ETF monde", t0 + Duration::from_millis(10));

        // topic reply (310ms) goes before the earlier-scheduled question reply (350ms)
        assert_eq!(chat.deliver_due(t0 + Duration::from_millis(400)), 2);
        assert!(chat.log()[2].text.starts_with("Un ETF monde"));
        assert!(chat.log()[3].text.starts_with("Plus l'horizon"));
        assert_eq!(chat.pending_count(), 0);
    }

    #[test]
    fn test_equal_deadlines_keep_scheduling_order() {
        let mut chat = ChatSession::default();
        let t0 = Instant::now();
        chat.select_topic("ETF monde", t0);
        chat.select_topic("Place de la crypto", t0);

        assert_eq!(chat.deliver_due(t0 + TOPIC_REPLY_DELAY), 2);
        assert!(chat.log()[2].text.starts_with("Un ETF monde"));
        assert!(chat.log()[3].text.starts_with("Dans notre approche"));
    }
}
