//! Canned-answer assistant: FAQ knowledge base and chat session

mod normalize;
mod faq;
mod chat;

pub use normalize::{normalize, tokenize};
pub use faq::{FaqBase, FaqEntry, KeywordSet, Reply, FALLBACK_ANSWER};
pub use chat::{Bubble, ChatSession, Speaker, QUESTION_REPLY_DELAY, TOPIC_REPLY_DELAY};
