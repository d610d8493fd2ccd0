use chrono::{DateTime, Local};

/// A short authored reply attached to exactly one chat.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Reaction {
    pub author: String,
    pub text: String,
}

/// One posted message with its reactions.
///
/// Ids are 1-based, dense, and assigned in posting order; `created_at` is
/// the local wall clock at creation. Chats are never deleted and never
/// mutated after creation except for reaction appends.
#[derive(Debug, Clone)]
pub struct Chat {
    pub id: u32,
    pub created_at: DateTime<Local>,
    pub author: String,
    pub text: String,
    pub reactions: Vec<Reaction>,
}
