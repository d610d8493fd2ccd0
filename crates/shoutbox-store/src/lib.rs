pub mod error;
pub mod transcript;

pub use error::StoreError;

use chrono::Local;

use shoutbox_types::limits::{
    MAX_AUTHOR_LEN, MAX_CHATS, MAX_MESSAGE_LEN, MAX_REACTION_LEN, MAX_REACTIONS,
};
use shoutbox_types::models::{Chat, Reaction};

/// In-memory, append-only bulletin store.
///
/// Chats are held in posting order, so `chats[i].id == i + 1` throughout
/// the store's lifetime. The store itself is not synchronized — callers
/// that share it across tasks must serialize access behind a mutex.
#[derive(Debug, Default)]
pub struct ChatStore {
    chats: Vec<Chat>,
}

impl ChatStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self { chats: Vec::new() }
    }

    /// Post a new chat, returning its assigned id.
    ///
    /// The id is `previous_count + 1`: 1-based, dense, never reused.
    pub fn add_chat(&mut self, author: &str, text: &str) -> Result<u32, StoreError> {
        if author.is_empty() || author.len() > MAX_AUTHOR_LEN {
            return Err(StoreError::InvalidAuthor);
        }
        if text.is_empty() || text.len() > MAX_MESSAGE_LEN {
            return Err(StoreError::InvalidText);
        }
        if self.chats.len() >= MAX_CHATS {
            return Err(StoreError::StoreFull);
        }

        let id = self.chats.len() as u32 + 1;
        self.chats.push(Chat {
            id,
            created_at: Local::now(),
            author: author.to_string(),
            text: text.to_string(),
            reactions: Vec::new(),
        });

        Ok(id)
    }

    /// Attach a reaction to the chat with id `chat_id`, preserving arrival
    /// order. `chat_id` must be in `[1, len]`.
    pub fn add_reaction(
        &mut self,
        author: &str,
        text: &str,
        chat_id: u32,
    ) -> Result<(), StoreError> {
        if author.is_empty() || author.len() > MAX_AUTHOR_LEN {
            return Err(StoreError::InvalidAuthor);
        }
        if text.is_empty() || text.len() > MAX_REACTION_LEN {
            return Err(StoreError::InvalidText);
        }

        let idx = (chat_id as usize)
            .checked_sub(1)
            .ok_or(StoreError::InvalidChatId)?;
        let chat = self.chats.get_mut(idx).ok_or(StoreError::InvalidChatId)?;

        if chat.reactions.len() >= MAX_REACTIONS {
            return Err(StoreError::ReactionsFull);
        }

        chat.reactions.push(Reaction {
            author: author.to_string(),
            text: text.to_string(),
        });

        Ok(())
    }

    /// All chats, in id order.
    pub fn chats(&self) -> &[Chat] {
        &self.chats
    }

    pub fn len(&self) -> usize {
        self.chats.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chats.is_empty()
    }
}
