//! Validation bounds and capacities for the bulletin.
//!
//! Canonical definitions live here so the store and the HTTP layer agree on
//! one set of numbers. All length bounds are in bytes.

/// Maximum number of chats the store will hold.
pub const MAX_CHATS: usize = 1000;

/// Maximum number of reactions attached to a single chat.
pub const MAX_REACTIONS: usize = 100;

/// Maximum author name length.
pub const MAX_AUTHOR_LEN: usize = 15;

/// Maximum chat message length.
pub const MAX_MESSAGE_LEN: usize = 255;

/// Maximum reaction message length.
pub const MAX_REACTION_LEN: usize = 15;
