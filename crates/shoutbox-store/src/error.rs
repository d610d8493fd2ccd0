use thiserror::Error;

/// Failures from store mutations.
///
/// Validation runs before any mutation, so a returned error always leaves
/// the store exactly as it was.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum StoreError {
    #[error("author must be 1-15 bytes")]
    InvalidAuthor,
    #[error("message is empty or too long")]
    InvalidText,
    #[error("no chat with that id")]
    InvalidChatId,
    #[error("chat store is full")]
    StoreFull,
    #[error("reaction list is full")]
    ReactionsFull,
}
