//! Plain-text rendering of the full bulletin.
//!
//! One line per chat in id order, one indented line per reaction in
//! arrival order:
//!
//! ```text
//! [#1 2026-08-07 12:30:00]           alice: hello world
//!                             (bob)  nice
//! ```

use shoutbox_types::models::Chat;

/// strftime-style format for transcript timestamps.
const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

/// Reaction lines are indented to sit under the author column.
const REACTION_INDENT: usize = 28;

/// Render the transcript. Pure read, no side effects.
pub fn render(chats: &[Chat]) -> String {
    let mut out = String::new();
    for chat in chats {
        out.push_str(&format!(
            "[#{} {}] {:>15}: {}\n",
            chat.id,
            chat.created_at.format(TIMESTAMP_FORMAT),
            chat.author,
            chat.text,
        ));
        for reaction in &chat.reactions {
            out.push_str(&format!(
                "{:indent$}({})  {}\n",
                "",
                reaction.author,
                reaction.text,
                indent = REACTION_INDENT,
            ));
        }
    }
    out
}
