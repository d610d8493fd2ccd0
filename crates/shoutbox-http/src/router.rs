use std::sync::{Mutex, MutexGuard};

use tracing::{info, warn};

use shoutbox_store::{ChatStore, StoreError, transcript};
use shoutbox_types::limits::{MAX_AUTHOR_LEN, MAX_MESSAGE_LEN, MAX_REACTION_LEN};

use crate::RequestHandler;
use crate::error::RequestError;
use crate::query;
use crate::request::RequestLine;
use crate::response::Response;

/// Longest accepted raw `id` parameter value.
const MAX_ID_LEN: usize = 15;

/// Dispatches parsed requests against the chat store.
///
/// The store sits behind a single mutex, so transcript reads and mutations
/// are serialized even under a concurrent transport — id assignment stays
/// dense and gapless.
pub struct Router {
    store: Mutex<ChatStore>,
}

impl Router {
    pub fn new(store: ChatStore) -> Self {
        Self {
            store: Mutex::new(store),
        }
    }

    fn lock(&self) -> Result<MutexGuard<'_, ChatStore>, RequestError> {
        self.store.lock().map_err(|_| RequestError::Unavailable)
    }

    fn route(&self, raw: &str) -> Result<String, RequestError> {
        let line = RequestLine::parse(raw).ok_or(RequestError::Malformed)?;
        if line.method != "GET" {
            return Err(RequestError::UnsupportedMethod);
        }

        let query = line.query.unwrap_or("");
        match line.path {
            "/chats" => self.list(),
            "/post" => self.post(query),
            "/react" => self.react(query),
            _ => Err(RequestError::NotFound),
        }
    }

    fn list(&self) -> Result<String, RequestError> {
        let store = self.lock()?;
        Ok(transcript::render(store.chats()))
    }

    fn post(&self, query: &str) -> Result<String, RequestError> {
        let user = query::param(query, "user", MAX_AUTHOR_LEN)
            .ok_or(RequestError::MissingParameter("user"))?;
        let message = query::param(query, "message", MAX_MESSAGE_LEN)
            .ok_or(RequestError::MissingParameter("message"))?;

        let mut store = self.lock()?;
        let id = store.add_chat(&user, &message)?;
        info!("chat #{} posted by {}", id, user);

        Ok(transcript::render(store.chats()))
    }

    fn react(&self, query: &str) -> Result<String, RequestError> {
        let user = query::param(query, "user", MAX_AUTHOR_LEN)
            .ok_or(RequestError::MissingParameter("user"))?;
        let message = query::param(query, "message", MAX_REACTION_LEN)
            .ok_or(RequestError::MissingParameter("message"))?;
        let id_raw = query::param(query, "id", MAX_ID_LEN)
            .ok_or(RequestError::MissingParameter("id"))?;

        let id: i64 = id_raw
            .parse()
            .map_err(|_| RequestError::InvalidParameter("id"))?;
        if id <= 0 {
            return Err(RequestError::InvalidParameter("id"));
        }
        // ids past u32 cannot name a live chat; same outcome as any
        // out-of-range id
        let id = u32::try_from(id).map_err(|_| StoreError::InvalidChatId)?;

        let mut store = self.lock()?;
        store.add_reaction(&user, &message, id)?;
        info!("reaction to chat #{} by {}", id, user);

        Ok(transcript::render(store.chats()))
    }
}

impl RequestHandler for Router {
    fn handle(&self, raw: &[u8]) -> Response {
        let text = String::from_utf8_lossy(raw);
        match self.route(&text) {
            Ok(body) => Response::ok(body),
            Err(err) => {
                warn!("request rejected: {}", err);
                err.into_response()
            }
        }
    }
}
