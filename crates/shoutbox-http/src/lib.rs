pub mod error;
pub mod query;
pub mod request;
pub mod response;
pub mod router;

pub use error::RequestError;
pub use response::{Response, Status};
pub use router::Router;

/// Handle one complete request buffer, producing one complete response.
///
/// The transport loop depends only on this capability — it knows nothing
/// about routing, the query codec, or the store. Implementations must be
/// shareable across connection tasks.
pub trait RequestHandler: Send + Sync {
    fn handle(&self, raw: &[u8]) -> Response;
}
