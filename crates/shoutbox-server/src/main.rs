use std::net::SocketAddr;
use std::sync::Arc;

use anyhow::Result;
use tokio::io::{AsyncReadExt, AsyncWriteExt};
use tokio::net::{TcpListener, TcpStream};
use tracing::{error, info, warn};

use shoutbox_http::{RequestHandler, Router};
use shoutbox_store::ChatStore;

/// Read cap for one request. A request is a single GET line plus headers
/// we ignore; anything larger gets cut off and rejected by the parser.
const MAX_REQUEST_SIZE: usize = 8 * 1024;

#[tokio::main]
async fn main() -> Result<()> {
    // Load .env if present
    let _ = dotenvy::dotenv();

    // Init logging
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "shoutbox=debug".into()),
        )
        .init();

    // Config — port 0 asks the OS for a free port
    let host = std::env::var("SHOUTBOX_HOST").unwrap_or_else(|_| "0.0.0.0".into());
    let port: u16 = std::env::var("SHOUTBOX_PORT")
        .unwrap_or_else(|_| "8080".into())
        .parse()?;

    let handler: Arc<dyn RequestHandler> = Arc::new(Router::new(ChatStore::new()));

    let addr: SocketAddr = format!("{}:{}", host, port).parse()?;
    let listener = TcpListener::bind(addr).await?;
    info!("Shoutbox listening on {}", listener.local_addr()?);

    serve(listener, handler).await
}

/// Accept loop: one task per connection. Each connection carries exactly
/// one request and one response, then closes. A failed accept or a failed
/// connection never takes the loop down.
async fn serve(listener: TcpListener, handler: Arc<dyn RequestHandler>) -> Result<()> {
    loop {
        match listener.accept().await {
            Ok((stream, addr)) => {
                let handler = handler.clone();
                tokio::spawn(async move {
                    if let Err(e) = handle_connection(stream, handler).await {
                        warn!("connection from {} failed: {}", addr, e);
                    }
                });
            }
            Err(e) => {
                error!("accept error: {}", e);
            }
        }
    }
}

async fn handle_connection(
    mut stream: TcpStream,
    handler: Arc<dyn RequestHandler>,
) -> Result<()> {
    stream.set_nodelay(true)?;

    let raw = read_request(&mut stream).await?;
    let response = handler.handle(&raw);
    stream.write_all(&response.into_bytes()).await?;
    stream.shutdown().await?;

    Ok(())
}

/// Read one request: accumulate until the end of the header section, EOF,
/// or the size cap, whichever comes first.
async fn read_request(stream: &mut TcpStream) -> Result<Vec<u8>> {
    let mut buf = Vec::with_capacity(1024);
    let mut chunk = [0u8; 1024];

    loop {
        let n = stream.read(&mut chunk).await?;
        if n == 0 {
            break;
        }
        buf.extend_from_slice(&chunk[..n]);
        if buf.windows(4).any(|w| w == b"\r\n\r\n") || buf.len() >= MAX_REQUEST_SIZE {
            break;
        }
    }

    Ok(buf)
}
