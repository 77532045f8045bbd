//! Stdio transport
//!
//! Newline-delimited JSON-RPC: one message per line in, one response per line
//! out. Notifications produce no output line. Lines are framed as raw bytes,
//! so a line that is not UTF-8 is answered with a parse error like any other
//! garbage instead of ending the session.

use crate::mcp::McpServer;
use crate::types::Result;
use futures::{SinkExt, StreamExt};
use tokio::io::{AsyncRead, AsyncWrite};
use tokio_util::codec::{AnyDelimiterCodec, FramedRead, FramedWrite};
use tracing::{debug, info};

/// Serve requests read from `reader` until it reaches EOF
pub async fn serve<R, W>(server: &McpServer, reader: R, writer: W) -> Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = FramedRead::new(reader, newline_codec());
    let mut out = FramedWrite::new(writer, newline_codec());

    while let Some(line) = lines.next().await {
        let line = line?;
        let line = line.trim_ascii();

        // Skip empty lines
        if line.is_empty() {
            continue;
        }

        debug!("Received request: {}", String::from_utf8_lossy(line));

        if let Some(response) = server.handle_message(line).await {
            out.send(serde_json::to_string(&response)?).await?;
            debug!("Sent response");
        }
    }

    info!("Client closed connection");
    Ok(())
}

fn newline_codec() -> AnyDelimiterCodec {
    AnyDelimiterCodec::new(b"\n".to_vec(), b"\n".to_vec())
}

/// Serve on the process's stdin/stdout
pub async fn run(server: &McpServer) -> Result<()> {
    info!("MCP server starting on stdio");
    serve(server, tokio::io::stdin(), tokio::io::stdout()).await
}
