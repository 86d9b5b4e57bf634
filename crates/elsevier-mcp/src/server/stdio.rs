//! Stdio transport: newline-delimited JSON-RPC over stdin/stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use super::protocol::{JsonRpcRequest, JsonRpcResponse, McpHandler, PARSE_ERROR};

/// Handle MCP protocol over stdio until stdin closes.
pub async fn run_stdio(handler: &McpHandler) -> anyhow::Result<()> {
    let reader = BufReader::new(tokio::io::stdin());
    let mut stdout = tokio::io::stdout();

    tracing::info!("MCP stdio server ready, waiting for requests...");

    serve_lines(handler, reader, &mut stdout).await?;

    tracing::info!("Stdin closed, shutting down");
    Ok(())
}

/// Serve requests read line by line from `reader`, writing responses to `writer`.
pub async fn serve_lines<R, W>(handler: &McpHandler, reader: R, writer: &mut W) -> anyhow::Result<()>
where
    R: AsyncBufRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = reader.lines();

    while let Some(line) = lines.next_line().await? {
        let trimmed = line.trim();
        if trimmed.is_empty() {
            continue;
        }

        let response = match serde_json::from_str::<JsonRpcRequest>(trimmed) {
            Ok(request) => handler.handle(&request).await,
            Err(e) => Some(JsonRpcResponse::error(None, PARSE_ERROR, format!("Parse error: {e}"))),
        };

        if let Some(response) = response {
            let response_json = serde_json::to_string(&response)?;
            writer.write_all(response_json.as_bytes()).await?;
            writer.write_all(b"\n").await?;
            writer.flush().await?;
        }
    }

    Ok(())
}
