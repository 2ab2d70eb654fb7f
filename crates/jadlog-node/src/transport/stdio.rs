//! Stdio transport — reads invocations from stdin, writes node output to stdout.

use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};

use jadlog_tracking::TrackingSource;

use crate::node::JadlogNode;
use crate::types::{NodeError, NodeResult};

use super::framing;

/// Line-oriented transport a host process can drive over pipes.
pub struct StdioTransport<S> {
    node: JadlogNode<S>,
}

impl<S: TrackingSource> StdioTransport<S> {
    pub fn new(node: JadlogNode<S>) -> Self {
        Self { node }
    }

    /// Run the transport loop on the process's stdin and stdout.
    pub async fn run(&self) -> NodeResult<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.serve(stdin, stdout).await
    }

    /// Run the transport loop over any reader/writer pair until EOF.
    pub async fn serve<R, W>(&self, mut reader: R, mut writer: W) -> NodeResult<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut line = String::new();

        tracing::info!("Stdio transport started");

        loop {
            line.clear();
            let bytes_read = reader.read_line(&mut line).await.map_err(NodeError::Io)?;

            if bytes_read == 0 {
                tracing::info!("EOF on stdin, shutting down");
                break;
            }

            if line.trim().is_empty() {
                continue;
            }

            let framed = match framing::parse_invocation(&line) {
                Ok(ctx) => framing::frame_output(&self.node.execute(&ctx).await)?,
                Err(e) => {
                    tracing::warn!("Parse error: {e}");
                    framing::frame_value(&e.to_error_object())?
                }
            };

            writer.write_all(framed.as_bytes()).await?;
            writer.flush().await?;
        }

        Ok(())
    }
}
