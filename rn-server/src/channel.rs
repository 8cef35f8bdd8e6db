//! Line-delimited JSON command channel.
//!
//! The thin Command Channel collaborator: one JSON [`CommandRequest`] per
//! input line, one JSON reply object per output line. Chat-platform
//! adapters sit on the other side of this pipe and own mention stripping
//! and target resolution.

use crate::dispatch::{CommandRequest, Dispatcher, replies};

use log::warn;
use serde::Serialize;
use tokio::io::{AsyncBufReadExt, AsyncRead, AsyncWrite, AsyncWriteExt, BufReader};

#[derive(Debug, Serialize)]
struct Reply<'a> {
    reply: &'a str,
}

/// Runs the channel until EOF. A malformed line produces an error reply
/// instead of ending the loop; I/O failure on the pipe is fatal.
pub async fn run<R, W>(
    dispatcher: &Dispatcher,
    reader: R,
    mut writer: W,
) -> std::io::Result<()>
where
    R: AsyncRead + Unpin,
    W: AsyncWrite + Unpin,
{
    let mut lines = BufReader::new(reader).lines();

    while let Some(line) = lines.next_line().await? {
        if line.trim().is_empty() {
            continue;
        }

        let reply = match serde_json::from_str::<CommandRequest>(&line) {
            Ok(request) => dispatcher.handle(&request).await,
            Err(e) => {
                warn!("malformed command line: {e}");
                replies::MALFORMED_PAYLOAD.to_string()
            }
        };

        let payload = serde_json::to_string(&Reply { reply: &reply })?;
        writer.write_all(payload.as_bytes()).await?;
        writer.write_all(b"\n").await?;
        writer.flush().await?;
    }

    Ok(())
}
