// src/exec/drain.rs

//! Draining one child pipe into a line buffer.
//!
//! Each pipe gets its own Tokio task which owns its buffer outright; the
//! buffer is handed back through the task's `JoinHandle` once the pipe
//! reaches EOF. Nothing is shared between the stdout and stderr readers.

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::{trace, warn};

/// Read `reader` to EOF and return its lines in arrival order.
///
/// Lines are decoded as lossy UTF-8 with the trailing `\n` / `\r\n` removed.
/// A read error ends draining for this stream; the lines already collected
/// are still returned.
pub async fn drain_lines<R>(reader: R, stream: &'static str) -> Vec<String>
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut lines = Vec::new();
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let line = decode_line(&buf);
                trace!(stream, "{}", line);
                lines.push(line);
            }
            Err(e) => {
                warn!(
                    stream,
                    error = %e,
                    lines_read = lines.len(),
                    "error reading child output; keeping lines read so far"
                );
                break;
            }
        }
    }

    lines
}

/// Spawn [`drain_lines`] as its own task.
pub fn spawn_drain<R>(reader: R, stream: &'static str) -> JoinHandle<Vec<String>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    tokio::spawn(drain_lines(reader, stream))
}

/// Join accumulated lines into the final text value (`\n`-separated, no
/// trailing newline).
pub fn join_lines(lines: &[String]) -> String {
    lines.join("\n")
}

fn decode_line(raw: &[u8]) -> String {
    let raw = raw.strip_suffix(b"\n").unwrap_or(raw);
    let raw = raw.strip_suffix(b"\r").unwrap_or(raw);
    String::from_utf8_lossy(raw).into_owned()
}
