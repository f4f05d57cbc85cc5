// dnbuild: .NET build tool orchestration
//
// SPDX-FileCopyrightText: 2026 Romeo Ahmed
// SPDX-License-Identifier: GPL-3.0-or-later

//! Output streaming for child processes.
//!
//! ```text
//! stdout/stderr --read_until('\n')--> bytes_to_utf8(encoding)
//!               --> info!/warn! per line
//! ```

use tokio::io::{AsyncBufReadExt, AsyncRead, BufReader};
use tokio::task::JoinHandle;
use tracing::{info, warn};

use crate::utility::encoding::{Encoding, bytes_to_utf8, trim_line_ending};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub(super) enum Stream {
    Stdout,
    Stderr,
}

impl Stream {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Stdout => "stdout",
            Self::Stderr => "stderr",
        }
    }
}

/// Spawns a task forwarding `reader` to tracing line by line.
pub(super) fn spawn_reader<R>(
    reader: Option<R>,
    stream: Stream,
    encoding: Encoding,
    process: String,
) -> Option<JoinHandle<()>>
where
    R: AsyncRead + Unpin + Send + 'static,
{
    reader.map(|reader| {
        tokio::spawn(async move { read_stream(reader, stream, encoding, &process).await })
    })
}

pub(super) async fn read_stream<R>(reader: R, stream: Stream, encoding: Encoding, process: &str)
where
    R: AsyncRead + Unpin,
{
    let mut reader = BufReader::new(reader);
    let mut buf = Vec::new();

    loop {
        buf.clear();
        match reader.read_until(b'\n', &mut buf).await {
            Ok(0) => break,
            Ok(_) => {
                let text = bytes_to_utf8(encoding, &buf);
                let line = trim_line_ending(text.strip_suffix('\n').unwrap_or(&text));
                match stream {
                    Stream::Stdout => info!(process = %process, "{line}"),
                    Stream::Stderr => warn!(process = %process, "{line}"),
                }
            }
            Err(e) => {
                warn!(
                    process = %process,
                    stream = stream.as_str(),
                    error = %e,
                    "error reading stream"
                );
                break;
            }
        }
    }
}

/// Waits for a reader task to drain its stream.
pub(super) async fn join_reader(handle: Option<JoinHandle<()>>) {
    if let Some(handle) = handle {
        let _ = handle.await;
    }
}
