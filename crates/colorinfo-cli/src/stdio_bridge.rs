//! Line-oriented JSON bridge between the session and a UI process.
//!
//! Inbound lines are read on a dedicated thread and handed over through a
//! channel, so `try_recv_from_ui` never blocks. Outbound messages are
//! written one per line and flushed immediately.

use std::io::{self, BufRead, Write};
use std::sync::mpsc::{self, Receiver, TryRecvError};

use colorinfo_frontend_core::{FrontendBackend, FrontendError};

/// A [`FrontendBackend`] over any line reader and writer.
pub struct LineBackend<W: Write> {
    inbound_rx: Receiver<String>,
    writer: W,
    closed: bool,
}

/// The backend used by `colorinfo session`.
pub type StdioBackend = LineBackend<io::Stdout>;

impl StdioBackend {
    pub fn stdio() -> Self {
        LineBackend::spawn(io::BufReader::new(io::stdin()), io::stdout())
    }
}

impl<W: Write> LineBackend<W> {
    /// Spawn the reader thread. It ends at EOF or on the first read error,
    /// after which the backend reports itself closed.
    pub fn spawn<R>(reader: R, writer: W) -> Self
    where
        R: BufRead + Send + 'static,
    {
        let (tx, inbound_rx) = mpsc::channel::<String>();

        std::thread::spawn(move || {
            for line in reader.lines() {
                match line {
                    Ok(line) if line.trim().is_empty() => continue,
                    Ok(line) => {
                        if tx.send(line).is_err() {
                            break;
                        }
                    }
                    Err(e) => {
                        tracing::error!("Failed to read UI message: {e}");
                        break;
                    }
                }
            }
            tracing::debug!("UI input closed");
        });

        Self {
            inbound_rx,
            writer,
            closed: false,
        }
    }

    pub fn into_writer(self) -> W {
        self.writer
    }
}

impl<W: Write> FrontendBackend for LineBackend<W> {
    fn is_ready(&self) -> bool {
        !self.closed
    }

    fn is_closed(&self) -> bool {
        self.closed
    }

    fn send_to_ui(&mut self, json: String) -> Result<(), FrontendError> {
        writeln!(self.writer, "{json}")
            .and_then(|()| self.writer.flush())
            .map_err(|e| match e.kind() {
                io::ErrorKind::BrokenPipe => FrontendError::Closed,
                _ => FrontendError::SendFailed(e.to_string()),
            })
    }

    fn try_recv_from_ui(&mut self) -> Option<String> {
        match self.inbound_rx.try_recv() {
            Ok(line) => Some(line),
            Err(TryRecvError::Empty) => None,
            Err(TryRecvError::Disconnected) => {
                self.closed = true;
                None
            }
        }
    }
}
