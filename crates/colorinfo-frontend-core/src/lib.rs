//! Frontend core abstractions for ColorInfo.
//!
//! Defines the [`FrontendBackend`] trait that abstracts over the
//! presentation layers able to drive a color inspection session (a
//! terminal pipe, a webview, a native window). Payloads are exchanged as
//! raw JSON strings so that this crate does not depend on the color types.

// ── Errors ───────────────────────────────────────────────────────

/// Errors that can occur in frontend operations.
#[derive(Debug, thiserror::Error)]
pub enum FrontendError {
    #[error("failed to send message to UI: {0}")]
    SendFailed(String),

    #[error("backend is not ready")]
    NotReady,

    #[error("backend closed")]
    Closed,
}

// ── Backend trait ────────────────────────────────────────────────

/// A message channel between the color core and a presentation layer.
///
/// The presentation layer owns clamping of slider input, hex mid-edit
/// buffering, clipboard writes, and any persistence. The core only sees
/// the JSON messages that cross this boundary.
pub trait FrontendBackend {
    /// Whether the backend can accept messages.
    fn is_ready(&self) -> bool;

    /// Whether the UI side has gone away. A closed backend yields no
    /// further inbound messages.
    fn is_closed(&self) -> bool;

    /// Send a serialised JSON message to the UI.
    fn send_to_ui(&mut self, json: String) -> Result<(), FrontendError>;

    /// Try to receive a serialised JSON message from the UI.
    ///
    /// Returns `None` when nothing is pending.
    fn try_recv_from_ui(&mut self) -> Option<String>;
}
