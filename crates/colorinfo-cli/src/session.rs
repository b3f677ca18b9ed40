//! Inspection session: the only place the CLI mutates color state.
//!
//! The frontend sends `UiToCore` commands, the session applies them to its
//! `ColorState`, and pushes the resulting state back as `CoreToUi`.

use std::time::Duration;

use colorinfo_core::{CmykView, ColorState, HexEdit, HsbView, LabView, RgbView};
use colorinfo_frontend_core::{FrontendBackend, FrontendError};

use crate::error::CliError;
use crate::ipc::{CoreToUi, UiToCore};

/// Idle wait between polls of the backend.
pub const POLL_INTERVAL: Duration = Duration::from_millis(10);

/// Apply one inbound command and produce the reply for the UI.
pub fn handle_command(state: &mut ColorState, command: UiToCore) -> CoreToUi {
    match command {
        UiToCore::RequestState => {
            return CoreToUi::Initialize {
                snapshot: state.snapshot(),
            };
        }
        UiToCore::SetCanonical { r, g, b, a } => state.set_canonical(r, g, b, a),
        UiToCore::SetFromHex { text } => {
            if state.set_from_hex(&text) == HexEdit::Reverted {
                return CoreToUi::HexReverted {
                    hex: state.hex().to_owned(),
                };
            }
        }
        UiToCore::SetRgb { r, g, b, a } => state.set_from_rgb(RgbView { r, g, b, a }),
        UiToCore::SetHsb { h, s, b, a } => state.set_from_hsb(HsbView { h, s, b, a }),
        UiToCore::SetLab { l, a, b } => state.set_from_lab(LabView { l, a, b }),
        UiToCore::SetCmyk { c, m, y, k } => state.set_from_cmyk(CmykView { c, m, y, k }),
        UiToCore::CopyHex => {
            return CoreToUi::ClipboardText {
                text: state.hex().to_owned(),
            };
        }
    }

    CoreToUi::ViewsUpdated {
        snapshot: state.snapshot(),
    }
}

/// A color state bound to one frontend backend.
pub struct Session<B: FrontendBackend> {
    backend: B,
    state: ColorState,
}

impl<B: FrontendBackend> Session<B> {
    pub fn new(backend: B, state: ColorState) -> Self {
        Self { backend, state }
    }

    pub fn state(&self) -> &ColorState {
        &self.state
    }

    pub fn backend(&self) -> &B {
        &self.backend
    }

    pub fn into_backend(self) -> B {
        self.backend
    }

    /// Send the initial snapshot to the UI.
    pub fn start(&mut self) -> Result<(), CliError> {
        if !self.backend.is_ready() {
            return Err(FrontendError::NotReady.into());
        }
        let snapshot = self.state.snapshot();
        self.send(&CoreToUi::Initialize { snapshot })
    }

    /// Drain every pending inbound message. Returns how many were handled.
    ///
    /// Undecodable messages are answered with `CoreToUi::Error` and skipped.
    pub fn pump(&mut self) -> Result<usize, CliError> {
        let mut handled = 0;
        while let Some(json) = self.backend.try_recv_from_ui() {
            let reply = match serde_json::from_str::<UiToCore>(&json) {
                Ok(command) => {
                    tracing::debug!(?command, "command received");
                    handle_command(&mut self.state, command)
                }
                Err(e) => {
                    tracing::warn!("Skipping undecodable UI message: {e}");
                    CoreToUi::Error {
                        message: e.to_string(),
                    }
                }
            };
            self.send(&reply)?;
            handled += 1;
        }
        Ok(handled)
    }

    /// Run until the backend closes.
    pub fn run(&mut self) -> Result<(), CliError> {
        self.start()?;
        tracing::info!("session started");
        let mut total = 0;
        loop {
            total += self.pump()?;
            if self.backend.is_closed() {
                break;
            }
            std::thread::sleep(POLL_INTERVAL);
        }
        tracing::info!(messages = total, hex = self.state.hex(), "session ended");
        Ok(())
    }

    fn send(&mut self, message: &CoreToUi) -> Result<(), CliError> {
        let json = serde_json::to_string(message)?;
        self.backend.send_to_ui(json)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use colorinfo_core::Rgba;

    #[test]
    fn test_request_state_does_not_mutate() {
        let mut state = ColorState::new();
        let reply = handle_command(&mut state, UiToCore::RequestState);
        assert_eq!(
            reply,
            CoreToUi::Initialize {
                snapshot: ColorState::new().snapshot()
            }
        );
        assert_eq!(state.revision(), 0);
    }

    #[test]
    fn test_set_canonical_replies_with_updated_views() {
        let mut state = ColorState::new();
        let reply = handle_command(
            &mut state,
            UiToCore::SetCanonical { r: 0.0, g: 0.0, b: 1.0, a: 1.0 },
        );
        match reply {
            CoreToUi::ViewsUpdated { snapshot } => {
                assert_eq!(snapshot.views.hex, "#0000FFFF");
                assert_eq!(snapshot.revision, 1);
            }
            other => panic!("unexpected reply {other:?}"),
        }
    }

    #[test]
    fn test_rejected_hex_replies_with_revert() {
        let mut state = ColorState::with_color(Rgba::BLACK);
        let reply = handle_command(
            &mut state,
            UiToCore::SetFromHex {
                text: "#12".into(),
            },
        );
        assert_eq!(
            reply,
            CoreToUi::HexReverted {
                hex: "#000000FF".into()
            }
        );
        assert_eq!(state.color(), Rgba::BLACK);
    }

    #[test]
    fn test_copy_hex_returns_clipboard_text() {
        let mut state = ColorState::new();
        handle_command(&mut state, UiToCore::SetFromHex { text: "336699".into() });
        let reply = handle_command(&mut state, UiToCore::CopyHex);
        assert_eq!(
            reply,
            CoreToUi::ClipboardText {
                text: "#336699FF".into()
            }
        );
    }

    #[test]
    fn test_slider_edits_route_through_inverse_paths() {
        let mut state = ColorState::new();
        handle_command(&mut state, UiToCore::SetRgb { r: 0.0, g: 255.0, b: 0.0, a: 1.0 });
        assert_eq!(state.hex(), "#00FF00FF");

        handle_command(&mut state, UiToCore::SetHsb { h: 0.0, s: 1.0, b: 1.0, a: 1.0 });
        assert_eq!(state.hex(), "#FF0000FF");

        handle_command(&mut state, UiToCore::SetCmyk { c: 100.0, m: 0.0, y: 0.0, k: 0.0 });
        assert_eq!(state.hex(), "#00FFFFFF");

        handle_command(&mut state, UiToCore::SetLab { l: 0.0, a: 0.0, b: 0.0 });
        assert_eq!(state.hex(), "#000000FF");
    }

    struct ClosedBackend;

    impl FrontendBackend for ClosedBackend {
        fn is_ready(&self) -> bool {
            false
        }
        fn is_closed(&self) -> bool {
            true
        }
        fn send_to_ui(&mut self, _json: String) -> Result<(), FrontendError> {
            Err(FrontendError::Closed)
        }
        fn try_recv_from_ui(&mut self) -> Option<String> {
            None
        }
    }

    #[test]
    fn test_start_requires_ready_backend() {
        let mut session = Session::new(ClosedBackend, ColorState::new());
        assert!(matches!(
            session.start(),
            Err(CliError::Frontend(FrontendError::NotReady))
        ));
    }
}
