//! Terminal clipboard via the OSC 52 escape sequence.

use std::io::{IsTerminal, Write};

use base64::Engine;
use unispots_discovery::{Clipboard, ShareError};

/// Asks the terminal emulator to place text on the system clipboard. Only
/// works when stdout is a terminal that honours OSC 52.
pub(crate) struct Osc52Clipboard;

impl Clipboard for Osc52Clipboard {
    fn write_text(&self, text: &str) -> Result<(), ShareError> {
        let mut stdout = std::io::stdout();
        if !stdout.is_terminal() {
            return Err(ShareError::Unsupported(
                "stdout is not a terminal".to_string(),
            ));
        }
        let encoded = base64::engine::general_purpose::STANDARD.encode(text);
        write!(stdout, "\x1b]52;c;{encoded}\x07")
            .and_then(|()| stdout.flush())
            .map_err(|e| ShareError::Failed(e.to_string()))
    }
}
