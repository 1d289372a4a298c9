//! Sharing a place with someone else.
//!
//! A share target (a system share sheet, say) is preferred. Without one the
//! title and text go to the clipboard instead. Neither failure is fatal.

use unispots_core::Place;

#[derive(Debug, thiserror::Error)]
pub enum ShareError {
    #[error("share cancelled")]
    Cancelled,

    /// No clipboard or share sheet can be reached from here.
    #[error("no clipboard available: {0}")]
    Unsupported(String),

    #[error("share failed: {0}")]
    Failed(String),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ShareData {
    pub title: String,
    pub text: String,
}

impl ShareData {
    /// Clipboard form: title and text on separate lines.
    #[must_use]
    pub fn clipboard_text(&self) -> String {
        format!("{}\n{}", self.title, self.text)
    }
}

#[must_use]
pub fn share_data(place: &Place) -> ShareData {
    ShareData {
        title: place.name.clone(),
        text: format!(
            "Check out {} at {}. Found on UniSpots!",
            place.name, place.address
        ),
    }
}

pub trait ShareTarget {
    /// Hand `data` to the share sheet.
    ///
    /// # Errors
    ///
    /// Returns [`ShareError`] if the user cancelled or the share failed.
    fn share(&self, data: &ShareData) -> Result<(), ShareError>;
}

pub trait Clipboard {
    /// # Errors
    ///
    /// Returns [`ShareError`] if the clipboard could not be written.
    fn write_text(&self, text: &str) -> Result<(), ShareError>;
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShareOutcome {
    Shared,
    Copied,
    /// The clipboard cannot be reached; the caller shows the text instead.
    Unavailable,
    Failed,
}

/// Share `place` through `target` when one exists, else copy it to
/// `clipboard`. A failed share does not fall through to the clipboard.
pub fn share_place(
    place: &Place,
    target: Option<&dyn ShareTarget>,
    clipboard: &dyn Clipboard,
) -> ShareOutcome {
    let data = share_data(place);

    if let Some(target) = target {
        return match target.share(&data) {
            Ok(()) => ShareOutcome::Shared,
            Err(e) => {
                tracing::debug!(error = %e, "share failed or cancelled");
                ShareOutcome::Failed
            }
        };
    }

    match clipboard.write_text(&data.clipboard_text()) {
        Ok(()) => ShareOutcome::Copied,
        Err(ShareError::Unsupported(reason)) => {
            tracing::debug!(%reason, "clipboard unavailable");
            ShareOutcome::Unavailable
        }
        Err(e) => {
            tracing::error!(error = %e, "failed to copy");
            ShareOutcome::Failed
        }
    }
}
