//! The search pipeline and the view state it feeds.
//!
//! [`pipeline::run_search`] builds the prompt from the user's filters, calls
//! the model through a [`unispots_gemini::SearchExecutor`], extracts the place
//! list, and hands it to [`state::ViewState`], which also owns the selection,
//! the user location, and the saved places.

pub mod card;
pub mod locate;
pub mod pipeline;
pub mod share;
pub mod state;

pub use card::{image_url, star_count, Card, Details};
pub use locate::{locate, FixedLocator, LocateError, Locator};
pub use pipeline::{run_search, SearchOutcome};
pub use share::{
    share_data, share_place, Clipboard, ShareData, ShareError, ShareOutcome, ShareTarget,
};
pub use state::{MapView, SearchTicket, ViewState};
