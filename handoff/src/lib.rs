//! The reset-link handler: validates a resolved link, renders the page and
//! hands the credentials to the companion app.

mod handler;
pub mod messages;
pub mod page;
#[cfg(test)]
mod testing;

pub use handler::{CopyState, ResetHandler};
pub use page::{Clipboard, ClipboardError, CodeDisplay, Navigator, Page, Scheduler, StatusDisplay};
