mod app_link;
mod config;
mod error;
pub mod field;
mod location;
mod reset_link;

pub use app_link::{DEFAULT_APP_URL, app_link};
pub use config::HandlerConfig;
pub use error::LinkError;
pub use field::{Field, FieldSet};
pub use location::LocationParams;
pub use reset_link::{ResetLinkState, UNKNOWN_CODE};
