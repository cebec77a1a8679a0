//! What the handler needs from the page hosting it.
//!
//! Everything here is single-threaded. Implementations are expected to be
//! cheap handles (a signal, an `Rc`) so they can be cloned into scheduled
//! tasks.

use std::{future::Future, time::Duration};

use url::Url;

/// A clipboard write was refused or the API is unavailable.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClipboardError {
    pub message: String,
}

impl std::fmt::Display for ClipboardError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message)
    }
}

impl std::error::Error for ClipboardError {}

impl From<&str> for ClipboardError {
    fn from(s: &str) -> Self {
        Self {
            message: s.to_string(),
        }
    }
}

impl From<String> for ClipboardError {
    fn from(s: String) -> Self {
        Self { message: s }
    }
}

pub trait StatusDisplay {
    fn set_status(&self, text: &str, subtext: &str);
    fn set_subtext(&self, subtext: &str);
    fn stop_spinner(&self);
}

pub trait CodeDisplay {
    /// Reveal the code card with `code` in it.
    fn show_code(&self, code: &str);
    fn hide_code_card(&self);
    /// An empty hint clears the region.
    fn set_email_hint(&self, hint: &str);
    fn set_open_app_visible(&self, visible: bool);
    fn copy_label(&self) -> String;
    fn set_copy_button(&self, label: &str, disabled: bool);
}

pub trait Clipboard {
    fn write_text(&self, text: &str) -> impl Future<Output = Result<(), ClipboardError>>;
}

pub trait Navigator {
    /// Point the page at `url`. There is no signal of whether anything
    /// handled it.
    fn assign(&self, url: &Url);
}

pub trait Scheduler {
    /// Dropping the handle cancels the task if it has not run yet.
    type Task;

    fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> Self::Task;
}

/// Everything a [`ResetHandler`](crate::ResetHandler) talks to.
pub trait Page: StatusDisplay + CodeDisplay + Clipboard + Navigator + Scheduler + Clone + 'static {}

impl<T> Page for T where
    T: StatusDisplay + CodeDisplay + Clipboard + Navigator + Scheduler + Clone + 'static
{
}
