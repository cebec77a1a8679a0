//! In-memory page with a manual clock.

use std::{
    cell::RefCell,
    rc::{Rc, Weak},
    time::Duration,
};

use url::Url;

use crate::page::{
    Clipboard, ClipboardError, CodeDisplay, Navigator, Scheduler, StatusDisplay,
};

pub const COPY_LABEL: &str = "Copy code";

/// Everything the page currently shows.
#[derive(Debug, Clone, PartialEq)]
pub struct View {
    pub status: String,
    pub subtext: String,
    pub spinner_visible: bool,
    pub code_card_visible: bool,
    pub code: String,
    pub email_hint: String,
    pub open_app_visible: bool,
    pub copy_label: String,
    pub copy_disabled: bool,
}

impl Default for View {
    fn default() -> Self {
        Self {
            status: "Checking your reset link…".into(),
            subtext: String::new(),
            spinner_visible: true,
            code_card_visible: false,
            code: String::new(),
            email_hint: String::new(),
            open_app_visible: false,
            copy_label: COPY_LABEL.into(),
            copy_disabled: false,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClipboardMode {
    Accept,
    Deny,
    /// Accept after yielding to the executor once.
    Slow,
}

struct Timer {
    id: u64,
    due: Duration,
    task: Box<dyn FnOnce()>,
}

struct Inner {
    view: View,
    navigations: Vec<String>,
    clipboard: Vec<String>,
    clipboard_mode: ClipboardMode,
    /// Copy button state observed when the clipboard was written.
    disabled_during_write: Vec<bool>,
    now: Duration,
    next_id: u64,
    timers: Vec<Timer>,
    /// Task handles that have not been dropped, fired or not.
    live_handles: usize,
}

#[derive(Clone)]
pub struct FakePage {
    inner: Rc<RefCell<Inner>>,
}

impl FakePage {
    pub fn new() -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner {
                view: View::default(),
                navigations: Vec::new(),
                clipboard: Vec::new(),
                clipboard_mode: ClipboardMode::Accept,
                disabled_during_write: Vec::new(),
                now: Duration::ZERO,
                next_id: 0,
                timers: Vec::new(),
                live_handles: 0,
            })),
        }
    }

    pub fn with_clipboard(self, mode: ClipboardMode) -> Self {
        self.inner.borrow_mut().clipboard_mode = mode;
        self
    }

    pub fn view(&self) -> View {
        self.inner.borrow().view.clone()
    }

    pub fn navigations(&self) -> Vec<String> {
        self.inner.borrow().navigations.clone()
    }

    pub fn clipboard(&self) -> Vec<String> {
        self.inner.borrow().clipboard.clone()
    }

    pub fn disabled_during_write(&self) -> Vec<bool> {
        self.inner.borrow().disabled_during_write.clone()
    }

    pub fn pending_timers(&self) -> usize {
        self.inner.borrow().timers.len()
    }

    pub fn live_handles(&self) -> usize {
        self.inner.borrow().live_handles
    }

    /// Move the clock forward, running due tasks in order.
    pub fn advance(&self, by: Duration) {
        let target = self.inner.borrow().now + by;
        loop {
            let next = {
                let mut inner = self.inner.borrow_mut();
                let due = inner
                    .timers
                    .iter()
                    .enumerate()
                    .filter(|(_, t)| t.due <= target)
                    .min_by_key(|(_, t)| (t.due, t.id))
                    .map(|(i, _)| i);
                match due {
                    Some(i) => {
                        let timer = inner.timers.remove(i);
                        inner.now = timer.due;
                        Some(timer.task)
                    }
                    None => {
                        inner.now = target;
                        None
                    }
                }
            };
            match next {
                Some(task) => task(),
                None => break,
            }
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.advance(Duration::from_millis(ms));
    }

    fn update(&self, f: impl FnOnce(&mut View)) {
        f(&mut self.inner.borrow_mut().view);
    }
}

impl StatusDisplay for FakePage {
    fn set_status(&self, text: &str, subtext: &str) {
        self.update(|v| {
            v.status = text.into();
            v.subtext = subtext.into();
        });
    }

    fn set_subtext(&self, subtext: &str) {
        self.update(|v| v.subtext = subtext.into());
    }

    fn stop_spinner(&self) {
        self.update(|v| v.spinner_visible = false);
    }
}

impl CodeDisplay for FakePage {
    fn show_code(&self, code: &str) {
        self.update(|v| {
            v.code_card_visible = true;
            v.code = code.into();
        });
    }

    fn hide_code_card(&self) {
        self.update(|v| v.code_card_visible = false);
    }

    fn set_email_hint(&self, hint: &str) {
        self.update(|v| v.email_hint = hint.into());
    }

    fn set_open_app_visible(&self, visible: bool) {
        self.update(|v| v.open_app_visible = visible);
    }

    fn copy_label(&self) -> String {
        self.inner.borrow().view.copy_label.clone()
    }

    fn set_copy_button(&self, label: &str, disabled: bool) {
        self.update(|v| {
            v.copy_label = label.into();
            v.copy_disabled = disabled;
        });
    }
}

impl Clipboard for FakePage {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let mode = self.inner.borrow().clipboard_mode;
        if mode == ClipboardMode::Slow {
            tokio::task::yield_now().await;
        }

        let mut inner = self.inner.borrow_mut();
        let disabled = inner.view.copy_disabled;
        inner.disabled_during_write.push(disabled);
        match mode {
            ClipboardMode::Deny => Err("clipboard permission denied".into()),
            ClipboardMode::Accept | ClipboardMode::Slow => {
                inner.clipboard.push(text.to_string());
                Ok(())
            }
        }
    }
}

impl Navigator for FakePage {
    fn assign(&self, url: &Url) {
        self.inner.borrow_mut().navigations.push(url.to_string());
    }
}

pub struct FakeTask {
    id: u64,
    inner: Weak<RefCell<Inner>>,
}

impl Drop for FakeTask {
    fn drop(&mut self) {
        if let Some(shared) = self.inner.upgrade() {
            if let Ok(mut inner) = shared.try_borrow_mut() {
                inner.timers.retain(|t| t.id != self.id);
                inner.live_handles -= 1;
            }
        }
    }
}

impl Scheduler for FakePage {
    type Task = FakeTask;

    fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> FakeTask {
        let mut inner = self.inner.borrow_mut();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.live_handles += 1;
        let due = inner.now + delay;
        inner.timers.push(Timer {
            id,
            due,
            task: Box::new(task),
        });
        FakeTask {
            id,
            inner: Rc::downgrade(&self.inner),
        }
    }
}
