use std::time::Duration;

use dioxus::core::Task;
use dioxus::prelude::*;
use gloo_timers::future::TimeoutFuture;
use handoff::{
    Clipboard, ClipboardError, CodeDisplay, Navigator, Scheduler, StatusDisplay,
};
use url::Url;

pub const COPY_LABEL: &str = "Copy code";

/// What the reset page renders.
#[derive(Debug, Clone, PartialEq)]
pub struct PageView {
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

impl Default for PageView {
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

/// The browser page, backed by a view signal.
#[derive(Clone, Copy)]
pub struct DomPage {
    view: Signal<PageView>,
}

impl DomPage {
    pub fn new(view: Signal<PageView>) -> Self {
        Self { view }
    }

    fn update(&self, f: impl FnOnce(&mut PageView)) {
        let mut view = self.view;
        f(&mut view.write());
    }
}

impl StatusDisplay for DomPage {
    fn set_status(&self, text: &str, subtext: &str) {
        self.update(|v| {
            v.status = text.to_string();
            v.subtext = subtext.to_string();
        });
    }

    fn set_subtext(&self, subtext: &str) {
        self.update(|v| v.subtext = subtext.to_string());
    }

    fn stop_spinner(&self) {
        self.update(|v| v.spinner_visible = false);
    }
}

impl CodeDisplay for DomPage {
    fn show_code(&self, code: &str) {
        self.update(|v| {
            v.code_card_visible = true;
            v.code = code.to_string();
        });
    }

    fn hide_code_card(&self) {
        self.update(|v| v.code_card_visible = false);
    }

    fn set_email_hint(&self, hint: &str) {
        self.update(|v| v.email_hint = hint.to_string());
    }

    fn set_open_app_visible(&self, visible: bool) {
        self.update(|v| v.open_app_visible = visible);
    }

    fn copy_label(&self) -> String {
        self.view.peek().copy_label.clone()
    }

    fn set_copy_button(&self, label: &str, disabled: bool) {
        self.update(|v| {
            v.copy_label = label.to_string();
            v.copy_disabled = disabled;
        });
    }
}

impl Clipboard for DomPage {
    async fn write_text(&self, text: &str) -> Result<(), ClipboardError> {
        let literal = serde_json::to_string(text)
            .map_err(|e| ClipboardError::from(format!("failed to encode text: {e}")))?;
        let js = format!(
            r#"
            try {{
                await navigator.clipboard.writeText({literal});
                dioxus.send(true);
            }} catch (_) {{
                dioxus.send(false);
            }}
            "#
        );

        match document::eval(&js).recv::<bool>().await {
            Ok(true) => Ok(()),
            Ok(false) => Err("clipboard write was refused".into()),
            Err(e) => Err(format!("clipboard unavailable: {e}").into()),
        }
    }
}

impl Navigator for DomPage {
    fn assign(&self, url: &Url) {
        crate::location::assign(url);
    }
}

/// A timer running as a component task. Dropping it cancels the timer.
pub struct ScheduledTask(Task);

impl Drop for ScheduledTask {
    fn drop(&mut self) {
        self.0.cancel();
    }
}

impl Scheduler for DomPage {
    type Task = ScheduledTask;

    fn schedule(&self, delay: Duration, task: impl FnOnce() + 'static) -> ScheduledTask {
        let millis = u32::try_from(delay.as_millis()).unwrap_or(u32::MAX);
        ScheduledTask(spawn(async move {
            TimeoutFuture::new(millis).await;
            task();
        }))
    }
}
