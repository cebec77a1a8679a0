use std::{
    cell::{Cell, RefCell},
    rc::Rc,
};

use types::{HandlerConfig, LinkError, ResetLinkState, app_link};
use url::Url;

use crate::{Page, messages};

/// Copy button lifecycle. The button is disabled in every state but `Idle`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CopyState {
    Idle,
    Writing,
    Confirmed,
}

/// Drives a reset page from a resolved link.
///
/// All timers the handler schedules are owned by it and cancelled by
/// [`teardown`](Self::teardown) or when the handler is dropped. At most three
/// are held at once: the launch, the reminder and the latest copy restore.
pub struct ResetHandler<P: Page> {
    page: P,
    config: HandlerConfig,
    state: ResetLinkState,
    outcome: Result<Url, LinkError>,
    copy_state: Rc<Cell<CopyState>>,
    lifecycle_tasks: RefCell<Vec<P::Task>>,
    copy_restore: RefCell<Option<P::Task>>,
    torn_down: Cell<bool>,
}

impl<P: Page> ResetHandler<P> {
    /// Validate `state` and render the resulting page.
    ///
    /// On success the code card and open button are shown and the automatic
    /// launch and reminder are scheduled. On failure the page ends in the
    /// error state and nothing is scheduled.
    pub fn start(page: P, config: HandlerConfig, state: ResetLinkState) -> Self {
        let field_set = config.field_set;
        let outcome = state
            .validate(field_set)
            .map(|()| app_link(&config.app_url, &state, field_set));

        let handler = Self {
            page,
            config,
            state,
            outcome,
            copy_state: Rc::new(Cell::new(CopyState::Idle)),
            lifecycle_tasks: RefCell::new(Vec::new()),
            copy_restore: RefCell::new(None),
            torn_down: Cell::new(false),
        };

        match &handler.outcome {
            Ok(link) => handler.render_success(link),
            Err(err) => handler.finish_with_error(err),
        }

        handler
    }

    pub fn config(&self) -> &HandlerConfig {
        &self.config
    }

    pub fn outcome(&self) -> Result<(), &LinkError> {
        self.outcome.as_ref().map(|_| ())
    }

    /// Where launches navigate to. `None` when the link was rejected.
    pub fn app_link(&self) -> Option<&Url> {
        self.outcome.as_ref().ok()
    }

    pub fn copy_state(&self) -> CopyState {
        self.copy_state.get()
    }

    /// The user pressed the open button.
    pub fn open_app(&self) {
        if self.torn_down.get() {
            return;
        }
        let Ok(link) = &self.outcome else {
            tracing::warn!("open requested for a rejected link");
            return;
        };

        let app_name = &self.config.app_name;
        self.page
            .set_status(&messages::opening(app_name), messages::OPENING_SUBTEXT);
        launch(&self.page, link);
    }

    /// The user pressed the copy button.
    ///
    /// The button is disabled before the clipboard is touched, so presses
    /// during the write or the confirmation are ignored.
    pub async fn copy_code(&self) {
        if self.torn_down.get() || self.outcome.is_err() {
            return;
        }
        if self.copy_state.get() != CopyState::Idle {
            tracing::debug!(state = ?self.copy_state.get(), "copy already in progress");
            return;
        }

        let original = self.page.copy_label();
        self.copy_state.set(CopyState::Writing);
        self.page.set_copy_button(&original, true);

        let code = self.state.display_code(self.config.field_set);
        let written = self.page.write_text(code).await;
        if self.torn_down.get() {
            self.copy_state.set(CopyState::Idle);
            return;
        }

        match written {
            Ok(()) => {
                self.copy_state.set(CopyState::Confirmed);
                self.page.set_copy_button(messages::COPIED, true);

                let page = self.page.clone();
                let copy_state = Rc::clone(&self.copy_state);
                let restore = self.schedule(self.config.copy_reset_delay(), move || {
                    page.set_copy_button(&original, false);
                    copy_state.set(CopyState::Idle);
                });
                // Replacing the slot drops the handle of the previous, already
                // fired, restore.
                *self.copy_restore.borrow_mut() = restore;
            }
            Err(err) => {
                tracing::warn!(%err, "clipboard write failed");
                self.page.set_copy_button(messages::COPY_MANUALLY, false);
                self.copy_state.set(CopyState::Idle);
            }
        }
    }

    /// Cancel every pending task and ignore further input.
    pub fn teardown(&self) {
        self.torn_down.set(true);
        let mut cancelled = self.lifecycle_tasks.borrow_mut().drain(..).count();
        cancelled += usize::from(self.copy_restore.borrow_mut().take().is_some());
        tracing::debug!(cancelled, "reset handler torn down");
    }

    fn render_success(&self, link: &Url) {
        let app_name = &self.config.app_name;

        self.page
            .show_code(self.state.display_code(self.config.field_set));
        match self.state.email() {
            Some(email) => self.page.set_email_hint(&messages::email_hint(email)),
            None => self.page.set_email_hint(""),
        }
        self.page.set_open_app_visible(true);
        self.page
            .set_status(messages::VERIFIED, &messages::verified_subtext(app_name));
        self.page.stop_spinner();

        tracing::info!(
            fields = link.query_pairs().count(),
            "reset link verified"
        );

        let page = self.page.clone();
        let target = link.clone();
        self.track(self.config.auto_open_delay(), move || {
            launch(&page, &target);
        });

        // Fires even if the app already opened; it only rewrites text.
        let page = self.page.clone();
        let reminder = messages::reminder(app_name);
        self.track(self.config.reminder_delay(), move || {
            page.set_subtext(&reminder);
        });
    }

    fn finish_with_error(&self, err: &LinkError) {
        tracing::info!(%err, "rejecting reset link");

        self.page.stop_spinner();
        self.page
            .set_status(err.message(), &err.guidance(&self.config.app_name));
        self.page.hide_code_card();
        self.page.set_open_app_visible(false);
    }

    fn track(&self, delay: std::time::Duration, task: impl FnOnce() + 'static) {
        if let Some(handle) = self.schedule(delay, task) {
            self.lifecycle_tasks.borrow_mut().push(handle);
        }
    }

    /// Nothing is scheduled once torn down.
    fn schedule(
        &self,
        delay: std::time::Duration,
        task: impl FnOnce() + 'static,
    ) -> Option<P::Task> {
        if self.torn_down.get() {
            return None;
        }
        Some(self.page.schedule(delay, task))
    }
}

fn launch<P: Page>(page: &P, link: &Url) {
    tracing::info!(
        fields = link.query_pairs().count(),
        "opening companion app"
    );
    page.assign(link);
}
