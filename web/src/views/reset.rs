use std::rc::Rc;

use dioxus::prelude::*;
use handoff::ResetHandler;
use types::ResetLinkState;

use crate::page::{DomPage, PageView};

#[component]
pub fn ResetPage() -> Element {
    let view = use_signal(PageView::default);

    // One handler per page load; the link is read exactly once.
    let handler = use_hook(|| {
        let config = crate::config::load();
        let params = crate::location::current();
        let state = ResetLinkState::resolve(&params, config.field_set);
        Rc::new(ResetHandler::start(DomPage::new(view), config, state))
    });

    use_drop({
        let handler = handler.clone();
        move || handler.teardown()
    });

    let app_name = handler.config().app_name.clone();
    let v = view.read();

    rsx! {
        div { class: "reset-page",
            div { class: "reset-card",
                if v.spinner_visible {
                    div { class: "spinner" }
                }
                h1 { class: "reset-status", "{v.status}" }
                p { class: "reset-subtext", "{v.subtext}" }

                if v.code_card_visible {
                    div { class: "code-card",
                        div { class: "code-block-wrapper",
                            div { class: "code-block", "{v.code}" }
                            button {
                                class: "copy-btn",
                                disabled: v.copy_disabled,
                                onclick: {
                                    let handler = handler.clone();
                                    move |_| {
                                        let handler = handler.clone();
                                        spawn(async move {
                                            handler.copy_code().await;
                                        });
                                    }
                                },
                                "{v.copy_label}"
                            }
                        }
                        if !v.email_hint.is_empty() {
                            p { class: "text-muted", "{v.email_hint}" }
                        }
                    }
                }

                if v.open_app_visible {
                    button {
                        class: "btn btn-primary btn-lg",
                        onclick: {
                            let handler = handler.clone();
                            move |_| handler.open_app()
                        },
                        "Open {app_name}"
                    }
                }
            }
        }
    }
}
