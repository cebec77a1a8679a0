use dioxus::prelude::*;

mod config;
mod location;
mod page;
mod views;

use views::ResetPage;

fn main() {
    dioxus::logger::initialize_default();

    #[cfg(feature = "web")]
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Reset your password" }
        document::Link { rel: "stylesheet", href: asset!("/assets/main.css") }

        ResetPage {}
    }
}
