use dioxus::prelude::*;

mod api;
mod components;
mod config;
mod error;
mod slideshow;
mod utils;

use components::AppShell;

const FAVICON: Asset = asset!("/assets/favicon.svg");
const APP_CSS: Asset = asset!("/assets/styling/app.css");

fn main() {
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "VidSpy" }
        document::Link { rel: "icon", r#type: "image/svg+xml", href: FAVICON }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }
        document::Meta { name: "theme-color", content: "#000000" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
