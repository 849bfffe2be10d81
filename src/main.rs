use dioxus::prelude::*;

mod components;
mod state;
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
        document::Link { rel: "icon", href: FAVICON }
        document::Meta { name: "theme-color", content: "#8257e5" }
        document::Title { "rustcast" }
        document::Stylesheet { href: APP_CSS }

        AppShell {}
    }
}
