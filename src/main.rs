use dioxus::prelude::*;

mod api;
mod components;
mod playback;
mod settings;

use components::AppShell;

const PLAYER_CSS: Asset = asset!("/assets/styling/player.css");

fn main() {
    dioxus::logger::initialize_default();
    dioxus::launch(App);
}

#[component]
fn App() -> Element {
    rsx! {
        document::Title { "Playdeck" }
        document::Meta { name: "theme-color", content: "#121212" }
        document::Meta { name: "viewport", content: "width=device-width, initial-scale=1" }

        document::Stylesheet { href: PLAYER_CSS }

        AppShell {}
    }
}
