use crate::components::{EpisodeList, Player, PlayerController};
use crate::state::PlayerState;
use crate::utils::format_header_date;
use chrono::Utc;
use dioxus::prelude::*;

const LOGO_ICON: Asset = asset!("/assets/icons/logo.svg");

/// Application shell: owns the shared player state, provides the controller
/// via context, and lays out the page next to the persistent player panel.
#[component]
pub fn AppShell() -> Element {
    let state = use_signal(PlayerState::default);
    let player = PlayerController::new(state);
    use_context_provider(|| player);

    let today = format_header_date(&Utc::now());

    rsx! {
        div { class: "app-wrapper",
            main {
                header { class: "app-header",
                    img { src: LOGO_ICON, alt: "rustcast" }
                    p { "O melhor para você ouvir, sempre" }
                    span { "{today}" }
                }
                EpisodeList {}
            }
            Player {}
        }
    }
}
