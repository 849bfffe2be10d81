use crate::components::PlayerController;
use crate::state::Episode;
use crate::utils::{format_duration, format_published_date};
use dioxus::logger::tracing;
use dioxus::prelude::*;

const PLAY_GREEN_ICON: Asset = asset!("/assets/icons/play-green.svg");

// Bundled sample catalog; there is no feed fetching in this build.
const LATEST_EPISODES: &str = include_str!("../../assets/episodes.json");

fn load_episodes() -> Vec<Episode> {
    match serde_json::from_str(LATEST_EPISODES) {
        Ok(episodes) => episodes,
        Err(err) => {
            tracing::error!("failed to parse bundled episodes: {err}");
            Vec::new()
        }
    }
}

/// Latest-releases listing; each row hands the full list plus its own index
/// to the player state.
#[component]
pub fn EpisodeList() -> Element {
    let player = use_context::<PlayerController>();
    let episodes = use_signal(load_episodes);
    let list = episodes();

    rsx! {
        section { class: "episode-list",
            h2 { "Últimos lançamentos" }
            ul {
                for (index , episode) in list.iter().enumerate() {
                    li { key: "{episode.id}",
                        img { src: "{episode.thumbnail}", alt: "{episode.title}" }
                        div { class: "episode-details",
                            strong { "{episode.title}" }
                            p { "{episode.members}" }
                            span { {format_published_date(&episode.published_at)} }
                            span { class: "separator", {format_duration(episode.duration)} }
                        }
                        button {
                            r#type: "button",
                            onclick: {
                                let episode_list = list.clone();
                                move |_| player.play_list(episode_list.clone(), index)
                            },
                            img { src: PLAY_GREEN_ICON, alt: "Tocar episodio" }
                        }
                    }
                }
            }
        }
    }
}
