use crate::components::{AudioHandle, PlayerController};
use crate::utils::format_duration;
use dioxus::core::{Runtime, RuntimeGuard};
use dioxus::logger::tracing;
use dioxus::prelude::*;

const PLAYING_ICON: Asset = asset!("/assets/icons/playing.svg");
const SHUFFLE_ICON: Asset = asset!("/assets/icons/shuffle.svg");
const PREVIOUS_ICON: Asset = asset!("/assets/icons/play-previous.svg");
const PLAY_ICON: Asset = asset!("/assets/icons/play.svg");
const PAUSE_ICON: Asset = asset!("/assets/icons/pause.svg");
const NEXT_ICON: Asset = asset!("/assets/icons/play-next.svg");
const REPEAT_ICON: Asset = asset!("/assets/icons/repeat.svg");

#[derive(Debug, PartialEq)]
enum HandleTransition {
    Keep,
    Release,
    Acquire,
}

/// Classify an episode-identity change for the lifecycle effect. `Release`
/// tears the handle down without touching the error banner; only `Acquire`
/// starts from a clean banner.
fn handle_transition(last_id: Option<&str>, next_id: Option<&str>) -> HandleTransition {
    if last_id == next_id {
        HandleTransition::Keep
    } else if next_id.is_none() {
        HandleTransition::Release
    } else {
        HandleTransition::Acquire
    }
}

/// The command owed to the media element after a play-flag change: `None`
/// while the flag is unchanged, otherwise the new flag exactly once.
fn play_pause_command(previous: bool, current: bool) -> Option<bool> {
    (previous != current).then_some(current)
}

/// Persistent player panel: shows the selected episode, keeps the local
/// progress counter in sync with the media element, and forwards every
/// transport intent to the shared state.
#[component]
pub fn Player() -> Element {
    let player = use_context::<PlayerController>();
    let mut progress = use_signal(|| 0u32);
    let mut playback_error = use_signal(|| None::<String>);
    let handle = use_signal(|| None::<AudioHandle>);
    let last_episode_id = use_signal(|| None::<String>);
    let last_playing = use_signal(|| false);
    let last_looping = use_signal(|| false);

    let episode = player.current_episode();
    let is_playing = player.is_playing();
    let is_looping = player.is_looping();
    let is_shuffling = player.is_shuffling();
    let episode_count = player.episode_count();

    // Handle lifecycle: tear down and re-acquire whenever the selected
    // episode changes identity. Listener registration happens once per
    // handle; release detaches everything. Only a fresh acquisition wipes
    // the error banner: clearing to idle must leave any message on screen.
    {
        let mut handle = handle.clone();
        let mut last_episode_id = last_episode_id.clone();
        use_effect(move || {
            let episode = player.current_episode();
            let episode_id = episode.as_ref().map(|e| e.id.clone());
            let transition =
                handle_transition(last_episode_id.peek().as_deref(), episode_id.as_deref());
            if transition == HandleTransition::Keep {
                return;
            }
            last_episode_id.set(episode_id);
            handle.set(None);
            progress.set(0);
            if transition == HandleTransition::Release {
                return;
            }
            playback_error.set(None);

            let Some(episode) = episode else {
                return;
            };
            let Some(mut acquired) = AudioHandle::acquire(&episode.url) else {
                tracing::warn!("no playback element available; audio stays muted");
                return;
            };

            let runtime = Runtime::current();
            {
                let runtime = runtime.clone();
                let mut progress = progress.clone();
                acquired.on_loaded_metadata(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    progress.set(0);
                });
            }
            {
                let runtime = runtime.clone();
                let mut progress = progress.clone();
                acquired.on_time_update(move |time| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    progress.set(time.max(0.0).floor() as u32);
                });
            }
            {
                let runtime = runtime.clone();
                acquired.on_play(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.set_playing_state(true);
                });
            }
            {
                let runtime = runtime.clone();
                acquired.on_pause(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.set_playing_state(false);
                });
            }
            {
                let runtime = runtime.clone();
                acquired.on_ended(move || {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    player.handle_episode_ended();
                });
            }
            {
                let runtime = runtime.clone();
                let mut playback_error = playback_error.clone();
                acquired.on_error(move |message| {
                    let _guard = RuntimeGuard::new(runtime.clone());
                    let message =
                        message.unwrap_or_else(|| "Unable to load this episode.".to_string());
                    tracing::error!("media playback failed: {message}");
                    playback_error.set(Some(message));
                    player.clear_player_state();
                });
            }

            acquired.set_looping(*last_looping.peek());
            if *last_playing.peek() {
                acquired.play();
            }
            handle.set(Some(acquired));
        });
    }

    // Play-state observer: exactly one play or pause command per flag change,
    // a no-op while no handle is mounted.
    {
        let handle = handle.clone();
        let mut last_playing = last_playing.clone();
        use_effect(move || {
            let playing = player.is_playing();
            let Some(command) = play_pause_command(*last_playing.peek(), playing) else {
                return;
            };
            last_playing.set(playing);
            if let Some(audio) = handle.peek().as_ref() {
                if command {
                    audio.play();
                } else {
                    audio.pause();
                }
            }
        });
    }

    // Mirror the loop flag onto the element so natural end only fires when
    // not looping.
    {
        let handle = handle.clone();
        let mut last_looping = last_looping.clone();
        use_effect(move || {
            let looping = player.is_looping();
            if *last_looping.peek() == looping {
                return;
            }
            last_looping.set(looping);
            if let Some(audio) = handle.peek().as_ref() {
                audio.set_looping(looping);
            }
        });
    }

    // Optimistic seek: the slider is already bounded by the episode duration.
    let on_seek = {
        let handle = handle.clone();
        move |e: Event<FormData>| {
            if let Ok(amount) = e.value().parse::<u32>() {
                if let Some(audio) = handle.peek().as_ref() {
                    audio.seek(amount as f64);
                }
                progress.set(amount);
            }
        }
    };

    let duration = episode.as_ref().map(|e| e.duration).unwrap_or(0);

    rsx! {
        aside { class: "player",
            if let Some(message) = playback_error() {
                div { class: "playback-error", "{message}" }
            }
            header {
                img { src: PLAYING_ICON, alt: "tocando agora" }
                strong { "Tocando Agora" }
            }

            match &episode {
                Some(episode) => rsx! {
                    div { class: "current-episode",
                        img { src: "{episode.thumbnail}", alt: "imagem do episodio" }
                        strong { "{episode.title}" }
                        span { "{episode.members}" }
                    }
                },
                None => rsx! {
                    div { class: "empty-player",
                        strong { "Selecione um podcast para ouvir." }
                    }
                },
            }

            footer { class: if episode.is_none() { "empty" } else { "" },
                div { class: "progress",
                    span { {format_duration(progress())} }
                    div { class: "slider",
                        match &episode {
                            Some(episode) => rsx! {
                                input {
                                    r#type: "range",
                                    min: "0",
                                    max: "{episode.duration}",
                                    value: "{progress}",
                                    oninput: on_seek,
                                }
                            },
                            None => rsx! {
                                div { class: "empty-slider" }
                            },
                        }
                    }
                    span { {format_duration(duration)} }
                }

                div { class: "buttons",
                    button {
                        r#type: "button",
                        class: if is_shuffling { "is-active" } else { "" },
                        disabled: episode.is_none() || episode_count == 1,
                        onclick: move |_| player.toggle_shuffle(),
                        img { src: SHUFFLE_ICON, alt: "Embaralhar" }
                    }
                    button {
                        r#type: "button",
                        disabled: episode.is_none() || !player.has_previous(),
                        onclick: move |_| player.play_previous(),
                        img { src: PREVIOUS_ICON, alt: "Tocar Anterior" }
                    }
                    button {
                        r#type: "button",
                        class: "play-button",
                        disabled: episode.is_none(),
                        onclick: move |_| player.toggle_play(),
                        if is_playing {
                            img { src: PAUSE_ICON, alt: "Pausar" }
                        } else {
                            img { src: PLAY_ICON, alt: "Tocar" }
                        }
                    }
                    button {
                        r#type: "button",
                        disabled: episode.is_none() || !player.has_next(),
                        onclick: move |_| player.play_next(),
                        img { src: NEXT_ICON, alt: "Tocar proximo" }
                    }
                    button {
                        r#type: "button",
                        class: if is_looping { "is-active" } else { "" },
                        disabled: episode.is_none(),
                        onclick: move |_| player.toggle_looping(),
                        img { src: REPEAT_ICON, alt: "Repetir" }
                    }
                }
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn unchanged_episode_keeps_the_handle() {
        assert_eq!(handle_transition(None, None), HandleTransition::Keep);
        assert_eq!(handle_transition(Some("a"), Some("a")), HandleTransition::Keep);
    }

    #[test]
    fn clearing_to_idle_releases_and_leaves_the_banner() {
        assert_eq!(handle_transition(Some("a"), None), HandleTransition::Release);
    }

    #[test]
    fn a_new_episode_acquires_with_a_clean_banner() {
        assert_eq!(handle_transition(None, Some("a")), HandleTransition::Acquire);
        assert_eq!(
            handle_transition(Some("a"), Some("b")),
            HandleTransition::Acquire
        );
    }

    #[test]
    fn flag_change_issues_exactly_one_command() {
        assert_eq!(play_pause_command(false, true), Some(true));
        assert_eq!(play_pause_command(true, false), Some(false));
    }

    #[test]
    fn unchanged_flag_issues_no_command() {
        assert_eq!(play_pause_command(false, false), None);
        assert_eq!(play_pause_command(true, true), None);
    }
}
