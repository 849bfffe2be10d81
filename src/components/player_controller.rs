//! Injected capability object for the shared player state. Components hold a
//! copy of the controller and go through it for every read and mutation; the
//! backing signal is owned by the app shell.

use dioxus::prelude::*;

use crate::state::{Episode, PlayerState};

#[derive(Clone, Copy)]
pub struct PlayerController {
    state: Signal<PlayerState>,
}

impl PlayerController {
    pub fn new(state: Signal<PlayerState>) -> Self {
        Self { state }
    }

    pub fn play_list(&self, episodes: Vec<Episode>, index: usize) {
        let mut state = self.state;
        state.with_mut(|s| s.play_list(episodes, index));
    }

    pub fn toggle_play(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.toggle_play());
    }

    /// Write-back from the media element's own play/pause events. Skips the
    /// write when the flag already matches, so echoing a command we issued
    /// does not trigger another render pass.
    pub fn set_playing_state(&self, playing: bool) {
        let mut state = self.state;
        if state.peek().is_playing != playing {
            state.with_mut(|s| s.set_playing_state(playing));
        }
    }

    pub fn play_next(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.play_next());
    }

    pub fn play_previous(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.play_previous());
    }

    pub fn toggle_looping(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.toggle_looping());
    }

    pub fn toggle_shuffle(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.toggle_shuffle());
    }

    pub fn clear_player_state(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.clear());
    }

    pub fn handle_episode_ended(&self) {
        let mut state = self.state;
        state.with_mut(|s| s.handle_ended());
    }

    pub fn current_episode(&self) -> Option<Episode> {
        self.state.read().current_episode().cloned()
    }

    pub fn episode_count(&self) -> usize {
        self.state.read().episodes.len()
    }

    pub fn episodes(&self) -> Vec<Episode> {
        self.state.read().episodes.clone()
    }

    pub fn is_playing(&self) -> bool {
        self.state.read().is_playing
    }

    pub fn is_looping(&self) -> bool {
        self.state.read().is_looping
    }

    pub fn is_shuffling(&self) -> bool {
        self.state.read().is_shuffling
    }

    pub fn has_next(&self) -> bool {
        self.state.read().has_next()
    }

    pub fn has_previous(&self) -> bool {
        self.state.read().has_previous()
    }
}
