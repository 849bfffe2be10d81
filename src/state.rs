//! Shared player state: the episode model and the playlist/transport store
//! every component reads through the injected controller.

use chrono::{DateTime, Utc};
use rand::Rng;
use serde::{Deserialize, Serialize};

/// A single playable podcast entry.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Episode {
    pub id: String,
    pub title: String,
    pub members: String,
    pub thumbnail: String,
    #[serde(alias = "publishedAt")]
    pub published_at: DateTime<Utc>,
    /// Whole seconds.
    pub duration: u32,
    pub url: String,
}

/// The playlist plus transport flags. The current episode is positional:
/// `episodes[current_index]`, which is `None` whenever the list is empty or
/// the index points past the end. Default is the idle state.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct PlayerState {
    pub episodes: Vec<Episode>,
    pub current_index: usize,
    pub is_playing: bool,
    pub is_looping: bool,
    pub is_shuffling: bool,
}

impl PlayerState {
    pub fn current_episode(&self) -> Option<&Episode> {
        self.episodes.get(self.current_index)
    }

    /// Replace the playlist and start playing the episode at `index`. An
    /// empty list is ignored; there is nothing to select, so the state must
    /// not report playing.
    pub fn play_list(&mut self, episodes: Vec<Episode>, index: usize) {
        if episodes.is_empty() {
            return;
        }
        self.current_index = index.min(episodes.len() - 1);
        self.episodes = episodes;
        self.is_playing = true;
    }

    pub fn toggle_play(&mut self) {
        self.is_playing = !self.is_playing;
    }

    pub fn set_playing_state(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    pub fn toggle_looping(&mut self) {
        self.is_looping = !self.is_looping;
    }

    pub fn toggle_shuffle(&mut self) {
        self.is_shuffling = !self.is_shuffling;
    }

    /// Shuffle always has somewhere to jump; otherwise there must be an
    /// episode after the current one.
    pub fn has_next(&self) -> bool {
        self.is_shuffling || self.current_index + 1 < self.episodes.len()
    }

    pub fn has_previous(&self) -> bool {
        self.current_index > 0
    }

    /// Advance to the next episode. Skipping does not touch the play/pause
    /// flag; whatever was set keeps applying to the new episode.
    pub fn play_next(&mut self) {
        if self.episodes.is_empty() {
            return;
        }
        if self.is_shuffling {
            self.current_index = rand::thread_rng().gen_range(0..self.episodes.len());
        } else if self.current_index + 1 < self.episodes.len() {
            self.current_index += 1;
        }
    }

    pub fn play_previous(&mut self) {
        if self.current_index > 0 {
            self.current_index -= 1;
        }
    }

    /// Back to idle: playlist emptied, all transport flags reset.
    pub fn clear(&mut self) {
        *self = Self::default();
    }

    /// Terminal transition when playback reaches the natural end of the
    /// current episode: advance if possible, otherwise tear everything down.
    pub fn handle_ended(&mut self) {
        if self.has_next() {
            self.play_next();
        } else {
            self.clear();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn episode(id: &str, duration: u32) -> Episode {
        Episode {
            id: id.to_string(),
            title: format!("Episode {id}"),
            members: "Ana, Bruno".to_string(),
            thumbnail: format!("https://example.com/{id}.jpg"),
            published_at: Utc::now(),
            duration,
            url: format!("https://example.com/{id}.m4a"),
        }
    }

    fn playing_pair() -> PlayerState {
        let mut state = PlayerState::default();
        state.play_list(vec![episode("a", 125), episode("b", 40)], 0);
        state
    }

    #[test]
    fn idle_state_has_no_current_episode() {
        let state = PlayerState::default();
        assert!(state.current_episode().is_none());
        assert!(!state.has_next());
        assert!(!state.has_previous());
    }

    #[test]
    fn out_of_range_index_has_no_current_episode() {
        let mut state = playing_pair();
        state.current_index = 7;
        assert!(state.current_episode().is_none());
    }

    #[test]
    fn current_episode_is_positional() {
        let mut state = playing_pair();
        assert_eq!(state.current_episode().unwrap().id, "a");
        state.current_index = 1;
        assert_eq!(state.current_episode().unwrap().id, "b");
    }

    #[test]
    fn play_list_with_no_episodes_stays_idle() {
        let mut state = PlayerState::default();
        state.play_list(Vec::new(), 0);
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn play_list_clamps_index_to_last_episode() {
        let mut state = PlayerState::default();
        state.play_list(vec![episode("a", 10), episode("b", 10)], 9);
        assert_eq!(state.current_index, 1);
        assert!(state.is_playing);
    }

    #[test]
    fn toggle_play_flips_the_flag() {
        let mut state = playing_pair();
        assert!(state.is_playing);
        state.toggle_play();
        assert!(!state.is_playing);
        state.toggle_play();
        assert!(state.is_playing);
    }

    #[test]
    fn has_next_at_the_end_requires_shuffle() {
        let mut state = playing_pair();
        state.current_index = 1;
        assert!(!state.has_next());
        state.toggle_shuffle();
        assert!(state.has_next());
    }

    #[test]
    fn has_previous_only_past_the_first_episode() {
        let mut state = playing_pair();
        assert!(!state.has_previous());
        state.current_index = 1;
        assert!(state.has_previous());
    }

    #[test]
    fn play_next_advances_and_preserves_pause() {
        let mut state = playing_pair();
        state.set_playing_state(false);
        state.play_next();
        assert_eq!(state.current_index, 1);
        assert!(!state.is_playing);
    }

    #[test]
    fn play_next_at_the_end_keeps_the_index() {
        let mut state = playing_pair();
        state.current_index = 1;
        state.play_next();
        assert_eq!(state.current_index, 1);
    }

    #[test]
    fn play_next_while_shuffling_stays_in_bounds() {
        let mut state = playing_pair();
        state.episodes.push(episode("c", 60));
        state.toggle_shuffle();
        for _ in 0..32 {
            state.play_next();
            assert!(state.current_index < state.episodes.len());
        }
    }

    #[test]
    fn play_previous_stops_at_the_first_episode() {
        let mut state = playing_pair();
        state.current_index = 1;
        state.play_previous();
        assert_eq!(state.current_index, 0);
        state.play_previous();
        assert_eq!(state.current_index, 0);
    }

    #[test]
    fn ended_with_a_next_episode_advances_without_clearing() {
        let mut state = playing_pair();
        state.handle_ended();
        assert_eq!(state.current_index, 1);
        assert_eq!(state.episodes.len(), 2);
        assert!(state.is_playing);
    }

    #[test]
    fn ended_on_the_last_episode_clears_to_idle() {
        let mut state = playing_pair();
        state.current_index = 1;
        state.toggle_looping();
        state.handle_ended();
        assert_eq!(state, PlayerState::default());
    }

    #[test]
    fn clear_resets_every_flag() {
        let mut state = playing_pair();
        state.toggle_looping();
        state.toggle_shuffle();
        state.clear();
        assert!(state.episodes.is_empty());
        assert_eq!(state.current_index, 0);
        assert!(!state.is_playing);
        assert!(!state.is_looping);
        assert!(!state.is_shuffling);
    }
}
