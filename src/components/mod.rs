//! The components module contains all shared components for our app.

mod app;
mod audio;
mod episode_list;
mod player;
mod player_controller;

pub use app::*;
pub use audio::*;
pub use episode_list::*;
pub use player::*;
pub use player_controller::*;
