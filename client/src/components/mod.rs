//! Reusable UI components.

pub mod route_guard;
pub mod video_player;
