// src/slides/mod.rs
//! Level slides: ordered segments of a side-scrolling level, of which only a
//! small window around the player is kept active.

mod components;
mod error;
mod layout;
mod plugin;
mod registry;
mod systems;
mod window;

pub use plugin::{SlidesPlugin, SlidesSet};
pub use components::SlideTrigger;
