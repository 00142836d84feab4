use bevy::prelude::*;

mod setup;
mod input;
mod actions;
mod slides;

use actions::ActionState;
use input::{camera_follow, input_mapping_system, move_avatar};
use slides::{SlidesPlugin, SlidesSet};

fn main() {
    App::new()
        // core engine plugins
        .add_plugins(DefaultPlugins)
        // loads the layout, spawns slides, runs the activation window
        .add_plugins(SlidesPlugin)
        .init_resource::<ActionState>()
        // camera + demo avatar
        .add_systems(Startup, setup::setup)
        // move first so triggers see this frame's position
        .add_systems(
            Update,
            (input_mapping_system, move_avatar, camera_follow)
                .chain()
                .before(SlidesSet::Detect),
        )
        .run();
}
