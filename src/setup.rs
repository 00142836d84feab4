use bevy::prelude::*;

use crate::slides::SlideTrigger;

#[derive(Component)]
pub struct MainCamera;

/// Demo stand-in for the player character: a box that trips slide triggers.
#[derive(Component)]
pub struct Avatar;

pub const AVATAR_SIZE: Vec2 = Vec2::new(32.0, 48.0);

pub fn setup(mut commands: Commands) {
    // 1) Camera
    commands.spawn((Camera2d, MainCamera));

    // 2) Avatar, standing in slide 0
    commands.spawn((
        Sprite::from_color(Color::srgb_u8(124, 144, 255), AVATAR_SIZE),
        Transform::from_xyz(0.0, 0.0, 1.0),
        Avatar,
        SlideTrigger { half_extents: AVATAR_SIZE * 0.5 },
    ));
}
