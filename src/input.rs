use bevy::prelude::*;
use bevy::input::{keyboard::KeyCode, ButtonInput};

use crate::actions::{PlayerAction, ActionState};
use crate::setup::{Avatar, MainCamera};

pub const MOVE_SPEED: f32 = 400.0;
pub const MAX_MOVE_DT: f32 = 0.05; // never use a dt larger than 50ms

pub fn input_mapping_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut action_state: ResMut<ActionState>,
) {
    action_state.set(
        PlayerAction::MoveLeft,
        keys.any_pressed([KeyCode::KeyA, KeyCode::ArrowLeft]),
    );
    action_state.set(
        PlayerAction::MoveRight,
        keys.any_pressed([KeyCode::KeyD, KeyCode::ArrowRight]),
    );
}

/// Kinematic walk along X; no physics, no jumping.
pub fn move_avatar(
    time: Res<Time>,
    action_state: Res<ActionState>,
    mut query: Query<&mut Transform, With<Avatar>>,
) {
    let dt = time.delta_secs().min(MAX_MOVE_DT);
    let dir = action_state.axis();
    if dir == 0.0 { return; }

    for mut tf in &mut query {
        tf.translation.x += dir * MOVE_SPEED * dt;
    }
}

pub fn camera_follow(
    avatar_q: Query<&Transform, (With<Avatar>, Without<MainCamera>)>,
    mut cam_q: Query<&mut Transform, With<MainCamera>>,
) {
    let Ok(avatar) = avatar_q.single() else { return; };
    let Ok(mut cam) = cam_q.single_mut() else { return; };
    cam.translation.x = avatar.translation.x;
}
