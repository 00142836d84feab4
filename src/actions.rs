use bevy::prelude::*;
use std::collections::HashMap;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerAction {
    MoveLeft,
    MoveRight,
}

#[derive(Default, Resource)]
pub struct ActionState {
    pressed: HashMap<PlayerAction, bool>,
}

impl ActionState {
    pub fn set(&mut self, action: PlayerAction, is_pressed: bool) {
        self.pressed.insert(action, is_pressed);
    }

    pub fn pressed(&self, action: PlayerAction) -> bool {
        *self.pressed.get(&action).unwrap_or(&false)
    }

    /// -1, 0 or +1 along X.
    pub fn axis(&self) -> f32 {
        let mut x = 0.0;
        if self.pressed(PlayerAction::MoveLeft) { x -= 1.0; }
        if self.pressed(PlayerAction::MoveRight) { x += 1.0; }
        x
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn opposite_keys_cancel() {
        let mut state = ActionState::default();
        assert_eq!(state.axis(), 0.0);

        state.set(PlayerAction::MoveRight, true);
        assert_eq!(state.axis(), 1.0);

        state.set(PlayerAction::MoveLeft, true);
        assert_eq!(state.axis(), 0.0);
    }
}
