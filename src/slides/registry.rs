// src/slides/registry.rs
//! Ordered slide table + activation state.

use bevy::prelude::*;

use super::error::SlideError;
use super::window::{SlideObserver, SlideSwitch};

/// Slides switched on by `initialize`, before the player enters anything.
pub const BOOTSTRAP_WINDOW: usize = 3;

/// Logical state of one slide. The entity's `Visibility` follows `active`.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct SlideState {
    pub index: usize,
    pub active: bool,
    pub entity: Entity,
}

/// Flat table of slide states; index in the vector == `SlideState.index`.
#[derive(Default, Debug)]
pub struct SlideTable {
    states: Vec<SlideState>,
}

impl SlideSwitch for SlideTable {
    fn len(&self) -> usize {
        self.states.len()
    }

    fn set_active(&mut self, index: usize, active: bool) -> Result<(), SlideError> {
        let len = self.states.len();
        let state = self
            .states
            .get_mut(index)
            .ok_or(SlideError::IndexOutOfRange { index, len })?;
        state.active = active;
        Ok(())
    }
}

/// Owns the slides of the current level and forwards entry notifications
/// to the registered observer (normally a `SlideWindow`).
#[derive(Resource, Default)]
pub struct SlideRegistry {
    table: SlideTable,
    observer: Option<Box<dyn SlideObserver>>,
}

impl SlideRegistry {
    pub fn with_observer(observer: impl SlideObserver) -> Self {
        Self { table: SlideTable::default(), observer: Some(Box::new(observer)) }
    }

    /// Swap the observer; the new one starts from whatever slides are live now.
    pub fn set_observer(&mut self, observer: impl SlideObserver) {
        self.observer = Some(Box::new(observer));
    }

    /// Take ownership of the level's slides, in sequence order.
    /// Everything starts inactive except the bootstrap window.
    pub fn initialize(
        &mut self,
        slides: impl IntoIterator<Item = Entity>,
    ) -> Result<(), SlideError> {
        let states: Vec<SlideState> = slides
            .into_iter()
            .enumerate()
            .map(|(index, entity)| SlideState { index, active: false, entity })
            .collect();

        if states.len() < BOOTSTRAP_WINDOW {
            return Err(SlideError::Configuration {
                found: states.len(),
                required: BOOTSTRAP_WINDOW,
            });
        }

        self.table.states = states;
        for index in 0..BOOTSTRAP_WINDOW {
            self.table.set_active(index, true)?;
        }
        if let Some(observer) = self.observer.as_mut() {
            observer.reset();
        }
        Ok(())
    }

    pub fn set_active(&mut self, index: usize, active: bool) -> Result<(), SlideError> {
        self.table.set_active(index, active)
    }

    /// Entry point for the trigger layer.
    pub fn notify_player_entered(&mut self, index: usize) -> Result<(), SlideError> {
        self.check(index)?;
        let Some(observer) = self.observer.as_mut() else { return Ok(()); };
        observer.player_entered(index, &mut self.table)
    }

    pub fn len(&self) -> usize {
        self.table.states.len()
    }

    pub fn is_empty(&self) -> bool {
        self.table.states.is_empty()
    }

    pub fn is_active(&self, index: usize) -> Result<bool, SlideError> {
        self.get(index).map(|s| s.active)
    }

    pub fn entity(&self, index: usize) -> Result<Entity, SlideError> {
        self.get(index).map(|s| s.entity)
    }

    pub fn active_indices(&self) -> Vec<usize> {
        self.iter().filter(|s| s.active).map(|s| s.index).collect()
    }

    pub fn iter(&self) -> impl Iterator<Item = &SlideState> {
        self.table.states.iter()
    }

    fn get(&self, index: usize) -> Result<&SlideState, SlideError> {
        self.check(index)?;
        Ok(&self.table.states[index])
    }

    fn check(&self, index: usize) -> Result<(), SlideError> {
        let len = self.len();
        if index >= len {
            return Err(SlideError::IndexOutOfRange { index, len });
        }
        Ok(())
    }
}
