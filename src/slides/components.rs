// src/slides/components.rs
use bevy::prelude::*;

/// Marker + sequence position for a slide entity.
#[derive(Component, Copy, Clone, Debug, PartialEq, Eq)]
pub struct Slide {
    pub index: usize,
}

/// Trigger area of a slide, centred on the entity's translation (world XY).
#[derive(Component, Copy, Clone, Debug)]
pub struct SlideRegion {
    pub half_extents: Vec2,
}

impl SlideRegion {
    pub fn from_size(size: Vec2) -> Self {
        Self { half_extents: size * 0.5 }
    }

    /// Closed AABB overlap against another box centred at `other_center`.
    pub fn overlaps(&self, center: Vec2, other_center: Vec2, other_half: Vec2) -> bool {
        let d = (center - other_center).abs();
        d.x <= self.half_extents.x + other_half.x && d.y <= self.half_extents.y + other_half.y
    }
}

/// Anything that trips slide triggers (the player avatar).
#[derive(Component, Copy, Clone, Debug)]
#[require(SlideContacts)]
pub struct SlideTrigger {
    pub half_extents: Vec2,
}

/// Active slides the trigger overlapped on the previous frame.
#[derive(Component, Default, Clone, Debug)]
pub struct SlideContacts(pub Vec<usize>);

/// Fired once when a trigger starts overlapping an active slide.
#[derive(Event, Copy, Clone, Debug, PartialEq, Eq)]
pub struct SlideEntered(pub usize);
