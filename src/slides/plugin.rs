//! Slides plugin wiring (glue).
//! - Layout asset/loader + settings
//! - Registry with the sliding window as its observer
//! - Trigger detection -> registry -> visibility, in that order

use bevy::prelude::*;

use super::components::SlideEntered;
use super::layout::{SlideLayout, SlideLayoutAssetPlugin};
use super::registry::SlideRegistry;
use super::systems::{
    apply_slide_visibility, detect_slide_entries, draw_slide_regions, forward_slide_entries,
    load_slide_layout, spawn_slides_when_ready,
};
use super::window::SlideWindow;

/// Where the level layout lives and whether to outline slide regions.
/// Insert before adding `SlidesPlugin` to override.
#[derive(Resource, Clone)]
pub struct SlidesSettings {
    pub layout_path: String,
    pub draw_regions: bool,
}
impl Default for SlidesSettings {
    fn default() -> Self {
        Self {
            layout_path: "levels/demo.slides.ron".to_string(),
            draw_regions: true,
        }
    }
}

/// Handle to the loaded SlideLayout asset.
#[derive(Resource, Default)]
pub struct SlideLayoutHandle(pub Handle<SlideLayout>);

#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum SlidesSet {
    Spawn,
    Detect,
    Apply,
}

pub struct SlidesPlugin;

impl Plugin for SlidesPlugin {
    fn build(&self, app: &mut App) {
        app.add_plugins(SlideLayoutAssetPlugin)
            .init_resource::<SlidesSettings>()
            .init_resource::<SlideLayoutHandle>()
            .insert_resource(SlideRegistry::with_observer(SlideWindow::new()))
            .add_event::<SlideEntered>()
            .configure_sets(
                Update,
                (SlidesSet::Spawn, SlidesSet::Detect, SlidesSet::Apply).chain(),
            )
            .add_systems(Startup, load_slide_layout)
            .add_systems(Update, spawn_slides_when_ready.in_set(SlidesSet::Spawn))
            .add_systems(
                Update,
                (detect_slide_entries, forward_slide_entries)
                    .chain()
                    .in_set(SlidesSet::Detect),
            )
            .add_systems(
                Update,
                apply_slide_visibility
                    .run_if(resource_changed::<SlideRegistry>)
                    .in_set(SlidesSet::Apply),
            )
            .add_systems(
                Update,
                draw_slide_regions
                    .run_if(|settings: Res<SlidesSettings>| settings.draw_regions),
            );
    }
}
