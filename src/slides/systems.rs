// src/slides/systems.rs

use bevy::prelude::*;

use super::components::{Slide, SlideContacts, SlideEntered, SlideRegion, SlideTrigger};
use super::layout::SlideLayout;
use super::plugin::{SlideLayoutHandle, SlidesSettings};
use super::registry::{SlideRegistry, BOOTSTRAP_WINDOW};

/// Startup: request the level layout and stash its handle.
pub fn load_slide_layout(
    mut handle_res: ResMut<SlideLayoutHandle>,
    settings: Res<SlidesSettings>,
    assets: Res<AssetServer>,
) {
    if handle_res.0.is_strong() { return; }
    handle_res.0 = assets.load(settings.layout_path.as_str());
    info!("Slides: loading layout from '{}'", settings.layout_path);
}

/// Update: once the layout asset is in, spawn one entity per slide and
/// hand them to the registry in authoring order.
pub fn spawn_slides_when_ready(
    mut commands: Commands,
    handle_res: Res<SlideLayoutHandle>,
    layouts: Res<Assets<SlideLayout>>,
    mut registry: ResMut<SlideRegistry>,
    mut done: Local<bool>,
) {
    if *done { return; }
    let Some(layout) = layouts.get(&handle_res.0) else { return; };
    *done = true;

    let entities: Vec<Entity> = layout
        .slides
        .iter()
        .enumerate()
        .map(|(index, def)| {
            let [r, g, b] = def.color;
            let visibility = if index < BOOTSTRAP_WINDOW {
                Visibility::Visible
            } else {
                Visibility::Hidden
            };
            commands
                .spawn((
                    Sprite::from_color(Color::srgb(r, g, b), def.size),
                    // behind the avatar
                    Transform::from_xyz(def.center.x, def.center.y, -1.0),
                    visibility,
                    Slide { index },
                    SlideRegion::from_size(def.size),
                ))
                .id()
        })
        .collect();

    match registry.initialize(entities.iter().copied()) {
        Ok(()) => info!("Slides: {} slides ready, window at slide 0", registry.len()),
        Err(err) => {
            error!("Slides: layout rejected: {err}");
            for e in entities {
                commands.entity(e).despawn();
            }
        }
    }
}

/// Collision stand-in: AABB test of every trigger against every *active*
/// slide, emitting `SlideEntered` only on the frame the overlap starts.
/// Inactive slides have no live trigger.
pub fn detect_slide_entries(
    registry: Res<SlideRegistry>,
    slides: Query<(&Slide, &SlideRegion, &Transform)>,
    mut triggers: Query<(&SlideTrigger, &Transform, &mut SlideContacts)>,
    mut entered: EventWriter<SlideEntered>,
) {
    if registry.is_empty() { return; }

    for (trigger, trigger_tf, mut contacts) in &mut triggers {
        let at = trigger_tf.translation.truncate();

        let mut touching: Vec<usize> = slides
            .iter()
            .filter(|(slide, _, _)| matches!(registry.is_active(slide.index), Ok(true)))
            .filter(|(_, region, tf)| {
                region.overlaps(tf.translation.truncate(), at, trigger.half_extents)
            })
            .map(|(slide, _, _)| slide.index)
            .collect();
        touching.sort_unstable();

        for &index in &touching {
            if !contacts.0.contains(&index) {
                entered.write(SlideEntered(index));
            }
        }
        if contacts.0 != touching {
            contacts.0 = touching;
        }
    }
}

/// Feed entry events into the registry (and from there the window).
pub fn forward_slide_entries(
    mut events: EventReader<SlideEntered>,
    mut registry: ResMut<SlideRegistry>,
) {
    for ev in events.read() {
        match registry.notify_player_entered(ev.0) {
            Ok(()) => debug!(
                "Slides: entered {} ({:?}), active {:?}",
                ev.0,
                registry.entity(ev.0),
                registry.active_indices()
            ),
            Err(e) => error!("Slides: dropped entry notification: {e}"),
        }
    }
}

/// Push logical activation onto the slide entities.
pub fn apply_slide_visibility(
    registry: Res<SlideRegistry>,
    mut vis_q: Query<&mut Visibility, With<Slide>>,
) {
    for state in registry.iter() {
        let Ok(mut vis) = vis_q.get_mut(state.entity) else { continue; };
        if state.active {
            vis.set_if_neq(Visibility::Visible);
        } else {
            vis.set_if_neq(Visibility::Hidden);
        }
    }
}

/// Wire boxes over every slide region; blue when the slide is live.
pub fn draw_slide_regions(
    mut gizmos: Gizmos,
    registry: Res<SlideRegistry>,
    slides: Query<(&Slide, &SlideRegion, &Transform)>,
) {
    for (slide, region, tf) in &slides {
        let color = if matches!(registry.is_active(slide.index), Ok(true)) {
            Color::srgb(0.0, 0.0, 1.0)
        } else {
            Color::srgb(0.4, 0.4, 0.4)
        };
        gizmos.rect_2d(
            Isometry2d::from_translation(tf.translation.truncate()),
            region.half_extents * 2.0,
            color,
        );
    }
}
