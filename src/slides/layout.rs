// src/slides/layout.rs
//! Data-driven slide layouts (`*.slides.ron`) + loader.

use bevy::asset::{io::Reader, AssetLoader, LoadContext};
use bevy::prelude::*;
use serde::{Deserialize, Serialize};

pub struct SlideLayoutAssetPlugin;

impl Plugin for SlideLayoutAssetPlugin {
    fn build(&self, app: &mut App) {
        app.init_asset::<SlideLayout>()
            .register_asset_loader(SlideLayoutLoader);
    }
}

/// One authored slide: world-space trigger box and a tint for its backdrop.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct SlideDef {
    pub center: Vec2,
    pub size: Vec2,
    #[serde(default = "default_color")]
    pub color: [f32; 3],
}

fn default_color() -> [f32; 3] {
    [0.35, 0.35, 0.4]
}

/// Ordered slides of one level; vector order is the slide index.
#[derive(Asset, TypePath, Clone, Debug, Serialize, Deserialize)]
pub struct SlideLayout {
    pub slides: Vec<SlideDef>,
}

impl SlideLayout {
    pub fn from_ron(bytes: &[u8]) -> Result<Self, SlideLayoutLoadError> {
        ron::de::from_bytes(bytes).map_err(|e| SlideLayoutLoadError::Ron(e.to_string()))
    }
}

#[derive(Default)]
pub struct SlideLayoutLoader;

impl AssetLoader for SlideLayoutLoader {
    type Asset = SlideLayout;
    type Settings = ();
    type Error = SlideLayoutLoadError;

    fn extensions(&self) -> &[&str] {
        &["slides.ron"]
    }

    async fn load(
        &self,
        reader: &mut dyn Reader,
        _settings: &Self::Settings,
        _load_context: &mut LoadContext<'_>,
    ) -> Result<Self::Asset, Self::Error> {
        let mut bytes = Vec::new();
        reader.read_to_end(&mut bytes).await?;
        SlideLayout::from_ron(&bytes)
    }
}

#[derive(thiserror::Error, Debug)]
pub enum SlideLayoutLoadError {
    #[error("I/O while reading slide layout: {0}")]
    Io(#[from] std::io::Error),
    #[error("RON parse error: {0}")]
    Ron(String),
}
