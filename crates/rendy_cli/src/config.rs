//! JSON scene and render settings.
//!
//! Every field is optional; anything left out falls back to the defaults of
//! a 1920-wide 16:9 frame looking at a small sphere resting on a large
//! ground sphere.

use std::fs;
use std::path::Path;

use rendy_renderer::{RenderParams, Sphere, SurfaceList, Vec3, DEFAULT_BUCKET_SIZE};
use serde::Deserialize;
use thiserror::Error;

/// Errors that can occur while loading a scene file.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene file: {0}")]
    Json(#[from] serde_json::Error),

    #[error("max_depth {0} exceeds the supported maximum of {max}", max = MAX_SCENE_DEPTH)]
    DepthTooLarge(u32),
}

/// Deepest bounce budget a scene file may ask for.
///
/// Every bounce is a stack frame of the shading recursion, and an eye
/// enclosed by a surface never escapes early, so rayon workers must be able
/// to hold the full depth.
pub const MAX_SCENE_DEPTH: u32 = 1000;

/// Render settings as written in the scene file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct RenderSettings {
    pub image_width: u32,
    pub aspect_ratio: f32,
    pub focal_length: f32,
    pub viewport_height: f32,
    pub camera_center: [f32; 3],
    pub alias_samples: u32,
    pub max_depth: u32,
}

impl Default for RenderSettings {
    fn default() -> Self {
        let params = RenderParams::default();
        Self {
            image_width: params.image_width,
            aspect_ratio: params.aspect_ratio,
            focal_length: params.focal_length,
            viewport_height: params.viewport_height,
            camera_center: params.camera_center.to_array(),
            alias_samples: params.alias_samples,
            max_depth: params.max_depth,
        }
    }
}

impl From<&RenderSettings> for RenderParams {
    fn from(settings: &RenderSettings) -> Self {
        RenderParams {
            image_width: settings.image_width,
            aspect_ratio: settings.aspect_ratio,
            focal_length: settings.focal_length,
            viewport_height: settings.viewport_height,
            camera_center: Vec3::from_array(settings.camera_center),
            alias_samples: settings.alias_samples,
            max_depth: settings.max_depth,
        }
    }
}

/// A sphere entry in the scene file.
#[derive(Deserialize, Debug, Clone, Copy, PartialEq)]
#[serde(deny_unknown_fields)]
pub struct SphereSettings {
    pub center: [f32; 3],
    pub radius: f32,
}

/// Top-level scene file.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(default, deny_unknown_fields)]
pub struct SceneConfig {
    pub render: RenderSettings,
    /// Seed for every random stream of the render
    pub seed: u64,
    /// Worker threads; rayon picks when unset
    pub threads: Option<usize>,
    pub bucket_size: u32,
    pub spheres: Vec<SphereSettings>,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            render: RenderSettings::default(),
            seed: 0,
            threads: None,
            bucket_size: DEFAULT_BUCKET_SIZE,
            spheres: vec![
                SphereSettings {
                    center: [0.0, 0.0, -1.0],
                    radius: 0.5,
                },
                SphereSettings {
                    center: [0.0, -100.5, -1.0],
                    radius: 100.0,
                },
            ],
        }
    }
}

impl SceneConfig {
    pub fn render_params(&self) -> RenderParams {
        RenderParams::from(&self.render)
    }

    /// Build the surface list described by `spheres`.
    pub fn build_world(&self) -> SurfaceList {
        let mut world = SurfaceList::new();
        for sphere in &self.spheres {
            world.add(Box::new(Sphere::new(
                Vec3::from_array(sphere.center),
                sphere.radius,
            )));
        }
        world
    }
}

/// Parse a scene from JSON text.
pub fn parse_config(text: &str) -> Result<SceneConfig, ConfigError> {
    let config: SceneConfig = serde_json::from_str(text)?;
    if config.render.max_depth > MAX_SCENE_DEPTH {
        return Err(ConfigError::DepthTooLarge(config.render.max_depth));
    }
    Ok(config)
}

/// Load a scene file from disk.
pub fn load_config(path: impl AsRef<Path>) -> Result<SceneConfig, ConfigError> {
    let path = path.as_ref();
    let text = fs::read_to_string(path)?;
    let config = parse_config(&text)?;
    log::info!("Loaded {} with {} spheres", path.display(), config.spheres.len());
    Ok(config)
}
