//! JSON scene descriptions.
//!
//! A description names its materials once and lets spheres refer to them:
//!
//! ```json
//! {
//!   "materials": {
//!     "red": { "refractive_index": 1.0, "albedo": [1, 0, 0, 0],
//!              "diffuse_color": [1, 0, 0], "specular_exponent": 0 }
//!   },
//!   "spheres": [ { "center": [0, 0, -5], "radius": 1, "material": "red" } ],
//!   "lights":  [ { "position": [0, 0, 0], "intensity": 1 } ],
//!   "floor": false
//! }
//! ```
//!
//! `floor` defaults to `true` (the standard checkerboard tile).

use std::collections::BTreeMap;
use std::path::Path;

use lucid_math::{Vec3, Vec4};
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::material::Material;
use crate::scene::{Checkerboard, Light, Scene, Sphere};

/// Errors that can occur while loading a scene description.
#[derive(Error, Debug)]
pub enum SceneError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Invalid scene JSON: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Sphere {index} references unknown material '{name}'")]
    UnknownMaterial { index: usize, name: String },

    #[error("Invalid {what}: {reason}")]
    Invalid { what: String, reason: String },
}

pub type SceneResult<T> = Result<T, SceneError>;

/// Material entry of a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MaterialDesc {
    #[serde(default = "default_refractive_index")]
    pub refractive_index: f32,
    pub albedo: [f32; 4],
    pub diffuse_color: [f32; 3],
    #[serde(default)]
    pub specular_exponent: f32,
}

/// Sphere entry of a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SphereDesc {
    pub center: [f32; 3],
    pub radius: f32,
    pub material: String,
}

/// Light entry of a scene description.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LightDesc {
    pub position: [f32; 3],
    pub intensity: f32,
}

/// Top-level scene description document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SceneDescription {
    #[serde(default)]
    pub materials: BTreeMap<String, MaterialDesc>,
    #[serde(default)]
    pub spheres: Vec<SphereDesc>,
    #[serde(default)]
    pub lights: Vec<LightDesc>,
    #[serde(default = "default_floor")]
    pub floor: bool,
}

fn default_refractive_index() -> f32 {
    1.0
}

fn default_floor() -> bool {
    true
}

fn invalid(what: impl Into<String>, reason: impl Into<String>) -> SceneError {
    SceneError::Invalid {
        what: what.into(),
        reason: reason.into(),
    }
}

fn finite(what: &str, values: &[f32]) -> SceneResult<()> {
    if values.iter().all(|v| v.is_finite()) {
        Ok(())
    } else {
        Err(invalid(what, "contains a non-finite number"))
    }
}

impl MaterialDesc {
    fn to_material(&self, name: &str) -> SceneResult<Material> {
        let what = format!("material '{}'", name);
        finite(&what, &self.albedo)?;
        finite(&what, &self.diffuse_color)?;
        finite(&what, &[self.refractive_index, self.specular_exponent])?;

        if self.refractive_index <= 0.0 {
            return Err(invalid(what, "refractive_index must be > 0"));
        }
        if self.specular_exponent < 0.0 {
            return Err(invalid(what, "specular_exponent must be >= 0"));
        }

        Ok(Material::new(
            self.refractive_index,
            Vec4::from_array(self.albedo),
            Vec3::from_array(self.diffuse_color),
            self.specular_exponent,
        ))
    }
}

impl SceneDescription {
    /// Validate the description and build a scene from it.
    pub fn into_scene(self) -> SceneResult<Scene> {
        let mut materials = BTreeMap::new();
        for (name, desc) in &self.materials {
            materials.insert(name.as_str(), desc.to_material(name)?);
        }

        let mut scene = Scene::new().with_floor(self.floor.then(Checkerboard::standard));

        for (index, desc) in self.spheres.iter().enumerate() {
            let what = format!("sphere {}", index);
            finite(&what, &desc.center)?;
            finite(&what, &[desc.radius])?;
            if desc.radius <= 0.0 {
                return Err(invalid(what, "radius must be > 0"));
            }

            let material = materials
                .get(desc.material.as_str())
                .copied()
                .ok_or_else(|| SceneError::UnknownMaterial {
                    index,
                    name: desc.material.clone(),
                })?;

            scene.add_sphere(Sphere::new(Vec3::from_array(desc.center), desc.radius, material));
        }

        for (index, desc) in self.lights.iter().enumerate() {
            let what = format!("light {}", index);
            finite(&what, &desc.position)?;
            finite(&what, &[desc.intensity])?;
            if desc.intensity <= 0.0 {
                return Err(invalid(what, "intensity must be > 0"));
            }
            scene.add_light(Light::new(Vec3::from_array(desc.position), desc.intensity));
        }

        if scene.light_count() == 0 {
            log::warn!("Scene has no lights; only reflections of the background will show");
        }

        let unused = self
            .materials
            .keys()
            .filter(|name| !self.spheres.iter().any(|s| &s.material == *name))
            .count();
        if unused > 0 {
            log::warn!("{} material(s) are defined but never used", unused);
        }

        Ok(scene)
    }
}

/// Parse a scene description from a JSON string.
pub fn load_scene_from_str(text: &str) -> SceneResult<Scene> {
    let description: SceneDescription = serde_json::from_str(text)?;
    description.into_scene()
}

/// Load a scene description from a JSON file.
pub fn load_scene<P: AsRef<Path>>(path: P) -> SceneResult<Scene> {
    let path = path.as_ref();
    log::info!("Loading scene from: {:?}", path);

    let text = std::fs::read_to_string(path)?;
    let scene = load_scene_from_str(&text)?;

    log::info!(
        "Loaded {} spheres, {} lights (floor: {})",
        scene.sphere_count(),
        scene.light_count(),
        scene.floor.is_some()
    );
    Ok(scene)
}
