use serde::Serialize;

use crate::math::Color;
use crate::motion::{Horizontal, Vertical};
use crate::types::{Geometry, Light, Renderable};

/// Scene graph root: the renderables, the single light and the backdrop
#[derive(Debug, Clone, PartialEq)]
pub struct Scene {
    pub name: String,
    pub objects: Vec<Renderable>,
    pub light: Light,
    /// Uniform light added to every `Standard` surface, in [0, 1]
    pub ambient: f32,
    pub background: Color,
}

impl Scene {
    pub fn new(name: impl Into<String>, light: Light) -> Self {
        Self {
            name: name.into(),
            objects: Vec::new(),
            light,
            ambient: 0.0,
            background: Color::BLACK,
        }
    }

    pub fn with_ambient(mut self, ambient: f32) -> Self {
        self.ambient = ambient;
        self
    }

    pub fn with_background(mut self, background: Color) -> Self {
        self.background = background;
        self
    }

    pub fn add(&mut self, object: Renderable) {
        self.objects.push(object);
    }

    pub fn with_object(mut self, object: Renderable) -> Self {
        self.add(object);
        self
    }

    pub fn object(&self, name: &str) -> Option<&Renderable> {
        self.objects.iter().find(|o| o.name == name)
    }

    pub fn snapshot(&self) -> SceneSnapshot {
        SceneSnapshot {
            name: self.name.clone(),
            light: self.light,
            objects: self.objects.iter().map(ObjectSnapshot::from).collect(),
        }
    }
}

/// Serializable view of scene state at a point in time
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SceneSnapshot {
    pub name: String,
    pub light: Light,
    pub objects: Vec<ObjectSnapshot>,
}

#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ObjectSnapshot {
    pub name: String,
    pub geometry: Geometry,
    pub position: [f32; 3],
    pub rotation: [f32; 3],
    pub color: Color,
    pub textured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub vertical: Option<Vertical>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub horizontal: Option<Horizontal>,
}

impl From<&Renderable> for ObjectSnapshot {
    fn from(object: &Renderable) -> Self {
        Self {
            name: object.name.clone(),
            geometry: object.geometry,
            position: object.transform.position.to_array(),
            rotation: object.transform.rotation.to_array(),
            color: object.material.color,
            textured: object.material.map.is_some(),
            vertical: object.kinematics.vertical.map(|b| b.heading),
            horizontal: object.kinematics.horizontal.map(|b| b.heading),
        }
    }
}
