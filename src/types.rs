use std::sync::Arc;

use glam::{EulerRot, Mat4, Vec3};
use serde::Serialize;

use crate::math::Color;
use crate::motion::Kinematics;
use crate::texture::Texture;

/// Position and Euler rotation (radians, XYZ order)
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct Transform {
    pub position: Vec3,
    pub rotation: Vec3,
}

impl Transform {
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            rotation: Vec3::ZERO,
        }
    }

    /// Object-to-world matrix: translation after rotation
    pub fn matrix(&self) -> Mat4 {
        Mat4::from_translation(self.position)
            * Mat4::from_euler(EulerRot::XYZ, self.rotation.x, self.rotation.y, self.rotation.z)
    }
}

/// Shape descriptor, centered on the object origin
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Geometry {
    /// Segment counts describe tessellation for mesh backends; the ray caster
    /// intersects the analytic sphere
    Sphere {
        radius: f32,
        width_segments: u32,
        height_segments: u32,
    },
    Box {
        width: f32,
        height: f32,
        depth: f32,
    },
}

impl Geometry {
    pub fn sphere(radius: f32, width_segments: u32, height_segments: u32) -> Self {
        Geometry::Sphere {
            radius,
            width_segments,
            height_segments,
        }
    }

    pub fn cube(size: f32) -> Self {
        Geometry::Box {
            width: size,
            height: size,
            depth: size,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Shading {
    /// Unlit: the surface shows its color or texture as-is
    Basic,
    /// Diffuse response to the scene light plus ambient
    Standard,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Material {
    pub shading: Shading,
    pub color: Color,
    /// Texture map; `None` when absent or when loading failed
    pub map: Option<Arc<Texture>>,
}

impl Material {
    pub fn basic(color: Color) -> Self {
        Self {
            shading: Shading::Basic,
            color,
            map: None,
        }
    }

    pub fn standard(color: Color) -> Self {
        Self {
            shading: Shading::Standard,
            color,
            map: None,
        }
    }

    pub fn with_map(mut self, map: Option<Arc<Texture>>) -> Self {
        self.map = map;
        self
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum LightKind {
    /// Emits from `position` in all directions
    Point,
    /// Parallel rays travelling from `position` toward the origin
    Directional,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Light {
    pub kind: LightKind,
    pub color: Color,
    pub intensity: f32,
    pub position: [f32; 3],
}

impl Light {
    pub fn point(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Point,
            color,
            intensity,
            position: position.to_array(),
        }
    }

    pub fn directional(color: Color, intensity: f32, position: Vec3) -> Self {
        Self {
            kind: LightKind::Directional,
            color,
            intensity,
            position: position.to_array(),
        }
    }

    /// Unit vector from a surface point toward the light
    pub fn direction_from(&self, point: Vec3) -> Vec3 {
        let position = Vec3::from_array(self.position);
        match self.kind {
            LightKind::Point => (position - point).normalize_or_zero(),
            LightKind::Directional => position.normalize_or_zero(),
        }
    }
}

/// Drawable object: geometry + material + transform, plus its motion rules
#[derive(Debug, Clone, PartialEq)]
pub struct Renderable {
    pub name: String,
    pub geometry: Geometry,
    pub material: Material,
    pub transform: Transform,
    pub kinematics: Kinematics,
}

impl Renderable {
    pub fn new(name: impl Into<String>, geometry: Geometry, material: Material) -> Self {
        Self {
            name: name.into(),
            geometry,
            material,
            transform: Transform::default(),
            kinematics: Kinematics::stationary(),
        }
    }

    pub fn at(mut self, position: Vec3) -> Self {
        self.transform.position = position;
        self
    }

    pub fn with_kinematics(mut self, kinematics: Kinematics) -> Self {
        self.kinematics = kinematics;
        self
    }
}
