use nalgebra::Vector3;

use crate::colour::Colour;
use crate::helpers::VectorExt;
use crate::lights::{incidence, LightTrait};
use crate::objects::sphere::Sphere;
use crate::renderer::Settings;
use crate::surface_interaction::Intersection;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GlobalFalloff {
    Linear,
}

impl GlobalFalloff {
    pub fn code(&self) -> i32 {
        match self {
            GlobalFalloff::Linear => 0,
        }
    }
}

/// Directional light reaching every point from the same direction, never
/// shadowed.
#[derive(Debug, Clone, PartialEq)]
pub struct GlobalLight {
    /// Compared against surface normals: a normal parallel to this vector
    /// receives the full strength.
    pub vector: Vector3<f64>,
    pub colour: Colour,
    /// 0-1
    pub strength: f64,
    /// Greatest angle, in radians, at which a surface still receives light.
    pub max_angle: f64,
    pub falloff: GlobalFalloff,
}

impl GlobalLight {
    pub fn new(vector: Vector3<f64>, colour: Colour, strength: f64, max_angle: f64) -> Self {
        debug_assert!(max_angle > 0.0, "max angle must be positive");

        GlobalLight {
            vector,
            colour,
            strength,
            max_angle,
            falloff: GlobalFalloff::Linear,
        }
    }

    pub fn relative_strength(&self, angle: f64) -> Colour {
        match self.falloff {
            GlobalFalloff::Linear => self
                .colour
                .scale_rgb(incidence(angle, self.max_angle) * self.strength),
        }
    }
}

impl LightTrait for GlobalLight {
    fn contribution(&self, intersection: &Intersection, _: &[Sphere], _: &Settings) -> Colour {
        let angle_to_light = intersection.normal.angle_between(&self.vector);

        self.relative_strength(angle_to_light)
    }
}
