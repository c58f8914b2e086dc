use nalgebra::Point3;
use num_traits::Zero;

use crate::colour::Colour;
use crate::helpers::VectorExt;
use crate::lights::{incidence, LightTrait};
use crate::objects::sphere::Sphere;
use crate::renderer::{Ray, Settings};
use crate::surface_interaction::Intersection;
use crate::tracer::nearest_sphere_intersect;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PointFalloff {
    /// Strength divided by the distance to the light.
    InverseDistance,
    /// Behaves like a directional light, no attenuation.
    Constant,
}

impl PointFalloff {
    pub fn code(&self) -> i32 {
        match self {
            PointFalloff::InverseDistance => 0,
            PointFalloff::Constant => -1,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct PointLight {
    /// Same id as the sphere the light sits in, or an id no sphere uses.
    pub id: u32,
    pub position: Point3<f64>,
    pub colour: Colour,
    /// 0-1
    pub strength: f64,
    pub max_angle: f64,
    pub falloff: PointFalloff,
}

impl PointLight {
    pub fn new(
        id: u32,
        position: Point3<f64>,
        colour: Colour,
        strength: f64,
        max_angle: f64,
    ) -> Self {
        debug_assert!(max_angle > 0.0, "max angle must be positive");

        PointLight {
            id,
            position,
            colour,
            strength,
            max_angle,
            falloff: PointFalloff::InverseDistance,
        }
    }

    pub fn with_falloff(mut self, falloff: PointFalloff) -> Self {
        self.falloff = falloff;
        self
    }

    // Attenuation is 1/d, not the inverse square.
    pub fn relative_strength(&self, angle: f64, distance: f64) -> Colour {
        let strength = incidence(angle, self.max_angle) * self.strength;

        match self.falloff {
            PointFalloff::Constant => self.colour.scale_rgb(strength),
            PointFalloff::InverseDistance => self.colour.scale_rgb(strength / distance),
        }
    }
}

impl LightTrait for PointLight {
    /// Casts a shadow ray towards the light. The light only counts when the
    /// ray resolves onto the sphere carrying the light's id; any other
    /// obstruction blocks it completely.
    fn contribution(
        &self,
        intersection: &Intersection,
        spheres: &[Sphere],
        settings: &Settings,
    ) -> Colour {
        let object = intersection.object;
        if object.id == self.id {
            return Colour::zero();
        }

        let vector_to_light = self.position - intersection.point;
        let distance_to_light = vector_to_light.magnitude();
        if distance_to_light <= f64::EPSILON {
            return Colour::zero();
        }

        let ray_to_light = Ray::new(intersection.point, vector_to_light);

        match nearest_sphere_intersect(settings, &ray_to_light, spheres, &[object.id], 0, 0) {
            Some(terminus) if terminus.object.id == self.id => {
                let angle_to_light = intersection.normal.angle_between(&vector_to_light);

                self.relative_strength(angle_to_light, distance_to_light)
            }
            _ => Colour::zero(),
        }
    }
}
