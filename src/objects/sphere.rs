use nalgebra::Point3;

use crate::colour::Colour;
use crate::materials::Material;
use crate::objects::Root;
use crate::renderer::Ray;
use crate::surface_interaction::Intersection;

// SPHERE
#[derive(Debug, Clone, PartialEq)]
pub struct Sphere {
    /// 0 marks an object that does not emit light; a point light sharing an
    /// object's id is treated as sitting inside it.
    pub id: u32,
    pub centre: Point3<f64>,
    pub radius: f64,
    pub material: Material,
    pub colour: Colour,
}

impl Sphere {
    pub fn new(centre: Point3<f64>, radius: f64, material: Material) -> Self {
        Sphere {
            id: 0,
            centre,
            radius: radius.max(0.0),
            material,
            colour: Colour::grey(),
        }
    }

    pub fn with_colour(mut self, colour: Colour) -> Self {
        self.colour = colour;
        self
    }

    pub fn with_id(mut self, id: u32) -> Self {
        self.id = id;
        self
    }

    /// Classic geometric ray/sphere solve.
    ///
    /// A sphere whose centre lies behind the ray origin is reported as a miss,
    /// even when the origin is inside it.
    pub fn test_intersect(&self, ray: &Ray, root: Root) -> Option<Intersection<'_>> {
        let to_centre = self.centre - ray.origin();
        let direction = ray.direction();

        // a zero length direction normalises to NaN
        let tca = to_centre.dot(&direction);
        if !tca.is_finite() || tca < 0.0 {
            return None;
        }

        // near-parallel rays can push this just below zero
        let d_squared = (to_centre.dot(&to_centre) - tca * tca).max(0.0);
        let d = d_squared.sqrt();
        if d > self.radius {
            return None;
        }

        let thc = (self.radius * self.radius - d_squared).max(0.0).sqrt();
        let distance = match root {
            Root::First => tca - thc,
            Root::Second => tca + thc,
        };

        if !distance.is_finite() || distance < 0.0 {
            return None;
        }

        let point = ray.at(distance);
        let normal = (point - self.centre).normalize();

        Some(Intersection::new(distance, point, normal, self))
    }
}
