use nalgebra::{Point3, Vector3};

use crate::objects::sphere::Sphere;

/// A ray/sphere hit.
///
/// `bounces` and `through_count` start at zero and are stamped once by the
/// traversal that resolves the hit.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Intersection<'a> {
    /// Distance along the ray, never negative.
    pub distance: f64,
    pub point: Point3<f64>,
    /// Unit outward normal.
    pub normal: Vector3<f64>,
    pub object: &'a Sphere,
    pub bounces: u32,
    pub through_count: u32,
}

impl<'a> Intersection<'a> {
    pub fn new(
        distance: f64,
        point: Point3<f64>,
        normal: Vector3<f64>,
        object: &'a Sphere,
    ) -> Intersection<'a> {
        Intersection {
            distance,
            point,
            normal,
            object,
            bounces: 0,
            through_count: 0,
        }
    }

    pub fn with_depth(self, bounces: u32, through_count: u32) -> Intersection<'a> {
        Intersection {
            bounces,
            through_count,
            ..self
        }
    }

    /// Picks the closest of `intersections`; the earliest wins a tie.
    pub fn nearest<I>(intersections: I) -> Option<Intersection<'a>>
    where
        I: IntoIterator<Item = Intersection<'a>>,
    {
        let mut closest: Option<Intersection<'a>> = None;

        for intersection in intersections {
            match closest {
                None => closest = Some(intersection),
                Some(current) => {
                    if intersection.distance < current.distance {
                        closest = Some(intersection);
                    }
                }
            }
        }

        closest
    }
}
