use crate::colour::Colour;
use crate::lights::global::GlobalLight;
use crate::lights::point::PointLight;
use crate::objects::sphere::Sphere;
use crate::renderer::Settings;
use crate::surface_interaction::Intersection;

pub mod global;
pub mod point;

#[derive(Debug, Clone, PartialEq)]
pub enum Light {
    Global(GlobalLight),
    Point(PointLight),
}

pub trait LightTrait {
    /// Light this source adds at `intersection`, with shadowing already
    /// applied.
    fn contribution(
        &self,
        intersection: &Intersection,
        spheres: &[Sphere],
        settings: &Settings,
    ) -> Colour;
}

/// Linear falloff from 1 at normal incidence to 0 at `max_angle`.
pub fn incidence(angle: f64, max_angle: f64) -> f64 {
    if angle > max_angle {
        return 0.0;
    }

    if angle == 0.0 {
        return 1.0;
    }

    (max_angle - angle) / max_angle
}

impl LightTrait for Light {
    fn contribution(
        &self,
        intersection: &Intersection,
        spheres: &[Sphere],
        settings: &Settings,
    ) -> Colour {
        match self {
            Light::Global(x) => x.contribution(intersection, spheres, settings),
            Light::Point(x) => x.contribution(intersection, spheres, settings),
        }
    }
}

impl From<GlobalLight> for Light {
    fn from(light: GlobalLight) -> Self {
        Light::Global(light)
    }
}

impl From<PointLight> for Light {
    fn from(light: PointLight) -> Self {
        Light::Point(light)
    }
}

#[cfg(test)]
mod tests {
    use std::f64::consts::{FRAC_PI_2, FRAC_PI_4};

    use approx::assert_relative_eq;

    use super::incidence;

    #[test]
    fn test_incidence() {
        assert_eq!(1.0, incidence(0.0, FRAC_PI_2));
        assert_relative_eq!(incidence(FRAC_PI_4, FRAC_PI_2), 0.5);
        assert_eq!(0.0, incidence(FRAC_PI_2, FRAC_PI_2));
        assert_eq!(0.0, incidence(FRAC_PI_2 + 0.1, FRAC_PI_2));
    }

    #[test]
    fn test_incidence_in_degrees() {
        assert_relative_eq!(incidence(30.0, 90.0), 2.0 / 3.0);
    }
}
