use log::warn;
use num_traits::Zero;

use crate::colour::Colour;
use crate::helpers::VectorExt;
use crate::lights::LightTrait;
use crate::objects::sphere::Sphere;
use crate::objects::Root;
use crate::renderer::{check_intersect_scene, Ray, Settings};
use crate::scene::Scene;
use crate::surface_interaction::Intersection;

/// Follows `ray` through reflective and transparent spheres until it lands on
/// a surface that can be shaded.
///
/// Returns `None` when nothing is hit, when the bounce budget runs out or when
/// a transparent sphere traps the ray. A reflective surface whose reflection
/// lands nowhere is itself the result; a transparent one is not.
pub fn nearest_sphere_intersect<'a>(
    settings: &Settings,
    ray: &Ray,
    spheres: &'a [Sphere],
    suppress_ids: &[u32],
    bounces: u32,
    through_count: u32,
) -> Option<Intersection<'a>> {
    if bounces > settings.max_bounces {
        log::trace!("Bounce budget of {} exhausted", settings.max_bounces);
        return None;
    }

    let nearest = check_intersect_scene(ray, spheres, suppress_ids)?
        .with_depth(bounces, through_count);
    let object = nearest.object;

    if object.material.is_reflective() {
        let reflected_ray = Ray::new(nearest.point, ray.direction().reflect_in(&nearest.normal));
        let reflected = nearest_sphere_intersect(
            settings,
            &reflected_ray,
            spheres,
            &[object.id],
            bounces + 1,
            through_count,
        );

        return Some(reflected.unwrap_or(nearest));
    }

    if object.material.is_transparent() {
        let exit_ray = sphere_exit_ray(settings, ray, &nearest)?;

        return nearest_sphere_intersect(
            settings,
            &exit_ray,
            spheres,
            &[object.id],
            bounces + 1,
            through_count + 1,
        );
    }

    Some(nearest)
}

/// The ray leaving a transparent sphere that `ray` entered at `entry`.
///
/// Total internal reflection at the far side sends the ray back across the
/// sphere, at most `settings.exit_bounce_limit` times.
pub fn sphere_exit_ray(settings: &Settings, ray: &Ray, entry: &Intersection) -> Option<Ray> {
    let sphere = entry.object;
    let index = sphere.material.refractive_index();

    let Some(inner_direction) = ray.direction().refract_in(&entry.normal, 1.0, index) else {
        warn!(
            "Ray at {} reflects off the surface of sphere {} instead of entering",
            entry.point, sphere.id
        );
        return None;
    };
    let mut inner_ray = Ray::new(entry.point, inner_direction);

    for _ in 0..settings.exit_bounce_limit {
        let Some(exit) = sphere.test_intersect(&inner_ray, Root::Second) else {
            warn!(
                "No exit point from sphere {}: origin {}, direction {}",
                sphere.id,
                ray.origin(),
                ray.direction()
            );
            return None;
        };

        match inner_ray.direction().refract_in(&-exit.normal, index, 1.0) {
            Some(direction) => return Some(Ray::new(exit.point, direction)),
            None => {
                inner_ray = Ray::new(exit.point, inner_ray.direction().reflect_in(&exit.normal));
            }
        }
    }

    warn!(
        "Trapped ray in sphere {}: origin {}, direction {}",
        sphere.id,
        ray.origin(),
        ray.direction()
    );

    None
}

/// Shades a terminal surface: its own emission plus every light that reaches
/// it, modulated by the surface colour and added to the background.
pub fn terminal_rgb(settings: &Settings, intersection: &Intersection, scene: &Scene) -> Colour {
    let object = intersection.object;
    let mut illumination = object.colour.scale_rgb(object.material.emissive());

    for light in &scene.lights {
        let contribution = light.contribution(intersection, &scene.spheres, settings);
        if !contribution.is_zero() {
            illumination += contribution;
        }
    }

    settings
        .background
        .add_colour(&object.colour.illuminate(&illumination))
}

pub fn trace(settings: &Settings, ray: &Ray, scene: &Scene) -> Option<Colour> {
    nearest_sphere_intersect(settings, ray, &scene.spheres, &[], 0, 0)
        .map(|terminal| terminal_rgb(settings, &terminal, scene))
}

pub fn trace_or_background(settings: &Settings, ray: &Ray, scene: &Scene) -> Colour {
    trace(settings, ray, scene).unwrap_or(settings.background)
}
