use crate::lights::Light;
use crate::objects::sphere::Sphere;

/// Everything a render pass reads. Nothing here changes while rays are being
/// evaluated.
#[derive(Debug, Clone, Default)]
pub struct Scene {
    pub spheres: Vec<Sphere>,
    pub lights: Vec<Light>,
}

impl Scene {
    pub fn new(spheres: Vec<Sphere>, lights: Vec<Light>) -> Scene {
        Scene { spheres, lights }
    }

    pub fn push_sphere(&mut self, sphere: Sphere) {
        self.spheres.push(sphere);
    }

    pub fn push_light<L: Into<Light>>(&mut self, light: L) {
        self.lights.push(light.into());
    }
}
