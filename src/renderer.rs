use std::fs;
use std::path::Path;

use log::info;
use nalgebra::{Point3, Vector3};
use yaml_rust::{ScanError, Yaml, YamlLoader};

use crate::colour::Colour;
use crate::objects::sphere::Sphere;
use crate::objects::Root;
use crate::scene::Scene;
use crate::surface_interaction::Intersection;
use crate::tracer::trace_or_background;

/// Total internal reflections allowed while looking for a way out of a
/// transparent sphere.
pub const EXIT_BOUNCE_LIMIT: u32 = 10;

#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Settings {
    /// Reflective and refractive redirections a ray may take.
    pub max_bounces: u32,
    pub exit_bounce_limit: u32,
    /// Ambient floor added to every shaded surface, and the colour of rays
    /// that land nowhere.
    pub background: Colour,
}

impl Default for Settings {
    fn default() -> Self {
        Settings {
            max_bounces: 0,
            exit_bounce_limit: EXIT_BOUNCE_LIMIT,
            background: Colour::black(),
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum SettingsError {
    #[error("unable to read settings file: {0}")]
    Io(#[from] std::io::Error),
    #[error("unable to parse settings yaml: {0}")]
    Yaml(#[from] ScanError),
    #[error("settings document is empty")]
    Empty,
    #[error("invalid value for `{key}`")]
    InvalidValue { key: String },
}

impl Settings {
    /// Reads a render settings document. Keys that are absent keep their
    /// defaults.
    pub fn from_yaml_str(contents: &str) -> Result<Settings, SettingsError> {
        let documents = YamlLoader::load_from_str(contents)?;
        let settings_yaml = documents.first().ok_or(SettingsError::Empty)?;
        let defaults = Settings::default();

        Ok(Settings {
            max_bounces: yaml_into_u32(
                &settings_yaml["renderer"]["depth_limit"],
                "renderer.depth_limit",
                defaults.max_bounces,
            )?,
            exit_bounce_limit: yaml_into_u32(
                &settings_yaml["renderer"]["exit_bounce_limit"],
                "renderer.exit_bounce_limit",
                defaults.exit_bounce_limit,
            )?,
            background: if settings_yaml["background"].is_badvalue() {
                defaults.background
            } else {
                yaml_array_into_colour(&settings_yaml["background"], "background")?
            },
        })
    }

    pub fn load_from_file(path: &Path) -> Result<Settings, SettingsError> {
        info!("Load render settings from {}", path.display());
        let contents = fs::read_to_string(path)?;

        Settings::from_yaml_str(&contents)
    }
}

fn yaml_into_u32(value: &Yaml, key: &str, default: u32) -> Result<u32, SettingsError> {
    if value.is_badvalue() {
        return Ok(default);
    }

    value
        .as_i64()
        .and_then(|v| u32::try_from(v).ok())
        .ok_or_else(|| SettingsError::InvalidValue {
            key: key.to_string(),
        })
}

fn yaml_into_f64(value: &Yaml) -> Option<f64> {
    value.as_f64().or_else(|| value.as_i64().map(|v| v as f64))
}

fn yaml_array_into_colour(value: &Yaml, key: &str) -> Result<Colour, SettingsError> {
    let invalid = || SettingsError::InvalidValue {
        key: key.to_string(),
    };

    match value.as_vec().map(|channels| channels.as_slice()) {
        Some([r, g, b]) => Ok(Colour::new(
            yaml_into_f64(r).ok_or_else(invalid)?,
            yaml_into_f64(g).ok_or_else(invalid)?,
            yaml_into_f64(b).ok_or_else(invalid)?,
        )),
        _ => Err(invalid()),
    }
}

/// A half line with a unit direction. The direction is normalised once, here.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Ray {
    origin: Point3<f64>,
    direction: Vector3<f64>,
}

impl Ray {
    pub fn new(origin: Point3<f64>, direction: Vector3<f64>) -> Ray {
        Ray {
            origin,
            direction: direction.normalize(),
        }
    }

    pub fn origin(&self) -> Point3<f64> {
        self.origin
    }

    pub fn direction(&self) -> Vector3<f64> {
        self.direction
    }

    pub fn at(&self, distance: f64) -> Point3<f64> {
        self.origin + self.direction * distance
    }

    pub fn sphere_discriminant<'a>(
        &self,
        sphere: &'a Sphere,
        root: Root,
    ) -> Option<Intersection<'a>> {
        sphere.test_intersect(self, root)
    }
}

/// Nearest entry point of `ray` among `spheres`, skipping every sphere whose
/// id is listed in `suppress_ids`.
pub fn check_intersect_scene<'a>(
    ray: &Ray,
    spheres: &'a [Sphere],
    suppress_ids: &[u32],
) -> Option<Intersection<'a>> {
    Intersection::nearest(
        spheres
            .iter()
            .filter(|sphere| !suppress_ids.contains(&sphere.id))
            .filter_map(|sphere| ray.sphere_discriminant(sphere, Root::First)),
    )
}

/// Evaluates one colour per primary ray. Rays that find no terminal surface
/// get the background colour.
pub fn render(settings: &Settings, scene: &Scene, rays: &[Ray]) -> Vec<Colour> {
    rays.iter()
        .map(|ray| trace_or_background(settings, ray, scene))
        .collect()
}

#[cfg(test)]
mod tests {
    use approx::assert_relative_eq;
    use nalgebra::{Point3, Vector3};

    use crate::colour::Colour;
    use crate::materials::Material;
    use crate::objects::sphere::Sphere;
    use crate::renderer::{check_intersect_scene, render, Ray, Settings, SettingsError};
    use crate::scene::Scene;

    #[test]
    fn test_ray_direction_is_normalised_once() {
        let ray = Ray::new(Point3::new(1.0, 0.0, 0.0), Vector3::new(0.0, 3.0, 4.0));

        assert_relative_eq!(ray.direction(), Vector3::new(0.0, 0.6, 0.8));
        assert_relative_eq!(ray.at(5.0), Point3::new(1.0, 3.0, 4.0));
    }

    #[test]
    fn test_check_intersect_scene_picks_nearest() {
        let spheres = vec![
            Sphere::new(Point3::new(0.0, 0.0, -10.0), 1.0, Material::matte()).with_id(1),
            Sphere::new(Point3::new(0.0, 0.0, -4.0), 1.0, Material::matte()).with_id(2),
        ];
        let ray = Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0));

        let nearest = check_intersect_scene(&ray, &spheres, &[]).unwrap();
        assert_eq!(2, nearest.object.id);
        assert_relative_eq!(nearest.distance, 3.0);

        let suppressed = check_intersect_scene(&ray, &spheres, &[2]).unwrap();
        assert_eq!(1, suppressed.object.id);

        assert!(check_intersect_scene(&ray, &spheres, &[1, 2]).is_none());
    }

    #[test]
    fn test_settings_from_yaml() {
        let settings = Settings::from_yaml_str(
            "renderer:\n  depth_limit: 4\n  exit_bounce_limit: 3\nbackground: [10, 20.5, 0]\n",
        )
        .unwrap();

        assert_eq!(4, settings.max_bounces);
        assert_eq!(3, settings.exit_bounce_limit);
        assert_eq!(Colour::new(10.0, 20.5, 0.0), settings.background);
    }

    #[test]
    fn test_settings_defaults_for_missing_keys() {
        let settings = Settings::from_yaml_str("film:\n  image_width: 10\n").unwrap();

        assert_eq!(Settings::default(), settings);
        assert_eq!(10, settings.exit_bounce_limit);
    }

    #[test]
    fn test_settings_rejects_bad_values() {
        let error = Settings::from_yaml_str("renderer:\n  depth_limit: -1\n").unwrap_err();
        let depth_key = "renderer.depth_limit";
        assert!(matches!(error, SettingsError::InvalidValue { ref key } if key == depth_key));

        let error = Settings::from_yaml_str("renderer:\n  depth_limit: lots\n").unwrap_err();
        assert!(matches!(error, SettingsError::InvalidValue { .. }));

        let error = Settings::from_yaml_str("background: [1, 2]\n").unwrap_err();
        assert!(matches!(error, SettingsError::InvalidValue { ref key } if key == "background"));

        assert!(matches!(Settings::from_yaml_str(""), Err(SettingsError::Empty)));
        assert!(matches!(
            Settings::from_yaml_str("renderer: [unclosed"),
            Err(SettingsError::Yaml(_))
        ));
    }

    #[test]
    fn test_settings_load_from_file() {
        let path = std::env::temp_dir().join("sphere_tracer_render_settings.yaml");
        std::fs::write(&path, "renderer:\n  depth_limit: 2\n").unwrap();

        let settings = Settings::load_from_file(&path).unwrap();
        assert_eq!(2, settings.max_bounces);

        std::fs::remove_file(&path).unwrap();

        assert!(matches!(Settings::load_from_file(&path), Err(SettingsError::Io(_))));
    }

    #[test]
    fn test_render_maps_misses_to_background() {
        let settings = Settings {
            background: Colour::new(1.0, 2.0, 3.0),
            ..Settings::default()
        };
        let scene = Scene::new(
            vec![Sphere::new(
                Point3::new(0.0, 0.0, -5.0),
                1.0,
                Material::matte().with_emissive(1.0),
            )
            .with_colour(Colour::new(255.0, 0.0, 0.0))],
            vec![],
        );
        let rays = [
            Ray::new(Point3::origin(), Vector3::new(0.0, 0.0, -1.0)),
            Ray::new(Point3::origin(), Vector3::new(0.0, 1.0, 0.0)),
        ];

        let colours = render(&settings, &scene, &rays);

        assert_eq!(2, colours.len());
        assert_eq!(Colour::new(256.0, 2.0, 3.0), colours[0]);
        assert_eq!(settings.background, colours[1]);
    }
}
