//! Recursive ray/sphere evaluation engine.
//!
//! Given a scene of spheres and light sources, the engine follows a ray
//! through reflective and transparent surfaces until it lands on a terminal
//! surface, then shades that surface with direct light, hard shadows and the
//! object's own emission.
//!
//! Camera ray generation, scene loading and image output are left to the
//! caller.

#![warn(clippy::all)]

pub mod colour;
pub mod helpers;
pub mod lights;
pub mod materials;
pub mod objects;
pub mod renderer;
pub mod scene;
pub mod surface_interaction;
pub mod tracer;

pub use colour::Colour;
pub use helpers::{Angle, VectorExt};
pub use lights::global::{GlobalFalloff, GlobalLight};
pub use lights::point::{PointFalloff, PointLight};
pub use lights::{Light, LightTrait};
pub use materials::{Material, MaterialFlags};
pub use objects::sphere::Sphere;
pub use renderer::{Ray, Settings, SettingsError};
pub use scene::Scene;
pub use surface_interaction::Intersection;
