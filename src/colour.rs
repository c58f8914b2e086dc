use std::ops::{Add, AddAssign};

use approx::{AbsDiffEq, RelativeEq};
use num_traits::Zero;

/// Additive RGB light or surface colour, conventionally 0-255 per channel.
///
/// Arithmetic never clamps. Clamping belongs to whoever turns the colour into
/// pixels.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Colour {
    pub r: f64,
    pub g: f64,
    pub b: f64,
}

impl Colour {
    pub fn new(r: f64, g: f64, b: f64) -> Self {
        Colour { r, g, b }
    }

    pub fn black() -> Self {
        Colour::new(0.0, 0.0, 0.0)
    }

    pub fn grey() -> Self {
        Colour::new(128.0, 128.0, 128.0)
    }

    pub fn white() -> Self {
        Colour::new(255.0, 255.0, 255.0)
    }

    pub fn to_array(&self) -> [f64; 3] {
        [self.r, self.g, self.b]
    }

    pub fn add_colour(&self, other: &Colour) -> Colour {
        Colour::new(self.r + other.r, self.g + other.g, self.b + other.b)
    }

    pub fn scale_rgb(&self, scale: f64) -> Colour {
        Colour::new(self.r * scale, self.g * scale, self.b * scale)
    }

    pub fn scale_rgb_list(&self, scale: f64) -> [i64; 3] {
        let scaled = self.scale_rgb_rounded(scale);

        [scaled.r as i64, scaled.g as i64, scaled.b as i64]
    }

    pub fn scale_rgb_rounded(&self, scale: f64) -> Colour {
        Colour::new(
            (self.r * scale).round_ties_even(),
            (self.g * scale).round_ties_even(),
            (self.b * scale).round_ties_even(),
        )
    }

    /// Modulates this colour by `light`, each channel scaled by
    /// `light.channel / 255` and rounded.
    pub fn illuminate(&self, light: &Colour) -> Colour {
        Colour::new(
            (self.r * (light.r / 255.0)).round_ties_even(),
            (self.g * (light.g / 255.0)).round_ties_even(),
            (self.b * (light.b / 255.0)).round_ties_even(),
        )
    }
}

impl Add for Colour {
    type Output = Colour;

    fn add(self, other: Colour) -> Colour {
        self.add_colour(&other)
    }
}

impl AddAssign for Colour {
    fn add_assign(&mut self, other: Colour) {
        *self = self.add_colour(&other);
    }
}

impl Zero for Colour {
    fn zero() -> Self {
        Colour::black()
    }

    fn is_zero(&self) -> bool {
        self.r == 0.0 && self.g == 0.0 && self.b == 0.0
    }
}

impl AbsDiffEq for Colour {
    type Epsilon = f64;

    fn default_epsilon() -> f64 {
        f64::default_epsilon()
    }

    fn abs_diff_eq(&self, other: &Self, epsilon: f64) -> bool {
        self.r.abs_diff_eq(&other.r, epsilon)
            && self.g.abs_diff_eq(&other.g, epsilon)
            && self.b.abs_diff_eq(&other.b, epsilon)
    }
}

impl RelativeEq for Colour {
    fn default_max_relative() -> f64 {
        f64::default_max_relative()
    }

    fn relative_eq(&self, other: &Self, epsilon: f64, max_relative: f64) -> bool {
        self.r.relative_eq(&other.r, epsilon, max_relative)
            && self.g.relative_eq(&other.g, epsilon, max_relative)
            && self.b.relative_eq(&other.b, epsilon, max_relative)
    }
}
