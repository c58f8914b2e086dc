use nalgebra::{distance, Matrix3, Point3, Vector3};

/// Three axis rotation in radians, consumed by [`VectorExt::rotate`].
///
/// `x` turns in the xy plane, `y` turns around the y axis (positive is left)
/// and `z` is the bank (positive is left). This is not a quaternion.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Angle {
    pub x: f64,
    pub y: f64,
    pub z: f64,
}

impl Angle {
    pub fn new(x: f64, y: f64, z: f64) -> Self {
        Angle { x, y, z }
    }

    pub fn zero() -> Self {
        Angle::default()
    }
}

/// The fixed rotation matrix for `angle`. Vectors are rotated as row vectors,
/// `v' = v · R`.
pub fn rotation_matrix(angle: &Angle) -> Matrix3<f64> {
    let (sin_a, cos_a) = angle.x.sin_cos();
    let (sin_b, cos_b) = angle.y.sin_cos();
    let (sin_c, cos_c) = angle.z.sin_cos();

    Matrix3::new(
        cos_c * cos_b * cos_a - sin_c * sin_a,
        cos_c * cos_b * sin_a + sin_c * cos_a,
        -cos_c * sin_b,
        -sin_c * cos_b * cos_a - cos_c * sin_a,
        -sin_c * cos_b * sin_a + cos_c * cos_a,
        sin_c * sin_b,
        sin_b * cos_a,
        sin_b * sin_a,
        cos_b,
    )
}

/// Vector operations the engine needs on top of what nalgebra provides.
///
/// Addition, subtraction, negation, dot and cross products, magnitude and
/// normalisation come straight from `Vector3`, including the in-place
/// variants (`+=`, `normalize_mut`, ...).
pub trait VectorExt {
    fn scale_by_length(&self, length: f64) -> Vector3<f64>;

    fn invert(&self) -> Vector3<f64>;

    /// Distance between the two vectors read as positions.
    fn distance_from(&self, other: &Vector3<f64>) -> f64;

    /// Angle in radians, in `[0, π]`. Undefined for zero length vectors.
    fn angle_between(&self, other: &Vector3<f64>) -> f64;

    /// Mirror reflection about `normal`. Always returns a unit vector.
    fn reflect_in(&self, normal: &Vector3<f64>) -> Vector3<f64>;

    /// Snell's law refraction from a medium with `index_a` into one with
    /// `index_b`. Returns `None` on total internal reflection.
    fn refract_in(&self, normal: &Vector3<f64>, index_a: f64, index_b: f64) -> Option<Vector3<f64>>;

    /// Row vector times matrix.
    fn multiply_by_matrix(&self, matrix: &Matrix3<f64>) -> Vector3<f64>;

    fn rotate(&self, angle: &Angle) -> Vector3<f64>;
}

impl VectorExt for Vector3<f64> {
    fn scale_by_length(&self, length: f64) -> Vector3<f64> {
        self * length
    }

    fn invert(&self) -> Vector3<f64> {
        -self
    }

    fn distance_from(&self, other: &Vector3<f64>) -> f64 {
        distance(&Point3::from(*self), &Point3::from(*other))
    }

    fn angle_between(&self, other: &Vector3<f64>) -> f64 {
        // rounding can push the cosine just past ±1
        let cos = self.dot(other) / (self.magnitude() * other.magnitude());

        cos.clamp(-1.0, 1.0).acos()
    }

    fn reflect_in(&self, normal: &Vector3<f64>) -> Vector3<f64> {
        let v = self.normalize();
        let normal = normal.normalize();

        (v - normal * (2.0 * v.dot(&normal))).normalize()
    }

    fn refract_in(
        &self,
        normal: &Vector3<f64>,
        index_a: f64,
        index_b: f64,
    ) -> Option<Vector3<f64>> {
        let v = self.normalize();
        let normal = normal.normalize();
        let ratio = index_a / index_b;

        // entering and leaving share one formula: flip the cosine, not the normal
        let mut cos_i = v.dot(&normal).clamp(-1.0, 1.0);
        if cos_i < 0.0 {
            cos_i = -cos_i;
        }

        let k = 1.0 - ratio * ratio * (1.0 - cos_i * cos_i);
        if k < 0.0 {
            return None;
        }

        Some((v * ratio + normal * (ratio * cos_i - k.sqrt())).normalize())
    }

    fn multiply_by_matrix(&self, matrix: &Matrix3<f64>) -> Vector3<f64> {
        matrix.transpose() * self
    }

    fn rotate(&self, angle: &Angle) -> Vector3<f64> {
        self.multiply_by_matrix(&rotation_matrix(angle))
    }
}
