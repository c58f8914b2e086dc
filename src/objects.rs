pub mod sphere;

/// Which solution of the ray/sphere quadratic to report.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Root {
    /// Where the ray enters the sphere.
    First,
    /// Where the ray leaves the sphere.
    Second,
}
