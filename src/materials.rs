use bitflags::bitflags;

bitflags! {
    pub struct MaterialFlags: u32 {
        const REFLECTIVE = 0b00000001;
        const TRANSPARENT = 0b00000010;
        const NONE = 0b00000000;
    }
}

/// Surface properties of a sphere.
///
/// A reflective surface wins over a transparent one when both flags are set.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Material {
    flags: MaterialFlags,
    emissive: f64,
    refractive_index: f64,
}

impl Material {
    pub fn new(flags: MaterialFlags, emissive: f64, refractive_index: f64) -> Self {
        debug_assert!(refractive_index > 0.0, "refractive index must be positive");

        Material {
            flags,
            emissive: emissive.clamp(0.0, 1.0),
            refractive_index,
        }
    }

    pub fn matte() -> Self {
        Material::new(MaterialFlags::NONE, 0.0, 1.0)
    }

    pub fn mirror() -> Self {
        Material::new(MaterialFlags::REFLECTIVE, 0.0, 1.0)
    }

    pub fn glass(refractive_index: f64) -> Self {
        Material::new(MaterialFlags::TRANSPARENT, 0.0, refractive_index)
    }

    pub fn with_emissive(self, emissive: f64) -> Self {
        Material::new(self.flags, emissive, self.refractive_index)
    }

    pub fn flags(&self) -> MaterialFlags {
        self.flags
    }

    pub fn is_reflective(&self) -> bool {
        self.flags.contains(MaterialFlags::REFLECTIVE)
    }

    pub fn is_transparent(&self) -> bool {
        self.flags.contains(MaterialFlags::TRANSPARENT)
    }

    pub fn emissive(&self) -> f64 {
        self.emissive
    }

    pub fn refractive_index(&self) -> f64 {
        self.refractive_index
    }
}

impl Default for Material {
    fn default() -> Self {
        Material::matte()
    }
}

#[cfg(test)]
mod tests {
    use super::{Material, MaterialFlags};

    #[test]
    fn test_constructors() {
        let matte = Material::matte();
        assert!(!matte.is_reflective());
        assert!(!matte.is_transparent());

        assert!(Material::mirror().is_reflective());

        let glass = Material::glass(1.5);
        assert!(glass.is_transparent());
        assert_eq!(1.5, glass.refractive_index());
    }

    #[test]
    fn test_emissive_is_clamped() {
        assert_eq!(1.0, Material::matte().with_emissive(3.0).emissive());
        assert_eq!(0.0, Material::matte().with_emissive(-1.0).emissive());
        assert_eq!(0.25, Material::glass(1.3).with_emissive(0.25).emissive());
    }

    #[test]
    fn test_combined_flags() {
        let material = Material::new(
            MaterialFlags::REFLECTIVE | MaterialFlags::TRANSPARENT,
            0.0,
            1.2,
        );

        assert!(material.is_reflective());
        assert!(material.is_transparent());
    }
}
