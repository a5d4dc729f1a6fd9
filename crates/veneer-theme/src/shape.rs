//! Corner radius scale.

/// Default base radius in logical pixels.
pub const BASE_RADIUS: f32 = 2.0;

/// Multiplier-based corner radius scale.
///
/// Components ask for radii as multiples of the base instead of naming
/// pixel values, so a whole theme can be rounded or squared off by
/// changing one number.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Shape {
    pub base_radius: f32,
}

impl Shape {
    pub const fn new(base_radius: f32) -> Self {
        Self { base_radius }
    }

    /// Radius at `multiplier` times the base. Negative multipliers
    /// clamp to zero.
    pub fn radius(&self, multiplier: f32) -> f32 {
        self.base_radius * multiplier.max(0.0)
    }

    /// The default component radius (multiplier 1).
    pub fn border_radius(&self) -> f32 {
        self.radius(1.0)
    }
}

impl Default for Shape {
    fn default() -> Self {
        Self::new(BASE_RADIUS)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn radius_scales_linearly() {
        let shape = Shape::default();
        assert_eq!(shape.radius(1.0), BASE_RADIUS);
        assert_eq!(shape.radius(2.0), 2.0 * shape.radius(1.0));
        assert_eq!(shape.radius(0.0), 0.0);
    }

    #[test]
    fn negative_multipliers_clamp_to_zero() {
        let shape = Shape::new(4.0);
        assert_eq!(shape.radius(-3.0), 0.0);
    }

    #[test]
    fn border_radius_is_the_unit_multiplier() {
        let shape = Shape::new(6.0);
        assert_eq!(shape.border_radius(), shape.radius(1.0));
    }
}
