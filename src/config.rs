// Tunables for the particle field. Defaults match the portfolio background.

use crate::color::Color;

#[derive(Clone, Debug, PartialEq)]
pub struct FieldConfig {
    pub particle_count: usize,
    // Ranges are half-open, [min, max)
    pub size_range: (f64, f64),
    pub velocity_range: (f64, f64),
    pub opacity_range: (f64, f64),
    pub link_distance: f64,
    pub max_link_opacity: f64,
    pub link_width: f64,
    pub color: Color,
    // Wraps each frame in console.time/console.timeEnd
    pub profile: bool,
}

impl FieldConfig {
    pub const PARTICLE_COUNT: usize = 50;
    pub const LINK_DISTANCE: f64 = 150.0;
    pub const MAX_LINK_OPACITY: f64 = 0.2;
    pub const LINK_WIDTH: f64 = 0.5;

    pub fn with_particle_count(mut self, particle_count: usize) -> Self {
        self.particle_count = particle_count;
        self
    }

    pub fn validate(&self) -> Result<(), String> {
        for (name, (min, max)) in [
            ("size_range", self.size_range),
            ("velocity_range", self.velocity_range),
            ("opacity_range", self.opacity_range),
        ]
        .iter()
        {
            if !min.is_finite() || !max.is_finite() || min >= max {
                return Err(format!("{} must be a finite, non-empty range", name));
            }
        }
        if self.size_range.0 < 0.0 {
            return Err(String::from("size_range must not be negative"));
        }
        if !self.link_distance.is_finite() || self.link_distance <= 0.0 {
            return Err(String::from("link_distance must be finite and > 0"));
        }
        if !(0.0..=1.0).contains(&self.max_link_opacity) {
            return Err(String::from("max_link_opacity must be within [0, 1]"));
        }
        Ok(())
    }
}

impl Default for FieldConfig {
    fn default() -> Self {
        FieldConfig {
            particle_count: FieldConfig::PARTICLE_COUNT,
            size_range: (0.5, 2.5),
            velocity_range: (-0.25, 0.25),
            opacity_range: (0.2, 0.7),
            link_distance: FieldConfig::LINK_DISTANCE,
            max_link_opacity: FieldConfig::MAX_LINK_OPACITY,
            link_width: FieldConfig::LINK_WIDTH,
            color: Color::ACCENT,
            profile: false,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_valid() {
        assert_eq!(FieldConfig::default().validate(), Ok(()));
    }

    #[test]
    fn rejects_empty_range() {
        let config = FieldConfig {
            opacity_range: (0.7, 0.2),
            ..FieldConfig::default()
        };
        let err = config.validate().unwrap_err();
        assert!(err.contains("opacity_range"));
    }

    #[test]
    fn rejects_zero_link_distance() {
        let config = FieldConfig {
            link_distance: 0.0,
            ..FieldConfig::default()
        };
        assert!(config.validate().unwrap_err().contains("link_distance"));
    }

    #[test]
    fn particle_count_override() {
        let config = FieldConfig::default().with_particle_count(2);
        assert_eq!(config.particle_count, 2);
        assert_eq!(config.link_distance, 150.0);
    }
}
