// Simple particle struct to keep track of individual position, velocity, size and opacity

use crate::config::FieldConfig;
use rand::Rng;

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Particle {
    pub pos: [f64; 2],
    pub vel: [f64; 2],
    pub size: f64,
    pub opacity: f64,
}

impl Particle {
    pub fn new(pos: [f64; 2], vel: [f64; 2], size: f64, opacity: f64) -> Particle {
        Particle {
            pos,
            vel,
            size,
            opacity,
        }
    }

    // Uniformly random particle somewhere inside a width x height viewport
    pub fn random<R: Rng>(
        rng: &mut R,
        width: f64,
        height: f64,
        config: &FieldConfig,
    ) -> Particle {
        let (min_vel, max_vel) = config.velocity_range;
        let (min_size, max_size) = config.size_range;
        let (min_opacity, max_opacity) = config.opacity_range;
        Particle {
            pos: [rng.gen::<f64>() * width, rng.gen::<f64>() * height],
            vel: [
                rng.gen_range(min_vel, max_vel),
                rng.gen_range(min_vel, max_vel),
            ],
            size: rng.gen_range(min_size, max_size),
            opacity: rng.gen_range(min_opacity, max_opacity),
        }
    }

    // Moves one frame and bounces off the viewport edges.
    // Position is left where it lands, only the velocity is negated, and it is
    // negated on every frame the particle ends up outside.
    pub fn advance(&mut self, width: f64, height: f64) {
        self.pos = vecmath::vec2_add(self.pos, self.vel);
        let bounds = [width, height];
        for axis in 0..2 {
            if self.pos[axis] < 0.0 || self.pos[axis] > bounds[axis] {
                self.vel[axis] = -self.vel[axis];
            }
        }
    }

    pub fn distance_to(&self, other: &Particle) -> f64 {
        vecmath::vec2_len(vecmath::vec2_sub(self.pos, other.pos))
    }
}
