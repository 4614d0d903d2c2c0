// The particle field: a fixed set of drifting particles that bounce off the
// viewport edges, with faint links drawn between neighbours.
//
// The field never schedules itself. Whoever owns it calls `tick` once per
// frame (requestAnimationFrame in the browser, a plain loop in tests).

use crate::config::FieldConfig;
use crate::particle::Particle;
use crate::surface::Surface;
use rand::Rng;

pub struct ParticleField {
    width: f64,
    height: f64,
    particles: Vec<Particle>,
    config: FieldConfig,
}

impl ParticleField {
    pub fn new<R: Rng>(config: FieldConfig, width: f64, height: f64, rng: &mut R) -> ParticleField {
        let particles = (0..config.particle_count)
            .map(|_| Particle::random(rng, width, height, &config))
            .collect();
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn from_particles(
        config: FieldConfig,
        width: f64,
        height: f64,
        particles: Vec<Particle>,
    ) -> ParticleField {
        ParticleField {
            width,
            height,
            particles,
            config,
        }
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    pub fn size(&self) -> (f64, f64) {
        (self.width, self.height)
    }

    // Particles are not moved back inside; the next tick bounces them off
    // the new edges.
    pub fn resize(&mut self, width: f64, height: f64) {
        self.width = width;
        self.height = height;
    }

    /// Link opacity for two particles `distance` apart, or `None` when they
    /// are too far apart to be linked. Fades linearly from
    /// `max_link_opacity` at zero distance to nothing at `link_distance`.
    pub fn link_alpha(&self, distance: f64) -> Option<f64> {
        link_alpha(
            distance,
            self.config.link_distance,
            self.config.max_link_opacity,
        )
    }

    /// Advances every particle by one frame and redraws the field.
    ///
    /// Particles are processed in order: each one moves, is drawn, and is
    /// then linked against every particle after it. Later particles have
    /// not moved yet at that point, so their links use last frame's
    /// positions.
    pub fn tick<S: Surface>(&mut self, surface: &mut S) -> Result<(), S::Error> {
        surface.clear()?;
        let color = self.config.color;
        for i in 0..self.particles.len() {
            self.particles[i].advance(self.width, self.height);

            let p = self.particles[i];
            surface.draw_circle(p.pos[0], p.pos[1], p.size, color, p.opacity)?;

            for other in &self.particles[i + 1..] {
                let distance = p.distance_to(other);
                if let Some(alpha) = self.link_alpha(distance) {
                    surface.draw_line(p.pos, other.pos, color, alpha, self.config.link_width)?;
                }
            }
        }
        Ok(())
    }
}

pub fn link_alpha(distance: f64, link_distance: f64, max_opacity: f64) -> Option<f64> {
    if distance < link_distance {
        Some(max_opacity * (1.0 - distance / link_distance))
    } else {
        None
    }
}
