// Cosmetic side effects requested by the simulation: particle bursts and
// sound cues. The core pushes requests here; the presentation loop drains
// them. Nothing in this module feeds back into the simulation.

use glam::Vec2;
use rand::rngs::ThreadRng;
use rand::{thread_rng, Rng};

pub type Rgb = [u8; 3];

/// Spark palette for bursts, matching the neon theme.
pub const PADDLE_SPARK: Rgb = [0, 255, 200];
pub const BALL_SPARK: Rgb = [255, 50, 150];

/// Velocity decay applied to every particle each update.
const PARTICLE_DRAG: f32 = 0.95;

/// Fire-and-forget audio requests. Playback itself lives outside the core;
/// unconsumed cues are simply dropped.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SoundCue {
    PaddleHit,
    WallHit,
    Score,
}

#[derive(Debug, Clone)]
pub struct Particle {
    pub position: Vec2,
    velocity: Vec2,
    /// Remaining lifetime in seconds; doubles as the fade-out alpha.
    pub lifetime: f32,
    pub color: Rgb,
}

/// Owned collection of live particles plus the pending sound-cue queue.
pub struct Effects {
    particles: Vec<Particle>,
    sounds: Vec<SoundCue>,
    rng: ThreadRng,
}

impl Effects {
    pub fn new() -> Self {
        Self {
            particles: Vec::new(),
            sounds: Vec::new(),
            rng: thread_rng(),
        }
    }

    /// Scatter `count` particles from a point in uniformly random
    /// directions at 50-200 units/s, living a third of a second to one
    /// second each.
    pub fn burst(&mut self, position: Vec2, color: Rgb, count: usize) {
        for _ in 0..count {
            let angle = self.rng.gen_range(0.0..std::f32::consts::TAU);
            let speed = self.rng.gen_range(50.0..200.0);
            let lifetime = self.rng.gen_range(20..60) as f32 / 60.0;
            self.particles.push(Particle {
                position,
                velocity: Vec2::new(angle.cos(), angle.sin()) * speed,
                lifetime,
                color,
            });
        }
    }

    pub fn play(&mut self, cue: SoundCue) {
        self.sounds.push(cue);
    }

    /// Advance particle motion and cull the expired ones.
    pub fn update(&mut self, dt: f32) {
        for particle in &mut self.particles {
            particle.lifetime -= dt;
            particle.position += particle.velocity * dt;
            particle.velocity *= PARTICLE_DRAG;
        }
        self.particles.retain(|p| p.lifetime > 0.0);
    }

    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    /// Hand the queued cues to the presentation layer.
    pub fn drain_sounds(&mut self) -> Vec<SoundCue> {
        std::mem::take(&mut self.sounds)
    }
}

impl Default for Effects {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn burst_spawns_exactly_count_particles() {
        let mut effects = Effects::new();
        effects.burst(Vec2::new(100.0, 100.0), BALL_SPARK, 12);
        effects.burst(Vec2::new(200.0, 200.0), PADDLE_SPARK, 8);
        assert_eq!(effects.particles().len(), 20);
    }

    #[test]
    fn particles_expire_within_their_maximum_lifetime() {
        let mut effects = Effects::new();
        effects.burst(Vec2::new(100.0, 100.0), BALL_SPARK, 30);

        // Longest possible lifetime is just under one second.
        for _ in 0..120 {
            effects.update(1.0 / 60.0);
        }
        assert!(effects.particles().is_empty());
    }

    #[test]
    fn particles_move_and_fade() {
        let mut effects = Effects::new();
        effects.burst(Vec2::new(100.0, 100.0), BALL_SPARK, 5);
        let before: Vec<f32> = effects.particles().iter().map(|p| p.lifetime).collect();

        effects.update(1.0 / 60.0);
        for (particle, lifetime) in effects.particles().iter().zip(before) {
            assert!(particle.lifetime < lifetime);
            assert!(particle.position != Vec2::new(100.0, 100.0));
        }
    }

    #[test]
    fn sound_queue_drains() {
        let mut effects = Effects::new();
        effects.play(SoundCue::WallHit);
        effects.play(SoundCue::Score);
        assert_eq!(
            effects.drain_sounds(),
            vec![SoundCue::WallHit, SoundCue::Score]
        );
        assert!(effects.drain_sounds().is_empty());
    }

}
