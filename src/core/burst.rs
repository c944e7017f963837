use super::constants::{
    BURST_CULL_MARGIN, BURST_GRAVITY, BURST_LIFETIME_MS, BURST_MAX_SPEED, BURST_PARTICLES,
};
use fnv::FnvHashMap;
use glam::Vec2;
use instant::Instant;
use rand::Rng;
use smallvec::SmallVec;
use std::time::Duration;

pub type BurstId = u64;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Particle {
    pub id: u64,
    pub burst: BurstId,
    pub position: Vec2,
    pub velocity: Vec2,
}

/// Short-lived particles spawned by tile clicks, advanced on a fixed tick.
#[derive(Debug)]
pub struct BurstField {
    particles: Vec<Particle>,
    spawned_at: FnvHashMap<BurstId, Instant>,
    next_burst: BurstId,
    next_particle: u64,
    viewport_height: f32,
}

impl BurstField {
    pub fn new(viewport_height: f32) -> Self {
        Self {
            particles: Vec::new(),
            spawned_at: FnvHashMap::default(),
            next_burst: 0,
            next_particle: 0,
            viewport_height,
        }
    }

    pub fn set_viewport_height(&mut self, height: f32) {
        self.viewport_height = height;
    }

    #[inline]
    pub fn particles(&self) -> &[Particle] {
        &self.particles
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.particles.is_empty()
    }

    /// True while any particle of `burst` is still alive.
    #[inline]
    pub fn is_live(&self, burst: BurstId) -> bool {
        self.spawned_at.contains_key(&burst)
    }

    pub fn spawn<R: Rng + ?Sized>(&mut self, at: Vec2, now: Instant, rng: &mut R) -> BurstId {
        let burst = self.next_burst;
        self.next_burst += 1;
        let batch = self.make_batch(burst, at, rng);
        self.particles.extend(batch);
        self.spawned_at.insert(burst, now);
        burst
    }

    fn make_batch<R: Rng + ?Sized>(
        &mut self,
        burst: BurstId,
        at: Vec2,
        rng: &mut R,
    ) -> SmallVec<[Particle; BURST_PARTICLES]> {
        (0..BURST_PARTICLES)
            .map(|_| {
                let id = self.next_particle;
                self.next_particle += 1;
                Particle {
                    id,
                    burst,
                    position: at,
                    velocity: Vec2::new(
                        rng.gen_range(-BURST_MAX_SPEED..=BURST_MAX_SPEED),
                        rng.gen_range(-BURST_MAX_SPEED..=BURST_MAX_SPEED),
                    ),
                }
            })
            .collect()
    }

    /// One 16ms tick: integrate, apply gravity, drop particles below the cull line.
    pub fn step(&mut self) {
        let cull_y = self.viewport_height + BURST_CULL_MARGIN;
        for p in &mut self.particles {
            p.position += p.velocity;
            p.velocity.y += BURST_GRAVITY;
        }
        self.particles.retain(|p| p.position.y <= cull_y);
        self.forget_finished();
    }

    /// Removes every particle of `burst`.
    pub fn expire(&mut self, burst: BurstId) {
        self.particles.retain(|p| p.burst != burst);
        self.spawned_at.remove(&burst);
    }

    /// Drops every burst that has lived for its full lifetime; returns how
    /// many were dropped.
    pub fn expire_due(&mut self, now: Instant) -> usize {
        let lifetime = Duration::from_millis(BURST_LIFETIME_MS as u64);
        let due: SmallVec<[BurstId; 4]> = self
            .spawned_at
            .iter()
            .filter(|(_, t0)| now > **t0 && now - **t0 >= lifetime)
            .map(|(id, _)| *id)
            .collect();
        for id in &due {
            self.expire(*id);
        }
        due.len()
    }

    /// Age of `burst` as a fraction of its lifetime, clamped to [0, 1].
    pub fn age_fraction(&self, burst: BurstId, now: Instant) -> f32 {
        let lifetime = Duration::from_millis(BURST_LIFETIME_MS as u64);
        match self.spawned_at.get(&burst) {
            Some(t0) if now > *t0 => {
                ((now - *t0).as_secs_f32() / lifetime.as_secs_f32()).clamp(0.0, 1.0)
            }
            Some(_) => 0.0,
            None => 1.0,
        }
    }

    fn forget_finished(&mut self) {
        let particles = &self.particles;
        self.spawned_at
            .retain(|id, _| particles.iter().any(|p| p.burst == *id));
    }
}
