use super::color::{self, Rgba};
use super::constants::{
    FIELD_PALETTE, FIELD_RADIUS_MIN, FIELD_RADIUS_SPAN, FIELD_SPEED_SPAN_X, FIELD_SPEED_SPAN_Y,
};
use super::pop::Pop;
use glam::Vec2;
use rand::Rng;

#[derive(Clone, Debug)]
pub struct Bubble {
    pub position: Vec2,
    pub velocity: Vec2,
    pub radius: f32,
    pub color: Rgba,
    pub pop: Pop,
}

impl Bubble {
    pub fn new(position: Vec2, velocity: Vec2, radius: f32, color: Rgba) -> Self {
        Self {
            position,
            velocity,
            radius,
            color,
            pop: Pop::new(radius),
        }
    }

    /// Random bubble inside a `width` x `height` viewport. A zero-sized
    /// viewport collapses positions to the origin.
    pub fn random<R: Rng + ?Sized>(rng: &mut R, width: f32, height: f32) -> Self {
        let position = Vec2::new(rng.gen::<f32>() * width, rng.gen::<f32>() * height);
        let radius = FIELD_RADIUS_MIN + rng.gen::<f32>() * FIELD_RADIUS_SPAN;
        let velocity = Vec2::new(
            (rng.gen::<f32>() - 0.5) * FIELD_SPEED_SPAN_X,
            (rng.gen::<f32>() - 0.5) * FIELD_SPEED_SPAN_Y,
        );
        Self::new(position, velocity, radius, color::pick(&FIELD_PALETTE, rng))
    }

    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.position.distance(point) < self.radius
    }

    // Flip only while moving outward so an edge contact reverses exactly once.
    fn reflect(&mut self, width: f32, height: f32) {
        let (p, r) = (self.position, self.radius);
        if (p.x + r > width && self.velocity.x > 0.0) || (p.x - r < 0.0 && self.velocity.x < 0.0) {
            self.velocity.x = -self.velocity.x;
        }
        if (p.y + r > height && self.velocity.y > 0.0) || (p.y - r < 0.0 && self.velocity.y < 0.0) {
            self.velocity.y = -self.velocity.y;
        }
    }
}

/// Background bubbles drifting inside the viewport.
#[derive(Clone, Debug, Default)]
pub struct BubbleField {
    pub bubbles: Vec<Bubble>,
    width: f32,
    height: f32,
}

impl BubbleField {
    pub fn new<R: Rng + ?Sized>(count: usize, width: f32, height: f32, rng: &mut R) -> Self {
        let bubbles = (0..count)
            .map(|_| Bubble::random(rng, width, height))
            .collect();
        Self {
            bubbles,
            width,
            height,
        }
    }

    pub fn from_bubbles(bubbles: Vec<Bubble>, width: f32, height: f32) -> Self {
        Self {
            bubbles,
            width,
            height,
        }
    }

    #[inline]
    pub fn size(&self) -> (f32, f32) {
        (self.width, self.height)
    }

    /// New bounds apply from the next step; positions are left as they are.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
    }

    pub fn step(&mut self) {
        for b in &mut self.bubbles {
            if b.pop.is_popping() {
                b.pop.advance(&mut b.radius);
                continue;
            }
            b.position += b.velocity;
            b.reflect(self.width, self.height);
        }
    }

    /// Pops every idle bubble under `point`; returns how many started popping.
    pub fn click(&mut self, point: Vec2) -> usize {
        let mut popped = 0;
        for b in &mut self.bubbles {
            if !b.pop.is_popping() && b.contains(point) && b.pop.start() {
                popped += 1;
            }
        }
        popped
    }
}
