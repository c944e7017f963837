use super::constants::{POP_DECAY, POP_FRAMES};

/// Shrink-and-reset animation shared by field and picker bubbles.
///
/// Idle until [`Pop::start`]; then each [`Pop::advance`] scales the radius by
/// `POP_DECAY` for `POP_FRAMES` frames, and the following advance restores the
/// base radius and returns to idle.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Pop {
    base_radius: f32,
    frames_left: Option<u32>,
}

impl Pop {
    pub fn new(base_radius: f32) -> Self {
        Self {
            base_radius,
            frames_left: None,
        }
    }

    #[inline]
    pub fn is_popping(&self) -> bool {
        self.frames_left.is_some()
    }

    /// Returns false (and changes nothing) when already popping.
    pub fn start(&mut self) -> bool {
        if self.is_popping() {
            return false;
        }
        self.frames_left = Some(POP_FRAMES);
        true
    }

    pub fn advance(&mut self, radius: &mut f32) {
        match self.frames_left {
            None => {}
            Some(0) => {
                *radius = self.base_radius;
                self.frames_left = None;
            }
            Some(left) => {
                *radius *= POP_DECAY;
                self.frames_left = Some(left - 1);
            }
        }
    }
}
