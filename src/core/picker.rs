use super::constants::PICKER_RADIUS;
use super::layout::canvas_slot;
use super::pop::Pop;
use glam::Vec2;

/// Which item the detail dialog shows, and whether it is open.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Selection {
    item: Option<usize>,
    open: bool,
}

impl Selection {
    pub fn open(&mut self, item: usize) {
        self.item = Some(item);
        self.open = true;
    }

    /// Keeps the last item so the dialog content survives a close animation.
    pub fn close(&mut self) {
        self.open = false;
    }

    #[inline]
    pub fn item(&self) -> Option<usize> {
        self.item
    }

    #[inline]
    pub fn is_open(&self) -> bool {
        self.open
    }
}

#[derive(Clone, Debug)]
pub struct PickerBubble {
    pub center: Vec2,
    pub radius: f32,
    /// Index into the section's item list.
    pub item: usize,
    pub pop: Pop,
}

impl PickerBubble {
    #[inline]
    pub fn contains(&self, point: Vec2) -> bool {
        self.center.distance(point) < self.radius
    }
}

/// Canvas layout of the experience picker: one fixed bubble per item.
#[derive(Clone, Debug, Default)]
pub struct BubblePicker {
    pub bubbles: Vec<PickerBubble>,
    width: f32,
    height: f32,
}

impl BubblePicker {
    pub fn new(item_count: usize, width: f32, height: f32) -> Self {
        let bubbles = (0..item_count)
            .map(|i| PickerBubble {
                center: canvas_slot(i, width, height),
                radius: PICKER_RADIUS,
                item: i,
                pop: Pop::new(PICKER_RADIUS),
            })
            .collect();
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

    /// Re-derives slot centers for the new surface size.
    pub fn resize(&mut self, width: f32, height: f32) {
        self.width = width;
        self.height = height;
        for (i, b) in self.bubbles.iter_mut().enumerate() {
            b.center = canvas_slot(i, width, height);
        }
    }

    pub fn step(&mut self) {
        for b in &mut self.bubbles {
            b.pop.advance(&mut b.radius);
        }
    }

    /// Pops the idle bubbles under `point`; returns the item of the last one
    /// hit, which becomes the selection.
    pub fn click(&mut self, point: Vec2) -> Option<usize> {
        let mut hit = None;
        for b in &mut self.bubbles {
            if !b.pop.is_popping() && b.contains(point) && b.pop.start() {
                hit = Some(b.item);
            }
        }
        hit
    }
}
