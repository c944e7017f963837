use gloo::render::{request_animation_frame, AnimationFrame};
use std::cell::RefCell;
use std::rc::Rc;

type Tick = Rc<RefCell<dyn FnMut()>>;
type Slot = Rc<RefCell<Option<AnimationFrame>>>;

/// A `requestAnimationFrame` loop that runs until dropped.
pub struct FrameLoop {
    slot: Slot,
}

pub fn start_loop(tick: impl FnMut() + 'static) -> FrameLoop {
    let slot: Slot = Rc::new(RefCell::new(None));
    let tick: Tick = Rc::new(RefCell::new(tick));
    schedule(&slot, &tick);
    FrameLoop { slot }
}

fn schedule(slot: &Slot, tick: &Tick) {
    let slot_next = slot.clone();
    let tick_next = tick.clone();
    let handle = request_animation_frame(move |_ts| {
        (tick_next.borrow_mut())();
        schedule(&slot_next, &tick_next);
    });
    *slot.borrow_mut() = Some(handle);
}

impl Drop for FrameLoop {
    fn drop(&mut self) {
        // Cancels the pending frame and breaks the slot <-> closure cycle.
        self.slot.borrow_mut().take();
    }
}
