use crate::types::{Gesture, GestureSample};
use egui::{Pos2, Response};

/// Turns egui drag interaction on a row into start, move and end samples with
/// travel measured from the press origin.
///
/// A recognizer only reports moves and the end of drags it saw start, so one
/// created in the middle of a drag stays silent until the next press.
#[derive(Debug, Clone, Default)]
pub struct DragRecognizer {
    origin: Option<Pos2>,
    last: GestureSample,
}

impl DragRecognizer {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_tracking(&self) -> bool {
        self.origin.is_some()
    }

    pub fn recognize(&mut self, response: &Response) -> Option<Gesture> {
        if response.drag_started() {
            let (press_origin, pointer) = response
                .ctx
                .input(|i| (i.pointer.press_origin(), i.pointer.interact_pos()));
            let origin = press_origin.or(pointer)?;
            self.origin = Some(origin);
            self.last = sample(origin, pointer.unwrap_or(origin));
            return Some(Gesture::Start(self.last));
        }

        let origin = self.origin?;

        if response.drag_stopped() || !response.dragged() {
            self.origin = None;
            return Some(Gesture::End(self.last));
        }

        let pointer = response.ctx.input(|i| i.pointer.interact_pos())?;
        let next = sample(origin, pointer);
        if next == self.last {
            return None;
        }
        self.last = next;
        Some(Gesture::Move(next))
    }
}

fn sample(origin: Pos2, pointer: Pos2) -> GestureSample {
    let delta = pointer - origin;
    GestureSample::new(delta.x, delta.y)
}
