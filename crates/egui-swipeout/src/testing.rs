//! Headless egui frames with synthetic pointer input.

use egui::{
    CentralPanel, Context, Event, Modifiers, PointerButton, Pos2, RawInput, Rect, Ui, Vec2,
};

pub(crate) struct Frames {
    ctx: Context,
    time: f64,
}

impl Frames {
    pub fn new() -> Self {
        Self {
            ctx: Context::default(),
            time: 0.0,
        }
    }

    /// Runs one frame with `events`, laying out `add_contents` in a central panel.
    pub fn run(&mut self, events: Vec<Event>, mut add_contents: impl FnMut(&mut Ui)) {
        self.time += 1.0 / 60.0;
        let input = RawInput {
            screen_rect: Some(Rect::from_min_size(Pos2::ZERO, Vec2::new(400.0, 300.0))),
            time: Some(self.time),
            events,
            ..Default::default()
        };
        let _ = self.ctx.run(input, |ctx| {
            CentralPanel::default().show(ctx, |ui| add_contents(ui));
        });
    }
}

pub(crate) fn pointer_moved(pos: Pos2) -> Event {
    Event::PointerMoved(pos)
}

pub(crate) fn press(pos: Pos2) -> Vec<Event> {
    vec![pointer_moved(pos), button(pos, true)]
}

pub(crate) fn release(pos: Pos2) -> Vec<Event> {
    vec![pointer_moved(pos), button(pos, false)]
}

fn button(pos: Pos2, pressed: bool) -> Event {
    Event::PointerButton {
        pos,
        button: PointerButton::Primary,
        pressed,
        modifiers: Modifiers::default(),
    }
}
