use crate::panel::PanelState;
use crate::shift::{ActionGroup, ActionGroups};
use crate::swipeout::Swipeout;
use crate::types::Side;
use egui::{Color32, FontId, Response, Sense, Ui, Vec2};

/// Longest frame step fed into a transition, so a stalled frame does not
/// skip the animation entirely.
const MAX_FRAME_STEP: f32 = 0.1;

#[derive(Debug, Clone)]
pub struct SwipeAction {
    pub label: String,
    pub fill: Color32,
    pub text_color: Color32,
}

impl SwipeAction {
    pub fn new(label: impl Into<String>, fill: Color32) -> Self {
        Self {
            label: label.into(),
            fill,
            text_color: Color32::WHITE,
        }
    }

    #[inline]
    pub fn text_color(mut self, color: Color32) -> Self {
        self.text_color = color;
        self
    }
}

pub struct SwipeoutResponse {
    pub response: Response,
    /// Side and index of the action clicked this frame.
    pub clicked: Option<(Side, usize)>,
}

pub struct SwipeoutView<'a> {
    pub(crate) swipeout: &'a mut Swipeout,
    pub(crate) left: Vec<SwipeAction>,
    pub(crate) right: Vec<SwipeAction>,
    pub(crate) font: FontId,
    pub(crate) padding: f32,
    pub(crate) content_fill: Option<Color32>,
}

impl<'a> SwipeoutView<'a> {
    pub fn new(swipeout: &'a mut Swipeout) -> Self {
        Self {
            swipeout,
            left: vec![],
            right: vec![],
            font: FontId::proportional(14.0),
            padding: 16.0,
            content_fill: None,
        }
    }

    #[inline]
    pub fn left_actions(mut self, actions: Vec<SwipeAction>) -> Self {
        self.left = actions;
        self
    }

    #[inline]
    pub fn right_actions(mut self, actions: Vec<SwipeAction>) -> Self {
        self.right = actions;
        self
    }

    #[inline]
    pub fn font(mut self, font: FontId) -> Self {
        self.font = font;
        self
    }

    #[inline]
    pub fn padding(mut self, padding: f32) -> Self {
        self.padding = padding;
        self
    }

    #[inline]
    pub fn content_fill(mut self, fill: Color32) -> Self {
        self.content_fill = Some(fill);
        self
    }

    pub fn show(mut self, ui: &mut Ui, add_contents: impl FnOnce(&mut Ui)) -> SwipeoutResponse {
        let size = Vec2::new(ui.available_width(), self.swipeout.options().row_height);
        let (rect, response) = ui.allocate_exact_size(size, Sense::click_and_drag());

        let groups = self.measure(ui);
        self.swipeout.set_groups(groups);

        // other rows may have started dragging since the last frame
        self.swipeout.poll_close();
        self.swipeout.recognize(&response);
        let dt = ui.input(|i| i.stable_dt).min(MAX_FRAME_STEP);
        self.swipeout.advance(dt);

        let layout = self.paint(ui, rect, add_contents);

        let mut clicked = None;
        if response.clicked() {
            if let Some(pos) = response.interact_pointer_pos() {
                clicked = layout.action_at(pos);
            }
            let open = matches!(
                self.swipeout.state(),
                PanelState::RevealedLeft | PanelState::RevealedRight
            );
            if clicked.is_some() || open {
                self.swipeout.close();
            }
        }

        if self.swipeout.is_active() {
            ui.ctx().request_repaint();
        }

        SwipeoutResponse { response, clicked }
    }

    fn measure(&self, ui: &Ui) -> ActionGroups {
        let widths = |actions: &[SwipeAction]| {
            let widths: Vec<f32> = ui.fonts(|f| {
                actions
                    .iter()
                    .map(|action| {
                        let galley = f.layout_no_wrap(
                            action.label.clone(),
                            self.font.clone(),
                            action.text_color,
                        );
                        galley.size().x + 2.0 * self.padding
                    })
                    .collect()
            });
            ActionGroup::from_widths(widths)
        };

        ActionGroups::new(widths(self.left.as_slice()), widths(self.right.as_slice()))
    }
}
