//! Gesture-to-offset state machine of a single swipeable row.
//!
//! The panel never touches the screen, the recognizer or the close channel
//! itself. Every operation returns the [`PanelCommand`]s its owner has to carry
//! out, in order.


use crate::elastic::elastic_offset;
use crate::options::SwipeoutOptions;
use crate::types::{same_offset, GestureSample, GroupWidths, Side};
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PanelState {
    Rest,
    Dragging,
    RevealedLeft,
    RevealedRight,
    Transitioning,
}

#[derive(Debug, Clone, PartialEq)]
pub enum PanelCommand {
    /// Move the surface to this offset immediately.
    SetOffset(f32),
    /// Animate the surface from where it is shown now to `to`, then report
    /// completion through [`Panel::on_transition_end`].
    Animate { to: f32 },
    /// Tear the gesture recognizer down until the transition completes.
    DetachRecognizer,
    /// Recreate the gesture recognizer.
    AttachRecognizer,
    /// Ask every panel on the close channel to close.
    BroadcastClose,
}

#[derive(Debug, Clone, Copy, PartialEq)]
enum Phase {
    Idle,
    Dragging,
    Transitioning { target: f32 },
}

#[derive(Debug, Clone)]
pub struct Panel {
    options: SwipeoutOptions,
    offset: f32,
    drag_origin: f32,
    revealed: Option<Side>,
    phase: Phase,
}

impl Panel {
    pub fn new(options: SwipeoutOptions) -> Self {
        Self {
            options,
            offset: 0.0,
            drag_origin: 0.0,
            revealed: None,
            phase: Phase::Idle,
        }
    }

    pub fn options(&self) -> &SwipeoutOptions {
        &self.options
    }

    /// Last offset written by a drag or reached by a transition.
    pub fn offset(&self) -> f32 {
        self.offset
    }

    pub fn drag_origin(&self) -> f32 {
        self.drag_origin
    }

    pub fn revealed_side(&self) -> Option<Side> {
        self.revealed
    }

    pub fn is_dragging(&self) -> bool {
        self.phase == Phase::Dragging
    }

    pub fn is_animating(&self) -> bool {
        matches!(self.phase, Phase::Transitioning { .. })
    }

    /// Where the running transition is headed.
    pub fn transition_target(&self) -> Option<f32> {
        match self.phase {
            Phase::Transitioning { target } => Some(target),
            _ => None,
        }
    }

    pub fn state(&self) -> PanelState {
        match self.phase {
            Phase::Dragging => PanelState::Dragging,
            Phase::Transitioning { .. } => PanelState::Transitioning,
            Phase::Idle => match Side::from_offset(self.offset) {
                None => PanelState::Rest,
                Some(Side::Left) => PanelState::RevealedLeft,
                Some(Side::Right) => PanelState::RevealedRight,
            },
        }
    }

    /// The only group allowed to slide in, when the drag direction is locked.
    pub fn shift_lock(&self) -> Option<Side> {
        if self.options.direction_lock {
            self.revealed
        } else {
            None
        }
    }

    pub fn on_gesture_start(&mut self, sample: GestureSample) -> Vec<PanelCommand> {
        if self.phase != Phase::Idle {
            trace!("gesture start ignored while {:?}", self.state());
            return vec![];
        }

        if !sample.is_finite() || sample.delta_y.abs() > self.options.vertical_tolerance {
            debug!(delta_y = sample.delta_y, "vertical gesture, drag ignored");
            return vec![PanelCommand::BroadcastClose];
        }

        self.drag_origin = self.offset;
        self.phase = Phase::Dragging;
        if same_offset(self.offset, 0.0) {
            self.revealed = Side::from_offset(sample.delta_x);
        }
        debug!(origin = self.drag_origin, revealed = ?self.revealed, "drag started");

        vec![PanelCommand::BroadcastClose]
    }

    pub fn on_gesture_move(&mut self, delta_x: f32, widths: GroupWidths) -> Vec<PanelCommand> {
        if !self.is_dragging() || !delta_x.is_finite() {
            return vec![];
        }

        // A drag that started without horizontal travel picks its side now.
        if self.revealed.is_none() && same_offset(self.drag_origin, 0.0) {
            self.revealed = Side::from_offset(delta_x);
        }

        let candidate = self.drag_origin + delta_x;
        self.offset = elastic_offset(candidate, self.revealed, widths, &self.options);
        trace!(candidate, offset = self.offset, "drag moved");

        vec![PanelCommand::SetOffset(self.offset)]
    }

    pub fn on_gesture_end(&mut self, delta_x: f32, widths: GroupWidths) -> Vec<PanelCommand> {
        if !self.is_dragging() {
            return vec![];
        }

        let delta_x = if delta_x.is_finite() { delta_x } else { 0.0 };
        let terminal = self.terminal_offset(delta_x, widths);
        debug!(delta_x, terminal, "drag released");

        self.phase = Phase::Idle;
        self.request_transition(terminal)
    }

    /// Resting offset a release with total horizontal travel `delta_x` snaps to.
    pub fn terminal_offset(&self, delta_x: f32, widths: GroupWidths) -> f32 {
        let threshold = self.options.threshold;
        let locked = self.options.direction_lock;
        let origin = self.drag_origin;
        let current = origin + delta_x;
        let (left, right) = (widths.left, widths.right);

        if left > 0.0 && same_offset(origin, left) && delta_x <= -threshold {
            if !locked && right > 0.0 && current <= -threshold {
                -right
            } else {
                0.0
            }
        } else if right > 0.0 && same_offset(origin, -right) && delta_x >= threshold {
            if !locked && left > 0.0 && current >= threshold {
                left
            } else {
                0.0
            }
        } else if same_offset(origin, 0.0) && current >= threshold && self.may_open(Side::Left) {
            left
        } else if same_offset(origin, 0.0) && current <= -threshold && self.may_open(Side::Right) {
            -right
        } else {
            nearest_rest(origin, widths)
        }
    }

    pub fn request_transition(&mut self, target: f32) -> Vec<PanelCommand> {
        if !target.is_finite() {
            return vec![];
        }

        match self.phase {
            Phase::Dragging => vec![],
            Phase::Transitioning { target: running } => {
                if same_offset(running, target) {
                    return vec![];
                }
                debug!(from = running, to = target, "transition retargeted");
                self.phase = Phase::Transitioning { target };
                vec![PanelCommand::Animate { to: target }]
            }
            Phase::Idle => {
                if same_offset(self.offset, target) {
                    let snapped = self.offset != target;
                    self.offset = target;
                    self.drag_origin = target;
                    self.revealed = Side::from_offset(target);
                    // close enough to skip the animation, but never left off rest
                    return if snapped {
                        vec![PanelCommand::SetOffset(target)]
                    } else {
                        vec![]
                    };
                }
                debug!(from = self.offset, to = target, "transition requested");
                self.phase = Phase::Transitioning { target };
                vec![
                    PanelCommand::DetachRecognizer,
                    PanelCommand::Animate { to: target },
                ]
            }
        }
    }

    /// Fully reveals `side`, if it has anything to reveal.
    pub fn request_reveal(&mut self, side: Side, widths: GroupWidths) -> Vec<PanelCommand> {
        if !widths.is_revealable(side) {
            return vec![];
        }
        self.request_transition(widths.reveal_offset(side))
    }

    pub fn on_transition_end(&mut self) -> Vec<PanelCommand> {
        let Phase::Transitioning { target } = self.phase else {
            return vec![];
        };

        self.phase = Phase::Idle;
        self.offset = target;
        self.drag_origin = target;
        self.revealed = Side::from_offset(target);
        debug!(offset = target, "transition finished");

        vec![PanelCommand::AttachRecognizer]
    }

    pub fn on_close_broadcast(&mut self) -> Vec<PanelCommand> {
        if self.is_dragging() {
            return vec![];
        }
        self.request_transition(0.0)
    }

    // Under a direction lock a drag never opens the side opposite to the one
    // it started revealing.
    fn may_open(&self, side: Side) -> bool {
        !self.options.direction_lock || self.revealed != Some(side.opposite())
    }
}

fn nearest_rest(offset: f32, widths: GroupWidths) -> f32 {
    [0.0, widths.left, -widths.right]
        .into_iter()
        .min_by(|a, b| (offset - a).abs().total_cmp(&(offset - b).abs()))
        .unwrap_or(0.0)
}
