use crate::bus::{CloseBus, Subscription};
use crate::errors::SwipeoutError;
use crate::gesture::DragRecognizer;
use crate::options::SwipeoutOptions;
use crate::panel::{Panel, PanelCommand, PanelState};
use crate::shift::{action_shifts, ActionGroups, ActionShift};
use crate::types::{Gesture, Side};
use egui::emath::easing;
use egui::Response;
use std::collections::VecDeque;
use tracing::{debug, trace};

#[derive(Debug, Clone, Copy, PartialEq)]
struct Transition {
    from: f32,
    to: f32,
    elapsed: f32,
    duration: f32,
}

impl Transition {
    fn new(from: f32, to: f32, duration: f32) -> Self {
        Self {
            from,
            to,
            elapsed: 0.0,
            duration,
        }
    }

    fn progress(&self) -> f32 {
        if self.duration <= 0.0 {
            1.0
        } else {
            (self.elapsed / self.duration).clamp(0.0, 1.0)
        }
    }

    fn value(&self) -> f32 {
        egui::lerp(self.from..=self.to, easing::cubic_out(self.progress()))
    }

    fn is_finished(&self) -> bool {
        self.progress() >= 1.0
    }
}

/// A swipeable row attached to a host: its state machine plus everything it
/// holds while attached, namely the close channel subscription, the gesture
/// recognizer and the running transition. Dropping it releases them all.
pub struct Swipeout {
    panel: Panel,
    bus: CloseBus,
    subscription: Subscription,
    recognizer: Option<DragRecognizer>,
    transition: Option<Transition>,
    displayed: f32,
    groups: ActionGroups,
}

impl Swipeout {
    pub fn attach(bus: &CloseBus, options: SwipeoutOptions) -> Result<Self, SwipeoutError> {
        options.validate()?;
        let subscription = bus.subscribe();
        debug!("swipeout {} attached", subscription.id());

        Ok(Self {
            panel: Panel::new(options),
            bus: bus.clone(),
            subscription,
            recognizer: Some(DragRecognizer::new()),
            transition: None,
            displayed: 0.0,
            groups: ActionGroups::default(),
        })
    }

    pub fn detach(self) {}

    pub fn id(&self) -> u64 {
        self.subscription.id()
    }

    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    pub fn state(&self) -> PanelState {
        self.panel.state()
    }

    pub fn options(&self) -> &SwipeoutOptions {
        self.panel.options()
    }

    /// Offset the surface is drawn at this frame.
    pub fn displayed_offset(&self) -> f32 {
        self.displayed
    }

    pub fn groups(&self) -> &ActionGroups {
        &self.groups
    }

    /// Records the latest measurement of the action groups.
    pub fn set_groups(&mut self, groups: ActionGroups) {
        self.groups = groups;
    }

    pub fn shifts(&self) -> Vec<ActionShift> {
        action_shifts(self.displayed, &self.groups, self.panel.shift_lock())
    }

    pub fn is_recognizer_attached(&self) -> bool {
        self.recognizer.is_some()
    }

    /// Dragging or animating, so the host should keep repainting.
    pub fn is_active(&self) -> bool {
        self.panel.is_dragging() || self.transition.is_some()
    }

    /// Feeds the row's interaction into the recognizer, if there is one.
    pub fn recognize(&mut self, response: &Response) -> Vec<PanelCommand> {
        let Some(recognizer) = self.recognizer.as_mut() else {
            return vec![];
        };
        match recognizer.recognize(response) {
            Some(gesture) => self.handle_gesture(gesture),
            None => vec![],
        }
    }

    /// Handles one recognized gesture sample. Samples arriving while the
    /// recognizer is torn down are dropped.
    pub fn handle_gesture(&mut self, gesture: Gesture) -> Vec<PanelCommand> {
        if self.recognizer.is_none() {
            trace!("gesture dropped, recognizer detached: {gesture:?}");
            return vec![];
        }

        let widths = self.groups.widths();
        let commands = match gesture {
            Gesture::Start(sample) => self.panel.on_gesture_start(sample),
            Gesture::Move(sample) => self.panel.on_gesture_move(sample.delta_x, widths),
            Gesture::End(sample) => self.panel.on_gesture_end(sample.delta_x, widths),
        };
        self.apply(commands)
    }

    /// Reacts to close signals published since the last poll.
    pub fn poll_close(&mut self) -> Vec<PanelCommand> {
        let commands = self.take_close_signals();
        self.apply(commands)
    }

    /// Steps the running transition by `dt` seconds, completing it when due.
    pub fn advance(&mut self, dt: f32) -> Vec<PanelCommand> {
        let Some(transition) = self.transition.as_mut() else {
            return vec![];
        };

        transition.elapsed += dt.max(0.0);
        self.displayed = transition.value();
        if !transition.is_finished() {
            return vec![];
        }

        self.displayed = transition.to;
        self.transition = None;
        let commands = self.panel.on_transition_end();
        self.apply(commands)
    }

    pub fn close(&mut self) -> Vec<PanelCommand> {
        let commands = self.panel.request_transition(0.0);
        self.apply(commands)
    }

    /// Animates to the full reveal of `side`. Does nothing for an empty group.
    pub fn open(&mut self, side: Side) -> Vec<PanelCommand> {
        let commands = self.panel.request_reveal(side, self.groups.widths());
        self.apply(commands)
    }

    fn take_close_signals(&mut self) -> Vec<PanelCommand> {
        if self.subscription.take_pending() {
            self.panel.on_close_broadcast()
        } else {
            vec![]
        }
    }

    // Carries out panel commands in order and returns all that were applied,
    // including those triggered by our own broadcast.
    fn apply(&mut self, commands: Vec<PanelCommand>) -> Vec<PanelCommand> {
        let mut queue = VecDeque::from(commands);
        let mut applied = Vec::with_capacity(queue.len());

        while let Some(command) = queue.pop_front() {
            match command {
                PanelCommand::SetOffset(offset) => {
                    self.displayed = offset;
                }
                PanelCommand::Animate { to } => {
                    let duration = self.panel.options().animation_time;
                    self.transition = Some(Transition::new(self.displayed, to, duration));
                }
                PanelCommand::DetachRecognizer => {
                    self.recognizer = None;
                }
                PanelCommand::AttachRecognizer => {
                    self.recognizer = Some(DragRecognizer::new());
                }
                PanelCommand::BroadcastClose => {
                    self.bus.publish();
                    // our own copy is delivered synchronously
                    queue.extend(self.take_close_signals());
                }
            }
            applied.push(command);
        }

        applied
    }
}

impl Drop for Swipeout {
    fn drop(&mut self) {
        debug!("swipeout {} detached", self.subscription.id());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::shift::ActionGroup;
    use crate::types::GestureSample;

    fn groups() -> ActionGroups {
        ActionGroups::new(
            ActionGroup::from_widths([40.0, 40.0]),
            ActionGroup::from_widths([60.0]),
        )
    }

    fn attached(bus: &CloseBus) -> Swipeout {
        let mut swipeout = Swipeout::attach(bus, SwipeoutOptions::default()).unwrap();
        swipeout.set_groups(groups());
        swipeout
    }

    fn drag(swipeout: &mut Swipeout, delta_x: f32) -> Vec<PanelCommand> {
        let mut applied = swipeout.handle_gesture(Gesture::Start(GestureSample::horizontal(
            delta_x.signum(),
        )));
        applied.extend(swipeout.handle_gesture(Gesture::Move(GestureSample::horizontal(delta_x))));
        applied.extend(swipeout.handle_gesture(Gesture::End(GestureSample::horizontal(delta_x))));
        applied
    }

    fn count_animations(commands: &[PanelCommand]) -> usize {
        commands
            .iter()
            .filter(|c| matches!(c, PanelCommand::Animate { .. }))
            .count()
    }

    #[test]
    fn attach_rejects_invalid_options() {
        let bus = CloseBus::new();
        let options = SwipeoutOptions::default().threshold(-1.0);
        assert!(matches!(
            Swipeout::attach(&bus, options),
            Err(SwipeoutError::InvalidThreshold(_))
        ));
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn detach_releases_the_subscription() {
        let bus = CloseBus::new();
        let swipeout = attached(&bus);
        assert_eq!(bus.subscriber_count(), 1);
        swipeout.detach();
        assert_eq!(bus.subscriber_count(), 0);
    }

    #[test]
    fn release_animates_to_the_terminal_offset() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        drag(&mut swipeout, 50.0);

        assert_eq!(swipeout.state(), PanelState::Transitioning);
        assert!(!swipeout.is_recognizer_attached());
        assert!(swipeout.is_active());

        assert!(swipeout.advance(0.1).is_empty());
        let midway = swipeout.displayed_offset();
        assert!(midway > 50.0 && midway < 80.0);

        assert_eq!(swipeout.advance(1.0), vec![PanelCommand::AttachRecognizer]);
        assert_eq!(swipeout.displayed_offset(), 80.0);
        assert_eq!(swipeout.state(), PanelState::RevealedLeft);
        assert!(swipeout.is_recognizer_attached());
        assert!(!swipeout.is_active());
    }

    #[test]
    fn tiny_release_redraws_at_rest() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        swipeout.handle_gesture(Gesture::Start(GestureSample::horizontal(0.0)));
        swipeout.handle_gesture(Gesture::Move(GestureSample::horizontal(0.4)));
        assert_eq!(swipeout.displayed_offset(), 0.4);

        let applied = swipeout.handle_gesture(Gesture::End(GestureSample::horizontal(0.4)));
        assert_eq!(applied, vec![PanelCommand::SetOffset(0.0)]);
        assert_eq!(swipeout.displayed_offset(), swipeout.panel().offset());
        assert_eq!(swipeout.displayed_offset(), 0.0);
        assert_eq!(swipeout.state(), PanelState::Rest);
        assert!(swipeout.is_recognizer_attached());
        assert!(!swipeout.is_active());
    }

    #[test]
    fn input_is_locked_out_during_transitions() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        drag(&mut swipeout, 50.0);

        let applied = swipeout.handle_gesture(Gesture::Start(GestureSample::horizontal(-1.0)));
        assert!(applied.is_empty());
        assert!(!swipeout.panel().is_dragging());
    }

    #[test]
    fn starting_a_drag_closes_the_other_open_panel() {
        let bus = CloseBus::new();
        let mut a = attached(&bus);
        let mut b = attached(&bus);

        drag(&mut a, 50.0);
        a.advance(1.0);
        assert_eq!(a.state(), PanelState::RevealedLeft);
        // a's own broadcast was absorbed by a while it was dragging
        assert!(a.poll_close().is_empty());

        let applied = b.handle_gesture(Gesture::Start(GestureSample::horizontal(-1.0)));
        assert_eq!(applied, vec![PanelCommand::BroadcastClose]);
        assert!(b.panel().is_dragging());
        // whatever b had pending was taken while it was already dragging
        b.poll_close();
        assert!(b.panel().is_dragging());

        let applied = a.poll_close();
        assert_eq!(count_animations(&applied), 1);
        assert_eq!(a.panel().transition_target(), Some(0.0));
        a.advance(1.0);
        assert_eq!(a.state(), PanelState::Rest);
        assert_eq!(a.displayed_offset(), 0.0);
    }

    #[test]
    fn repeated_close_signals_request_one_transition() {
        let bus = CloseBus::new();
        let mut a = attached(&bus);
        drag(&mut a, -50.0);
        a.advance(1.0);
        assert_eq!(a.state(), PanelState::RevealedRight);

        bus.publish();
        bus.publish();
        bus.publish();
        let applied = a.poll_close();
        assert_eq!(count_animations(&applied), 1);
    }

    #[test]
    fn vertical_gesture_still_closes_others() {
        let bus = CloseBus::new();
        let mut a = attached(&bus);
        let mut b = attached(&bus);
        drag(&mut a, 50.0);
        a.advance(1.0);
        a.poll_close();

        b.handle_gesture(Gesture::Start(GestureSample::new(0.0, 40.0)));
        assert!(!b.panel().is_dragging());
        assert_eq!(b.displayed_offset(), 0.0);

        a.poll_close();
        a.advance(1.0);
        assert_eq!(a.state(), PanelState::Rest);
    }

    #[test]
    fn close_mid_opening_retargets() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        drag(&mut swipeout, 50.0);
        swipeout.advance(0.05);

        let applied = swipeout.close();
        assert_eq!(applied, vec![PanelCommand::Animate { to: 0.0 }]);
        swipeout.advance(1.0);
        assert_eq!(swipeout.displayed_offset(), 0.0);
        assert_eq!(swipeout.state(), PanelState::Rest);
        assert!(swipeout.is_recognizer_attached());
    }

    #[test]
    fn open_and_close_programmatically() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        swipeout.open(Side::Right);
        swipeout.advance(1.0);
        assert_eq!(swipeout.displayed_offset(), -60.0);

        swipeout.close();
        swipeout.advance(1.0);
        assert_eq!(swipeout.state(), PanelState::Rest);
    }

    #[test]
    fn open_ignores_an_empty_group() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        swipeout.set_groups(ActionGroups::new(ActionGroup::default(), groups().right));
        assert!(swipeout.open(Side::Left).is_empty());
        assert_eq!(swipeout.state(), PanelState::Rest);
    }

    #[test]
    fn shifts_follow_the_displayed_offset() {
        let bus = CloseBus::new();
        let mut swipeout = attached(&bus);
        swipeout.open(Side::Left);
        swipeout.advance(1.0);
        let shifts = swipeout.shifts();
        assert!(shifts
            .iter()
            .filter(|s| s.side == Side::Left)
            .all(|s| s.progress == 1.0));
        assert!(shifts
            .iter()
            .filter(|s| s.side == Side::Right)
            .all(|s| s.progress == 0.0));
    }

    #[test]
    fn zero_animation_time_completes_on_the_next_step() {
        let bus = CloseBus::new();
        let options = SwipeoutOptions::default().animation_time(0.0);
        let mut swipeout = Swipeout::attach(&bus, options).unwrap();
        swipeout.set_groups(groups());
        drag(&mut swipeout, 50.0);
        assert_eq!(swipeout.advance(0.0), vec![PanelCommand::AttachRecognizer]);
        assert_eq!(swipeout.displayed_offset(), 80.0);
    }
}
