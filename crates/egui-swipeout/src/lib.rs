mod bus;
mod display;
mod elastic;
mod errors;
mod gesture;
mod options;
mod panel;
mod shift;
mod swipeout;
#[cfg(test)]
mod testing;
mod types;
mod view;

pub use bus::{CloseBus, CloseSignal, Subscription, CLOSE_TOPIC};
pub use elastic::{compress, elastic_offset};
pub use errors::SwipeoutError;
pub use gesture::DragRecognizer;
pub use options::{ElasticPolicy, SwipeoutOptions};
pub use panel::{Panel, PanelCommand, PanelState};
pub use shift::{
    action_shifts, reveal_progress, ActionGroup, ActionGroups, ActionShift, ItemLayout,
};
pub use swipeout::Swipeout;
pub use types::{Gesture, GestureSample, GroupWidths, Side};
pub use view::{SwipeAction, SwipeoutResponse, SwipeoutView};
