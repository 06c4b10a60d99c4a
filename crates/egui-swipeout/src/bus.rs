use parking_lot::Mutex;
use std::sync::mpsc::{self, Receiver, SyncSender, TrySendError};
use std::sync::Arc;
use tracing::{debug, trace};

/// Topic name of the close signal, for hosts that bridge it onto their own bus.
pub const CLOSE_TOPIC: &str = "swipeout:close";

/// Ask every open panel to return to rest. Carries no payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct CloseSignal;

#[derive(Default)]
struct BusInner {
    next_id: u64,
    subscribers: Vec<(u64, SyncSender<CloseSignal>)>,
}

/// Publish/subscribe channel panels use to close each other.
///
/// Panels hold no reference to one another: whoever starts a drag publishes,
/// everyone subscribed receives and reacts on its own.
#[derive(Clone, Default)]
pub struct CloseBus {
    inner: Arc<Mutex<BusInner>>,
}

impl CloseBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(&self) -> Subscription {
        // a panel only cares whether a signal is pending, so one slot is enough
        let (sender, receiver) = mpsc::sync_channel(1);
        let mut inner = self.inner.lock();
        let id = inner.next_id;
        inner.next_id += 1;
        inner.subscribers.push((id, sender));
        debug!("{CLOSE_TOPIC}: subscriber {id} registered");

        Subscription {
            id,
            receiver,
            bus: Arc::clone(&self.inner),
        }
    }

    /// Marks a signal pending for every live subscriber, the publisher
    /// included. Subscribers that have not taken the last one keep just that.
    pub fn publish(&self) {
        let mut inner = self.inner.lock();
        inner.subscribers.retain(|(_, sender)| {
            !matches!(sender.try_send(CloseSignal), Err(TrySendError::Disconnected(_)))
        });
        trace!(
            "{CLOSE_TOPIC}: published to {} subscribers",
            inner.subscribers.len()
        );
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.lock().subscribers.len()
    }
}

/// A registration on a [`CloseBus`], released when dropped.
pub struct Subscription {
    id: u64,
    receiver: Receiver<CloseSignal>,
    bus: Arc<Mutex<BusInner>>,
}

impl Subscription {
    pub fn id(&self) -> u64 {
        self.id
    }

    /// Takes the pending signal, if any was published since the last call.
    pub fn take_pending(&self) -> bool {
        self.receiver.try_recv().is_ok()
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        let id = self.id;
        self.bus
            .lock()
            .subscribers
            .retain(|(subscriber, _)| *subscriber != id);
        debug!("{CLOSE_TOPIC}: subscriber {id} released");
    }
}
