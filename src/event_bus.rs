//! Application event bus.
//!
//! Services publish domain events (such as the active set changing) and
//! delegates subscribe to keep screen state in step. Delivery is synchronous
//! on the UI thread.

use crate::observable::Subscription;
use crate::services::set_store::SetInfo;
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::debug;

/// Events broadcast across screens.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AppEvent {
    /// The active set was switched.
    SetChanged(SetInfo),
}

type Handler = Rc<dyn Fn(&AppEvent)>;

#[derive(Default)]
struct BusInner {
    next_id: Cell<u64>,
    handlers: RefCell<Vec<(u64, Handler)>>,
}

/// Cheap-to-clone handle to the shared bus.
#[derive(Clone, Default)]
pub struct EventBus {
    inner: Rc<BusInner>,
}

impl std::fmt::Debug for EventBus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("EventBus")
            .field("subscribers", &self.subscriber_count())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    /// Deliver `event` to every current subscriber.
    pub fn publish(&self, event: &AppEvent) {
        let handlers: Vec<Handler> = self
            .inner
            .handlers
            .borrow()
            .iter()
            .map(|(_, h)| Rc::clone(h))
            .collect();
        debug!("Publishing {:?} to {} subscriber(s)", event, handlers.len());
        for handler in handlers {
            handler(event);
        }
    }

    /// Subscribe to all events. Dropping the returned guard unsubscribes.
    pub fn subscribe(&self, handler: impl Fn(&AppEvent) + 'static) -> Subscription {
        let id = self.inner.next_id.get();
        self.inner.next_id.set(id + 1);
        self.inner.handlers.borrow_mut().push((id, Rc::new(handler)));

        let weak = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.handlers.borrow_mut().retain(|(hid, _)| *hid != id);
            }
        })
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.handlers.borrow().len()
    }
}
