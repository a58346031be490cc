use std::collections::VecDeque;
use std::fmt;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::{Arc, Mutex};

use crate::model::Coords;
use crate::viewer::SharedViewer;

use super::util::lock;

#[derive(Clone)]
pub enum DisplayEvent {
    /// The stack committed a new current coordinate.
    StackPositionChanged(Coords),
    /// The host replaced the viewer object the stack draws into.
    NewViewer(SharedViewer),
}

impl fmt::Debug for DisplayEvent {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::StackPositionChanged(coords) => formatter
                .debug_tuple("StackPositionChanged")
                .field(coords)
                .finish(),
            Self::NewViewer(_) => formatter.debug_tuple("NewViewer").finish_non_exhaustive(),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = dyn FnMut(&DisplayEvent) + Send;

struct Subscriber {
    id: SubscriptionId,
    callback: Arc<Mutex<Listener>>,
}

/// Clears the dispatching flag even when a listener unwinds.
struct DispatchGuard<'a>(&'a AtomicBool);

impl Drop for DispatchGuard<'_> {
    fn drop(&mut self) {
        self.0.store(false, Ordering::Release);
    }
}

/// Synchronous publish/subscribe hub shared by a display and its listeners.
///
/// Events are delivered in posting order, and each event reaches listeners in
/// subscription order before the next event is delivered. A listener may post,
/// subscribe or unsubscribe from inside its callback; events posted that way
/// are queued behind the one being delivered.
#[derive(Default)]
pub struct EventBus {
    subscribers: Mutex<Vec<Subscriber>>,
    queue: Mutex<VecDeque<DisplayEvent>>,
    dispatching: AtomicBool,
    next_id: AtomicU64,
}

impl fmt::Debug for EventBus {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        formatter
            .debug_struct("EventBus")
            .field("subscribers", &lock(&self.subscribers).len())
            .field("queued", &lock(&self.queue).len())
            .finish()
    }
}

impl EventBus {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe(
        &self,
        listener: impl FnMut(&DisplayEvent) + Send + 'static,
    ) -> SubscriptionId {
        let id = SubscriptionId(self.next_id.fetch_add(1, Ordering::Relaxed));
        lock(&self.subscribers).push(Subscriber {
            id,
            callback: Arc::new(Mutex::new(listener)),
        });
        id
    }

    /// Returns false when `id` was not subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut subscribers = lock(&self.subscribers);
        let before = subscribers.len();
        subscribers.retain(|subscriber| subscriber.id != id);
        subscribers.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        lock(&self.subscribers).len()
    }

    pub fn post(&self, event: DisplayEvent) {
        lock(&self.queue).push_back(event);
        loop {
            if self.dispatching.swap(true, Ordering::AcqRel) {
                return;
            }
            {
                let _dispatch = DispatchGuard(&self.dispatching);
                loop {
                    let next = lock(&self.queue).pop_front();
                    let Some(event) = next else {
                        break;
                    };
                    self.deliver(&event);
                }
            }
            if lock(&self.queue).is_empty() {
                return;
            }
        }
    }

    fn deliver(&self, event: &DisplayEvent) {
        let callbacks = lock(&self.subscribers)
            .iter()
            .map(|subscriber| Arc::clone(&subscriber.callback))
            .collect::<Vec<_>>();
        for callback in callbacks {
            let mut listener = lock(&callback);
            (*listener)(event);
        }
    }
}
