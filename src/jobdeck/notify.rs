//! Change notification.
//!
//! After every successful write a store calls [`ChangeNotifier::notify`]. The
//! signal carries no payload; listeners re-read whatever they display. Clones
//! of a notifier share one listener list, so handing the same notifier to
//! several stores gives one window-wide "storage changed" signal.

use std::cell::{Cell, RefCell};
use std::rc::Rc;
use tracing::trace;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct SubscriptionId(u64);

type Listener = Rc<dyn Fn()>;

#[derive(Default)]
struct Listeners {
    next_id: Cell<u64>,
    entries: RefCell<Vec<(SubscriptionId, Listener)>>,
}

#[derive(Clone, Default)]
pub struct ChangeNotifier {
    inner: Rc<Listeners>,
}

impl ChangeNotifier {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn subscribe<F>(&self, listener: F) -> SubscriptionId
    where
        F: Fn() + 'static,
    {
        let id = SubscriptionId(self.inner.next_id.get());
        self.inner.next_id.set(id.0 + 1);
        self.inner
            .entries
            .borrow_mut()
            .push((id, Rc::new(listener)));
        id
    }

    /// Returns false if the id was not (or no longer) subscribed.
    pub fn unsubscribe(&self, id: SubscriptionId) -> bool {
        let mut entries = self.inner.entries.borrow_mut();
        let before = entries.len();
        entries.retain(|(sid, _)| *sid != id);
        entries.len() != before
    }

    pub fn subscriber_count(&self) -> usize {
        self.inner.entries.borrow().len()
    }

    pub fn notify(&self) {
        // Snapshot first: listeners re-enter stores and may (un)subscribe.
        let listeners: Vec<Listener> = self
            .inner
            .entries
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        trace!(listeners = listeners.len(), "storage changed");
        for listener in listeners {
            listener();
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn notifies_every_subscriber() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        for _ in 0..3 {
            let hits = Rc::clone(&hits);
            notifier.subscribe(move || hits.set(hits.get() + 1));
        }
        notifier.notify();
        assert_eq!(hits.get(), 3);
    }

    #[test]
    fn unsubscribed_listener_is_silent() {
        let notifier = ChangeNotifier::new();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        let id = notifier.subscribe(move || h.set(h.get() + 1));

        assert!(notifier.unsubscribe(id));
        assert!(!notifier.unsubscribe(id));
        notifier.notify();
        assert_eq!(hits.get(), 0);
        assert_eq!(notifier.subscriber_count(), 0);
    }

    #[test]
    fn clones_share_listeners() {
        let notifier = ChangeNotifier::new();
        let other = notifier.clone();
        let hits = Rc::new(Cell::new(0));
        let h = Rc::clone(&hits);
        other.subscribe(move || h.set(h.get() + 1));
        notifier.notify();
        assert_eq!(hits.get(), 1);
    }

    #[test]
    fn listener_may_subscribe_during_dispatch() {
        let notifier = ChangeNotifier::new();
        let inner = notifier.clone();
        notifier.subscribe(move || {
            inner.subscribe(|| {});
        });
        notifier.notify();
        assert_eq!(notifier.subscriber_count(), 2);
    }
}
