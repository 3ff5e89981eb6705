//! Observable<T> - a single-threaded value with change notifications
//!
//! Screens keep their view state in an `Observable` and register a rendering
//! subscriber when they are constructed. Delegates mutate the state through
//! `update()`, which notifies every listener synchronously on the UI thread.
//!
//! # Example
//!
//! ```rust
//! use lingodeck::observable::Observable;
//! use std::cell::Cell;
//! use std::rc::Rc;
//!
//! let counter = Observable::new(0);
//! let seen = Rc::new(Cell::new(0));
//! let seen_clone = seen.clone();
//! let _sub = counter.subscribe(move |value| seen_clone.set(*value));
//!
//! counter.update(|value| *value += 1);
//! assert_eq!(seen.get(), 1);
//! ```

use std::cell::{Cell, Ref, RefCell};
use std::fmt;
use std::rc::{Rc, Weak};

type Listener<T> = Rc<dyn Fn(&T)>;

struct ObservableInner<T> {
    value: RefCell<T>,
    version: Cell<u64>,
    next_listener_id: Cell<u64>,
    listeners: RefCell<Vec<(u64, Listener<T>)>>,
}

/// Shared handle to an observable value.
///
/// Cloning the handle shares the underlying value and listener list.
pub struct Observable<T> {
    inner: Rc<ObservableInner<T>>,
}

impl<T> Clone for Observable<T> {
    fn clone(&self) -> Self {
        Self {
            inner: Rc::clone(&self.inner),
        }
    }
}

impl<T: fmt::Debug> fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Observable")
            .field("value", &*self.inner.value.borrow())
            .field("version", &self.inner.version.get())
            .finish()
    }
}

impl<T: 'static> Observable<T> {
    /// Create a new observable holding `value`.
    pub fn new(value: T) -> Self {
        Self {
            inner: Rc::new(ObservableInner {
                value: RefCell::new(value),
                version: Cell::new(0),
                next_listener_id: Cell::new(0),
                listeners: RefCell::new(Vec::new()),
            }),
        }
    }

    /// Borrow the current value.
    ///
    /// The borrow must be released before calling `update()`.
    pub fn get(&self) -> Ref<'_, T> {
        self.inner.value.borrow()
    }

    /// Run `f` against the current value.
    pub fn with<R>(&self, f: impl FnOnce(&T) -> R) -> R {
        f(&self.inner.value.borrow())
    }

    /// Number of updates applied so far.
    pub fn version(&self) -> u64 {
        self.inner.version.get()
    }

    /// Mutate the value and notify listeners.
    ///
    /// Listeners run after the mutable borrow is released and receive a shared
    /// reference to the new value. A listener must not call `update()` on the
    /// same observable.
    pub fn update<R>(&self, mutator: impl FnOnce(&mut T) -> R) -> R {
        let result = {
            let mut value = self.inner.value.borrow_mut();
            mutator(&mut value)
        };
        self.inner.version.set(self.inner.version.get() + 1);
        self.notify();
        result
    }

    /// Replace the value and notify listeners.
    pub fn set(&self, value: T) {
        self.update(|current| *current = value);
    }

    /// Register a listener, called after every update.
    ///
    /// The listener stays registered until the returned `Subscription` is dropped.
    pub fn subscribe(&self, listener: impl Fn(&T) + 'static) -> Subscription {
        let id = self.inner.next_listener_id.get();
        self.inner.next_listener_id.set(id + 1);
        self.inner
            .listeners
            .borrow_mut()
            .push((id, Rc::new(listener)));

        let weak: Weak<ObservableInner<T>> = Rc::downgrade(&self.inner);
        Subscription::new(move || {
            if let Some(inner) = weak.upgrade() {
                inner.listeners.borrow_mut().retain(|(lid, _)| *lid != id);
            }
        })
    }

    /// Number of registered listeners.
    pub fn listener_count(&self) -> usize {
        self.inner.listeners.borrow().len()
    }

    fn notify(&self) {
        // Snapshot so listeners may subscribe or unsubscribe while we iterate.
        let listeners: Vec<Listener<T>> = self
            .inner
            .listeners
            .borrow()
            .iter()
            .map(|(_, l)| Rc::clone(l))
            .collect();
        let value = self.inner.value.borrow();
        for listener in listeners {
            listener(&value);
        }
    }
}

/// Guard for a registered listener. Dropping it unregisters the listener.
#[must_use = "dropping a Subscription unregisters its listener"]
pub struct Subscription {
    unsubscribe: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub(crate) fn new(unsubscribe: impl FnOnce() + 'static) -> Self {
        Self {
            unsubscribe: Some(Box::new(unsubscribe)),
        }
    }

    /// Unregister now instead of waiting for drop.
    pub fn cancel(mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(unsubscribe) = self.unsubscribe.take() {
            unsubscribe();
        }
    }
}

impl fmt::Debug for Subscription {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.unsubscribe.is_some())
            .finish()
    }
}

/// Shared "needs redraw" flag raised by rendering subscribers.
#[derive(Debug, Clone)]
pub struct RedrawHandle {
    dirty: Rc<Cell<bool>>,
}

impl Default for RedrawHandle {
    fn default() -> Self {
        Self::new()
    }
}

impl RedrawHandle {
    pub fn new() -> Self {
        Self {
            dirty: Rc::new(Cell::new(true)),
        }
    }

    /// Mark the UI as stale.
    pub fn request(&self) {
        self.dirty.set(true);
    }

    /// Return whether a redraw was requested and clear the flag.
    pub fn take(&self) -> bool {
        self.dirty.replace(false)
    }

    pub fn is_requested(&self) -> bool {
        self.dirty.get()
    }

    /// Subscribe this handle to an observable so every update requests a redraw.
    pub fn watch<T: 'static>(&self, observable: &Observable<T>) -> Subscription {
        let redraw = self.clone();
        observable.subscribe(move |_| redraw.request())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_update_notifies_listeners_with_new_value() {
        let observable = Observable::new(vec![1, 2]);
        let seen = Rc::new(RefCell::new(Vec::new()));
        let seen_clone = Rc::clone(&seen);
        let _sub = observable.subscribe(move |v: &Vec<i32>| seen_clone.borrow_mut().push(v.len()));

        observable.update(|v| v.push(3));
        observable.update(|v| v.clear());

        assert_eq!(*seen.borrow(), vec![3, 0]);
        assert_eq!(observable.version(), 2);
    }

    #[test]
    fn test_dropping_subscription_unregisters() {
        let observable = Observable::new(0);
        let calls = Rc::new(Cell::new(0));
        let calls_clone = Rc::clone(&calls);
        let sub = observable.subscribe(move |_| calls_clone.set(calls_clone.get() + 1));
        assert_eq!(observable.listener_count(), 1);

        observable.set(1);
        drop(sub);
        observable.set(2);

        assert_eq!(calls.get(), 1);
        assert_eq!(observable.listener_count(), 0);
    }

    #[test]
    fn test_subscription_outliving_observable_is_harmless() {
        let observable = Observable::new(0);
        let sub = observable.subscribe(|_| {});
        drop(observable);
        sub.cancel();
    }

    #[test]
    fn test_clones_share_state() {
        let a = Observable::new(String::from("Food"));
        let b = a.clone();
        b.set(String::from("Travel"));
        assert_eq!(*a.get(), "Travel");
    }

    #[test]
    fn test_redraw_handle_watch() {
        let observable = Observable::new(0);
        let redraw = RedrawHandle::new();
        assert!(redraw.take());
        assert!(!redraw.is_requested());

        let _sub = redraw.watch(&observable);
        observable.set(5);
        assert!(redraw.take());
        assert!(!redraw.take());
    }
}
