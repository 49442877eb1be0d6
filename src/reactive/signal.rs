use std::cell::RefCell;
use std::fmt;
use std::rc::Rc;

use super::invalidation::request_frame;
use super::runtime::{notify_write, release_signal, with_runtime, SignalId};

struct SignalInner<T> {
    id: SignalId,
    value: RefCell<T>,
}

impl<T> Drop for SignalInner<T> {
    fn drop(&mut self) {
        release_signal(self.id);
    }
}

/// A reactive value owned by the UI thread.
///
/// Reading a signal inside an effect subscribes the effect; writing a new
/// value re-runs every subscribed effect and requests a frame.
pub struct Signal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for Signal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> Signal<T> {
    pub fn new(value: T) -> Self {
        let id = with_runtime(|rt| rt.allocate_signal());
        Self {
            inner: Rc::new(SignalInner {
                id,
                value: RefCell::new(value),
            }),
        }
    }

    /// Read-only handle sharing this signal's value
    pub fn read_only(&self) -> ReadSignal<T> {
        ReadSignal {
            inner: self.inner.clone(),
        }
    }

    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        with_runtime(|rt| rt.track_read(self.inner.id));
        f(&self.inner.value.borrow())
    }

    pub fn with_untracked<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone> Signal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn get_untracked(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: PartialEq> Signal<T> {
    /// Sets the signal's value, only triggering updates if the value actually changed.
    pub fn set(&self, value: T) {
        {
            let mut guard = self.inner.value.borrow_mut();
            if *guard == value {
                return;
            }
            *guard = value;
        }
        notify_write(self.inner.id);
        request_frame();
    }
}

impl<T: fmt::Debug> fmt::Debug for Signal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("Signal")
            .field(&*self.inner.value.borrow())
            .finish()
    }
}

/// Read-only handle to a signal.
pub struct ReadSignal<T> {
    inner: Rc<SignalInner<T>>,
}

impl<T> Clone for ReadSignal<T> {
    fn clone(&self) -> Self {
        Self {
            inner: self.inner.clone(),
        }
    }
}

impl<T> ReadSignal<T> {
    pub fn with<F, R>(&self, f: F) -> R
    where
        F: FnOnce(&T) -> R,
    {
        with_runtime(|rt| rt.track_read(self.inner.id));
        f(&self.inner.value.borrow())
    }
}

impl<T: Clone> ReadSignal<T> {
    pub fn get(&self) -> T {
        self.with(T::clone)
    }

    pub fn get_untracked(&self) -> T {
        self.inner.value.borrow().clone()
    }
}

impl<T: fmt::Debug> fmt::Debug for ReadSignal<T> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("ReadSignal")
            .field(&*self.inner.value.borrow())
            .finish()
    }
}

pub fn create_signal<T>(value: T) -> Signal<T> {
    Signal::new(value)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::reactive::create_effect;

    #[test]
    fn test_create_signal_and_get() {
        let signal = create_signal(42);
        assert_eq!(signal.get(), 42);
    }

    #[test]
    fn test_set_updates_value() {
        let signal = create_signal(10);
        signal.set(20);
        assert_eq!(signal.get(), 20);
    }

    #[test]
    fn test_with_for_borrowing() {
        let signal = create_signal(String::from("hello"));
        let length = signal.with(|s| s.len());
        assert_eq!(length, 5);
    }

    #[test]
    fn test_read_only_follows_writes() {
        let signal = create_signal(7);
        let read = signal.read_only();

        assert_eq!(read.get(), 7);
        signal.set(14);
        assert_eq!(read.get(), 14);
    }

    #[test]
    fn test_clone_shares_underlying_value() {
        let signal1 = create_signal(50);
        let signal2 = signal1.clone();

        signal1.set(75);
        assert_eq!(signal2.get(), 75);
    }

    #[test]
    fn test_set_only_notifies_on_change() {
        let signal = create_signal(5);
        let runs = Rc::new(RefCell::new(0));
        let _effect = {
            let signal = signal.clone();
            let runs = runs.clone();
            create_effect(move || {
                signal.get();
                *runs.borrow_mut() += 1;
            })
        };
        assert_eq!(*runs.borrow(), 1);

        signal.set(5); // No actual change
        assert_eq!(*runs.borrow(), 1);
        signal.set(10);
        assert_eq!(*runs.borrow(), 2);
    }
}
