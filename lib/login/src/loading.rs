//! The loading flag that serializes submit and retry.
//!
//! Acquiring the flag hands out a [`LoadingGuard`]; the flag drops back to
//! `false` when the guard goes out of scope, on success, failure or early
//! return alike.

use std::fmt;
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};

type Observer = Arc<dyn Fn(bool) + Send + Sync>;

/// Shared "an operation is in flight" flag.
///
/// Clones share the same underlying state.
#[derive(Clone, Default)]
pub struct LoadingFlag {
    busy: Arc<AtomicBool>,
    observer: Option<Observer>,
}

impl LoadingFlag {
    /// Creates an idle flag.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Calls `observer` with the new value on every transition.
    ///
    /// The web layer uses this to mirror the flag into a reactive signal.
    #[must_use]
    pub fn with_observer(mut self, observer: impl Fn(bool) + Send + Sync + 'static) -> Self {
        self.observer = Some(Arc::new(observer));
        self
    }

    /// Whether an operation is in flight.
    #[must_use]
    pub fn is_set(&self) -> bool {
        self.busy.load(Ordering::Acquire)
    }

    /// Marks the flag busy, or returns `None` if it already is.
    #[must_use]
    pub fn try_acquire(&self) -> Option<LoadingGuard> {
        self.busy
            .compare_exchange(false, true, Ordering::AcqRel, Ordering::Acquire)
            .ok()?;
        self.notify(true);
        Some(LoadingGuard { flag: self.clone() })
    }

    fn release(&self) {
        self.busy.store(false, Ordering::Release);
        self.notify(false);
    }

    fn notify(&self, value: bool) {
        if let Some(observer) = &self.observer {
            observer(value);
        }
    }
}

impl fmt::Debug for LoadingFlag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LoadingFlag")
            .field("busy", &self.is_set())
            .field("observed", &self.observer.is_some())
            .finish()
    }
}

/// Holds the loading flag for the duration of one operation.
#[derive(Debug)]
#[must_use = "the flag is released as soon as the guard is dropped"]
pub struct LoadingGuard {
    flag: LoadingFlag,
}

impl Drop for LoadingGuard {
    fn drop(&mut self) {
        self.flag.release();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Mutex;

    #[test]
    fn guard_releases_on_drop() {
        let flag = LoadingFlag::new();
        assert!(!flag.is_set());

        let guard = flag.try_acquire().expect("idle flag");
        assert!(flag.is_set());

        drop(guard);
        assert!(!flag.is_set());
    }

    #[test]
    fn second_acquire_is_refused() {
        let flag = LoadingFlag::new();
        let _guard = flag.try_acquire().expect("idle flag");
        assert!(flag.try_acquire().is_none());
        assert!(flag.clone().try_acquire().is_none());
    }

    #[test]
    fn observer_sees_each_transition_once() {
        let seen = Arc::new(Mutex::new(Vec::new()));
        let sink = Arc::clone(&seen);
        let flag = LoadingFlag::new().with_observer(move |v| sink.lock().unwrap().push(v));

        {
            let _guard = flag.try_acquire().expect("idle flag");
            assert!(flag.try_acquire().is_none());
        }

        assert_eq!(*seen.lock().unwrap(), vec![true, false]);
    }
}
