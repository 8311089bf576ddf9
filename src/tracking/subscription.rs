/// Handle returned by every listener registration.
///
/// Holds the teardown for whatever was registered (an event listener, an
/// observer) and runs it exactly once: either through [`Subscription::dispose`]
/// or when the handle is dropped, whichever comes first.
#[must_use = "dropping a Subscription immediately removes the listener"]
pub struct Subscription {
    teardown: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    pub fn new(teardown: impl FnOnce() + 'static) -> Self {
        Self {
            teardown: Some(Box::new(teardown)),
        }
    }

    pub fn dispose(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(teardown) = self.teardown.take() {
            teardown();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        self.release();
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.teardown.is_some())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::Cell;
    use std::rc::Rc;

    fn counting() -> (Rc<Cell<u32>>, Subscription) {
        let runs = Rc::new(Cell::new(0));
        let counter = runs.clone();
        let subscription = Subscription::new(move || counter.set(counter.get() + 1));
        (runs, subscription)
    }

    #[test]
    fn dispose_runs_teardown_once() {
        let (runs, subscription) = counting();
        subscription.dispose();
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn drop_runs_teardown() {
        let (runs, subscription) = counting();
        assert_eq!(runs.get(), 0);
        drop(subscription);
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn teardown_runs_when_scope_unwinds() {
        let (runs, subscription) = counting();
        let result = std::panic::catch_unwind(std::panic::AssertUnwindSafe(move || {
            let _held = subscription;
            panic!("setup failed");
        }));
        assert!(result.is_err());
        assert_eq!(runs.get(), 1);
    }

    #[test]
    fn debug_shows_whether_teardown_is_pending() {
        let (_, subscription) = counting();
        assert_eq!(format!("{:?}", subscription), "Subscription { active: true }");
    }
}
