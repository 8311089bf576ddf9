//! In-memory event sources for driving the trackers from unit tests.

use std::cell::{Cell, RefCell};
use std::collections::BTreeMap;
use std::rc::Rc;

use super::error::TrackerError;
use super::scroll::ScrollSource;
use super::section::{IntersectionReport, SectionId};
use super::subscription::Subscription;
use super::visibility::IntersectionSource;

type Listeners<T> = Rc<RefCell<BTreeMap<u32, Box<dyn FnMut(T)>>>>;

fn register<T: 'static>(listeners: &Listeners<T>, next_id: &Cell<u32>, handler: Box<dyn FnMut(T)>) -> Subscription {
    let id = next_id.get();
    next_id.set(id + 1);
    listeners.borrow_mut().insert(id, handler);
    let listeners = listeners.clone();
    Subscription::new(move || {
        listeners.borrow_mut().remove(&id);
    })
}

fn emit<T: Clone>(listeners: &Listeners<T>, value: T) {
    for handler in listeners.borrow_mut().values_mut() {
        handler(value.clone());
    }
}

pub struct FakeScroll {
    position: Cell<f64>,
    available: bool,
    next_id: Cell<u32>,
    listeners: Listeners<f64>,
}

impl FakeScroll {
    pub fn at(pixels: f64) -> Self {
        Self {
            position: Cell::new(pixels),
            available: true,
            next_id: Cell::new(0),
            listeners: Rc::default(),
        }
    }

    pub fn unavailable() -> Self {
        Self {
            available: false,
            ..Self::at(0.0)
        }
    }

    pub fn scroll_to(&self, pixels: f64) {
        self.position.set(pixels);
        emit(&self.listeners, pixels);
    }

    pub fn listener_count(&self) -> usize {
        self.listeners.borrow().len()
    }
}

impl ScrollSource for FakeScroll {
    fn current(&self) -> Option<f64> {
        self.available.then(|| self.position.get())
    }

    fn subscribe(&self, handler: Box<dyn FnMut(f64)>) -> Result<Subscription, TrackerError> {
        if !self.available {
            return Err(TrackerError::NoWindow);
        }
        Ok(register(&self.listeners, &self.next_id, handler))
    }
}

/// Stands in for the intersection observer. Remembers which sections were
/// observed and at what threshold.
#[derive(Default)]
pub struct FakeObserver {
    observed: RefCell<Vec<SectionId>>,
    threshold: Cell<Option<f64>>,
    next_id: Cell<u32>,
    listeners: Listeners<Vec<IntersectionReport>>,
}

impl FakeObserver {
    pub fn report(&self, reports: &[(SectionId, f64)]) {
        let batch = reports
            .iter()
            .map(|&(section, ratio)| IntersectionReport::new(section, ratio))
            .collect::<Vec<_>>();
        emit(&self.listeners, batch);
    }

    pub fn observed(&self) -> Vec<SectionId> {
        self.observed.borrow().clone()
    }

    pub fn threshold(&self) -> Option<f64> {
        self.threshold.get()
    }

    pub fn is_connected(&self) -> bool {
        !self.listeners.borrow().is_empty()
    }
}

impl IntersectionSource for FakeObserver {
    fn observe(
        &self,
        sections: &[SectionId],
        threshold: f64,
        handler: Box<dyn FnMut(Vec<IntersectionReport>)>,
    ) -> Result<Subscription, TrackerError> {
        self.observed.borrow_mut().extend_from_slice(sections);
        self.threshold.set(Some(threshold));
        Ok(register(&self.listeners, &self.next_id, handler))
    }
}
