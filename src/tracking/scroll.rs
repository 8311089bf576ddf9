use std::cell::Cell;
use std::rc::Rc;

use log::debug;

use super::error::TrackerError;
use super::subscription::Subscription;

/// Pixels the document has scrolled from the top.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord)]
pub struct ScrollOffset(u32);

impl ScrollOffset {
    pub const TOP: ScrollOffset = ScrollOffset(0);

    pub fn new(pixels: u32) -> Self {
        Self(pixels)
    }

    /// Converts a raw platform reading. Overscroll bounce can report negative
    /// values and zoomed pages report fractions.
    pub fn from_pixels(pixels: f64) -> Self {
        if !pixels.is_finite() || pixels <= 0.0 {
            return Self::TOP;
        }
        Self(pixels.round().min(u32::MAX as f64) as u32)
    }

    pub fn pixels(self) -> u32 {
        self.0
    }

    pub fn parallax(self, factor: ParallaxFactor) -> f64 {
        self.0 as f64 * factor.value()
    }

    /// CSS transform shifting an element by this offset scaled with `factor`.
    pub fn translate_y(self, factor: ParallaxFactor) -> String {
        format!("translateY({:.2}px)", self.parallax(factor))
    }

    pub fn is_past(self, threshold: u32) -> bool {
        self.0 > threshold
    }
}

/// How strongly an element follows the scroll, from 0 (fixed) to 1 (moves with the page).
#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub struct ParallaxFactor(f64);

impl ParallaxFactor {
    pub fn new(factor: f64) -> Self {
        if factor.is_nan() {
            return Self(0.0);
        }
        Self(factor.clamp(0.0, 1.0))
    }

    pub fn value(self) -> f64 {
        self.0
    }
}

/// Platform side of scroll tracking.
pub trait ScrollSource {
    /// Offset at the moment of the call, if the platform can report one.
    fn current(&self) -> Option<f64>;

    /// Registers `handler` for every scroll event until the returned
    /// subscription is released.
    fn subscribe(&self, handler: Box<dyn FnMut(f64)>) -> Result<Subscription, TrackerError>;
}

/// Keeps the latest scroll offset while attached to a [`ScrollSource`].
#[derive(Debug)]
pub struct ScrollTracker {
    offset: Rc<Cell<ScrollOffset>>,
    subscription: Subscription,
}

impl ScrollTracker {
    pub fn attach<S>(source: &S, on_change: impl Fn(ScrollOffset) + 'static) -> Result<Self, TrackerError>
    where
        S: ScrollSource + ?Sized,
    {
        let offset = Rc::new(Cell::new(ScrollOffset::TOP));

        if let Some(initial) = source.current() {
            offset.set(ScrollOffset::from_pixels(initial));
            on_change(offset.get());
        }

        let latest = offset.clone();
        let subscription = source.subscribe(Box::new(move |pixels: f64| {
            let value = ScrollOffset::from_pixels(pixels);
            latest.set(value);
            on_change(value);
        }))?;

        debug!("scroll tracker attached at offset {}", offset.get().pixels());
        Ok(Self { offset, subscription })
    }

    pub fn offset(&self) -> ScrollOffset {
        self.offset.get()
    }

    /// Removes the scroll listener. Dropping the tracker does the same.
    pub fn detach(self) {
        debug!("scroll tracker detached at offset {}", self.offset().pixels());
        self.subscription.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::fakes::FakeScroll;
    use std::cell::RefCell;

    fn recorder() -> (Rc<RefCell<Vec<u32>>>, impl Fn(ScrollOffset) + 'static) {
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = seen.clone();
        (seen, move |offset: ScrollOffset| sink.borrow_mut().push(offset.pixels()))
    }

    #[test]
    fn offset_is_the_last_reported_value() {
        let source = FakeScroll::at(0.0);
        let (seen, on_change) = recorder();
        let tracker = ScrollTracker::attach(&source, on_change).unwrap();

        for pixels in [120.0, 640.0, 30.0, 980.0, 415.0] {
            source.scroll_to(pixels);
        }

        assert_eq!(tracker.offset(), ScrollOffset::new(415));
        assert_eq!(*seen.borrow(), vec![0, 120, 640, 30, 980, 415]);
    }

    #[test]
    fn every_event_updates_even_when_unchanged() {
        let source = FakeScroll::at(0.0);
        let (seen, on_change) = recorder();
        let _tracker = ScrollTracker::attach(&source, on_change).unwrap();

        source.scroll_to(200.0);
        source.scroll_to(200.0);

        assert_eq!(*seen.borrow(), vec![0, 200, 200]);
    }

    #[test]
    fn attach_samples_restored_position() {
        let source = FakeScroll::at(1500.0);
        let (_, on_change) = recorder();
        let tracker = ScrollTracker::attach(&source, on_change).unwrap();
        assert_eq!(tracker.offset().pixels(), 1500);
    }

    #[test]
    fn detach_stops_updates() {
        let source = FakeScroll::at(0.0);
        let (seen, on_change) = recorder();
        let tracker = ScrollTracker::attach(&source, on_change).unwrap();
        source.scroll_to(300.0);
        assert_eq!(source.listener_count(), 1);

        tracker.detach();
        source.scroll_to(900.0);

        assert_eq!(source.listener_count(), 0);
        assert_eq!(*seen.borrow(), vec![0, 300]);
    }

    #[test]
    fn dropping_tracker_removes_listener() {
        let source = FakeScroll::at(0.0);
        let (seen, on_change) = recorder();
        {
            let _tracker = ScrollTracker::attach(&source, on_change).unwrap();
            source.scroll_to(50.0);
        }
        source.scroll_to(60.0);
        assert_eq!(source.listener_count(), 0);
        assert_eq!(seen.borrow().last(), Some(&50));
    }

    #[test]
    fn failed_subscribe_reports_error() {
        let source = FakeScroll::unavailable();
        let (seen, on_change) = recorder();
        let result = ScrollTracker::attach(&source, on_change);
        assert_eq!(result.unwrap_err(), TrackerError::NoWindow);
        assert!(seen.borrow().is_empty());
    }

    #[test]
    fn raw_readings_are_clamped_and_rounded() {
        assert_eq!(ScrollOffset::from_pixels(-35.0), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::from_pixels(f64::NAN), ScrollOffset::TOP);
        assert_eq!(ScrollOffset::from_pixels(12.6).pixels(), 13);
        assert_eq!(ScrollOffset::from_pixels(f64::INFINITY), ScrollOffset::TOP);
    }

    #[test]
    fn parallax_scales_by_factor() {
        let offset = ScrollOffset::new(400);
        assert_eq!(offset.parallax(ParallaxFactor::new(0.5)), 200.0);
        assert!((offset.parallax(ParallaxFactor::new(0.3)) - 120.0).abs() < 1e-9);
        assert_eq!(offset.translate_y(ParallaxFactor::new(0.5)), "translateY(200.00px)");
    }

    #[test]
    fn parallax_factor_stays_in_unit_range() {
        assert_eq!(ParallaxFactor::new(1.7).value(), 1.0);
        assert_eq!(ParallaxFactor::new(-0.2).value(), 0.0);
        assert_eq!(ParallaxFactor::new(f64::NAN).value(), 0.0);
        assert_eq!(ScrollOffset::new(999).parallax(ParallaxFactor::new(0.0)), 0.0);
    }
}
