use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;

use log::debug;

use super::error::TrackerError;
use super::section::{IntersectionReport, SectionId};
use super::subscription::Subscription;

/// What happens to a revealed section once it leaves the viewport again.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum RevealPolicy {
    /// Visibility follows the latest report in both directions.
    #[default]
    Toggle,
    /// Once revealed, a section stays revealed.
    Sticky,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityConfig {
    pub threshold: f64,
    pub policy: RevealPolicy,
}

impl Default for VisibilityConfig {
    fn default() -> Self {
        Self {
            threshold: 0.1,
            policy: RevealPolicy::Toggle,
        }
    }
}

/// Per-section "currently intersecting the viewport" flags.
///
/// Only sections passed to [`VisibilityMap::new`] can ever get an entry, and
/// an entry only appears after the first report for that section.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct VisibilityMap {
    registered: BTreeSet<SectionId>,
    visible: BTreeMap<SectionId, bool>,
}

impl VisibilityMap {
    pub fn new(sections: &[SectionId]) -> Self {
        Self {
            registered: sections.iter().copied().collect(),
            visible: BTreeMap::new(),
        }
    }

    pub fn is_registered(&self, section: SectionId) -> bool {
        self.registered.contains(&section)
    }

    pub fn get(&self, section: SectionId) -> Option<bool> {
        self.visible.get(&section).copied()
    }

    /// Absent entries read as hidden.
    pub fn is_revealed(&self, section: SectionId) -> bool {
        self.get(section).unwrap_or(false)
    }

    pub fn is_empty(&self) -> bool {
        self.visible.is_empty()
    }

    /// Applies one report and returns whether the stored flag changed.
    pub fn apply(&mut self, report: IntersectionReport, config: VisibilityConfig) -> bool {
        if !self.is_registered(report.section) {
            return false;
        }

        let previous = self.get(report.section);
        let mut visible = report.ratio >= config.threshold;
        if config.policy == RevealPolicy::Sticky && previous == Some(true) {
            visible = true;
        }

        self.visible.insert(report.section, visible);
        previous != Some(visible)
    }

    pub fn apply_batch<I>(&mut self, reports: I, config: VisibilityConfig) -> bool
    where
        I: IntoIterator<Item = IntersectionReport>,
    {
        reports
            .into_iter()
            .fold(false, |changed, report| self.apply(report, config) || changed)
    }

    pub fn iter(&self) -> impl Iterator<Item = (SectionId, bool)> + '_ {
        self.visible.iter().map(|(section, visible)| (*section, *visible))
    }
}

/// Platform side of visibility tracking.
pub trait IntersectionSource {
    /// Starts observing `sections` with a single observer and feeds every
    /// callback batch to `handler` until the subscription is released.
    fn observe(
        &self,
        sections: &[SectionId],
        threshold: f64,
        handler: Box<dyn FnMut(Vec<IntersectionReport>)>,
    ) -> Result<Subscription, TrackerError>;
}

#[derive(Debug)]
pub struct VisibilityTracker {
    map: Rc<RefCell<VisibilityMap>>,
    subscription: Subscription,
}

impl VisibilityTracker {
    pub fn attach<S>(
        source: &S,
        sections: &[SectionId],
        config: VisibilityConfig,
        on_change: impl Fn(&VisibilityMap) + 'static,
    ) -> Result<Self, TrackerError>
    where
        S: IntersectionSource + ?Sized,
    {
        let map = Rc::new(RefCell::new(VisibilityMap::new(sections)));

        let shared = map.clone();
        let subscription = source.observe(
            sections,
            config.threshold,
            Box::new(move |reports: Vec<IntersectionReport>| {
                let changed = shared.borrow_mut().apply_batch(reports, config);
                if changed {
                    on_change(&shared.borrow());
                }
            }),
        )?;

        debug!("visibility tracker observing {} sections", sections.len());
        Ok(Self { map, subscription })
    }

    pub fn snapshot(&self) -> VisibilityMap {
        self.map.borrow().clone()
    }

    /// Disconnects the observer. Dropping the tracker does the same.
    pub fn detach(self) {
        debug!("visibility tracker disconnected");
        self.subscription.dispose();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::tracking::fakes::FakeObserver;
    use std::cell::Cell;

    const ANIMATED: [SectionId; 3] = [SectionId::About, SectionId::Portfolio, SectionId::Contact];

    fn toggle() -> VisibilityConfig {
        VisibilityConfig::default()
    }

    fn sticky() -> VisibilityConfig {
        VisibilityConfig {
            policy: RevealPolicy::Sticky,
            ..VisibilityConfig::default()
        }
    }

    #[test]
    fn unseen_sections_have_no_entry() {
        let mut map = VisibilityMap::new(&ANIMATED);
        map.apply(IntersectionReport::new(SectionId::Portfolio, 0.4), toggle());

        assert_eq!(map.get(SectionId::About), None);
        assert!(!map.is_revealed(SectionId::About));
        assert_eq!(map.get(SectionId::Portfolio), Some(true));
    }

    #[test]
    fn threshold_is_inclusive() {
        let mut map = VisibilityMap::new(&ANIMATED);

        map.apply(IntersectionReport::new(SectionId::About, 0.1), toggle());
        assert_eq!(map.get(SectionId::About), Some(true));

        map.apply(IntersectionReport::new(SectionId::About, 0.09), toggle());
        assert_eq!(map.get(SectionId::About), Some(false));

        map.apply(IntersectionReport::new(SectionId::About, 0.0), toggle());
        assert_eq!(map.get(SectionId::About), Some(false));
    }

    #[test]
    fn unregistered_section_never_gets_an_entry() {
        let mut map = VisibilityMap::new(&ANIMATED);
        let changed = map.apply(IntersectionReport::new(SectionId::Home, 1.0), toggle());

        assert!(!changed);
        assert_eq!(map.get(SectionId::Home), None);
        assert!(map.is_empty());
    }

    #[test]
    fn sticky_policy_keeps_revealed_sections() {
        let mut map = VisibilityMap::new(&ANIMATED);
        map.apply(IntersectionReport::new(SectionId::Contact, 0.05), sticky());
        assert_eq!(map.get(SectionId::Contact), Some(false));

        map.apply(IntersectionReport::new(SectionId::Contact, 0.5), sticky());
        let changed = map.apply(IntersectionReport::new(SectionId::Contact, 0.0), sticky());

        assert!(!changed);
        assert!(map.is_revealed(SectionId::Contact));
    }

    #[test]
    fn batch_reports_whether_anything_changed() {
        let mut map = VisibilityMap::new(&ANIMATED);
        let batch = [
            IntersectionReport::new(SectionId::About, 0.0),
            IntersectionReport::new(SectionId::Portfolio, 0.3),
        ];
        assert!(map.apply_batch(batch, toggle()));
        assert!(!map.apply_batch(batch, toggle()));
        assert_eq!(
            map.iter().collect::<Vec<_>>(),
            vec![(SectionId::About, false), (SectionId::Portfolio, true)]
        );
    }

    #[test]
    fn tracker_observes_all_sections_with_one_observer() {
        let source = FakeObserver::default();
        let _tracker = VisibilityTracker::attach(&source, &ANIMATED, toggle(), |_| {}).unwrap();

        assert_eq!(source.observed(), ANIMATED.to_vec());
        assert_eq!(source.threshold(), Some(0.1));
    }

    #[test]
    fn scrolling_portfolio_into_view_reveals_it() {
        let source = FakeObserver::default();
        let latest = Rc::new(RefCell::new(VisibilityMap::default()));
        let sink = latest.clone();
        let tracker = VisibilityTracker::attach(&source, &ANIMATED, toggle(), move |map| {
            *sink.borrow_mut() = map.clone();
        })
        .unwrap();

        source.report(&[(SectionId::About, 0.0), (SectionId::Portfolio, 0.02)]);
        assert!(!latest.borrow().is_revealed(SectionId::Portfolio));

        source.report(&[(SectionId::Portfolio, 0.12)]);
        assert!(latest.borrow().is_revealed(SectionId::Portfolio));
        assert!(!latest.borrow().is_revealed(SectionId::About));
        assert_eq!(tracker.snapshot(), *latest.borrow());
    }

    #[test]
    fn on_change_skipped_for_repeat_reports() {
        let source = FakeObserver::default();
        let calls = Rc::new(Cell::new(0));
        let counter = calls.clone();
        let _tracker = VisibilityTracker::attach(&source, &ANIMATED, toggle(), move |_| {
            counter.set(counter.get() + 1);
        })
        .unwrap();

        source.report(&[(SectionId::About, 0.5)]);
        source.report(&[(SectionId::About, 0.8)]);
        assert_eq!(calls.get(), 1);
    }

    #[test]
    fn detach_disconnects_observer() {
        let source = FakeObserver::default();
        let tracker = VisibilityTracker::attach(&source, &ANIMATED, toggle(), |_| {}).unwrap();
        source.report(&[(SectionId::About, 0.5)]);
        let before = tracker.snapshot();
        let map = tracker.map.clone();

        tracker.detach();
        source.report(&[(SectionId::About, 0.0), (SectionId::Contact, 1.0)]);

        assert!(!source.is_connected());
        assert_eq!(*map.borrow(), before);
    }
}
