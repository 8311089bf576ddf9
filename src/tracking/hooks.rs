use log::error;
use yew::prelude::*;

use super::browser::{DocumentSections, WindowScroll};
use super::scroll::{ScrollOffset, ScrollTracker};
use super::section::SectionId;
use super::visibility::{VisibilityConfig, VisibilityMap, VisibilityTracker};

/// Latest window scroll offset, tracked for as long as the calling component is mounted.
#[hook]
pub fn use_scroll_offset() -> ScrollOffset {
    let offset = use_state(|| ScrollOffset::TOP);

    {
        let offset = offset.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = match ScrollTracker::attach(&WindowScroll, move |value| offset.set(value)) {
                    Ok(tracker) => Some(tracker),
                    Err(err) => {
                        error!("Scroll tracking unavailable: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(tracker) = tracker {
                        tracker.detach();
                    }
                }
            },
            (), // Attach once on mount, detach on unmount
        );
    }

    *offset
}

/// Visibility of `sections`, observed for as long as the calling component is mounted.
///
/// The sections must already be rendered by the caller or its children when the
/// effect runs; ids missing from the DOM are skipped.
#[hook]
pub fn use_section_visibility(sections: &'static [SectionId], config: VisibilityConfig) -> VisibilityMap {
    let map = use_state(|| VisibilityMap::new(sections));

    {
        let map = map.clone();
        use_effect_with_deps(
            move |_| {
                let tracker = match VisibilityTracker::attach(&DocumentSections, sections, config, move |latest| {
                    map.set(latest.clone())
                }) {
                    Ok(tracker) => Some(tracker),
                    Err(err) => {
                        error!("Section visibility tracking unavailable: {}", err);
                        None
                    }
                };

                move || {
                    if let Some(tracker) = tracker {
                        tracker.detach();
                    }
                }
            },
            (),
        );
    }

    (*map).clone()
}
