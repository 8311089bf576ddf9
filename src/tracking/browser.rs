use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{
    window, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit, ScrollBehavior,
    ScrollIntoViewOptions,
};

use super::error::TrackerError;
use super::scroll::ScrollSource;
use super::section::{IntersectionReport, SectionId};
use super::subscription::Subscription;
use super::visibility::IntersectionSource;

/// Scroll events of the global `window`.
#[derive(Debug, Clone, Copy, Default)]
pub struct WindowScroll;

impl ScrollSource for WindowScroll {
    fn current(&self) -> Option<f64> {
        window()?.scroll_y().ok()
    }

    fn subscribe(&self, mut handler: Box<dyn FnMut(f64)>) -> Result<Subscription, TrackerError> {
        let window = window().ok_or(TrackerError::NoWindow)?;

        let reader = window.clone();
        let callback = Closure::<dyn FnMut()>::new(move || {
            if let Ok(scroll_y) = reader.scroll_y() {
                handler(scroll_y);
            }
        });

        window.add_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref())?;

        Ok(Subscription::new(move || {
            if let Err(err) = window.remove_event_listener_with_callback("scroll", callback.as_ref().unchecked_ref()) {
                warn!("failed to remove scroll listener: {:?}", err);
            }
        }))
    }
}

/// Page sections looked up by DOM id and watched by one `IntersectionObserver`.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocumentSections;

impl IntersectionSource for DocumentSections {
    fn observe(
        &self,
        sections: &[SectionId],
        threshold: f64,
        mut handler: Box<dyn FnMut(Vec<IntersectionReport>)>,
    ) -> Result<Subscription, TrackerError> {
        let document = window()
            .ok_or(TrackerError::NoWindow)?
            .document()
            .ok_or(TrackerError::NoDocument)?;

        let callback = Closure::<dyn FnMut(Array)>::new(move |entries: Array| {
            let reports = entries
                .iter()
                .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                .filter_map(|entry| {
                    SectionId::from_dom_id(&entry.target().id())
                        .map(|section| IntersectionReport::new(section, entry.intersection_ratio()))
                })
                .collect::<Vec<_>>();
            if !reports.is_empty() {
                handler(reports);
            }
        });

        let options = IntersectionObserverInit::new();
        options.set_threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)?;

        for section in sections {
            match document.get_element_by_id(section.dom_id()) {
                Some(target) => observer.observe(&target),
                None => warn!("section #{} not found, skipping observation", section),
            }
        }

        // The closure must outlive the observer, so it is released together with it.
        Ok(Subscription::new(move || {
            observer.disconnect();
            drop(callback);
        }))
    }
}

/// Smoothly scrolls the page until `section` is in view.
pub fn scroll_to_section(section: SectionId) -> Result<(), TrackerError> {
    let document = window()
        .ok_or(TrackerError::NoWindow)?
        .document()
        .ok_or(TrackerError::NoDocument)?;

    let Some(target) = document.get_element_by_id(section.dom_id()) else {
        warn!("cannot scroll to missing section #{}", section);
        return Ok(());
    };

    let options = ScrollIntoViewOptions::new();
    options.set_behavior(ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    Ok(())
}
