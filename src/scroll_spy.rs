use std::rc::Rc;

use log::warn;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::js_sys::Array;
use web_sys::{IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Viewport band a section has to enter to become active: skip the top 30%
/// and the bottom 60%.
pub const OBSERVER_ROOT_MARGIN: &str = "-30% 0px -60% 0px";

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct Section {
    pub id: &'static str,
    pub number: &'static str,
    pub title: &'static str,
}

/// One observer report for a section element.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Observation {
    pub id: String,
    pub is_intersecting: bool,
}

/// Tracks which declared section is highlighted.
///
/// Exactly one section is active whenever the table is non-empty; before any
/// observation it is the first declared section.
#[derive(Clone, Debug, PartialEq)]
pub struct SectionTracker {
    sections: &'static [Section],
    active: usize,
}

impl SectionTracker {
    pub fn new(sections: &'static [Section]) -> Self {
        Self { sections, active: 0 }
    }

    pub fn sections(&self) -> &'static [Section] {
        self.sections
    }

    pub fn active_id(&self) -> Option<&'static str> {
        self.sections.get(self.active).map(|s| s.id)
    }

    pub fn is_active(&self, id: &str) -> bool {
        self.active_id() == Some(id)
    }

    /// Applies one observer callback batch. The last intersecting, declared
    /// section in the batch wins. Returns whether the highlight moved.
    pub fn observe<I>(&mut self, entries: I) -> bool
    where
        I: IntoIterator<Item = Observation>,
    {
        let before = self.active;
        for entry in entries {
            if !entry.is_intersecting {
                continue;
            }
            if let Some(idx) = self.sections.iter().position(|s| s.id == entry.id) {
                self.active = idx;
            }
        }
        before != self.active
    }
}

impl Reducible for SectionTracker {
    type Action = Vec<Observation>;

    fn reduce(self: Rc<Self>, action: Self::Action) -> Rc<Self> {
        let mut next = (*self).clone();
        if next.observe(action) {
            Rc::new(next)
        } else {
            self
        }
    }
}

/// Document-relative scroll position for a section whose bounding box starts
/// at `element_top` while the window is scrolled to `scroll_y`, leaving
/// `offset` pixels for the sticky header.
pub fn scroll_target(element_top: f64, scroll_y: f64, offset: f64) -> f64 {
    (element_top + scroll_y - offset).max(0.0)
}

/// Smoothly scrolls so the section titled `id` clears the header. The
/// highlight itself only follows once the observer reports the section.
pub fn scroll_to_section(id: &str, offset: f64) {
    let Some(window) = web_sys::window() else { return };
    let Some(document) = window.document() else { return };
    let Some(element) = document.get_element_by_id(id) else {
        warn!("Section #{} not found", id);
        return;
    };
    let scroll_y = window.scroll_y().unwrap_or_else(|e| {
        warn!("Could not read scroll position: {:?}", e);
        0.0
    });
    let top = scroll_target(element.get_bounding_client_rect().top(), scroll_y, offset);
    let options = web_sys::ScrollToOptions::new();
    options.set_top(top);
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    window.scroll_to_with_scroll_to_options(&options);
}

pub struct ScrollSpyHandle {
    pub tracker: UseReducerHandle<SectionTracker>,
    pub scroll_to: Callback<&'static str>,
}

/// Observes every declared section element while the calling component is
/// mounted and disconnects the observer when it unmounts.
#[hook]
pub fn use_scroll_spy(sections: &'static [Section], offset: f64) -> ScrollSpyHandle {
    let tracker = use_reducer(|| SectionTracker::new(sections));

    {
        let dispatcher = tracker.dispatcher();
        use_effect_with_deps(
            move |sections: &&'static [Section]| {
                let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
                    move |entries: Array, _observer: IntersectionObserver| {
                        let batch: Vec<Observation> = entries
                            .iter()
                            .filter_map(|entry| entry.dyn_into::<IntersectionObserverEntry>().ok())
                            .map(|entry| Observation {
                                id: entry.target().id(),
                                is_intersecting: entry.is_intersecting(),
                            })
                            .collect();
                        dispatcher.dispatch(batch);
                    },
                );

                let options = IntersectionObserverInit::new();
                options.set_root_margin(OBSERVER_ROOT_MARGIN);
                options.set_threshold(&JsValue::from_f64(0.0));

                let observer = match IntersectionObserver::new_with_options(
                    callback.as_ref().unchecked_ref(),
                    &options,
                ) {
                    Ok(observer) => {
                        if let Some(document) = web_sys::window().and_then(|w| w.document()) {
                            for section in sections.iter() {
                                if let Some(el) = document.get_element_by_id(section.id) {
                                    observer.observe(&el);
                                }
                            }
                        }
                        Some(observer)
                    }
                    Err(e) => {
                        gloo_console::error!("IntersectionObserver unavailable", e);
                        None
                    }
                };

                move || {
                    if let Some(observer) = observer {
                        observer.disconnect();
                    }
                    drop(callback);
                }
            },
            sections,
        );
    }

    let scroll_to = Callback::from(move |id: &'static str| scroll_to_section(id, offset));

    ScrollSpyHandle { tracker, scroll_to }
}

#[cfg(test)]
mod tests {
    use super::*;

    static SECTIONS: [Section; 3] = [
        Section { id: "intro", number: "01", title: "Introduction" },
        Section { id: "data", number: "02", title: "Data Protection" },
        Section { id: "law", number: "03", title: "Governing Law" },
    ];

    fn seen(id: &str) -> Observation {
        Observation { id: id.to_string(), is_intersecting: true }
    }

    fn left(id: &str) -> Observation {
        Observation { id: id.to_string(), is_intersecting: false }
    }

    fn active_count(tracker: &SectionTracker) -> usize {
        tracker.sections().iter().filter(|s| tracker.is_active(s.id)).count()
    }

    #[test]
    fn first_section_is_active_before_any_callback() {
        let tracker = SectionTracker::new(&SECTIONS);
        assert_eq!(tracker.active_id(), Some("intro"));
        assert_eq!(active_count(&tracker), 1);
    }

    #[test]
    fn entering_section_replaces_previous() {
        let mut tracker = SectionTracker::new(&SECTIONS);
        assert!(tracker.observe(vec![seen("data")]));
        assert_eq!(tracker.active_id(), Some("data"));
        assert_eq!(active_count(&tracker), 1);
    }

    #[test]
    fn last_intersecting_entry_in_batch_wins() {
        let mut tracker = SectionTracker::new(&SECTIONS);
        tracker.observe(vec![seen("law"), left("intro"), seen("data")]);
        assert_eq!(tracker.active_id(), Some("data"));
    }

    #[test]
    fn leaving_or_unknown_sections_keep_highlight() {
        let mut tracker = SectionTracker::new(&SECTIONS);
        tracker.observe(vec![seen("law")]);
        assert!(!tracker.observe(vec![left("law"), seen("footer")]));
        assert_eq!(tracker.active_id(), Some("law"));
    }

    #[test]
    fn exactly_one_active_after_every_batch() {
        let mut tracker = SectionTracker::new(&SECTIONS);
        let batches = vec![
            vec![seen("data")],
            vec![left("data"), seen("law")],
            vec![],
            vec![seen("intro"), seen("law")],
            vec![left("intro")],
        ];
        for batch in batches {
            tracker.observe(batch);
            assert_eq!(active_count(&tracker), 1);
        }
    }

    #[test]
    fn reducer_keeps_same_rc_when_nothing_moves() {
        let tracker = Rc::new(SectionTracker::new(&SECTIONS));
        let next = tracker.clone().reduce(vec![left("intro")]);
        assert!(Rc::ptr_eq(&tracker, &next));
        let moved = tracker.clone().reduce(vec![seen("law")]);
        assert_eq!(moved.active_id(), Some("law"));
    }

    #[test]
    fn empty_table_has_no_active_section() {
        static NONE: [Section; 0] = [];
        let mut tracker = SectionTracker::new(&NONE);
        assert_eq!(tracker.active_id(), None);
        assert!(!tracker.observe(vec![seen("intro")]));
    }

    #[test]
    fn scroll_target_adds_current_scroll_and_clamps() {
        assert_eq!(scroll_target(900.0, 100.0, 120.0), 880.0);
        assert_eq!(scroll_target(-300.0, 1200.0, 140.0), 760.0);
        assert_eq!(scroll_target(50.0, 0.0, 120.0), 0.0);
    }
}
