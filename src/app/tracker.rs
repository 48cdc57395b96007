use leptos::prelude::*;
use leptos_use::{
    use_intersection_observer_with_options, use_supported, use_window_scroll,
    UseIntersectionObserverOptions, UseIntersectionObserverReturn,
};

use web_sys::{
    Element, IntersectionObserverEntry, ScrollBehavior, ScrollIntoViewOptions,
    ScrollLogicalPosition,
};

use crate::{
    nav::section_ids,
    spy::{ScrollSpy, SpyConfig, SpyError, Viewport},
};

/// Browser side of the tracker: section elements are looked up by id and
/// handed to a single intersection observer.
struct DomViewport {
    targets: RwSignal<Vec<Element>, LocalStorage>,
    is_supported: Signal<bool>,
}

impl DomViewport {
    fn find(id: &str) -> Result<Element, SpyError> {
        document()
            .get_element_by_id(id)
            .ok_or_else(|| SpyError::MissingTarget(id.to_string()))
    }
}

impl Viewport for DomViewport {
    fn observe(&mut self, id: &str) -> Result<(), SpyError> {
        if !self.is_supported.get_untracked() {
            return Err(SpyError::Unsupported);
        }
        let el = Self::find(id)?;
        self.targets.update(|t| t.push(el));
        Ok(())
    }

    fn unobserve(&mut self, id: &str) {
        self.targets.update(|t| t.retain(|el| el.id() != id));
    }

    fn scroll_into_view(&mut self, id: &str) -> Result<(), SpyError> {
        let el = Self::find(id)?;
        let opts = ScrollIntoViewOptions::new();
        opts.set_behavior(ScrollBehavior::Smooth);
        opts.set_block(ScrollLogicalPosition::Start);
        el.scroll_into_view_with_scroll_into_view_options(&opts);
        Ok(())
    }
}

/// Handle to the page's tracker, shared with the navigation components
/// through context.
#[derive(Clone, Copy)]
pub struct SectionTracker {
    spy: StoredValue<ScrollSpy>,
    viewport: StoredValue<DomViewport, LocalStorage>,
    active: ReadSignal<Option<String>>,
    is_scrolled: ReadSignal<bool>,
}

impl SectionTracker {
    pub fn active(&self) -> ReadSignal<Option<String>> {
        self.active
    }

    pub fn is_scrolled(&self) -> ReadSignal<bool> {
        self.is_scrolled
    }

    /// Smooth-scrolls to a section. Unknown ids do nothing.
    pub fn activate(&self, id: &str) {
        let spy = self.spy;
        self.viewport.update_value(|vp| {
            spy.with_value(|s| s.activate(vp, id));
        });
    }
}

pub fn use_section_tracker(config: SpyConfig) -> SectionTracker {
    let spy = StoredValue::new(ScrollSpy::new(config.clone()));
    let (active, set_active) = signal(None::<String>);
    let (is_scrolled, set_is_scrolled) = signal(false);

    let publish = move || {
        let (now_active, now_scrolled) =
            spy.with_value(|s| (s.active().map(str::to_string), s.is_scrolled()));
        if active.get_untracked() != now_active {
            set_active.set(now_active);
        }
        if is_scrolled.get_untracked() != now_scrolled {
            set_is_scrolled.set(now_scrolled);
        }
    };

    let is_supported = use_supported(|| {
        js_sys::Reflect::has(&window(), &"IntersectionObserver".into()).unwrap_or_default()
    });
    let targets = RwSignal::new_local(Vec::<Element>::new());
    let UseIntersectionObserverReturn { stop, .. } = use_intersection_observer_with_options(
        Signal::derive_local(move || targets.get()),
        move |entries: Vec<IntersectionObserverEntry>, _| {
            let samples = entries
                .iter()
                .map(|e| (e.target().id(), e.intersection_ratio()))
                .collect::<Vec<_>>();
            spy.update_value(|s| {
                s.observe_batch(samples);
            });
            publish();
        },
        UseIntersectionObserverOptions::default()
            .root_margin(config.root_margin.clone())
            .thresholds(config.thresholds.clone()),
    );

    let viewport = StoredValue::new_local(DomViewport {
        targets,
        is_supported,
    });

    // sections are in the DOM once effects run
    Effect::new(move |_| {
        viewport.update_value(|vp| {
            spy.update_value(|s| {
                for id in section_ids() {
                    s.register(vp, id);
                }
                s.start(vp);
            });
        });
        log::debug!("section tracker started");
    });

    let (_, scroll_y) = use_window_scroll();
    Effect::new(move |_| {
        let top = scroll_y.get();
        spy.update_value(|s| s.on_scroll(top));
        publish();
    });

    on_cleanup(move || {
        viewport.try_update_value(|vp| {
            spy.try_update_value(|s| s.stop(vp));
        });
        stop();
    });

    SectionTracker {
        spy,
        viewport,
        active,
        is_scrolled,
    }
}
