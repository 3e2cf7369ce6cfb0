//! One-shot "scrolled into view" signal for entrance animations.
//!
//! Browsers with `IntersectionObserver` get a native observer; anything else
//! falls back to measuring the element against the viewport on scroll. Both
//! feed the same [`RevealLatch`], which fires once and never resets.

use std::cell::RefCell;
use std::rc::Rc;

use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Element, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit};
use yew::prelude::*;

/// Browsers report ratios a hair under the threshold they were asked to
/// watch for.
const RATIO_TOLERANCE: f64 = 0.005;

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RevealLatch {
    threshold: f64,
    visible: bool,
}

impl RevealLatch {
    pub fn new(threshold: f64) -> Self {
        Self { threshold: threshold.clamp(0.0, 1.0), visible: false }
    }

    pub fn is_visible(&self) -> bool {
        self.visible
    }

    /// Feeds one observation. Returns `true` only for the observation that
    /// flips the latch.
    pub fn observe(&mut self, ratio: f64) -> bool {
        if self.visible || ratio <= 0.0 || ratio + RATIO_TOLERANCE < self.threshold {
            return false;
        }
        self.visible = true;
        true
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Rect {
    pub left: f64,
    pub top: f64,
    pub width: f64,
    pub height: f64,
}

impl Rect {
    pub fn new(left: f64, top: f64, width: f64, height: f64) -> Self {
        Self { left, top, width, height }
    }

    fn right(&self) -> f64 {
        self.left + self.width
    }

    fn bottom(&self) -> f64 {
        self.top + self.height
    }
}

/// Fraction of `region` inside `viewport`, the same number an intersection
/// observer would report.
pub fn intersection_ratio(region: Rect, viewport: Rect) -> f64 {
    let area = region.width * region.height;
    if area <= 0.0 {
        return 0.0;
    }
    let width = (region.right().min(viewport.right()) - region.left.max(viewport.left)).max(0.0);
    let height = (region.bottom().min(viewport.bottom()) - region.top.max(viewport.top)).max(0.0);
    (width * height / area).clamp(0.0, 1.0)
}

/// Live observation of one element. Dropping it stops observing.
enum Probe {
    Intersection {
        observer: IntersectionObserver,
        _callback: Closure<dyn FnMut(Array, IntersectionObserver)>,
    },
    Scroll {
        window: web_sys::Window,
        listener: Closure<dyn FnMut()>,
    },
}

impl Probe {
    fn attach(element: Element, threshold: f64, on_visible: Callback<()>) -> Option<Self> {
        let latch = Rc::new(RefCell::new(RevealLatch::new(threshold)));
        match Self::intersection(&element, threshold, latch.clone(), on_visible.clone()) {
            Ok(probe) => Some(probe),
            Err(err) => {
                log::debug!("IntersectionObserver unavailable ({:?}), measuring on scroll", err);
                Self::scroll(element, latch, on_visible)
            }
        }
    }

    fn intersection(
        element: &Element,
        threshold: f64,
        latch: Rc<RefCell<RevealLatch>>,
        on_visible: Callback<()>,
    ) -> Result<Self, JsValue> {
        let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
            move |entries: Array, observer: IntersectionObserver| {
                for entry in entries.iter() {
                    let entry: IntersectionObserverEntry = entry.unchecked_into();
                    if !entry.is_intersecting() {
                        continue;
                    }
                    if latch.borrow_mut().observe(entry.intersection_ratio()) {
                        observer.disconnect();
                        on_visible.emit(());
                        break;
                    }
                }
            },
        );

        let mut init = IntersectionObserverInit::new();
        init.threshold(&JsValue::from_f64(threshold));
        let observer = IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init)?;
        observer.observe(element);
        Ok(Probe::Intersection { observer, _callback: callback })
    }

    fn scroll(element: Element, latch: Rc<RefCell<RevealLatch>>, on_visible: Callback<()>) -> Option<Self> {
        let Some(window) = web_sys::window() else {
            log::warn!("no window to measure against, revealing immediately");
            on_visible.emit(());
            return None;
        };

        let measure = {
            let window = window.clone();
            let on_visible = on_visible.clone();
            move || {
                if latch.borrow().is_visible() {
                    return;
                }
                let (Some(width), Some(height)) = (
                    window.inner_width().ok().and_then(|w| w.as_f64()),
                    window.inner_height().ok().and_then(|h| h.as_f64()),
                ) else {
                    return;
                };
                let rect = element.get_bounding_client_rect();
                let region = Rect::new(rect.left(), rect.top(), rect.width(), rect.height());
                let ratio = intersection_ratio(region, Rect::new(0.0, 0.0, width, height));
                if latch.borrow_mut().observe(ratio) {
                    on_visible.emit(());
                }
            }
        };

        // Initial check
        measure();

        let listener = Closure::<dyn FnMut()>::new(measure);
        if let Err(err) = window.add_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref()) {
            log::warn!("could not listen for scroll ({:?}), revealing immediately", err);
            on_visible.emit(());
            return None;
        }
        Some(Probe::Scroll { window, listener })
    }
}

impl Drop for Probe {
    fn drop(&mut self) {
        match self {
            Probe::Intersection { observer, .. } => observer.disconnect(),
            Probe::Scroll { window, listener } => {
                let _ = window.remove_event_listener_with_callback("scroll", listener.as_ref().unchecked_ref());
            }
        }
    }
}

/// Attach the returned ref to the region to watch. The flag turns `true`
/// the first time at least `threshold` of the region is on screen and stays
/// `true` for the life of the component.
#[hook]
pub fn use_reveal(threshold: f64) -> (NodeRef, bool) {
    let node = use_node_ref();
    let visible = use_state(|| false);

    {
        let visible = visible.clone();
        use_effect_with_deps(
            move |node: &NodeRef| {
                let on_visible = Callback::from(move |_| visible.set(true));
                let probe = match node.cast::<Element>() {
                    Some(element) => Probe::attach(element, threshold, on_visible),
                    None => {
                        on_visible.emit(());
                        None
                    }
                };
                move || drop(probe)
            },
            node.clone(),
        );
    }

    (node, *visible)
}

/// `reveal` plus `is-visible` once the section has been seen.
pub fn reveal_classes(visible: bool, variant: &'static str) -> Classes {
    classes!("reveal", variant, visible.then(|| "is-visible"))
}

pub fn delay_style(delay_ms: u32) -> String {
    format!("transition-delay: {}ms;", delay_ms)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn latch_fires_once_at_threshold() {
        let mut latch = RevealLatch::new(0.2);
        assert!(!latch.observe(0.0));
        assert!(!latch.observe(0.1));
        assert!(!latch.is_visible());
        assert!(latch.observe(0.2));
        assert!(latch.is_visible());
        assert!(!latch.observe(0.9));
    }

    #[test]
    fn latch_never_reverts_when_scrolled_away() {
        let mut latch = RevealLatch::new(0.1);
        latch.observe(0.5);
        latch.observe(0.0);
        assert!(latch.is_visible());
    }

    #[test]
    fn latch_tolerates_ratio_just_under_threshold() {
        let mut latch = RevealLatch::new(0.1);
        assert!(latch.observe(0.0999));
    }

    #[test]
    fn zero_threshold_still_needs_some_overlap() {
        let mut latch = RevealLatch::new(0.0);
        assert!(!latch.observe(0.0));
        assert!(latch.observe(0.01));
    }

    #[test]
    fn ratio_of_region_inside_viewport() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 100.0, 1000.0, 200.0), viewport), 1.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, 700.0, 1000.0, 200.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Rect::new(0.0, 900.0, 1000.0, 200.0), viewport), 0.0);
        assert_eq!(intersection_ratio(Rect::new(0.0, -150.0, 1000.0, 200.0), viewport), 0.25);
    }

    #[test]
    fn ratio_handles_horizontal_overflow_and_empty_regions() {
        let viewport = Rect::new(0.0, 0.0, 1000.0, 800.0);
        assert_eq!(intersection_ratio(Rect::new(800.0, 0.0, 400.0, 100.0), viewport), 0.5);
        assert_eq!(intersection_ratio(Rect::new(10.0, 10.0, 0.0, 100.0), viewport), 0.0);
    }

    #[test]
    fn delay_style_formats_milliseconds() {
        assert_eq!(delay_style(150), "transition-delay: 150ms;");
    }
}
