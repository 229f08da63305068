//! Load-time reveals for dashboard cards and report charts, and the
//! total-sales counter.
//!
//! Reveals use an `IntersectionObserver` per group; each element is
//! unobserved once it has been revealed. The counter runs on
//! `requestAnimationFrame` and releases its callback after the last frame.

use crate::config::EnhanceConfig;
use crate::dom::{self, js_err};
use anyhow::Context;
use js_sys::Array;
use pcheck_form::animation::{counter_start, CounterStart, CounterTween, RevealKind, RevealTiming};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Document, Element, HtmlElement, IntersectionObserver, IntersectionObserverEntry,
    IntersectionObserverInit,
};

/// Fade cards in as they scroll into view and start the total-sales counter.
pub fn init_dashboard_animations(document: &Document, config: &EnhanceConfig) {
    init_reveal(
        document,
        RevealKind::Card,
        &config.card_selector,
        config.card_timing,
    );
    if let Err(err) = start_counter(document, &config.counter_selector, config.counter_duration_ms)
    {
        log::error!("Could not start the total sales counter: {}", err);
    }
}

/// Fade report chart images in as they scroll into view.
pub fn init_chart_interactions(document: &Document, config: &EnhanceConfig) {
    init_reveal(
        document,
        RevealKind::Chart,
        &config.chart_selector,
        config.chart_timing,
    );
}

fn init_reveal(document: &Document, kind: RevealKind, selector: &str, timing: RevealTiming) {
    match observe_reveal(document, kind, selector, timing) {
        Ok(count) => log::info!("Observing {} elements for {:?} reveal", count, kind),
        Err(err) => log::error!("Could not set up {:?} reveal: {}", kind, err),
    }
}

fn reveal(element: &Element, kind: RevealKind, delay: &str) {
    if let Some(html) = element.dyn_ref::<HtmlElement>() {
        let _ = html.style().set_property("transition-delay", delay);
    }
    let _ = element.class_list().add_1(kind.reveal_class());
}

fn observe_reveal(
    document: &Document,
    kind: RevealKind,
    selector: &str,
    timing: RevealTiming,
) -> anyhow::Result<usize> {
    let elements = dom::query_all(document, selector)?;
    if elements.is_empty() {
        return Ok(0);
    }
    for element in &elements {
        let _ = element.class_list().add_1(kind.observed_class());
    }

    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(
        move |entries: Array, observer: IntersectionObserver| {
            // The stagger index counts every entry in the batch, visible or not.
            for (index, entry) in entries.iter().enumerate() {
                let Ok(entry) = entry.dyn_into::<IntersectionObserverEntry>() else {
                    continue;
                };
                if entry.is_intersecting() {
                    let target = entry.target();
                    reveal(&target, kind, &timing.delay_css(index));
                    observer.unobserve(&target);
                }
            }
        },
    );

    let options = IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(timing.threshold));
    let observer =
        match IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options) {
            Ok(observer) => observer,
            Err(err) => {
                log::warn!(
                    "IntersectionObserver unavailable ({}); revealing {:?} elements now",
                    js_err(err),
                    kind
                );
                for (index, element) in elements.iter().enumerate() {
                    reveal(element, kind, &timing.delay_css(index));
                }
                return Ok(elements.len());
            }
        };

    for element in &elements {
        observer.observe(element);
    }
    callback.forget();
    Ok(elements.len())
}

/// Animate the total-sales figure matched by `selector`, if there is one.
pub fn start_counter(document: &Document, selector: &str, duration_ms: f64) -> anyhow::Result<()> {
    let Some(element) = document.query_selector(selector).map_err(js_err)? else {
        return Ok(());
    };
    let text = element.text_content().unwrap_or_default();
    match counter_start(&text, duration_ms) {
        CounterStart::Animate(tween) => animate_value(element, tween),
        CounterStart::SetText(text) => {
            element.set_text_content(Some(&text));
            Ok(())
        }
        CounterStart::Skip => Ok(()),
    }
}

type FrameCallback = Rc<RefCell<Option<Closure<dyn FnMut(f64)>>>>;

fn animate_value(element: Element, tween: CounterTween) -> anyhow::Result<()> {
    let window = web_sys::window().context("no window to animate in")?;
    let slot: FrameCallback = Rc::new(RefCell::new(None));
    let next = slot.clone();
    let frame_window = window.clone();
    let mut started: Option<f64> = None;

    *slot.borrow_mut() = Some(Closure::new(move |timestamp: f64| {
        let start = *started.get_or_insert(timestamp);
        let (text, done) = tween.frame_text(timestamp - start);
        element.set_text_content(Some(&text));
        if done {
            // Breaks the slot <-> closure cycle; the drop is deferred until this call returns.
            next.borrow_mut().take();
            return;
        }
        if let Some(callback) = next.borrow().as_ref() {
            if let Err(err) = frame_window.request_animation_frame(callback.as_ref().unchecked_ref())
            {
                log::warn!("Counter animation stopped: {}", js_err(err));
            }
        }
    }));

    let first = slot.borrow();
    let callback = first.as_ref().context("counter callback missing")?;
    window
        .request_animation_frame(callback.as_ref().unchecked_ref())
        .map_err(js_err)?;
    Ok(())
}
