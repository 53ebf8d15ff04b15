//! Performs controller effects against the live document.
//!
//! TRADE-OFFS
//! ==========
//! One-shot timeouts are fire-and-forget; only counter intervals are kept,
//! keyed by [`Timer`], because only they are ever cancelled. Platform
//! observers are created lazily, one per [`ObserverKind`], on first use.

use std::rc::Rc;

use gloo_timers::callback::{Interval, Timeout};
use js_sys::Array;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{
    Event, HtmlElement, HtmlFormElement, IntersectionObserver, IntersectionObserverEntry, IntersectionObserverInit,
    ScrollBehavior, ScrollIntoViewOptions,
};

use super::{Host, HostError};
use crate::effect::{Effect, ObserverKind};
use crate::observer::IntersectionEntry;
use crate::page::PageEvent;
use crate::storage;

pub(super) fn perform(host: &Rc<Host>, effect: Effect, dom_event: Option<&Event>) -> Result<(), HostError> {
    let elements = &host.elements;
    match effect {
        Effect::PreventDefault => {
            if let Some(event) = dom_event {
                event.prevent_default();
            }
        }
        Effect::SetClass { target, class, enabled } => {
            if let Some(element) = elements.resolve(target) {
                element.class_list().toggle_with_force(class, enabled).map_err(HostError::js)?;
            }
        }
        Effect::SetText { target, text } => {
            if let Some(element) = elements.resolve(target) {
                element.set_text_content(Some(&text));
            }
        }
        Effect::SetStyle { target, property, value } => {
            if let Some(element) = elements.resolve(target).and_then(|e| e.dyn_ref::<HtmlElement>()) {
                element.style().set_property(property, &value).map_err(HostError::js)?;
            }
        }
        Effect::SetAttribute { target, name, value } => {
            if let Some(element) = elements.resolve(target) {
                element.set_attribute(name, &value).map_err(HostError::js)?;
            }
        }
        Effect::Persist { key, value } => {
            let mut store = host.store.borrow_mut();
            storage::persist(&mut **store, &key, &value);
        }
        Effect::ScrollIntoView { section_id } => {
            if let Some(section) = elements.document.get_element_by_id(&section_id) {
                let options = ScrollIntoViewOptions::new();
                options.set_behavior(ScrollBehavior::Smooth);
                section.scroll_into_view_with_scroll_into_view_options(&options);
            }
        }
        Effect::RequestFrame => request_frame(host)?,
        Effect::Observe(target) => {
            if let Some(element) = elements.observed(target) {
                observer(host, target.kind())?.observe(element);
            }
        }
        Effect::Unobserve(target) => {
            let observer = host.observers.borrow().get(&target.kind()).cloned();
            if let (Some(observer), Some(element)) = (observer, elements.observed(target)) {
                observer.unobserve(element);
            }
        }
        Effect::SetTimeout { timer, delay_ms } => {
            let host = Rc::clone(host);
            Timeout::new(delay_ms, move || host.dispatch(PageEvent::TimerFired(timer), None)).forget();
        }
        Effect::SetInterval { timer, period_ms } => {
            let host_for_tick = Rc::clone(host);
            let interval = Interval::new(period_ms, move || {
                host_for_tick.dispatch(PageEvent::TimerFired(timer), None);
            });
            host.intervals.borrow_mut().insert(timer, interval);
        }
        Effect::ClearInterval(timer) => {
            // Dropping cancels.
            host.intervals.borrow_mut().remove(&timer);
        }
        Effect::Alert(message) => {
            web_sys::window().ok_or(HostError::NoWindow)?.alert_with_message(&message).map_err(HostError::js)?;
        }
        Effect::Navigate(url) => {
            let window = web_sys::window().ok_or(HostError::NoWindow)?;
            window.location().set_href(&url).map_err(HostError::js)?;
        }
        Effect::ResetForm => {
            if let Some(form) = elements.contact_form.as_ref().and_then(|f| f.dyn_ref::<HtmlFormElement>()) {
                form.reset();
            }
        }
        Effect::ProbeAsset(path) => {
            let host = Rc::clone(host);
            wasm_bindgen_futures::spawn_local(async move {
                let found = asset_exists(&path).await;
                host.dispatch(PageEvent::DownloadProbed { found }, None);
            });
        }
        Effect::Click(target) => {
            if let Some(element) = elements.resolve(target).and_then(|e| e.dyn_ref::<HtmlElement>()) {
                element.click();
            }
        }
    }
    Ok(())
}

/// Schedule one animation frame. The pending flag lives in the controller,
/// so this only has to keep the callback alive until it runs.
fn request_frame(host: &Rc<Host>) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let host_for_cb = Rc::clone(host);
    let cb = Closure::wrap(Box::new(move |_ts: f64| {
        // Released once this frame is handled.
        let _running = host_for_cb.frame.borrow_mut().take();
        let layout = host_for_cb.elements.layout();
        host_for_cb.dispatch(PageEvent::AnimationFrame(layout), None);
    }) as Box<dyn FnMut(f64)>);

    if window.request_animation_frame(cb.as_ref().unchecked_ref()).is_ok() {
        *host.frame.borrow_mut() = Some(cb);
    } else {
        let layout = host.elements.layout();
        host.dispatch(PageEvent::AnimationFrame(layout), None);
    }
    Ok(())
}

fn observer(host: &Rc<Host>, kind: ObserverKind) -> Result<IntersectionObserver, HostError> {
    if let Some(existing) = host.observers.borrow().get(&kind) {
        return Ok(existing.clone());
    }

    let options = host.core.borrow().observer_options(kind).clone();
    let host_for_cb = Rc::clone(host);
    let callback = Closure::<dyn FnMut(Array, IntersectionObserver)>::new(move |entries: Array, _| {
        for entry in entries.iter() {
            let entry: IntersectionObserverEntry = entry.unchecked_into();
            let Some(target) = host_for_cb.elements.observe_target(kind, &entry.target()) else {
                continue;
            };
            let entry = IntersectionEntry { intersecting: entry.is_intersecting(), ratio: entry.intersection_ratio() };
            host_for_cb.dispatch(PageEvent::Intersection { target, entry }, None);
        }
    });

    let init = IntersectionObserverInit::new();
    init.set_threshold(&JsValue::from_f64(options.threshold));
    init.set_root_margin(&options.root_margin);
    let observer =
        IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &init).map_err(HostError::js)?;
    callback.forget();
    host.observers.borrow_mut().insert(kind, observer.clone());
    Ok(observer)
}

/// GET the asset. A non-success status or a network error means missing.
async fn asset_exists(path: &str) -> bool {
    match gloo_net::http::Request::get(path).send().await {
        Ok(resp) => resp.ok(),
        Err(e) => {
            log::warn!("asset probe for {path} failed: {e}");
            false
        }
    }
}

