//! DOM listener wiring. Each listener translates one DOM event into a
//! [`PageEvent`] and hands it to [`Host::dispatch`].

use std::rc::Rc;

use wasm_bindgen::JsCast;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, EventTarget, KeyboardEvent, MediaQueryListEvent, Node, Window};

use super::{Host, HostError};
use crate::page::PageEvent;

/// Attach `handler` for the page lifetime.
fn listen(target: &EventTarget, kind: &str, handler: impl FnMut(Event) + 'static) -> Result<(), HostError> {
    let closure = Closure::<dyn FnMut(Event)>::new(handler);
    target
        .add_event_listener_with_callback(kind, closure.as_ref().unchecked_ref())
        .map_err(HostError::js)?;
    closure.forget();
    Ok(())
}

/// Listener that forwards a fixed event and exposes the DOM event for
/// `PreventDefault`.
fn forward(host: &Rc<Host>, target: &EventTarget, kind: &str, event: PageEvent) -> Result<(), HostError> {
    let host = Rc::clone(host);
    listen(target, kind, move |dom_event| host.dispatch(event.clone(), Some(&dom_event)))
}

pub(super) fn bind(host: &Rc<Host>, window: &Window) -> Result<(), HostError> {
    let elements = &host.elements;

    if let Some(toggle) = &elements.theme_toggle {
        forward(host, toggle, "click", PageEvent::ThemeToggleClicked)?;
    }
    if let Some(hamburger) = &elements.hamburger {
        forward(host, hamburger, "click", PageEvent::HamburgerClicked)?;
    }
    for (index, link) in elements.nav_links.iter().enumerate() {
        forward(host, link, "click", PageEvent::NavLinkClicked(index))?;
    }
    for (index, button) in elements.filter_buttons.iter().enumerate() {
        forward(host, button, "click", PageEvent::FilterClicked(index))?;
    }
    if let Some(link) = &elements.download_link {
        forward(host, link, "click", PageEvent::DownloadClicked)?;
    }

    if let Some(form) = &elements.contact_form {
        let host_for_submit = Rc::clone(host);
        listen(form, "submit", move |dom_event| {
            let submission = host_for_submit.elements.contact_submission();
            host_for_submit.dispatch(PageEvent::ContactSubmitted(submission), Some(&dom_event));
        })?;
    }

    // Document-level handlers run after the target's own, so a click on the
    // hamburger opens the menu before the outside-click check sees it.
    let host_for_click = Rc::clone(host);
    listen(&elements.document, "click", move |dom_event| {
        let clicked = dom_event.target().and_then(|t| t.dyn_into::<Node>().ok());
        let inside_nav = host_for_click
            .elements
            .nav_container
            .as_ref()
            .is_some_and(|nav| nav.contains(clicked.as_ref()));
        host_for_click.dispatch(PageEvent::DocumentClicked { inside_nav }, Some(&dom_event));
    })?;

    let host_for_key = Rc::clone(host);
    listen(&elements.document, "keydown", move |dom_event| {
        if let Some(key_event) = dom_event.dyn_ref::<KeyboardEvent>() {
            host_for_key.dispatch(PageEvent::KeyDown(key_event.key()), Some(&dom_event));
        }
    })?;

    forward(host, window, "scroll", PageEvent::Scrolled)?;

    match window.match_media("(prefers-color-scheme: dark)") {
        Ok(Some(query)) => {
            let host_for_scheme = Rc::clone(host);
            listen(&query, "change", move |dom_event| {
                if let Some(change) = dom_event.dyn_ref::<MediaQueryListEvent>() {
                    host_for_scheme.dispatch(PageEvent::SystemColorSchemeChanged { dark: change.matches() }, None);
                }
            })?;
        }
        _ => log::debug!("prefers-color-scheme media query unsupported"),
    }

    let host_for_load = Rc::clone(host);
    let on_load = move || {
        let layout = host_for_load.elements.layout();
        host_for_load.dispatch(PageEvent::Loaded(layout), None);
    };
    if elements.document.ready_state() == "complete" {
        on_load();
    } else {
        let mut on_load = Some(on_load);
        listen(window, "load", move |_| {
            if let Some(on_load) = on_load.take() {
                on_load();
            }
        })?;
    }
    Ok(())
}
