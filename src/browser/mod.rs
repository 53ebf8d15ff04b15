//! Browser host: binds [`PageCore`] to the live document.
//!
//! DESIGN
//! ======
//! [`Host`] is shared by every listener closure through an `Rc`. A dispatch
//! borrows the controller only long enough to collect effects, then performs
//! them with no borrow held, so an effect that fires a DOM event (the
//! confirmed download click) can re-enter [`Host::dispatch`] synchronously.
//!
//! SYSTEM CONTEXT
//! ==============
//! Built only with the `hydrate` feature. `crate::hydrate` calls [`boot`] once
//! when the wasm module starts.
//!
//! ERROR HANDLING
//! ==============
//! Binding and effect failures are [`HostError`]s. They are logged and the
//! affected feature is skipped; nothing here takes the page down.

mod apply;
mod dom;
mod listeners;

use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

use gloo_timers::callback::Interval;
use wasm_bindgen::JsValue;
use wasm_bindgen::closure::Closure;
use web_sys::{Event, IntersectionObserver};

use crate::config::PageConfig;
use crate::effect::{ObserverKind, Timer};
use crate::page::{PageCore, PageEvent};
use crate::storage::{self, LocalStore, MemoryStore, PreferenceStore};

use dom::Elements;

#[derive(Debug, thiserror::Error)]
pub enum HostError {
    #[error("no global window")]
    NoWindow,
    #[error("window has no document")]
    NoDocument,
    #[error("javascript error: {0}")]
    Js(String),
}

impl HostError {
    pub(crate) fn js(value: JsValue) -> Self {
        Self::Js(format!("{value:?}"))
    }
}

/// Live page binding.
pub(crate) struct Host {
    core: RefCell<PageCore>,
    elements: Elements,
    store: RefCell<Box<dyn PreferenceStore>>,
    intervals: RefCell<HashMap<Timer, Interval>>,
    observers: RefCell<HashMap<ObserverKind, IntersectionObserver>>,
    frame: RefCell<Option<Closure<dyn FnMut(f64)>>>,
}

impl Host {
    /// Run `event` through the controller and perform the resulting effects.
    /// `dom_event` is the DOM event being handled, for `PreventDefault`.
    pub(crate) fn dispatch(self: &Rc<Self>, event: PageEvent, dom_event: Option<&Event>) {
        let effects = self.core.borrow_mut().handle(event);
        for effect in effects {
            if let Err(e) = apply::perform(self, effect, dom_event) {
                log::warn!("page effect failed: {e}");
            }
        }
    }
}

/// Wasm entry: install logging, read configuration, bind the page.
pub fn boot() {
    console_error_panic_hook::set_once();
    let (config, config_error) = match dom::load_config() {
        Ok(config) => (config, None),
        Err(e) => (PageConfig::default(), Some(e)),
    };
    // Fails only if a logger is already installed.
    let _ = console_log::init_with_level(config.log_level.as_level());
    if let Some(e) = config_error {
        log::warn!("invalid page configuration, using defaults: {e}");
    }
    if let Err(e) = mount(&config) {
        log::error!("portfolio page failed to bind: {e}");
    }
}

fn mount(config: &PageConfig) -> Result<(), HostError> {
    let window = web_sys::window().ok_or(HostError::NoWindow)?;
    let document = window.document().ok_or(HostError::NoDocument)?;

    let store: Box<dyn PreferenceStore> = match LocalStore::open() {
        Some(local) => Box::new(local),
        None => {
            log::warn!("localStorage unavailable; theme choice lasts for this visit only");
            Box::new(MemoryStore::new())
        }
    };
    let stored = storage::load_theme(&*store, &config.theme);

    let elements = Elements::discover(document)?;
    let snapshot = elements.snapshot(&window, stored);
    let host = Rc::new(Host {
        core: RefCell::new(PageCore::new(config, snapshot)),
        elements,
        store: RefCell::new(store),
        intervals: RefCell::new(HashMap::new()),
        observers: RefCell::new(HashMap::new()),
        frame: RefCell::new(None),
    });

    let effects = host.core.borrow_mut().start();
    for effect in effects {
        if let Err(e) = apply::perform(&host, effect, None) {
            log::warn!("startup effect failed: {e}");
        }
    }
    listeners::bind(&host, &window)?;
    Ok(())
}
