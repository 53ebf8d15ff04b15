//! Client-side behavior for a single-page portfolio site.
//!
//! This crate is compiled to WebAssembly and runs in the browser. It owns the
//! page's interactive state: the light/dark theme and its persisted
//! preference, the mobile menu and scroll-synced nav highlighting, counters
//! and skill bars that animate when scrolled into view, the project filter,
//! the mail-client contact form, lazy images and the guarded CV download.
//! The markup and styles are static; this crate only reacts to them.
//!
//! ## Module layout
//!
//! | Module | Role |
//! |--------|------|
//! | [`page`] | Page controller [`page::PageCore`]: events in, effects out |
//! | [`state`] | One state machine per page feature |
//! | [`effect`] | Effects, element handles and timer ids |
//! | [`observer`] | One-shot visibility subscriptions |
//! | [`storage`] | Preference store trait and implementations |
//! | [`config`] | JSON page configuration with validated defaults |
//! | `sim` | Headless host with a virtual clock and fake document (tests, `sim` feature) |
//! | `browser` | Live document host (`hydrate` feature only) |
//! | [`consts`] | Default class names, timings, messages and keys |

pub mod config;
pub mod consts;
pub mod effect;
pub mod observer;
pub mod page;
pub mod state;
pub mod storage;

#[cfg(any(test, feature = "sim"))]
pub mod sim;

#[cfg(feature = "hydrate")]
pub mod browser;

/// Wasm start hook.
#[cfg(feature = "hydrate")]
#[wasm_bindgen::prelude::wasm_bindgen(start)]
pub fn hydrate() {
    browser::boot();
}
