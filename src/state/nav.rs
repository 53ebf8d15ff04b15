//! Navigation: hamburger menu, smooth-scroll links, scroll-driven highlighting.
//!
//! DESIGN
//! ======
//! Highlighting runs on animation frames, not raw scroll events. A scroll
//! requests a frame only when none is pending, so a burst of scroll events
//! costs one recomputation per display refresh.

#[cfg(test)]
#[path = "nav_test.rs"]
mod nav_test;

use crate::consts::ACTIVE_CLASS;
use crate::effect::{Effect, Target};

/// Vertical span of a page section in document coordinates.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SectionBox {
    pub top: f64,
    pub height: f64,
}

impl SectionBox {
    /// Half-open containment: `[top, top + height)`.
    #[must_use]
    pub fn contains(self, y: f64) -> bool {
        y >= self.top && y < self.top + self.height
    }
}

/// Scroll position plus the box of each nav link's target section, indexed
/// like the links. `None` marks a link whose section is missing.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Layout {
    pub scroll_y: f64,
    pub sections: Vec<Option<SectionBox>>,
}

/// Section id addressed by a fragment href (`#about` -> `about`).
#[must_use]
pub fn section_id(href: &str) -> Option<&str> {
    href.strip_prefix('#').filter(|id| !id.is_empty())
}

/// Index of the first link whose section contains `scroll_y + offset`.
#[must_use]
pub fn active_link_index(layout: &Layout, offset: f64) -> Option<usize> {
    let probe = layout.scroll_y + offset;
    layout
        .sections
        .iter()
        .position(|section| section.is_some_and(|s| s.contains(probe)))
}

/// Pending-flag guard allowing one animation frame in flight.
#[derive(Clone, Copy, Debug, Default)]
pub struct FrameGuard {
    pending: bool,
}

impl FrameGuard {
    /// Returns `true` if the caller should request a frame now.
    pub fn request(&mut self) -> bool {
        if self.pending {
            return false;
        }
        self.pending = true;
        true
    }

    pub fn complete(&mut self) {
        self.pending = false;
    }

    #[must_use]
    pub fn is_pending(self) -> bool {
        self.pending
    }
}

#[derive(Clone, Debug)]
pub struct NavState {
    links: Vec<String>,
    offset: f64,
    menu_open: bool,
    active: Option<usize>,
    synced: bool,
    frame: FrameGuard,
}

impl NavState {
    #[must_use]
    pub fn new(links: Vec<String>, offset: f64) -> Self {
        Self { links, offset, menu_open: false, active: None, synced: false, frame: FrameGuard::default() }
    }

    #[must_use]
    pub fn menu_open(&self) -> bool {
        self.menu_open
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn frame_pending(&self) -> bool {
        self.frame.is_pending()
    }

    #[must_use]
    pub fn links(&self) -> &[String] {
        &self.links
    }

    pub fn toggle_menu(&mut self, out: &mut Vec<Effect>) {
        self.set_menu(!self.menu_open, out);
    }

    /// Close the menu if it is open.
    pub fn close_menu(&mut self, out: &mut Vec<Effect>) {
        if self.menu_open {
            self.set_menu(false, out);
        }
    }

    fn set_menu(&mut self, open: bool, out: &mut Vec<Effect>) {
        self.menu_open = open;
        out.push(Effect::class(Target::Hamburger, ACTIVE_CLASS, open));
        out.push(Effect::class(Target::NavMenu, ACTIVE_CLASS, open));
    }

    /// Close the menu and smooth-scroll to the link's section. Links that
    /// are not fragments keep their default navigation.
    pub fn on_link_click(&mut self, index: usize, out: &mut Vec<Effect>) {
        self.close_menu(out);
        let Some(href) = self.links.get(index) else {
            log::warn!("click on unknown nav link {index}");
            return;
        };
        if let Some(id) = section_id(href) {
            out.push(Effect::PreventDefault);
            out.push(Effect::ScrollIntoView { section_id: id.to_owned() });
        }
    }

    pub fn on_document_click(&mut self, inside_nav: bool, out: &mut Vec<Effect>) {
        if !inside_nav {
            self.close_menu(out);
        }
    }

    pub fn on_key_down(&mut self, key: &str, out: &mut Vec<Effect>) {
        if key == "Escape" {
            self.close_menu(out);
        }
    }

    pub fn on_scroll(&mut self, out: &mut Vec<Effect>) {
        if self.frame.request() {
            out.push(Effect::RequestFrame);
        }
    }

    pub fn on_frame(&mut self, layout: &Layout, out: &mut Vec<Effect>) {
        self.frame.complete();
        self.refresh(layout, out);
    }

    /// Recompute the active link. The first call sets every link's class;
    /// later calls only touch links whose state changed.
    pub fn refresh(&mut self, layout: &Layout, out: &mut Vec<Effect>) {
        if layout.sections.len() != self.links.len() {
            log::warn!(
                "layout has {} sections for {} nav links",
                layout.sections.len(),
                self.links.len()
            );
        }
        let next = active_link_index(layout, self.offset).filter(|i| *i < self.links.len());
        if self.synced && next == self.active {
            return;
        }
        for index in 0..self.links.len() {
            let was = self.synced && self.active == Some(index);
            let now = next == Some(index);
            if !self.synced || was != now {
                out.push(Effect::class(Target::NavLink(index), ACTIVE_CLASS, now));
            }
        }
        self.active = next;
        self.synced = true;
    }
}
