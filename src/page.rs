//! The page controller: explicit UI state driven by page events.
//!
//! DESIGN
//! ======
//! [`PageCore`] owns every piece of mutable page state and never touches the
//! document. Hosts translate DOM activity into [`PageEvent`]s, call
//! [`PageCore::handle`], and perform the returned [`Effect`]s. Deferred work
//! (timeouts, intervals, animation frames, the asset probe) comes back in as
//! further events, so a host is a thin loop and the controller can be driven
//! by a simulated event source in tests.
//!
//! SYSTEM CONTEXT
//! ==============
//! `browser` (hydrate builds) and `sim` are the two hosts. Both build a
//! [`PageSnapshot`] from their document, then call [`PageCore::start`] once.

#[cfg(test)]
#[path = "page_test.rs"]
mod page_test;

use crate::config::PageConfig;
use crate::effect::{Effect, ObserveTarget, ObserverKind, Timer};
use crate::observer::{IntersectionEntry, ObserverOptions, OneShotObserver};
use crate::state::contact::{ContactForm, ContactSubmission};
use crate::state::download::DownloadGuard;
use crate::state::images::LazyImages;
use crate::state::nav::{Layout, NavState};
use crate::state::projects::ProjectFilter;
use crate::state::reveal::RevealCards;
use crate::state::skills::SkillBars;
use crate::state::stats::StatsState;
use crate::state::theme::ThemeManager;

/// Everything the controller needs to know about the document at bind time.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PageSnapshot {
    /// Value under the theme storage key, if any.
    pub stored_theme: Option<String>,
    /// Whether the explicit-override marker is present.
    pub user_override: bool,
    pub system_prefers_dark: bool,
    /// `href` of each nav link, in document order.
    pub nav_links: Vec<String>,
    pub stats_container: bool,
    /// Initial text and raw `data-target` of each stat in the container.
    pub stats: Vec<(String, Option<String>)>,
    pub skills_section: bool,
    /// Inline `width` of each progress bar.
    pub progress_widths: Vec<String>,
    /// `data-filter` of each filter button.
    pub filters: Vec<String>,
    /// `data-category` of each project card.
    pub project_categories: Vec<Option<String>>,
    pub reveal_cards: usize,
    /// `data-src` of each deferred image.
    pub lazy_images: Vec<String>,
    pub intersection_supported: bool,
}

/// Input to the controller.
#[derive(Clone, Debug, PartialEq)]
pub enum PageEvent {
    /// The document finished loading.
    Loaded(Layout),
    ThemeToggleClicked,
    SystemColorSchemeChanged { dark: bool },
    HamburgerClicked,
    NavLinkClicked(usize),
    /// Any click on the document, after target-specific handlers.
    DocumentClicked { inside_nav: bool },
    KeyDown(String),
    Scrolled,
    /// A frame requested through `Effect::RequestFrame` is being painted.
    AnimationFrame(Layout),
    Intersection { target: ObserveTarget, entry: IntersectionEntry },
    FilterClicked(usize),
    ContactSubmitted(ContactSubmission),
    DownloadClicked,
    DownloadProbed { found: bool },
    TimerFired(Timer),
}

#[derive(Clone, Debug)]
struct Observers {
    stats: OneShotObserver<ObserveTarget>,
    skills: OneShotObserver<ObserveTarget>,
    reveal: OneShotObserver<ObserveTarget>,
    images: OneShotObserver<ObserveTarget>,
}

impl Observers {
    fn new(config: &PageConfig) -> Self {
        Self {
            stats: OneShotObserver::new(config.observers.stats.clone()),
            skills: OneShotObserver::new(config.observers.skills.clone()),
            reveal: OneShotObserver::new(config.observers.reveal.clone()),
            images: OneShotObserver::new(config.observers.images.clone()),
        }
    }

    fn get(&self, kind: ObserverKind) -> &OneShotObserver<ObserveTarget> {
        match kind {
            ObserverKind::Stats => &self.stats,
            ObserverKind::Skills => &self.skills,
            ObserverKind::Reveal => &self.reveal,
            ObserverKind::Images => &self.images,
        }
    }

    fn get_mut(&mut self, kind: ObserverKind) -> &mut OneShotObserver<ObserveTarget> {
        match kind {
            ObserverKind::Stats => &mut self.stats,
            ObserverKind::Skills => &mut self.skills,
            ObserverKind::Reveal => &mut self.reveal,
            ObserverKind::Images => &mut self.images,
        }
    }
}

/// Inputs consumed by [`PageCore::start`].
#[derive(Clone, Debug)]
struct Boot {
    stored_theme: Option<String>,
    user_override: bool,
    system_prefers_dark: bool,
    stats_container: bool,
    skills_section: bool,
}

/// Page controller state. Separated from any host so it runs natively.
#[derive(Clone, Debug)]
pub struct PageCore {
    pub theme: ThemeManager,
    pub nav: NavState,
    pub stats: StatsState,
    pub skills: SkillBars,
    pub reveal: RevealCards,
    pub projects: ProjectFilter,
    pub contact: ContactForm,
    pub download: DownloadGuard,
    pub images: LazyImages,
    observers: Observers,
    boot: Option<Boot>,
}

impl PageCore {
    #[must_use]
    pub fn new(config: &PageConfig, snapshot: PageSnapshot) -> Self {
        let PageSnapshot {
            stored_theme,
            user_override,
            system_prefers_dark,
            nav_links,
            stats_container,
            stats,
            skills_section,
            progress_widths,
            filters,
            project_categories,
            reveal_cards,
            lazy_images,
            intersection_supported,
        } = snapshot;

        Self {
            theme: ThemeManager::new(&config.theme),
            nav: NavState::new(nav_links, config.nav.scroll_offset),
            stats: StatsState::new(stats, &config.motion),
            skills: SkillBars::new(progress_widths, config.motion.progress_restore_delay_ms),
            reveal: RevealCards::new(reveal_cards, &config.motion.reveal_animation),
            projects: ProjectFilter::new(filters, project_categories, config.motion.card_fade_delay_ms),
            contact: ContactForm::new(&config.contact),
            download: DownloadGuard::new(&config.download),
            images: LazyImages::new(lazy_images, intersection_supported),
            observers: Observers::new(config),
            boot: Some(Boot { stored_theme, user_override, system_prefers_dark, stats_container, skills_section }),
        }
    }

    /// Apply the initial theme and register every observed element.
    /// Only the first call does anything.
    pub fn start(&mut self) -> Vec<Effect> {
        let mut out = Vec::new();
        let Some(boot) = self.boot.take() else {
            return out;
        };

        self.theme
            .initialize(boot.stored_theme.as_deref(), boot.user_override, boot.system_prefers_dark, &mut out);

        if boot.stats_container && !self.stats.is_empty() {
            self.observe(ObserveTarget::StatsContainer, &mut out);
        }
        if boot.skills_section {
            self.observe(ObserveTarget::SkillsSection, &mut out);
        }
        for index in 0..self.reveal.len() {
            self.observe(ObserveTarget::RevealCard(index), &mut out);
        }
        if self.images.enabled() {
            for index in 0..self.images.len() {
                self.observe(ObserveTarget::LazyImage(index), &mut out);
            }
        } else if !self.images.is_empty() {
            log::debug!("intersection observers unavailable; lazy images keep their markup data-src");
        }

        log::debug!(
            "page controller started: {} nav links, {} stats, {} reveal cards, {} lazy images",
            self.nav.links().len(),
            self.stats.len(),
            self.reveal.len(),
            self.images.len()
        );
        out
    }

    /// Threshold and margin for the platform observer backing `kind`.
    #[must_use]
    pub fn observer_options(&self, kind: ObserverKind) -> &ObserverOptions {
        self.observers.get(kind).options()
    }

    #[must_use]
    pub fn is_observing(&self, target: ObserveTarget) -> bool {
        self.observers.get(target.kind()).is_observing(&target)
    }

    pub fn handle(&mut self, event: PageEvent) -> Vec<Effect> {
        let mut out = Vec::new();
        match event {
            PageEvent::Loaded(layout) => {
                self.nav.refresh(&layout, &mut out);
                log::info!("portfolio page loaded");
            }
            PageEvent::ThemeToggleClicked => {
                let theme = self.theme.toggle(&mut out);
                log::debug!("theme toggled to {}", theme.as_str());
            }
            PageEvent::SystemColorSchemeChanged { dark } => {
                self.theme.on_system_change(dark, &mut out);
            }
            PageEvent::HamburgerClicked => self.nav.toggle_menu(&mut out),
            PageEvent::NavLinkClicked(index) => self.nav.on_link_click(index, &mut out),
            PageEvent::DocumentClicked { inside_nav } => self.nav.on_document_click(inside_nav, &mut out),
            PageEvent::KeyDown(key) => self.nav.on_key_down(&key, &mut out),
            PageEvent::Scrolled => self.nav.on_scroll(&mut out),
            PageEvent::AnimationFrame(layout) => self.nav.on_frame(&layout, &mut out),
            PageEvent::Intersection { target, entry } => self.on_intersection(target, entry, &mut out),
            PageEvent::FilterClicked(index) => self.projects.select(index, &mut out),
            PageEvent::ContactSubmitted(submission) => self.contact.submit(&submission, &mut out),
            PageEvent::DownloadClicked => self.download.on_click(&mut out),
            PageEvent::DownloadProbed { found } => self.download.on_probe(found, &mut out),
            PageEvent::TimerFired(timer) => self.on_timer(timer, &mut out),
        }
        out
    }

    fn observe(&mut self, target: ObserveTarget, out: &mut Vec<Effect>) {
        if self.observers.get_mut(target.kind()).observe(target) {
            out.push(Effect::Observe(target));
        }
    }

    fn on_intersection(&mut self, target: ObserveTarget, entry: IntersectionEntry, out: &mut Vec<Effect>) {
        if !self.observers.get_mut(target.kind()).notify(&target, entry) {
            return;
        }
        out.push(Effect::Unobserve(target));
        match target {
            ObserveTarget::StatsContainer => self.stats.start(out),
            ObserveTarget::SkillsSection => self.skills.collapse(out),
            ObserveTarget::RevealCard(index) => self.reveal.reveal(index, out),
            ObserveTarget::LazyImage(index) => self.images.load(index, out),
        }
    }

    fn on_timer(&mut self, timer: Timer, out: &mut Vec<Effect>) {
        match timer {
            Timer::CounterTick(index) => self.stats.tick(index, out),
            Timer::ProgressRestore => self.skills.restore(out),
            Timer::CardFadeIn(index) => self.projects.fade_in(index, out),
            Timer::FormReset => self.contact.reset(out),
        }
    }
}
