//! Headless host: a simulated document, clock and preference store.
//!
//! DESIGN
//! ======
//! The simulator performs effects the way the browser host does, but against
//! an in-memory element table. Timers run on a virtual clock advanced
//! explicitly, animation frames run when asked, and the asset probe resolves
//! on the next clock advance. This makes end-to-end page behavior (persisted
//! theme across reloads, counters ticking to their target, the download
//! round-trip) checkable without a rendering environment.

#[cfg(test)]
#[path = "sim_test.rs"]
mod sim_test;

use std::collections::{BTreeMap, BTreeSet, HashMap, HashSet};

use crate::config::PageConfig;
use crate::effect::{Effect, ObserveTarget, Target, Timer};
use crate::observer::IntersectionEntry;
use crate::page::{PageCore, PageEvent, PageSnapshot};
use crate::state::contact::ContactSubmission;
use crate::state::nav::{Layout, SectionBox, section_id};
use crate::storage::{self, MemoryStore};

/// Description of the simulated page markup.
#[derive(Clone, Debug, Default)]
pub struct SimDocument {
    /// Section ids and their boxes.
    pub sections: Vec<(String, SectionBox)>,
    pub nav_links: Vec<String>,
    pub stats_container: bool,
    pub stats: Vec<(String, Option<String>)>,
    pub skills_section: bool,
    pub progress_widths: Vec<String>,
    pub filters: Vec<String>,
    pub project_categories: Vec<Option<String>>,
    pub reveal_cards: usize,
    pub lazy_images: Vec<String>,
    pub download_link: bool,
    /// Whether the probed asset exists on the simulated server.
    pub asset_available: bool,
    pub intersection_supported: bool,
    pub system_prefers_dark: bool,
}

impl SimDocument {
    /// A typical single-page portfolio: five sections, three stats, two
    /// skill bars, four projects across two categories.
    #[must_use]
    pub fn portfolio() -> Self {
        let sections = [("home", 0.0, 700.0), ("about", 700.0, 900.0), ("skills", 1600.0, 800.0)]
            .into_iter()
            .chain([("projects", 2400.0, 1200.0), ("contact", 3600.0, 800.0)])
            .map(|(id, top, height)| (id.to_owned(), SectionBox { top, height }))
            .collect::<Vec<_>>();
        let nav_links = sections.iter().map(|(id, _)| format!("#{id}")).collect();
        Self {
            sections,
            nav_links,
            stats_container: true,
            stats: vec![
                ("0".to_owned(), Some("150".to_owned())),
                ("0".to_owned(), Some("8".to_owned())),
                ("0".to_owned(), Some("40".to_owned())),
            ],
            skills_section: true,
            progress_widths: vec!["90%".to_owned(), "80%".to_owned()],
            filters: vec!["all".to_owned(), "web".to_owned(), "mobile".to_owned()],
            project_categories: vec![
                Some("web".to_owned()),
                Some("mobile".to_owned()),
                Some("web".to_owned()),
                Some("mobile".to_owned()),
            ],
            reveal_cards: 6,
            lazy_images: vec!["img/avatar.webp".to_owned(), "img/project-1.webp".to_owned()],
            download_link: true,
            asset_available: true,
            intersection_supported: true,
            system_prefers_dark: false,
        }
    }
}

/// Observable state of one simulated element.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct SimElement {
    pub classes: BTreeSet<String>,
    pub text: Option<String>,
    pub styles: BTreeMap<String, String>,
    pub attributes: BTreeMap<String, String>,
}

#[derive(Clone, Copy, Debug)]
struct Scheduled {
    due_ms: u64,
    seq: u64,
    timer: Timer,
    period_ms: Option<u32>,
}

/// Result of dispatching one user-level event.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Dispatch {
    pub default_prevented: bool,
}

pub struct Simulator {
    config: PageConfig,
    document: SimDocument,
    core: PageCore,
    store: MemoryStore,
    elements: HashMap<Target, SimElement>,
    now_ms: u64,
    seq: u64,
    scheduled: Vec<Scheduled>,
    frame_pending: bool,
    frames_requested: usize,
    observed: HashSet<ObserveTarget>,
    pending_probes: Vec<String>,
    probes: Vec<String>,
    alerts: Vec<String>,
    navigations: Vec<String>,
    scrolls: Vec<String>,
    downloads: usize,
    form_resets: usize,
    scroll_y: f64,
}

impl Simulator {
    /// Bind a controller to `document`, reading preferences from `store`.
    /// Call [`Simulator::load`] to run startup.
    #[must_use]
    pub fn new(config: PageConfig, document: SimDocument, store: MemoryStore) -> Self {
        let stored = storage::load_theme(&store, &config.theme);
        let snapshot = PageSnapshot {
            stored_theme: stored.theme,
            user_override: stored.user_override,
            system_prefers_dark: document.system_prefers_dark,
            nav_links: document.nav_links.clone(),
            stats_container: document.stats_container,
            stats: document.stats.clone(),
            skills_section: document.skills_section,
            progress_widths: document.progress_widths.clone(),
            filters: document.filters.clone(),
            project_categories: document.project_categories.clone(),
            reveal_cards: document.reveal_cards,
            lazy_images: document.lazy_images.clone(),
            intersection_supported: document.intersection_supported,
        };
        let core = PageCore::new(&config, snapshot);
        let mut elements = HashMap::new();
        for (index, (text, target)) in document.stats.iter().enumerate() {
            let mut element = SimElement { text: Some(text.clone()), ..SimElement::default() };
            if let Some(target) = target {
                element.attributes.insert("data-target".to_owned(), target.clone());
            }
            elements.insert(Target::Stat(index), element);
        }
        for (index, width) in document.progress_widths.iter().enumerate() {
            let mut element = SimElement::default();
            element.styles.insert("width".to_owned(), width.clone());
            elements.insert(Target::ProgressBar(index), element);
        }
        Self {
            config,
            document,
            core,
            store,
            elements,
            now_ms: 0,
            seq: 0,
            scheduled: Vec::new(),
            frame_pending: false,
            frames_requested: 0,
            observed: HashSet::new(),
            pending_probes: Vec::new(),
            probes: Vec::new(),
            alerts: Vec::new(),
            navigations: Vec::new(),
            scrolls: Vec::new(),
            downloads: 0,
            form_resets: 0,
            scroll_y: 0.0,
        }
    }

    /// A loaded simulator over [`SimDocument::portfolio`] with an empty store.
    #[must_use]
    pub fn portfolio() -> Self {
        let mut sim = Self::new(PageConfig::default(), SimDocument::portfolio(), MemoryStore::new());
        sim.load();
        sim
    }

    /// Run controller startup followed by the document-loaded event.
    pub fn load(&mut self) {
        let effects = self.core.start();
        let mut prevented = false;
        for effect in effects {
            self.apply(effect, &mut prevented);
        }
        let layout = self.layout();
        self.run(PageEvent::Loaded(layout));
    }

    /// Throw away all page state and load again over the same store.
    #[must_use]
    pub fn reload(self) -> Self {
        let mut sim = Self::new(self.config, self.document, self.store);
        sim.load();
        sim
    }

    // --- User and platform input ---

    pub fn dispatch(&mut self, event: PageEvent) -> Dispatch {
        Dispatch { default_prevented: self.run(event) }
    }

    pub fn click_theme_toggle(&mut self) -> Dispatch {
        let dispatch = self.dispatch(PageEvent::ThemeToggleClicked);
        self.run(PageEvent::DocumentClicked { inside_nav: true });
        dispatch
    }

    pub fn click_hamburger(&mut self) -> Dispatch {
        let dispatch = self.dispatch(PageEvent::HamburgerClicked);
        self.run(PageEvent::DocumentClicked { inside_nav: true });
        dispatch
    }

    pub fn click_nav_link(&mut self, index: usize) -> Dispatch {
        let dispatch = self.dispatch(PageEvent::NavLinkClicked(index));
        self.run(PageEvent::DocumentClicked { inside_nav: true });
        dispatch
    }

    pub fn click_outside_nav(&mut self) -> Dispatch {
        self.dispatch(PageEvent::DocumentClicked { inside_nav: false })
    }

    pub fn press_key(&mut self, key: &str) -> Dispatch {
        self.dispatch(PageEvent::KeyDown(key.to_owned()))
    }

    pub fn click_filter(&mut self, index: usize) -> Dispatch {
        let dispatch = self.dispatch(PageEvent::FilterClicked(index));
        self.run(PageEvent::DocumentClicked { inside_nav: false });
        dispatch
    }

    pub fn submit_contact(&mut self, submission: ContactSubmission) -> Dispatch {
        self.dispatch(PageEvent::ContactSubmitted(submission))
    }

    /// Click the download link. Without one in the document nothing happens.
    pub fn click_download(&mut self) -> Dispatch {
        if !self.document.download_link {
            return Dispatch::default();
        }
        let prevented = self.run(PageEvent::DownloadClicked);
        if !prevented {
            self.downloads += 1;
        }
        Dispatch { default_prevented: prevented }
    }

    pub fn set_system_dark(&mut self, dark: bool) {
        self.document.system_prefers_dark = dark;
        self.run(PageEvent::SystemColorSchemeChanged { dark });
    }

    /// Move the viewport and fire a scroll event.
    pub fn scroll_to(&mut self, scroll_y: f64) {
        self.scroll_y = scroll_y;
        self.run(PageEvent::Scrolled);
    }

    /// Paint the pending animation frame, if any. Returns whether one ran.
    pub fn run_frame(&mut self) -> bool {
        if !self.frame_pending {
            return false;
        }
        self.frame_pending = false;
        let layout = self.layout();
        self.run(PageEvent::AnimationFrame(layout));
        true
    }

    /// Report `target` at `ratio` visibility. Returns `false` when the
    /// target is not observed, in which case no event is delivered.
    pub fn show(&mut self, target: ObserveTarget, ratio: f64) -> bool {
        if !self.observed.contains(&target) {
            return false;
        }
        self.run(PageEvent::Intersection { target, entry: IntersectionEntry::visible(ratio) });
        true
    }

    /// Advance the virtual clock, resolving probes and firing due timers.
    pub fn advance(&mut self, ms: u64) {
        for path in std::mem::take(&mut self.pending_probes) {
            let found = self.document.asset_available && path == self.config.download.asset_path;
            self.run(PageEvent::DownloadProbed { found });
        }
        let end = self.now_ms + ms;
        while let Some(index) = self.next_due(end) {
            let entry = self.scheduled[index];
            self.now_ms = entry.due_ms;
            match entry.period_ms {
                Some(period) => {
                    self.seq += 1;
                    self.scheduled[index].due_ms += u64::from(period);
                    self.scheduled[index].seq = self.seq;
                }
                None => {
                    self.scheduled.remove(index);
                }
            }
            self.run(PageEvent::TimerFired(entry.timer));
        }
        self.now_ms = end;
    }

    // --- Inspection ---

    #[must_use]
    pub fn core(&self) -> &PageCore {
        &self.core
    }

    #[must_use]
    pub fn store(&self) -> &MemoryStore {
        &self.store
    }

    #[must_use]
    pub fn element(&self, target: Target) -> Option<&SimElement> {
        self.elements.get(&target)
    }

    #[must_use]
    pub fn has_class(&self, target: Target, class: &str) -> bool {
        self.elements.get(&target).is_some_and(|e| e.classes.contains(class))
    }

    #[must_use]
    pub fn text(&self, target: Target) -> Option<&str> {
        self.elements.get(&target).and_then(|e| e.text.as_deref())
    }

    #[must_use]
    pub fn style(&self, target: Target, property: &str) -> Option<&str> {
        self.elements.get(&target).and_then(|e| e.styles.get(property)).map(String::as_str)
    }

    #[must_use]
    pub fn attribute(&self, target: Target, name: &str) -> Option<&str> {
        self.elements.get(&target).and_then(|e| e.attributes.get(name)).map(String::as_str)
    }

    #[must_use]
    pub fn is_observed(&self, target: ObserveTarget) -> bool {
        self.observed.contains(&target)
    }

    #[must_use]
    pub fn alerts(&self) -> &[String] {
        &self.alerts
    }

    #[must_use]
    pub fn navigations(&self) -> &[String] {
        &self.navigations
    }

    #[must_use]
    pub fn scrolls(&self) -> &[String] {
        &self.scrolls
    }

    #[must_use]
    pub fn probes(&self) -> &[String] {
        &self.probes
    }

    #[must_use]
    pub fn downloads(&self) -> usize {
        self.downloads
    }

    #[must_use]
    pub fn form_resets(&self) -> usize {
        self.form_resets
    }

    #[must_use]
    pub fn frames_requested(&self) -> usize {
        self.frames_requested
    }

    #[must_use]
    pub fn now_ms(&self) -> u64 {
        self.now_ms
    }

    #[must_use]
    pub fn active_timers(&self) -> usize {
        self.scheduled.len()
    }

    /// Current scroll offset plus each nav link's section box.
    #[must_use]
    pub fn layout(&self) -> Layout {
        let sections = self
            .document
            .nav_links
            .iter()
            .map(|href| {
                let id = section_id(href)?;
                self.document
                    .sections
                    .iter()
                    .find(|(section, _)| section == id)
                    .map(|(_, bounds)| *bounds)
            })
            .collect();
        Layout { scroll_y: self.scroll_y, sections }
    }

    // --- Effect execution ---

    fn run(&mut self, event: PageEvent) -> bool {
        let mut prevented = false;
        for effect in self.core.handle(event) {
            self.apply(effect, &mut prevented);
        }
        prevented
    }

    fn next_due(&self, end_ms: u64) -> Option<usize> {
        self.scheduled
            .iter()
            .enumerate()
            .filter(|(_, s)| s.due_ms <= end_ms)
            .min_by_key(|(_, s)| (s.due_ms, s.seq))
            .map(|(index, _)| index)
    }

    fn schedule(&mut self, timer: Timer, delay_ms: u32, period_ms: Option<u32>) {
        self.seq += 1;
        self.scheduled.push(Scheduled { due_ms: self.now_ms + u64::from(delay_ms), seq: self.seq, timer, period_ms });
    }

    fn element_mut(&mut self, target: Target) -> &mut SimElement {
        self.elements.entry(target).or_default()
    }

    fn apply(&mut self, effect: Effect, prevented: &mut bool) {
        match effect {
            Effect::PreventDefault => *prevented = true,
            Effect::SetClass { target, class, enabled } => {
                let classes = &mut self.element_mut(target).classes;
                if enabled {
                    classes.insert(class.to_owned());
                } else {
                    classes.remove(class);
                }
            }
            Effect::SetText { target, text } => self.element_mut(target).text = Some(text),
            Effect::SetStyle { target, property, value } => {
                self.element_mut(target).styles.insert(property.to_owned(), value);
            }
            Effect::SetAttribute { target, name, value } => {
                self.element_mut(target).attributes.insert(name.to_owned(), value);
            }
            Effect::Persist { key, value } => {
                storage::persist(&mut self.store, &key, &value);
            }
            Effect::ScrollIntoView { section_id } => {
                if let Some((_, bounds)) = self.document.sections.iter().find(|(id, _)| *id == section_id) {
                    self.scroll_y = bounds.top;
                }
                self.scrolls.push(section_id);
            }
            Effect::RequestFrame => {
                self.frame_pending = true;
                self.frames_requested += 1;
            }
            Effect::Observe(target) => {
                self.observed.insert(target);
            }
            Effect::Unobserve(target) => {
                self.observed.remove(&target);
            }
            Effect::SetTimeout { timer, delay_ms } => self.schedule(timer, delay_ms, None),
            Effect::SetInterval { timer, period_ms } => self.schedule(timer, period_ms, Some(period_ms)),
            Effect::ClearInterval(timer) => {
                self.scheduled.retain(|s| !(s.timer == timer && s.period_ms.is_some()));
            }
            Effect::Alert(message) => self.alerts.push(message),
            Effect::Navigate(url) => self.navigations.push(url),
            Effect::ResetForm => self.form_resets += 1,
            Effect::ProbeAsset(path) => {
                self.probes.push(path.clone());
                self.pending_probes.push(path);
            }
            Effect::Click(Target::DownloadLink) => {
                self.click_download();
            }
            Effect::Click(other) => log::debug!("simulated click on {other:?} has no handler"),
        }
    }
}
