//! Element discovery, page snapshot and layout measurement.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement, Window};

use super::HostError;
use crate::config::{ConfigError, PageConfig};
use crate::effect::{ObserveTarget, ObserverKind, Target};
use crate::page::PageSnapshot;
use crate::state::contact::ContactSubmission;
use crate::state::nav::{Layout, SectionBox, section_id};
use crate::storage::StoredTheme;

const CONFIG_SCRIPT_ID: &str = "portfolio-config";

/// Read the optional JSON configuration block. Absent means defaults.
pub(super) fn load_config() -> Result<PageConfig, ConfigError> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_SCRIPT_ID))
        .and_then(|e| e.text_content());
    match raw {
        Some(raw) if !raw.trim().is_empty() => PageConfig::from_json(&raw),
        _ => Ok(PageConfig::default()),
    }
}

fn query(document: &Document, selector: &str) -> Result<Option<Element>, HostError> {
    document.query_selector(selector).map_err(HostError::js)
}

fn query_all(document: &Document, selector: &str) -> Result<Vec<Element>, HostError> {
    let list = document.query_selector_all(selector).map_err(HostError::js)?;
    Ok((0..list.length())
        .filter_map(|i| list.get(i))
        .filter_map(|node| node.dyn_into::<Element>().ok())
        .collect())
}

fn attribute_all(elements: &[Element], name: &str) -> Vec<Option<String>> {
    elements.iter().map(|e| e.get_attribute(name)).collect()
}

/// Handles resolved once at bind time, in document order.
pub(super) struct Elements {
    pub document: Document,
    pub body: Option<Element>,
    pub theme_toggle: Option<Element>,
    pub hamburger: Option<Element>,
    pub nav_menu: Option<Element>,
    pub nav_container: Option<Element>,
    pub nav_links: Vec<Element>,
    pub stats_container: Option<Element>,
    pub stats: Vec<Element>,
    pub skills_section: Option<Element>,
    pub progress_bars: Vec<Element>,
    pub filter_buttons: Vec<Element>,
    pub project_cards: Vec<Element>,
    pub reveal_cards: Vec<Element>,
    pub lazy_images: Vec<Element>,
    pub download_link: Option<Element>,
    pub contact_form: Option<Element>,
}

impl Elements {
    pub fn discover(document: Document) -> Result<Self, HostError> {
        let elements = Self {
            body: document.body().map(Element::from),
            theme_toggle: document.get_element_by_id("themeToggle"),
            hamburger: query(&document, ".hamburger")?,
            nav_menu: query(&document, ".nav-menu")?,
            nav_container: query(&document, ".nav-container")?,
            nav_links: query_all(&document, ".nav-link")?,
            stats_container: query(&document, ".about-stats")?,
            stats: query_all(&document, ".about-stats .stat-number")?,
            skills_section: query(&document, ".skills")?,
            progress_bars: query_all(&document, ".progress")?,
            filter_buttons: query_all(&document, ".filter-btn")?,
            project_cards: query_all(&document, ".project-card")?,
            reveal_cards: query_all(&document, ".skill-card, .project-card, .testimonial-card")?,
            lazy_images: query_all(&document, "img[data-src]")?,
            download_link: query(&document, "a[download]")?,
            contact_form: document.get_element_by_id("contactForm"),
            document,
        };
        for (name, present) in [
            ("#themeToggle", elements.theme_toggle.is_some()),
            (".hamburger", elements.hamburger.is_some()),
            (".nav-menu", elements.nav_menu.is_some()),
            ("#contactForm", elements.contact_form.is_some()),
        ] {
            if !present {
                log::warn!("page has no {name}; its behavior is skipped");
            }
        }
        Ok(elements)
    }

    pub fn snapshot(&self, window: &Window, stored: StoredTheme) -> PageSnapshot {
        let system_prefers_dark = window
            .match_media("(prefers-color-scheme: dark)")
            .ok()
            .flatten()
            .is_some_and(|mq| mq.matches());
        let intersection_supported =
            js_sys::Reflect::has(window, &"IntersectionObserver".into()).unwrap_or(false);
        PageSnapshot {
            stored_theme: stored.theme,
            user_override: stored.user_override,
            system_prefers_dark,
            nav_links: self
                .nav_links
                .iter()
                .map(|e| e.get_attribute("href").unwrap_or_default())
                .collect(),
            stats_container: self.stats_container.is_some(),
            stats: self
                .stats
                .iter()
                .map(|e| (e.text_content().unwrap_or_default(), e.get_attribute("data-target")))
                .collect(),
            skills_section: self.skills_section.is_some(),
            progress_widths: self
                .progress_bars
                .iter()
                .map(|e| {
                    e.dyn_ref::<HtmlElement>()
                        .and_then(|h| h.style().get_property_value("width").ok())
                        .unwrap_or_default()
                })
                .collect(),
            filters: attribute_all(&self.filter_buttons, "data-filter")
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
            project_categories: attribute_all(&self.project_cards, "data-category"),
            reveal_cards: self.reveal_cards.len(),
            lazy_images: attribute_all(&self.lazy_images, "data-src")
                .into_iter()
                .map(Option::unwrap_or_default)
                .collect(),
            intersection_supported,
        }
    }

    /// Scroll offset plus each nav link's section box.
    pub fn layout(&self) -> Layout {
        let scroll_y = web_sys::window().and_then(|w| w.scroll_y().ok()).unwrap_or(0.0);
        let sections = self
            .nav_links
            .iter()
            .map(|link| {
                let href = link.get_attribute("href")?;
                let section = self.document.get_element_by_id(section_id(&href)?)?;
                let section = section.dyn_into::<HtmlElement>().ok()?;
                Some(SectionBox {
                    top: f64::from(section.offset_top()),
                    height: f64::from(section.client_height()),
                })
            })
            .collect();
        Layout { scroll_y, sections }
    }

    pub fn resolve(&self, target: Target) -> Option<&Element> {
        match target {
            Target::Body => self.body.as_ref(),
            Target::ThemeToggle => self.theme_toggle.as_ref(),
            Target::Hamburger => self.hamburger.as_ref(),
            Target::NavMenu => self.nav_menu.as_ref(),
            Target::NavLink(i) => self.nav_links.get(i),
            Target::Stat(i) => self.stats.get(i),
            Target::ProgressBar(i) => self.progress_bars.get(i),
            Target::FilterButton(i) => self.filter_buttons.get(i),
            Target::ProjectCard(i) => self.project_cards.get(i),
            Target::RevealCard(i) => self.reveal_cards.get(i),
            Target::LazyImage(i) => self.lazy_images.get(i),
            Target::DownloadLink => self.download_link.as_ref(),
            Target::ContactForm => self.contact_form.as_ref(),
        }
    }

    pub fn observed(&self, target: ObserveTarget) -> Option<&Element> {
        match target {
            ObserveTarget::StatsContainer => self.stats_container.as_ref(),
            ObserveTarget::SkillsSection => self.skills_section.as_ref(),
            ObserveTarget::RevealCard(i) => self.reveal_cards.get(i),
            ObserveTarget::LazyImage(i) => self.lazy_images.get(i),
        }
    }

    /// Map an observer entry's element back to its handle.
    pub fn observe_target(&self, kind: ObserverKind, element: &Element) -> Option<ObserveTarget> {
        match kind {
            ObserverKind::Stats => {
                (self.stats_container.as_ref() == Some(element)).then_some(ObserveTarget::StatsContainer)
            }
            ObserverKind::Skills => {
                (self.skills_section.as_ref() == Some(element)).then_some(ObserveTarget::SkillsSection)
            }
            ObserverKind::Reveal => {
                self.reveal_cards.iter().position(|e| e == element).map(ObserveTarget::RevealCard)
            }
            ObserverKind::Images => {
                self.lazy_images.iter().position(|e| e == element).map(ObserveTarget::LazyImage)
            }
        }
    }

    /// Current values of the contact form fields.
    pub fn contact_submission(&self) -> ContactSubmission {
        let value = |id: &str| {
            self.document
                .get_element_by_id(id)
                .and_then(|e| js_sys::Reflect::get(&e, &"value".into()).ok())
                .and_then(|v| v.as_string())
                .unwrap_or_default()
        };
        ContactSubmission {
            name: value("name"),
            email: value("email"),
            subject: value("subject"),
            message: value("message"),
        }
    }
}
