use super::*;
use crate::consts::{ACTIVE_CLASS, DARK_MODE};
use crate::state::theme::Theme;
use crate::storage::PreferenceStore;

fn fresh(document: SimDocument, store: MemoryStore) -> Simulator {
    let mut sim = Simulator::new(PageConfig::default(), document, store);
    sim.load();
    sim
}

// =============================================================================
// Loading
// =============================================================================

#[test]
fn load_registers_observers_and_highlights_first_section() {
    let sim = Simulator::portfolio();
    assert!(sim.is_observed(ObserveTarget::StatsContainer));
    assert!(sim.is_observed(ObserveTarget::SkillsSection));
    assert!(sim.is_observed(ObserveTarget::RevealCard(5)));
    assert!(sim.is_observed(ObserveTarget::LazyImage(1)));
    assert!(sim.has_class(Target::NavLink(0), ACTIVE_CLASS));
    assert!(!sim.has_class(Target::NavLink(1), ACTIVE_CLASS));
}

#[test]
fn layout_maps_links_to_section_boxes() {
    let mut document = SimDocument::portfolio();
    document.nav_links.push("resume.html".to_owned());
    let sim = fresh(document, MemoryStore::new());
    let layout = sim.layout();
    assert_eq!(layout.sections.len(), 6);
    assert_eq!(layout.sections[1], Some(SectionBox { top: 700.0, height: 900.0 }));
    assert_eq!(layout.sections[5], None);
}

#[test]
fn elements_start_with_markup_values() {
    let sim = Simulator::portfolio();
    assert_eq!(sim.text(Target::Stat(0)), Some("0"));
    assert_eq!(sim.attribute(Target::Stat(0), "data-target"), Some("150"));
    assert_eq!(sim.style(Target::ProgressBar(1), "width"), Some("80%"));
}

// =============================================================================
// Clock
// =============================================================================

#[test]
fn advance_fires_timers_in_due_order() {
    let mut sim = Simulator::portfolio();
    sim.show(ObserveTarget::SkillsSection, 1.0);
    assert_eq!(sim.style(Target::ProgressBar(0), "width"), Some("0"));

    sim.advance(99);
    assert_eq!(sim.style(Target::ProgressBar(0), "width"), Some("0"));
    sim.advance(1);
    assert_eq!(sim.style(Target::ProgressBar(0), "width"), Some("90%"));
    assert_eq!(sim.now_ms(), 100);
}

#[test]
fn intervals_repeat_until_cleared() {
    let mut sim = Simulator::portfolio();
    sim.show(ObserveTarget::StatsContainer, 1.0);
    assert_eq!(sim.active_timers(), 3);

    sim.advance(400);
    assert_eq!(sim.text(Target::Stat(0)), Some("30"));
    sim.advance(10_000);
    assert_eq!(sim.active_timers(), 0);
}

#[test]
fn frames_only_run_when_requested() {
    let mut sim = Simulator::portfolio();
    assert!(!sim.run_frame());
    sim.scroll_to(10.0);
    assert!(sim.run_frame());
    assert!(!sim.run_frame());
}

#[test]
fn unobserved_targets_receive_nothing() {
    let mut sim = Simulator::portfolio();
    assert!(sim.show(ObserveTarget::RevealCard(0), 1.0));
    assert!(!sim.show(ObserveTarget::RevealCard(0), 1.0));
    assert!(!sim.show(ObserveTarget::RevealCard(42), 1.0));
}

// =============================================================================
// Persistence
// =============================================================================

#[test]
fn reload_keeps_the_store() {
    let mut sim = Simulator::portfolio();
    sim.click_theme_toggle();
    let sim = sim.reload();
    assert_eq!(sim.core().theme.theme(), Theme::Dark);
    assert!(sim.has_class(Target::Body, DARK_MODE));
    assert!(sim.core().theme.has_user_override());
}

#[test]
fn read_only_store_keeps_session_theme() {
    let mut sim = fresh(SimDocument::portfolio(), MemoryStore::read_only());
    sim.click_theme_toggle();
    assert!(sim.has_class(Target::Body, DARK_MODE));
    assert_eq!(sim.store().get("theme"), None);

    let sim = sim.reload();
    assert!(!sim.has_class(Target::Body, DARK_MODE));
}

// =============================================================================
// Download round-trip
// =============================================================================

#[test]
fn probe_resolves_on_next_advance() {
    let mut sim = Simulator::portfolio();
    assert!(sim.click_download().default_prevented);
    assert_eq!(sim.probes(), ["assets/portfolio.pdf".to_owned()]);
    assert_eq!(sim.downloads(), 0);

    sim.advance(0);
    assert_eq!(sim.downloads(), 1);
    assert!(sim.alerts().is_empty());
}

#[test]
fn document_without_download_link_ignores_clicks() {
    let mut document = SimDocument::portfolio();
    document.download_link = false;
    let mut sim = fresh(document, MemoryStore::new());
    assert!(!sim.click_download().default_prevented);
    assert!(sim.probes().is_empty());
}
