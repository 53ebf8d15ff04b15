//! Project-card filtering by category.
//!
//! DESIGN
//! ======
//! Visibility is recomputed from scratch on every filter click; nothing
//! about the previous filter carries over except which button is active.
//! Re-shown cards restart from opacity 0 and fade in after a short delay,
//! hidden cards disappear immediately.

#[cfg(test)]
#[path = "projects_test.rs"]
mod projects_test;

use crate::consts::{ACTIVE_CLASS, HIDDEN_CLASS};
use crate::effect::{Effect, Target, Timer};

/// Filter value that matches every card.
pub const WILDCARD: &str = "all";

/// Whether a card with `category` is shown under `filter`.
#[must_use]
pub fn matches(filter: &str, category: Option<&str>) -> bool {
    filter == WILDCARD || category == Some(filter)
}

#[derive(Clone, Debug)]
struct ProjectCard {
    category: Option<String>,
    visible: bool,
}

#[derive(Clone, Debug)]
pub struct ProjectFilter {
    buttons: Vec<String>,
    cards: Vec<ProjectCard>,
    active: Option<usize>,
    fade_delay_ms: u32,
}

impl ProjectFilter {
    /// `buttons` are the `data-filter` values, `categories` the cards'
    /// `data-category` values, both in document order.
    #[must_use]
    pub fn new(buttons: Vec<String>, categories: Vec<Option<String>>, fade_delay_ms: u32) -> Self {
        let cards = categories.into_iter().map(|category| ProjectCard { category, visible: true }).collect();
        Self { buttons, cards, active: None, fade_delay_ms }
    }

    #[must_use]
    pub fn active(&self) -> Option<usize> {
        self.active
    }

    #[must_use]
    pub fn is_visible(&self, card: usize) -> bool {
        self.cards.get(card).is_some_and(|c| c.visible)
    }

    #[must_use]
    pub fn visible_count(&self) -> usize {
        self.cards.iter().filter(|c| c.visible).count()
    }

    /// Activate button `index` and apply its filter to every card.
    pub fn select(&mut self, index: usize, out: &mut Vec<Effect>) {
        let Some(filter) = self.buttons.get(index).cloned() else {
            log::warn!("click on unknown filter button {index}");
            return;
        };
        for button in 0..self.buttons.len() {
            out.push(Effect::class(Target::FilterButton(button), ACTIVE_CLASS, button == index));
        }
        self.active = Some(index);

        for (card_index, card) in self.cards.iter_mut().enumerate() {
            let target = Target::ProjectCard(card_index);
            card.visible = matches(&filter, card.category.as_deref());
            if card.visible {
                out.push(Effect::class(target, HIDDEN_CLASS, false));
                out.push(Effect::style(target, "opacity", "0"));
                out.push(Effect::SetTimeout { timer: Timer::CardFadeIn(card_index), delay_ms: self.fade_delay_ms });
            } else {
                out.push(Effect::class(target, HIDDEN_CLASS, true));
            }
        }
        log::debug!("filter {filter:?} shows {} of {} projects", self.visible_count(), self.cards.len());
    }

    pub fn fade_in(&self, card: usize, out: &mut Vec<Effect>) {
        if card < self.cards.len() {
            out.push(Effect::style(Target::ProjectCard(card), "opacity", "1"));
        }
    }
}
