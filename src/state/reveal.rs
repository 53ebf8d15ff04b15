//! Slide-in reveal for skill, project and testimonial cards.

#[cfg(test)]
#[path = "reveal_test.rs"]
mod reveal_test;

use crate::effect::{Effect, Target};

#[derive(Clone, Debug)]
pub struct RevealCards {
    revealed: Vec<bool>,
    animation: String,
}

impl RevealCards {
    #[must_use]
    pub fn new(count: usize, animation: &str) -> Self {
        Self { revealed: vec![false; count], animation: animation.to_owned() }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.revealed.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.revealed.is_empty()
    }

    #[must_use]
    pub fn is_revealed(&self, index: usize) -> bool {
        self.revealed.get(index).copied().unwrap_or(false)
    }

    pub fn reveal(&mut self, index: usize, out: &mut Vec<Effect>) {
        let Some(flag) = self.revealed.get_mut(index) else {
            return;
        };
        if *flag {
            return;
        }
        *flag = true;
        out.push(Effect::style(Target::RevealCard(index), "animation", self.animation.clone()));
    }
}
