//! Progress-bar fill animation for the skills section.
//!
//! Bars are authored with their final inline width. On the first qualifying
//! intersection each bar collapses to zero and, after a short delay, expands
//! back to the captured width so the CSS transition plays.

#[cfg(test)]
#[path = "skills_test.rs"]
mod skills_test;

use crate::effect::{Effect, Target, Timer};

#[derive(Clone, Debug)]
pub struct SkillBars {
    widths: Vec<String>,
    restore_delay_ms: u32,
    played: bool,
}

impl SkillBars {
    #[must_use]
    pub fn new(widths: Vec<String>, restore_delay_ms: u32) -> Self {
        Self { widths, restore_delay_ms, played: false }
    }

    #[must_use]
    pub fn played(&self) -> bool {
        self.played
    }

    /// Collapse every bar and schedule the restore.
    pub fn collapse(&mut self, out: &mut Vec<Effect>) {
        if self.played {
            return;
        }
        self.played = true;
        for index in 0..self.widths.len() {
            out.push(Effect::style(Target::ProgressBar(index), "width", "0"));
        }
        out.push(Effect::SetTimeout { timer: Timer::ProgressRestore, delay_ms: self.restore_delay_ms });
    }

    pub fn restore(&self, out: &mut Vec<Effect>) {
        for (index, width) in self.widths.iter().enumerate() {
            out.push(Effect::style(Target::ProgressBar(index), "width", width.clone()));
        }
    }
}
