//! Animated stat counters.
//!
//! Each counter climbs from 0 to its `data-target` in fixed increments of
//! `target / steps` on a periodic tick, shows floored integers on the way,
//! and finishes on the exact target with a suffix (`"150+"`).

#[cfg(test)]
#[path = "stats_test.rs"]
mod stats_test;

use crate::config::MotionConfig;
use crate::effect::{Effect, Target, Timer};

/// Parse a leading integer the way `data-target` values are written:
/// optional leading whitespace, optional sign, then digits. Trailing text
/// is ignored (`"150 projects"` -> 150).
#[must_use]
pub fn parse_target(raw: &str) -> Option<i64> {
    let trimmed = raw.trim_start();
    let (negative, digits) = match trimmed.as_bytes().first() {
        Some(b'-') => (true, &trimmed[1..]),
        Some(b'+') => (false, &trimmed[1..]),
        _ => (false, trimmed),
    };
    let end = digits.bytes().take_while(u8::is_ascii_digit).count();
    if end == 0 {
        return None;
    }
    let value = digits[..end].parse::<i64>().ok()?;
    Some(if negative { -value } else { value })
}

/// Outcome of one counter tick.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum CounterFrame {
    /// Intermediate floored value.
    Progress(i64),
    /// Target reached; the tick should stop.
    Done,
}

#[derive(Clone, Debug, PartialEq)]
pub struct CounterAnimation {
    target: i64,
    increment: f64,
    current: f64,
}

impl CounterAnimation {
    #[must_use]
    #[allow(clippy::cast_precision_loss)]
    pub fn new(target: i64, steps: u32) -> Self {
        Self { target, increment: target as f64 / f64::from(steps.max(1)), current: 0.0 }
    }

    #[allow(clippy::cast_possible_truncation, clippy::cast_precision_loss)]
    pub fn advance(&mut self) -> CounterFrame {
        self.current += self.increment;
        if self.current >= self.target as f64 {
            CounterFrame::Done
        } else {
            CounterFrame::Progress(self.current.floor() as i64)
        }
    }

    #[must_use]
    pub fn target(&self) -> i64 {
        self.target
    }
}

#[derive(Clone, Debug)]
struct Stat {
    text: String,
    target: Option<i64>,
    animation: Option<CounterAnimation>,
}

/// Counters inside the stats container.
#[derive(Clone, Debug)]
pub struct StatsState {
    stats: Vec<Stat>,
    steps: u32,
    tick_ms: u32,
    suffix: String,
}

impl StatsState {
    /// `stats` pairs each element's initial text with its raw `data-target`.
    #[must_use]
    pub fn new(stats: Vec<(String, Option<String>)>, motion: &MotionConfig) -> Self {
        let stats = stats
            .into_iter()
            .enumerate()
            .map(|(index, (text, raw))| {
                let target = raw.as_deref().and_then(parse_target);
                if target.is_none() {
                    log::warn!("stat {index} has no usable data-target ({raw:?}); it will not animate");
                }
                Stat { text, target, animation: None }
            })
            .collect();
        Self {
            stats,
            steps: motion.counter_steps,
            tick_ms: motion.counter_tick_ms,
            suffix: motion.counter_suffix.clone(),
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.stats.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.stats.is_empty()
    }

    #[must_use]
    pub fn text(&self, index: usize) -> Option<&str> {
        self.stats.get(index).map(|s| s.text.as_str())
    }

    #[must_use]
    pub fn is_running(&self, index: usize) -> bool {
        self.stats.get(index).is_some_and(|s| s.animation.is_some())
    }

    /// Start every counter still showing its initial `"0"`.
    pub fn start(&mut self, out: &mut Vec<Effect>) {
        for (index, stat) in self.stats.iter_mut().enumerate() {
            if stat.text != "0" || stat.animation.is_some() {
                continue;
            }
            let Some(target) = stat.target else {
                continue;
            };
            stat.animation = Some(CounterAnimation::new(target, self.steps));
            out.push(Effect::SetInterval { timer: Timer::CounterTick(index), period_ms: self.tick_ms });
        }
    }

    /// Advance counter `index` by one tick.
    pub fn tick(&mut self, index: usize, out: &mut Vec<Effect>) {
        let Some(stat) = self.stats.get_mut(index) else {
            return;
        };
        let Some(animation) = stat.animation.as_mut() else {
            // A tick that outlived its counter; make sure it stops.
            out.push(Effect::ClearInterval(Timer::CounterTick(index)));
            return;
        };
        match animation.advance() {
            CounterFrame::Progress(value) => {
                stat.text = value.to_string();
            }
            CounterFrame::Done => {
                stat.text = format!("{}{}", animation.target(), self.suffix);
                stat.animation = None;
                out.push(Effect::ClearInterval(Timer::CounterTick(index)));
            }
        }
        out.push(Effect::text(Target::Stat(index), stat.text.clone()));
    }
}
