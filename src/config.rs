//! Page configuration parsed from an embedded JSON document.
//!
//! DESIGN
//! ======
//! Every field has a default equal to the behavior the page markup was
//! written against, so an absent or partial config block is valid. The
//! browser host reads `<script id="portfolio-config" type="application/json">`
//! and falls back to [`PageConfig::default`] when parsing or validation fails.

#[cfg(test)]
#[path = "config_test.rs"]
mod config_test;

use serde::{Deserialize, Deserializer, Serialize};

use crate::consts;
use crate::observer::ObserverOptions;

/// Error returned by [`PageConfig::from_json`].
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// The config block is not valid JSON for [`PageConfig`].
    #[error("failed to parse page config: {0}")]
    Parse(#[from] serde_json::Error),
    /// A threshold lies outside `0.0..=1.0`.
    #[error("{field} must be within 0.0..=1.0, got {value}")]
    ThresholdOutOfRange { field: &'static str, value: f64 },
    /// Counters need at least one step to reach their target.
    #[error("motion.counter_steps must be greater than zero")]
    ZeroCounterSteps,
    /// A periodic tick of zero milliseconds would spin the event loop.
    #[error("motion.counter_tick_ms must be greater than zero")]
    ZeroCounterTick,
    /// A required string value is blank.
    #[error("{field} must not be empty")]
    Empty { field: &'static str },
}

/// Top-level page configuration.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct PageConfig {
    pub theme: ThemeConfig,
    pub nav: NavConfig,
    pub motion: MotionConfig,
    pub observers: ObserverConfig,
    pub contact: ContactConfig,
    pub download: DownloadConfig,
    pub log_level: LogLevel,
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThemeConfig {
    pub storage_key: String,
    pub override_key: String,
}

impl Default for ThemeConfig {
    fn default() -> Self {
        Self {
            storage_key: consts::THEME_STORAGE_KEY.to_owned(),
            override_key: consts::OVERRIDE_STORAGE_KEY.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavConfig {
    /// Look-ahead added to the scroll offset before matching sections.
    pub scroll_offset: f64,
}

impl Default for NavConfig {
    fn default() -> Self {
        Self { scroll_offset: consts::NAV_SCROLL_OFFSET }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct MotionConfig {
    pub counter_steps: u32,
    pub counter_tick_ms: u32,
    pub counter_suffix: String,
    pub progress_restore_delay_ms: u32,
    pub card_fade_delay_ms: u32,
    pub reveal_animation: String,
}

impl Default for MotionConfig {
    fn default() -> Self {
        Self {
            counter_steps: consts::COUNTER_STEPS,
            counter_tick_ms: consts::COUNTER_TICK_MS,
            counter_suffix: consts::COUNTER_SUFFIX.to_owned(),
            progress_restore_delay_ms: consts::PROGRESS_RESTORE_DELAY_MS,
            card_fade_delay_ms: consts::CARD_FADE_DELAY_MS,
            reveal_animation: consts::REVEAL_ANIMATION.to_owned(),
        }
    }
}

/// Thresholds and margins for the four visibility observers.
///
/// Each section is merged field by field onto that observer's own default,
/// so overriding only `root_margin` keeps the threshold.
#[derive(Clone, Debug, PartialEq, Serialize)]
pub struct ObserverConfig {
    pub stats: ObserverOptions,
    pub skills: ObserverOptions,
    pub reveal: ObserverOptions,
    pub images: ObserverOptions,
}

impl Default for ObserverConfig {
    fn default() -> Self {
        Self {
            stats: ObserverOptions::new(consts::SECTION_THRESHOLD),
            skills: ObserverOptions::new(consts::SECTION_THRESHOLD),
            reveal: ObserverOptions::new(consts::REVEAL_THRESHOLD).with_root_margin(consts::REVEAL_ROOT_MARGIN),
            images: ObserverOptions::default(),
        }
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ObserverOverride {
    threshold: Option<f64>,
    root_margin: Option<String>,
}

impl ObserverOverride {
    fn merge(self, mut base: ObserverOptions) -> ObserverOptions {
        if let Some(threshold) = self.threshold {
            base.threshold = threshold;
        }
        if let Some(root_margin) = self.root_margin {
            base.root_margin = root_margin;
        }
        base
    }
}

#[derive(Default, Deserialize)]
#[serde(default)]
struct ObserverOverrides {
    stats: ObserverOverride,
    skills: ObserverOverride,
    reveal: ObserverOverride,
    images: ObserverOverride,
}

impl<'de> Deserialize<'de> for ObserverConfig {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        let overrides = ObserverOverrides::deserialize(deserializer)?;
        let defaults = Self::default();
        Ok(Self {
            stats: overrides.stats.merge(defaults.stats),
            skills: overrides.skills.merge(defaults.skills),
            reveal: overrides.reveal.merge(defaults.reveal),
            images: overrides.images.merge(defaults.images),
        })
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ContactConfig {
    pub recipient: String,
    pub reset_delay_ms: u32,
    pub validation_message: String,
    pub thank_you_message: String,
}

impl Default for ContactConfig {
    fn default() -> Self {
        Self {
            recipient: consts::CONTACT_RECIPIENT.to_owned(),
            reset_delay_ms: consts::FORM_RESET_DELAY_MS,
            validation_message: consts::VALIDATION_MESSAGE.to_owned(),
            thank_you_message: consts::THANK_YOU_MESSAGE.to_owned(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DownloadConfig {
    pub asset_path: String,
    pub missing_message: String,
}

impl Default for DownloadConfig {
    fn default() -> Self {
        Self {
            asset_path: consts::CV_ASSET_PATH.to_owned(),
            missing_message: consts::CV_MISSING_MESSAGE.to_owned(),
        }
    }
}

/// Console log verbosity, mirroring `log::Level`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogLevel {
    Error,
    Warn,
    #[default]
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    #[must_use]
    pub fn as_level(self) -> log::Level {
        match self {
            Self::Error => log::Level::Error,
            Self::Warn => log::Level::Warn,
            Self::Info => log::Level::Info,
            Self::Debug => log::Level::Debug,
            Self::Trace => log::Level::Trace,
        }
    }
}

impl PageConfig {
    /// Parse and validate a JSON config document.
    ///
    /// # Errors
    ///
    /// Returns [`ConfigError::Parse`] for malformed JSON and the matching
    /// validation variant for out-of-range values.
    pub fn from_json(raw: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(raw)?;
        config.validate()?;
        Ok(config)
    }

    /// Check value ranges that serde cannot express.
    ///
    /// # Errors
    ///
    /// Returns the first violated constraint.
    pub fn validate(&self) -> Result<(), ConfigError> {
        check_threshold("observers.stats.threshold", self.observers.stats.threshold)?;
        check_threshold("observers.skills.threshold", self.observers.skills.threshold)?;
        check_threshold("observers.reveal.threshold", self.observers.reveal.threshold)?;
        check_threshold("observers.images.threshold", self.observers.images.threshold)?;
        if self.motion.counter_steps == 0 {
            return Err(ConfigError::ZeroCounterSteps);
        }
        if self.motion.counter_tick_ms == 0 {
            return Err(ConfigError::ZeroCounterTick);
        }
        check_non_empty("theme.storage_key", &self.theme.storage_key)?;
        check_non_empty("theme.override_key", &self.theme.override_key)?;
        check_non_empty("contact.recipient", &self.contact.recipient)?;
        check_non_empty("download.asset_path", &self.download.asset_path)?;
        Ok(())
    }
}

fn check_threshold(field: &'static str, value: f64) -> Result<(), ConfigError> {
    if (0.0..=1.0).contains(&value) {
        Ok(())
    } else {
        Err(ConfigError::ThresholdOutOfRange { field, value })
    }
}

fn check_non_empty(field: &'static str, value: &str) -> Result<(), ConfigError> {
    if value.trim().is_empty() {
        Err(ConfigError::Empty { field })
    } else {
        Ok(())
    }
}
