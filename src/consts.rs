//! Shared constants: default timings, thresholds, storage keys and the class
//! names the page stylesheet reacts to.

// ── Theme ───────────────────────────────────────────────────────

/// Storage key holding the persisted theme value.
pub const THEME_STORAGE_KEY: &str = "theme";

/// Storage key marking that the user picked a theme by hand.
pub const OVERRIDE_STORAGE_KEY: &str = "userThemePreference";

/// Persisted value and body class for dark mode.
pub const DARK_MODE: &str = "dark-mode";

/// Persisted value for light mode.
pub const LIGHT_MODE: &str = "light-mode";

/// Toggle glyph shown while dark mode is active.
pub const SUN_ICON: &str = "\u{2600}\u{fe0f}";

/// Toggle glyph shown while light mode is active.
pub const MOON_ICON: &str = "\u{1f319}";

// ── Classes ─────────────────────────────────────────────────────

/// Marks the open menu, the active nav link and the active filter button.
pub const ACTIVE_CLASS: &str = "active";

/// Marks a filtered-out project card.
pub const HIDDEN_CLASS: &str = "hidden";

/// Marks a lazy image whose source has been assigned.
pub const LOADED_CLASS: &str = "loaded";

// ── Navigation ──────────────────────────────────────────────────

/// Look-ahead added to the scroll offset before matching sections.
pub const NAV_SCROLL_OFFSET: f64 = 100.0;

// ── Motion ──────────────────────────────────────────────────────

/// Number of increments a stat counter takes to reach its target.
pub const COUNTER_STEPS: u32 = 50;

/// Period of the stat counter tick, in milliseconds.
pub const COUNTER_TICK_MS: u32 = 40;

/// Suffix appended to a counter once it reaches its target.
pub const COUNTER_SUFFIX: &str = "+";

/// Delay before collapsed progress bars are expanded again.
pub const PROGRESS_RESTORE_DELAY_MS: u32 = 100;

/// Delay before a re-shown project card fades back in.
pub const CARD_FADE_DELAY_MS: u32 = 10;

/// CSS animation applied to cards when they scroll into view.
pub const REVEAL_ANIMATION: &str = "slideInLeft 0.6s ease-out forwards";

// ── Observers ───────────────────────────────────────────────────

/// Visible ratio required before counters and progress bars start.
pub const SECTION_THRESHOLD: f64 = 0.5;

/// Visible ratio required before a card slides in.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Root margin for card reveals; pulls the trigger line 50px above the fold.
pub const REVEAL_ROOT_MARGIN: &str = "0px 0px -50px 0px";

// ── Contact ─────────────────────────────────────────────────────

/// Default mail recipient for the contact form.
pub const CONTACT_RECIPIENT: &str = "charles@example.com";

/// Delay between the mail handoff and the form reset.
pub const FORM_RESET_DELAY_MS: u32 = 100;

pub const VALIDATION_MESSAGE: &str = "Please fill in all fields.";

pub const THANK_YOU_MESSAGE: &str = "Thank you for your message! I'll be in touch soon.";

// ── Download ────────────────────────────────────────────────────

/// Relative path of the downloadable CV.
pub const CV_ASSET_PATH: &str = "assets/portfolio.pdf";

pub const CV_MISSING_MESSAGE: &str = "CV file not found. Please add your portfolio.pdf to the assets folder.";
