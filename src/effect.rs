//! Effects requested by the page controller and the handles they address.
//!
//! The controller never touches the document. It returns [`Effect`]s and the
//! host (browser or simulator) performs them against whatever elements the
//! [`Target`] handles resolve to.

/// Handle for a page element. Indexed variants follow document order of the
/// matching selector at bind time.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Target {
    /// The element carrying the theme class.
    Body,
    ThemeToggle,
    Hamburger,
    NavMenu,
    NavLink(usize),
    Stat(usize),
    ProgressBar(usize),
    FilterButton(usize),
    ProjectCard(usize),
    /// Skill, project or testimonial card watched for the slide-in reveal.
    RevealCard(usize),
    LazyImage(usize),
    DownloadLink,
    ContactForm,
}

/// Platform observer instances, one per visibility feature.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserverKind {
    Stats,
    Skills,
    Reveal,
    Images,
}

/// An element watched by one of the platform observers.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ObserveTarget {
    StatsContainer,
    SkillsSection,
    RevealCard(usize),
    LazyImage(usize),
}

impl ObserveTarget {
    #[must_use]
    pub fn kind(self) -> ObserverKind {
        match self {
            Self::StatsContainer => ObserverKind::Stats,
            Self::SkillsSection => ObserverKind::Skills,
            Self::RevealCard(_) => ObserverKind::Reveal,
            Self::LazyImage(_) => ObserverKind::Images,
        }
    }
}

/// Deferred continuations. Timeouts fire once; `CounterTick` is periodic.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Timer {
    CounterTick(usize),
    ProgressRestore,
    CardFadeIn(usize),
    FormReset,
}

/// A single host-side action.
#[derive(Clone, Debug, PartialEq)]
pub enum Effect {
    /// Suppress the default action of the DOM event being handled.
    PreventDefault,
    SetClass { target: Target, class: &'static str, enabled: bool },
    SetText { target: Target, text: String },
    SetStyle { target: Target, property: &'static str, value: String },
    SetAttribute { target: Target, name: &'static str, value: String },
    Persist { key: String, value: String },
    ScrollIntoView { section_id: String },
    /// Ask for one `AnimationFrame` event on the next display refresh.
    RequestFrame,
    Observe(ObserveTarget),
    Unobserve(ObserveTarget),
    SetTimeout { timer: Timer, delay_ms: u32 },
    SetInterval { timer: Timer, period_ms: u32 },
    ClearInterval(Timer),
    Alert(String),
    Navigate(String),
    ResetForm,
    /// Check whether `path` is served; answered with `DownloadProbed`.
    ProbeAsset(String),
    /// Re-dispatch a click on `target`, letting its default action run.
    Click(Target),
}

impl Effect {
    #[must_use]
    pub fn class(target: Target, class: &'static str, enabled: bool) -> Self {
        Self::SetClass { target, class, enabled }
    }

    #[must_use]
    pub fn style(target: Target, property: &'static str, value: impl Into<String>) -> Self {
        Self::SetStyle { target, property, value: value.into() }
    }

    #[must_use]
    pub fn text(target: Target, text: impl Into<String>) -> Self {
        Self::SetText { target, text: text.into() }
    }
}
