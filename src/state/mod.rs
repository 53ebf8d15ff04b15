//! Page state, split by feature.
//!
//! DESIGN
//! ======
//! Each module owns the state of one page feature and reports the visible
//! consequences of its transitions as [`crate::effect::Effect`]s. None of
//! them read the document; whatever they need arrives through constructors
//! or event payloads, which keeps every transition testable natively.

pub mod contact;
pub mod download;
pub mod images;
pub mod nav;
pub mod projects;
pub mod reveal;
pub mod skills;
pub mod stats;
pub mod theme;
