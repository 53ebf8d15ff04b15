//! CV download guard.
//!
//! DESIGN
//! ======
//! The first click on the download link is held back while the asset is
//! probed. A successful probe re-clicks the link; that confirmed click is
//! let through untouched. A failed probe explains what is missing.

#[cfg(test)]
#[path = "download_test.rs"]
mod download_test;

use crate::config::DownloadConfig;
use crate::effect::{Effect, Target};

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum DownloadPhase {
    #[default]
    Idle,
    Probing,
    /// Probe succeeded; the next click proceeds with the default action.
    Confirmed,
}

#[derive(Clone, Debug)]
pub struct DownloadGuard {
    config: DownloadConfig,
    phase: DownloadPhase,
}

impl DownloadGuard {
    #[must_use]
    pub fn new(config: &DownloadConfig) -> Self {
        Self { config: config.clone(), phase: DownloadPhase::Idle }
    }

    #[must_use]
    pub fn phase(&self) -> DownloadPhase {
        self.phase
    }

    pub fn on_click(&mut self, out: &mut Vec<Effect>) {
        match self.phase {
            DownloadPhase::Confirmed => {
                self.phase = DownloadPhase::Idle;
            }
            DownloadPhase::Probing => {
                out.push(Effect::PreventDefault);
            }
            DownloadPhase::Idle => {
                self.phase = DownloadPhase::Probing;
                out.push(Effect::PreventDefault);
                out.push(Effect::ProbeAsset(self.config.asset_path.clone()));
            }
        }
    }

    pub fn on_probe(&mut self, found: bool, out: &mut Vec<Effect>) {
        if self.phase != DownloadPhase::Probing {
            log::debug!("ignoring stale download probe result");
            return;
        }
        if found {
            self.phase = DownloadPhase::Confirmed;
            out.push(Effect::Click(Target::DownloadLink));
        } else {
            log::warn!("download asset {} is missing", self.config.asset_path);
            self.phase = DownloadPhase::Idle;
            out.push(Effect::Alert(self.config.missing_message.clone()));
        }
    }
}
