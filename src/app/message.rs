// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the demo viewer.

use crate::config::FitMode;
use crate::fetch::Url;
use crate::ui::remote_image;
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`.
#[derive(Debug, Clone)]
pub enum Message {
    Image(remote_image::Message),
    /// Periodic tick driving the loading spinner.
    SpinnerTick(Instant),
}

/// Runtime flags passed from the launcher to the application.
#[derive(Debug, Clone)]
pub struct Flags {
    /// Remote GIF to display.
    pub url: Url,
    /// Overrides the configured fit mode.
    pub fit: Option<FitMode>,
    /// Loads settings from this file instead of the platform config dir.
    pub config_path: Option<PathBuf>,
}
