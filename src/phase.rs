// SPDX-License-Identifier: MPL-2.0
//! Lifecycle phase of a remote image.

use crate::ui::gif::Gif;
use std::fmt;

/// Current state of a remote image load.
///
/// A phase starts as [`Phase::Loading`] and moves at most once, to either
/// [`Phase::Error`] or [`Phase::Success`]. It never moves back.
#[derive(Debug, Clone, Default)]
pub enum Phase {
    /// The fetch has not completed yet.
    #[default]
    Loading,
    /// The fetch or the decode failed. No detail is kept.
    Error,
    /// The image was fetched and decoded.
    Success(Gif),
}

/// Payload-free tag of a [`Phase`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PhaseKind {
    Loading,
    Error,
    Success,
}

impl Phase {
    #[must_use]
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Loading => PhaseKind::Loading,
            Phase::Error => PhaseKind::Error,
            Phase::Success(_) => PhaseKind::Success,
        }
    }

    /// Returns `true` once the phase can no longer change.
    #[must_use]
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Phase::Loading)
    }

    /// The decoded image, if the load succeeded.
    #[must_use]
    pub fn gif(&self) -> Option<&Gif> {
        match self {
            Phase::Success(gif) => Some(gif),
            _ => None,
        }
    }
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PhaseKind::Loading => write!(f, "loading"),
            PhaseKind::Error => write!(f, "error"),
            PhaseKind::Success => write!(f, "success"),
        }
    }
}
