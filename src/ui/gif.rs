// SPDX-License-Identifier: MPL-2.0
//! Playable GIF renderable.
//!
//! A [`Gif`] pairs a decoded [`Animation`] with a playback clock. The clock
//! only moves when [`Gif::tick`] is called, so rendering stays a pure
//! function of the state.

use crate::error::Result;
use crate::media::{Animation, Frame};
use iced::widget::image;
use iced::{ContentFit, Element, Length};
use std::path::Path;
use std::sync::Arc;
use std::time::{Duration, Instant};

/// Decoded animated image ready to be drawn.
#[derive(Debug, Clone)]
pub struct Gif {
    animation: Arc<Animation>,
    started_at: Instant,
    now: Instant,
    content_fit: ContentFit,
}

impl Gif {
    /// Starts playback of `animation` from its first frame.
    pub fn new(animation: Arc<Animation>) -> Self {
        Self::started_at(animation, Instant::now())
    }

    /// Starts playback with an explicit clock origin.
    pub fn started_at(animation: Arc<Animation>, started_at: Instant) -> Self {
        Self {
            animation,
            started_at,
            now: started_at,
            content_fit: ContentFit::Contain,
        }
    }

    /// Loads a GIF from the local filesystem.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read or decoded.
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        Animation::from_path(path).map(|animation| Self::new(Arc::new(animation)))
    }

    /// Sets how the frame is scaled inside its bounds.
    #[must_use]
    pub fn content_fit(mut self, content_fit: ContentFit) -> Self {
        self.content_fit = content_fit;
        self
    }

    pub fn animation(&self) -> &Animation {
        &self.animation
    }

    /// Playback time since the first frame was shown.
    pub fn elapsed(&self) -> Duration {
        self.now.saturating_duration_since(self.started_at)
    }

    /// Advances the playback clock. Instants older than the current one are
    /// ignored.
    pub fn tick(&mut self, now: Instant) {
        if now > self.now {
            self.now = now;
        }
    }

    /// Frame for the current playback position.
    pub fn current_frame(&self) -> &Frame {
        self.animation.frame_at(self.elapsed())
    }

    /// Interval at which a host should call [`Gif::tick`], or `None` for a
    /// still image.
    pub fn tick_interval(&self) -> Option<Duration> {
        self.animation
            .is_animated()
            .then(|| self.animation.shortest_delay())
    }

    /// Renders the current frame.
    pub fn view<'a, Message: 'a>(&'a self) -> Element<'a, Message> {
        image::Image::new(self.current_frame().handle().clone())
            .content_fit(self.content_fit)
            .width(Length::Fill)
            .height(Length::Fill)
            .into()
    }
}
