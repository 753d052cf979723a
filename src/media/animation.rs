// SPDX-License-Identifier: MPL-2.0
//! Animated GIF decoding into displayable frames.
//!
//! All frames are decoded up front and composited onto the full logical
//! screen, so each [`Frame`] can be drawn on its own without replaying the
//! ones before it.

use crate::config::{MAX_DECODED_BYTES, MIN_FRAME_DELAY_MS};
use crate::error::{Error, Result};
use iced::widget::image;
use image_rs::codecs::gif::GifDecoder;
use image_rs::{AnimationDecoder, ImageDecoder, ImageFormat};
use std::fmt;
use std::fs;
use std::io::Cursor;
use std::path::Path;
use std::time::Duration;

/// A single composited animation frame.
#[derive(Debug, Clone)]
pub struct Frame {
    handle: image::Handle,
    delay: Duration,
}

impl Frame {
    /// Image handle ready to be drawn by an Iced `image` widget.
    pub fn handle(&self) -> &image::Handle {
        &self.handle
    }

    /// How long this frame stays on screen.
    pub fn delay(&self) -> Duration {
        self.delay
    }
}

/// A decoded animated image. Always holds at least one frame.
#[derive(Clone)]
pub struct Animation {
    width: u32,
    height: u32,
    frames: Vec<Frame>,
    total_duration: Duration,
}

impl fmt::Debug for Animation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Animation")
            .field("width", &self.width)
            .field("height", &self.height)
            .field("frames", &self.frames.len())
            .field("total_duration", &self.total_duration)
            .finish()
    }
}

impl Animation {
    /// Decodes GIF bytes into an animation.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Decode`] if the bytes are not a GIF, if the GIF is
    /// malformed, or if it has no frames or an empty canvas.
    pub fn decode(bytes: &[u8]) -> Result<Self> {
        Self::decode_with_limit(bytes, MAX_DECODED_BYTES)
    }

    /// Decodes GIF bytes, refusing to hold more than `max_decoded_bytes` of
    /// composited RGBA frames.
    ///
    /// Every frame is composited onto the full canvas, so a small file with
    /// many frames or a huge logical screen can expand far beyond its size.
    ///
    /// # Errors
    ///
    /// Returns [`Error::TooLarge`] once the decoded frames would exceed the
    /// limit, or any error listed on [`Animation::decode`].
    pub fn decode_with_limit(bytes: &[u8], max_decoded_bytes: u64) -> Result<Self> {
        if image_rs::guess_format(bytes).ok() != Some(ImageFormat::Gif) {
            return Err(Error::Decode("data is not a GIF image".into()));
        }

        let decoder = GifDecoder::new(Cursor::new(bytes))?;
        let (width, height) = decoder.dimensions();
        if width == 0 || height == 0 {
            return Err(Error::Decode(format!(
                "GIF has empty dimensions ({width}x{height})"
            )));
        }

        let frame_bytes = u64::from(width) * u64::from(height) * 4;
        if frame_bytes > max_decoded_bytes {
            return Err(Error::TooLarge {
                limit: max_decoded_bytes,
            });
        }

        let mut frames = Vec::new();
        let mut decoded_bytes: u64 = 0;
        for frame in decoder.into_frames() {
            decoded_bytes += frame_bytes;
            if decoded_bytes > max_decoded_bytes {
                return Err(Error::TooLarge {
                    limit: max_decoded_bytes,
                });
            }

            let frame = frame?;
            let delay = frame_delay(frame.delay());
            let buffer = frame.into_buffer();
            let (frame_width, frame_height) = buffer.dimensions();
            frames.push(Frame {
                handle: image::Handle::from_rgba(frame_width, frame_height, buffer.into_raw()),
                delay,
            });
        }

        if frames.is_empty() {
            return Err(Error::Decode("no frames found in GIF".into()));
        }

        let total_duration: Duration = frames.iter().map(|frame| frame.delay).sum();

        Ok(Self {
            width,
            height,
            frames,
            total_duration,
        })
    }

    /// Reads and decodes a GIF stored on the local filesystem.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read, or any error
    /// returned by [`Animation::decode`].
    pub fn from_path<P: AsRef<Path>>(path: P) -> Result<Self> {
        let bytes = fs::read(path.as_ref())?;
        Self::decode(&bytes)
    }

    pub fn width(&self) -> u32 {
        self.width
    }

    pub fn height(&self) -> u32 {
        self.height
    }

    pub fn frames(&self) -> &[Frame] {
        &self.frames
    }

    pub fn frame_count(&self) -> usize {
        self.frames.len()
    }

    /// Returns `true` if there is more than one frame to cycle through.
    pub fn is_animated(&self) -> bool {
        self.frames.len() > 1
    }

    /// Duration of one full loop.
    pub fn total_duration(&self) -> Duration {
        self.total_duration
    }

    /// Shortest frame delay. Used as the redraw interval during playback.
    pub fn shortest_delay(&self) -> Duration {
        self.frames
            .iter()
            .map(|frame| frame.delay)
            .min()
            .unwrap_or(Duration::from_millis(MIN_FRAME_DELAY_MS))
    }

    /// Index of the frame shown `elapsed` after playback started.
    ///
    /// Playback loops forever.
    pub fn frame_index_at(&self, elapsed: Duration) -> usize {
        if !self.is_animated() || self.total_duration.is_zero() {
            return 0;
        }

        let total_nanos = self.total_duration.as_nanos();
        let mut position = elapsed.as_nanos() % total_nanos;
        for (index, frame) in self.frames.iter().enumerate() {
            let delay = frame.delay.as_nanos();
            if position < delay {
                return index;
            }
            position -= delay;
        }
        self.frames.len() - 1
    }

    /// Frame shown `elapsed` after playback started.
    pub fn frame_at(&self, elapsed: Duration) -> &Frame {
        &self.frames[self.frame_index_at(elapsed)]
    }
}

/// Converts a GIF frame delay into a display duration, clamping to
/// [`MIN_FRAME_DELAY_MS`].
fn frame_delay(delay: image_rs::Delay) -> Duration {
    let min = Duration::from_millis(MIN_FRAME_DELAY_MS);
    Duration::from(delay).max(min)
}
