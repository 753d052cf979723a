// SPDX-License-Identifier: MPL-2.0
//! Test helpers for building GIF payloads in memory and running tasks.

use futures_util::StreamExt;
use iced::Task;
use iced_runtime::Action;
use image_rs::codecs::gif::{GifEncoder, Repeat};
use image_rs::{Delay, Frame, Rgba, RgbaImage};

/// Encodes one solid-colored frame per `(color, delay_ms)` entry into a GIF.
pub fn encode_gif(width: u32, height: u32, frames: &[([u8; 4], u32)]) -> Vec<u8> {
    let mut bytes = Vec::new();
    {
        let mut encoder = GifEncoder::new(&mut bytes);
        encoder
            .set_repeat(Repeat::Infinite)
            .expect("failed to set repeat");
        let frames = frames.iter().map(|(color, delay_ms)| {
            Frame::from_parts(
                RgbaImage::from_pixel(width, height, Rgba(*color)),
                0,
                0,
                Delay::from_numer_denom_ms(*delay_ms, 1),
            )
        });
        encoder
            .encode_frames(frames)
            .expect("failed to encode GIF frames");
    }
    bytes
}

pub const RED: [u8; 4] = [255, 0, 0, 255];
pub const GREEN: [u8; 4] = [0, 255, 0, 255];
pub const BLUE: [u8; 4] = [0, 0, 255, 255];

/// Runs `task` to completion and returns the messages it produced.
pub async fn run_task<T>(task: Task<T>) -> Vec<T> {
    let Some(stream) = iced_runtime::task::into_stream(task) else {
        return Vec::new();
    };
    stream
        .filter_map(|action| async move {
            match action {
                Action::Output(output) => Some(output),
                _ => None,
            }
        })
        .collect()
        .await
}
