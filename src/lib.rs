// SPDX-License-Identifier: MPL-2.0
//! `iced_giffy` displays animated GIFs from remote URLs in Iced applications.
//!
//! The central piece is [`ui::remote_image::RemoteImage`], a view that fetches
//! the bytes behind a URL, decodes them into an [`media::Animation`], and hands
//! its current [`phase::Phase`] to a caller-supplied render function.

pub mod app;
pub mod config;
pub mod error;
pub mod fetch;
pub mod media;
pub mod phase;
pub mod ui;

#[cfg(test)]
mod test_utils;
