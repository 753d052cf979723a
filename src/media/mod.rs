// SPDX-License-Identifier: MPL-2.0
//! Media decoding for animated images.

pub mod animation;

pub use animation::{Animation, Frame};
