// SPDX-License-Identifier: MPL-2.0
//! Iced views and widgets.

pub mod gif;
pub mod remote_image;
pub mod widgets;
