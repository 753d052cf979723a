// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Network**: HTTP client settings used by the remote fetcher
//! - **Playback**: Frame timing bounds for GIF animation

// ==========================================================================
// Network Defaults
// ==========================================================================

/// User agent sent with every image request.
pub const DEFAULT_USER_AGENT: &str = "IcedGiffy/0.1.0";

/// Default timeout for a whole request, connection included (in seconds).
pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Minimum allowed request timeout (in seconds).
pub const MIN_TIMEOUT_SECS: u64 = 1;

/// Maximum allowed request timeout (in seconds).
pub const MAX_TIMEOUT_SECS: u64 = 300;

/// Default number of redirects followed before giving up.
pub const DEFAULT_MAX_REDIRECTS: usize = 10;

/// Default cap on a response body (32 MiB).
pub const DEFAULT_MAX_BODY_BYTES: u64 = 32 * 1024 * 1024;

// ==========================================================================
// Playback Defaults
// ==========================================================================

/// Shortest delay a GIF frame is displayed for (in milliseconds).
///
/// Many encoders write a zero delay; those frames are shown for this long.
pub const MIN_FRAME_DELAY_MS: u64 = 16;

/// Cap on the composited RGBA frames of one animation (512 MiB).
pub const MAX_DECODED_BYTES: u64 = 512 * 1024 * 1024;
