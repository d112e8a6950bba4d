// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! # Categories
//!
//! - **Sizing**: Display bound applied to the larger side of the image
//! - **Network**: Image-search endpoint

// ==========================================================================
// Sizing Defaults
// ==========================================================================

/// Default bound for the larger side of the displayed image (in pixels).
pub const DEFAULT_MAX_DIMENSION: u32 = 600;

/// Smallest bound a config file may request.
pub const MIN_MAX_DIMENSION: u32 = 64;

/// Largest bound a config file may request.
pub const MAX_MAX_DIMENSION: u32 = 2048;

// ==========================================================================
// Network Defaults
// ==========================================================================

/// Image-search endpoint returning a JSON array of `{url, width, height}`.
pub const DEFAULT_ENDPOINT: &str = "https://api.thecatapi.com/v1/images/search";
