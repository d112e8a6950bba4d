// SPDX-License-Identifier: MPL-2.0
//! `kitty_viewer` fetches one random cat picture and shows it in an Iced
//! window, scaled so its larger side fits a fixed bound.
//!
//! The domain logic (fetching, sizing, lifecycle) lives in [`kitty`] and has
//! no widget code; [`ui`] turns it into views and [`app`] hosts the window.

pub mod app;
pub mod error;
pub mod i18n;
pub mod kitty;
pub mod ui;

pub use app::config;
