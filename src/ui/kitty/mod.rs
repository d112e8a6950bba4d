// SPDX-License-Identifier: MPL-2.0
//! The kitty component: a single fetched cat picture with its loading and
//! error fallbacks.

pub mod component;
pub mod view;

pub use component::{Message, Props, State};
pub use view::{ImageView, KittyView};
