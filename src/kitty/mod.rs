// SPDX-License-Identifier: MPL-2.0
//! Domain logic for the kitty viewer: fetching a record, sizing it, and
//! tracking where the fetch stands. Nothing in here draws widgets.

pub mod dimensions;
pub mod fetch;
pub mod lifecycle;

pub use dimensions::{scale_to_fit, Dimensions, MaxDimension};
pub use fetch::{fetch_kitty, FetchError, FetchResult, Kitty};
pub use lifecycle::{LifecycleState, Transition};
