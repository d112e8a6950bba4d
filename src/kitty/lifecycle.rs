// SPDX-License-Identifier: MPL-2.0
//! Loading / error / loaded lifecycle of a kitty fetch.

use super::fetch::{FetchError, Kitty};

/// Where the single fetch of a component instance stands.
///
/// The state starts in `Loading` and leaves it at most once.
#[derive(Debug, Clone, Default)]
pub enum LifecycleState {
    #[default]
    Loading,
    Error(FetchError),
    Loaded(Kitty),
}

/// Outcome of feeding a fetch result into the lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Transition {
    /// `Loading` became `Loaded`.
    Loaded,
    /// `Loading` became `Error`.
    Failed,
    /// The state had already settled; the result was dropped.
    Ignored,
}

impl LifecycleState {
    #[must_use]
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    #[must_use]
    pub fn is_error(&self) -> bool {
        matches!(self, Self::Error(_))
    }

    #[must_use]
    pub fn kitty(&self) -> Option<&Kitty> {
        match self {
            Self::Loaded(kitty) => Some(kitty),
            _ => None,
        }
    }

    #[must_use]
    pub fn error(&self) -> Option<&FetchError> {
        match self {
            Self::Error(err) => Some(err),
            _ => None,
        }
    }

    /// Settles the state with a fetch outcome.
    ///
    /// Only the first call has an effect; later ones return
    /// [`Transition::Ignored`] and leave the state untouched.
    pub fn complete(&mut self, outcome: Result<Kitty, FetchError>) -> Transition {
        if !self.is_loading() {
            return Transition::Ignored;
        }

        match outcome {
            Ok(kitty) => {
                *self = Self::Loaded(kitty);
                Transition::Loaded
            }
            Err(err) => {
                *self = Self::Error(err);
                Transition::Failed
            }
        }
    }
}
