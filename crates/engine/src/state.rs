// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::PlaceholderEvent;

/// Per-gesture state of the engine.
///
/// The machine is `Idle → PlaceholderPending → {Committing → Idle |
/// Idle}`. At most one gesture is ever past `Idle`; the dialog being open
/// is equivalent to a placeholder being live. Clicking an event for
/// view/edit is not a gesture and leaves the machine in `Idle`.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum GestureState {
    /// No gesture in flight.
    #[default]
    Idle,
    /// A placeholder is live and the assignment dialog is open.
    PlaceholderPending(PlaceholderEvent),
    /// The placeholder's draft is being persisted.
    Committing(PlaceholderEvent),
}

impl GestureState {
    /// Returns the live placeholder, if any.
    #[must_use]
    pub const fn placeholder(&self) -> Option<&PlaceholderEvent> {
        match self {
            Self::Idle => None,
            Self::PlaceholderPending(placeholder) | Self::Committing(placeholder) => {
                Some(placeholder)
            }
        }
    }

    /// Returns whether a new gesture may begin.
    #[must_use]
    pub const fn is_idle(&self) -> bool {
        matches!(self, Self::Idle)
    }
}
