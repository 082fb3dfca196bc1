// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::{EventId, FieldError};
use prep_board_engine::EngineError;
use prep_board_store::StoreError;

/// Errors surfaced to the board host.
#[derive(Debug)]
pub enum SurfaceError {
    /// The scheduling engine refused or failed the interaction.
    Engine(EngineError),
    /// A directory or palette fetch failed.
    Store(StoreError),
    /// The dialog draft is incomplete; the field errors are for inline
    /// display.
    Validation(Vec<FieldError>),
    /// A gesture referenced a recipe the palette does not offer.
    UnknownRecipe(i64),
    /// A gesture referenced an event that is not on the board.
    UnknownEvent(EventId),
}

impl std::fmt::Display for SurfaceError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Engine(error) => write!(f, "{error}"),
            Self::Store(error) => write!(f, "{error}"),
            Self::Validation(errors) => {
                write!(f, "Draft is incomplete: {} field error(s)", errors.len())
            }
            Self::UnknownRecipe(id) => write!(f, "Recipe {id} is not in the palette"),
            Self::UnknownEvent(id) => write!(f, "Event {id} is not on the board"),
        }
    }
}

impl std::error::Error for SurfaceError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Engine(error) => Some(error),
            Self::Store(error) => Some(error),
            _ => None,
        }
    }
}

impl From<EngineError> for SurfaceError {
    fn from(error: EngineError) -> Self {
        Self::Engine(error)
    }
}

impl From<StoreError> for SurfaceError {
    fn from(error: StoreError) -> Self {
        Self::Store(error)
    }
}
