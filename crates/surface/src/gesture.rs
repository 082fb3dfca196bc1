// Copyright (C) 2026 Fred Clausen
// Use of this source code is governed by an MIT-style
// license that can be found in the LICENSE file or at
// https://opensource.org/licenses/MIT.

use prep_board_domain::EventId;
use time::PrimitiveDateTime;

/// A normalized calendar interaction, decoupled from any particular
/// widget toolkit's callback signatures.
///
/// The host translates raw drop/drag/resize/click callbacks into these
/// values; the board decides what each one means.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Gesture {
    /// A palette recipe was dropped onto a time/resource slot.
    ExternalDrop {
        /// The dragged recipe's id.
        recipe_id: i64,
        /// The slot the drop landed on.
        start: PrimitiveDateTime,
        /// The resource column the drop landed in.
        resource_id: i64,
    },
    /// An existing event was dragged to a new slot.
    Move {
        /// The dragged event.
        event_id: EventId,
        /// The proposed start.
        new_start: PrimitiveDateTime,
        /// The target resource column, or `None` to keep the current one.
        new_resource_id: Option<i64>,
    },
    /// An existing event's edge was dragged.
    Resize {
        /// The resized event.
        event_id: EventId,
        /// The (possibly unchanged) start after the resize.
        new_start: PrimitiveDateTime,
        /// The proposed end.
        new_end: PrimitiveDateTime,
    },
    /// An event block was clicked to view or edit it.
    Click {
        /// The clicked event.
        event_id: EventId,
    },
}
