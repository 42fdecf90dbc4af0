#![forbid(unsafe_code)]

//! Gridboard public facade crate.
//!
//! This crate provides the stable, ergonomic surface area for users. It
//! re-exports the common types from the internal crates and offers a
//! lightweight prelude for day-to-day usage.
//!
//! ```
//! use gridboard::prelude::*;
//!
//! let mut board = BoardController::default();
//! board.apply(BoardEvent::PointerEntered);
//! assert_eq!(board.items().len(), 36);
//!
//! let id = board.add_item(Cell::new(0, 0), &ItemOption::new("A", 1, 1));
//! assert_eq!(id.to_string(), "A0");
//! ```

// --- Core re-exports -------------------------------------------------------

pub use gridboard_core::cell::{Cell, GRID_COLS, cells_row_major};
pub use gridboard_core::item::{
    GridItem, ItemCaps, ItemId, ItemOption, PLACEHOLDER_PREFIX,
};
pub use gridboard_core::occupancy::{MIN_VISIBLE_ROWS, Occupancy};
pub use gridboard_core::placeholder::{strip_placeholders, synthesize};

// --- Runtime re-exports ----------------------------------------------------

pub use gridboard_runtime::{BoardConfig, BoardController, BoardEvent, ItemFrame};

// --- Prelude ---------------------------------------------------------------

pub mod prelude {
    pub use crate::{
        BoardConfig, BoardController, BoardEvent, Cell, GridItem, ItemCaps, ItemFrame, ItemId,
        ItemOption, Occupancy,
    };
}
