#![forbid(unsafe_code)]

//! Event protocol between the board controller and its collaborators.
//!
//! The rendering widget and the picker UI are black boxes. Everything they
//! tell the controller arrives as a [`BoardEvent`]; everything the
//! controller answers with is the full item list it owns. Layout reports
//! carry [`ItemFrame`] entries, the widget's view of one item's geometry.

use gridboard_core::cell::Cell;
use gridboard_core::item::{GridItem, ItemId, ItemOption};

/// Geometry of one item as reported by the rendering widget.
///
/// Reports cover real items only: placeholders are inert in the widget
/// and excluded from its reporting.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemFrame {
    /// Id of the reported item.
    pub id: ItemId,
    /// Column of the top-left corner.
    pub x: u16,
    /// Row of the top-left corner.
    pub y: u16,
    /// Width in columns.
    pub w: u16,
    /// Height in rows.
    pub h: u16,
}

impl ItemFrame {
    /// Create a frame.
    #[must_use]
    pub fn new(id: ItemId, x: u16, y: u16, w: u16, h: u16) -> Self {
        Self { id, x, y, w, h }
    }

    /// The frame echoing an item's current geometry.
    #[must_use]
    pub fn of(item: &GridItem) -> Self {
        Self::new(item.id.clone(), item.x, item.y, item.w, item.h)
    }
}

/// Interaction events fed to a board controller.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum BoardEvent {
    /// Pointer entered the board area.
    PointerEntered,
    /// Pointer left the board area.
    PointerLeft,
    /// A drag or resize gesture began on a real item. Carries no payload;
    /// drag-start and resize-start behave identically.
    MoveStarted,
    /// A drag or resize gesture finished; the widget reports the
    /// resulting layout of every real item.
    MoveFinished(Vec<ItemFrame>),
    /// The widget re-laid items out on its own and reports the result.
    LayoutChanged(Vec<ItemFrame>),
    /// Picker selection: add an item of the chosen archetype at a free
    /// cell.
    AddRequested {
        /// Target cell, always one a placeholder marked as free.
        cell: Cell,
        /// Chosen archetype.
        option: ItemOption,
    },
    /// Remove the item with the given id.
    RemoveRequested(ItemId),
}
