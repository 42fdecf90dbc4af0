#![forbid(unsafe_code)]

//! Items placed on the board: identity, geometry, and interaction flags.
//!
//! Two kinds of item share one shape: real items the user created, and
//! synthetic placeholders marking free cells as add targets. Kind is
//! carried by [`ItemId`] as a variant rather than sniffed from an id
//! prefix; the reserved `'+'` prefix survives only in the rendered key
//! form handed to the widget.

use std::fmt;

use bitflags::bitflags;

use crate::cell::{Cell, GRID_COLS};

/// Reserved first character of rendered placeholder keys.
///
/// Real item labels must not start with it, so the string keys handed to
/// the rendering widget stay unambiguous.
pub const PLACEHOLDER_PREFIX: char = '+';

bitflags! {
    /// Interaction capabilities the rendering widget may offer on an item.
    #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
    pub struct ItemCaps: u8 {
        /// The item may be dragged to another cell.
        const DRAGGABLE = 0b01;
        /// The item may be resized from its handles.
        const RESIZABLE = 0b10;
    }
}

impl Default for ItemCaps {
    fn default() -> Self {
        Self::empty()
    }
}

/// Identifier of a board item.
///
/// Real items carry the label minted at add time (type tag plus serial,
/// e.g. `"C0"`). Placeholders are keyed by the cell they mark and render
/// as `"+{row}_{col}"`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum ItemId {
    /// Label of a user-created item.
    Real(String),
    /// Synthetic add target at the given free cell.
    Placeholder(Cell),
}

impl ItemId {
    /// Wrap a real item label.
    ///
    /// # Panics
    ///
    /// Panics if the label starts with [`PLACEHOLDER_PREFIX`]; that
    /// character is reserved for placeholder keys.
    #[must_use]
    pub fn real(label: impl Into<String>) -> Self {
        let label = label.into();
        assert!(
            !label.starts_with(PLACEHOLDER_PREFIX),
            "real item labels must not start with {PLACEHOLDER_PREFIX:?}"
        );
        Self::Real(label)
    }

    /// Placeholder id for the given cell.
    #[inline]
    #[must_use]
    pub const fn placeholder(cell: Cell) -> Self {
        Self::Placeholder(cell)
    }

    /// Whether this id names a placeholder.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        matches!(self, Self::Placeholder(_))
    }

    /// The label, if this id names a real item.
    pub fn as_real(&self) -> Option<&str> {
        match self {
            Self::Real(label) => Some(label),
            Self::Placeholder(_) => None,
        }
    }
}

impl fmt::Display for ItemId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Real(label) => f.write_str(label),
            Self::Placeholder(cell) => {
                write!(f, "{PLACEHOLDER_PREFIX}{}_{}", cell.row, cell.col)
            }
        }
    }
}

/// One placed rectangle on the board.
///
/// Fields are public like a plain record: the widget echoes them back in
/// layout reports and the controller rebuilds items wholesale rather than
/// mutating through accessors.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GridItem {
    /// Unique id within the live item list.
    pub id: ItemId,
    /// Column of the top-left corner, in `[0, GRID_COLS)`.
    pub x: u16,
    /// Row of the top-left corner.
    pub y: u16,
    /// Width in columns, at least 1.
    pub w: u16,
    /// Height in rows, at least 1.
    pub h: u16,
    /// Drag/resize enablement reported to the widget.
    pub caps: ItemCaps,
}

impl GridItem {
    /// Create an item.
    ///
    /// # Panics
    ///
    /// Panics if `w` or `h` is zero, or if the item sticks out past the
    /// right edge (`x + w > GRID_COLS`). Malformed geometry is a boundary
    /// programming error, not a recoverable condition.
    #[must_use]
    pub fn new(id: ItemId, x: u16, y: u16, w: u16, h: u16, caps: ItemCaps) -> Self {
        assert!(w >= 1 && h >= 1, "item size must be at least 1x1");
        assert!(
            x as u32 + w as u32 <= GRID_COLS as u32,
            "item exceeds the right edge: x={x} w={w} cols={GRID_COLS}"
        );
        Self { id, x, y, w, h, caps }
    }

    /// The 1x1 non-interactive placeholder marking `cell`.
    #[must_use]
    pub fn placeholder(cell: Cell) -> Self {
        Self::new(
            ItemId::placeholder(cell),
            cell.col,
            cell.row,
            1,
            1,
            ItemCaps::empty(),
        )
    }

    /// Whether this item is a placeholder.
    #[inline]
    pub const fn is_placeholder(&self) -> bool {
        self.id.is_placeholder()
    }

    /// Top-left cell.
    #[inline]
    pub const fn origin(&self) -> Cell {
        Cell::new(self.y, self.x)
    }

    /// Exclusive bottom row, `y + h`.
    #[inline]
    pub const fn bottom(&self) -> u16 {
        self.y.saturating_add(self.h)
    }

    /// Every cell covered by this item, row-major.
    pub fn cells(&self) -> impl Iterator<Item = Cell> {
        let (x, y, w, h) = (self.x, self.y, self.w, self.h);
        (y..y + h).flat_map(move |row| (x..x + w).map(move |col| Cell::new(row, col)))
    }
}

/// A pickable item archetype: the type tag shown in the picker plus the
/// footprint an item of that type occupies.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ItemOption {
    /// Type tag, used as the id prefix of items minted from this option.
    pub tag: String,
    /// Width in columns, at least 1.
    pub w: u16,
    /// Height in rows, at least 1.
    pub h: u16,
}

impl ItemOption {
    /// Create an option.
    ///
    /// # Panics
    ///
    /// Panics if `w` or `h` is zero, if `w` exceeds the board width, or if
    /// the tag starts with the reserved placeholder prefix.
    #[must_use]
    pub fn new(tag: impl Into<String>, w: u16, h: u16) -> Self {
        let tag = tag.into();
        assert!(w >= 1 && h >= 1, "option size must be at least 1x1");
        assert!(w <= GRID_COLS, "option wider than the board: w={w}");
        assert!(
            !tag.starts_with(PLACEHOLDER_PREFIX),
            "option tags must not start with {PLACEHOLDER_PREFIX:?}"
        );
        Self { tag, w, h }
    }

    /// The stock palette: `A` 1x1, `B` 1x2, `C` 2x3 (width x height).
    #[must_use]
    pub fn standard() -> Vec<Self> {
        vec![
            Self::new("A", 1, 1),
            Self::new("B", 1, 2),
            Self::new("C", 2, 3),
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::{Cell, GridItem, ItemCaps, ItemId, ItemOption};

    #[test]
    fn placeholder_id_renders_with_prefix() {
        assert_eq!(ItemId::placeholder(Cell::new(0, 0)).to_string(), "+0_0");
        assert_eq!(ItemId::placeholder(Cell::new(2, 11)).to_string(), "+2_11");
    }

    #[test]
    fn real_id_renders_as_label() {
        let id = ItemId::real("C0");
        assert_eq!(id.to_string(), "C0");
        assert_eq!(id.as_real(), Some("C0"));
        assert!(!id.is_placeholder());
    }

    #[test]
    #[should_panic(expected = "must not start with")]
    fn real_id_rejects_reserved_prefix() {
        let _ = ItemId::real("+0_0");
    }

    #[test]
    fn placeholder_item_is_unit_sized_and_inert() {
        let item = GridItem::placeholder(Cell::new(1, 4));
        assert_eq!((item.x, item.y, item.w, item.h), (4, 1, 1, 1));
        assert_eq!(item.caps, ItemCaps::empty());
        assert!(item.is_placeholder());
        assert_eq!(item.origin(), Cell::new(1, 4));
    }

    #[test]
    fn cells_cover_footprint_row_major() {
        let item = GridItem::new(ItemId::real("C0"), 2, 1, 2, 3, ItemCaps::all());
        let cells: Vec<Cell> = item.cells().collect();
        assert_eq!(cells.len(), 6);
        assert_eq!(cells[0], Cell::new(1, 2));
        assert_eq!(cells[1], Cell::new(1, 3));
        assert_eq!(cells[5], Cell::new(3, 3));
        assert_eq!(item.bottom(), 4);
    }

    #[test]
    #[should_panic(expected = "at least 1x1")]
    fn zero_sized_item_is_rejected() {
        let _ = GridItem::new(ItemId::real("A0"), 0, 0, 0, 1, ItemCaps::empty());
    }

    #[test]
    #[should_panic(expected = "right edge")]
    fn item_past_right_edge_is_rejected() {
        let _ = GridItem::new(ItemId::real("A0"), 11, 0, 2, 1, ItemCaps::empty());
    }

    #[test]
    fn standard_palette_footprints() {
        let options = ItemOption::standard();
        let shapes: Vec<(&str, u16, u16)> = options
            .iter()
            .map(|o| (o.tag.as_str(), o.w, o.h))
            .collect();
        assert_eq!(shapes, vec![("A", 1, 1), ("B", 1, 2), ("C", 2, 3)]);
    }

    #[test]
    fn caps_default_to_inert() {
        assert_eq!(ItemCaps::default(), ItemCaps::empty());
        assert!(ItemCaps::all().contains(ItemCaps::DRAGGABLE));
        assert!(ItemCaps::all().contains(ItemCaps::RESIZABLE));
    }
}
