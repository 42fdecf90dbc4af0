#![forbid(unsafe_code)]

//! Occupancy scanning: which cells do the real items cover?
//!
//! [`Occupancy::scan`] walks the item list once, marks every covered cell
//! in a flat index set, and tracks the deepest occupied row. Placeholders
//! are skipped by the scanner itself so callers never pre-filter; feeding
//! a hover-filled list back through `scan` yields the same occupancy as
//! the underlying real items alone.
//!
//! The working height is clamped to [`MIN_VISIBLE_ROWS`] so a sparse or
//! empty board still exposes a usable band of add targets.

use std::collections::HashSet;

use crate::cell::{Cell, cells_row_major};
use crate::item::GridItem;

/// Minimum visible grid height, in rows.
///
/// [`Occupancy::scan`] never reports a working height below this, so an
/// empty board still offers three full rows of add targets.
pub const MIN_VISIBLE_ROWS: u16 = 3;

/// The set of cells covered by real items, plus the board's working height.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Occupancy {
    cells: HashSet<u32>,
    max_row: u16,
}

impl Occupancy {
    /// Scan real items into an occupancy set.
    ///
    /// Placeholders in the input are skipped. The working height is the
    /// deepest occupied row (`y + h` maximized over items), floored at
    /// [`MIN_VISIBLE_ROWS`]. The floor applies to sparse boards too, not
    /// only empty ones: a lone 1x1 item still yields a 3-row working box.
    ///
    /// Pure and single-pass, O(total occupied cells).
    #[must_use]
    pub fn scan<'a, I>(items: I) -> Self
    where
        I: IntoIterator<Item = &'a GridItem>,
    {
        Self::scan_with_min_rows(items, MIN_VISIBLE_ROWS)
    }

    /// Scan with an explicit floor on the working height.
    #[must_use]
    pub fn scan_with_min_rows<'a, I>(items: I, min_rows: u16) -> Self
    where
        I: IntoIterator<Item = &'a GridItem>,
    {
        let mut cells = HashSet::new();
        let mut max_row = 0;
        for item in items {
            if item.is_placeholder() {
                continue;
            }
            max_row = max_row.max(item.bottom());
            for cell in item.cells() {
                cells.insert(cell.index());
            }
        }
        Self {
            cells,
            max_row: max_row.max(min_rows),
        }
    }

    /// Whether `cell` is covered by a real item.
    #[inline]
    pub fn is_occupied(&self, cell: Cell) -> bool {
        self.cells.contains(&cell.index())
    }

    /// Whether `cell` is free.
    #[inline]
    pub fn is_free(&self, cell: Cell) -> bool {
        !self.is_occupied(cell)
    }

    /// Working height in rows.
    #[inline]
    pub const fn max_row(&self) -> u16 {
        self.max_row
    }

    /// Number of occupied cells.
    #[inline]
    pub fn occupied_count(&self) -> usize {
        self.cells.len()
    }

    /// Free cells within the working box, row-major.
    pub fn free_cells(&self) -> impl Iterator<Item = Cell> + '_ {
        cells_row_major(self.max_row).filter(|cell| self.is_free(*cell))
    }
}

#[cfg(test)]
mod tests {
    use super::{MIN_VISIBLE_ROWS, Occupancy};
    use crate::cell::Cell;
    use crate::item::{GridItem, ItemCaps, ItemId};

    fn real(label: &str, x: u16, y: u16, w: u16, h: u16) -> GridItem {
        GridItem::new(ItemId::real(label), x, y, w, h, ItemCaps::all())
    }

    #[test]
    fn empty_board_has_default_height() {
        let occ = Occupancy::scan([]);
        assert_eq!(occ.max_row(), MIN_VISIBLE_ROWS);
        assert_eq!(occ.occupied_count(), 0);
        assert_eq!(occ.free_cells().count(), 36);
    }

    #[test]
    fn single_unit_item_marks_one_cell() {
        let items = vec![real("A0", 0, 0, 1, 1)];
        let occ = Occupancy::scan(&items);
        assert!(occ.is_occupied(Cell::new(0, 0)));
        assert!(occ.is_free(Cell::new(0, 1)));
        assert_eq!(occ.occupied_count(), 1);
    }

    #[test]
    fn working_height_is_floored_not_defaulted() {
        // A short item alone must still leave a 3-row working box.
        let items = vec![real("A0", 0, 0, 1, 1)];
        assert_eq!(Occupancy::scan(&items).max_row(), MIN_VISIBLE_ROWS);
    }

    #[test]
    fn tall_item_extends_working_height() {
        let items = vec![real("B0", 4, 2, 1, 5)];
        let occ = Occupancy::scan(&items);
        assert_eq!(occ.max_row(), 7);
        assert!(occ.is_occupied(Cell::new(6, 4)));
        assert!(occ.is_free(Cell::new(6, 5)));
    }

    #[test]
    fn footprint_cells_are_all_marked() {
        let items = vec![real("C0", 2, 1, 2, 3)];
        let occ = Occupancy::scan(&items);
        assert_eq!(occ.occupied_count(), 6);
        for row in 1..4 {
            for col in 2..4 {
                assert!(occ.is_occupied(Cell::new(row, col)));
            }
        }
        assert!(occ.is_free(Cell::new(0, 2)));
    }

    #[test]
    fn placeholders_are_skipped() {
        let items = vec![
            real("A0", 0, 0, 1, 1),
            GridItem::placeholder(Cell::new(0, 1)),
            GridItem::placeholder(Cell::new(5, 0)),
        ];
        let occ = Occupancy::scan(&items);
        assert_eq!(occ.occupied_count(), 1);
        assert!(occ.is_free(Cell::new(0, 1)));
        // Placeholder rows never extend the working height.
        assert_eq!(occ.max_row(), MIN_VISIBLE_ROWS);
    }

    #[test]
    fn explicit_zero_floor_collapses_empty_board() {
        let occ = Occupancy::scan_with_min_rows([], 0);
        assert_eq!(occ.max_row(), 0);
        assert_eq!(occ.free_cells().count(), 0);
    }

    #[test]
    fn free_cells_are_row_major_and_disjoint_from_occupied() {
        let items = vec![real("A0", 0, 0, 1, 1), real("B0", 11, 0, 1, 2)];
        let occ = Occupancy::scan(&items);
        let free: Vec<Cell> = occ.free_cells().collect();
        let mut sorted = free.clone();
        sorted.sort();
        assert_eq!(free, sorted);
        assert!(free.iter().all(|cell| occ.is_free(*cell)));
        assert_eq!(free.len() + occ.occupied_count(), 36);
    }
}
