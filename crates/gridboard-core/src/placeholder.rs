#![forbid(unsafe_code)]

//! Placeholder synthesis: one add target per free cell.
//!
//! Placeholders are regenerated wholesale on every fill pass and stripped
//! wholesale when the pass ends; they are never patched incrementally.
//! That rule is what keeps the item list consistent: a fill always starts
//! from a placeholder-free base, so no stale placeholder can survive a
//! mutation.

use crate::item::GridItem;
use crate::occupancy::Occupancy;

/// Build one 1x1 placeholder per free cell of the working box.
///
/// Output order is row-major (row ascending, then column ascending). The
/// ordering is part of the contract: it fixes the rendering and tab order
/// of add targets, so callers may rely on it.
#[must_use]
pub fn synthesize(occupancy: &Occupancy) -> Vec<GridItem> {
    occupancy.free_cells().map(GridItem::placeholder).collect()
}

/// Drop every placeholder, keeping real items in their current order.
///
/// Idempotent: stripping an already-stripped list is a no-op.
pub fn strip_placeholders(items: &mut Vec<GridItem>) {
    items.retain(|item| !item.is_placeholder());
}

#[cfg(test)]
mod tests {
    use super::{strip_placeholders, synthesize};
    use crate::cell::Cell;
    use crate::item::{GridItem, ItemCaps, ItemId};
    use crate::occupancy::Occupancy;

    fn real(label: &str, x: u16, y: u16, w: u16, h: u16) -> GridItem {
        GridItem::new(ItemId::real(label), x, y, w, h, ItemCaps::all())
    }

    #[test]
    fn empty_board_fills_three_rows() {
        let fill = synthesize(&Occupancy::scan([]));
        assert_eq!(fill.len(), 36);
        assert!(fill.iter().all(GridItem::is_placeholder));
        assert_eq!(fill[0].origin(), Cell::new(0, 0));
        assert_eq!(fill[35].origin(), Cell::new(2, 11));
    }

    #[test]
    fn occupied_cell_is_skipped() {
        let items = vec![real("A0", 0, 0, 1, 1)];
        let fill = synthesize(&Occupancy::scan(&items));
        assert_eq!(fill.len(), 35);
        assert!(fill.iter().all(|p| p.origin() != Cell::new(0, 0)));
        // First free cell in row-major order is the one just right of A0.
        assert_eq!(fill[0].origin(), Cell::new(0, 1));
    }

    #[test]
    fn output_is_row_major() {
        let items = vec![real("C0", 2, 1, 2, 3)];
        let fill = synthesize(&Occupancy::scan(&items));
        let origins: Vec<Cell> = fill.iter().map(GridItem::origin).collect();
        let mut sorted = origins.clone();
        sorted.sort();
        assert_eq!(origins, sorted);
    }

    #[test]
    fn fill_and_real_cells_tile_the_working_box() {
        let items = vec![real("A0", 0, 0, 1, 1), real("C0", 2, 1, 2, 3)];
        let occ = Occupancy::scan(&items);
        let fill = synthesize(&occ);
        let total = occ.max_row() as usize * 12;
        assert_eq!(fill.len() + occ.occupied_count(), total);
        assert!(fill.iter().all(|p| occ.is_free(p.origin())));
    }

    #[test]
    fn strip_removes_only_placeholders() {
        let mut items = vec![
            real("A0", 0, 0, 1, 1),
            GridItem::placeholder(Cell::new(0, 1)),
            real("B1", 5, 0, 1, 2),
            GridItem::placeholder(Cell::new(2, 2)),
        ];
        strip_placeholders(&mut items);
        let labels: Vec<String> = items.iter().map(|i| i.id.to_string()).collect();
        assert_eq!(labels, vec!["A0", "B1"]);
    }

    #[test]
    fn strip_is_idempotent() {
        let mut items = vec![real("A0", 0, 0, 1, 1), GridItem::placeholder(Cell::new(1, 1))];
        strip_placeholders(&mut items);
        let once = items.clone();
        strip_placeholders(&mut items);
        assert_eq!(items, once);
    }

    #[test]
    fn refill_after_strip_restores_same_fill() {
        let mut items = vec![real("B0", 3, 0, 1, 2)];
        let first = synthesize(&Occupancy::scan(&items));
        items.extend(first.clone());
        strip_placeholders(&mut items);
        let second = synthesize(&Occupancy::scan(&items));
        assert_eq!(first, second);
    }
}
