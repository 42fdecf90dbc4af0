#![forbid(unsafe_code)]

//! Cell coordinates on the fixed-width board grid.

/// Number of columns on the board.
///
/// The grid is fixed-width: columns run `0..GRID_COLS`, rows grow downward
/// without bound. Every linearized cell index is derived from this constant.
pub const GRID_COLS: u16 = 12;

/// One unit square on the grid, addressed by zero-based row and column.
///
/// `Ord` is derived on `(row, col)`, so sorting cells yields row-major
/// order (row ascending, then column ascending). Placeholder enumeration
/// relies on this.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
pub struct Cell {
    /// Zero-based row, counted from the top.
    pub row: u16,
    /// Zero-based column, in `[0, GRID_COLS)`.
    pub col: u16,
}

impl Cell {
    /// Create a cell at the given row and column.
    #[inline]
    pub const fn new(row: u16, col: u16) -> Self {
        Self { row, col }
    }

    /// Linear index of this cell: `row * GRID_COLS + col`.
    ///
    /// The linearization is arbitrary but fixed; it exists so cells can be
    /// stored in flat integer sets.
    #[inline]
    pub const fn index(self) -> u32 {
        self.row as u32 * GRID_COLS as u32 + self.col as u32
    }

    /// Inverse of [`Cell::index`].
    #[inline]
    pub const fn from_index(index: u32) -> Self {
        Self {
            row: (index / GRID_COLS as u32) as u16,
            col: (index % GRID_COLS as u32) as u16,
        }
    }
}

/// Enumerate every cell of the `rows x GRID_COLS` box in row-major order.
pub fn cells_row_major(rows: u16) -> impl Iterator<Item = Cell> {
    (0..rows).flat_map(|row| (0..GRID_COLS).map(move |col| Cell::new(row, col)))
}
