#![forbid(unsafe_code)]

//! The board controller: authoritative item list plus interaction rules.
//!
//! # Design
//!
//! The controller owns the single source of truth (`items`) and applies
//! every interaction event synchronously against it. Each operation
//! strips placeholders, mutates real items, and, where the interaction
//! calls for it, refills placeholders from a fresh occupancy scan.
//! Placeholders are never patched in place; recomputing from a
//! placeholder-free base is what rules out a stale or partial fill.
//!
//! Events are processed strictly in arrival order on the caller's thread.
//! Every operation runs to completion before the next begins, so each
//! operation's read of `items` is the previous operation's write.
//!
//! # Feedback-loop guard
//!
//! The widget opportunistically reports relayouts it performs on its own.
//! While a placeholder fill is live, such a report would echo stale
//! geometry back at the controller and overwrite the fill it just
//! computed. The controller therefore treats itself as authoritative
//! whenever any placeholder is present and ignores the report entirely.

use gridboard_core::cell::Cell;
use gridboard_core::item::{GridItem, ItemCaps, ItemId, ItemOption};
use gridboard_core::occupancy::{MIN_VISIBLE_ROWS, Occupancy};
use gridboard_core::placeholder::{strip_placeholders, synthesize};
use tracing::{debug, trace};

use crate::event::{BoardEvent, ItemFrame};

// ---------------------------------------------------------------------------
// Configuration
// ---------------------------------------------------------------------------

/// Configuration for a [`BoardController`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BoardConfig {
    /// Capabilities granted to newly added real items.
    ///
    /// Default: draggable and resizable.
    pub new_item_caps: ItemCaps,
    /// Minimum visible rows of the working box.
    ///
    /// Default: [`MIN_VISIBLE_ROWS`].
    pub min_rows: u16,
}

impl Default for BoardConfig {
    fn default() -> Self {
        Self {
            new_item_caps: ItemCaps::DRAGGABLE | ItemCaps::RESIZABLE,
            min_rows: MIN_VISIBLE_ROWS,
        }
    }
}

impl BoardConfig {
    /// Set the capabilities granted to newly added items.
    #[must_use]
    pub fn with_new_item_caps(mut self, caps: ItemCaps) -> Self {
        self.new_item_caps = caps;
        self
    }

    /// Set the minimum visible rows.
    #[must_use]
    pub fn with_min_rows(mut self, min_rows: u16) -> Self {
        self.min_rows = min_rows;
        self
    }
}

// ---------------------------------------------------------------------------
// Controller
// ---------------------------------------------------------------------------

/// Owns the authoritative item list and applies interaction events to it.
///
/// All operations are synchronous and total: given well-formed input they
/// cannot fail, and malformed geometry is a boundary programming error
/// caught by the constructors in `gridboard-core`.
#[derive(Debug, Default)]
pub struct BoardController {
    config: BoardConfig,
    items: Vec<GridItem>,
    counter: u64,
    pending_add: Option<Cell>,
    palette_drag: Option<ItemOption>,
}

impl BoardController {
    /// Create a controller with the given configuration and no items.
    #[must_use]
    pub fn new(config: BoardConfig) -> Self {
        Self {
            config,
            items: Vec::new(),
            counter: 0,
            pending_add: None,
            palette_drag: None,
        }
    }

    /// Create a controller seeded with existing real items.
    ///
    /// The counter still starts at zero; seeded ids were minted elsewhere
    /// and do not consume suffixes.
    ///
    /// # Panics
    ///
    /// Panics if any seed item is a placeholder. Fills are controller
    /// state, not inputs.
    #[must_use]
    pub fn with_items(config: BoardConfig, items: Vec<GridItem>) -> Self {
        assert!(
            items.iter().all(|item| !item.is_placeholder()),
            "seed items must be real"
        );
        Self {
            config,
            items,
            counter: 0,
            pending_add: None,
            palette_drag: None,
        }
    }

    // -----------------------------------------------------------------------
    // Accessors
    // -----------------------------------------------------------------------

    /// The full item list: real items plus any live placeholder fill, in
    /// the order the widget should render them.
    #[must_use]
    pub fn items(&self) -> &[GridItem] {
        &self.items
    }

    /// Monotonic add counter: the numeric suffix the next add will use.
    #[must_use]
    pub const fn counter(&self) -> u64 {
        self.counter
    }

    /// Whether a placeholder fill is currently live.
    #[must_use]
    pub fn has_placeholders(&self) -> bool {
        self.items.iter().any(GridItem::is_placeholder)
    }

    /// The controller's configuration.
    #[must_use]
    pub const fn config(&self) -> &BoardConfig {
        &self.config
    }

    // -----------------------------------------------------------------------
    // Event dispatch
    // -----------------------------------------------------------------------

    /// Apply one interaction event.
    pub fn apply(&mut self, event: BoardEvent) {
        match event {
            BoardEvent::PointerEntered => self.pointer_entered(),
            BoardEvent::PointerLeft => self.pointer_left(),
            BoardEvent::MoveStarted => self.move_started(),
            BoardEvent::MoveFinished(frames) => self.move_finished(frames),
            BoardEvent::LayoutChanged(frames) => self.layout_changed(frames),
            BoardEvent::AddRequested { cell, option } => {
                self.add_item(cell, &option);
            }
            BoardEvent::RemoveRequested(id) => self.remove_item(&id),
        }
    }

    // -----------------------------------------------------------------------
    // Hover lifecycle
    // -----------------------------------------------------------------------

    /// Pointer entered the board: fill every free cell with a placeholder.
    ///
    /// Strips first, so a second enter without an intervening leave
    /// recomputes the fill instead of stacking another on top.
    pub fn pointer_entered(&mut self) {
        strip_placeholders(&mut self.items);
        self.refill();
    }

    /// Pointer left the board: drop the placeholder fill.
    pub fn pointer_left(&mut self) {
        strip_placeholders(&mut self.items);
        trace!(items = self.items.len(), "placeholders stripped on leave");
    }

    // -----------------------------------------------------------------------
    // Move lifecycle
    // -----------------------------------------------------------------------

    /// A drag or resize gesture began: drop the fill so placeholders
    /// cannot interfere with the move.
    pub fn move_started(&mut self) {
        strip_placeholders(&mut self.items);
        trace!("move started, placeholders stripped");
    }

    /// A drag or resize gesture finished: adopt the widget's layout and
    /// refill placeholders around it.
    pub fn move_finished(&mut self, frames: Vec<ItemFrame>) {
        self.adopt_frames(frames);
        self.refill();
    }

    /// The widget reports a relayout it performed on its own.
    ///
    /// Ignored while any placeholder is live; see the module docs for the
    /// feedback loop this guards against.
    pub fn layout_changed(&mut self, frames: Vec<ItemFrame>) {
        if self.has_placeholders() {
            trace!(
                reported = frames.len(),
                "layout report ignored while placeholder fill is live"
            );
            return;
        }
        self.adopt_frames(frames);
    }

    // -----------------------------------------------------------------------
    // Add & remove
    // -----------------------------------------------------------------------

    /// Add a real item of the chosen archetype at a free cell.
    ///
    /// Mints the id `{tag}{counter}`, advances the counter, and drops any
    /// live placeholder fill. Placeholders mark the only legal add
    /// targets, so `cell` is free by construction; the next fill pass
    /// accounts for the new footprint.
    pub fn add_item(&mut self, cell: Cell, option: &ItemOption) -> ItemId {
        strip_placeholders(&mut self.items);
        let id = ItemId::real(format!("{}{}", option.tag, self.counter));
        self.counter += 1;
        let item = GridItem::new(
            id.clone(),
            cell.col,
            cell.row,
            option.w,
            option.h,
            self.config.new_item_caps,
        );
        debug!(
            id = %id,
            row = cell.row,
            col = cell.col,
            w = option.w,
            h = option.h,
            "item added"
        );
        self.items.push(item);
        id
    }

    /// Remove the item with the given id, dropping any live placeholder
    /// fill as well. Removing a nonexistent id is a no-op.
    pub fn remove_item(&mut self, id: &ItemId) {
        strip_placeholders(&mut self.items);
        let before = self.items.len();
        self.items.retain(|item| item.id != *id);
        if self.items.len() < before {
            debug!(id = %id, "item removed");
        }
    }

    // -----------------------------------------------------------------------
    // Picker flow
    // -----------------------------------------------------------------------

    /// Record the free cell the user picked as an add target. The picker
    /// UI renders against it until committed or cancelled.
    pub fn begin_add(&mut self, cell: Cell) {
        self.pending_add = Some(cell);
    }

    /// The cell an add is pending at, if any.
    #[must_use]
    pub const fn pending_add(&self) -> Option<Cell> {
        self.pending_add
    }

    /// Add the chosen archetype at the pending cell and clear it.
    ///
    /// Returns `None`, changing nothing, when no add is pending.
    pub fn commit_add(&mut self, option: &ItemOption) -> Option<ItemId> {
        let cell = self.pending_add.take()?;
        Some(self.add_item(cell, option))
    }

    /// Abandon the pending add, if any.
    pub fn cancel_add(&mut self) {
        self.pending_add = None;
    }

    // -----------------------------------------------------------------------
    // Palette drag
    // -----------------------------------------------------------------------

    /// An archetype began being dragged in from the external palette.
    pub fn begin_palette_drag(&mut self, option: ItemOption) {
        trace!(tag = %option.tag, "palette drag started");
        self.palette_drag = Some(option);
    }

    /// Footprint of the archetype in flight, for the widget's drag-over
    /// preview. `None` when no palette drag is active.
    #[must_use]
    pub fn palette_drag_size(&self) -> Option<(u16, u16)> {
        self.palette_drag.as_ref().map(|option| (option.w, option.h))
    }

    /// Drop the in-flight archetype at `cell` and clear the drag.
    ///
    /// Returns `None`, changing nothing, when no palette drag is active.
    pub fn drop_palette_item(&mut self, cell: Cell) -> Option<ItemId> {
        let option = self.palette_drag.take()?;
        Some(self.add_item(cell, &option))
    }

    /// The palette drag left the board or was released elsewhere.
    pub fn cancel_palette_drag(&mut self) {
        self.palette_drag = None;
    }

    // -----------------------------------------------------------------------
    // Internal helpers
    // -----------------------------------------------------------------------

    /// Replace the real item list with the widget's report.
    ///
    /// Caps are preserved by id for items the controller already knows;
    /// unknown ids get the configured new-item caps. Placeholder frames
    /// are discarded: placeholders are not movable, so a well-behaved
    /// widget never reports them.
    fn adopt_frames(&mut self, frames: Vec<ItemFrame>) {
        let default_caps = self.config.new_item_caps;
        let previous = std::mem::take(&mut self.items);
        self.items = frames
            .into_iter()
            .filter(|frame| !frame.id.is_placeholder())
            .map(|frame| {
                let caps = previous
                    .iter()
                    .find(|item| item.id == frame.id)
                    .map_or(default_caps, |item| item.caps);
                GridItem::new(frame.id, frame.x, frame.y, frame.w, frame.h, caps)
            })
            .collect();
        debug!(items = self.items.len(), "layout adopted");
    }

    /// Append a fresh placeholder fill computed from the real items.
    fn refill(&mut self) {
        let occupancy = Occupancy::scan_with_min_rows(&self.items, self.config.min_rows);
        let fill = synthesize(&occupancy);
        debug!(
            placeholders = fill.len(),
            max_row = occupancy.max_row(),
            "placeholders filled"
        );
        self.items.extend(fill);
    }
}
