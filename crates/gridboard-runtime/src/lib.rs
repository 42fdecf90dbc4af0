#![forbid(unsafe_code)]

//! Gridboard runtime
//!
//! The interaction layer over `gridboard-core`: it consumes widget and
//! picker events and drives the pure occupancy/placeholder computations.
//!
//! # Key components
//!
//! - [`BoardController`] - authoritative item list plus interaction rules
//! - [`BoardConfig`] - controller configuration
//! - [`BoardEvent`] / [`ItemFrame`] - the protocol spoken with the
//!   rendering widget and the picker UI
//!
//! # Role in gridboard
//! The controller is the bridge between the black-box widget and the pure
//! core: inbound events mutate the item list it owns, and the full list is
//! what the widget renders after every mutation.

pub mod controller;
pub mod event;

pub use controller::{BoardConfig, BoardController};
pub use event::{BoardEvent, ItemFrame};
