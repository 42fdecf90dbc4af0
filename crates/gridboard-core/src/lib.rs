#![forbid(unsafe_code)]

//! Core: grid cells, items, occupancy scanning, and placeholder synthesis.
//!
//! Everything in this crate is pure computation over plain data. The
//! interaction state machine that drives these pieces lives in
//! `gridboard-runtime`.

pub mod cell;
pub mod item;
pub mod occupancy;
pub mod placeholder;
