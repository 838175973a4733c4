//! Tradebook Core — trade-plan records and the position book.
//!
//! This crate contains the pure state model shared by every front end:
//! - [`Position`] — a planned trade entry (name, market, stop, take, risk,
//!   base, notes)
//! - [`PositionBook`] — ordered entries plus the active selection, with
//!   fallback-first lookups
//!
//! The book owns no I/O and no global state: callers construct one, pass it
//! around, and persist it at their own boundary.

pub mod book;
pub mod domain;

pub use book::{BookError, PositionBook};
pub use domain::Position;
