//! Position book — ordered trade plans with a single active selection.
//!
//! The book is the registry for all planned positions. It manages:
//! - Entry storage in insertion order (new entries always append)
//! - Id assignment (max existing id + 1, starting at 1)
//! - The active selection, tracked by id so it survives reordering-free edits
//! - Selection fallback: a stale active id resolves to the first entry
//!
//! The book does NOT perform I/O — loading and saving belong to the caller's
//! boundary layer, which invokes [`PositionBook::validate`] after
//! deserializing untrusted state.
//!
//! Lookups degrade instead of failing: `by_id` falls back to the first entry
//! and `active_index` falls back to 0, so a UI bound to the book always has
//! something sensible to render.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::domain::Position;

/// Errors from book invariant validation.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum BookError {
    #[error("duplicate position id {0}")]
    DuplicateId(u64),
}

/// The position book: all planned entries plus the id of the active one.
///
/// An `active_id` of 0 means no valid selection (the book is empty, or the
/// selected entry was removed and nothing took its place).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PositionBook {
    /// All entries, insertion order preserved. Ids are unique.
    items: Vec<Position>,

    /// Id of the selected entry; 0 when nothing is selected.
    active_id: u64,
}

impl PositionBook {
    pub fn new() -> Self {
        Self::default()
    }

    // ── Read accessors ─────────────────────────────────────────────────

    /// All entries in insertion order.
    pub fn items(&self) -> &[Position] {
        &self.items
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Id of the selected entry, 0 when nothing is selected. May be stale;
    /// resolve it through [`PositionBook::active`] or
    /// [`PositionBook::active_index`].
    pub fn active_id(&self) -> u64 {
        self.active_id
    }

    /// Entry with the given id, falling back to the first entry when the id
    /// is unknown. `None` only when the book is empty.
    pub fn by_id(&self, id: u64) -> Option<&Position> {
        self.items
            .iter()
            .find(|p| p.id == id)
            .or_else(|| self.items.first())
    }

    /// The selected entry, resolved with the [`PositionBook::by_id`]
    /// fallback.
    pub fn active(&self) -> Option<&Position> {
        self.by_id(self.active_id)
    }

    /// Index of the selected entry, recomputed on every read; 0 when the
    /// active id is stale or the book is empty.
    pub fn active_index(&self) -> usize {
        self.items
            .iter()
            .position(|p| p.id == self.active_id)
            .unwrap_or(0)
    }

    // ── Mutations ──────────────────────────────────────────────────────

    /// Appends a fresh empty entry and returns its id.
    ///
    /// The new id is one past the highest live id (1 for an empty book), so
    /// ids stay unique without a separate counter. The selection is left
    /// untouched.
    pub fn create(&mut self) -> u64 {
        let id = self.items.iter().map(|p| p.id).max().map_or(1, |m| m + 1);
        self.items.push(Position::new(id));
        id
    }

    /// Exact-match mutable lookup for field edits.
    ///
    /// No first-entry fallback here: a write aimed at a missing id must not
    /// land on an unrelated entry.
    pub fn find_mut(&mut self, id: u64) -> Option<&mut Position> {
        self.items.iter_mut().find(|p| p.id == id)
    }

    /// Marks the entry with the given id as selected.
    ///
    /// The id is not checked against the book: a stale value degrades
    /// through the read-side fallbacks rather than erroring.
    pub fn select(&mut self, id: u64) {
        self.active_id = id;
    }

    /// Removes the entry with the given id, then moves the selection to the
    /// neighbour above the removed row, or the new first row, or nothing
    /// (id 0) once the book is empty. Unknown ids are a no-op.
    pub fn remove_by_id(&mut self, id: u64) {
        if let Some(idx) = self.items.iter().position(|p| p.id == id) {
            self.items.remove(idx);
            let neighbour = idx.saturating_sub(1);
            self.active_id = self.items.get(neighbour).map_or(0, |p| p.id);
        }
    }

    // ── Validation ─────────────────────────────────────────────────────

    /// Checks the id-uniqueness invariant.
    ///
    /// Deserialized state bypasses the invariant-preserving methods, so the
    /// persistence boundary calls this after loading and discards state
    /// that fails.
    pub fn validate(&self) -> Result<(), BookError> {
        let mut seen = std::collections::HashSet::new();
        for p in &self.items {
            if !seen.insert(p.id) {
                return Err(BookError::DuplicateId(p.id));
            }
        }
        Ok(())
    }
}
