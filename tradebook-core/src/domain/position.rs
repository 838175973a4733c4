//! Position — a planned trade entry.

use serde::{Deserialize, Serialize};

/// A single trade plan: what to buy, where to bail, where to take profit.
///
/// Everything except `id` is free-form text typed by the user. The
/// numeric-looking fields (`stop`, `take`, `risk`, `base`) stay strings so a
/// half-typed value survives a save/load cycle unchanged.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Position {
    pub id: u64,
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub market: String,
    /// Stop-loss level.
    #[serde(default)]
    pub stop: String,
    /// Take-profit level.
    #[serde(default)]
    pub take: String,
    /// Risk per trade, usually a percentage.
    #[serde(default)]
    pub risk: String,
    /// Account base amount the risk is measured against.
    #[serde(default)]
    pub base: String,
    #[serde(default)]
    pub notes: String,
}

impl Position {
    /// A fresh entry with the given id and every field empty.
    pub fn new(id: u64) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    /// Display label: the name, or a placeholder for unnamed entries.
    pub fn label(&self) -> &str {
        if self.name.is_empty() {
            "(unnamed)"
        } else {
            &self.name
        }
    }
}
