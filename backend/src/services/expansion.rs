//! Row expansion state and tooltip placement.

use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use crate::models::PropertyId;

/// Properties whose range-bar row is open.
///
/// Serializes as a sorted list of property ids so hosts can persist it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ExpansionState {
    expanded: BTreeSet<PropertyId>,
}

impl ExpansionState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Flip a property's row. Returns `true` when it is now expanded.
    pub fn toggle(&mut self, id: &PropertyId) -> bool {
        if self.expanded.remove(id) {
            false
        } else {
            self.expanded.insert(id.clone());
            true
        }
    }

    pub fn is_expanded(&self, id: &PropertyId) -> bool {
        self.expanded.contains(id)
    }

    pub fn expanded(&self) -> impl Iterator<Item = &PropertyId> {
        self.expanded.iter()
    }

    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    pub fn clear(&mut self) {
        self.expanded.clear();
    }
}

/// Which side of its anchor a tooltip opens on.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum TooltipPlacement {
    Above,
    Below,
}

/// Rows near the top open below so the tooltip is not clipped by the viewport.
pub fn tooltip_placement(row_index: usize, below_row_threshold: usize) -> TooltipPlacement {
    if row_index < below_row_threshold {
        TooltipPlacement::Below
    } else {
        TooltipPlacement::Above
    }
}
