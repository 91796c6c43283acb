//! Placement board: mutable puzzle state for one run.
//!
//! The board owns the eight slots and the ordered tray of still-unplaced
//! parts. Parts are tracked as indices into [`crate::catalog::RIG_PARTS`];
//! every index lives in exactly one slot or in the tray at all times, so no
//! part can be duplicated or lost by any sequence of place/remove calls.

use crate::catalog::{part_index, PartDesc, RIG_PARTS, SLOT_COUNT};
use crate::error::GameError;

pub struct PlacementBoard {
    slots: [Option<usize>; SLOT_COUNT],
    // Tray order is UI-visible: displaced parts go to the back.
    unplaced: Vec<usize>,
}

impl Default for PlacementBoard {
    fn default() -> Self {
        Self::new()
    }
}

impl PlacementBoard {
    /// Fresh board: all slots empty, all parts in catalog order in the tray.
    pub fn new() -> Self {
        Self {
            slots: [None; SLOT_COUNT],
            unplaced: (0..SLOT_COUNT).collect(),
        }
    }

    /// Seat `part_id` in `slot`. The part is lifted from wherever it sits
    /// (tray or another slot) and a different part already occupying the
    /// target goes back to the tray, all as one step; callers never need an
    /// explicit remove-before-replace.
    pub fn place(&mut self, slot: usize, part_id: &str) -> Result<(), GameError> {
        if slot >= SLOT_COUNT {
            return Err(GameError::invalid(format!("slot index {slot} out of range")));
        }
        let part = part_index(part_id)
            .ok_or_else(|| GameError::invalid(format!("unknown part id '{part_id}'")))?;
        if self.slots[slot] == Some(part) {
            return Ok(());
        }
        if let Some(tray_pos) = self.unplaced.iter().position(|&p| p == part) {
            self.unplaced.remove(tray_pos);
        } else if let Some(from) = self.slots.iter().position(|&s| s == Some(part)) {
            self.slots[from] = None;
        }
        if let Some(prev) = self.slots[slot].replace(part) {
            self.unplaced.push(prev);
        }
        Ok(())
    }

    /// Empty `slot`, returning its occupant to the tray. Removing from an
    /// already-empty slot is a no-op, not an error.
    pub fn remove(&mut self, slot: usize) -> Result<(), GameError> {
        if slot >= SLOT_COUNT {
            return Err(GameError::invalid(format!("slot index {slot} out of range")));
        }
        if let Some(part) = self.slots[slot].take() {
            self.unplaced.push(part);
        }
        Ok(())
    }

    /// True iff every slot holds the part that belongs there. Correctness is
    /// positional: a full but mis-arranged board is not solved.
    pub fn is_solved(&self) -> bool {
        self.slots
            .iter()
            .enumerate()
            .all(|(i, s)| matches!(s, Some(part) if RIG_PARTS[*part].slot == i))
    }

    /// (occupied slots, correctly placed slots), for progress display.
    pub fn progress(&self) -> (usize, usize) {
        let placed = self.slots.iter().filter(|s| s.is_some()).count();
        let correct = self
            .slots
            .iter()
            .enumerate()
            .filter(|&(i, s)| matches!(s, Some(part) if RIG_PARTS[*part].slot == i))
            .count();
        (placed, correct)
    }

    /// Part currently occupying `slot`, if any. Out-of-range reads as empty.
    pub fn occupant(&self, slot: usize) -> Option<&'static PartDesc> {
        self.slots.get(slot).copied().flatten().map(|p| &RIG_PARTS[p])
    }

    /// Parts still in the tray, in display order.
    pub fn unplaced(&self) -> impl Iterator<Item = &'static PartDesc> + '_ {
        self.unplaced.iter().map(|&p| &RIG_PARTS[p])
    }

    pub fn snapshot(&self) -> BoardSnapshot {
        BoardSnapshot {
            slots: self
                .slots
                .iter()
                .map(|s| s.map(|p| PartView::from_desc(&RIG_PARTS[p])))
                .collect(),
            unplaced: self
                .unplaced
                .iter()
                .map(|&p| PartView::from_desc(&RIG_PARTS[p]))
                .collect(),
        }
    }
}

/// Read-only view of one part for rendering.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct PartView {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: usize,
}

impl PartView {
    fn from_desc(desc: &'static PartDesc) -> Self {
        Self { id: desc.id, name: desc.name, slot: desc.slot }
    }
}

/// Owned point-in-time view of the board: per-slot occupancy plus the tray.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize))]
pub struct BoardSnapshot {
    pub slots: Vec<Option<PartView>>,
    pub unplaced: Vec<PartView>,
}
