//! Static part catalog and seed data.
//!
//! The rig has exactly eight parts and eight build slots; each part belongs
//! in exactly one slot and every slot expects exactly one part (the id to
//! slot mapping is bijective). Everything here is immutable process-wide
//! data, created once and never mutated.

/// Number of build slots (and parts; the mapping is one-to-one).
pub const SLOT_COUNT: usize = 8;

/// Name used for a completed run when the caller never supplied one.
pub const DEFAULT_PLAYER_NAME: &str = "You";

/// One assemblable rig part: stable id, display name, and the slot index
/// (0..SLOT_COUNT) where it must end up for the rig to count as built.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct PartDesc {
    pub id: &'static str,
    pub name: &'static str,
    pub slot: usize,
}

pub const RIG_PARTS: [PartDesc; SLOT_COUNT] = [
    PartDesc { id: "frame", name: "Mining Frame", slot: 0 },
    PartDesc { id: "mothe", name: "Motherboard", slot: 1 },
    PartDesc { id: "gpu", name: "Graphics Card", slot: 2 },
    PartDesc { id: "pcu", name: "Power Supply", slot: 3 },
    PartDesc { id: "ram", name: "RAM Memory", slot: 4 },
    PartDesc { id: "ssd", name: "SSD Storage", slot: 5 },
    PartDesc { id: "fan", name: "Cooling Fan", slot: 6 },
    PartDesc { id: "cable", name: "Power Cable", slot: 7 },
];

/// Labels shown on empty slots, indexed by slot.
pub const SLOT_LABELS: [&str; SLOT_COUNT] = [
    "Mining Frame",
    "Motherboard",
    "Graphics Card",
    "Power Supply",
    "RAM Memory",
    "SSD Storage",
    "Cooling Fan",
    "Power Cable",
];

/// Initial leaderboard entries (name, seconds), already sorted ascending.
pub const SEED_LEADERBOARD: [(&str, f64); 5] = [
    ("CryptoMiner1", 45.2),
    ("RigBuilder", 52.8),
    ("HashMaster", 58.1),
    ("BlockChainer", 61.5),
    ("DigitalGold", 67.3),
];

/// Index into [`RIG_PARTS`] for a part id, if the id is known.
pub fn part_index(id: &str) -> Option<usize> {
    RIG_PARTS.iter().position(|p| p.id == id)
}
