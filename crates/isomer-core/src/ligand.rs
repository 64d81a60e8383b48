//! Ligand kinds and the slot → ligand assignment the player builds.

use std::collections::BTreeMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::layout::SlotId;

/// The two ligand kinds the player can place.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum LigandKind {
    /// Small neutral filler ligand (ammine, NH₃).
    #[default]
    #[serde(rename = "NH3")]
    Filler,
    /// Halide ligand (chloride, Cl⁻). Isomerism is judged on these.
    #[serde(rename = "Cl")]
    Halide,
}

impl LigandKind {
    /// Numeric code used on the JS bridge.
    pub fn code(self) -> u32 {
        match self {
            Self::Filler => 0,
            Self::Halide => 1,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        match code {
            0 => Some(Self::Filler),
            1 => Some(Self::Halide),
            _ => None,
        }
    }

    /// Chemical symbol for display.
    pub fn symbol(self) -> &'static str {
        match self {
            Self::Filler => "NH₃",
            Self::Halide => "Cl",
        }
    }
}

impl fmt::Display for LigandKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

/// Which ligand occupies which slot. Absent slots are unoccupied.
///
/// Placement overwrites; there is no single-slot removal, only [`clear`](Self::clear).
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Assignment {
    slots: BTreeMap<SlotId, LigandKind>,
}

impl Assignment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Build from `(slot, kind)` pairs; later pairs win on duplicate slots.
    pub fn from_pairs(pairs: impl IntoIterator<Item = (SlotId, LigandKind)>) -> Self {
        Self {
            slots: pairs.into_iter().collect(),
        }
    }

    /// Put `kind` in `slot`, replacing whatever was there.
    pub fn place(&mut self, slot: SlotId, kind: LigandKind) {
        self.slots.insert(slot, kind);
    }

    pub fn get(&self, slot: SlotId) -> Option<LigandKind> {
        self.slots.get(&slot).copied()
    }

    pub fn clear(&mut self) {
        self.slots.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Number of occupied slots.
    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Occupied slots in ascending id order.
    pub fn iter(&self) -> impl Iterator<Item = (SlotId, LigandKind)> + '_ {
        self.slots.iter().map(|(&id, &kind)| (id, kind))
    }

    /// Ids of the slots holding `kind`, ascending.
    pub fn slots_of(&self, kind: LigandKind) -> Vec<SlotId> {
        self.iter()
            .filter(|&(_, k)| k == kind)
            .map(|(id, _)| id)
            .collect()
    }

    pub fn count(&self, kind: LigandKind) -> usize {
        self.slots.values().filter(|&&k| k == kind).count()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn id(i: usize) -> SlotId {
        SlotId::new(i).unwrap()
    }

    #[test]
    fn place_overwrites_last_write_wins() {
        let mut a = Assignment::new();
        a.place(id(3), LigandKind::Filler);
        a.place(id(3), LigandKind::Halide);
        assert_eq!(a.len(), 1);
        assert_eq!(a.get(id(3)), Some(LigandKind::Halide));
        assert_eq!(a.get(id(0)), None);
    }

    #[test]
    fn partition_by_kind() {
        let a = Assignment::from_pairs([
            (id(5), LigandKind::Halide),
            (id(0), LigandKind::Halide),
            (id(2), LigandKind::Filler),
        ]);
        assert_eq!(a.slots_of(LigandKind::Halide), vec![id(0), id(5)]);
        assert_eq!(a.slots_of(LigandKind::Filler), vec![id(2)]);
        assert_eq!(a.count(LigandKind::Halide), 2);
        assert_eq!(a.count(LigandKind::Filler), 1);
    }

    #[test]
    fn clear_empties() {
        let mut a = Assignment::from_pairs([(id(1), LigandKind::Halide)]);
        a.clear();
        assert!(a.is_empty());
    }

    #[test]
    fn json_uses_slot_keys_and_symbols() {
        let a = Assignment::from_pairs([(id(0), LigandKind::Halide), (id(4), LigandKind::Filler)]);
        let json = serde_json::to_string(&a).unwrap();
        assert_eq!(json, r#"{"0":"Cl","4":"NH3"}"#);

        let back: Assignment = serde_json::from_str(&json).unwrap();
        assert_eq!(back, a);
        assert!(serde_json::from_str::<Assignment>(r#"{"6":"Cl"}"#).is_err());
    }

    #[test]
    fn bridge_codes() {
        assert_eq!(LigandKind::from_code(LigandKind::Halide.code()), Some(LigandKind::Halide));
        assert_eq!(LigandKind::from_code(7), None);
    }
}
