use crate::ligand::LigandKind;

/// Player actions the session understands.
/// Slot ids stay raw here; the session validates them when applying.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PuzzleInput {
    /// Leave the start screen and begin the campaign at level 1.
    StartGame,
    OpenGuide,
    CloseGuide,
    /// Drop all gameplay state and go back to the start screen.
    ReturnToStart,
    /// Choose the ligand that slot clicks will place.
    SelectLigand(LigandKind),
    /// Place the currently selected ligand.
    ClickSlot(usize),
    PlaceLigand { slot: usize, kind: LigandKind },
    Reset,
    Submit,
    ShowAnswer,
    Advance,
}

/// Pending player actions, oldest first.
///
/// The session has a single writer: every action goes through this queue
/// and is applied by whoever drains it, so transitions never interleave.
#[derive(Debug, Default)]
pub struct InputQueue {
    pending: Vec<PuzzleInput>,
}

impl InputQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, action: PuzzleInput) {
        self.pending.push(action);
    }

    /// Take every pending action in arrival order, leaving the queue empty.
    pub fn drain(&mut self) -> Vec<PuzzleInput> {
        std::mem::take(&mut self.pending)
    }

    /// Discard pending actions that no longer apply (e.g. after a level reload).
    pub fn clear(&mut self) {
        self.pending.clear();
    }

    pub fn is_empty(&self) -> bool {
        self.pending.is_empty()
    }

    pub fn len(&self) -> usize {
        self.pending.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn push_and_drain_keeps_order() {
        let mut q = InputQueue::new();
        q.push(PuzzleInput::StartGame);
        q.push(PuzzleInput::PlaceLigand { slot: 2, kind: LigandKind::Halide });
        q.push(PuzzleInput::Submit);
        assert_eq!(q.len(), 3);

        let events = q.drain();
        assert_eq!(
            events,
            vec![
                PuzzleInput::StartGame,
                PuzzleInput::PlaceLigand { slot: 2, kind: LigandKind::Halide },
                PuzzleInput::Submit,
            ]
        );
        assert!(q.is_empty());
    }

    #[test]
    fn clear_discards_pending() {
        let mut q = InputQueue::default();
        q.push(PuzzleInput::ClickSlot(4));
        q.push(PuzzleInput::Submit);
        q.clear();
        assert!(q.is_empty());
        assert!(q.drain().is_empty());
    }
}
