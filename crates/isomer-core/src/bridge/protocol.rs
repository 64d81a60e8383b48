//! Wire format between the puzzle core and the JS renderer.
//! Must stay in sync with TypeScript `protocol.ts`.
//!
//! JS → Rust: custom events `(kind: u32, a, b, c: f32)`, decoded into
//! [`PuzzleInput`]s by [`decode_custom`].
//!
//! Rust → JS: a flat `f32` buffer of [`GameEvent`] records rebuilt after
//! every applied action:
//! ```text
//! [STATE]    a = state code, b = can advance (0/1)
//! [LEVEL]    a = level index, b = level count, c = target isomer code
//! [SELECTED] a = selected ligand code
//! [RESULT]   a = result kind code, b = isomer code or -1   (only when a result exists)
//! [SLOT] ×6  a = slot id, b = ligand code or -1
//! ```

use bytemuck::{Pod, Zeroable};

use crate::input::queue::PuzzleInput;
use crate::layout::SlotId;
use crate::ligand::LigandKind;
use crate::session::Session;

/// Protocol version reported to JS at init.
pub const PROTOCOL_VERSION: f32 = 1.0;

/// Floats per game event: kind, a, b, c (fixed wire format).
pub const EVENT_FLOATS: usize = 4;

/// Payload value for "nothing here".
pub const NONE: f32 = -1.0;

/// Custom event kinds from the React UI.
pub mod custom {
    pub const START_GAME: u32 = 1;
    pub const OPEN_GUIDE: u32 = 2;
    pub const CLOSE_GUIDE: u32 = 3;
    pub const RETURN_TO_START: u32 = 4;
    // Gameplay: a/b carry slot id and ligand code
    pub const SELECT_LIGAND: u32 = 10; // a: ligand code
    pub const CLICK_SLOT: u32 = 11; // a: slot id
    pub const PLACE_LIGAND: u32 = 12; // a: slot id, b: ligand code
    pub const RESET: u32 = 13;
    pub const SUBMIT: u32 = 14;
    pub const SHOW_ANSWER: u32 = 15;
    pub const ADVANCE: u32 = 16;
}

/// Game event kinds to the React UI.
pub mod kinds {
    pub const STATE: f32 = 1.0;
    pub const LEVEL: f32 = 2.0;
    pub const SELECTED: f32 = 3.0;
    pub const RESULT: f32 = 4.0;
    pub const SLOT: f32 = 5.0;
}

/// A game event communicated from Rust to TypeScript.
/// Generic container: `kind` identifies the event, `a/b/c` carry payload.
#[repr(C)]
#[derive(Debug, Clone, Copy, Default, PartialEq, Pod, Zeroable)]
pub struct GameEvent {
    pub kind: f32,
    pub a: f32,
    pub b: f32,
    pub c: f32,
}

impl GameEvent {
    pub fn new(kind: f32, a: f32, b: f32, c: f32) -> Self {
        Self { kind, a, b, c }
    }
}

/// View a slice of events as the flat float buffer JS reads.
pub fn as_floats(events: &[GameEvent]) -> &[f32] {
    bytemuck::cast_slice(events)
}

fn slot_arg(v: f32) -> Option<usize> {
    (v.is_finite() && v >= 0.0).then_some(v as usize)
}

fn ligand_arg(v: f32) -> Option<LigandKind> {
    if v.is_finite() && v >= 0.0 {
        LigandKind::from_code(v as u32)
    } else {
        None
    }
}

/// Decode a custom UI event. Unknown kinds and malformed payloads yield `None`.
pub fn decode_custom(kind: u32, a: f32, b: f32, _c: f32) -> Option<PuzzleInput> {
    let input = match kind {
        custom::START_GAME => PuzzleInput::StartGame,
        custom::OPEN_GUIDE => PuzzleInput::OpenGuide,
        custom::CLOSE_GUIDE => PuzzleInput::CloseGuide,
        custom::RETURN_TO_START => PuzzleInput::ReturnToStart,
        custom::SELECT_LIGAND => PuzzleInput::SelectLigand(ligand_arg(a)?),
        custom::CLICK_SLOT => PuzzleInput::ClickSlot(slot_arg(a)?),
        custom::PLACE_LIGAND => PuzzleInput::PlaceLigand {
            slot: slot_arg(a)?,
            kind: ligand_arg(b)?,
        },
        custom::RESET => PuzzleInput::Reset,
        custom::SUBMIT => PuzzleInput::Submit,
        custom::SHOW_ANSWER => PuzzleInput::ShowAnswer,
        custom::ADVANCE => PuzzleInput::Advance,
        _ => return None,
    };
    Some(input)
}

/// Describe the session for the renderer, replacing the contents of `out`.
pub fn encode_session(session: &Session, out: &mut Vec<GameEvent>) {
    out.clear();

    out.push(GameEvent::new(
        kinds::STATE,
        session.state().code() as f32,
        if session.can_advance() { 1.0 } else { 0.0 },
        0.0,
    ));

    let level = session.current_level();
    out.push(GameEvent::new(
        kinds::LEVEL,
        session.level_index() as f32,
        session.level_count() as f32,
        level.target.code() as f32,
    ));

    out.push(GameEvent::new(
        kinds::SELECTED,
        session.selected_ligand().code() as f32,
        0.0,
        0.0,
    ));

    if let Some(result) = session.result() {
        out.push(GameEvent::new(
            kinds::RESULT,
            result.kind().code() as f32,
            result.isomer().map_or(NONE, |class| class.code() as f32),
            0.0,
        ));
    }

    let display = session.display_assignment();
    for id in SlotId::all() {
        out.push(GameEvent::new(
            kinds::SLOT,
            id.index() as f32,
            display.get(id).map_or(NONE, |kind| kind.code() as f32),
            0.0,
        ));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::classifier::ResultKind;
    use crate::isomer::IsomerClass;
    use crate::session::GameState;

    #[test]
    fn decode_known_kinds() {
        assert_eq!(decode_custom(custom::START_GAME, 0.0, 0.0, 0.0), Some(PuzzleInput::StartGame));
        assert_eq!(
            decode_custom(custom::PLACE_LIGAND, 4.0, 1.0, 0.0),
            Some(PuzzleInput::PlaceLigand { slot: 4, kind: LigandKind::Halide })
        );
        assert_eq!(
            decode_custom(custom::SELECT_LIGAND, 0.0, 0.0, 0.0),
            Some(PuzzleInput::SelectLigand(LigandKind::Filler))
        );
        assert_eq!(decode_custom(custom::ADVANCE, 0.0, 0.0, 0.0), Some(PuzzleInput::Advance));
    }

    #[test]
    fn decode_rejects_garbage() {
        assert_eq!(decode_custom(999, 0.0, 0.0, 0.0), None);
        assert_eq!(decode_custom(custom::CLICK_SLOT, -1.0, 0.0, 0.0), None);
        assert_eq!(decode_custom(custom::CLICK_SLOT, f32::NAN, 0.0, 0.0), None);
        assert_eq!(decode_custom(custom::PLACE_LIGAND, 1.0, 5.0, 0.0), None);
        // Out-of-range slots decode; the session rejects them.
        assert_eq!(decode_custom(custom::CLICK_SLOT, 9.0, 0.0, 0.0), Some(PuzzleInput::ClickSlot(9)));
    }

    #[test]
    fn encode_start_screen_shows_demo() {
        let session = Session::with_baked_levels().unwrap();
        let mut events = Vec::new();
        encode_session(&session, &mut events);

        // STATE, LEVEL, SELECTED, six SLOTs; no RESULT yet.
        assert_eq!(events.len(), 9);
        assert_eq!(events[0].kind, kinds::STATE);
        assert_eq!(events[0].a, GameState::Start.code() as f32);
        assert_eq!(events[1], GameEvent::new(kinds::LEVEL, 0.0, 4.0, IsomerClass::Cis.code() as f32));
        assert!(events[3..].iter().all(|e| e.kind == kinds::SLOT && e.b != NONE));
    }

    #[test]
    fn encode_after_submit_carries_result() {
        let mut session = Session::with_baked_levels().unwrap();
        session.start().unwrap();
        session.place(0, LigandKind::Halide).unwrap();
        session.submit().unwrap();

        let mut events = Vec::new();
        encode_session(&session, &mut events);
        let result = events.iter().find(|e| e.kind == kinds::RESULT).unwrap();
        assert_eq!(result.a, ResultKind::CompositionError.code() as f32);
        assert_eq!(result.b, NONE);

        let slots: Vec<_> = events.iter().filter(|e| e.kind == kinds::SLOT).collect();
        assert_eq!(slots.len(), 6);
        assert_eq!(slots[0].b, LigandKind::Halide.code() as f32);
        assert!(slots[1..].iter().all(|e| e.b == NONE));
    }

    #[test]
    fn float_view_is_contiguous() {
        let events = [GameEvent::new(1.0, 2.0, 3.0, 4.0), GameEvent::new(5.0, 6.0, 7.0, 8.0)];
        let floats = as_floats(&events);
        assert_eq!(floats.len(), 2 * EVENT_FLOATS);
        assert_eq!(floats[4], 5.0);
    }
}
