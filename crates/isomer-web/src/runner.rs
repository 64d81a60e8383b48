use isomer_core::bridge::protocol::{self, GameEvent};
use isomer_core::{
    Assignment, ClassificationResult, GameState, InputQueue, LevelBook, LevelError, LigandKind,
    PuzzleInput, Session, SessionError,
};

/// Owns the session and funnels every mutation through one place.
///
/// The web exports keep a single `thread_local!` SessionRunner, so calls from
/// JS are applied one at a time in arrival order. After every applied action
/// the runner rebuilds the flat event buffer the renderer reads.
pub struct SessionRunner {
    session: Session,
    input: InputQueue,
    events: Vec<GameEvent>,
}

impl SessionRunner {
    pub fn new(session: Session) -> Self {
        let mut runner = Self {
            session,
            input: InputQueue::new(),
            events: Vec::with_capacity(16),
        };
        runner.refresh();
        runner
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    /// Queue an action for the next [`tick`](Self::tick).
    pub fn push_input(&mut self, input: PuzzleInput) {
        self.input.push(input);
    }

    /// Decode and queue a custom UI event. Malformed events are dropped.
    pub fn push_custom(&mut self, kind: u32, a: f32, b: f32, c: f32) {
        match protocol::decode_custom(kind, a, b, c) {
            Some(input) => self.input.push(input),
            None => log::warn!("dropping custom event {kind} ({a}, {b}, {c})"),
        }
    }

    /// Apply all queued actions in order. Returns how many were accepted.
    pub fn tick(&mut self) -> usize {
        let mut applied = 0;
        for input in self.input.drain() {
            match self.session.apply(input) {
                Ok(()) => applied += 1,
                Err(e) => log::warn!("{input:?} rejected: {e}"),
            }
        }
        self.refresh();
        applied
    }

    /// Apply one action immediately.
    pub fn apply(&mut self, input: PuzzleInput) -> Result<(), SessionError> {
        let result = self.session.apply(input);
        self.refresh();
        result
    }

    pub fn place_ligand(&mut self, slot: usize, kind: LigandKind) -> Result<(), SessionError> {
        self.apply(PuzzleInput::PlaceLigand { slot, kind })
    }

    pub fn submit(&mut self) -> Result<ClassificationResult, SessionError> {
        let result = self.session.submit();
        self.refresh();
        result
    }

    pub fn show_answer(&mut self) -> Result<Assignment, SessionError> {
        let answer = self.session.show_answer().cloned();
        self.refresh();
        answer
    }

    pub fn advance(&mut self) -> Result<GameState, SessionError> {
        let state = self.session.advance();
        self.refresh();
        state
    }

    /// Replace the level table from JSON; the session returns to the start screen.
    pub fn load_levels(&mut self, json: &str) -> Result<(), LevelError> {
        let book = LevelBook::from_json(json)?;
        self.session.load_levels(book);
        self.input.clear();
        self.refresh();
        Ok(())
    }

    fn refresh(&mut self) {
        protocol::encode_session(&self.session, &mut self.events);
    }

    // ---- JSON accessors ----

    pub fn current_level_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.session.current_level())
    }

    /// Last result, or `null` before any attempt.
    pub fn result_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&self.session.result())
    }

    /// The arrangement the renderer should draw right now.
    pub fn assignment_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(self.session.display_assignment())
    }

    /// Guide cards for every isomer class.
    pub fn guide_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string(&isomer_core::guide())
    }

    // ---- Pointer accessors for buffer reads ----

    pub fn game_events(&self) -> &[GameEvent] {
        &self.events
    }

    pub fn game_events_ptr(&self) -> *const f32 {
        protocol::as_floats(&self.events).as_ptr()
    }

    pub fn game_events_len(&self) -> u32 {
        self.events.len() as u32
    }
}
