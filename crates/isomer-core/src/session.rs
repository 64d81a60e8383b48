//! Campaign state machine.
//!
//! ```text
//! Start     --start-->            Playing (level 1)
//! Start     --open_guide-->       Guide --close_guide--> Start
//! Playing   --advance-->          Playing (next level) | Completed (after the last)
//! Playing   --return_to_start-->  Start
//! Completed --return_to_start-->  Start
//! ```
//!
//! All mutation goes through the methods below (or [`Session::apply`]);
//! the owner serializes calls, so there is exactly one writer.

use serde::Serialize;

use crate::classifier::{classify, ClassificationResult};
use crate::error::{LevelError, SessionError};
use crate::input::queue::PuzzleInput;
use crate::layout::SlotId;
use crate::level::{LevelBook, LevelConfig};
use crate::ligand::{Assignment, LigandKind};

/// Top-level screens of the game.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "camelCase")]
pub enum GameState {
    Start,
    Guide,
    Playing,
    Completed,
}

impl GameState {
    /// Numeric code used on the JS bridge.
    pub fn code(self) -> u32 {
        match self {
            Self::Start => 0,
            Self::Guide => 1,
            Self::Playing => 2,
            Self::Completed => 3,
        }
    }
}

/// Decorative arrangement spun on the start screen.
fn demo_assignment() -> Assignment {
    Assignment::from_pairs(SlotId::all().map(|id| {
        let kind = if id.index() % 2 == 0 {
            LigandKind::Halide
        } else {
            LigandKind::Filler
        };
        (id, kind)
    }))
}

/// One player's run through the level sequence.
pub struct Session {
    book: LevelBook,
    state: GameState,
    level_index: usize,
    assignment: Assignment,
    /// Last submit or reveal; `None` means no attempt yet on this arrangement.
    result: Option<ClassificationResult>,
    selected: LigandKind,
    demo: Assignment,
}

impl Session {
    pub fn new(book: LevelBook) -> Self {
        Self {
            book,
            state: GameState::Start,
            level_index: 0,
            assignment: Assignment::new(),
            result: None,
            selected: LigandKind::default(),
            demo: demo_assignment(),
        }
    }

    /// Session over the baked level table.
    pub fn with_baked_levels() -> Result<Self, LevelError> {
        LevelBook::load().map(Self::new)
    }

    // ---- Queries ----

    pub fn state(&self) -> GameState {
        self.state
    }

    pub fn levels(&self) -> &LevelBook {
        &self.book
    }

    /// Zero-based index of the current level.
    pub fn level_index(&self) -> usize {
        self.level_index
    }

    /// One-based level number for the "LEVEL n/N" header.
    pub fn level_number(&self) -> usize {
        self.level_index + 1
    }

    pub fn level_count(&self) -> usize {
        self.book.len()
    }

    pub fn current_level(&self) -> &LevelConfig {
        &self.book.levels()[self.level_index]
    }

    /// The live arrangement being built.
    pub fn assignment(&self) -> &Assignment {
        &self.assignment
    }

    /// What the renderer should draw: the demo arrangement on the menu
    /// screens, the live arrangement otherwise.
    pub fn display_assignment(&self) -> &Assignment {
        match self.state {
            GameState::Start | GameState::Guide => &self.demo,
            GameState::Playing | GameState::Completed => &self.assignment,
        }
    }

    pub fn result(&self) -> Option<&ClassificationResult> {
        self.result.as_ref()
    }

    pub fn selected_ligand(&self) -> LigandKind {
        self.selected
    }

    /// True once the current arrangement has been judged correct.
    pub fn can_advance(&self) -> bool {
        self.state == GameState::Playing
            && self.result.as_ref().is_some_and(ClassificationResult::is_success)
    }

    // ---- Menu transitions ----

    /// Begin the campaign from the start screen.
    pub fn start(&mut self) -> Result<(), SessionError> {
        if self.state != GameState::Start {
            return Err(SessionError::InvalidTransition {
                action: "start",
                state: self.state,
            });
        }
        self.clear_progress();
        self.state = GameState::Playing;
        log::info!("campaign started: level 1/{}", self.level_count());
        Ok(())
    }

    pub fn open_guide(&mut self) -> Result<(), SessionError> {
        if self.state != GameState::Start {
            return Err(SessionError::InvalidTransition {
                action: "open the guide",
                state: self.state,
            });
        }
        self.state = GameState::Guide;
        Ok(())
    }

    pub fn close_guide(&mut self) -> Result<(), SessionError> {
        if self.state != GameState::Guide {
            return Err(SessionError::InvalidTransition {
                action: "close the guide",
                state: self.state,
            });
        }
        self.state = GameState::Start;
        Ok(())
    }

    /// Abandon the run (or leave the completion screen) and re-initialize.
    pub fn return_to_start(&mut self) {
        if self.state == GameState::Playing {
            log::info!("campaign abandoned at level {}", self.level_number());
        }
        self.clear_progress();
        self.state = GameState::Start;
    }

    /// Swap in a different level table. The session goes back to the start screen.
    pub fn load_levels(&mut self, book: LevelBook) {
        self.book = book;
        self.return_to_start();
    }

    // ---- Gameplay actions ----

    pub fn select_ligand(&mut self, kind: LigandKind) {
        self.selected = kind;
    }

    /// Put `kind` in `slot`, overwriting any ligand already there.
    pub fn place(&mut self, slot: usize, kind: LigandKind) -> Result<(), SessionError> {
        let slot = SlotId::new(slot)?;
        self.require_playing("place a ligand")?;
        self.assignment.place(slot, kind);
        self.result = None;
        log::debug!("placed {kind} at slot {slot}");
        Ok(())
    }

    /// Place the currently selected ligand.
    pub fn click_slot(&mut self, slot: usize) -> Result<(), SessionError> {
        self.place(slot, self.selected)
    }

    /// Clear the arrangement; the level stays the same.
    pub fn reset(&mut self) -> Result<(), SessionError> {
        self.require_playing("reset")?;
        self.assignment.clear();
        self.result = None;
        Ok(())
    }

    /// Judge the current arrangement against the current level.
    pub fn submit(&mut self) -> Result<ClassificationResult, SessionError> {
        self.require_playing("submit")?;
        let result = classify(&self.assignment, self.current_level());
        log::debug!("level {}: {}", self.level_number(), result.message);
        self.result = Some(result.clone());
        Ok(result)
    }

    /// Replace the arrangement with the canonical solution for the current target.
    pub fn show_answer(&mut self) -> Result<&Assignment, SessionError> {
        self.require_playing("show the answer")?;
        let target = self.current_level().target;
        self.assignment = self.book.solution(target).cloned().unwrap_or_default();
        self.result = Some(ClassificationResult::info(target));
        Ok(&self.assignment)
    }

    /// Move on after a successful submit. Without one this is a no-op.
    pub fn advance(&mut self) -> Result<GameState, SessionError> {
        self.require_playing("advance")?;
        if !self.can_advance() {
            log::warn!("advance ignored: level {} not solved yet", self.level_number());
            return Ok(self.state);
        }

        self.assignment.clear();
        self.result = None;
        if self.level_index + 1 < self.level_count() {
            self.level_index += 1;
            log::info!("advanced to level {}/{}", self.level_number(), self.level_count());
        } else {
            self.state = GameState::Completed;
            log::info!("campaign completed");
        }
        Ok(self.state)
    }

    /// Apply one queued player action.
    pub fn apply(&mut self, input: PuzzleInput) -> Result<(), SessionError> {
        match input {
            PuzzleInput::StartGame => self.start(),
            PuzzleInput::OpenGuide => self.open_guide(),
            PuzzleInput::CloseGuide => self.close_guide(),
            PuzzleInput::ReturnToStart => {
                self.return_to_start();
                Ok(())
            }
            PuzzleInput::SelectLigand(kind) => {
                self.select_ligand(kind);
                Ok(())
            }
            PuzzleInput::ClickSlot(slot) => self.click_slot(slot),
            PuzzleInput::PlaceLigand { slot, kind } => self.place(slot, kind),
            PuzzleInput::Reset => self.reset(),
            PuzzleInput::Submit => self.submit().map(|_| ()),
            PuzzleInput::ShowAnswer => self.show_answer().map(|_| ()),
            PuzzleInput::Advance => self.advance().map(|_| ()),
        }
    }

    fn require_playing(&self, action: &'static str) -> Result<(), SessionError> {
        if self.state == GameState::Playing {
            Ok(())
        } else {
            Err(SessionError::NotPlaying {
                action,
                state: self.state,
            })
        }
    }

    fn clear_progress(&mut self) {
        self.level_index = 0;
        self.assignment.clear();
        self.result = None;
    }
}
