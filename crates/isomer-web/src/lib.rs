//! WASM bridge for the isomer puzzle.
//!
//! Holds one [`SessionRunner`] in `thread_local!` storage and exports the
//! puzzle operations as free functions, because wasm-bindgen cannot export
//! a stateful Rust object graph directly. The renderer calls these from its
//! event handlers; every call runs to completion before the next one.
//!
//! ```ignore
//! import init, { game_init, place_ligand, submit } from "isomer_web";
//! await init();
//! game_init();
//! start_game();
//! place_ligand(0, 1);
//! const result = JSON.parse(submit());
//! ```

pub mod runner;

use std::cell::RefCell;

use wasm_bindgen::prelude::*;

use isomer_core::bridge::protocol::PROTOCOL_VERSION;
use isomer_core::{slot_position as core_slot_position, IsomerClass, LigandKind, PuzzleInput, Session};

pub use runner::SessionRunner;

thread_local! {
    static RUNNER: RefCell<Option<SessionRunner>> = const { RefCell::new(None) };
}

fn with_runner<R>(f: impl FnOnce(&mut SessionRunner) -> R) -> Result<R, JsError> {
    RUNNER.with(|cell| {
        let mut borrow = cell.borrow_mut();
        match borrow.as_mut() {
            Some(runner) => Ok(f(runner)),
            None => Err(JsError::new("Game not initialized. Call game_init() first.")),
        }
    })
}

fn ligand_from_code(code: u32) -> Result<LigandKind, JsError> {
    LigandKind::from_code(code).ok_or_else(|| JsError::new(&format!("unknown ligand code {code}")))
}

fn isomer_from_code(code: u32) -> Result<IsomerClass, JsError> {
    IsomerClass::from_code(code).ok_or_else(|| JsError::new(&format!("unknown isomer code {code}")))
}

#[wasm_bindgen]
pub fn game_init() -> Result<(), JsError> {
    console_error_panic_hook::set_once();
    let _ = console_log::init_with_level(log::Level::Info);

    let session = Session::with_baked_levels()?;
    let runner = SessionRunner::new(session);

    RUNNER.with(|cell| {
        *cell.borrow_mut() = Some(runner);
    });

    log::info!("isomer-puzzle: initialized (protocol v{PROTOCOL_VERSION})");
    Ok(())
}

/// Replace the baked level table with a custom one.
#[wasm_bindgen]
pub fn game_load_levels(json: &str) -> Result<(), JsError> {
    with_runner(|r| r.load_levels(json))??;
    Ok(())
}

// ---- Queued input ----

#[wasm_bindgen]
pub fn game_custom_event(kind: u32, a: f32, b: f32, c: f32) -> Result<(), JsError> {
    with_runner(|r| r.push_custom(kind, a, b, c))
}

/// Apply queued events; returns how many were accepted.
#[wasm_bindgen]
pub fn game_tick() -> Result<u32, JsError> {
    with_runner(|r| r.tick() as u32)
}

// ---- Menu ----

#[wasm_bindgen]
pub fn start_game() -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::StartGame))??;
    Ok(())
}

#[wasm_bindgen]
pub fn open_guide() -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::OpenGuide))??;
    Ok(())
}

#[wasm_bindgen]
pub fn close_guide() -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::CloseGuide))??;
    Ok(())
}

/// Abandon the campaign and return to the start screen.
#[wasm_bindgen]
pub fn abandon_game() -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::ReturnToStart))??;
    Ok(())
}

// ---- Gameplay ----

#[wasm_bindgen]
pub fn select_ligand(kind: u32) -> Result<(), JsError> {
    let kind = ligand_from_code(kind)?;
    with_runner(|r| r.apply(PuzzleInput::SelectLigand(kind)))??;
    Ok(())
}

#[wasm_bindgen]
pub fn click_slot(slot: u32) -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::ClickSlot(slot as usize)))??;
    Ok(())
}

#[wasm_bindgen]
pub fn place_ligand(slot: u32, kind: u32) -> Result<(), JsError> {
    let kind = ligand_from_code(kind)?;
    with_runner(|r| r.place_ligand(slot as usize, kind))??;
    Ok(())
}

#[wasm_bindgen]
pub fn reset_assignment() -> Result<(), JsError> {
    with_runner(|r| r.apply(PuzzleInput::Reset))??;
    Ok(())
}

/// Judge the arrangement; returns the result as JSON.
#[wasm_bindgen]
pub fn submit() -> Result<String, JsError> {
    let result = with_runner(|r| r.submit())??;
    Ok(serde_json::to_string(&result)?)
}

/// Reveal the current level's solution; returns the arrangement as JSON.
#[wasm_bindgen]
pub fn show_answer() -> Result<String, JsError> {
    let answer = with_runner(|r| r.show_answer())??;
    Ok(serde_json::to_string(&answer)?)
}

/// Canonical solution for any isomer class, without touching the session.
#[wasm_bindgen]
pub fn solution_json(target: u32) -> Result<String, JsError> {
    let target = isomer_from_code(target)?;
    let json = with_runner(|r| serde_json::to_string(&r.session().levels().solution(target)))??;
    Ok(json)
}

/// Advance after a success; returns the new state code.
#[wasm_bindgen]
pub fn advance_level() -> Result<u32, JsError> {
    let state = with_runner(|r| r.advance())??;
    Ok(state.code())
}

// ---- Queries ----

/// Unit position `[x, y, z]` of a slot, for placing geometry.
#[wasm_bindgen]
pub fn slot_position(id: u32) -> Result<Vec<f32>, JsError> {
    let pos = core_slot_position(id as usize)?;
    Ok(pos.to_array().to_vec())
}

#[wasm_bindgen]
pub fn current_level_json() -> Result<String, JsError> {
    Ok(with_runner(|r| r.current_level_json())??)
}

#[wasm_bindgen]
pub fn result_json() -> Result<String, JsError> {
    Ok(with_runner(|r| r.result_json())??)
}

#[wasm_bindgen]
pub fn assignment_json() -> Result<String, JsError> {
    Ok(with_runner(|r| r.assignment_json())??)
}

/// Guide cards (class, name, summary, halide count) as JSON.
#[wasm_bindgen]
pub fn guide_json() -> Result<String, JsError> {
    Ok(with_runner(|r| r.guide_json())??)
}

#[wasm_bindgen]
pub fn get_state() -> Result<u32, JsError> {
    with_runner(|r| r.session().state().code())
}

#[wasm_bindgen]
pub fn get_level_index() -> Result<u32, JsError> {
    with_runner(|r| r.session().level_index() as u32)
}

#[wasm_bindgen]
pub fn get_level_count() -> Result<u32, JsError> {
    with_runner(|r| r.session().level_count() as u32)
}

#[wasm_bindgen]
pub fn get_protocol_version() -> f32 {
    PROTOCOL_VERSION
}

// ---- Event buffer accessors ----

#[wasm_bindgen]
pub fn get_game_events_ptr() -> Result<*const f32, JsError> {
    with_runner(|r| r.game_events_ptr())
}

#[wasm_bindgen]
pub fn get_game_events_len() -> Result<u32, JsError> {
    with_runner(|r| r.game_events_len())
}
