//! Level sequence and reference solutions.
//!
//! The table is configuration data baked from `data/levels.json`; an
//! alternative table can be parsed with [`LevelBook::from_json`].

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::classifier::classify;
use crate::error::LevelError;
use crate::isomer::IsomerClass;
use crate::layout::SLOT_COUNT;
use crate::ligand::Assignment;

const LEVELS_JSON: &str = include_str!("../data/levels.json");

/// Ligand counts, either required by a level or found in an assignment.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Composition {
    pub halide: usize,
    pub filler: usize,
}

impl Composition {
    pub fn new(halide: usize, filler: usize) -> Self {
        Self { halide, filler }
    }

    pub fn total(&self) -> usize {
        self.halide + self.filler
    }
}

/// One puzzle in the campaign.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LevelConfig {
    pub id: u32,
    pub name: String,
    pub description: String,
    /// Formula shown under the description, e.g. `[M(NH₃)₄Cl₂]`.
    pub formula: String,
    pub target: IsomerClass,
    pub required_cl: usize,
    #[serde(rename = "requiredNH3")]
    pub required_nh3: usize,
}

impl LevelConfig {
    pub fn composition(&self) -> Composition {
        Composition::new(self.required_cl, self.required_nh3)
    }
}

#[derive(Deserialize)]
struct LevelTableJSON {
    levels: Vec<LevelConfig>,
    solutions: BTreeMap<IsomerClass, Assignment>,
}

/// Ordered levels plus one canonical solution per isomer class.
#[derive(Debug, Clone)]
pub struct LevelBook {
    levels: Vec<LevelConfig>,
    solutions: BTreeMap<IsomerClass, Assignment>,
}

impl LevelBook {
    /// Load the baked level table.
    pub fn load() -> Result<Self, LevelError> {
        Self::from_json(LEVELS_JSON)
    }

    /// Parse and validate a level table.
    pub fn from_json(json: &str) -> Result<Self, LevelError> {
        let raw: LevelTableJSON = serde_json::from_str(json)?;
        Self::new(raw.levels, raw.solutions)
    }

    pub fn new(
        levels: Vec<LevelConfig>,
        solutions: BTreeMap<IsomerClass, Assignment>,
    ) -> Result<Self, LevelError> {
        if levels.is_empty() {
            return Err(LevelError::NoLevels);
        }

        for level in &levels {
            let total = level.composition().total();
            if total > SLOT_COUNT {
                return Err(LevelError::TooManyLigands { level: level.id, total });
            }
            let Some(solution) = solutions.get(&level.target) else {
                return Err(LevelError::MissingSolution {
                    level: level.id,
                    target: level.target,
                });
            };
            // "Show answer" then submit must always succeed.
            let check = classify(solution, level);
            if !check.is_success() {
                log::warn!("level {} ({}): solution rejected: {}", level.id, level.name, check.message);
                return Err(LevelError::BadSolution {
                    level: level.id,
                    target: level.target,
                });
            }
        }

        log::info!("loaded {} levels", levels.len());
        Ok(Self { levels, solutions })
    }

    pub fn levels(&self) -> &[LevelConfig] {
        &self.levels
    }

    pub fn level(&self, index: usize) -> Option<&LevelConfig> {
        self.levels.get(index)
    }

    /// Number of levels in the campaign (never zero).
    pub fn len(&self) -> usize {
        self.levels.len()
    }

    /// Canonical arrangement for "show answer".
    pub fn solution(&self, target: IsomerClass) -> Option<&Assignment> {
        self.solutions.get(&target)
    }
}
