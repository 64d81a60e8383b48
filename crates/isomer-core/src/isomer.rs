//! Stereoisomer classes of an octahedral MA₄B₂ / MA₃B₃ complex.

use std::fmt;

use serde::{Deserialize, Serialize};

/// The four isomer classes the puzzle asks for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "UPPERCASE")]
pub enum IsomerClass {
    /// Two halides adjacent, 90° apart.
    Cis,
    /// Two halides opposite, 180° apart.
    Trans,
    /// Three halides on one triangular face, all mutually 90°.
    Fac,
    /// Three halides along a meridian, one pair at 180°.
    Mer,
}

impl IsomerClass {
    pub const ALL: [IsomerClass; 4] = [Self::Cis, Self::Trans, Self::Fac, Self::Mer];

    /// Short uppercase tag used in feedback messages ("CIS", "MER", ...).
    pub fn tag(self) -> &'static str {
        match self {
            Self::Cis => "CIS",
            Self::Trans => "TRANS",
            Self::Fac => "FAC",
            Self::Mer => "MER",
        }
    }

    /// Display name for the guide screen.
    pub fn name(self) -> &'static str {
        match self {
            Self::Cis => "Cis-Isomer",
            Self::Trans => "Trans-Isomer",
            Self::Fac => "Facial (Fac)",
            Self::Mer => "Meridional (Mer)",
        }
    }

    /// One-line explanation shown in the guide.
    pub fn summary(self) -> &'static str {
        match self {
            Self::Cis => "Ligands are adjacent (90°). Think \"Neighbors\".",
            Self::Trans => "Ligands are opposite (180°). Think \"Across\".",
            Self::Fac => {
                "Three identical ligands occupy the corners of one triangular face. All 90° to each other."
            }
            Self::Mer => {
                "Three identical ligands form a T-shape or line along the meridian. Includes a 180° angle."
            }
        }
    }

    pub fn guide_entry(self) -> GuideEntry {
        GuideEntry {
            class: self,
            name: self.name(),
            summary: self.summary(),
            halides: self.halide_count(),
        }
    }

    /// Number of halides this class is defined over.
    pub fn halide_count(self) -> usize {
        match self {
            Self::Cis | Self::Trans => 2,
            Self::Fac | Self::Mer => 3,
        }
    }

    /// Numeric code used on the JS bridge.
    pub fn code(self) -> u32 {
        match self {
            Self::Cis => 0,
            Self::Trans => 1,
            Self::Fac => 2,
            Self::Mer => 3,
        }
    }

    pub fn from_code(code: u32) -> Option<Self> {
        Self::ALL.get(code as usize).copied()
    }
}

/// One card of the guide screen.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct GuideEntry {
    pub class: IsomerClass,
    pub name: &'static str,
    pub summary: &'static str,
    pub halides: usize,
}

/// Guide cards in display order.
pub fn guide() -> Vec<GuideEntry> {
    IsomerClass::ALL.iter().map(|class| class.guide_entry()).collect()
}

impl fmt::Display for IsomerClass {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}
