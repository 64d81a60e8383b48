pub mod layout;
pub mod ligand;
pub mod isomer;
pub mod classifier;
pub mod level;
pub mod session;
pub mod input;
pub mod bridge;
pub mod error;

// Re-export key types at crate root for convenience
pub use layout::{Slot, SlotId, SLOTS, SLOT_COUNT, slot_position, are_antipodal};
pub use ligand::{Assignment, LigandKind};
pub use isomer::{guide, GuideEntry, IsomerClass};
pub use classifier::{classify, classify_halides, ClassificationResult, Outcome, ResultKind};
pub use level::{Composition, LevelBook, LevelConfig};
pub use session::{GameState, Session};
pub use input::queue::{InputQueue, PuzzleInput};
pub use bridge::protocol::{GameEvent, PROTOCOL_VERSION};
pub use error::{LevelError, SessionError, SlotError};
