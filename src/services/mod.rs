//! Service layer for business logic.
//!
//! Pure palette operations (generation, brightness, contrast, encoding) and
//! the saved-palettes persistence they are combined with in [`crate::session`].

pub mod codec;
pub mod contrast;
pub mod harmony;
pub mod random;
pub mod storage;

// Re-export commonly used types and functions
pub use contrast::{contrast_ratio, AccessibilityReport, ContrastLevel, ContrastResult};
pub use harmony::{adjust_brightness, generate};
pub use random::{AnyRandom, RandomSource, SeededRandom, SequenceRandom, ThreadRandom};
pub use storage::{FileStore, MemoryStore, SavedPaletteStore};
