pub mod adjacent;
pub mod assembly;
pub mod axes;
pub mod component;
pub mod conflicts;
pub mod guidance;
pub mod library;
pub mod presets;
pub mod scoring;
pub mod selector;

pub use assembly::{AdjacentVariant, Assembler, Blueprint};
pub use axes::{AxisName, AxisVector, Formality, PartialAxisVector};
pub use conflicts::{ConflictResult, MajorConflict, MinorTension};
pub use library::ContentLibraries;
