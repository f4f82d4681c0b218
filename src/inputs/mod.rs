//! Ways to obtain algorithm inputs: JSON documents, built-in presets and random builders.

pub mod algorithm;
pub mod presets;
pub mod random;

pub use algorithm::{AlgorithmInput, ArrayInput, JobVisitor};
pub use presets::{GraphPreset, MazePreset};
