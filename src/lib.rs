//! algotrace turns algorithm runs into replayable step traces.
//!
//! - A generator runs an algorithm to completion and returns an immutable [`Trace`] of
//!   self-sufficient step records
//! - A [`Projector`] maps any trace position to a renderable view by reading one record
//! - A [`Timeline`] plays, pauses, steps and seeks over a trace under a host-driven clock
//!
//! Inputs can be built in code, loaded from JSON through [`AlgorithmInput`], taken from the
//! built-in presets or drawn at random.
#![forbid(unsafe_code)]

pub mod foundation;
pub mod generators;
pub mod inputs;
pub mod projection;
pub mod timeline;
pub mod trace;

pub use crate::foundation::config::{Limits, PlaybackConfig};
pub use crate::foundation::core::{Cell, Position};
pub use crate::foundation::error::{PlaybackMisuse, TraceError, TraceResult};

pub use crate::generators::greedy::{ActivitySelection, CoinChange};
pub use crate::generators::knapsack::Knapsack;
pub use crate::generators::lcs::Lcs;
pub use crate::generators::merge_sort::MergeSort;
pub use crate::generators::mst::{Graph, MstAlgorithm, SpanningTree};
pub use crate::generators::pathfinding::{Maze, MazeSearch, Strategy};
pub use crate::generators::search::{BinarySearch, LinearSearch};
pub use crate::generators::sorting::{ComparisonSort, SortAlgorithm};
pub use crate::generators::traversal::GraphTraversal;

pub use crate::inputs::{AlgorithmInput, GraphPreset, JobVisitor, MazePreset};
pub use crate::projection::{Projector, first_divergence};
pub use crate::timeline::{PlaybackState, Timeline, TimelineObserver};
pub use crate::trace::{StepRecord, Trace, TraceGenerator};
