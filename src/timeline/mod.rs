//! Seekable playback over an immutable trace.

pub mod clock;
pub mod controller;
pub mod observer;

pub use clock::{PlaybackClock, Tick};
pub use controller::Timeline;
pub use observer::TimelineObserver;

/// Playback lifecycle.
///
/// `Idle -> Ready` on generate, `Ready -> Playing` on play, `Playing -> Ready` on pause,
/// `-> Complete` when the terminal record is applied, and any state back to `Idle` on reset.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash, serde::Serialize, serde::Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PlaybackState {
    #[default]
    Idle,
    Ready,
    Playing,
    Complete,
}
