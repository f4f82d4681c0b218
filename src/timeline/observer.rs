use crate::foundation::core::Position;
use crate::projection::Projector;
use crate::timeline::PlaybackState;

/// Push-style subscriber to timeline changes. Every method defaults to a no-op.
pub trait TimelineObserver<P: Projector> {
    /// The position changed. `step` is the record now current (`None` at position 0).
    fn on_step(&mut self, _position: Position, _step: Option<&P::Step>, _view: &P::View) {}

    fn on_state(&mut self, _state: PlaybackState) {}

    /// Fired once per transition into [`PlaybackState::Complete`].
    fn on_complete(&mut self, _summary: &P::View) {}
}
