use crate::foundation::config::PlaybackConfig;
use crate::foundation::core::Position;
use crate::foundation::error::{PlaybackMisuse, TraceResult};
use crate::projection::Projector;
use crate::timeline::PlaybackState;
use crate::timeline::clock::PlaybackClock;
use crate::timeline::observer::TimelineObserver;
use crate::trace::{Trace, TraceGenerator};

/// Owns the playback position over one trace and the play/pause/seek state machine.
///
/// `position` counts applied records: `0` is the blank pre-start view, `len` means the
/// terminal record is applied and the state is `Complete`. The auto-advance timer is driven by
/// the host through [`Timeline::advance_time`]; every scheduled tick carries the epoch it was
/// scheduled in, and `pause`, `reset` and speed changes move to a new epoch so that older
/// ticks are discarded when they come due.
pub struct Timeline<P: Projector> {
    config: PlaybackConfig,
    loaded: Option<Loaded<P>>,
    position: Position,
    state: PlaybackState,
    clock: PlaybackClock,
    epoch: u64,
    live_due: Option<u64>,
    observers: Vec<Box<dyn TimelineObserver<P>>>,
}

struct Loaded<P: Projector> {
    name: &'static str,
    trace: Trace<P::Step>,
    projector: P,
    view: P::View,
    summary: Option<P::View>,
}

impl<P: Projector> Default for Timeline<P> {
    fn default() -> Self {
        Self::with_config(PlaybackConfig::default())
    }
}

impl<P: Projector> Timeline<P> {
    pub fn new(config: PlaybackConfig) -> TraceResult<Self> {
        config.validate()?;
        Ok(Self::with_config(config))
    }

    fn with_config(config: PlaybackConfig) -> Self {
        Self {
            config,
            loaded: None,
            position: Position::START,
            state: PlaybackState::Idle,
            clock: PlaybackClock::new(),
            epoch: 0,
            live_due: None,
            observers: Vec::new(),
        }
    }

    pub fn subscribe(&mut self, observer: Box<dyn TimelineObserver<P>>) {
        self.observers.push(observer);
    }

    /// Run the generator and move `Idle -> Ready`. A no-op returning `false` when a trace
    /// already exists; call [`Timeline::reset`] first to load another one.
    pub fn generate<G>(&mut self, job: &G) -> TraceResult<bool>
    where
        G: TraceGenerator<Step = P::Step, Projector = P>,
    {
        if self.loaded.is_some() {
            tracing::debug!(algorithm = job.name(), "trace already loaded, generate ignored");
            return Ok(false);
        }
        let trace = job.generate()?;
        let projector = job.projector();
        let view = projector.blank();
        tracing::debug!(algorithm = job.name(), records = trace.len(), "trace loaded");
        self.loaded = Some(Loaded {
            name: job.name(),
            trace,
            projector,
            view,
            summary: None,
        });
        self.position = Position::START;
        self.transition(PlaybackState::Ready);
        self.notify_step();
        Ok(true)
    }

    /// Start auto-advancing. Playing again while already playing is a no-op.
    pub fn play(&mut self) -> TraceResult<()> {
        let len = self.loaded()?.trace.len();
        if len == 0 {
            return Err(PlaybackMisuse::EmptyTrace.into());
        }
        match self.state {
            PlaybackState::Playing => Ok(()),
            PlaybackState::Complete => Err(PlaybackMisuse::AlreadyComplete.into()),
            PlaybackState::Idle | PlaybackState::Ready => {
                self.transition(PlaybackState::Playing);
                self.schedule(self.clock.now_ms());
                Ok(())
            }
        }
    }

    /// `Playing -> Ready`. Pending ticks become stale immediately.
    pub fn pause(&mut self) {
        if self.state == PlaybackState::Playing {
            self.bump_epoch();
            self.transition(PlaybackState::Ready);
        }
    }

    /// Drop the trace and every piece of derived state, returning to `Idle`.
    pub fn reset(&mut self) {
        self.bump_epoch();
        self.loaded = None;
        self.position = Position::START;
        self.transition(PlaybackState::Idle);
    }

    /// Apply the next record. Returns `false` when already at the end.
    pub fn step_forward(&mut self) -> TraceResult<bool> {
        self.guard_manual()?;
        let len = self.len();
        if self.position.0 >= len {
            return Ok(false);
        }
        self.move_to(self.position.forward(len));
        Ok(true)
    }

    /// Un-apply the current record. Returns `false` at position 0.
    pub fn step_backward(&mut self) -> TraceResult<bool> {
        self.guard_manual()?;
        if self.position == Position::START {
            return Ok(false);
        }
        self.move_to(self.position.backward());
        Ok(true)
    }

    /// Jump to `position`, clamped to `[0, len]`.
    pub fn seek(&mut self, position: Position) -> TraceResult<Position> {
        self.guard_manual()?;
        let target = position.clamp(self.len());
        if target != self.position {
            self.move_to(target);
        }
        Ok(self.position)
    }

    /// Change the speed. While playing, the pending tick is replaced by one at the new delay.
    pub fn set_speed(&mut self, speed: u32) -> TraceResult<()> {
        if speed == 0 {
            return Err(PlaybackMisuse::ZeroSpeed.into());
        }
        self.config.speed = speed;
        tracing::debug!(speed, delay_ms = self.config.delay_ms(), "speed changed");
        if self.state == PlaybackState::Playing {
            self.bump_epoch();
            self.schedule(self.clock.now_ms());
        }
        Ok(())
    }

    /// Advance the virtual clock and run every tick that came due. Returns how many records
    /// were applied.
    pub fn advance_time(&mut self, elapsed_ms: u64) -> usize {
        self.clock.advance(elapsed_ms);
        let mut applied = 0;
        while let Some(tick) = self.clock.pop_due() {
            if tick.epoch != self.epoch || self.state != PlaybackState::Playing {
                tracing::trace!(
                    due_ms = tick.due_ms,
                    tick_epoch = tick.epoch,
                    epoch = self.epoch,
                    "stale tick discarded"
                );
                continue;
            }
            self.live_due = None;
            let len = self.len();
            tracing::trace!(due_ms = tick.due_ms, position = self.position.0, "tick");
            self.move_to(self.position.forward(len));
            applied += 1;
            if self.state == PlaybackState::Playing {
                self.schedule(tick.due_ms);
            }
        }
        applied
    }

    /// Due time of the live auto-advance tick, if playback is running.
    pub fn next_due_ms(&self) -> Option<u64> {
        self.live_due
    }

    pub fn now_ms(&self) -> u64 {
        self.clock.now_ms()
    }

    pub fn config(&self) -> &PlaybackConfig {
        &self.config
    }

    pub fn state(&self) -> PlaybackState {
        self.state
    }

    pub fn position(&self) -> Position {
        self.position
    }

    /// Trace length, 0 when idle.
    pub fn len(&self) -> usize {
        self.loaded.as_ref().map_or(0, |l| l.trace.len())
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn algorithm(&self) -> Option<&'static str> {
        self.loaded.as_ref().map(|l| l.name)
    }

    pub fn trace(&self) -> Option<&Trace<P::Step>> {
        self.loaded.as_ref().map(|l| &l.trace)
    }

    /// Record applied last, `None` at position 0 or when idle.
    pub fn current_step(&self) -> Option<&P::Step> {
        let loaded = self.loaded.as_ref()?;
        loaded.trace.get(self.position.record_index()?)
    }

    /// Projected view at the current position, `None` when idle.
    pub fn view(&self) -> Option<&P::View> {
        self.loaded.as_ref().map(|l| &l.view)
    }

    /// View captured when playback last completed.
    pub fn summary(&self) -> Option<&P::View> {
        self.loaded.as_ref().and_then(|l| l.summary.as_ref())
    }

    fn loaded(&self) -> TraceResult<&Loaded<P>> {
        self.loaded
            .as_ref()
            .ok_or_else(|| PlaybackMisuse::NoTrace.into())
    }

    fn guard_manual(&self) -> TraceResult<()> {
        self.loaded()?;
        if self.state == PlaybackState::Playing {
            return Err(PlaybackMisuse::SteppingWhilePlaying.into());
        }
        Ok(())
    }

    fn bump_epoch(&mut self) {
        self.epoch += 1;
        self.live_due = None;
    }

    fn schedule(&mut self, from_ms: u64) {
        let due = from_ms.saturating_add(self.config.delay_ms());
        self.clock.schedule_at(due, self.epoch);
        self.live_due = Some(due);
    }

    /// Set the position, re-project from the one record it needs and settle the state.
    fn move_to(&mut self, target: Position) {
        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };
        let len = loaded.trace.len();
        self.position = target.clamp(len);
        loaded.view = loaded.projector.view_at(&loaded.trace, self.position);
        self.notify_step();

        let at_end = self.position.0 == len;
        match (self.state, at_end) {
            (PlaybackState::Complete, true) => {}
            (_, true) => {
                if self.state == PlaybackState::Playing {
                    self.bump_epoch();
                }
                self.transition(PlaybackState::Complete);
                self.complete();
            }
            (PlaybackState::Complete, false) => self.transition(PlaybackState::Ready),
            (_, false) => {}
        }
    }

    fn complete(&mut self) {
        let Some(loaded) = self.loaded.as_mut() else {
            return;
        };
        loaded.summary = Some(loaded.view.clone());
        tracing::debug!(
            algorithm = loaded.name,
            records = loaded.trace.len(),
            "playback complete"
        );
        for o in &mut self.observers {
            o.on_complete(&loaded.view);
        }
    }

    fn transition(&mut self, next: PlaybackState) {
        if self.state == next {
            return;
        }
        tracing::debug!(from = ?self.state, to = ?next, "playback state");
        self.state = next;
        for o in &mut self.observers {
            o.on_state(next);
        }
    }

    fn notify_step(&mut self) {
        let Some(loaded) = self.loaded.as_ref() else {
            return;
        };
        let step = self
            .position
            .record_index()
            .and_then(|i| loaded.trace.get(i));
        for o in &mut self.observers {
            o.on_step(self.position, step, &loaded.view);
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/timeline/controller.rs"]
mod tests;
