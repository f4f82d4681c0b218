use super::*;

#[test]
fn ticks_pop_in_due_then_schedule_order() {
    let mut clock = PlaybackClock::new();
    clock.schedule_at(20, 0);
    let a = clock.schedule_at(10, 0);
    let b = clock.schedule_at(10, 1);
    assert_eq!(clock.pop_due(), None);

    clock.advance(15);
    assert_eq!(clock.pop_due(), Some(a));
    assert_eq!(clock.pop_due(), Some(b));
    assert_eq!(clock.pop_due(), None);
    assert_eq!(clock.pending(), 1);

    clock.advance(5);
    assert_eq!(clock.pop_due().map(|t| t.due_ms), Some(20));
    assert!(clock.peek().is_none());
}

#[test]
fn advance_saturates() {
    let mut clock = PlaybackClock::new();
    clock.advance(u64::MAX);
    clock.advance(10);
    assert_eq!(clock.now_ms(), u64::MAX);
}
