//! Tests for the debounce timer

use super::*;
use proptest::prelude::*;

fn ms(n: u64) -> Duration {
    Duration::from_millis(n)
}

#[test]
fn test_does_not_fire_before_deadline() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule_after(t0, "ap");

    assert_eq!(debouncer.poll(t0 + ms(299)), None);
    assert!(debouncer.is_pending());
}

#[test]
fn test_fires_once_at_deadline() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule_after(t0, "ap");

    assert_eq!(debouncer.poll(t0 + ms(300)), Some("ap"));
    assert_eq!(debouncer.poll(t0 + ms(900)), None);
    assert!(!debouncer.is_pending());
}

#[test]
fn test_reschedule_cancels_previous_timer() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    let first = debouncer.schedule_after(t0, "ap");
    debouncer.schedule_after(t0 + ms(100), "app");

    assert!(first.is_cancelled());
    assert_eq!(debouncer.poll(t0 + ms(300)), None);
    assert_eq!(debouncer.poll(t0 + ms(400)), Some("app"));
}

#[test]
fn test_cancel_prevents_firing() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    debouncer.schedule_after(t0, "ap");
    debouncer.cancel();

    assert!(!debouncer.is_pending());
    assert_eq!(debouncer.poll(t0 + ms(1000)), None);
}

#[test]
fn test_cancel_through_handle_prevents_firing() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    let handle = debouncer.schedule_after(t0, "ap");
    handle.cancel();
    handle.cancel();

    assert_eq!(debouncer.poll(t0 + ms(1000)), None);
}

#[test]
fn test_cancel_after_fire_is_harmless() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(10);
    let handle = debouncer.schedule_after(t0, 1);
    assert_eq!(debouncer.poll(t0 + ms(10)), Some(1));

    handle.cancel();
    debouncer.cancel();
    assert!(handle.is_cancelled());
}

#[test]
fn test_time_until_due() {
    let t0 = Instant::now();
    let mut debouncer = Debouncer::new(300);
    assert_eq!(debouncer.time_until_due(t0), None);

    debouncer.schedule_after(t0, ());
    assert_eq!(debouncer.time_until_due(t0 + ms(100)), Some(ms(200)));
    assert_eq!(debouncer.time_until_due(t0 + ms(500)), Some(Duration::ZERO));
}

// A burst of schedules spaced closer than the delay fires exactly once,
// carrying the last payload.
proptest! {
    #![proptest_config(ProptestConfig::with_cases(100))]

    #[test]
    fn prop_burst_coalesces_to_last_payload(gaps in prop::collection::vec(0u64..300, 1..20)) {
        let t0 = Instant::now();
        let mut debouncer = Debouncer::new(300);
        let mut now = t0;
        let mut fired = Vec::new();

        for (i, gap) in gaps.iter().enumerate() {
            now += ms(*gap);
            if let Some(payload) = debouncer.poll(now) {
                fired.push(payload);
            }
            debouncer.schedule_after(now, i);
        }
        now += ms(300);
        if let Some(payload) = debouncer.poll(now) {
            fired.push(payload);
        }

        prop_assert_eq!(fired, vec![gaps.len() - 1]);
    }
}
