use flickflow::catalog::CarouselDriver;
use std::time::{Duration, Instant};

const INTERVAL: Duration = Duration::from_millis(4000);

/// Advancing K times in any mix of ticks and manual steps lands on K mod N.
#[test]
fn test_wraparound_with_mixed_advances() {
    let t0 = Instant::now();
    let mut carousel = CarouselDriver::start(3, INTERVAL, 80, t0);
    let mut now = t0;
    let mut advances = 0usize;

    for step in 0..11 {
        if step % 3 == 0 {
            now += INTERVAL;
            assert!(carousel.on_tick(now));
        } else {
            now += Duration::from_millis(10);
            assert!(carousel.next(now));
        }
        advances += 1;
        assert_eq!(carousel.current_index(), advances % 3);
    }
}

#[test]
fn test_previous_wraps_to_last() {
    let now = Instant::now();
    let mut carousel = CarouselDriver::start(4, INTERVAL, 80, now);
    carousel.prev(now);
    assert_eq!(carousel.current_index(), 3);
    assert_eq!(carousel.scroll_offset(), 3 * 80);
}

#[test]
fn test_manual_navigation_restarts_timer() {
    let t0 = Instant::now();
    let mut carousel = CarouselDriver::start(5, INTERVAL, 10, t0);

    let almost = t0 + INTERVAL - Duration::from_millis(100);
    carousel.next(almost);
    assert_eq!(carousel.current_index(), 1);

    // The original deadline has passed, but the timer was re-armed.
    assert!(!carousel.on_tick(t0 + INTERVAL));
    assert!(carousel.on_tick(almost + INTERVAL));
    assert_eq!(carousel.current_index(), 2);
}

#[test]
fn test_empty_carousel_never_moves() {
    let t0 = Instant::now();
    let mut carousel = CarouselDriver::start(0, INTERVAL, 80, t0);

    assert!(!carousel.on_tick(t0 + INTERVAL * 10));
    assert!(!carousel.next(t0));
    assert!(!carousel.prev(t0));
    assert_eq!(carousel.current_index(), 0);
    assert_eq!(carousel.scroll_offset(), 0);
}
