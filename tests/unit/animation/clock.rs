use super::*;

#[test]
fn whole_frames_become_ticks() {
    let mut clock = FrameClock::new(Fps::new(60, 1).unwrap());
    assert_eq!(clock.advance(Duration::from_secs(1)), 60);
    assert_eq!(clock.advance(Duration::ZERO), 0);
}

#[test]
fn remainder_carries_between_calls() {
    let mut clock = FrameClock::new(Fps::new(10, 1).unwrap());
    assert_eq!(clock.advance(Duration::from_millis(150)), 1);
    assert_eq!(clock.advance(Duration::from_millis(50)), 1);
    assert_eq!(clock.advance(Duration::from_millis(99)), 0);
    clock.reset();
    assert_eq!(clock.advance(Duration::from_millis(99)), 0);
}

#[test]
fn sliced_time_matches_single_step() {
    let fps = Fps::new(60, 1).unwrap();
    let mut sliced = FrameClock::new(fps);
    let mut ticks = 0;
    for _ in 0..120 {
        ticks += sliced.advance(Duration::from_secs_f64(1.0 / 60.0));
    }
    let mut whole = FrameClock::new(fps);
    assert_eq!(ticks, whole.advance(Duration::from_secs(2)));
}
