use super::*;

fn stats(entries: &[(&str, Option<&str>)]) -> StatsState {
    let entries = entries
        .iter()
        .map(|(text, target)| ((*text).to_owned(), target.map(str::to_owned)))
        .collect();
    StatsState::new(entries, &MotionConfig::default())
}

// =============================================================
// parse_target
// =============================================================

#[test]
fn parse_target_reads_leading_integer() {
    assert_eq!(parse_target("150"), Some(150));
    assert_eq!(parse_target("  42"), Some(42));
    assert_eq!(parse_target("12 years"), Some(12));
    assert_eq!(parse_target("-8"), Some(-8));
    assert_eq!(parse_target("+3"), Some(3));
}

#[test]
fn parse_target_rejects_non_numeric() {
    assert_eq!(parse_target(""), None);
    assert_eq!(parse_target("abc"), None);
    assert_eq!(parse_target("-"), None);
}

// =============================================================
// CounterAnimation
// =============================================================

#[test]
fn counter_reaches_target_in_configured_steps() {
    let mut counter = CounterAnimation::new(150, 50);
    let mut frames = Vec::new();
    loop {
        let frame = counter.advance();
        frames.push(frame);
        if frame == CounterFrame::Done {
            break;
        }
    }
    assert_eq!(frames.len(), 50);
    assert_eq!(frames[0], CounterFrame::Progress(3));
    assert_eq!(frames[48], CounterFrame::Progress(147));
}

#[test]
fn counter_floors_fractional_progress() {
    let mut counter = CounterAnimation::new(10, 50);
    assert_eq!(counter.advance(), CounterFrame::Progress(0));
    assert_eq!(counter.advance(), CounterFrame::Progress(0));
    for _ in 0..3 {
        counter.advance();
    }
    // Six increments of 0.2.
    let sixth = counter.advance();
    assert!(matches!(sixth, CounterFrame::Progress(1)));
}

#[test]
fn zero_target_finishes_on_first_tick() {
    let mut counter = CounterAnimation::new(0, 50);
    assert_eq!(counter.advance(), CounterFrame::Done);
}

// =============================================================
// StatsState
// =============================================================

#[test]
fn start_only_schedules_counters_showing_zero() {
    let mut state = stats(&[("0", Some("150")), ("99", Some("99")), ("0", None)]);
    let mut out = Vec::new();
    state.start(&mut out);
    assert_eq!(out, vec![Effect::SetInterval { timer: Timer::CounterTick(0), period_ms: 40 }]);
    assert!(state.is_running(0));
    assert!(!state.is_running(1));
    assert!(!state.is_running(2));
}

#[test]
fn ticks_update_text_and_finish_with_suffix() {
    let mut state = stats(&[("0", Some("150"))]);
    let mut out = Vec::new();
    state.start(&mut out);

    out.clear();
    state.tick(0, &mut out);
    assert_eq!(state.text(0), Some("3"));
    assert_eq!(out, vec![Effect::text(Target::Stat(0), "3")]);

    for _ in 0..49 {
        state.tick(0, &mut out);
    }
    assert_eq!(state.text(0), Some("150+"));
    assert!(!state.is_running(0));
    assert!(out.contains(&Effect::ClearInterval(Timer::CounterTick(0))));
}

#[test]
fn finished_counter_is_not_restarted() {
    let mut state = stats(&[("0", Some("5"))]);
    let mut out = Vec::new();
    state.start(&mut out);
    while state.is_running(0) {
        state.tick(0, &mut out);
    }
    out.clear();
    state.start(&mut out);
    assert!(out.is_empty());
    assert_eq!(state.text(0), Some("5+"));
}

#[test]
fn stray_tick_clears_its_interval() {
    let mut state = stats(&[("7", Some("7"))]);
    let mut out = Vec::new();
    state.tick(0, &mut out);
    assert_eq!(out, vec![Effect::ClearInterval(Timer::CounterTick(0))]);
    assert_eq!(state.text(0), Some("7"));
}
