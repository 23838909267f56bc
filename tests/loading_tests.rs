// Host-side tests for the loading progress counter.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}
mod loading {
    include!("../src/loading.rs");
}

use loading::*;

#[test]
fn default_increment_spans_two_seconds() {
    let params = LoadingParams::default();
    assert!((params.increment() - 1.5).abs() < 1e-4);
}

#[test]
fn progress_is_monotonic_clamped_and_completes_once() {
    let mut p = LoadingProgress::new(&LoadingParams::default());
    let mut prev = 0.0f32;
    let mut completions = 0;
    let mut ticks_to_done = None;
    for n in 1..=200 {
        let tick = p.tick();
        assert!(tick.percent >= prev, "tick {} went backwards", n);
        assert!(tick.percent <= 100.0);
        if tick.completed {
            completions += 1;
            ticks_to_done.get_or_insert(n);
        }
        prev = tick.percent;
    }
    assert_eq!(completions, 1);
    assert_eq!(prev, 100.0);
    assert_eq!(p.percent(), 100.0);
    assert!(p.is_done());
    // 2000 ms at 30 ms per tick
    assert_eq!(ticks_to_done, Some(67));
}

#[test]
fn completion_tick_reports_exactly_one_hundred() {
    let mut p = LoadingProgress::new(&LoadingParams::default());
    let last = std::iter::repeat_with(|| p.tick())
        .find(|t| t.completed)
        .unwrap();
    assert_eq!(last.percent, 100.0);
    assert_eq!(last.label, 100);
}

#[test]
fn label_is_rounded_percent() {
    let params = LoadingParams {
        duration_ms: 300.0,
        tick_ms: 100,
        grace_ms: 0,
    };
    let mut p = LoadingProgress::new(&params);
    let first = p.tick();
    assert!((first.percent - 33.333).abs() < 1e-2);
    assert_eq!(first.label, 33);
    let second = p.tick();
    assert_eq!(second.label, 67);
    assert!(!second.completed);
}

#[test]
fn exact_increments_complete_on_the_last_step() {
    let params = LoadingParams {
        duration_ms: 400.0,
        tick_ms: 100,
        grace_ms: 0,
    };
    let mut p = LoadingProgress::new(&params);
    let labels: Vec<u32> = (0..4).map(|_| p.tick().label).collect();
    assert_eq!(labels, vec![25, 50, 75, 100]);
    assert!(p.is_done());
}

#[test]
fn ticks_after_completion_are_inert() {
    let params = LoadingParams {
        duration_ms: 30.0,
        tick_ms: 30,
        grace_ms: 0,
    };
    let mut p = LoadingProgress::new(&params);
    assert!(p.tick().completed);
    for _ in 0..5 {
        let t = p.tick();
        assert!(!t.completed);
        assert_eq!(t.percent, 100.0);
    }
}

#[test]
fn zero_tick_interval_does_not_divide_by_zero() {
    let params = LoadingParams {
        duration_ms: 2000.0,
        tick_ms: 0,
        grace_ms: 0,
    };
    assert!(params.increment().is_finite());
}
