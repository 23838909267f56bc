// Host-side tests for frame loop start/stop and teardown.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod frame {
    include!("../src/frame.rs");
}

use frame::*;
use std::cell::{Cell, RefCell};
use std::rc::Rc;

#[derive(Default)]
struct Record {
    requested: Vec<i32>,
    cancelled: Vec<i32>,
}

#[derive(Default, Clone)]
struct ManualFrames {
    record: Rc<RefCell<Record>>,
    next_id: Rc<Cell<i32>>,
    refuse: Rc<Cell<bool>>,
}

impl FrameScheduler for ManualFrames {
    fn request(&self) -> Option<i32> {
        if self.refuse.get() {
            return None;
        }
        let id = self.next_id.get() + 1;
        self.next_id.set(id);
        self.record.borrow_mut().requested.push(id);
        Some(id)
    }

    fn cancel(&self, id: i32) {
        self.record.borrow_mut().cancelled.push(id);
    }
}

fn started() -> (LoopCore<ManualFrames>, ManualFrames) {
    let frames = ManualFrames::default();
    let core = LoopCore::new("test", frames.clone());
    core.begin();
    (core, frames)
}

#[test]
fn begin_requests_one_frame() {
    let (core, frames) = started();
    assert!(core.is_running());
    assert_eq!(frames.record.borrow().requested, vec![1]);
}

#[test]
fn each_frame_steps_then_reschedules() {
    let (core, frames) = started();
    let mut seen = Vec::new();
    core.on_frame(16.0, &mut |ts| seen.push(ts));
    core.on_frame(32.0, &mut |ts| seen.push(ts));
    assert_eq!(seen, vec![16.0, 32.0]);
    assert_eq!(frames.record.borrow().requested, vec![1, 2, 3]);
}

#[test]
fn no_step_runs_after_stop() {
    let (core, frames) = started();
    core.stop();
    assert!(!core.is_running());
    assert_eq!(frames.record.borrow().cancelled, vec![1]);

    let mut steps = 0;
    core.on_frame(16.0, &mut |_| steps += 1);
    assert_eq!(steps, 0);
    assert_eq!(frames.record.borrow().requested, vec![1]);
}

#[test]
fn stop_is_idempotent() {
    let (core, frames) = started();
    core.stop();
    core.stop();
    drop(core);
    assert_eq!(frames.record.borrow().cancelled, vec![1]);
}

#[test]
fn dropping_the_loop_cancels_the_pending_frame() {
    let (core, frames) = started();
    core.on_frame(16.0, &mut |_| {});
    drop(core);
    assert_eq!(frames.record.borrow().cancelled, vec![2]);
}

#[test]
fn step_that_stops_the_loop_is_not_rescheduled() {
    let frames = ManualFrames::default();
    let core = Rc::new(LoopCore::new("test", frames.clone()));
    core.begin();
    let inner = core.clone();
    core.on_frame(16.0, &mut |_| inner.stop());
    assert!(!core.is_running());
    assert_eq!(frames.record.borrow().requested, vec![1]);
    // the delivered frame was no longer pending, so nothing to cancel
    assert!(frames.record.borrow().cancelled.is_empty());
}

#[test]
fn refused_request_halts_the_loop() {
    let frames = ManualFrames::default();
    frames.refuse.set(true);
    let core = LoopCore::new("test", frames.clone());
    core.begin();
    assert!(!core.is_running());
    let mut steps = 0;
    core.on_frame(16.0, &mut |_| steps += 1);
    assert_eq!(steps, 0);
}

#[test]
fn closed_set_turns_away_late_loops() {
    let (early, early_frames) = started();
    let mut set = LoopSet::default();
    assert!(set.admit(early).is_ok());

    let stopped = set.close();
    assert!(set.is_closed());
    assert_eq!(stopped.len(), 1);
    drop(stopped);
    assert_eq!(early_frames.record.borrow().cancelled, vec![1]);

    // a delayed start after teardown is handed back and dies with its handle
    let (late, late_frames) = started();
    let late = set.admit(late).err();
    assert!(late.is_some());
    drop(late);
    assert_eq!(late_frames.record.borrow().cancelled, vec![1]);
    assert!(set.close().is_empty());
}
