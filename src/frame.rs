use std::cell::Cell;

/// Source of animation frames. The browser build uses
/// `requestAnimationFrame`; tests drive frames by hand.
pub trait FrameScheduler {
    /// Ask for the next frame. `None` means the host refused.
    fn request(&self) -> Option<i32>;
    fn cancel(&self, id: i32);
}

/// Start/stop bookkeeping for one frame loop.
///
/// At most one frame is pending at a time. Once stopped, no further step runs
/// and nothing is rescheduled. Dropping the core stops it, which cancels the
/// pending frame.
pub struct LoopCore<S: FrameScheduler> {
    name: &'static str,
    running: Cell<bool>,
    pending: Cell<Option<i32>>,
    scheduler: S,
}

impl<S: FrameScheduler> LoopCore<S> {
    pub fn new(name: &'static str, scheduler: S) -> Self {
        Self {
            name,
            running: Cell::new(true),
            pending: Cell::new(None),
            scheduler,
        }
    }

    pub fn scheduler(&self) -> &S {
        &self.scheduler
    }

    pub fn is_running(&self) -> bool {
        self.running.get()
    }

    /// Schedule the first frame.
    pub fn begin(&self) {
        if self.running.get() {
            self.request();
        }
    }

    /// Handle a delivered frame: run `step` and schedule the next one.
    pub fn on_frame(&self, ts: f64, step: &mut dyn FnMut(f64)) {
        self.pending.set(None);
        if !self.running.get() {
            return;
        }
        step(ts);
        if self.running.get() {
            self.request();
        }
    }

    pub fn stop(&self) {
        if !self.running.replace(false) {
            return;
        }
        if let Some(id) = self.pending.take() {
            self.scheduler.cancel(id);
        }
        log::info!("[{}] frame loop stopped", self.name);
    }

    fn request(&self) {
        match self.scheduler.request() {
            Some(id) => self.pending.set(Some(id)),
            None => {
                log::error!("[{}] no animation frame available", self.name);
                self.running.set(false);
            }
        }
    }
}

impl<S: FrameScheduler> Drop for LoopCore<S> {
    fn drop(&mut self) {
        self.stop();
    }
}

/// The page's running loops. Once closed, late starters are turned away so a
/// delayed start cannot outlive teardown.
pub struct LoopSet<L> {
    loops: Vec<L>,
    closed: bool,
}

impl<L> Default for LoopSet<L> {
    fn default() -> Self {
        Self {
            loops: Vec::new(),
            closed: false,
        }
    }
}

impl<L> LoopSet<L> {
    pub fn is_closed(&self) -> bool {
        self.closed
    }

    /// Keep `l` alive. After `close` the loop is handed back instead.
    pub fn admit(&mut self, l: L) -> Result<(), L> {
        if self.closed {
            return Err(l);
        }
        self.loops.push(l);
        Ok(())
    }

    /// Refuse further loops and give up the current ones.
    pub fn close(&mut self) -> Vec<L> {
        self.closed = true;
        std::mem::take(&mut self.loops)
    }
}

#[cfg(target_arch = "wasm32")]
pub use browser::FrameLoop;

#[cfg(target_arch = "wasm32")]
mod browser {
    use super::{FrameScheduler, LoopCore};
    use std::cell::RefCell;
    use std::rc::{Rc, Weak};
    use wasm_bindgen::closure::Closure;
    use wasm_bindgen::JsCast;
    use web_sys as web;

    #[derive(Default)]
    pub struct RafScheduler {
        tick: RefCell<Option<Closure<dyn FnMut(f64)>>>,
    }

    impl FrameScheduler for RafScheduler {
        fn request(&self) -> Option<i32> {
            let window = web::window()?;
            let tick = self.tick.borrow();
            let cb = tick.as_ref()?;
            window
                .request_animation_frame(cb.as_ref().unchecked_ref())
                .map_err(|e| log::error!("requestAnimationFrame failed: {:?}", e))
                .ok()
        }

        fn cancel(&self, id: i32) {
            if let Some(window) = web::window() {
                _ = window.cancel_animation_frame(id);
            }
        }
    }

    /// A `requestAnimationFrame` loop that can be halted.
    ///
    /// The step receives the frame timestamp in milliseconds. Dropping the
    /// handle stops the loop and releases the callback.
    pub struct FrameLoop {
        core: Rc<LoopCore<RafScheduler>>,
    }

    impl FrameLoop {
        pub fn start(name: &'static str, mut step: impl FnMut(f64) + 'static) -> Self {
            let core = Rc::new(LoopCore::new(name, RafScheduler::default()));
            let weak: Weak<LoopCore<RafScheduler>> = Rc::downgrade(&core);
            let closure = Closure::wrap(Box::new(move |ts: f64| {
                if let Some(core) = weak.upgrade() {
                    core.on_frame(ts, &mut step);
                }
            }) as Box<dyn FnMut(f64)>);
            *core.scheduler().tick.borrow_mut() = Some(closure);
            core.begin();
            log::info!("[{}] frame loop started", name);
            Self { core }
        }

        pub fn is_running(&self) -> bool {
            self.core.is_running()
        }
    }
}
