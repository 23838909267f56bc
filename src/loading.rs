use crate::constants::*;

#[derive(Clone, Debug)]
pub struct LoadingParams {
    pub duration_ms: f32,
    pub tick_ms: i32,
    pub grace_ms: i32,
}

impl Default for LoadingParams {
    fn default() -> Self {
        Self {
            duration_ms: LOADING_DURATION_MS,
            tick_ms: LOADING_TICK_MS,
            grace_ms: LOADING_GRACE_MS,
        }
    }
}

impl LoadingParams {
    /// Percentage added per tick so that 100 is reached after `duration_ms`.
    pub fn increment(&self) -> f32 {
        let steps = self.duration_ms / self.tick_ms.max(1) as f32;
        100.0 / steps.max(1.0)
    }
}

/// What a single tick produced, ready to be written to the progress bar.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LoadingTick {
    /// Clamped percentage in `[0, 100]`.
    pub percent: f32,
    /// `percent` rounded for the label.
    pub label: u32,
    /// True on the single tick that reached 100.
    pub completed: bool,
}

/// Fake progress shown while the page settles: a fixed increment per tick,
/// clamped at 100, completing exactly once.
#[derive(Clone, Debug)]
pub struct LoadingProgress {
    raw: f32,
    increment: f32,
    done: bool,
}

impl LoadingProgress {
    pub fn new(params: &LoadingParams) -> Self {
        Self {
            raw: 0.0,
            increment: params.increment(),
            done: false,
        }
    }

    #[cfg(test)]
    pub fn percent(&self) -> f32 {
        self.raw.min(100.0)
    }

    #[cfg(test)]
    pub fn is_done(&self) -> bool {
        self.done
    }

    /// Advance by one tick. After completion further ticks are inert.
    pub fn tick(&mut self) -> LoadingTick {
        if self.done {
            return LoadingTick {
                percent: 100.0,
                label: 100,
                completed: false,
            };
        }
        self.raw += self.increment;
        let percent = self.percent();
        let completed = percent >= 100.0;
        self.done = completed;
        LoadingTick {
            percent,
            label: percent.round() as u32,
            completed,
        }
    }
}
