//! Progress observer for long-running matrix operations
//!
//! Progress is a side channel only: observers receive a completion fraction
//! and have no way to influence the computation.

/// Receives coarse-grained completion reports
pub trait ProgressObserver {
    /// Called with a completion fraction in `[0.0, 1.0]`
    fn on_progress(&mut self, fraction: f64);

    /// Upper bound on intermediate reports per operation
    ///
    /// A final `1.0` report is always delivered on success in addition to
    /// these.
    fn report_steps(&self) -> u32 {
        100
    }
}

/// Observer that discards every report
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct NoProgress;

impl ProgressObserver for NoProgress {
    #[inline]
    fn on_progress(&mut self, _fraction: f64) {}

    fn report_steps(&self) -> u32 {
        0
    }
}

impl<F: FnMut(f64)> ProgressObserver for F {
    fn on_progress(&mut self, fraction: f64) {
        self(fraction)
    }
}

/// Throttles work-unit ticks into at most `report_steps` observer calls
pub(crate) struct ProgressTicker<'a, O: ProgressObserver + ?Sized> {
    observer: &'a mut O,
    total: usize,
    stride: usize,
    next: usize,
}

impl<'a, O: ProgressObserver + ?Sized> ProgressTicker<'a, O> {
    pub(crate) fn new(observer: &'a mut O, total: usize) -> Self {
        let steps = observer.report_steps() as usize;
        let (stride, next) = if steps == 0 {
            (usize::MAX, usize::MAX)
        } else {
            let stride = (total / steps).max(1);
            (stride, stride)
        };
        Self {
            observer,
            total,
            stride,
            next,
        }
    }

    /// Record that `done` of `total` work units have completed
    #[inline]
    pub(crate) fn tick(&mut self, done: usize) {
        if done >= self.next && done < self.total {
            self.observer.on_progress(done as f64 / self.total as f64);
            self.next = done.saturating_add(self.stride);
        }
    }

    pub(crate) fn finish(self) {
        self.observer.on_progress(1.0);
    }
}
