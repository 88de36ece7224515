//! Fake coordinate transforms with predictable behavior.

use std::sync::atomic::{AtomicUsize, Ordering};

use projection::CoordinateTransform;

/// Identity transform with per-point overrides.
///
/// Used to place out-of-domain results (infinite components) at known
/// grid positions.
#[derive(Debug, Clone, Default)]
pub struct ScriptedTransform {
    overrides: Vec<((f64, f64), (f64, f64))>,
}

impl ScriptedTransform {
    pub fn new() -> Self {
        Self::default()
    }

    /// Return `output` whenever the input is exactly `input`.
    pub fn with_output(mut self, input: (f64, f64), output: (f64, f64)) -> Self {
        self.overrides.push((input, output));
        self
    }
}

impl CoordinateTransform for ScriptedTransform {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        self.overrides
            .iter()
            .find(|(input, _)| *input == (x, y))
            .map(|(_, output)| *output)
            .unwrap_or((x, y))
    }
}

/// Wraps another transform and counts `apply` calls.
#[derive(Debug, Default)]
pub struct CountingTransform<T> {
    inner: T,
    calls: AtomicUsize,
}

impl<T> CountingTransform<T> {
    pub fn new(inner: T) -> Self {
        Self {
            inner,
            calls: AtomicUsize::new(0),
        }
    }

    pub fn calls(&self) -> usize {
        self.calls.load(Ordering::SeqCst)
    }
}

impl<T: CoordinateTransform> CoordinateTransform for CountingTransform<T> {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        self.calls.fetch_add(1, Ordering::SeqCst);
        self.inner.apply(x, y)
    }
}

/// Shifts every point by a fixed offset.
#[derive(Debug, Clone, Copy)]
pub struct OffsetTransform {
    pub dx: f64,
    pub dy: f64,
}

impl CoordinateTransform for OffsetTransform {
    fn apply(&self, x: f64, y: f64) -> (f64, f64) {
        (x + self.dx, y + self.dy)
    }
}
