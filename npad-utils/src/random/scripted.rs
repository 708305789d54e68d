//! A random source that replays a fixed list of samples.

use crate::random::RandomSource;

/// Replays a predetermined sequence of samples, starting over once exhausted.
///
/// An empty script yields `T::default()` forever.
#[derive(Debug, Clone, PartialEq)]
pub struct ScriptedSource<T> {
    samples: Vec<T>,
    cursor: usize,
    drawn: usize,
}

impl<T> ScriptedSource<T> {
    /// Creates a source replaying `samples` in order.
    #[must_use]
    pub fn new(samples: impl Into<Vec<T>>) -> Self {
        Self {
            samples: samples.into(),
            cursor: 0,
            drawn: 0,
        }
    }

    /// Number of samples drawn so far.
    #[must_use]
    pub const fn drawn(&self) -> usize {
        self.drawn
    }
}

impl<T: Copy + Default> RandomSource<T> for ScriptedSource<T> {
    fn next_sample(&mut self) -> T {
        self.drawn += 1;
        let Some(&value) = self.samples.get(self.cursor) else {
            return T::default();
        };
        self.cursor = (self.cursor + 1) % self.samples.len();
        value
    }
}
