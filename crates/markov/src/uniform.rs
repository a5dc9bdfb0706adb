//! Uniform random sources driving the sampler.

/// A source of uniform draws in `[0, 1)`.
///
/// Every [`rand::Rng`] is a source, so seeded generators such as
/// `StdRng` plug in directly. [`FixedUniform`] and [`ScriptedUniform`]
/// produce predetermined draws.
pub trait UniformSource {
    /// Returns the next draw in `[0, 1)`.
    fn next_uniform(&mut self) -> f64;
}

impl<R: rand::Rng> UniformSource for R {
    fn next_uniform(&mut self) -> f64 {
        self.random()
    }
}

/// A source that returns the same value on every draw.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FixedUniform(pub f64);

impl UniformSource for FixedUniform {
    fn next_uniform(&mut self) -> f64 {
        self.0
    }
}

/// A source that cycles through a fixed list of values.
#[derive(Debug, Clone)]
pub struct ScriptedUniform {
    values: Vec<f64>,
    pos: usize,
}

impl ScriptedUniform {
    /// Creates a source yielding `values` in order, wrapping around at the end.
    ///
    /// # Panics
    ///
    /// Panics if `values` is empty.
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty(), "scripted source needs at least one value");
        Self { values, pos: 0 }
    }
}

impl UniformSource for ScriptedUniform {
    fn next_uniform(&mut self) -> f64 {
        let u = self.values[self.pos];
        self.pos = (self.pos + 1) % self.values.len();
        u
    }
}
