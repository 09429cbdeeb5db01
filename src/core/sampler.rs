use crate::core::rng::Rng;

/// Source of uniform reals in `[0, 1)`.
pub trait Sampler {
    fn uniform_1d(&mut self) -> f64;
}

impl Sampler for Rng {
    fn uniform_1d(&mut self) -> f64 {
        Rng::uniform_1d(self)
    }
}

/// Replays a fixed sequence of draws, cycling when exhausted.
#[cfg(test)]
pub struct FixedSampler {
    values: Vec<f64>,
    index: usize,
}

#[cfg(test)]
impl FixedSampler {
    pub fn new(values: Vec<f64>) -> Self {
        assert!(!values.is_empty());
        Self { values, index: 0 }
    }
}

#[cfg(test)]
impl Sampler for FixedSampler {
    fn uniform_1d(&mut self) -> f64 {
        let value = self.values[self.index];
        self.index = (self.index + 1) % self.values.len();
        value
    }
}
