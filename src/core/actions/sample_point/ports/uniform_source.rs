use rand::Rng;

/// Source of uniformly distributed reals.
pub trait UniformSource {
    /// A value drawn uniformly from `[low, high]`.
    fn next_uniform(&mut self, low: f64, high: f64) -> f64;
}

/// Adapts any [`rand::Rng`] into a [`UniformSource`].
#[derive(Debug, Clone)]
pub struct RngSource<R: Rng> {
    rng: R,
}

impl<R: Rng> RngSource<R> {
    pub fn new(rng: R) -> Self {
        Self { rng }
    }

    pub fn into_inner(self) -> R {
        self.rng
    }
}

impl<R: Rng> UniformSource for RngSource<R> {
    #[inline]
    fn next_uniform(&mut self, low: f64, high: f64) -> f64 {
        self.rng.gen_range(low..=high)
    }
}
