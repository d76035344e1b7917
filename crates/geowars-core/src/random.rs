//! Abstract uniform random source consumed by the spawner.

use rand::Rng;

/// Uniform random numbers. Construct one per run, seed it once, and pass it
/// down explicitly; never per call.
pub trait RandomSource {
    /// Uniform float in `[lo, hi)`. Returns `lo` for an empty range.
    fn uniform_float(&mut self, lo: f32, hi: f32) -> f32;

    /// Uniform integer in `[lo, hi]`. Returns `lo` when `hi < lo`.
    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64;
}

impl<R: Rng + ?Sized> RandomSource for R {
    fn uniform_float(&mut self, lo: f32, hi: f32) -> f32 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..hi)
    }

    fn uniform_int(&mut self, lo: i64, hi: i64) -> i64 {
        if hi <= lo {
            return lo;
        }
        self.gen_range(lo..=hi)
    }
}
