//! RNG trait abstraction for the simulation
//!
//! Allows World to work with both:
//! - Rust's thread_rng() or a seeded Xoshiro RNG (normal runs)
//! - ScriptedRng, whose outcomes are fixed (tests forcing rare events)

/// Random number generator trait for the simulation
pub trait SimRng {
    /// Fair coin: true with 50% probability
    fn coin(&mut self) -> bool;

    /// Generate random f32 in [0.0, 1.0)
    fn gen_f32(&mut self) -> f32;

    /// Check if random value is less than probability threshold
    fn check_probability(&mut self, probability: f32) -> bool {
        self.gen_f32() < probability
    }

    /// Weighted coin: true with probability 1/n
    fn one_in(&mut self, n: u32) -> bool {
        n <= 1 || self.check_probability(1.0 / n as f32)
    }

    /// Uniform index in [0, len)
    fn pick_index(&mut self, len: usize) -> usize {
        if len == 0 {
            return 0;
        }
        ((self.gen_f32() * len as f32) as usize).min(len - 1)
    }

    /// Fisher-Yates shuffle driven by `pick_index`
    fn shuffle<T>(&mut self, items: &mut [T])
    where
        Self: Sized,
    {
        for i in (1..items.len()).rev() {
            let j = self.pick_index(i + 1);
            items.swap(i, j);
        }
    }
}

// Blanket implementation for any type implementing rand::Rng
// This covers both ThreadRng and the seeded Xoshiro256StarStar
impl<T: ?Sized + rand::Rng> SimRng for T {
    fn coin(&mut self) -> bool {
        rand::Rng::r#gen(self)
    }

    fn gen_f32(&mut self) -> f32 {
        rand::Rng::r#gen(self)
    }
}

/// Deterministic RNG whose coin and roll never change
///
/// `gen_f32` always returns `roll`, so `check_probability(p)` is true exactly
/// when `roll < p`.
#[derive(Debug, Clone, Copy)]
pub struct ScriptedRng {
    pub coin: bool,
    pub roll: f32,
}

impl ScriptedRng {
    pub fn new(coin: bool, roll: f32) -> Self {
        Self { coin, roll }
    }

    /// Every coin lands true and every probability check passes
    pub fn always() -> Self {
        Self::new(true, 0.0)
    }

    /// Every coin lands false and every probability check below 1 fails
    pub fn never() -> Self {
        Self::new(false, 0.999_999)
    }
}

impl SimRng for ScriptedRng {
    fn coin(&mut self) -> bool {
        self.coin
    }

    fn gen_f32(&mut self) -> f32 {
        self.roll
    }
}
