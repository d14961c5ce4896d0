//! Deterministic RNG using mulberry32.
//!
//! All generators MUST draw their randomness through this module so that a
//! seed maps to the same markup forever. One instance is built per call and
//! never shared.

use rand::{Error, RngCore, SeedableRng};

/// mulberry32: a 32-bit state advanced by a Weyl increment and two
/// xor-shift/multiply rounds.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Mulberry32 {
    state: u32,
}

impl Mulberry32 {
    const INCREMENT: u32 = 0x6D2B_79F5;

    /// Create a new RNG from a 32-bit state. A zero state is replaced with 1.
    pub fn new(state: u32) -> Self {
        Self {
            state: if state == 0 { 1 } else { state },
        }
    }

    /// Advance the state and return the next raw 32-bit output.
    #[inline]
    pub fn next_raw(&mut self) -> u32 {
        self.state = self.state.wrapping_add(Self::INCREMENT);
        let mut t = self.state;
        t = (t ^ (t >> 15)).wrapping_mul(t | 1);
        t ^= t.wrapping_add((t ^ (t >> 7)).wrapping_mul(t | 61));
        t ^ (t >> 14)
    }

    /// Next float in `[0, 1)`.
    #[inline]
    pub fn next_f64(&mut self) -> f64 {
        f64::from(self.next_raw()) / 4_294_967_296.0
    }

    /// Integer in `[min, max]`, inclusive. Returns `min` if `max < min`.
    pub fn int(&mut self, min: i32, max: i32) -> i32 {
        let roll = self.next_f64();
        if max <= min {
            return min;
        }
        let span = f64::from(max) - f64::from(min) + 1.0;
        let offset = (roll * span).floor() as i64;
        (i64::from(min) + offset).min(i64::from(max)) as i32
    }

    /// Float in `[min, max)`.
    pub fn float(&mut self, min: f64, max: f64) -> f64 {
        min + self.next_f64() * (max - min)
    }

    /// Index in `[0, len)`. Consumes one draw even for `len <= 1`.
    pub fn index(&mut self, len: usize) -> usize {
        let roll = self.next_f64();
        if len == 0 {
            return 0;
        }
        ((roll * len as f64).floor() as usize).min(len - 1)
    }

    /// Pick one element of a slice.
    ///
    /// # Panics
    ///
    /// Panics if `items` is empty. Every catalog handed to this is a fixed,
    /// non-empty table.
    pub fn pick<'a, T>(&mut self, items: &'a [T]) -> &'a T {
        &items[self.index(items.len())]
    }

    /// True with the given probability.
    pub fn chance(&mut self, probability: f64) -> bool {
        self.next_f64() < probability
    }

    /// Uniform float in `[-1, 1)`.
    #[inline]
    pub fn signed(&mut self) -> f64 {
        self.next_f64() * 2.0 - 1.0
    }
}

impl RngCore for Mulberry32 {
    fn next_u32(&mut self) -> u32 {
        self.next_raw()
    }

    fn next_u64(&mut self) -> u64 {
        let low = u64::from(self.next_raw());
        let high = u64::from(self.next_raw());
        (high << 32) | low
    }

    fn fill_bytes(&mut self, dest: &mut [u8]) {
        for chunk in dest.chunks_mut(4) {
            let bytes = self.next_raw().to_le_bytes();
            chunk.copy_from_slice(&bytes[..chunk.len()]);
        }
    }

    fn try_fill_bytes(&mut self, dest: &mut [u8]) -> Result<(), Error> {
        self.fill_bytes(dest);
        Ok(())
    }
}

impl SeedableRng for Mulberry32 {
    type Seed = [u8; 4];

    fn from_seed(seed: Self::Seed) -> Self {
        Self::new(u32::from_le_bytes(seed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::Rng;

    #[test]
    fn test_golden_stream_seed_1() {
        let mut rng = Mulberry32::new(1);
        assert_eq!(rng.next_raw(), 2_693_262_067);
        assert_eq!(rng.next_raw(), 11_749_833);
        assert_eq!(rng.next_raw(), 2_265_367_787);
    }

    #[test]
    fn test_golden_stream_seed_42() {
        let mut rng = Mulberry32::new(42);
        assert_eq!(rng.next_raw(), 2_581_720_956);
        assert_eq!(rng.next_raw(), 1_925_393_290);
        assert_eq!(rng.next_raw(), 3_661_312_704);
    }

    #[test]
    fn test_zero_state_matches_one() {
        let mut zero = Mulberry32::new(0);
        let mut one = Mulberry32::new(1);
        for _ in 0..16 {
            assert_eq!(zero.next_raw(), one.next_raw());
        }
    }

    #[test]
    fn test_deterministic_output() {
        let mut rng1 = Mulberry32::new(42);
        let mut rng2 = Mulberry32::new(42);

        for _ in 0..100 {
            assert_eq!(rng1.next_f64(), rng2.next_f64());
        }
    }

    #[test]
    fn test_draws_are_not_constant() {
        let mut rng = Mulberry32::new(1);
        let first = rng.next_f64();
        assert!((0..10).any(|_| rng.next_f64() != first));
    }

    #[test]
    fn test_int_is_inclusive_and_bounded() {
        let mut rng = Mulberry32::new(7);
        let mut seen = [false; 4];
        for _ in 0..1_000 {
            let v = rng.int(2, 5);
            assert!((2..=5).contains(&v));
            seen[(v - 2) as usize] = true;
        }
        assert!(seen.iter().all(|s| *s));
    }

    #[test]
    fn test_degenerate_ranges() {
        let mut rng = Mulberry32::new(9);
        assert_eq!(rng.int(3, 3), 3);
        assert_eq!(rng.int(5, 1), 5);
        assert_eq!(rng.float(2.0, 2.0), 2.0);
        assert_eq!(rng.index(0), 0);
    }

    #[test]
    fn test_float_in_range() {
        let mut rng = Mulberry32::new(11);
        for _ in 0..1_000 {
            let v = rng.float(-3.0, 4.5);
            assert!((-3.0..4.5).contains(&v));
        }
    }

    #[test]
    fn test_pick_consumes_one_draw() {
        let mut a = Mulberry32::new(5);
        let mut b = Mulberry32::new(5);
        a.pick(&[1]);
        b.next_raw();
        assert_eq!(a, b);
    }

    #[test]
    fn test_works_as_rand_rng() {
        let mut rng = Mulberry32::from_seed(42u32.to_le_bytes());
        let v: u32 = rng.gen_range(0..10);
        assert!(v < 10);
        assert_eq!(Mulberry32::from_seed(1u32.to_le_bytes()).next_u32(), 2_693_262_067);
    }
}
