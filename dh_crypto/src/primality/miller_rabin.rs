use crate::error::DhResult;
use crate::number_theory::{mod_pow, random_below};
use crate::primality::PrimalityTest;
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

pub const DEFAULT_ROUNDS: usize = 20;

/// Miller-Rabin with a fresh random witness per round.
#[derive(Clone, Copy, Debug)]
pub struct MillerRabinTest {
    pub rounds: usize,
}

impl MillerRabinTest {
    pub fn new(rounds: usize) -> Self {
        Self { rounds }
    }
}

impl Default for MillerRabinTest {
    fn default() -> Self {
        Self::new(DEFAULT_ROUNDS)
    }
}

impl PrimalityTest for MillerRabinTest {
    fn rounds(&self) -> usize {
        self.rounds
    }

    fn run_iteration(&self, n: &BigUint, rng: &mut impl RngCore) -> DhResult<bool> {
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let n_minus_1 = n - &one;

        // n - 1 = d * 2^s with d odd
        let s = n_minus_1.trailing_zeros().unwrap_or(0);
        let d = &n_minus_1 >> s;

        // witness a in [2, n - 2]
        let a = random_below(rng, &(n - 3u32))? + &two;
        let mut x = mod_pow(&a, &d, n);
        if x == one || x == n_minus_1 {
            return Ok(true);
        }

        for _ in 1..s {
            x = mod_pow(&x, &two, n);
            if x == n_minus_1 {
                return Ok(true);
            }
            if x == one {
                return Ok(false);
            }
        }
        Ok(false)
    }
}
