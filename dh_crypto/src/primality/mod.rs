pub(crate) mod miller_rabin;
pub use miller_rabin::MillerRabinTest;

use crate::error::DhResult;
use num_bigint::BigUint;
use num_traits::ToPrimitive;
use rand::RngCore;

const SMALL_PRIMES: [u32; 54] = [
    2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83, 89,
    97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181, 191,
    193, 197, 199, 211, 223, 227, 229, 233, 239, 241, 251,
];

/// Probabilistic primality test. Implementors provide one randomized round;
/// small inputs and small factors are settled by trial division first.
pub trait PrimalityTest {
    fn rounds(&self) -> usize;

    fn is_probably_prime(&self, n: &BigUint, rng: &mut impl RngCore) -> DhResult<bool> {
        if let Some(verdict) = trial_division(n) {
            return Ok(verdict);
        }
        for _ in 0..self.rounds() {
            if !self.run_iteration(n, rng)? {
                return Ok(false);
            }
        }
        Ok(true)
    }

    /// One round on an odd `n` with no factor below 256.
    fn run_iteration(&self, n: &BigUint, rng: &mut impl RngCore) -> DhResult<bool>;
}

/// `Some(verdict)` when small primes alone decide `n`.
fn trial_division(n: &BigUint) -> Option<bool> {
    if let Some(small) = n.to_u32() {
        if small < 2 {
            return Some(false);
        }
        if SMALL_PRIMES.contains(&small) {
            return Some(true);
        }
    }
    if SMALL_PRIMES.iter().any(|&p| (n % p).to_u32() == Some(0)) {
        return Some(false);
    }
    // No factor below 256 means any n under 256^2 is prime.
    if n.to_u32().is_some_and(|small| small < 256 * 256) {
        return Some(true);
    }
    None
}
