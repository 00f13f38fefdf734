use crate::crypto::diffie_hellman_algorithm::DhParameters;
use crate::error::{DhError, DhResult};
use crate::number_theory::{mod_pow, random_bits};
use crate::primality::{MillerRabinTest, PrimalityTest};
use log::{debug, trace};
use num_bigint::BigUint;
use num_traits::One;
use rand::RngCore;

pub const MIN_PRIME_BITS: u64 = 16;
pub const MAX_PRIME_BITS: u64 = 8192;

const GENERATOR_CANDIDATES: [u32; 5] = [2, 3, 5, 7, 11];

/// Prime and generator search with a configurable Miller-Rabin round count.
#[derive(Clone, Copy, Debug, Default)]
pub struct ParameterGenerator {
    primality: MillerRabinTest,
}

impl ParameterGenerator {
    pub fn new(rounds: usize) -> Self {
        Self {
            primality: MillerRabinTest::new(rounds),
        }
    }

    /// Random probable prime of exactly `bits` bits plus the first small
    /// candidate passing [`find_generator`].
    pub fn generate(&self, bits: u64, rng: &mut impl RngCore) -> DhResult<DhParameters> {
        check_bits(bits)?;
        let p = self.probable_prime(bits, rng)?;
        let g = find_generator(&p)?;
        debug!("generated {bits}-bit DH parameters with g = {g}");
        Ok(DhParameters { p, g })
    }

    /// Safe prime `p = 2q + 1` and a generator of the full group `Z_p^*`.
    pub fn generate_safe(&self, bits: u64, rng: &mut impl RngCore) -> DhResult<DhParameters> {
        check_bits(bits)?;
        let mut attempts = 0u64;
        let (p, q) = loop {
            attempts += 1;
            let q = odd_candidate(bits - 1, rng)?;
            if !self.primality.is_probably_prime(&q, rng)? {
                continue;
            }
            let p: BigUint = (&q << 1u32) + 1u32;
            if self.primality.is_probably_prime(&p, rng)? {
                break (p, q);
            }
        };
        trace!("safe prime found after {attempts} candidates");

        // Z_p^* has order 2q, so g generates it iff g^2 != 1 and g^q != 1.
        let one = BigUint::one();
        let two = BigUint::from(2u32);
        let mut g = two.clone();
        let p_minus_1 = &p - 1u32;
        while g < p_minus_1 {
            if mod_pow(&g, &two, &p) != one && mod_pow(&g, &q, &p) != one {
                debug!("generated {bits}-bit safe-prime DH parameters with g = {g}");
                return Ok(DhParameters { p, g });
            }
            g += 1u32;
        }
        Err(DhError::NoPrimitiveRootFound)
    }

    fn probable_prime(&self, bits: u64, rng: &mut impl RngCore) -> DhResult<BigUint> {
        let mut attempts = 0u64;
        loop {
            attempts += 1;
            let candidate = odd_candidate(bits, rng)?;
            if self.primality.is_probably_prime(&candidate, rng)? {
                trace!("probable prime found after {attempts} candidates");
                return Ok(candidate);
            }
        }
    }
}

pub fn generate_parameters(bits: u64, rng: &mut impl RngCore) -> DhResult<DhParameters> {
    ParameterGenerator::default().generate(bits, rng)
}

pub fn generate_safe_parameters(bits: u64, rng: &mut impl RngCore) -> DhResult<DhParameters> {
    ParameterGenerator::default().generate_safe(bits, rng)
}

/// First of 2, 3, 5, 7, 11 with `g^(p-1) = 1 mod p`.
///
/// This is only Fermat's condition: it does not prove that `g` generates the
/// whole group. Use [`generate_safe_parameters`] when that matters.
pub fn find_generator(p: &BigUint) -> DhResult<BigUint> {
    let one = BigUint::one();
    if *p <= one {
        return Err(DhError::InvalidParameters("p must be greater than 1"));
    }
    let p_minus_1 = p - 1u32;
    GENERATOR_CANDIDATES
        .into_iter()
        .map(BigUint::from)
        .find(|g| mod_pow(g, &p_minus_1, p) == one)
        .ok_or(DhError::NoPrimitiveRootFound)
}

/// Big-endian bytes of the shared secret, left-padded with zeros or cut to
/// the first `len` bytes. No key derivation is applied.
pub fn shared_secret_to_key(secret: &BigUint, len: usize) -> Vec<u8> {
    let bytes = secret.to_bytes_be();
    if bytes.len() >= len {
        return bytes[..len].to_vec();
    }
    let mut key = vec![0u8; len - bytes.len()];
    key.extend(bytes);
    key
}

fn check_bits(bits: u64) -> DhResult<()> {
    if !(MIN_PRIME_BITS..=MAX_PRIME_BITS).contains(&bits) {
        return Err(DhError::InvalidBitLength(bits));
    }
    Ok(())
}

/// Random odd integer with the top bit set, so it has exactly `bits` bits.
fn odd_candidate(bits: u64, rng: &mut impl RngCore) -> DhResult<BigUint> {
    let mut candidate = random_bits(rng, bits)?;
    candidate.set_bit(bits - 1, true);
    candidate.set_bit(0, true);
    Ok(candidate)
}
