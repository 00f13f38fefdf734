use crate::error::{DhError, DhResult};
use num_bigint::BigUint;
use num_traits::{One, Zero};
use rand::RngCore;

/// Square-and-multiply: `base^exponent mod modulus`, scanning the exponent
/// from its most significant bit. A modulus of 0 or 1 yields zero.
pub fn mod_pow(base: &BigUint, exponent: &BigUint, modulus: &BigUint) -> BigUint {
    if modulus.is_zero() || modulus.is_one() {
        return BigUint::zero();
    }
    let base = base % modulus;
    let mut result = BigUint::one();

    for i in (0..exponent.bits()).rev() {
        result = &result * &result % modulus;
        if exponent.bit(i) {
            result = result * &base % modulus;
        }
    }
    result
}

/// Integer of at most `bits` bits drawn from `rng`.
pub fn random_bits(rng: &mut impl RngCore, bits: u64) -> DhResult<BigUint> {
    let len = bits.div_ceil(8) as usize;
    let mut bytes = vec![0u8; len];
    rng.try_fill_bytes(&mut bytes)
        .map_err(|e| DhError::RandomnessUnavailable(e.to_string()))?;
    let excess = (len as u64 * 8 - bits) as u32;
    if let Some(top) = bytes.first_mut() {
        *top &= 0xFF >> excess;
    }
    Ok(BigUint::from_bytes_be(&bytes))
}

/// Integer in `[0, bound)`. 64 extra bits keep the modulo bias negligible.
pub fn random_below(rng: &mut impl RngCore, bound: &BigUint) -> DhResult<BigUint> {
    if bound.is_zero() {
        return Err(DhError::InvalidParameters("empty sampling range"));
    }
    Ok(random_bits(rng, bound.bits() + 64)? % bound)
}
