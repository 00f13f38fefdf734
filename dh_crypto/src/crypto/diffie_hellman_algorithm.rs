use crate::crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
use crate::error::{DhError, DhResult};
use crate::number_theory::{mod_pow, random_below};
use hex_literal::hex;
use log::debug;
use num_bigint::BigUint;
use num_integer::Integer;
use num_traits::One;
use rand::RngCore;

/// 2048-bit MODP group 14 prime from RFC 3526.
const RFC3526_GROUP14_P: [u8; 256] = hex!("FFFFFFFFFFFFFFFFC90FDAA22168C234C4C6628B80DC1CD129024E088A67CC74020BBEA63B139B22514A08798E3404DDEF9519B3CD3A431B302B0A6DF25F14374FE1356D6D51C245E485B576625E7EC6F44C42E9A637ED6B0BFF5CB6F406B7EDEE386BFB5A899FA5AE9F24117C4B1FE649286651ECE45B3DC2007CB8A163BF0598DA48361C55D39A69163FA8FD24CF5F83655D23DCA3AD961C62F356208552BB9ED529077096966D670C354E4ABC9804F1746C08CA18217C32905E462E36CE3BE39E772C180E86039B2783A2EC07A28FB5C55DF06F4C52C9DE2BCBF6955817183995497CEA956AE515D2261898FA051015728E5A8AACAA68FFFFFFFFFFFFFFFF");

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DhParameters {
    pub p: BigUint,
    pub g: BigUint,
}

impl DhParameters {
    pub fn rfc3526_group14() -> Self {
        Self {
            p: BigUint::from_bytes_be(&RFC3526_GROUP14_P),
            g: BigUint::from(2u32),
        }
    }
}

pub struct DiffieHellman {
    params: DhParameters,
}

impl DiffieHellman {
    pub fn params(&self) -> &DhParameters {
        &self.params
    }
}

impl KeyExchangeAlgorithm for DiffieHellman {
    type Parameters = DhParameters;
    type SharedSecret = BigUint;

    fn new(params: Self::Parameters) -> DhResult<Self> {
        if params.p <= BigUint::from(3u32) {
            return Err(DhError::InvalidParameters("p must be greater than 3"));
        }
        if params.p.is_even() {
            return Err(DhError::InvalidParameters("p must be odd"));
        }
        if params.g <= BigUint::one() || params.g >= &params.p - 1u32 {
            return Err(DhError::InvalidParameters("g must lie in (1, p - 1)"));
        }
        debug!("Diffie-Hellman context over a {}-bit prime", params.p.bits());
        Ok(Self { params })
    }

    /// Private scalar in `[1, p - 2]`, public value `g^private mod p`.
    fn generate_keypair(&self, rng: &mut impl RngCore) -> DhResult<KeyPair> {
        let p = &self.params.p;
        let private_key = random_below(rng, &(p - 2u32))? + 1u32;
        let public_key = mod_pow(&self.params.g, &private_key, p);
        Ok(KeyPair {
            private_key,
            public_key,
        })
    }

    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> DhResult<Self::SharedSecret> {
        let p = &self.params.p;
        let p_minus_1 = p - 1u32;

        if *own_private_key < BigUint::one() || *own_private_key >= p_minus_1 {
            return Err(DhError::InvalidKey("own private key is outside [1, p - 2]"));
        }
        if *other_public_key <= BigUint::one() || *other_public_key >= p_minus_1 {
            return Err(DhError::InvalidKey("peer public key is outside [2, p - 2]"));
        }

        Ok(mod_pow(other_public_key, own_private_key, p))
    }
}
