use crate::error::DhResult;
use num_bigint::BigUint;
use rand::RngCore;

#[derive(Debug, Clone)]
pub struct KeyPair {
    pub private_key: BigUint,
    pub public_key: BigUint,
}

pub trait KeyExchangeAlgorithm: Sized {
    type Parameters;
    type SharedSecret;

    fn new(params: Self::Parameters) -> DhResult<Self>;
    fn generate_keypair(&self, rng: &mut impl RngCore) -> DhResult<KeyPair>;
    fn compute_shared_secret(
        &self,
        own_private_key: &BigUint,
        other_public_key: &BigUint,
    ) -> DhResult<Self::SharedSecret>;
}
