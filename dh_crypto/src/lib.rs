pub mod crypto;
pub mod error;
pub mod number_theory;
pub mod primality;

pub use crypto::diffie_hellman_algorithm::{DhParameters, DiffieHellman};
pub use crypto::key_exchange_traits::{KeyExchangeAlgorithm, KeyPair};
pub use crypto::parameters::{
    ParameterGenerator, find_generator, generate_parameters, generate_safe_parameters,
    shared_secret_to_key,
};
pub use error::{DhError, DhResult};
