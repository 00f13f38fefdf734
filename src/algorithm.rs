use mars::Mars;
use rc5::Rc5;
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;
use symmetric_cipher::crypto::cipher_traits::SymmetricCipher;
use symmetric_cipher::crypto::error::{CipherError, CipherResult};

const RC5_KEY_BYTES: usize = 16;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Algorithm {
    Rc5,
    Mars,
}

impl Algorithm {
    pub const ALL: [Algorithm; 2] = [Algorithm::Rc5, Algorithm::Mars];

    pub fn token(&self) -> &'static str {
        match self {
            Algorithm::Rc5 => "RC5",
            Algorithm::Mars => "MARS",
        }
    }

    /// Turns raw key material into this cipher's key. RC5 keeps the first 16
    /// bytes, MARS takes the material as is. No derivation function is applied.
    pub fn key_from_material<'a>(&self, material: &'a [u8]) -> &'a [u8] {
        match self {
            Algorithm::Rc5 => &material[..material.len().min(RC5_KEY_BYTES)],
            Algorithm::Mars => material,
        }
    }

    pub fn build_cipher(&self, key: &[u8]) -> CipherResult<Arc<dyn SymmetricCipher>> {
        Ok(match self {
            Algorithm::Rc5 => Arc::new(Rc5::new(key)?),
            Algorithm::Mars => Arc::new(Mars::new(key)?),
        })
    }
}

impl fmt::Display for Algorithm {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for Algorithm {
    type Err = CipherError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Algorithm::ALL
            .into_iter()
            .find(|algorithm| algorithm.token().eq_ignore_ascii_case(s))
            .ok_or_else(|| CipherError::UnsupportedAlgorithm(s.to_string()))
    }
}
