use crate::crypto::error::{CipherError, CipherResult};
use rand::TryRngCore;
use rand::rngs::OsRng;

/// Source of secure random bytes for IVs, RD deltas and ISO 10126 padding.
///
/// Failure is reported, never papered over with a deterministic fallback.
pub trait EntropySource: Send + Sync {
    fn try_fill(&self, dest: &mut [u8]) -> CipherResult<()>;
}

/// Operating-system CSPRNG.
#[derive(Clone, Copy, Debug, Default)]
pub struct OsEntropy;

impl EntropySource for OsEntropy {
    fn try_fill(&self, dest: &mut [u8]) -> CipherResult<()> {
        let mut rng = OsRng;
        rng.try_fill_bytes(dest)
            .map_err(|e| CipherError::RandomnessUnavailable(e.to_string()))
    }
}

pub fn random_bytes(source: &dyn EntropySource, len: usize) -> CipherResult<Vec<u8>> {
    let mut buf = vec![0u8; len];
    source.try_fill(&mut buf)?;
    Ok(buf)
}
